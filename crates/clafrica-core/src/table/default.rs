//! Embedded default Clafrica map.
//!
//! Trailing symbol picks the diacritic (`-` macron, `%` acute, `?` grave,
//! `>` circumflex, `<` caron, `~` tilde, `"` diaeresis); a `z` suffix
//! selects the African letter variant (`az` → ɑ); letter and tone codes
//! compose (`az%` → ɑ́). The compound codes are what give the table its
//! prefix ambiguities: `az` is both a full code and a strict prefix of
//! `az%`, so streaming mode must hold off on it until the word ends.

pub const DEFAULT_TOML: &str = include_str!("default_map.toml");
