use crate::table::ReplacementTable;

/// Rewrite a single token by repeatedly consuming the longest code that
/// matches at the scan position. Characters that start no known code pass
/// through literally, so plain text and codes coexist in one field.
///
/// `allow_partial_at_end` is the streaming-mode guard: a code that matches
/// at the very end of the token but is also a strict prefix of a longer
/// code is left alone, together with the rest of the token, so the longer
/// code stays typeable. Boundary commits pass `false`; once the word is
/// done there is nothing left to extend.
pub fn match_token(table: &ReplacementTable, token: &str, allow_partial_at_end: bool) -> String {
    if table.max_key_len() == 0 {
        return token.to_string();
    }

    let chars: Vec<char> = token.chars().collect();
    let mut out = String::with_capacity(token.len());
    let mut i = 0;

    'scan: while i < chars.len() {
        let max_len = table.max_key_len().min(chars.len() - i);
        for len in (1..=max_len).rev() {
            let chunk: String = chars[i..i + len].iter().collect();
            let Some(replacement) = table.get(&chunk) else {
                continue;
            };
            if allow_partial_at_end && i + len == chars.len() && table.is_prefix(&chunk) {
                // Still ambiguous with a longer code: emit the tail as-is
                // and let the next keystroke decide.
                out.extend(&chars[i..]);
                break 'scan;
            }
            out.push_str(replacement);
            i += len;
            continue 'scan;
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}
