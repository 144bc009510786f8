// src/utils/name.rs

use crate::models::quiz_result::MAX_NAME_LEN;

/// Title-cases every word: a cased letter following an uncased character is
/// put in title case, the cased letters after it are lower-cased. Uncased
/// characters (digits, punctuation, ideographs) end the word.
///
/// "kwame NKRUMAH" -> "Kwame Nkrumah", "o'neil" -> "O'Neil", "ßa" -> "Ssa".
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_is_cased = false;

    for c in input.chars() {
        if previous_is_cased {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(&mut out, c);
        }
        previous_is_cased = is_cased(c);
    }

    out
}

/// Display name as stored on a result record: title-cased, then cut to
/// `MAX_NAME_LEN` characters.
pub fn normalize_name(input: &str) -> String {
    title_case(input).chars().take(MAX_NAME_LEN).collect()
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || titlecase_digraph(c).is_some()
}

/// Titlecase forms that differ from the uppercase mapping of a single char.
fn titlecase_digraph(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}

/// Appends the title case of `c`. When the uppercase mapping expands to
/// several chars ("ß" -> "SS"), only the first stays upper-case.
fn push_titlecase(out: &mut String, c: char) {
    if let Some(t) = titlecase_digraph(c) {
        out.push(t);
        return;
    }

    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}
