//! Text escaping for plain (non-raw) text nodes.

/// Escape markup-significant characters in a piece of plain text.
///
/// Angle brackets always become `&lt;` / `&gt;`. An ampersand is kept as-is
/// only when it opens a valid character entity (`&name;` with one or more
/// alphanumerics, or `&#digits;`), so text that already contains entities is
/// not double-escaped; every other ampersand becomes `&amp;`.
pub fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let bytes = text.as_bytes();

    for (index, character) in text.char_indices() {
        match character {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '&' if !opens_entity(&bytes[index + 1..]) => output.push_str("&amp;"),
            other => output.push(other),
        }
    }

    output
}

fn opens_entity(rest: &[u8]) -> bool {
    let (rest, numeric) = match rest.first() {
        Some(b'#') => (&rest[1..], true),
        _ => (rest, false),
    };

    let length = rest
        .iter()
        .take_while(|byte| {
            if numeric {
                byte.is_ascii_digit()
            } else {
                byte.is_ascii_alphanumeric()
            }
        })
        .count();

    length > 0 && rest.get(length) == Some(&b';')
}
