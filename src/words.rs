/// Whitespace as understood by `String.prototype.trim` and `\s` in web content,
/// which is what the word count has to agree with.
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Counts the segments left after trimming the text and splitting it on runs
/// of whitespace. An empty or whitespace-only text is one empty segment.
pub fn count_words(text: &str) -> usize {
    let trimmed = text.trim_matches(is_separator);

    let mut segments = 1;
    let mut in_gap = false;
    for c in trimmed.chars() {
        if is_separator(c) {
            if !in_gap {
                segments += 1;
                in_gap = true;
            }
        } else {
            in_gap = false;
        }
    }
    segments
}

/// Raw, untrimmed length in UTF-16 code units.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}
