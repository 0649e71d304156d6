// Word tokenization.
//
// A token is a whitespace-delimited chunk of text, lowercased, with every
// character that isn't an ASCII letter or digit removed. Chunks that end up
// empty (pure punctuation, emoji, etc.) are dropped.
//
// Separators are the Unicode space/line/paragraph separators except the
// no-break ones (U+00A0, U+2007, U+202F), plus \t \n \x0B \x0C \r and the
// information separators U+001C..=U+001F. U+0085 (NEL) does not split,
// unlike `char::is_whitespace`.

/// Lazily split `text` into normalized words, in order of appearance.
///
/// Duplicates are kept; counting happens in `build_frequency_map`.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(is_separator).filter_map(|raw| {
        let word = normalize(raw);
        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    })
}

/// Whether `c` separates tokens.
pub fn is_separator(c: char) -> bool {
    match c {
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// Lowercase a single raw chunk and strip non-alphanumeric ASCII.
///
/// Lowercasing happens first, so characters whose lowercase form is ASCII
/// (e.g. the Kelvin sign) survive the strip.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_strip() {
        let tokens: Vec<String> = tokenize("Hello, World! It's 2024.").collect();
        assert_eq!(tokens, vec!["hello", "world", "its", "2024"]);
    }

    #[test]
    fn test_punctuation_only_chunks_dropped() {
        let tokens: Vec<String> = tokenize("!!! ??? ... -- foo").collect();
        assert_eq!(tokens, vec!["foo"]);
    }

    #[test]
    fn test_any_whitespace_run_splits() {
        let tokens: Vec<String> = tokenize("  a\tb\n\nc \r\n d  ").collect();
        assert_eq!(tokens, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_hyphenated_words_join() {
        // Stripping happens inside the chunk, so the hyphen just disappears
        let tokens: Vec<String> = tokenize("well-known e-mail").collect();
        assert_eq!(tokens, vec!["wellknown", "email"]);
    }

    #[test]
    fn test_non_ascii_letters_removed() {
        let tokens: Vec<String> = tokenize("café naïve 日本").collect();
        assert_eq!(tokens, vec!["caf", "nave"]);
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        let tokens: Vec<String> = tokenize("the cat the hat").collect();
        assert_eq!(tokens, vec!["the", "cat", "the", "hat"]);
    }

    #[test]
    fn test_no_break_spaces_do_not_split() {
        let tokens: Vec<String> = tokenize("hello\u{A0}world 10\u{202F}000").collect();
        assert_eq!(tokens, vec!["helloworld", "10000"]);
        let tokens: Vec<String> = tokenize("figure\u{2007}space next\u{85}line").collect();
        assert_eq!(tokens, vec!["figurespace", "nextline"]);
    }

    #[test]
    fn test_information_separators_split() {
        let tokens: Vec<String> = tokenize("hello\u{1F}world\u{1C}again").collect();
        assert_eq!(tokens, vec!["hello", "world", "again"]);
    }

    #[test]
    fn test_unicode_spaces_split() {
        let tokens: Vec<String> = tokenize("one\u{3000}two\u{2028}three\u{2003}four").collect();
        assert_eq!(tokens, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("   \n\t ").count(), 0);
    }
}
