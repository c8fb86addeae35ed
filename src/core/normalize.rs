use regex::Regex;
use std::sync::LazyLock;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?.!,]").expect("punctuation pattern is valid"));

static NUMBER_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(one|two|three|four|five|six|seven|eight|nine|ten)\b")
        .expect("number word pattern is valid")
});

fn number_word_digit(word: &str) -> &'static str {
    match word {
        "one" => "1",
        "two" => "2",
        "three" => "3",
        "four" => "4",
        "five" => "5",
        "six" => "6",
        "seven" => "7",
        "eight" => "8",
        "nine" => "9",
        _ => "10",
    }
}

/// Canonical form used for every transcript and entity name comparison:
/// lowercase, without `?.!,`, trimmed, with the number words one..ten
/// turned into digits.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let stripped = PUNCTUATION.replace_all(&lowered, "");
    NUMBER_WORDS
        .replace_all(stripped.trim(), |caps: &regex::Captures| {
            number_word_digit(&caps[1]).to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("  Where is Vehicle A?! "), "where is vehicle a");
        assert_eq!(normalize("Assign Sam, to vehicle B."), "assign sam to vehicle b");
    }

    #[test]
    fn test_number_words_become_digits() {
        assert_eq!(normalize("vehicle one"), "vehicle 1");
        assert_eq!(normalize("Vehicle Ten and vehicle two"), "vehicle 10 and vehicle 2");
    }

    #[test]
    fn test_number_words_only_match_whole_words() {
        assert_eq!(normalize("someone"), "someone");
        assert_eq!(normalize("tonight at seventeen"), "tonight at seventeen");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" ?! "), "");
    }
}
