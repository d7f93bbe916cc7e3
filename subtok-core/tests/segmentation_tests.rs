//! End-to-end segmentation scenarios

use subtok_core::{token_count, tokenize, truncate_to_max_tokens};

#[test]
fn test_sentences() {
    assert_eq!(tokenize("Hello, world!"), vec!["Hello", ",", " world", "!"]);
    assert_eq!(
        tokenize("It's Monday."),
        vec!["It", "'", "s", " Monday", "."]
    );
}

#[test]
fn test_abbreviations() {
    assert_eq!(tokenize("www"), vec!["www"]);
    assert_eq!(tokenize("http"), vec!["http"]);
    assert_eq!(tokenize("https"), vec!["https"]);
    assert_eq!(tokenize("HTTPS"), vec!["HTTPS"]);
    assert_eq!(tokenize("pdf"), vec!["pdf"]);
    assert_eq!(tokenize("RFP"), vec!["RFP"]);
}

#[test]
fn test_url_prefix() {
    assert_eq!(
        tokenize("https://www.png"),
        vec!["https", "://", "www", ".", "png"]
    );
}

#[test]
fn test_consonants() {
    assert_eq!(tokenize("bc"), vec!["bc"]);
    assert_eq!(tokenize("BC"), vec!["BC"]);
    assert_eq!(tokenize("bcdfgh"), vec!["bc", "df", "gh"]);
    assert_eq!(tokenize("BCDFGH"), vec!["BC", "DF", "GH"]);
}

#[test]
fn test_camel_and_pascal_case() {
    assert_eq!(
        tokenize("agencyStateName"),
        vec!["agency", "State", "Name"]
    );
    assert_eq!(
        tokenize("AgencyStateName"),
        vec!["Agency", "State", "Name"]
    );
}

#[test]
fn test_whitespace() {
    assert_eq!(tokenize("foo bar"), vec!["foo", " bar"]);
    assert_eq!(tokenize("a     b"), vec!["a", "     ", "b"]);
    assert_eq!(tokenize("\n\n\n\n\n"), vec!["\n\n\n\n\n"]);
    assert_eq!(
        tokenize("\n\n\t\t  \r\r"),
        vec!["\n\n", "\t\t", "  ", "\r\r"]
    );
    assert_eq!(
        tokenize("\u{000B}\u{000B}\u{000C}"),
        vec!["\u{000B}\u{000B}", "\u{000C}"]
    );
}

#[test]
fn test_json_snippet() {
    let json = r#"{"_index": "bid-data"}"#;
    let expected = vec!["{\"_", "index", "\":", " \"", "bid", "-", "data", "\"}"];
    assert_eq!(tokenize(json), expected);
    assert_eq!(tokenize(json).concat(), json);
}

#[test]
fn test_currency_and_numbers() {
    assert_eq!(tokenize("$12.52"), vec!["$", "1", "2", ".", "5", "2"]);
    assert_eq!(tokenize("123456"), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_long_words() {
    assert_eq!(tokenize("Aaaaaaaaaaa"), vec!["Aaaaaaaaa", "aa"]);
    assert_eq!(tokenize("aaaaaaaaaaa"), vec!["aaaaaaaaa", "aa"]);
    assert_eq!(tokenize("AAAAAAAAAAA"), vec!["AAAAAAAAA", "AA"]);
}

#[test]
fn test_repeated_special_characters() {
    for ch in ['-', '.', '=', '#', '_'] {
        let text = ch.to_string().repeat(18);
        let tokens = tokenize(&text);
        assert_eq!(tokens.len(), 2, "{ch}");
        assert_eq!(tokens[0].len(), 16, "{ch}");
        assert_eq!(tokens[1].len(), 2, "{ch}");
    }
    assert_eq!(tokenize("==##--"), vec!["==", "##", "--"]);
}

#[test]
fn test_repeated_special_long_run() {
    let text = "=".repeat(40);
    let lengths: Vec<usize> = tokenize(&text).iter().map(|t| t.len()).collect();
    assert_eq!(lengths, vec![16, 16, 8]);
}

#[test]
fn test_empty_pairs() {
    assert_eq!(tokenize("[]{}()"), vec!["[]", "{}", "()"]);
    assert_eq!(tokenize("f()"), vec!["f", "()"]);
}

#[test]
fn test_unicode_symbols() {
    assert_eq!(tokenize("©®♥"), vec!["©", "®", "♥"]);
}

#[test]
fn test_non_latin_chunks() {
    assert_eq!(tokenize("Привет мир"), vec!["Приве", "т", " мир"]);
    assert_eq!(tokenize("日本語のテキスト"), vec!["日本語のテ", "キスト"]);
}

#[test]
fn test_accented_words() {
    assert_eq!(tokenize("café crème"), vec!["café", " crème"]);
    assert_eq!(tokenize("Ñandú"), vec!["Ñandú"]);
}

#[test]
fn test_emoji_and_combining_marks() {
    let text = "ok 👍🏽 e\u{0301}";
    let tokens = tokenize(text);
    assert_eq!(tokens.concat(), text);
    assert!(tokens.iter().all(|t| !t.is_empty()));
    assert!(tokens.contains(&" 👍🏽"));
}

#[test]
fn test_line_separators_are_kept() {
    // U+2028 and U+2029 are covered by the catch-all, never dropped
    let text = "a\u{2028}b\u{2029}c";
    assert_eq!(tokenize(text).concat(), text);
}

#[test]
fn test_replacement_character() {
    let text = String::from_utf8_lossy(b"ab\xffcd").into_owned();
    assert_eq!(tokenize(&text), vec!["ab", "\u{FFFD}", "cd"]);
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
    assert_eq!(token_count(""), 0);
}

#[test]
fn test_token_count() {
    assert_eq!(token_count("Hello, world!"), 4);
}

#[test]
fn test_truncate() {
    let result = truncate_to_max_tokens("Hello, world!", 2);
    assert_eq!(result.text, "Hello,");
    assert_eq!(result.token_count, 2);
}

#[test]
fn test_truncate_preserves_text_when_it_fits() {
    for max in [4, 5] {
        let result = truncate_to_max_tokens("Hello, world!", max);
        assert_eq!(result.text, "Hello, world!");
        assert_eq!(result.token_count, 4);
    }
}
