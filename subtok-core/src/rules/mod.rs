//! The ordered rule table
//!
//! At every cursor position the rules are tried in [`Rule::ORDER`]; the first
//! one that matches decides the next token and how long it is. Each rule is
//! greedy within its own bounds only, so reordering the table changes the
//! partition.

mod abbreviation;
mod runs;
mod word;

use crate::config::SegmenterConfig;
use crate::tables;
use abbreviation::AbbreviationTable;

/// One classification rule. Variant order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A single ASCII digit
    Digit,
    /// Run of `\n`
    LineFeeds,
    /// Run of `\r`
    CarriageReturns,
    /// Run of `\t`
    Tabs,
    /// Run of vertical tabs
    VerticalTabs,
    /// Run of form feeds
    FormFeeds,
    /// Configured abbreviation literal
    Abbreviation,
    /// Lowercase consonant/vowel groups
    LowercaseWord,
    /// Capital followed by lowercase letters
    TitlecaseWord,
    /// Uppercase consonant/vowel groups
    UppercaseWord,
    /// One or two lowercase consonants
    LowercaseConsonants,
    /// One or two uppercase consonants
    UppercaseConsonants,
    /// Chunk of characters outside Latin-1 and Latin Extended-A
    NonLatin,
    /// `()`
    EmptyParens,
    /// `[]`
    EmptyBrackets,
    /// `{}`
    EmptyBraces,
    /// Run of one of `. = # _ -`
    RepeatedSpecial,
    /// One to three punctuation characters
    Symbols,
    /// Run of ASCII spaces
    Spaces,
    /// Any single character
    AnyChar,
}

impl Rule {
    /// Every rule, highest priority first
    pub const ORDER: [Rule; 20] = [
        Rule::Digit,
        Rule::LineFeeds,
        Rule::CarriageReturns,
        Rule::Tabs,
        Rule::VerticalTabs,
        Rule::FormFeeds,
        Rule::Abbreviation,
        Rule::LowercaseWord,
        Rule::TitlecaseWord,
        Rule::UppercaseWord,
        Rule::LowercaseConsonants,
        Rule::UppercaseConsonants,
        Rule::NonLatin,
        Rule::EmptyParens,
        Rule::EmptyBrackets,
        Rule::EmptyBraces,
        Rule::RepeatedSpecial,
        Rule::Symbols,
        Rule::Spaces,
        Rule::AnyChar,
    ];

    /// Stable snake_case name, used in diagnostics output
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Digit => "digit",
            Rule::LineFeeds => "line_feeds",
            Rule::CarriageReturns => "carriage_returns",
            Rule::Tabs => "tabs",
            Rule::VerticalTabs => "vertical_tabs",
            Rule::FormFeeds => "form_feeds",
            Rule::Abbreviation => "abbreviation",
            Rule::LowercaseWord => "lowercase_word",
            Rule::TitlecaseWord => "titlecase_word",
            Rule::UppercaseWord => "uppercase_word",
            Rule::LowercaseConsonants => "lowercase_consonants",
            Rule::UppercaseConsonants => "uppercase_consonants",
            Rule::NonLatin => "non_latin",
            Rule::EmptyParens => "empty_parens",
            Rule::EmptyBrackets => "empty_brackets",
            Rule::EmptyBraces => "empty_braces",
            Rule::RepeatedSpecial => "repeated_special",
            Rule::Symbols => "symbols",
            Rule::Spaces => "spaces",
            Rule::AnyChar => "any_char",
        }
    }

    /// Position in [`Rule::ORDER`]
    pub fn priority(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rule table bound to a configuration
#[derive(Debug, Clone)]
pub(crate) struct RuleSet {
    config: SegmenterConfig,
    abbreviations: AbbreviationTable,
}

impl RuleSet {
    pub(crate) fn new(config: SegmenterConfig) -> Self {
        let abbreviations = AbbreviationTable::new(&config.abbreviations);
        Self {
            config,
            abbreviations,
        }
    }

    pub(crate) fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    pub(crate) fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    /// Byte length matched by `rule` at the start of `rest`
    pub(crate) fn match_rule(&self, rule: Rule, rest: &str) -> Option<usize> {
        let config = &self.config;
        match rule {
            Rule::Digit => runs::digit(rest),
            Rule::LineFeeds => runs::repeated_control(rest, '\n'),
            Rule::CarriageReturns => runs::repeated_control(rest, '\r'),
            Rule::Tabs => runs::repeated_control(rest, '\t'),
            Rule::VerticalTabs => runs::repeated_control(rest, '\u{000B}'),
            Rule::FormFeeds => runs::repeated_control(rest, '\u{000C}'),
            Rule::Abbreviation => self.abbreviations.match_at(rest),
            Rule::LowercaseWord => word::LOWERCASE.match_word(rest, config),
            Rule::TitlecaseWord => word::titlecase(rest, config),
            Rule::UppercaseWord => word::UPPERCASE.match_word(rest, config),
            Rule::LowercaseConsonants => runs::consonant_cluster(
                rest,
                tables::LOWER_CONSONANTS,
                config.consonant_cluster,
            ),
            Rule::UppercaseConsonants => runs::consonant_cluster(
                rest,
                tables::UPPER_CONSONANTS,
                config.consonant_cluster,
            ),
            Rule::NonLatin => runs::non_latin(rest, config.non_latin_run),
            Rule::EmptyParens => runs::literal(rest, "()"),
            Rule::EmptyBrackets => runs::literal(rest, "[]"),
            Rule::EmptyBraces => runs::literal(rest, "{}"),
            Rule::RepeatedSpecial => runs::repeated_special(rest, config.repeat_run),
            Rule::Symbols => runs::symbols(rest, config.symbol_run),
            Rule::Spaces => runs::spaces(rest),
            Rule::AnyChar => runs::any_char(rest),
        }
    }

    /// First rule that matches a non-empty prefix of `rest`, with its length.
    ///
    /// `rest` must be non-empty. The catch-all guarantees a match; the
    /// fallback only exists so the scan can never stall.
    pub(crate) fn next_token(&self, rest: &str) -> (Rule, usize) {
        Rule::ORDER
            .iter()
            .find_map(|&rule| {
                self.match_rule(rule, rest)
                    .filter(|&len| len > 0)
                    .map(|len| (rule, len))
            })
            .unwrap_or_else(|| {
                let len = rest.chars().next().map_or(rest.len(), char::len_utf8);
                (Rule::AnyChar, len)
            })
    }
}
