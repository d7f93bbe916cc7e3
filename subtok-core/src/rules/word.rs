//! Word-shape matchers
//!
//! A word shape is a run of consonant/vowel groups. Each group is up to
//! `consonant_run` consonants, then 1 to `vowel_run` vowels, then up to
//! `consonant_run` consonants; a token holds at most `word_groups` groups.
//! Long words are therefore cut into several tokens by repeated application.

use super::runs::{run_of, take_while_max, with_leading_space};
use crate::config::SegmenterConfig;
use crate::tables::{self, CharSet};

/// Vowel and consonant classes of one letter case
#[derive(Debug, Clone, Copy)]
pub(crate) struct WordShape {
    vowels: CharSet,
    consonants: CharSet,
}

/// Lowercase letters
pub(crate) const LOWERCASE: WordShape = WordShape {
    vowels: tables::LOWER_VOWELS,
    consonants: tables::LOWER_CONSONANTS,
};

/// Uppercase letters
pub(crate) const UPPERCASE: WordShape = WordShape {
    vowels: tables::UPPER_VOWELS,
    consonants: tables::UPPER_CONSONANTS,
};

impl WordShape {
    /// Match an optional space followed by one or more groups
    pub(crate) fn match_word(&self, s: &str, config: &SegmenterConfig) -> Option<usize> {
        with_leading_space(s, |body| self.match_groups(body, config))
    }

    fn match_groups(&self, s: &str, config: &SegmenterConfig) -> Option<usize> {
        let mut end = 0;
        for _ in 0..config.word_groups {
            match self.match_group(&s[end..], config) {
                Some(len) => end += len,
                None => break,
            }
        }
        (end > 0).then_some(end)
    }

    /// One consonant/vowel/consonant group.
    ///
    /// The leading consonants must be followed by a vowel. Any shorter prefix
    /// of a consonant run ends on another consonant, so the whole run is
    /// either taken or the group fails.
    fn match_group(&self, s: &str, config: &SegmenterConfig) -> Option<usize> {
        let is_consonant = |c| self.consonants.contains(c);
        let is_vowel = |c| self.vowels.contains(c);

        let (lead_chars, lead) =
            take_while_max(s, config.consonant_run.saturating_add(1), is_consonant);
        if lead_chars > config.consonant_run {
            return None;
        }
        let vowels = run_of(&s[lead..], config.vowel_run, is_vowel)?;
        let (_, tail) = take_while_max(&s[lead + vowels..], config.consonant_run, is_consonant);

        Some(lead + vowels + tail)
    }
}

/// Optional space, one capital, then 1 to `titlecase_tail` lowercase letters
pub(crate) fn titlecase(s: &str, config: &SegmenterConfig) -> Option<usize> {
    with_leading_space(s, |body| {
        let capital = body.chars().next().filter(|&c| tables::is_upper_letter(c))?;
        let head = capital.len_utf8();
        let tail = run_of(&body[head..], config.titlecase_tail, tables::is_lower_letter)?;
        Some(head + tail)
    })
}
