//! Character class tables
//!
//! Every class the rule table consults lives here as an immutable, sorted
//! slice of code points. Lookups are binary searches, so adding a letter to a
//! class means inserting it in order and nothing else.

/// An immutable set of characters backed by a sorted slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSet {
    chars: &'static [char],
}

impl CharSet {
    /// Wrap a sorted slice. Sortedness is checked by the table tests.
    pub const fn new(chars: &'static [char]) -> Self {
        Self { chars }
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.binary_search(&ch).is_ok()
    }

    /// All members in code point order
    pub fn chars(&self) -> &'static [char] {
        self.chars
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Lowercase vowels, including accented Western European forms
pub const LOWER_VOWELS: CharSet = CharSet::new(&[
    'a', 'e', 'i', 'o', 'u', 'y', 'à', 'á', 'â', 'ä', 'æ', 'è', 'é', 'ê', 'ë', 'ì', 'í', 'î', 'ï',
    'ò', 'ó', 'ô', 'ö', 'ù', 'ú', 'û', 'ü', 'ý', 'ÿ', 'œ',
]);

/// Lowercase consonants, including ß, ç and ñ
pub const LOWER_CONSONANTS: CharSet = CharSet::new(&[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'z', 'ß', 'ç', 'ñ',
]);

/// Uppercase vowels
pub const UPPER_VOWELS: CharSet = CharSet::new(&[
    'A', 'E', 'I', 'O', 'U', 'Y', 'À', 'Á', 'Â', 'Ä', 'Æ', 'È', 'É', 'Ê', 'Ë', 'Ì', 'Í', 'Î', 'Ï',
    'Ò', 'Ó', 'Ô', 'Ö', 'Ù', 'Ú', 'Û', 'Ü', 'Ý', 'Œ', 'Ÿ',
]);

/// Uppercase consonants
pub const UPPER_CONSONANTS: CharSet = CharSet::new(&[
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'X',
    'Z', 'Ç', 'Ñ',
]);

/// Punctuation and symbols grouped by the symbol rule
pub const SYMBOLS: CharSet = CharSet::new(&[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
]);

/// Characters whose repeats are chunked by the repeated-special rule
pub const REPEATABLE: CharSet = CharSet::new(&['#', '-', '.', '=', '_']);

/// Last code point of Latin Extended-A. Anything above counts as non-Latin.
pub const LATIN_EXTENDED_A_END: char = '\u{017F}';

/// Whether `ch` lies outside Latin-1 and Latin Extended-A
#[inline]
pub fn is_non_latin(ch: char) -> bool {
    ch > LATIN_EXTENDED_A_END
}

/// Whether `ch` is a lowercase letter of either class
#[inline]
pub fn is_lower_letter(ch: char) -> bool {
    LOWER_VOWELS.contains(ch) || LOWER_CONSONANTS.contains(ch)
}

/// Whether `ch` is an uppercase letter of either class
#[inline]
pub fn is_upper_letter(ch: char) -> bool {
    UPPER_VOWELS.contains(ch) || UPPER_CONSONANTS.contains(ch)
}
