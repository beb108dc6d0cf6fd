//! Porter stemming algorithm.
//!
//! Applies the five rewrite steps of Porter (1980) to lowercase ASCII
//! words. Words containing non-ASCII characters are lowercased and returned
//! unchanged, since the rules are defined over the English alphabet only.
//!
//! ```
//! use lexigraph::analysis::token_filter::stem::Stemmer;
//! use lexigraph::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Ordered so that a longer suffix precedes any shorter suffix it ends with.
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm for English.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Whether the byte at `pos` acts as a vowel. `y` is a vowel when it
    /// follows a consonant.
    fn is_vowel(word: &[u8], pos: usize) -> bool {
        match word.get(pos) {
            Some(b'a' | b'e' | b'i' | b'o' | b'u') => true,
            Some(b'y') => pos > 0 && !Self::is_vowel(word, pos - 1),
            _ => false,
        }
    }

    /// Number of vowel-consonant sequences in the word.
    fn measure(word: &str) -> usize {
        let bytes = word.as_bytes();
        let n = bytes.len();
        let mut m = 0;
        let mut i = 0;

        while i < n && !Self::is_vowel(bytes, i) {
            i += 1;
        }

        while i < n {
            while i < n && Self::is_vowel(bytes, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            m += 1;
            while i < n && !Self::is_vowel(bytes, i) {
                i += 1;
            }
        }

        m
    }

    fn contains_vowel(word: &str) -> bool {
        (0..word.len()).any(|i| Self::is_vowel(word.as_bytes(), i))
    }

    fn ends_with_double_consonant(word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        len >= 2 && bytes[len - 1] == bytes[len - 2] && !Self::is_vowel(bytes, len - 1)
    }

    /// Consonant-vowel-consonant ending where the last consonant is not w, x or y.
    fn ends_cvc(word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        len >= 3
            && !Self::is_vowel(bytes, len - 3)
            && Self::is_vowel(bytes, len - 2)
            && !Self::is_vowel(bytes, len - 1)
            && !matches!(bytes[len - 1], b'w' | b'x' | b'y')
    }

    fn strip<'a>(word: &'a str, suffix: &str) -> &'a str {
        &word[..word.len() - suffix.len()]
    }

    /// Replace the first matching suffix of `rules` when the remaining stem
    /// has a measure of at least one.
    fn apply_rules(word: String, rules: &[(&str, &str)]) -> String {
        match rules.iter().find(|(suffix, _)| word.ends_with(suffix)) {
            Some((suffix, replacement)) => {
                let stem = Self::strip(&word, suffix);
                if Self::measure(stem) >= 1 {
                    format!("{stem}{replacement}")
                } else {
                    word
                }
            }
            None => word,
        }
    }

    fn step1a(word: String) -> String {
        if word.ends_with("sses") || word.ends_with("ies") {
            Self::strip(&word, "es").to_string()
        } else if word.ends_with("ss") {
            word
        } else if word.ends_with('s') && word.len() > 1 {
            Self::strip(&word, "s").to_string()
        } else {
            word
        }
    }

    fn step1b(word: String) -> String {
        if word.ends_with("eed") {
            let stem = Self::strip(&word, "eed");
            return if Self::measure(stem) >= 1 {
                format!("{stem}ee")
            } else {
                word
            };
        }

        let stem = ["ed", "ing"]
            .iter()
            .find(|suffix| word.ends_with(*suffix))
            .map(|suffix| Self::strip(&word, suffix))
            .filter(|stem| Self::contains_vowel(stem));

        let Some(stem) = stem else {
            return word;
        };

        if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
            format!("{stem}e")
        } else if Self::ends_with_double_consonant(stem)
            && !stem.ends_with('l')
            && !stem.ends_with('s')
            && !stem.ends_with('z')
        {
            stem[..stem.len() - 1].to_string()
        } else if Self::measure(stem) == 1 && Self::ends_cvc(stem) {
            format!("{stem}e")
        } else {
            stem.to_string()
        }
    }

    /// `(*v*) Y -> I`.
    fn step1c(word: String) -> String {
        if word.ends_with('y') && Self::contains_vowel(Self::strip(&word, "y")) {
            format!("{}i", Self::strip(&word, "y"))
        } else {
            word
        }
    }

    /// Only the longest matching suffix is considered; if its condition
    /// fails the word is left alone.
    fn step4(word: String) -> String {
        let Some(suffix) = STEP4_SUFFIXES.iter().find(|suffix| word.ends_with(*suffix)) else {
            return word;
        };
        let stem = Self::strip(&word, suffix);
        if Self::measure(stem) > 1
            && (*suffix != "ion" || stem.ends_with('s') || stem.ends_with('t'))
        {
            stem.to_string()
        } else {
            word
        }
    }

    fn step5(word: String) -> String {
        let word = if word.ends_with('e') {
            let stem = Self::strip(&word, "e");
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                stem.to_string()
            } else {
                word
            }
        } else {
            word
        };

        if word.ends_with("ll") && Self::measure(&word) > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let word = Self::step1a(word);
        let word = Self::step1b(word);
        let word = Self::step1c(word);
        let word = Self::apply_rules(word, STEP2_RULES);
        let word = Self::apply_rules(word, STEP3_RULES);
        let word = Self::step4(word);
        Self::step5(word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
