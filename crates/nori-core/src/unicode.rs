//! Character-level Unicode classification for Korean text.

use serde::{Deserialize, Serialize};
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_script::{Script, UnicodeScript};

/// Character classes used to pick an unknown-word definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharClass {
    Default,
    Space,
    Symbol,
    Numeric,
    Alpha,
    Cyrillic,
    Greek,
    Hiragana,
    Katakana,
    Hanja,
    Hangul,
}

impl CharClass {
    pub const ALL: [CharClass; 11] = [
        CharClass::Default,
        CharClass::Space,
        CharClass::Symbol,
        CharClass::Numeric,
        CharClass::Alpha,
        CharClass::Cyrillic,
        CharClass::Greek,
        CharClass::Hiragana,
        CharClass::Katakana,
        CharClass::Hanja,
        CharClass::Hangul,
    ];

    /// Parse a `char.def` style class name (`HANGUL`, `ALPHA`, ...).
    pub fn from_name(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "DEFAULT" => Self::Default,
            "SPACE" => Self::Space,
            "SYMBOL" => Self::Symbol,
            "NUMERIC" => Self::Numeric,
            "ALPHA" => Self::Alpha,
            "CYRILLIC" => Self::Cyrillic,
            "GREEK" => Self::Greek,
            "HIRAGANA" => Self::Hiragana,
            "KATAKANA" => Self::Katakana,
            "HANJA" | "KANJI" => Self::Hanja,
            "HANGUL" => Self::Hangul,
            _ => return None,
        })
    }
}

/// Precomposed syllables (U+AC00..U+D7A3).
pub fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Syllables plus conjoining and compatibility jamo.
pub fn is_hangul(c: char) -> bool {
    is_hangul_syllable(c)
        || ('\u{1100}'..='\u{11FF}').contains(&c)
        || ('\u{3130}'..='\u{318F}').contains(&c)
        || ('\u{A960}'..='\u{A97F}').contains(&c)
        || ('\u{D7B0}'..='\u{D7FF}').contains(&c)
}

pub fn is_hanja(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{F900}'..='\u{FAFF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c) || ('\u{31F0}'..='\u{31FF}').contains(&c)
}

pub fn is_greek(c: char) -> bool {
    ('\u{0370}'..='\u{03FF}').contains(&c) || ('\u{1F00}'..='\u{1FFF}').contains(&c)
}

pub fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{052F}').contains(&c)
}

/// Latin letters, including the Latin-1 and Extended-A/B blocks.
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
        || (('\u{00C0}'..='\u{024F}').contains(&c) && c != '\u{00D7}' && c != '\u{00F7}')
}

/// Punctuation (`P*`) and symbol (`S*`) general categories.
pub fn is_symbol(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        ConnectorPunctuation
            | DashPunctuation
            | OpenPunctuation
            | ClosePunctuation
            | InitialPunctuation
            | FinalPunctuation
            | OtherPunctuation
            | MathSymbol
            | CurrencySymbol
            | ModifierSymbol
            | OtherSymbol
    )
}

/// Symbols plus separators, controls and format characters. U+119E (Hangul
/// jungseong araea) is treated as punctuation too.
pub fn is_punctuation(c: char) -> bool {
    use GeneralCategory::*;
    c == '\u{119E}'
        || is_symbol(c)
        || matches!(
            get_general_category(c),
            SpaceSeparator | LineSeparator | ParagraphSeparator | Control | Format
        )
}

/// Classify a character for unknown-word processing.
pub fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if c.is_ascii_digit() || (c.is_numeric() && !is_hanja(c)) {
        CharClass::Numeric
    } else if is_hangul(c) {
        CharClass::Hangul
    } else if is_alpha(c) {
        CharClass::Alpha
    } else if is_hanja(c) {
        CharClass::Hanja
    } else if is_hiragana(c) {
        CharClass::Hiragana
    } else if is_katakana(c) {
        CharClass::Katakana
    } else if is_greek(c) {
        CharClass::Greek
    } else if is_cyrillic(c) {
        CharClass::Cyrillic
    } else if is_symbol(c) {
        CharClass::Symbol
    } else {
        CharClass::Default
    }
}

/// Length and class of the unknown word starting at `chars[0]`.
///
/// A character continues the word when its script matches, or either side is
/// `Common`/`Inherited`, and it agrees with the first character on being
/// punctuation and on being an ASCII digit. While the word has only seen
/// `Common`/`Inherited` characters, the first non-punctuation character of a
/// real script sets both the script and the class.
pub fn group_unknown(chars: &[char]) -> (usize, CharClass) {
    let Some((&first, rest)) = chars.split_first() else {
        return (0, CharClass::Default);
    };
    let neutral = |s: Script| matches!(s, Script::Common | Script::Inherited);

    let mut script = first.script();
    let mut class = classify(first);
    let first_punct = is_punctuation(first);
    let first_digit = first.is_ascii_digit();

    let mut len = 1;
    for &c in rest {
        let cur = c.script();
        let same_script = (cur == script || neutral(script) || neutral(cur)) && !c.is_whitespace();
        let punct = is_punctuation(c);
        if !same_script || punct != first_punct || c.is_ascii_digit() != first_digit {
            break;
        }
        if neutral(script) && !punct {
            script = cur;
            class = classify(c);
        }
        len += 1;
    }
    (len, class)
}

/// Final-consonant check on the last character of `s`.
///
/// Returns `(is_hangul, has_coda)`. Only precomposed syllables count as
/// Hangul here; jamo and other scripts return `(false, false)`.
pub fn check_coda(s: &str) -> (bool, bool) {
    match s.chars().last() {
        Some(c) if is_hangul_syllable(c) => {
            let has_coda = (c as u32 - 0xAC00) % 28 != 0;
            (true, has_coda)
        }
        _ => (false, false),
    }
}
