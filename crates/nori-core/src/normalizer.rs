//! Input canonicalization applied before lattice construction.
//!
//! Normalization runs in three steps, in this order:
//! 1. drop control and zero-width format characters,
//! 2. Unicode normalization (NFKC by default),
//! 3. collapse whitespace runs to a single ASCII space and trim.
//!
//! Stripping before normalizing keeps the result idempotent: removing a
//! character afterwards could place a combining mark next to a new base.

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

use crate::settings::settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationForm {
    Nfc,
    Nfkc,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizationError {
    #[error("input is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidUtf8 { offset: usize },
}

/// Normalize with the form configured in settings.
pub fn normalize(raw: &str) -> String {
    normalize_with(raw, settings().normalizer.form)
}

/// Decode `raw` as UTF-8, then normalize it.
pub fn normalize_bytes(raw: &[u8]) -> Result<String, NormalizationError> {
    Ok(normalize(decode_utf8(raw)?))
}

pub fn decode_utf8(raw: &[u8]) -> Result<&str, NormalizationError> {
    std::str::from_utf8(raw).map_err(|e| NormalizationError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })
}

pub fn normalize_with(raw: &str, form: NormalizationForm) -> String {
    let stripped: String = raw.chars().filter(|&c| !is_disallowed(c)).collect();
    let composed: String = match form {
        NormalizationForm::Nfc => stripped.nfc().collect(),
        NormalizationForm::Nfkc => stripped.nfkc().collect(),
    };
    collapse_whitespace(&composed)
}

fn is_disallowed(c: char) -> bool {
    (c.is_control() && !c.is_whitespace())
        || matches!(c, '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}')
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(
            normalize_with("  화학             이외의\t\n것  ", NormalizationForm::Nfkc),
            "화학 이외의 것"
        );
        assert_eq!(normalize_with("   ", NormalizationForm::Nfkc), "");
        assert_eq!(normalize_with("", NormalizationForm::Nfc), "");
    }

    #[test]
    fn composes_conjoining_jamo() {
        // ᄒ + ᅡ + ᆫ decomposed -> 한
        let decomposed = "\u{1112}\u{1161}\u{11AB}";
        assert_eq!(normalize_with(decomposed, NormalizationForm::Nfc), "한");
        assert_eq!(normalize_with(decomposed, NormalizationForm::Nfkc), "한");
    }

    #[test]
    fn nfkc_folds_compatibility_forms() {
        assert_eq!(normalize_with("ＡＢＣ１２３", NormalizationForm::Nfkc), "ABC123");
        assert_eq!(normalize_with("ＡＢＣ", NormalizationForm::Nfc), "ＡＢＣ");
        // ideographic space becomes a plain space, then collapses
        assert_eq!(normalize_with("가\u{3000}\u{3000}나", NormalizationForm::Nfkc), "가 나");
    }

    #[test]
    fn strips_control_and_zero_width() {
        assert_eq!(
            normalize_with("\u{FEFF}화\u{0007}학\u{200B}", NormalizationForm::Nfkc),
            "화학"
        );
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let err = normalize_bytes(&[0xEA, 0xB0, 0x80, 0xFF, 0x41]).unwrap_err();
        assert_eq!(err, NormalizationError::InvalidUtf8 { offset: 3 });
    }

    #[test]
    fn valid_bytes_are_normalized() {
        let text = normalize_bytes("  것  ".as_bytes()).unwrap();
        assert_eq!(text, "것");
    }

    proptest! {
        #[test]
        fn nfkc_is_idempotent(s in "\\PC*") {
            let once = normalize_with(&s, NormalizationForm::Nfkc);
            prop_assert_eq!(normalize_with(&once, NormalizationForm::Nfkc), once);
        }

        #[test]
        fn nfc_is_idempotent(s in any::<String>()) {
            let once = normalize_with(&s, NormalizationForm::Nfc);
            prop_assert_eq!(normalize_with(&once, NormalizationForm::Nfc), once);
        }

        #[test]
        fn output_has_no_whitespace_runs(s in "[가-힣a-z \\t\\n\u{3000}]{0,40}") {
            let out = normalize_with(&s, NormalizationForm::Nfkc);
            prop_assert!(!out.contains("  "));
            prop_assert_eq!(out.trim(), out.as_str());
        }
    }
}
