use std::fmt;

use serde::{Deserialize, Serialize};

/// Part-of-speech tags of the mecab-ko-dic tag set.
///
/// Particle (`J*`) and ending (`E*`) subclasses are folded into `J` and `E`.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PosTag {
    UNKNOWN,
    /// Verbal endings
    E,
    /// Interjection
    IC,
    /// Ending particles
    J,
    /// General adverb
    MAG,
    /// Conjunctive adverb
    MAJ,
    /// Modifier
    MM,
    /// General noun
    NNG,
    /// Proper noun
    NNP,
    /// Dependent noun
    NNB,
    /// Dependent noun used as a unit
    NNBC,
    /// Pronoun
    NP,
    /// Numeral
    NR,
    /// Terminal punctuation
    SF,
    /// Chinese characters
    SH,
    /// Foreign language
    SL,
    /// Number
    SN,
    /// Space
    SP,
    /// Closing brackets
    SSC,
    /// Opening brackets
    SSO,
    /// Separator
    SC,
    /// Other symbol
    SY,
    /// Ellipsis
    SE,
    /// Adjective
    VA,
    /// Negative designator
    VCN,
    /// Positive designator
    VCP,
    /// Verb
    VV,
    /// Auxiliary verb or adjective
    VX,
    /// Prefix
    XPN,
    /// Root
    XR,
    /// Adjective suffix
    XSA,
    /// Noun suffix
    XSN,
    /// Verb suffix
    XSV,
}

impl PosTag {
    /// Parse a tag name as it appears in dictionary sources.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        if upper.starts_with('J') {
            return Some(Self::J);
        }
        if upper.starts_with('E') {
            return Some(Self::E);
        }
        Some(match upper.as_str() {
            "UNKNOWN" | "UNA" | "NA" | "VSV" => Self::UNKNOWN,
            "IC" => Self::IC,
            "MAG" => Self::MAG,
            "MAJ" => Self::MAJ,
            "MM" => Self::MM,
            "NNG" => Self::NNG,
            "NNP" => Self::NNP,
            "NNB" => Self::NNB,
            "NNBC" => Self::NNBC,
            "NP" => Self::NP,
            "NR" => Self::NR,
            "SF" => Self::SF,
            "SH" => Self::SH,
            "SL" => Self::SL,
            "SN" => Self::SN,
            "SP" => Self::SP,
            "SSC" => Self::SSC,
            "SSO" => Self::SSO,
            "SC" => Self::SC,
            "SY" => Self::SY,
            "SE" => Self::SE,
            "VA" => Self::VA,
            "VCN" => Self::VCN,
            "VCP" => Self::VCP,
            "VV" => Self::VV,
            "VX" => Self::VX,
            "XPN" => Self::XPN,
            "XR" => Self::XR,
            "XSA" => Self::XSA,
            "XSN" => Self::XSN,
            "XSV" => Self::XSV,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::UNKNOWN => "UNKNOWN",
            Self::E => "E",
            Self::IC => "IC",
            Self::J => "J",
            Self::MAG => "MAG",
            Self::MAJ => "MAJ",
            Self::MM => "MM",
            Self::NNG => "NNG",
            Self::NNP => "NNP",
            Self::NNB => "NNB",
            Self::NNBC => "NNBC",
            Self::NP => "NP",
            Self::NR => "NR",
            Self::SF => "SF",
            Self::SH => "SH",
            Self::SL => "SL",
            Self::SN => "SN",
            Self::SP => "SP",
            Self::SSC => "SSC",
            Self::SSO => "SSO",
            Self::SC => "SC",
            Self::SY => "SY",
            Self::SE => "SE",
            Self::VA => "VA",
            Self::VCN => "VCN",
            Self::VCP => "VCP",
            Self::VV => "VV",
            Self::VX => "VX",
            Self::XPN => "XPN",
            Self::XR => "XR",
            Self::XSA => "XSA",
            Self::XSN => "XSN",
            Self::XSV => "XSV",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an entry relates to its expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PosType {
    /// A single morpheme
    Morpheme,
    /// Noun compound, e.g. 가락지나물 = 가락지 + 나물
    Compound,
    /// Inflected form, e.g. 했다 = 하 + 았 + 다
    Inflect,
    /// Pre-analyzed sequence
    Preanalysis,
}

impl PosType {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name.trim().to_ascii_uppercase().as_str() {
            "MORPHEME" | "*" => Self::Morpheme,
            "COMPOUND" => Self::Compound,
            "INFLECT" => Self::Inflect,
            "PREANALYSIS" => Self::Preanalysis,
            _ => return None,
        })
    }
}

impl fmt::Display for PosType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Morpheme => "MORPHEME",
            Self::Compound => "COMPOUND",
            Self::Inflect => "INFLECT",
            Self::Preanalysis => "PREANALYSIS",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_families_fold() {
        assert_eq!(PosTag::from_name("JKS"), Some(PosTag::J));
        assert_eq!(PosTag::from_name("JX"), Some(PosTag::J));
        assert_eq!(PosTag::from_name("EP"), Some(PosTag::E));
        assert_eq!(PosTag::from_name("ETM"), Some(PosTag::E));
    }

    #[test]
    fn test_tag_aliases() {
        assert_eq!(PosTag::from_name("nng"), Some(PosTag::NNG));
        assert_eq!(PosTag::from_name("UNA"), Some(PosTag::UNKNOWN));
        assert_eq!(PosTag::from_name("NA"), Some(PosTag::UNKNOWN));
        assert_eq!(PosTag::from_name("VSV"), Some(PosTag::UNKNOWN));
        assert_eq!(PosTag::from_name("NNBC"), Some(PosTag::NNBC));
        assert_eq!(PosTag::from_name("QQ"), None);
        assert_eq!(PosTag::from_name(""), None);
    }

    #[test]
    fn test_tag_name_roundtrip() {
        for name in ["NNG", "NNP", "VCP", "XSV", "SSO", "UNKNOWN"] {
            let tag = PosTag::from_name(name).unwrap();
            assert_eq!(tag.as_str(), name);
            assert_eq!(tag.to_string(), name);
        }
    }

    #[test]
    fn test_pos_type_from_name() {
        assert_eq!(PosType::from_name("*"), Some(PosType::Morpheme));
        assert_eq!(PosType::from_name("Inflect"), Some(PosType::Inflect));
        assert_eq!(PosType::from_name("COMPOUND"), Some(PosType::Compound));
        assert_eq!(PosType::from_name("Preanalysis"), Some(PosType::Preanalysis));
        assert_eq!(PosType::from_name("other"), None);
    }
}
