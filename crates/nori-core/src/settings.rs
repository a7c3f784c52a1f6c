//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::analyzer::Granularity;
use crate::dict::{OverridePolicy, PosTag};
use crate::normalizer::NormalizationForm;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub cost: CostSettings,
    pub unknown: UnknownSettings,
    pub user_dict: UserDictSettings,
    pub normalizer: NormalizerSettings,
    pub analyzer: AnalyzerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CostSettings {
    pub space_penalty: i32,
    space_penalty_tags: Vec<String>,
    pub unknown_word_cost: i32,
    /// Parsed `space_penalty_tags`.
    #[serde(skip)]
    penalty_tags_parsed: Vec<PosTag>,
}

impl CostSettings {
    /// Whether a morpheme starting with `tag` pays the space penalty.
    pub fn penalizes_after_space(&self, tag: PosTag) -> bool {
        self.penalty_tags_parsed.contains(&tag)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnknownSettings {
    pub max_group_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserDictSettings {
    pub word_cost: i32,
    pub override_policy: OverridePolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizerSettings {
    pub form: NormalizationForm,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerSettings {
    pub granularity: Granularity,
    pub normalize: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.cost.penalty_tags_parsed = parse_tags(&s.cost.space_penalty_tags)?;
    Ok(s)
}

fn parse_tags(raw: &[String]) -> Result<Vec<PosTag>, SettingsError> {
    raw.iter()
        .map(|name| {
            PosTag::from_name(name).ok_or_else(|| SettingsError::InvalidValue {
                field: "cost.space_penalty_tags".to_string(),
                reason: format!("unknown POS tag `{name}`"),
            })
        })
        .collect()
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_negative {
        ($section:ident . $field:ident) => {
            if s.$section.$field < 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be non-negative".to_string(),
                });
            }
        };
    }
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_non_negative!(cost.space_penalty);
    check_non_negative!(cost.unknown_word_cost);
    check_positive_usize!(unknown.max_group_chars);

    if s.user_dict.word_cost > 0 {
        return Err(SettingsError::InvalidValue {
            field: "user_dict.word_cost".to_string(),
            reason: "must not be positive".to_string(),
        });
    }

    Ok(())
}
