use std::fs;
use std::process;

use nori_core::settings;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install a custom settings file before anything reads `settings()`.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: cost.space_penalty={}, cost.unknown_word_cost={}, user_dict.word_cost={}, analyzer.granularity={:?}",
        s.cost.space_penalty, s.cost.unknown_word_cost, s.user_dict.word_cost, s.analyzer.granularity
    );
}
