pub mod analyze_ops;
pub mod config_ops;
pub mod dict_ops;

use std::path::Path;
use std::process;

use nori_core::{load_dictionary, Dictionary};

/// Load the system dictionary and optional user dictionary, or exit.
pub(crate) fn open_dictionary(dict_file: &str, user_file: Option<&str>) -> Dictionary {
    load_dictionary(Path::new(dict_file), user_file.map(Path::new)).unwrap_or_else(|e| {
        eprintln!("Error loading dictionary: {e}");
        process::exit(1);
    })
}
