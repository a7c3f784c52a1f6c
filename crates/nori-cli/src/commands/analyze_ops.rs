use std::io::{self, BufRead};
use std::process;
use std::sync::Arc;

use nori_core::{Analyzer, AnalyzerOptions, Granularity, Token};
use tracing::debug;

use super::open_dictionary;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn tokenize_cmd(
    dict_file: &str,
    user_file: Option<&str>,
    text: Option<&str>,
    granularity: Granularity,
    no_normalize: bool,
    json: bool,
) {
    let dict = Arc::new(open_dictionary(dict_file, user_file));
    let options = AnalyzerOptions {
        granularity,
        normalize: !no_normalize,
    };
    let analyzer = Analyzer::with_options(dict, options);

    let run = |line: &str| {
        let tokens = die!(analyzer.analyze(line), "Error analyzing input: {}");
        debug!(chars = line.chars().count(), tokens = tokens.len(), "analyzed");
        if json {
            println!("{}", die!(serde_json::to_string(&tokens), "Error: {}"));
        } else {
            print!("{}", format_tokens(&tokens));
        }
    };

    match text {
        Some(t) => run(t),
        None => {
            for line in io::stdin().lock().lines() {
                let line = die!(line, "Error reading stdin: {}");
                run(&line);
            }
        }
    }
}

pub fn graphviz_cmd(dict_file: &str, user_file: Option<&str>, text: &str) {
    let dict = Arc::new(open_dictionary(dict_file, user_file));
    let analyzer = Analyzer::new(dict);
    print!(
        "{}",
        die!(analyzer.lattice_dot(text), "Error analyzing input: {}")
    );
}

/// MeCab-like listing: one morpheme per line, then `EOS`.
///
/// Columns: surface, tags, type, byte span, token kind and, for compound or
/// inflected morphemes, the expressions.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for t in tokens.iter().filter(|t| !t.is_marker()) {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}..{}\t{:?}",
            t.surface,
            t.pos_label(),
            t.pos_type,
            t.offset,
            t.offset + t.length,
            t.kind,
        ));
        if !t.expressions.is_empty() {
            let parts: Vec<String> = t
                .expressions
                .iter()
                .map(|e| format!("{}/{}", e.surface, e.pos_tag))
                .collect();
            out.push('\t');
            out.push_str(&parts.join("+"));
        }
        out.push('\n');
    }
    out.push_str("EOS\n");
    out
}
