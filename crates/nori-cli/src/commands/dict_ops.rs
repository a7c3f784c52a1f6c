use std::process;

use nori_core::dict::Candidate;
use nori_core::normalizer::normalize;

use super::open_dictionary;

pub fn check_dict_cmd(dict_file: &str, user_file: Option<&str>) {
    let dict = open_dictionary(dict_file, user_file);
    let stats = dict.system().stats();
    println!("OK: {dict_file}");
    println!("  surfaces:        {}", stats.surfaces);
    println!("  entries:         {}", stats.entries);
    println!("  unknown classes: {}", stats.unknown_classes);
    println!("  context ids:     {}", stats.num_ids);
    if let Some(user) = dict.user() {
        println!("  user words:      {}", user.len());
        println!("  user policy:     {:?}", dict.override_policy());
    }
}

/// Candidates for the normalized query: every prefix match in lattice
/// order, or with `exact` only entries for the whole query.
pub fn lookup_cmd(dict_file: &str, user_file: Option<&str>, query: &str, exact: bool) {
    let dict = open_dictionary(dict_file, user_file);
    let text = normalize(query);
    let candidates = if exact {
        dict.lookup_exact(&text)
    } else {
        let chars: Vec<char> = text.chars().collect();
        dict.lookup(&chars, 0)
    };
    if candidates.is_empty() {
        println!("No entries found for \"{text}\"");
        return;
    }
    for c in &candidates {
        println!("{}", format_candidate(c));
    }
}

pub fn conn_cost_cmd(dict_file: &str, right_id: u16, left_id: u16) {
    let dict = open_dictionary(dict_file, None);
    let matrix = dict.connection();
    for id in [right_id, left_id] {
        if !matrix.contains_id(id) {
            eprintln!(
                "Error: context id {id} out of range (matrix has {} ids)",
                matrix.num_ids()
            );
            process::exit(1);
        }
    }
    println!(
        "conn({right_id} -> {left_id}) = {}",
        matrix.cost(right_id, left_id)
    );
}

fn format_candidate(c: &Candidate<'_>) -> String {
    let e = c.entry;
    let tags: Vec<&str> = e.pos_tags.iter().map(|t| t.as_str()).collect();
    format!(
        "{}\t{}\t{}\tleft={} right={} cost={}\t{:?}",
        e.surface,
        tags.join("+"),
        e.pos_type,
        e.left_id,
        e.right_id,
        e.word_cost,
        c.origin,
    )
}
