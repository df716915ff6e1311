//! Build script to generate embedded word lists
//!
//! Reads one word list file per difficulty tier and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// (input file, const name, description)
const TIER_LISTS: &[(&str, &str, &str)] = &[
    ("data/main_3.txt", "MAIN_THREE", "Main game tier 0: three letter words"),
    ("data/main_4.txt", "MAIN_FOUR", "Main game tier 1: four letter words"),
    ("data/main_5.txt", "MAIN_FIVE", "Main game tier 2: five letter words"),
    ("data/bonus_6.txt", "BONUS_SIX", "Bonus game tier 0: six letter words"),
    ("data/bonus_7.txt", "BONUS_SEVEN", "Bonus game tier 1: seven letter words"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("tiers.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for &(input_path, const_name, doc_comment) in TIER_LISTS {
        generate_word_list(&mut output, input_path, const_name, doc_comment);
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
    writeln!(output).unwrap();
}
