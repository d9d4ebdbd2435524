//! Build script to generate embedded palettes
//!
//! Reads palette files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_palette(
        "data/palettes/classic.txt",
        &Path::new(&out_dir).join("classic.rs"),
        "CLASSIC",
        "Classic palette (6 colors)",
    );

    generate_palette(
        "data/palettes/extended.txt",
        &Path::new(&out_dir).join("extended.rs"),
        "EXTENDED",
        "Extended palette (8 colors)",
    );

    // Rebuild if palettes change
    println!("cargo:rerun-if-changed=data/palettes/classic.txt");
    println!("cargo:rerun-if-changed=data/palettes/extended.txt");
}

fn generate_palette(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Same line format as palettes::loader: `key hex label...`, `#` comments
    let entries: Vec<(&str, &str, String)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut parts = line.split_whitespace();
            let key = parts
                .next()
                .unwrap_or_else(|| panic!("Missing key in {input_path}: {line}"));
            let hex = parts
                .next()
                .unwrap_or_else(|| panic!("Missing hex in {input_path}: {line}"));
            let label = parts.collect::<Vec<_>>().join(" ");
            (key, hex, label)
        })
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated palette").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}: `(key, label, hex)`").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, &str)] = &[").unwrap();

    for (key, hex, label) in &entries {
        writeln!(output, "    ({key:?}, {label:?}, {hex:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of colors in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", entries.len()).unwrap();
}
