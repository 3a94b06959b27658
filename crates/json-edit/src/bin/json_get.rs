//! `json-get` — look up a path inside a JSON document.
//!
//! Usage:
//!   json-get '<path-array-json>'
//!
//! The document is read from stdin. Prints the pretty-printed value at the
//! path, or exits non-zero if the path does not exist.

use std::io::{self, Read, Write};

use json_edit::text::parse_path;
use json_edit::{get, DocValue};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let path = match args.get(1) {
        Some(raw) => match parse_path(raw) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => {
            eprintln!("First argument must be a JSON path array.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let doc = match DocValue::from_json_text(buf.trim()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match get(&doc, &path) {
        Some(value) => {
            io::stdout()
                .write_all(value.to_json_text_pretty().as_bytes())
                .unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        None => {
            eprintln!("Path not found.");
            std::process::exit(1);
        }
    }
}
