//! `json-set` — set a value at a path inside a JSON document.
//!
//! Usage:
//!   json-set '<path-array-json>' '<raw-value>'
//!   json-set --merge '<path-array-json>' '<raw-value>'
//!
//! The document is read from stdin. The path is a JSON array of string or
//! integer segments, e.g. `'["users", 0, "name"]'`. The raw value is coerced
//! the way the editor coerces typed input (`null`, booleans, numbers, JSON
//! literals, fallback string). With `--merge`, an object value is
//! shallow-merged into the target instead of replacing it.

use std::io::{self, Read, Write};

use json_edit::text::{apply_merge_edit, apply_value_edit, parse_path};

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let merge = args.first().map(|a| a == "--merge").unwrap_or(false);
    if merge {
        args.remove(0);
    }
    if args.len() != 2 {
        eprintln!("Usage: json-set [--merge] '<path-array-json>' '<raw-value>'");
        std::process::exit(1);
    }

    let path = match parse_path(&args[0]) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let result = if merge {
        apply_merge_edit(buf.trim(), &path, &args[1])
    } else {
        apply_value_edit(buf.trim(), &path, &args[1])
    };

    match result {
        Ok(doc) => {
            io::stdout().write_all(doc.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
