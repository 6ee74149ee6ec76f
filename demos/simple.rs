//! Basic argument marshaling with serde.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_args::to_args;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Grep {
    #[serde(rename = "i")]
    ignore_case: bool,
    #[serde(rename = "max-count")]
    max_count: u32,
    #[serde(rename = "e")]
    patterns: Vec<String>,
    #[serde(rename = "0")]
    files: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let grep = Grep {
        ignore_case: true,
        max_count: 5,
        patterns: vec!["TODO".to_string(), "FIXME".to_string()],
        files: vec!["src/lib.rs".to_string(), "src/ser.rs".to_string()],
    };

    let args = to_args(&grep)?;
    println!("grep {}", args.join(" "));
    assert_eq!(args.last().map(String::as_str), Some("src/ser.rs"));

    Ok(())
}
