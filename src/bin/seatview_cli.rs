//! CLI tool for seatview - parses roster files and outputs the grid as JSON
//!
//! Usage:
//!   seatview_cli <roster.xlsx|roster.csv>   # Output JSON to stdout
//!   seatview_cli <roster.csv> -o out.json   # Output JSON to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: seatview_cli <roster.xlsx|roster.xls|roster.csv> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read input file
    let data = match fs::read(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    // Format recognition goes by file name, same as the import surface
    let file_name = Path::new(input_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(input_path);

    let grid = match seatview::import(&data, file_name) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error importing roster: {}", e);
            std::process::exit(1);
        }
    };

    let summary = grid.summary();
    eprintln!("Seating chart: {} x {}", summary.rows, summary.cols);

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&grid) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
