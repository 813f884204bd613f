//! Castor batch driver
//!
//! Usage:
//!   castor <FILE.c>              Parse one file, pretty JSON AST to stdout
//!   castor <DIR>                 Parse every .c file in DIR (sorted by name),
//!                                writing <file>.ast.json or <file>.error.txt
//!                                into the output directory
//!   castor <DIR> -o <OUT>        Same, with an explicit output directory
//!
//! In directory mode each file is handled independently: a file that fails
//! to parse gets an .error.txt with the error text and the batch moves on.
//! The process exits non-zero only when the input itself is unusable.

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use castor::export::to_json_pretty;
use castor::parser::parse;

/// Miniature C front end: parse source files and emit JSON ASTs
#[derive(Parser, Debug)]
#[command(name = "castor")]
#[command(version, about = "Parse C-like source files and emit JSON ASTs")]
struct Args {
    /// A .c source file, or a directory containing .c files
    input: PathBuf,

    /// Output directory for directory mode (created if missing)
    #[arg(short = 'o', long = "output", default_value = "outputs")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.input.is_dir() {
        run_batch(&args.input, &args.output)
    } else {
        run_single(&args.input)
    }
}

/// Read, parse, and render one source file.
fn parse_file(path: &Path) -> Result<String, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Error reading file {}: {}", path.display(), e))?;
    let ast = parse(&source).map_err(|e| e.to_string())?;
    to_json_pretty(&ast).map_err(|e| format!("Error serializing AST: {}", e))
}

fn run_single(path: &Path) -> ExitCode {
    match parse_file(path) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::from(1)
        }
    }
}

fn run_batch(input_dir: &Path, output_dir: &Path) -> ExitCode {
    if let Err(e) = fs::create_dir_all(output_dir) {
        eprintln!(
            "Error creating output directory {}: {}",
            output_dir.display(),
            e
        );
        return ExitCode::from(1);
    }

    let names = match collect_source_names(input_dir) {
        Ok(names) => names,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(1);
        }
    };

    for name in &names {
        match parse_file(&input_dir.join(name)) {
            Ok(json) => {
                let out_path = output_dir.join(format!("{}.ast.json", name));
                if let Err(e) = fs::write(&out_path, json) {
                    eprintln!("Error writing {}: {}", out_path.display(), e);
                }
                println!("Parsed {} -> OK", name);
            }
            Err(message) => {
                let out_path = output_dir.join(format!("{}.error.txt", name));
                if let Err(e) = fs::write(&out_path, &message) {
                    eprintln!("Error writing {}: {}", out_path.display(), e);
                }
                println!("Parsed {} -> ERROR: {}", name, message);
            }
        }
    }

    ExitCode::SUCCESS
}

/// Collect the .c file names directly inside `dir`, sorted by name.
fn collect_source_names(dir: &Path) -> Result<Vec<String>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Error reading directory {}: {}", dir.display(), e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| format!("Error reading directory {}: {}", dir.display(), e))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "c") {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}
