//! CLI entry point for classfind

use std::path::PathBuf;
use std::process;

use clap::Parser;

use regroup::{import_statement, ClassIndex};

#[derive(Parser, Debug)]
#[command(name = "classfind")]
#[command(about = "Looks up fully-qualified names for a class and prints its import statement")]
#[command(version)]
struct Args {
    /// Simple class name to look up
    class_name: String,

    /// JSON index files or source directories to search
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Write the merged index as JSON for faster lookups later
    #[arg(long = "save", value_name = "FILE")]
    save: Option<PathBuf>,
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(1);
    });

    let mut index = ClassIndex::new();
    for path in &args.paths {
        if path.is_dir() {
            index.scan_tree(path);
        } else {
            match ClassIndex::load(path) {
                Ok(loaded) => index.merge(loaded),
                Err(err) => {
                    println!("{err}");
                    process::exit(1);
                }
            }
        }
    }

    if let Some(save) = &args.save {
        if let Err(err) = index.save(save) {
            println!("{err}");
            process::exit(1);
        }
    }

    let candidates = index.lookup(&args.class_name);
    match candidates.as_slice() {
        [] => println!("No classes found for {}", args.class_name),
        [only] => println!("{}", import_statement(only)),
        _ => {
            println!("Multiple classes found for {}", args.class_name);
            for (idx, full) in candidates.iter().enumerate() {
                println!("{} {}", idx + 1, import_statement(full));
            }
        }
    }
}
