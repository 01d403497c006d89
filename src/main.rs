//! CLI entry point for regroup

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use regroup::{process_path, GroupSet, OrganizerConfig};

#[derive(Parser, Debug)]
#[command(name = "regroup")]
#[command(about = "Groups and sorts imports, removing duplicates, in ActionScript, Java, and Scala sources")]
#[command(version)]
struct Args {
    /// Files to organize, or directories to walk for source files
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

/// Color when stdout is a terminal that wants it. There is no flag;
/// `NO_COLOR` and `TERM=dumb` are respected.
fn color_choice() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return ColorChoice::Never;
    }
    if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(1);
    });

    let groups = GroupSet::default();
    let config = OrganizerConfig::default();
    let mut out = StandardStream::stdout(color_choice());

    for path in &args.paths {
        if let Err(err) = process_path(path, &groups, &config, &mut out) {
            let _ = writeln!(out, "{err}");
            process::exit(1);
        }
    }
}
