use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use friend_limit::{check, FriendScanner, DEFAULT_CLASSES, DEFAULT_MAX_FRIENDS};

/// Caps the number of `friend` declarations inside the graded classes.
#[derive(Parser)]
#[command(name = "friend-limit")]
struct Cli {
    /// Header to scan
    #[arg(long, default_value = "BigInteger.h")]
    header: PathBuf,

    /// Most friend declarations allowed per class
    #[arg(long, default_value_t = DEFAULT_MAX_FRIENDS)]
    max_friends: usize,

    /// Classes whose bodies are scanned
    #[arg(long = "class", default_values_t = DEFAULT_CLASSES.map(String::from))]
    classes: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    grading_common::init_tracing();
    let cli = Cli::parse();

    let scanner = FriendScanner::new(&cli.classes).context("building the class patterns")?;
    let header = grading_common::read_input(&cli.header)?;
    let reports = scanner.scan(&header);

    for class in &cli.classes {
        if !reports.iter().any(|report| &report.name == class) {
            tracing::debug!(%class, "class not found in header");
        }
    }
    for report in &reports {
        tracing::info!(class = %report.name, line = report.line, friends = report.friends, "scanned class");
    }

    match check(&reports, cli.max_friends) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(violation) => {
            println!("{violation}");
            Ok(ExitCode::FAILURE)
        }
    }
}
