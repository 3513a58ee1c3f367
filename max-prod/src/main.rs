use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use grading_common::{parse_integer_rows, read_input};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Reduce {
    /// largest product over all admissible picks
    Max,
    /// sum of the products of all admissible picks
    Sum,
}

/// Generates the expected answer for a "one distinct index per array" test.
#[derive(Parser)]
#[command(name = "max-prod")]
struct Cli {
    /// One whitespace separated array per line
    #[arg(long, default_value = "test_without_sizes.txt")]
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = Reduce::Max)]
    reduce: Reduce,

    /// Also write the result here, e.g. answer.txt
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    grading_common::init_tracing();
    let cli = Cli::parse();

    let text = read_input(&cli.input)?;
    let arrays = parse_integer_rows(&cli.input, &text)?;
    tracing::debug!(
        arrays = arrays.len(),
        sizes = ?arrays.iter().map(Vec::len).collect::<Vec<_>>(),
        "loaded arrays"
    );

    let result = match cli.reduce {
        Reduce::Max => {
            let (indices, product) = max_prod::best_pick(&arrays).with_context(|| {
                format!(
                    "no choice of distinct indices exists for the {} arrays in {}",
                    arrays.len(),
                    cli.input.display()
                )
            })?;
            tracing::info!(?indices, %product, "best pick");
            product
        }
        Reduce::Sum => max_prod::sum_of_products(&arrays),
    };

    println!("{result}");
    if let Some(output) = &cli.output {
        std::fs::write(output, format!("{result}\n"))
            .with_context(|| format!("writing {}", output.display()))?;
    }
    Ok(())
}
