use std::{fmt::Display, path::Path};

use anyhow::Context;
use grading_common::{parse_single_integer, read_input};
use num_bigint_dig::BigInt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch { expected: BigInt, got: BigInt },
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Match => write!(f, "OK"),
            Verdict::Mismatch { expected, got } => {
                write!(f, "Wrong answer: expected {expected}, got {got}")
            }
        }
    }
}

/// numeric comparison, so `007` and `7` match
pub fn compare(got: &BigInt, expected: &BigInt) -> Verdict {
    if got == expected {
        Verdict::Match
    } else {
        Verdict::Mismatch {
            expected: expected.clone(),
            got: got.clone(),
        }
    }
}

pub fn compare_files(out: &Path, answer: &Path) -> anyhow::Result<Verdict> {
    let got = parse_single_integer(out, &read_input(out)?)
        .with_context(|| format!("reading the program output {}", out.display()))?;
    let expected = parse_single_integer(answer, &read_input(answer)?)
        .with_context(|| format!("reading the expected answer {}", answer.display()))?;
    Ok(compare(&got, &expected))
}
