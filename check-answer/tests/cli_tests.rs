use std::process::{Command, Output};

fn run_in(files: &[(&str, &str)]) -> Output {
    let dir = tempfile::tempdir().expect("should create temp dir");
    for (name, content) in files {
        std::fs::write(dir.path().join(name), content).expect("should write input file");
    }
    Command::new(env!("CARGO_BIN_EXE_check-answer"))
        .current_dir(dir.path())
        .output()
        .expect("should run check-answer binary")
}

#[test]
fn matching_answers_exit_zero() {
    let output = run_in(&[("out.txt", "5"), ("answer.txt", "5\n")]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert!(output.stdout.is_empty());
}

#[test]
fn mismatch_exits_one_with_diagnostic() {
    let output = run_in(&[("out.txt", "5"), ("answer.txt", "6")]);
    assert_eq!(output.status.code(), Some(1), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Wrong answer: expected 6, got 5");
}

#[test]
fn missing_output_file_fails() {
    let output = run_in(&[("answer.txt", "6")]);
    assert_ne!(output.status.code(), Some(0), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out.txt"), "{stderr}");
}
