use std::process::{Command, Output};

fn run_with_input(input: &str, args: &[&str]) -> (tempfile::TempDir, Output) {
    let dir = tempfile::tempdir().expect("should create temp dir");
    std::fs::write(dir.path().join("test_without_sizes.txt"), input)
        .expect("should write arrays");
    let output = Command::new(env!("CARGO_BIN_EXE_max-prod"))
        .args(args)
        .current_dir(dir.path())
        .output()
        .expect("should run max-prod binary");
    (dir, output)
}

#[test]
fn prints_max_product() {
    let (_dir, output) = run_with_input("1 2\n3 4\n", &[]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "6\n");
}

#[test]
fn sum_mode_and_output_file() {
    let (dir, output) = run_with_input("1 2\n3 4\n", &["--reduce", "sum", "--output", "answer.txt"]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "10\n");
    let written = std::fs::read_to_string(dir.path().join("answer.txt"))
        .expect("should have written answer.txt");
    assert_eq!(written, "10\n");
}

#[test]
fn no_admissible_pick_fails() {
    let (_dir, output) = run_with_input("7\n8\n", &[]);
    assert_ne!(output.status.code(), Some(0), "{output:?}");
    assert!(output.stdout.is_empty());
}

#[test]
fn malformed_row_fails() {
    let (_dir, output) = run_with_input("1 2\n3 four\n", &[]);
    assert_ne!(output.status.code(), Some(0), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("four"), "{stderr}");
}
