use std::process::Command;

fn binary_output(args: &[&str]) -> std::process::Output {
    let path = env!("CARGO_BIN_EXE_oc-md5");
    Command::new(path)
        .args(args)
        .env_remove(cli::LOG_ENV)
        .output()
        .unwrap_or_else(|error| panic!("failed to run {path}: {error}"))
}

fn combined_utf8(output: &std::process::Output) -> String {
    let mut data = output.stdout.clone();
    data.extend_from_slice(&output.stderr);
    String::from_utf8(data).expect("binary output should be valid UTF-8")
}

#[test]
fn oc_md5_help_lists_usage() {
    let output = binary_output(&["--help"]);
    assert!(output.status.success(), "--help should succeed");
    assert!(
        output.stderr.is_empty(),
        "help output should not write to stderr"
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("oc-md5"));
    assert!(stdout.contains("--file"));
}

#[test]
fn oc_md5_without_operands_shows_usage() {
    let output = binary_output(&[]);
    assert!(
        !output.status.success(),
        "running without operands should fail so the caller sees the usage"
    );
    let combined = combined_utf8(&output);
    assert!(combined.contains("Usage:"));
}

#[test]
fn oc_md5_rejects_unknown_flag() {
    let output = binary_output(&["--definitely-not-a-flag", "abc"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn oc_md5_version_names_the_binary() {
    let output = binary_output(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.starts_with("oc-md5 "));
}

#[test]
fn oc_md5_hashes_a_string() {
    let output = binary_output(&["abc"]);
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        b"MD5 Hash: 900150983cd24fb0d6963f7d28e17f72\n"
    );
}
