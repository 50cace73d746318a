use assert_cmd::Command;

#[test]
fn test_no_arguments_exits_with_error() {
    let output = Command::cargo_bin("mview").unwrap().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(String::from_utf8_lossy(&output.stderr), "missing media files\n");
}

#[test]
fn test_flag_lookalike_is_inspected_as_file() {
    let output = Command::cargo_bin("mview")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();

    // No such file, so probing fails after the header is written
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--help"));
    assert!(!output.stderr.is_empty());
}
