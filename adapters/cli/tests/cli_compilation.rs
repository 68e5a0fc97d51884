use std::process::Command;

#[test]
fn cli_compiles_without_warnings() {
    let status = Command::new(env!("CARGO"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(["check", "--quiet", "--bin", "galaxy-voyager"])
        .status()
        .expect("failed to invoke cargo check for galaxy-voyager CLI binary");

    assert!(
        status.success(),
        "cargo check --bin galaxy-voyager should succeed"
    );
}

#[test]
fn help_lists_every_flag() {
    let output = Command::new(env!("CARGO"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(["run", "-q", "--bin", "galaxy-voyager", "--", "--help"])
        .output()
        .expect("failed to invoke galaxy-voyager --help");

    assert!(output.status.success(), "--help should exit cleanly");
    let help = String::from_utf8_lossy(&output.stdout);
    for flag in ["--seed", "--log-file", "--summary"] {
        assert!(help.contains(flag), "help text is missing {flag}: {help}");
    }
}
