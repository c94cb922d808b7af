//! CLI arg parsing tests for the pulsetop binary.

use assert_cmd::Command;

fn run(args: &[&str], config_dir: &std::path::Path) -> (bool, String) {
    let output = Command::cargo_bin("pulsetop")
        .expect("binary built")
        .env("XDG_CONFIG_HOME", config_dir)
        .args(args)
        .output()
        .expect("run pulsetop");
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    (output.status.success(), text)
}

#[test]
fn help_mentions_short_and_long_flags() {
    let td = tempfile::tempdir().unwrap();
    let (ok, text) = run(&["--help"], td.path());
    assert!(ok);
    assert!(text.contains("Usage:"));
    for flag in ["--profile", "-P", "--save", "--demo", "--dry-run"] {
        assert!(text.contains(flag), "help text missing {flag}\n{text}");
    }
}

#[test]
fn dry_run_with_url_exits_cleanly_without_connecting() {
    let td = tempfile::tempdir().unwrap();
    let (ok, _text) = run(&["http://127.0.0.1:1", "--dry-run"], td.path());
    assert!(ok, "dry run must not attempt the network");
}

#[test]
fn demo_dry_run_exits_cleanly() {
    let td = tempfile::tempdir().unwrap();
    let (ok, _text) = run(&["--demo", "--dry-run"], td.path());
    assert!(ok);
}

#[test]
fn second_positional_argument_is_rejected() {
    let td = tempfile::tempdir().unwrap();
    let (_ok, text) = run(&["http://a:1", "http://b:2", "--dry-run"], td.path());
    assert!(
        text.contains("Unexpected argument"),
        "extra positional should be reported\n{text}"
    );
}

#[test]
fn no_inputs_reports_nothing_to_connect_to() {
    let td = tempfile::tempdir().unwrap();
    let (ok, text) = run(&["--dry-run"], td.path());
    assert!(ok);
    assert!(text.contains("No URL provided"), "got: {text}");
}
