use std::process::Command;

fn finder() -> Command {
    Command::new(env!("CARGO_BIN_EXE_crtsh-finder"))
}

#[test]
fn missing_domain_exits_1_with_usage() {
    let out = finder().output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Error: a domain is required"));
    assert!(stdout.contains("Usage: crtsh-finder -d domain.com"));
}

#[test]
fn version_flag_exits_0_and_prints_version() {
    let out = finder().arg("-v").output().unwrap();
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout,
        format!("crtsh-finder version {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn version_flag_wins_over_missing_domain() {
    // -v short-circuits before domain validation.
    let out = finder().args(["-v", "-s"]).output().unwrap();
    assert_eq!(out.status.code(), Some(0));
}
