//! Run the `Tm` binary end to end.

use std::process::{Command, Output};

fn tm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_Tm"))
        .args(args)
        .output()
        .expect("failed to run Tm")
}

#[test]
fn prints_tm_and_exits_zero() {
    let out = tm(&["--dna=200", "--na=50", "--mg=3", "--dntp=0.8", "atgcatgc"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "26.4\n");
}

#[test]
fn unknown_bp_exits_one() {
    let out = tm(&["ATGCXTGC"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: Unknown bp encountered: X"), "{stderr}");
}

#[test]
fn negative_concentration_exits_one() {
    let out = tm(&["--na", "-5", "ATGCATGC"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: Invalid Na+ concentration: -5"), "{stderr}");
}

#[test]
fn too_short_exits_one() {
    let out = tm(&["A"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: Sequence, 1bp, is too short"), "{stderr}");
}
