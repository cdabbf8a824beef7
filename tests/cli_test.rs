use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the `rename` binary built alongside the tests.
fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rename"))
}

fn rename(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .env_remove("RENAME_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {:?}: {}", bin(), e))
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).into_owned()
}

fn stderr(o: &Output) -> String {
    String::from_utf8_lossy(&o.stderr).into_owned()
}

#[test]
fn renames_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("file_42.txt"), "").unwrap();
    fs::write(dir.path().join("file_abc.txt"), "").unwrap();

    let out = rename(&[r"file_(\d+)\.txt", "File_$1.txt", dir.path().to_str().unwrap()]);

    assert!(out.status.success());
    assert_eq!(stdout(&out), "file_42.txt -> File_42.txt\n");
    assert!(dir.path().join("File_42.txt").exists());
    assert!(dir.path().join("file_abc.txt").exists());
}

#[test]
fn defaults_to_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();

    let out = Command::new(bin())
        .args(["-n", "txt", "txt.old"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(out.status.success());
    assert_eq!(stdout(&out), "a.txt -> (dry run)a.txt.old\n");
    assert!(dir.path().join("a.txt").exists());
}

#[test]
fn short_flags_combine() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/old.txt"), "").unwrap();

    let out = rename(&["-rq", "old", "new", dir.path().to_str().unwrap()]);

    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(dir.path().join("sub/new.txt").exists());
}

#[test]
fn malformed_pattern_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();

    let out = rename(&["(", "x", dir.path().to_str().unwrap()]);

    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("rename: "));
    assert!(dir.path().join("a.txt").exists());
}

#[test]
fn missing_directory_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let out = rename(&["a", "b", missing.to_str().unwrap()]);

    assert!(!out.status.success());
    assert!(stderr(&out).starts_with("rename: "));
}

#[test]
fn usage_errors_exit_non_zero() {
    assert!(!rename(&[]).status.success());
    assert!(!rename(&["only-pattern"]).status.success());
    assert!(!rename(&["a", "b", ".", "extra"]).status.success());
    assert!(!rename(&["--bogus", "a", "b"]).status.success());
}

#[cfg(unix)]
#[test]
fn failed_rename_still_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a_1.txt"), "").unwrap();
    fs::write(dir.path().join("a_2.txt"), "").unwrap();
    fs::create_dir(dir.path().join("b_1.txt")).unwrap();

    let out = rename(&["-q", "^a_", "b_", dir.path().to_str().unwrap()]);

    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    let err = stderr(&out);
    assert_eq!(err.lines().count(), 1);
    assert!(err.starts_with("rename: cannot rename "));
    assert!(dir.path().join("b_2.txt").exists());
}

#[cfg(unix)]
#[test]
fn deleted_working_directory_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("gone");
    fs::create_dir(&gone).unwrap();

    let out = Command::new("sh")
        .args(["-c", r#"cd "$D" && rmdir "$D" && exec "$BIN" a b"#])
        .env("D", &gone)
        .env("BIN", bin())
        .env_remove("RENAME_LOG")
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("rename: cannot resolve current directory"));
}
