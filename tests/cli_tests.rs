//! Binary tests: flags, exit codes and output

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn roots_kit(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roots-kit").expect("compile bin");
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

fn bundled_file_count() -> usize {
    fn walk(dir: &Path) -> usize {
        fs::read_dir(dir)
            .expect("read bundled template")
            .map(|entry| entry.expect("read entry").path())
            .map(|path| if path.is_dir() { walk(&path) } else { 1 })
            .sum()
    }
    walk(&Path::new(env!("CARGO_MANIFEST_DIR")).join(".agent"))
}

#[test]
fn test_fresh_run_copies_template() {
    let work = TempDir::new().expect("create work tempdir");

    roots_kit(work.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Roots Kit"))
        .stdout(predicate::str::contains(format!(
            "✓ Done! {} files copied to .agent/",
            bundled_file_count()
        )))
        .stdout(predicate::str::contains("/brainstorm"));

    assert!(work.path().join(".agent/README.md").exists());
}

#[test]
fn test_second_run_without_flags_is_a_successful_no_op() {
    let work = TempDir::new().expect("create work tempdir");
    let dest = work.path().join(".agent");
    fs::create_dir_all(&dest).expect("create existing .agent");
    fs::write(dest.join("README.md"), b"local edits").expect("write local edits");

    roots_kit(work.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains(".agent/ already exists"))
        .stdout(predicate::str::contains("roots-kit --update"))
        .stdout(predicate::str::contains("Done!").not());

    assert_eq!(
        fs::read(dest.join("README.md")).expect("read README"),
        b"local edits"
    );
}

#[test]
fn test_force_replaces_and_drops_stale_files() {
    let work = TempDir::new().expect("create work tempdir");
    let dest = work.path().join(".agent");
    fs::create_dir_all(&dest).expect("create existing .agent");
    fs::write(dest.join("stale.txt"), b"x").expect("write stale");

    roots_kit(work.path())
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwriting existing .agent/"))
        .stdout(predicate::str::contains("files copied"));

    assert!(!dest.join("stale.txt").exists());
    assert!(dest.join("README.md").exists());
}

#[test]
fn test_update_keeps_local_files() {
    let work = TempDir::new().expect("create work tempdir");
    let dest = work.path().join(".agent");
    fs::create_dir_all(&dest).expect("create existing .agent");
    fs::write(dest.join("mine.md"), b"custom agent").expect("write custom");

    roots_kit(work.path())
        .arg("--update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updating existing .agent/"))
        .stdout(predicate::str::contains(format!(
            "{} files updated",
            bundled_file_count()
        )));

    assert_eq!(
        fs::read(dest.join("mine.md")).expect("read custom"),
        b"custom agent"
    );
    assert!(dest.join("README.md").exists());
}

#[test]
fn test_both_flags_behave_like_force() {
    let work = TempDir::new().expect("create work tempdir");
    let dest = work.path().join(".agent");
    fs::create_dir_all(&dest).expect("create existing .agent");
    fs::write(dest.join("stale.txt"), b"x").expect("write stale");

    roots_kit(work.path())
        .args(["--update", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("files copied"));

    assert!(!dest.join("stale.txt").exists());
}

#[test]
fn test_unknown_arguments_are_ignored() {
    let work = TempDir::new().expect("create work tempdir");

    roots_kit(work.path())
        .args(["--yes", "please", "-q"])
        .assert()
        .success();

    assert!(work.path().join(".agent").is_dir());
}

#[cfg(unix)]
#[test]
fn test_filesystem_failure_exits_with_one() {
    use std::os::unix::fs::PermissionsExt;

    let work = TempDir::new().expect("create work tempdir");
    fs::set_permissions(work.path(), fs::Permissions::from_mode(0o555))
        .expect("make work dir read-only");

    // root can write anyway; nothing to assert in that case
    let writable_anyway = fs::create_dir(work.path().join("write-check")).is_ok();
    let assert = roots_kit(work.path()).assert();

    fs::set_permissions(work.path(), fs::Permissions::from_mode(0o755))
        .expect("restore permissions");

    if !writable_anyway {
        assert
            .code(1)
            .stderr(predicate::str::contains("✗ Error:"));
    }
}

#[test]
fn test_repeated_flags_are_accepted() {
    let work = TempDir::new().expect("create work tempdir");
    fs::create_dir_all(work.path().join(".agent")).expect("create existing .agent");

    roots_kit(work.path())
        .args(["--update", "--update"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("files updated"));

    roots_kit(work.path())
        .args(["--force", "--force"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("files copied"));
}

#[test]
fn test_blocked_destination_exits_with_one() {
    let work = TempDir::new().expect("create work tempdir");
    fs::write(work.path().join(".agent"), b"not a directory").expect("write blocking file");

    roots_kit(work.path())
        .arg("--update")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✗ Error:"))
        .stdout(predicate::str::contains("Done!").not());

    assert_eq!(
        fs::read(work.path().join(".agent")).expect("read blocking file"),
        b"not a directory"
    );
}

#[test]
fn test_help_mentions_flag_precedence() {
    let work = TempDir::new().expect("create work tempdir");

    roots_kit(work.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force wins"))
        .stdout(predicate::str::contains("reports files as copied"));
}

#[test]
fn test_version_flag() {
    let work = TempDir::new().expect("create work tempdir");

    roots_kit(work.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    assert!(!work.path().join(".agent").exists());
}
