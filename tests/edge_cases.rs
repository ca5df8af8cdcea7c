//! Edge case and error handling tests for lsr


use harness::{TestTree, run_lsr, sections};
use std::os::unix::fs::symlink;

// ============================================================================
// Symlinks
// ============================================================================

#[test]
fn test_broken_symlink_skipped_and_reported() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "");
    symlink("nonexistent.txt", tree.path().join("broken")).expect("Failed to create symlink");

    let (stdout, stderr, success) = run_lsr(tree.path(), &["--color", "never"]);
    assert!(success, "a failed status query is not fatal");
    assert!(stdout.contains(" real.txt\n"));
    assert!(!stdout.contains(" broken\n"), "{stdout}");
    assert!(stderr.contains("./broken"), "{stderr}");
}

#[test]
fn test_symlink_to_file_shows_target_metadata() {
    let tree = TestTree::new();
    tree.add_file_with_mode("target.txt", "12345", 0o644);
    symlink("target.txt", tree.path().join("link")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["--color", "never"]);
    assert!(success);
    let link_line = stdout
        .lines()
        .find(|l| l.ends_with(" link"))
        .expect("link should be listed");
    assert!(link_line.starts_with("-rw-r--r-- "), "{link_line}");
}

#[test]
fn test_symlink_to_directory_is_descended() {
    let tree = TestTree::new();
    tree.add_file("realdir/file.txt", "");
    symlink("realdir", tree.path().join("linkdir")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["--color", "never"]);
    assert!(success);
    let headers: Vec<String> = sections(&stdout).into_iter().map(|(h, _)| h).collect();
    assert!(headers.contains(&"./realdir".to_string()));
    assert!(headers.contains(&"./linkdir".to_string()), "{headers:?}");
}

// ============================================================================
// Non-regular files
// ============================================================================

#[test]
fn test_fifo_marked_as_directory_but_not_descended() {
    let tree = TestTree::new();
    let fifo = tree.path().join("pipe");
    nix::unistd::mkfifo(&fifo, nix::sys::stat::Mode::from_bits_truncate(0o644))
        .expect("Failed to create fifo");

    let (stdout, _stderr, success) = run_lsr(tree.path(), &[]);
    assert!(success);

    let parsed = sections(&stdout);
    assert_eq!(parsed.len(), 1, "fifo must not be walked: {stdout}");
    let line = &parsed[0].1[0];
    assert!(line.starts_with("drw-r--r-- "), "{line}");
    assert!(line.contains("\x1b[1;34mpipe\x1b[0m"), "{line:?}");
}

#[test]
fn test_exact_types_marks_fifo() {
    let tree = TestTree::new();
    let fifo = tree.path().join("pipe");
    nix::unistd::mkfifo(&fifo, nix::sys::stat::Mode::from_bits_truncate(0o644))
        .expect("Failed to create fifo");

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["--exact-types"]);
    assert!(success);
    let line = &sections(&stdout)[0].1[0];
    assert!(line.starts_with("prw-r--r-- "), "{line}");
    assert!(!line.contains('\x1b'), "{line:?}");
}

// ============================================================================
// Fatal errors
// ============================================================================

#[test]
fn test_missing_start_directory_fails() {
    let tree = TestTree::new();

    let (stdout, stderr, success) = run_lsr(tree.path(), &["does-not-exist"]);
    assert!(!success);
    assert_eq!(stdout, "does-not-exist:\n");
    assert!(stderr.contains("cannot open directory 'does-not-exist'"), "{stderr}");
}

#[test]
fn test_unreadable_subdirectory_stops_walk() {
    // Permission bits do not restrict root
    if nix::unistd::geteuid().is_root() {
        return;
    }

    let tree = TestTree::new();
    tree.add_dir("locked");
    tree.add_file("locked/secret.txt", "");
    tree.set_mode("locked", 0o000);

    let (stdout, stderr, success) = run_lsr(tree.path(), &["--color", "never"]);
    tree.set_mode("locked", 0o755);

    assert!(!success);
    assert!(stdout.ends_with("./locked:\n"), "{stdout}");
    assert!(stderr.contains("./locked"), "{stderr}");
}

// ============================================================================
// Depth limit
// ============================================================================

#[test]
fn test_level_limits_descent() {
    let tree = TestTree::new();
    tree.add_file("l1/l2/deep.txt", "");

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["-L", "1", "--color", "never"]);
    assert!(success);
    let headers: Vec<String> = sections(&stdout).into_iter().map(|(h, _)| h).collect();
    assert_eq!(headers, vec![".", "./l1"]);
    assert!(stdout.contains(" l2\n"), "l2 is listed but not entered");
    assert!(!stdout.contains("deep.txt"));
}

#[test]
fn test_level_zero_lists_start_only() {
    let tree = TestTree::new();
    tree.add_file("sub/file.txt", "");

    let (stdout, _stderr, success) = run_lsr(tree.path(), &["-L", "0", "--color", "never"]);
    assert!(success);
    assert_eq!(sections(&stdout).len(), 1);
}

// ============================================================================
// Output edge cases
// ============================================================================

#[test]
fn test_non_utf8_names_printed_verbatim() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use std::process::Command;

    let tree = TestTree::new();
    let raw = OsStr::from_bytes(b"bad\xffname");
    if std::fs::create_dir(tree.path().join(raw)).is_err() {
        // Filesystem refuses non-UTF-8 names
        return;
    }

    let output = Command::new(env!("CARGO_BIN_EXE_lsr"))
        .current_dir(tree.path())
        .output()
        .expect("Failed to run lsr");
    assert!(output.status.success());

    let stdout = output.stdout;
    let contains = |needle: &[u8]| stdout.windows(needle.len()).any(|w| w == needle);
    assert!(contains(b" \x1b[1;34mbad\xffname\x1b[0m\n"), "{stdout:?}");
    assert!(contains(b"\n./bad\xffname:\n"), "{stdout:?}");
    assert!(!contains("\u{fffd}".as_bytes()), "{stdout:?}");
}

#[test]
fn test_closed_reader_stops_quietly() {
    use std::io::{BufRead, BufReader};
    use std::process::{Command, Stdio};

    let tree = TestTree::new();
    // Far more output than a pipe buffer holds
    tree.populate(3, 8, 20);

    let mut child = Command::new(env!("CARGO_BIN_EXE_lsr"))
        .current_dir(tree.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run lsr");

    let stdout = child.stdout.take().expect("stdout is piped");
    let mut first = String::new();
    BufReader::new(stdout)
        .read_line(&mut first)
        .expect("Failed to read first line");
    assert_eq!(first, ".:\n");

    let output = child.wait_with_output().expect("Failed to wait for lsr");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "{stderr}");
    assert!(!stderr.contains("Broken pipe"), "{stderr}");
}
