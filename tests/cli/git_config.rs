//! Tests for `gcp-encrypt git-config` command.

use crate::skip_without_git;
use crate::support::*;

#[test]
fn test_git_config_untracks_and_ignores() {
    skip_without_git!();

    let t = Test::configured(DEFAULT_FILES);
    t.write("test1.txt", "one");
    t.write("test2.txt", "two");
    t.write("other.txt", "other");
    t.git_repo_with(&["test1.txt", "test2.txt", "other.txt"]);

    let output = t.git_config();
    assert_success(&output);
    assert_stdout_contains(&output, "untracked test1.txt");
    assert_stdout_contains(&output, "untracked test2.txt");

    assert_tracked(&t, &["other.txt"]);
    assert!(t.exists("test1.txt"), "untracked files stay on disk");

    assert_eq!(
        t.read(".gitignore"),
        "### GCP ENCRYPT BEGIN\ntest1.txt\ntest2.txt\ntest3.txt\n### GCP ENCRYPT END\n"
    );
}

#[test]
fn test_git_config_untracks_non_ascii_path() {
    skip_without_git!();

    let t = Test::configured(&["café.txt"]);
    t.write("café.txt", "secret");
    t.write("other.txt", "other");
    t.git_repo_with(&["café.txt", "other.txt"]);

    let output = t.git_config();
    assert_success(&output);
    assert_stdout_contains(&output, "untracked café.txt");
    assert_tracked(&t, &["other.txt"]);
    assert_managed_block(&t, &["café.txt"]);
}

#[test]
fn test_git_config_untracks_dash_prefixed_path() {
    skip_without_git!();

    let t = Test::configured(&["-dash.txt"]);
    t.write("-dash.txt", "secret");
    t.write("other.txt", "other");
    t.git_repo_with(&["-dash.txt", "other.txt"]);

    let output = t.git_config();
    assert_success(&output);
    assert_stdout_contains(&output, "untracked -dash.txt");
    assert_tracked(&t, &["other.txt"]);
    assert!(t.exists("-dash.txt"));
    assert_managed_block(&t, &["-dash.txt"]);
}

#[test]
fn test_git_config_updates_existing_block() {
    skip_without_git!();

    let t = Test::configured(&["test2.txt"]);
    t.write(".gitignore", CONFIGURED_GITIGNORE);
    t.git(&["init", "-q"]);

    let output = t.git_config();
    assert_success(&output);
    assert_eq!(
        t.read(".gitignore"),
        "some_file.txt\n### GCP ENCRYPT BEGIN\ntest2.txt\n### GCP ENCRYPT END\nanother_file.txt\n"
    );
}

#[test]
fn test_git_config_is_idempotent() {
    skip_without_git!();

    let t = Test::configured(DEFAULT_FILES);
    t.write(".gitignore", "target/\n");
    t.git(&["init", "-q"]);

    assert_success(&t.git_config());
    let first = t.read(".gitignore");

    let output = t.git_config();
    assert_success(&output);
    assert_stdout_contains(&output, "already up to date");
    assert_eq!(t.read(".gitignore"), first);
    assert!(first.starts_with("target/\n\n### GCP ENCRYPT BEGIN\n"));
}

#[test]
fn test_git_config_without_files() {
    skip_without_git!();

    let t = Test::configured(&[]);
    t.git(&["init", "-q"]);

    assert_success(&t.git_config());
    assert_managed_block(&t, &[]);
    assert_eq!(
        t.read(".gitignore"),
        "### GCP ENCRYPT BEGIN\n### GCP ENCRYPT END\n"
    );
}

#[test]
fn test_git_not_found() {
    let t = Test::configured(DEFAULT_FILES);
    let missing = t.bin.path().join("no-such-git");

    let output = t
        .cmd()
        .arg("--git")
        .arg(&missing)
        .arg("git-config")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "could not find `git` executable");
    assert!(!t.exists(".gitignore"));
}
