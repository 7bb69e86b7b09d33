//! CLI integration tests for folio
//!
//! Each test builds a small site in a temporary directory and runs the
//! `folio` binary against it.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn folio_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("folio"))
}

fn write_post(content_dir: &Path, key: &str, date: &str, categories: &str, body: &str) {
    fs::write(
        content_dir.join(format!("{}.md", key)),
        format!(
            "---\ntitle: Post {}\ndate: {}\nexcerpt: About {}\ncategories: {}\n---\n{}\n",
            key, date, key, categories, body
        ),
    )
    .unwrap();
}

/// a (Jan, React), b (Mar, React+CSS), c (Feb, none)
fn setup_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let content = dir.path().join("content/blog");
    fs::create_dir_all(&content).unwrap();
    write_post(&content, "a", "2024-01-01", "[React]", "alpha");
    write_post(&content, "b", "2024-03-01", "[React, CSS]", "beta");
    write_post(&content, "c", "2024-02-01", "[]", "gamma");
    dir
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_list_posts_newest_first() {
    let dir = setup_site();

    let output = folio_cmd()
        .arg("--cwd")
        .arg(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Posts (3):"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let b = stdout.find("[b]").unwrap();
    let c = stdout.find("[c]").unwrap();
    let a = stdout.find("[a]").unwrap();
    assert!(b < c && c < a);
}

#[test]
fn test_list_categories() {
    let dir = setup_site();

    folio_cmd()
        .arg("--cwd")
        .arg(dir.path())
        .args(["list", "categories", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"CSS\"").and(predicate::str::contains("\"React\"")));
}

#[test]
fn test_list_with_custom_content_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("_config.yml"), "content_dir: posts\n").unwrap();
    let content = dir.path().join("posts");
    fs::create_dir_all(&content).unwrap();
    write_post(&content, "only", "2024-01-01", "[]", "x");

    folio_cmd()
        .arg("--cwd")
        .arg(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[only]"));
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn test_show_post() {
    let dir = setup_site();

    folio_cmd()
        .arg("--cwd")
        .arg(dir.path())
        .args(["show", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post b"))
        .stdout(predicate::str::contains("Cover: /images/blog/react.jpg"))
        .stdout(predicate::str::contains("beta"));
}

#[test]
fn test_show_missing_post_fails_cleanly() {
    let dir = setup_site();

    folio_cmd()
        .arg("--cwd")
        .arg(dir.path())
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Post not found: nope"));
}

#[test]
fn test_related_posts() {
    let dir = setup_site();

    folio_cmd()
        .arg("--cwd")
        .arg(dir.path())
        .args(["related", "a", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Related to a (1):"))
        .stdout(predicate::str::contains("[b]"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_missing_content_directory() {
    let dir = TempDir::new().unwrap();

    folio_cmd()
        .arg("--cwd")
        .arg(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Content directory not found"));
}

#[test]
fn test_malformed_post_aborts_listing() {
    let dir = setup_site();
    fs::write(
        dir.path().join("content/blog/broken.md"),
        "---\ndate: 2024-01-01\nexcerpt: no title\n---\nbody\n",
    )
    .unwrap();

    folio_cmd()
        .arg("--cwd")
        .arg(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.md"))
        .stderr(predicate::str::contains("title"));
}
