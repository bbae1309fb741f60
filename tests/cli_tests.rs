use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a command for the bookshelf binary
fn bookshelf_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bookshelf"))
}

// =============================================================================
// Basic CLI Tests
// =============================================================================

#[test]
fn test_help_flag() {
    bookshelf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("query"));
}

#[test]
fn test_version_flag() {
    bookshelf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookshelf"));
}

#[test]
fn test_no_command_shows_help() {
    bookshelf_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// =============================================================================
// Init Tests
// =============================================================================

#[test]
fn test_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    let config_path = temp_dir.path().join("bookshelf.toml");
    assert!(config_path.exists());

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("port = 5000"));
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    bookshelf_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_cmd()
        .current_dir(temp_dir.path())
        .args(["--config", "no-such-file.toml", "schema"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

// =============================================================================
// Schema Tests
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    bookshelf_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Author"))
        .stdout(predicate::str::contains("type Book"))
        .stdout(predicate::str::contains("addBook"));
}

// =============================================================================
// Query Tests
// =============================================================================

#[test]
fn test_query_reads_seed_data() {
    bookshelf_cmd()
        .args(["query", "{ book(id: 4) { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Fellowship of the Ring"));
}

#[test]
fn test_query_lists_all_authors() {
    bookshelf_cmd()
        .args(["query", "{ authors { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("J. K. Rowling"))
        .stdout(predicate::str::contains("J. R. R. Tolkien"))
        .stdout(predicate::str::contains("Brent Weeks"));
}

#[test]
fn test_query_with_variables() {
    bookshelf_cmd()
        .args([
            "query",
            "query($id: Int!) { author(id: $id) { name } }",
            "--variables",
            r#"{"id": 3}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brent Weeks"));
}

#[test]
fn test_query_with_invalid_variables_fails() {
    bookshelf_cmd()
        .args([
            "query",
            "{ authors { name } }",
            "--variables",
            "not-json",
        ])
        .assert()
        .failure();
}

// =============================================================================
// Mutate Tests
// =============================================================================

#[test]
fn test_mutate_adds_author() {
    bookshelf_cmd()
        .args(["mutate", r#"addAuthor(name: "Brandon Sanderson") { id name }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brandon Sanderson"))
        .stdout(predicate::str::contains("\"id\": 4"));
}

#[test]
fn test_mutate_reports_resolver_errors() {
    bookshelf_cmd()
        .args(["mutate", r#"addBook(name: "Ghost Entry", authorId: 42) { id }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}
