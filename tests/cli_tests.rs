use assert_cmd::Command;
use predicates::prelude::*;

fn bramble_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bramble"))
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    bramble_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Query"))
        .stdout(predicate::str::contains("users(query: String): [User!]!"))
        .stdout(predicate::str::contains(
            "createUser(name: String!, email: String!, age: Int): User!",
        ))
        .stdout(predicate::str::contains(
            "deleteComment(userId: ID!, commentId: ID!): Comment!",
        ));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_query_lists_seeded_users() {
    bramble_cmd()
        .arg("query")
        .arg("{ users { id name email } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keisa"))
        .stdout(predicate::str::contains("geraldine@gmail.com"));
}

#[test]
fn test_query_filter_is_case_insensitive() {
    bramble_cmd()
        .arg("query")
        .arg(r#"{ users(query: "KEI") { name } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Keisa"))
        .stdout(predicate::str::contains("Jesús").not());
}

#[test]
fn test_query_empty_store() {
    bramble_cmd()
        .arg("query")
        .arg("--empty")
        .arg("{ users { id } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"users\": []"));
}

#[test]
fn test_query_resolves_nested_relationships() {
    bramble_cmd()
        .arg("query")
        .arg(r#"{ posts(query: "advanced") { title author { name } } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Advanced ReactJS"))
        .stdout(predicate::str::contains("Keisa"));
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn test_mutation_create_user_with_variables() {
    bramble_cmd()
        .arg("query")
        .arg("mutation($name: String!, $email: String!) { createUser(name: $name, email: $email) { name } }")
        .arg("--variables")
        .arg(r#"{"name": "Ada", "email": "ada@example.com"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"));
}

#[test]
fn test_mutation_duplicate_email_is_reported() {
    bramble_cmd()
        .arg("query")
        .arg(r#"mutation { createUser(name: "X", email: "keisa@gmail.com") { id } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Email already in use"));
}

#[test]
fn test_mutation_delete_comment_wrong_owner_is_reported() {
    bramble_cmd()
        .arg("query")
        .arg(r#"mutation { deleteComment(userId: "999", commentId: "14") { id } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment not found"));
}

#[test]
fn test_mutation_delete_user_returns_removed_record() {
    bramble_cmd()
        .arg("query")
        .arg(r#"mutation { deleteUser(userId: "2") { id name email } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("keisa@gmail.com"));
}

// =============================================================================
// CLI surface
// =============================================================================

#[test]
fn test_help_lists_subcommands() {
    bramble_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("schema"))
        .stdout(predicate::str::contains("query"));
}

#[test]
fn test_invalid_variables_json_fails() {
    bramble_cmd()
        .arg("query")
        .arg("{ users { id } }")
        .arg("--variables")
        .arg("not json")
        .assert()
        .failure();
}
