mod common;

use assert2::check;
use common::{TempWorkspace, workspace};
use docq::{DocEntry, EntryKind};
use rstest::rstest;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn foo_entries() -> Vec<DocEntry> {
    vec![
        DocEntry::new("Foo", EntryKind::Type).with_docs("A foo."),
        DocEntry::new("Foo#bar", EntryKind::InstanceMethod).with_docs("Bars the foo."),
        DocEntry::new("Foo#baz", EntryKind::InstanceMethod).with_docs("Bazzes the foo."),
    ]
}

#[rstest]
fn test_missing_query_prints_usage(workspace: TempWorkspace) {
    let output = workspace.docq(&[], "");

    check!(output.status.code() == Some(1));
    check!(stdout(&output).contains("Usage: docq [options] <Path to object>"));
    check!(stdout(&output).contains("See docq --help for more options."));
}

#[rstest]
fn test_unknown_query_reports_no_documentation(workspace: TempWorkspace) {
    workspace.create_database(".docdb", foo_entries());

    let output = workspace.docq(&["Nope"], "");

    check!(output.status.code() == Some(1));
    check!(stderr(&output).contains("No documentation for `Nope'"));
}

#[rstest]
fn test_exact_hit_in_primary_database(workspace: TempWorkspace) {
    workspace.create_database(".docdb", foo_entries());

    let output = workspace.docq(&["Foo#bar"], "");

    check!(output.status.success());
    let text = stdout(&output);
    check!(text.contains(" Method: Foo#bar"));
    check!(text.contains("Bars the foo."));
    check!(workspace.read_file("state/cache").is_none());
}

#[rstest]
fn test_hit_in_extra_database_is_cached(workspace: TempWorkspace) {
    workspace.create_database("lib.docdb", foo_entries());

    let output = workspace.docq(&["-b", "lib.docdb", "Foo"], "");

    check!(output.status.success());
    check!(stdout(&output).contains("A foo."));
    check!(stdout(&output).contains("#bar, #baz"));
    check!(workspace.read_file("state/cache") == Some("Foo lib.docdb\n".to_string()));
}

#[rstest]
fn test_last_database_flag_is_searched_first(workspace: TempWorkspace) {
    workspace.create_database(
        "a.docdb",
        vec![DocEntry::new("Foo", EntryKind::Type).with_docs("From a.")],
    );
    workspace.create_database(
        "b.docdb",
        vec![DocEntry::new("Foo", EntryKind::Type).with_docs("From b.")],
    );

    let output = workspace.docq(&["-b", "a.docdb", "-b", "b.docdb", "Foo"], "");

    check!(output.status.success());
    check!(stdout(&output).contains("From b."));
}

#[rstest]
fn test_search_paths_file_adds_locations(workspace: TempWorkspace) {
    workspace.create_database("docs/extra.docdb", foo_entries());
    let location = workspace.path().join("docs/extra.docdb");
    workspace.create_file("state/search_paths", &format!("{}\n", location.display()));

    let output = workspace.docq(&["Foo#baz"], "");

    check!(output.status.success());
    check!(stdout(&output).contains("Bazzes the foo."));
}

#[rstest]
fn test_ambiguous_pattern_prompts_for_choice(workspace: TempWorkspace) {
    workspace.create_database(".docdb", foo_entries());

    let output = workspace.docq(&["#ba"], "2\n");

    check!(output.status.success());
    let text = stdout(&output);
    check!(text.contains("1. Foo#bar\n2. Foo#baz\nChoose one: "));
    check!(text.contains(" Method: Foo#baz"));
    check!(text.contains("Bazzes the foo."));
}

#[rstest]
#[case("9\n", "9")]
#[case("x\n", "x")]
#[case("\n", "")]
fn test_invalid_choice(workspace: TempWorkspace, #[case] answer: &str, #[case] shown: &str) {
    workspace.create_database(".docdb", foo_entries());

    let output = workspace.docq(&["#ba"], answer);

    check!(output.status.code() == Some(1));
    check!(stderr(&output).contains(&format!("`{}' is an invalid choice.", shown)));
}

#[rstest]
fn test_bare_type_pattern_skips_methods(workspace: TempWorkspace) {
    workspace.create_database(
        ".docdb",
        vec![
            DocEntry::new("Foo", EntryKind::Type).with_docs("A foo."),
            DocEntry::new("Foo#format", EntryKind::InstanceMethod),
        ],
    );

    let output = workspace.docq(&["Fo"], "");

    check!(output.status.success());
    check!(!stdout(&output).contains("Choose one"));
    check!(stdout(&output).contains(" Type: Foo"));
}

#[rstest]
fn test_alias_shows_target(workspace: TempWorkspace) {
    workspace.create_database(
        ".docdb",
        vec![
            DocEntry::new("Foo#size", EntryKind::InstanceMethod).with_alias_of("length"),
            DocEntry::new("Foo#length", EntryKind::InstanceMethod).with_docs("Number of items."),
        ],
    );

    let output = workspace.docq(&["Foo#size"], "");

    check!(output.status.success());
    check!(stdout(&output).contains(" Method: Foo#length"));
    check!(stdout(&output).contains("Number of items."));
}

#[rstest]
fn test_corrupt_database_is_skipped(workspace: TempWorkspace) {
    workspace.create_file(".docdb", "not json");
    workspace.create_database("lib.docdb", foo_entries());

    let output = workspace.docq(&["-b", "lib.docdb", "Foo#bar"], "");

    check!(output.status.success());
    check!(stdout(&output).contains("Bars the foo."));
    check!(stderr(&output).contains("Skipping documentation database"));
}
