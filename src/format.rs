//! Plain-text rendering of a documentation entry.

use crate::store::{DocEntry, EntryKind};
use std::fmt::Write;

const RULE_WIDTH: usize = 72;

/// Render an entry, followed by a summary of its members for namespaces and types.
pub fn format_entry(entry: &DocEntry, members: &[DocEntry]) -> String {
    let mut output = String::new();

    let title = format!("{}: {}", entry.kind.label(), entry.path);
    let _ = writeln!(output, "{:->width$}", format!(" {}", title), width = RULE_WIDTH);
    output.push('\n');

    if let Some(signature) = &entry.signature {
        let _ = writeln!(output, "    {}\n", signature);
    }

    match entry.docs.as_deref().map(str::trim) {
        Some(docs) if !docs.is_empty() => {
            let _ = writeln!(output, "{}", docs);
        }
        _ => output.push_str("(No documentation)\n"),
    }

    if let Some(target) = entry.alias_target_path() {
        let _ = writeln!(output, "\nAlias of: {}", target);
    }

    if !entry.kind.is_callable() {
        write_members(&mut output, members);
    }

    output
}

/// Member sections in a fixed order, each listing names as they are written in paths.
fn write_members(output: &mut String, members: &[DocEntry]) {
    let sections = [
        ("Namespaces", EntryKind::Namespace),
        ("Types", EntryKind::Type),
        ("Constants", EntryKind::Constant),
        ("Type methods", EntryKind::TypeMethod),
        ("Instance methods", EntryKind::InstanceMethod),
    ];

    for (heading, kind) in sections {
        let names: Vec<String> = members
            .iter()
            .filter(|member| member.kind == kind)
            .map(member_label)
            .collect();
        if names.is_empty() {
            continue;
        }
        let _ = writeln!(output, "\n{}:\n{}", heading, "-".repeat(heading.len() + 1));
        let _ = writeln!(output, "{}", names.join(", "));
    }
}

fn member_label(member: &DocEntry) -> String {
    match member.scope() {
        Some(scope) => format!("{}{}", scope.separator(), member.name()),
        None => member.name().to_string(),
    }
}
