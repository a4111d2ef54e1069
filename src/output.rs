//! Table and JSON output formatting for browser commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use filestree_entity::{EntryNode, EntryTree};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat, empty: &str) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{empty}");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => print_json(&items, "[]"),
    }
}

/// Print a single serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(item: &T, fallback: &str) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| fallback.to_string());
    println!("{json}");
}

/// Print an entry tree, indented in table mode
pub fn print_tree(tree: &EntryTree, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if tree.roots.is_empty() {
                println!("(empty)");
                return;
            }
            for node in &tree.roots {
                print_node(node);
            }
            if !tree.unreachable.is_empty() {
                print_warning(&format!(
                    "{} entries are not reachable from the root",
                    tree.unreachable.len()
                ));
            }
        }
        OutputFormat::Json => print_json(tree, "{}"),
    }
}

fn print_node(node: &EntryNode) {
    let indent = "  ".repeat(node.depth);
    if node.entry_type.is_directory() {
        println!(
            "{indent}{}/ ({} items, {} below)",
            node.name,
            node.child_count(),
            node.descendant_count()
        );
    } else {
        println!("{indent}{}", node.name);
    }
    for child in &node.children {
        print_node(child);
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<12} {}", format!("{key}:"), value);
}
