//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use docvault_service::{Notice, Severity};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No documents found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{item:#?}");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Print a notice.
///
/// In JSON mode notices go to stderr so stdout holds only data.
pub fn print_notice(notice: &Notice, format: OutputFormat) {
    if format == OutputFormat::Json {
        let json = serde_json::to_string(notice).unwrap_or_else(|_| "{}".to_string());
        eprintln!("{json}");
        return;
    }

    match notice.severity {
        Severity::Success => println!("✓ {}: {}", notice.title, notice.description),
        Severity::Info => println!("ℹ {}: {}", notice.title, notice.description),
        Severity::Error => eprintln!("✗ {}: {}", notice.title, notice.description),
    }
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}
