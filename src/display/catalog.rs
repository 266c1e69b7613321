//! Plain-text rendering of a catalog for help panels.
use crate::catalog::{Catalog, OperandType};
use std::fmt::Write;

/// Renders the vocabulary as a plain-text reference card.
///
/// ```text
/// VARIABLES
/// --------------------------------------------------
/// Int:
/// |-- transaction.amount
/// `-- account.balance
/// String:
/// `-- transaction.currency
///
/// OPERATORS
/// --------------------------------------------------
/// ≥  (Int, Int)
/// ```
pub fn format_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "VARIABLES");
    let _ = writeln!(out, "--------------------------------------------------");
    for t in [OperandType::Int, OperandType::String] {
        let names: Vec<&str> = catalog.variables_of(t).map(|v| v.name.as_str()).collect();
        if names.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}:", t);
        for (i, name) in names.iter().enumerate() {
            let connector = if i == names.len() - 1 { "`--" } else { "|--" };
            let _ = writeln!(out, "{} {}", connector, name);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "OPERATORS");
    let _ = writeln!(out, "--------------------------------------------------");
    let width = catalog
        .operators()
        .iter()
        .map(|op| op.symbol.chars().count())
        .max()
        .unwrap_or(0);
    for op in catalog.operators() {
        let pairs = op
            .pairs
            .iter()
            .map(|p| format!("({}, {})", p.left(), p.right()))
            .collect::<Vec<_>>()
            .join(" | ");
        let pad = width - op.symbol.chars().count();
        let _ = writeln!(out, "{}{}  {}", op.symbol, " ".repeat(pad), pairs);
    }
    out
}
