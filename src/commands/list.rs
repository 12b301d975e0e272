use crate::scenarios;
use anyhow::Result;
use colored::*;
use std::io::Write;

/// Print every scenario with its style and description.
pub fn list_scenarios<W: Write>(out: &mut W, color: bool) -> Result<()> {
    let width = scenarios::names()
        .iter()
        .map(|name| name.len())
        .max()
        .unwrap_or(0);

    for scenario in scenarios::all() {
        let name = format!("{:<width$}", scenario.name);
        let name = if color { name.cyan().bold() } else { name.normal() };
        writeln!(
            out,
            "{}  {} ({})",
            name, scenario.description, scenario.style
        )?;
    }
    Ok(())
}
