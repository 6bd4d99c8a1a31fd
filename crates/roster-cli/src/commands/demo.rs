//! Demo command
//!
//! Usage: roster demo [--json]
//!
//! Walks through a fixed scenario on three sample employees: add, update,
//! remove, searches, sorts, a raise and a department average.

use std::io::{self, Write};

use clap::Args;
use roster_core::{EmployeeRecord, EmployeeStore, FieldUpdate};

use super::render::{OutputFormat, Renderer};
use crate::config::CliConfig;

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Print records as JSON lines
    #[arg(long)]
    pub json: bool,
}

fn samples() -> [EmployeeRecord<u32>; 3] {
    [
        EmployeeRecord::new(101, "Alice Smith", "IT", 75_000.0, 4.6, 5, true),
        EmployeeRecord::new(102, "Bob Johnson", "HR", 65_000.0, 4.1, 3, true),
        EmployeeRecord::new(103, "Charlie Davis", "Finance", 82_000.0, 4.9, 7, false),
    ]
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "== {} ==", title)
}

/// Run the scenario against a fresh store
///
/// # Errors
///
/// Fails if the store rejects a scenario step or writing output fails.
pub fn run_scenario<W: Write>(
    out: &mut W,
    renderer: Renderer,
    config: &CliConfig,
) -> anyhow::Result<EmployeeStore<u32>> {
    let mut store = EmployeeStore::new();
    for record in samples() {
        store.add(record)?;
    }

    section(out, "All employees")?;
    renderer.records(out, &store.sort_by_experience())?;

    store.update(&102, FieldUpdate::Salary(70_000.0))?;
    let removed = store.remove(&103)?;
    section(out, &format!("After salary update and removing {}", removed.name))?;
    renderer.records(out, &store.sort_by_experience())?;

    section(out, "IT department")?;
    renderer.records(out, &store.search_by_department("IT"))?;

    section(out, "Name containing 'Ali'")?;
    renderer.records(out, &store.search_by_name("Ali"))?;

    section(out, &format!("Rating >= {}", config.raise_min_rating))?;
    renderer.records(out, &store.filter_by_performance(config.raise_min_rating))?;

    section(out, "Salary between 60000 and 90000")?;
    renderer.records(out, &store.filter_by_salary_range(60_000.0, 90_000.0))?;

    section(out, "Sorted by salary")?;
    renderer.records(out, &store.sort_by_salary())?;

    section(out, "Sorted by performance")?;
    renderer.records(out, &store.sort_by_performance())?;

    section(
        out,
        &format!(
            "{}% raise for rating >= {}",
            config.raise_percent, config.raise_min_rating
        ),
    )?;
    let count =
        store.give_raise_to_high_performers(config.raise_min_rating, config.raise_percent)?;
    renderer.raised(out, count)?;

    section(out, "Top 2 highest paid")?;
    renderer.records(out, &store.top_paid(2))?;

    section(out, "Average salary")?;
    renderer.average(out, "IT", store.average_salary_by_department("IT"))?;

    Ok(store)
}

/// Execute demo command
pub fn execute(args: DemoArgs, config: CliConfig) -> anyhow::Result<()> {
    let renderer = Renderer::new(OutputFormat::from_json_flag(args.json));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_scenario(&mut out, renderer, &config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_end_state() {
        let mut out = Vec::new();
        let store = run_scenario(&mut out, Renderer::default(), &CliConfig::default()).unwrap();

        assert_eq!(store.len(), 2);
        assert!((store.get(&101).unwrap().salary - 82_500.0).abs() < 1e-6);
        assert_eq!(store.get(&102).unwrap().salary, 70_000.0);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("== Top 2 highest paid =="));
        assert!(text.contains("Average salary in IT: $82500.00"));
        assert!(text.contains("Raised salary of 1 employee(s)"));
    }
}
