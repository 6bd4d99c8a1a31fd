//! Output rendering for shell and demo commands
//!
//! Records print as an aligned table or, with `--json`, one JSON object per
//! line.

use std::fmt::Display;
use std::io::{self, Write};

use roster_core::{EmployeeRecord, ExError, ExErrorKind};
use serde::Serialize;
use serde_json::json;

const HEADERS: [&str; 7] = ["ID", "Name", "Department", "Salary", "Rating", "Years", "Active"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// Writes command results in the selected format
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn records<Id, W>(&self, out: &mut W, records: &[&EmployeeRecord<Id>]) -> io::Result<()>
    where
        Id: Display + Serialize,
        W: Write,
    {
        match self.format {
            OutputFormat::Table => out.write_all(format_table(records).as_bytes()),
            OutputFormat::Json => {
                for record in records {
                    let line = serde_json::to_string(record).map_err(io::Error::other)?;
                    writeln!(out, "{}", line)?;
                }
                Ok(())
            }
        }
    }

    pub fn message<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Table => writeln!(out, "{}", text),
            OutputFormat::Json => writeln!(out, "{}", json!({ "message": text })),
        }
    }

    pub fn average<W: Write>(&self, out: &mut W, department: &str, average: f64) -> io::Result<()> {
        match self.format {
            OutputFormat::Table => {
                writeln!(out, "Average salary in {}: ${:.2}", department, average)
            }
            OutputFormat::Json => writeln!(
                out,
                "{}",
                json!({ "department": department, "average_salary": average })
            ),
        }
    }

    pub fn raised<W: Write>(&self, out: &mut W, count: usize) -> io::Result<()> {
        match self.format {
            OutputFormat::Table => writeln!(out, "Raised salary of {} employee(s)", count),
            OutputFormat::Json => writeln!(out, "{}", json!({ "raised": count })),
        }
    }

    /// Unparsable input prints as `invalid input: ...`, store failures as
    /// `error [CODE]: ...`
    pub fn error<W: Write>(&self, out: &mut W, err: &ExError) -> io::Result<()> {
        match self.format {
            OutputFormat::Table if err.kind() == ExErrorKind::InvalidInput => {
                writeln!(out, "invalid input: {}", err.message())
            }
            OutputFormat::Table => writeln!(out, "error [{}]: {}", err.code(), err.message()),
            OutputFormat::Json => writeln!(
                out,
                "{}",
                json!({ "error": err.code(), "message": err.message() })
            ),
        }
    }
}

fn cells<Id: Display>(record: &EmployeeRecord<Id>) -> [String; 7] {
    [
        record.id.to_string(),
        record.name.clone(),
        record.department.clone(),
        format!("{:.2}", record.salary),
        record.performance_rating.to_string(),
        record.years_of_experience.to_string(),
        if record.active { "Yes" } else { "No" }.to_string(),
    ]
}

/// Render records as a left-aligned text table
pub fn format_table<Id: Display>(records: &[&EmployeeRecord<Id>]) -> String {
    if records.is_empty() {
        return "(no employees)\n".to_string();
    }

    let rows: Vec<[String; 7]> = records.iter().map(|r| cells(r)).collect();
    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    push_row(&mut table, &HEADERS.map(String::from), &widths);
    for row in &rows {
        push_row(&mut table, row, &widths);
    }
    table
}

fn push_row(table: &mut String, row: &[String; 7], widths: &[usize; 7]) {
    let line: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    table.push_str(line.join("  ").trim_end());
    table.push('\n');
}
