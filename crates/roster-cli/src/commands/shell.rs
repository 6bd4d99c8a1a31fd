//! Shell command
//!
//! Usage: roster shell [--script <FILE>] [--json]
//!
//! Reads one store command per line from stdin or a script file. Lines are
//! split with shell quoting rules, so `add "Alice Smith" IT 75000 4.6 5`
//! works as expected. Blank lines and lines starting with `#` are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use roster_core::{
    log_op_start, EmployeeRecord, EmployeeStore, ExError, FieldValue, UpdatableField, ValueKind,
};
use roster_core_types::schema::OP_ADD;
use roster_core_types::{RequestContext, Sensitive, TraceId};
use uuid::Uuid;

use super::render::{OutputFormat, Renderer};
use crate::config::CliConfig;

const OP_SHELL: &str = "shell";

#[derive(Debug, Args)]
pub struct ShellArgs {
    /// Read commands from this file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Print results as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// One parsed shell line
#[derive(Debug, Parser)]
#[command(name = "roster", no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Add or replace an employee
    Add {
        /// Employee id (a new UUID when omitted)
        #[arg(long)]
        id: Option<String>,
        name: String,
        department: String,
        #[arg(allow_negative_numbers = true)]
        salary: f64,
        #[arg(allow_negative_numbers = true)]
        rating: f64,
        years: u32,
        /// Mark the employee as active
        #[arg(long)]
        active: bool,
    },
    /// Show one employee
    Get { id: String },
    /// Remove an employee and show the removed record
    Remove { id: String },
    /// Delete an employee
    Delete { id: String },
    /// Change one field of an employee
    Update {
        id: String,
        field: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// List all employees
    List,
    /// Search by name substring or department
    Search { term: String },
    /// Employees of a department
    Dept { department: String },
    /// Employees whose name contains the text
    Name { text: String },
    /// Employees rated at least MIN
    Rating {
        #[arg(allow_negative_numbers = true)]
        min: f64,
    },
    /// Employees earning between MIN and MAX inclusive
    Salary {
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },
    /// All employees in sorted order
    Sort {
        #[arg(value_enum)]
        key: SortKey,
    },
    /// Highest paid employees
    Top { n: Option<usize> },
    /// Average salary of a department
    Avg { department: String },
    /// Raise salaries of high performers
    Raise {
        #[arg(allow_negative_numbers = true)]
        min_rating: Option<f64>,
        #[arg(allow_negative_numbers = true)]
        percent: Option<f64>,
    },
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortKey {
    /// Highest salary first
    Salary,
    /// Highest rating first
    #[value(alias = "performance")]
    Rating,
    /// Fewest years first
    Experience,
}

/// Whether the shell keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

enum Reply {
    Records(Vec<EmployeeRecord<String>>),
    Message(String),
    Average { department: String, average: f64 },
    Raised(usize),
    Help(String),
    Quit,
}

/// A shell session owning its store
pub struct Session {
    store: EmployeeStore<String>,
    renderer: Renderer,
    config: CliConfig,
    context: RequestContext,
}

impl Session {
    pub fn new(config: CliConfig, format: OutputFormat) -> Self {
        Self {
            store: EmployeeStore::new(),
            renderer: Renderer::new(format),
            config,
            context: RequestContext::new().with_trace_id(TraceId::new()),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &EmployeeStore<String> {
        &self.store
    }

    /// Process lines until input ends or `quit`
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        prompt: bool,
    ) -> io::Result<()> {
        if prompt {
            write!(out, "roster> ")?;
            out.flush()?;
        }
        for line in input.lines() {
            if self.handle_line(&line?, out)? == Flow::Quit {
                break;
            }
            if prompt {
                write!(out, "roster> ")?;
                out.flush()?;
            }
        }
        Ok(())
    }

    /// Parse and run one line, writing its result
    ///
    /// # Errors
    ///
    /// Returns an error only when writing output fails.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let ctx = self.context.next_request();
        let reply = match parse_line(line) {
            Ok(Parsed::Command(command)) => self.execute(command),
            Ok(Parsed::Help(text)) => Ok(Reply::Help(text)),
            Err(err) => Err(err),
        };

        match reply {
            Ok(Reply::Quit) => return Ok(Flow::Quit),
            Ok(reply) => self.write_reply(out, reply)?,
            Err(err) => {
                let err = err.with_context(&ctx);
                tracing::debug!(
                    op = OP_SHELL,
                    request_id = %ctx.request_id,
                    err.code = err.code(),
                    "shell line failed"
                );
                self.renderer.error(out, &err)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn execute(&mut self, command: ShellCommand) -> Result<Reply, ExError> {
        let reply = match command {
            ShellCommand::Add {
                id,
                name,
                department,
                salary,
                rating,
                years,
                active,
            } => {
                let id = id.unwrap_or_else(|| Uuid::now_v7().to_string());
                log_op_start!(
                    OP_ADD,
                    employee_id = id.as_str(),
                    salary = %Sensitive::new(salary)
                );
                let record =
                    EmployeeRecord::new(id.clone(), name, department, salary, rating, years, active);
                self.store.add(record)?;
                Reply::Message(format!("Added employee {}", id))
            }
            ShellCommand::Get { id } => Reply::Records(vec![self.store.get(&id)?.clone()]),
            ShellCommand::Remove { id } => Reply::Records(vec![self.store.remove(&id)?]),
            ShellCommand::Delete { id } => {
                self.store.delete(&id)?;
                Reply::Message(format!("Deleted employee {}", id))
            }
            ShellCommand::Update { id, field, value } => {
                let value = parse_field_value(&field, &value)?;
                self.store.update_field(&id, &field, value)?;
                Reply::Message(format!("Updated {} of employee {}", field, id))
            }
            ShellCommand::List => Reply::Records(owned(self.store.sort_by_experience())),
            ShellCommand::Search { term } => Reply::Records(owned(self.store.search(&term))),
            ShellCommand::Dept { department } => {
                Reply::Records(owned(self.store.search_by_department(&department)))
            }
            ShellCommand::Name { text } => Reply::Records(owned(self.store.search_by_name(&text))),
            ShellCommand::Rating { min } => {
                Reply::Records(owned(self.store.filter_by_performance(min)))
            }
            ShellCommand::Salary { min, max } => {
                Reply::Records(owned(self.store.filter_by_salary_range(min, max)))
            }
            ShellCommand::Sort { key } => Reply::Records(owned(match key {
                SortKey::Salary => self.store.sort_by_salary(),
                SortKey::Rating => self.store.sort_by_performance(),
                SortKey::Experience => self.store.sort_by_experience(),
            })),
            ShellCommand::Top { n } => {
                let n = n.unwrap_or(self.config.top_default);
                Reply::Records(owned(self.store.top_paid(n)))
            }
            ShellCommand::Avg { department } => Reply::Average {
                average: self.store.average_salary_by_department(&department),
                department,
            },
            ShellCommand::Raise {
                min_rating,
                percent,
            } => Reply::Raised(self.store.give_raise_to_high_performers(
                min_rating.unwrap_or(self.config.raise_min_rating),
                percent.unwrap_or(self.config.raise_percent),
            )?),
            ShellCommand::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    fn write_reply<W: Write>(&self, out: &mut W, reply: Reply) -> io::Result<()> {
        match reply {
            Reply::Records(records) => {
                let refs: Vec<&EmployeeRecord<String>> = records.iter().collect();
                self.renderer.records(out, &refs)
            }
            Reply::Message(text) => self.renderer.message(out, &text),
            Reply::Average {
                department,
                average,
            } => self.renderer.average(out, &department, average),
            Reply::Raised(count) => self.renderer.raised(out, count),
            Reply::Help(text) => write!(out, "{}", text),
            Reply::Quit => Ok(()),
        }
    }
}

fn owned(records: Vec<&EmployeeRecord<String>>) -> Vec<EmployeeRecord<String>> {
    records.into_iter().cloned().collect()
}

enum Parsed {
    Command(ShellCommand),
    Help(String),
}

/// Tokenise and parse one line
fn parse_line(line: &str) -> Result<Parsed, ExError> {
    let tokens = shlex::split(line).ok_or_else(|| ExError::invalid_input("unbalanced quotes"))?;

    match ShellLine::try_parse_from(tokens) {
        Ok(parsed) => Ok(Parsed::Command(parsed.command)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Parsed::Help(err.to_string()))
        }
        Err(err) => {
            let text = err.to_string();
            let first = text.lines().next().unwrap_or_default();
            Err(ExError::invalid_input(first.trim_start_matches("error: ")))
        }
    }
}

/// Convert the raw VALUE token to the kind the field expects
///
/// Unknown field names pass the text through so the store reports
/// `UnknownField` after its existence check.
fn parse_field_value(field: &str, raw: &str) -> Result<FieldValue, ExError> {
    let Ok(target) = UpdatableField::from_name(field) else {
        return Ok(FieldValue::Text(raw.to_string()));
    };

    let bad = || {
        ExError::invalid_input(format!(
            "'{}' is not a valid {} for {}",
            raw,
            target.kind().as_str(),
            target
        ))
    };

    let value = match target.kind() {
        ValueKind::Text => FieldValue::Text(raw.to_string()),
        ValueKind::Number => FieldValue::Number(raw.parse().map_err(|_| bad())?),
        ValueKind::Integer => FieldValue::Integer(raw.parse().map_err(|_| bad())?),
        ValueKind::Bool => match raw.to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" => FieldValue::Bool(true),
            "false" | "no" | "n" => FieldValue::Bool(false),
            _ => return Err(bad()),
        },
    };
    Ok(value)
}

/// Execute shell command
pub fn execute(args: ShellArgs, config: CliConfig) -> anyhow::Result<()> {
    let mut session = Session::new(config, OutputFormat::from_json_flag(args.json));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("cannot open script {}", path.display()))?;
            session.run(BufReader::new(file), &mut out, false)?;
        }
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            session.run(stdin.lock(), &mut out, prompt)?;
        }
    }
    Ok(())
}
