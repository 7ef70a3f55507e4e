//! `nodal shell`: one session, many commands.
//!
//! The session keeps the last search's rows and the export file name between
//! commands, so a user can search, adjust the name, and export without
//! searching again.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use nodal_catalog::Catalog;
use nodal_core::{ResultState, Session};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::root_commands::{ShellArgs, WindowArgs};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::export::write_export;
use crate::commands::shared::search::{present, run_search};
use crate::context::AppContext;

#[derive(Debug, Parser)]
#[command(name = "nodal-shell", no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Run a search and replace the session's rows.
    Search(WindowArgs),
    /// Print the rows of the last search.
    Show,
    /// Set the export file name (without `.csv`); the rest of the line is the name.
    Name {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        file_name: Vec<String>,
    },
    /// Write the last search's rows as CSV.
    Export {
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Show the product type, file name, and row count.
    Status,
    /// Leave the shell.
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShellFlow {
    Continue,
    Quit,
}

pub struct Shell<'a> {
    catalog: &'a dyn Catalog,
    session: Session,
    export_dir: PathBuf,
    format: OutputFormat,
    quiet: bool,
}

impl<'a> Shell<'a> {
    pub fn new(
        catalog: &'a dyn Catalog,
        session: Session,
        export_dir: PathBuf,
        format: OutputFormat,
        quiet: bool,
    ) -> Self {
        Self {
            catalog,
            session,
            export_dir,
            format,
            quiet,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        format!("nodal[{}]> ", self.session.product_type())
    }

    /// Parse and run one input line, writing its output to `out`.
    ///
    /// Unknown commands and bad arguments print a usage message and keep the
    /// shell running.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<ShellFlow> {
        let words = line.split_whitespace().collect::<Vec<_>>();
        if words.is_empty() {
            return Ok(ShellFlow::Continue);
        }

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(error) => {
                write!(out, "{error}")?;
                return Ok(ShellFlow::Continue);
            }
        };

        match parsed.command {
            ShellCommand::Search(window) => {
                let window = window.to_window(self.session.product_type());
                run_search(&mut self.session, self.catalog, &window, self.quiet).await;
                if !present(&self.session, self.format, out)? {
                    let product_type = self.session.product_type();
                    writeln!(
                        out,
                        "no {product_type} events found (for {sibling} products run `nodal shell --product {sibling}`)",
                        sibling = product_type.sibling()
                    )?;
                }
            }
            ShellCommand::Show => {
                if !present(&self.session, self.format, out)? {
                    writeln!(out, "nothing to show; run a search first")?;
                }
            }
            ShellCommand::Name { file_name } => {
                self.session.set_file_name(file_name.join(" "));
                writeln!(out, "export file: {}.csv", self.session.file_name())?;
            }
            ShellCommand::Export { out_dir } => {
                let dir = out_dir.unwrap_or_else(|| self.export_dir.clone());
                match write_export(&self.session, &dir)? {
                    Some(path) => writeln!(out, "exported {}", path.display())?,
                    None => writeln!(out, "nothing to export; run a search first")?,
                }
            }
            ShellCommand::Status => {
                let rows = match self.session.results() {
                    ResultState::Absent => "no search yet".to_string(),
                    ResultState::Present(rows) => format!("{} rows", rows.len()),
                };
                writeln!(
                    out,
                    "{}: {} (export file {}.csv)",
                    self.session.product_type(),
                    rows,
                    self.session.file_name()
                )?;
            }
            ShellCommand::Quit => return Ok(ShellFlow::Quit),
        }

        Ok(ShellFlow::Continue)
    }
}

/// Handle `nodal shell`: read commands from stdin until `quit` or end of input.
pub async fn handle(args: &ShellArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut shell = Shell::new(
        &ctx.catalog,
        ctx.new_session(args.product),
        ctx.export_dir(args.out_dir.as_deref()),
        flags.format,
        flags.quiet,
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    loop {
        write!(stdout, "{}", shell.prompt())?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await.context("failed to read shell input")? else {
            writeln!(stdout)?;
            break;
        };

        match shell.execute(&line, &mut stdout).await {
            Ok(ShellFlow::Quit) => break,
            Ok(ShellFlow::Continue) => {}
            Err(error) => eprintln!("error: {error:#}"),
        }
    }

    Ok(())
}
