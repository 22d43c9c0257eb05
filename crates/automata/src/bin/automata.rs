//! Interactive driver for the example recognizers.
//!
//! Walks the problem registry like the original assignment, or runs a single
//! problem's REPL, listing, or transition table on request.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indexmap::IndexMap;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::process;

use automata::{Machine, StateId, problems};

#[derive(Parser)]
#[command(name = "automata", about = "DFA and NFA recognizers for the example problems")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the example problems
    List,
    /// Print the transition table of one problem
    Show {
        /// Problem name, e.g. 1a or 2c
        problem: String,
    },
    /// Run the interactive loop for one problem
    Repl {
        /// Problem name, e.g. 1a or 2c
        problem: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::List) => list(),
        Some(Commands::Show { problem }) => show(&problem),
        Some(Commands::Repl { problem }) => repl_one(&problem),
        None => repl_all(),
    };

    if let Err(e) = result {
        eprintln!("{}: {e:#}", "error".red().bold());
        process::exit(1);
    }
}

fn lookup(problem: &str) -> anyhow::Result<(&'static str, Machine)> {
    let mut problems = problems::registry()?;
    match problems.swap_remove(problem) {
        Some(entry) => Ok(entry),
        None => bail!("unknown problem {problem:?}; try `automata list`"),
    }
}

fn list() -> anyhow::Result<()> {
    for (name, (description, machine)) in problems::registry()? {
        let kind = match machine {
            Machine::Dfa(_) => "DFA",
            Machine::Nfa(_) => "NFA",
        };
        println!("{}  {}  {}", name.bold(), kind, description);
    }
    Ok(())
}

fn show(problem: &str) -> anyhow::Result<()> {
    let (description, machine) = lookup(problem)?;
    println!("{}: {}", problem.bold(), description);

    // Group edges as (src, dst) -> labels so an edge carrying the whole
    // alphabet prints as one line.
    let mut edges: IndexMap<(StateId, StateId), Vec<u8>> = IndexMap::new();
    for (src, sym, dst) in machine.transitions() {
        edges.entry((src, dst)).or_default().push(sym);
    }
    edges.sort_keys();

    for ((src, dst), mut labels) in edges {
        labels.sort_unstable();
        let label = if labels.len() == automata::ALPHABET_SIZE {
            "<any>".to_string()
        } else {
            labels
                .iter()
                .map(|&sym| {
                    if sym.is_ascii_graphic() {
                        (sym as char).to_string()
                    } else {
                        format!("{sym:#04x}")
                    }
                })
                .collect::<Vec<_>>()
                .join(",")
        };
        let accepting = if machine.is_accepting(dst) { " (accepting)" } else { "" };
        println!("  {src} --{label}--> {dst}{accepting}");
    }
    Ok(())
}

fn repl_one(problem: &str) -> anyhow::Result<()> {
    let (description, mut machine) = lookup(problem)?;
    println!("Problem {}: {}", problem.bold(), description);
    run_repl(&mut machine)
}

/// Walk every problem in order, like the original assignment's main.
fn repl_all() -> anyhow::Result<()> {
    for (name, (description, mut machine)) in problems::registry()? {
        println!("Problem {}: {}", name.bold(), description);
        run_repl(&mut machine)?;
    }
    Ok(())
}

fn run_repl(machine: &mut Machine) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new().context("failed to open the line editor")?;
    loop {
        let line = match editor.readline("enter an input (\"quit\" to quit)> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e).context("failed to read input"),
        };
        let input = line.trim();
        if input == "quit" {
            return Ok(());
        }
        let verdict = if machine.execute(input) {
            "accepted".green().bold()
        } else {
            "rejected".red().bold()
        };
        println!("result for input {input:?}: {verdict}");
    }
}
