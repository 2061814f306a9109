//! TOLVEC CLI
//!
//! Interactive shell over a tolerance set, or a script runner.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tolvec::{Config, Norm, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// TOLVEC CLI - Interactive Tolerance Set Shell
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Norm used for approximate equality (l1, l2, linf)
    #[arg(short, long, default_value = "l2")]
    norm: Norm,

    /// Tolerance for approximate equality
    #[arg(short, long, default_value_t = 1e-6)]
    tolerance: f64,

    /// Number of diagnostics kept for the LOG command
    #[arg(long, default_value_t = 64)]
    history: usize,

    /// Run commands from a file instead of the interactive prompt
    #[arg(short, long)]
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tolvec=warn".parse()?))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::default()
        .with_norm(args.norm)
        .with_tolerance(args.tolerance)
        .with_history(args.history);
    let mut session = Session::new(config)?;

    if let Some(path) = args.script {
        let file = File::open(&path)?;
        let stdout = io::stdout();
        session.run_script(BufReader::new(file), &mut stdout.lock())?;
        return Ok(());
    }

    println!("Type 'help' for available commands, 'quit' to exit.\n");

    loop {
        print!("tolvec> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        if let Some(response) = session.run_line(input) {
            println!("{}", response);
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"
Available commands:

  INSERT <x..>      - Insert a vector unless a matching one exists
  GET <index>       - Element at insertion index
  FIND <x..>        - First element matching the sample
  ERASE <index>     - Remove element at index
  REMOVE <x..>      - Remove every element matching the sample
  SIZE / DIM        - Number of elements / shared dimension
  LIST              - Show all elements
  CLEAR             - Remove everything
  SAVE / RESTORE    - Keep a copy of the set / bring it back

  NORM <l1|l2|linf> - Change the norm used for matching
  TOL <value>       - Change the matching tolerance
  CONFIG            - Show current norm and tolerance

  LET <name> <x..>  - Bind a named vector
  ADD|SUB|DOT <a> <b> - Arithmetic on named vectors
  SCALE <a> <k>     - Multiply a named vector by k
  NORMS <x..>       - L1, L2 and L-infinity norms of a vector
  LOG               - Recent vector diagnostics

  help              - Show this help
  quit / exit       - Exit the CLI

Examples:
  TOL 0.1
  INSERT 1 0
  INSERT 0 1
  INSERT 1 0.05    (matches [1, 0], not inserted)
  REMOVE 1 0
"#
    );
}
