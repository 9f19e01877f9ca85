//! CLI entry point for pk-iban
//!
//! Provides command-line interface for generating and verifying IBANs,
//! listing supported banks, and running an interactive session.

use clap::{Parser, Subcommand};
use colored::*;
use pk_iban_generator::config::resolve_registry;
use pk_iban_generator::core::{generate_iban, validate_iban, BankRegistry};
use pk_iban_generator::session::{ClipboardError, ClipboardSink, Controller, SessionState};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pk-iban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an IBAN from an account number and bank code
    Generate {
        /// Account number (up to 16 digits)
        #[arg(short, long)]
        account: String,

        /// Four-character bank code (see `banks`)
        #[arg(short, long)]
        bank: String,

        /// Print without spaces
        #[arg(long)]
        compact: bool,

        /// Bank registry file (defaults to the built-in table)
        #[arg(short, long)]
        registry: Option<PathBuf>,
    },

    /// Verify an IBAN's check digits
    Verify {
        /// IBAN, with or without spaces
        iban: String,
    },

    /// List supported banks
    Banks {
        /// Bank registry file (defaults to the built-in table)
        #[arg(short, long)]
        registry: Option<PathBuf>,
    },

    /// Run an interactive session on stdin
    Interactive {
        /// Bank registry file (defaults to the built-in table)
        #[arg(short, long)]
        registry: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so IBANs on stdout stay pipeable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            account,
            bank,
            compact,
            registry,
        } => {
            let registry = resolve_registry(registry.as_deref())?;
            generate(&account, &bank, compact, &registry)?
        }
        Commands::Verify { iban } => verify(&iban),
        Commands::Banks { registry } => {
            let registry = resolve_registry(registry.as_deref())?;
            list_banks(&registry)
        }
        Commands::Interactive { registry } => {
            let registry = resolve_registry(registry.as_deref())?;
            interactive(Controller::new(registry))?
        }
    }

    Ok(())
}

/// Generate and print a single IBAN
fn generate(account: &str, bank: &str, compact: bool, registry: &BankRegistry) -> anyhow::Result<()> {
    match generate_iban(account, bank, registry) {
        Ok(iban) => {
            if compact {
                println!("{}", iban.compact());
            } else {
                println!("{}", iban);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Verify an IBAN and report the outcome
fn verify(iban: &str) {
    match validate_iban(iban) {
        Ok(()) => println!("{} {}", "✓".green().bold(), "Valid IBAN".bold()),
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// List all banks in the registry
fn list_banks(registry: &BankRegistry) {
    for bank in registry.entries() {
        println!("{}  {}", bank.code.as_str().cyan().bold(), bank.display_name);
    }

    println!("\n{} Total: {} banks", "✓".green(), registry.len());
}

/// Clipboard sink for terminals: prints the copied text on its own line
struct TerminalClipboard;

impl ClipboardSink for TerminalClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", text).map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Line-driven session
///
/// Commands: account <digits>, bank <code>, generate, copy, clear, status, quit
fn interactive(mut controller: Controller) -> anyhow::Result<()> {
    let mut clipboard = TerminalClipboard;

    println!("{}", "Pakistan IBAN Generator".bold());
    println!("Commands: account <digits>, bank <code>, generate, copy, clear, status, banks, quit\n");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let (command, argument) = match line.trim().split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "" => continue,
            "account" => {
                controller.set_account_number(argument);
                if let Some(e) = controller.error() {
                    println!("{} {}", "!".yellow(), e);
                }
            }
            "bank" => {
                controller.select_bank(argument);
                match controller.selected_bank() {
                    Some(bank) => println!("{} {}", "→".cyan(), bank.display_name),
                    None if argument.is_empty() => println!("{} Bank cleared", "→".cyan()),
                    None => println!("{} Unknown bank code '{}'", "!".yellow(), argument),
                }
            }
            "generate" => match controller.generate() {
                Ok(iban) => println!("Your IBAN: {}", iban.as_str().green().bold()),
                Err(e) => println!("{} {}", "✗".red().bold(), e),
            },
            "copy" => {
                if controller.copy_result(&mut clipboard, chrono::Local::now()) {
                    println!("{}", "Copied!".green());
                } else {
                    println!("{} Nothing to copy", "!".yellow());
                }
            }
            "clear" => {
                controller.clear();
                println!("{} Form cleared", "→".cyan());
            }
            "status" => print_status(&controller),
            "banks" => list_banks(controller.registry()),
            "quit" | "exit" => break,
            other => println!("{} Unknown command '{}'", "!".yellow(), other),
        }
    }

    Ok(())
}

fn print_status(controller: &Controller) {
    println!("Account: {}", controller.account_number());
    println!(
        "Bank:    {}",
        controller
            .selected_bank()
            .map(|bank| format!("{} ({})", bank.display_name, bank.code))
            .or_else(|| controller.bank_code().map(str::to_string))
            .unwrap_or_else(|| "-".to_string())
    );

    let state = match controller.state() {
        SessionState::Idle => "idle".to_string(),
        SessionState::Validating => "validating".to_string(),
        SessionState::Error(e) => format!("error: {}", e),
        SessionState::Ready(iban) => format!("ready: {}", iban),
    };
    println!("State:   {}", state);

    if controller.is_copied(chrono::Local::now()) {
        println!("{}", "Copied!".green());
    }
}
