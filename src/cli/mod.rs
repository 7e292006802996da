//! Command-line front end for the generator and the evaluator.

mod commands;
mod render;

use std::io::Write;

use clap::Parser;
use secrecy::SecretString;

use pwd_gen::{
    ClassSelection, GenerationRequest, PasswordGenerator, ValidationPolicy,
    evaluate_password_strength, init_wordlist, validate_password,
};

pub use commands::Command;

#[derive(Parser, Debug)]
#[command(name = "pwd-gen", version, about = "Generate passwords, passphrases and PINs, and score their strength")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Also print the history of everything generated by this run
    #[arg(long, global = true)]
    pub history: bool,
}

/// Character classes left enabled by the `--no-*` flags.
fn class_selection(
    no_lower: bool,
    no_upper: bool,
    no_digits: bool,
    no_symbols: bool,
) -> ClassSelection {
    ClassSelection {
        lowercase: !no_lower,
        uppercase: !no_upper,
        digits: !no_digits,
        symbols: !no_symbols,
    }
}

/// Runs one command, writing its report to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    if std::env::var_os("PWD_WORDLIST_PATH").is_some() {
        init_wordlist()?;
    }

    let generator = PasswordGenerator::new();
    let mut generated = Vec::new();

    match cli.command {
        Command::Generate {
            length,
            no_lower,
            no_upper,
            no_digits,
            no_symbols,
            min_each,
            count,
        } => {
            let request = GenerationRequest {
                length,
                classes: class_selection(no_lower, no_upper, no_digits, no_symbols),
                min_each,
            };
            for _ in 0..count {
                generated.push(generator.generate_password(&request)?);
            }
        }
        Command::Memorable {
            words,
            no_number,
            no_symbol,
            count,
        } => {
            for _ in 0..count {
                generated.push(generator.generate_memorable_password(words, !no_number, !no_symbol)?);
            }
        }
        Command::Pin { length, count } => {
            for _ in 0..count {
                generated.push(generator.generate_pin(length)?);
            }
        }
        Command::Validate {
            password,
            min_length,
            any_classes,
        } => {
            let password = SecretString::new(password.into());
            let policy = ValidationPolicy {
                min_length,
                require_all_classes: !any_classes,
            };
            validate_password(&password, &policy)?;
            return render::strength(out, &evaluate_password_strength(&password), cli.json);
        }
    }

    let history = cli.history.then(|| generator.history());
    render::generated(out, &generated, history.as_deref(), cli.json)
}
