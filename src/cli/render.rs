//! Text and JSON output.

use std::io::Write;

use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde::Serialize;

use pwd_gen::{GeneratedPassword, HistoryEntry, StrengthResult};

#[derive(Serialize)]
struct PasswordView<'a> {
    password: &'a str,
    #[serde(flatten)]
    strength: &'a StrengthResult,
}

#[derive(Serialize)]
struct HistoryView<'a> {
    password: &'a str,
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    strength: &'a StrengthResult,
}

#[derive(Serialize)]
struct Report<'a> {
    results: Vec<PasswordView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<Vec<HistoryView<'a>>>,
}

pub fn generated(
    out: &mut impl Write,
    generated: &[GeneratedPassword],
    history: Option<&[HistoryEntry]>,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let report = Report {
            results: generated
                .iter()
                .map(|g| PasswordView {
                    password: g.password.expose_secret(),
                    strength: &g.strength,
                })
                .collect(),
            history: history.map(|entries| {
                entries
                    .iter()
                    .map(|e| HistoryView {
                        password: e.password.expose_secret(),
                        generated_at: e.generated_at,
                        strength: &e.strength,
                    })
                    .collect()
            }),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    for (i, g) in generated.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Password: {}", g.password.expose_secret())?;
        write_strength(out, &g.strength)?;
    }

    if let Some(entries) = history {
        writeln!(out)?;
        if entries.is_empty() {
            writeln!(out, "History is empty")?;
        } else {
            writeln!(out, "History:")?;
            for (idx, entry) in entries.iter().enumerate() {
                writeln!(
                    out,
                    "{:>3}. {}  {}  {} ({}/100)",
                    idx + 1,
                    entry.generated_at.format("%Y-%m-%d %H:%M:%S"),
                    entry.password.expose_secret(),
                    entry.strength.tier,
                    entry.strength.score
                )?;
            }
        }
    }
    Ok(())
}

pub fn strength(out: &mut impl Write, result: &StrengthResult, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
    } else {
        write_strength(out, result)?;
    }
    Ok(())
}

fn write_strength(out: &mut impl Write, result: &StrengthResult) -> std::io::Result<()> {
    writeln!(out, "Strength: {} ({}/100)", result.tier, result.score)?;
    if !result.feedback.is_empty() {
        writeln!(out, "Suggestions:")?;
        for feedback in &result.feedback {
            writeln!(out, "  - {}", feedback)?;
        }
    }
    Ok(())
}
