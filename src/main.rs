//! Reference CLI for the child support calculation engine.
//!
//! Gathers raw input from flags, builds the calculation request, and prints
//! the full breakdown as JSON. Any failure prints a message to stderr and
//! exits non-zero.

use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use support_engine::calculation::calculate_child_support;
use support_engine::models::{Adjustment, CalculationRequest, Child};

/// Child support calculator (2021 Seoul Family Court guideline).
#[derive(Parser, Debug)]
#[command(name = "support-engine", version)]
struct Cli {
    /// Custodial parent pre-tax monthly income (KRW)
    #[arg(long = "cust-income")]
    cust_income: i64,

    /// Non-custodial parent pre-tax monthly income (KRW)
    #[arg(long = "noncust-income")]
    noncust_income: i64,

    /// Comma-separated child ages (만 나이), e.g. 8 or 8,15
    #[arg(long = "children-ages")]
    children_ages: String,

    /// Imputed income for the custodial parent, used when the stated income
    /// is zero or below (KRW)
    #[arg(long = "cust-imputed")]
    cust_imputed: Option<i64>,

    /// Imputed income for the non-custodial parent, used when the stated
    /// income is zero or below (KRW)
    #[arg(long = "noncust-imputed")]
    noncust_imputed: Option<i64>,

    /// Optional JSON list of adjustments, e.g.
    /// '[{"name":"urban","kind":"multiplier","value":0.05,"is_percent":true}]'
    #[arg(long = "adj-json")]
    adj_json: Option<String>,
}

fn parse_children_ages(raw: &str) -> anyhow::Result<Vec<Child>> {
    let mut children = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let age: i32 = part
            .parse()
            .with_context(|| format!("invalid child age '{part}'"))?;
        children.push(Child { age });
    }
    if children.is_empty() {
        bail!("--children-ages must list at least one age, e.g. 8 or 8,15");
    }
    Ok(children)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let adjustments = match &cli.adj_json {
        Some(raw) => serde_json::from_str::<Vec<Adjustment>>(raw)
            .context("--adj-json is not a valid JSON list of adjustments")?,
        None => Vec::new(),
    };

    let request = CalculationRequest {
        custodial_income_krw: cli.cust_income,
        non_custodial_income_krw: cli.noncust_income,
        children: parse_children_ages(&cli.children_ages)?,
        custodial_imputed_income_krw: cli.cust_imputed,
        non_custodial_imputed_income_krw: cli.noncust_imputed,
        adjustments,
    };

    let result = calculate_child_support(&request)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_children_ages_accepts_lists() {
        let children = parse_children_ages("8,15").unwrap();
        assert_eq!(children, vec![Child { age: 8 }, Child { age: 15 }]);

        let single = parse_children_ages(" 3 ").unwrap();
        assert_eq!(single, vec![Child { age: 3 }]);
    }

    #[test]
    fn test_parse_children_ages_rejects_empty_and_garbage() {
        assert!(parse_children_ages("").is_err());
        assert!(parse_children_ages(" , ").is_err());
        assert!(parse_children_ages("8,abc").is_err());
    }

    #[test]
    fn test_cli_parses_reference_flags() {
        let cli = Cli::parse_from([
            "support-engine",
            "--cust-income",
            "2000000",
            "--noncust-income",
            "3000000",
            "--children-ages",
            "8,15",
        ]);
        assert_eq!(cli.cust_income, 2_000_000);
        assert_eq!(cli.noncust_income, 3_000_000);
        assert_eq!(cli.children_ages, "8,15");
        assert_eq!(cli.adj_json, None);
    }

    #[test]
    fn test_run_rejects_malformed_adjustment_json() {
        let cli = Cli::parse_from([
            "support-engine",
            "--cust-income",
            "2000000",
            "--noncust-income",
            "3000000",
            "--children-ages",
            "8",
            "--adj-json",
            "{not json",
        ]);
        assert!(run(&cli).is_err());
    }
}
