// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CLI argument parsing and command handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::config::{parse_sequence, SearchRequest};
use crate::demo::SCENARIOS;
use crate::report::SearchReport;
use crate::strategy::{Arity, Strategy};

/// Resolve indices of elements that sum to a target
#[derive(Parser, Debug)]
#[command(
    name = "sumsearch",
    version,
    about = "Find indices of two or three values that sum to a target",
    long_about = "Resolves the indices of two (Two Sum) or three (Three Sum) distinct \
                  elements of a sequence whose values add up to a target, using a \
                  hash lookup, brute force, or sorted two-pointer strategy."
)]
pub struct Cli {
    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve one sequence against a target
    Resolve {
        /// Target sum
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,

        /// Resolution strategy (hash-lookup, brute-force, sorted-scan)
        #[arg(short, long, default_value = "hash-lookup", value_parser = parse_strategy)]
        strategy: Strategy,

        /// Number of elements to combine (2 or 3)
        #[arg(short = 'k', long, default_value = "2", value_parser = parse_arity)]
        arity: Arity,

        /// Also run brute force and fail if it disagrees
        #[arg(long)]
        cross_check: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Sequence values, separated by spaces and/or commas
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Replay the built-in scenarios with every strategy
    Demo {
        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_strategy(name: &str) -> std::result::Result<Strategy, String> {
    Strategy::from_name(name).map_err(|e| e.to_string())
}

fn parse_arity(value: &str) -> std::result::Result<Arity, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("{:?} is not a number", value))?;
    Arity::try_from(count).map_err(|e| e.to_string())
}

#[derive(Debug, Serialize)]
struct DemoEntry<'a> {
    description: &'a str,
    sequence: &'a [i64],
    reports: Vec<SearchReport>,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();

        match self.command {
            Command::Resolve {
                target,
                strategy,
                arity,
                cross_check,
                json,
                values,
            } => handle_resolve(values, target, strategy, arity, cross_check, json),
            Command::Demo { json } => handle_demo(json),
        }
    }
}

fn handle_resolve(
    values: Vec<String>,
    target: i64,
    strategy: Strategy,
    arity: Arity,
    cross_check: bool,
    json: bool,
) -> Result<()> {
    let sequence = parse_sequence(&values).context("Failed to parse sequence")?;
    let report = SearchRequest::new(sequence, target)
        .with_arity(arity)
        .with_strategy(strategy)
        .with_cross_check(cross_check)
        .run()
        .context("Resolution failed")?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn handle_demo(json: bool) -> Result<()> {
    let mut entries = Vec::with_capacity(SCENARIOS.len());

    for (number, scenario) in SCENARIOS.iter().enumerate() {
        let mut reports = Vec::new();
        for strategy in Strategy::iter() {
            let report = SearchRequest::new(scenario.sequence.to_vec(), scenario.target)
                .with_arity(scenario.arity)
                .with_strategy(strategy)
                .with_cross_check(true)
                .run()
                .with_context(|| format!("Scenario {} failed with {}", number + 1, strategy))?;
            reports.push(report);
        }

        if !json {
            println!("Scenario {}: {}", number + 1, scenario.description);
            println!(
                "  sequence = {:?}, target = {}",
                scenario.sequence, scenario.target
            );
            for report in &reports {
                println!("  {}", report);
            }
        }

        entries.push(DemoEntry {
            description: scenario.description,
            sequence: scenario.sequence,
            reports,
        });
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).context("Failed to encode demo results")?
        );
    }
    Ok(())
}
