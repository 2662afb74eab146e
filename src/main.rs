// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Check that every formation sample is recognised as itself.
//!
//! Usage: `formations [TYPE]...`
//!
//! With no arguments every registered formation type is checked. Set
//! `RUST_LOG=debug` to watch facts being derived.

use clap::Parser;
use squaredance::dancer::Dancer;
use squaredance::formation::FormationKind;
use squaredance::registry::Registry;
use squaredance::validate::{validate_kinds, ValidationReport};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formations")]
#[command(about = "Validate square dance formation samples")]
#[command(version)]
struct Cli {
    /// Formation types to check (default: all)
    types: Vec<String>,

    /// Print every formation found in each sample, not just its own kind
    #[arg(short, long)]
    all_formations: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let registry = Registry::new();

    let mut kinds = Vec::new();
    for name in &cli.types {
        match registry.lookup(name) {
            Ok(kind) => kinds.push(kind),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::from(2);
            }
        }
    }
    if kinds.is_empty() {
        kinds = registry.kinds().collect();
    }

    let report = validate_kinds(&registry, kinds);
    print_report(&registry, &report, cli.all_formations);

    if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_report(registry: &Registry, report: &ValidationReport, all_formations: bool) {
    for formation in &report.passed {
        let kind = formation.kind();
        println!("{kind}: ok");
        for dancer in formation.dancers().iter() {
            println!("    {dancer} at {} facing {}", dancer.position(), dancer.direction());
        }
        for role in registry.roles(kind) {
            if let Ok(dancers) = role.apply(formation) {
                println!("    {role}: {dancers}");
            }
        }
        if all_formations {
            print_found(registry, &formation.dancers(), kind);
        }
    }
    for kind in &report.skipped {
        println!("{kind}: no sample");
    }
    for (kind, e) in &report.failed {
        println!("{kind}: FAILED");
        println!("    {e}");
    }
    println!(
        "{} passed, {} failed, {} skipped",
        report.passed.len(),
        report.failed.len(),
        report.skipped.len()
    );
}

fn print_found(registry: &Registry, dancers: &[Dancer], own: FormationKind) {
    let mut finder = registry.finder();
    if let Err(e) = finder.ingest(dancers) {
        eprintln!("    {e}");
        return;
    }
    for kind in FormationKind::all().filter(|k| *k != own && *k != FormationKind::Dancer) {
        for found in finder.formations(kind) {
            println!("    also {found}");
        }
    }
}
