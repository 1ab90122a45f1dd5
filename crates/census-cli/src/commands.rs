use std::path::PathBuf;

use anyhow::{Context, Result};
use census_cli::ingest::{IngestConfig, run_ingest};
use census_cli::types::{IngestResult, StoreTarget};
use census_model::FormKind;
use census_standards::{VerifySummary, load_choices, standards_root};
use comfy_table::{Cell, CellAlignment, Table};

use crate::cli::{ChoicesArgs, FormArg, IngestArgs};
use crate::summary::apply_table_style;

pub fn run_ingest_command(args: &IngestArgs) -> Result<IngestResult> {
    let config = IngestConfig {
        form: match args.form {
            FormArg::Household => FormKind::Household,
            FormArg::Business => FormKind::Business,
            FormArg::Building => FormKind::Building,
        },
        inputs: args.paths.clone(),
        target: if args.dry_run {
            StoreTarget::DryRun
        } else {
            StoreTarget::Sqlite(args.db.clone())
        },
        strict: args.strict,
        standards_root: resolve_root(&args.choices),
        choices_version: args.choices.choices_version.clone(),
    };
    run_ingest(&config)
}

pub fn run_tables(args: &ChoicesArgs) -> Result<()> {
    let summary = load_summary(args)?;
    let mut table = Table::new();
    table.set_header(vec!["Table", "File", "Entries"]);
    apply_table_style(&mut table);
    for entry in &summary.tables {
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(&entry.path),
            Cell::new(entry.entries).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("Choice tables {} ({})", summary.version, summary.choices_dir.display());
    println!("{table}");
    Ok(())
}

pub fn run_verify(args: &ChoicesArgs) -> Result<()> {
    let summary = load_summary(args)?;
    println!("Verified: {}", summary.choices_dir.display());
    println!("Version: {}", summary.version);
    println!("Tables: {}", summary.table_count);
    println!("Entries: {}", summary.entry_count);
    Ok(())
}

fn load_summary(args: &ChoicesArgs) -> Result<VerifySummary> {
    let root = resolve_root(args);
    let (_, summary) = load_choices(&root, &args.choices_version).with_context(|| {
        format!(
            "load choice tables {} from {}",
            args.choices_version,
            root.display()
        )
    })?;
    Ok(summary)
}

fn resolve_root(args: &ChoicesArgs) -> PathBuf {
    args.choices_dir.clone().unwrap_or_else(standards_root)
}
