//! All command CLI handler.

use super::{build_context, load_config, progress_bar, progress_hook};
use crate::generator::Generator;
use crate::schema::Table;
use crate::writer::DirectoryWriter;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// JSON output for all command
#[derive(Serialize)]
struct AllJsonOutput {
    output_dir: String,
    seed: u64,
    clock: String,
    tables: Vec<TableResult>,
    skipped: Vec<Table>,
    diagnostics: Vec<String>,
    elapsed_secs: f64,
}

#[derive(Serialize)]
struct TableResult {
    table: Table,
    rows: usize,
    file: String,
}

pub fn run(
    output: PathBuf,
    count: Option<usize>,
    seed: Option<u64>,
    config: Option<PathBuf>,
    gzip: bool,
    progress: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(config.as_deref())?;
    let ctx = build_context(seed, config.as_ref())?;

    // Tables run in dependency order, so prerequisites always come from the
    // files written here; a skipped prerequisite leaves its dependents empty.
    let mut generator = Generator::new(ctx).with_auto_fill(false);

    let pb = if progress && !json {
        let pb = progress_bar();
        generator
            .context_mut()
            .set_progress(Some(progress_hook(&pb)));
        Some(pb)
    } else {
        None
    };

    let dir_writer = DirectoryWriter::new(output.clone()).with_compression(gzip);
    dir_writer.ensure_output_dir()?;

    let start_time = Instant::now();
    let mut results = Vec::new();
    let mut skipped = Vec::new();

    for table in Table::ALL {
        if config.as_ref().map(|c| c.should_skip(table)).unwrap_or(false) {
            skipped.push(table);
            continue;
        }

        let rows = count
            .or_else(|| config.as_ref().and_then(|c| c.rows_for(table)))
            .unwrap_or_else(|| table.default_batch());

        if let Some(pb) = &pb {
            pb.set_message(format!("Generating {}...", table));
        }
        let outcome = generator.run(table, rows);
        if outcome.data.is_empty() {
            continue;
        }

        let (path, written) = dir_writer.write(&outcome.data)?;
        if let Some(pb) = &pb {
            pb.println(format!("  {}: {} rows -> {}", table, written, path.display()));
        }
        results.push(TableResult {
            table,
            rows: written,
            file: path.display().to_string(),
        });
    }

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }
    let elapsed = start_time.elapsed();

    let ctx = generator.context_mut();
    let diagnostics = ctx.take_diagnostics();

    if json {
        let output_json = AllJsonOutput {
            output_dir: output.display().to_string(),
            seed: ctx.seed(),
            clock: ctx.timestamp(),
            tables: results,
            skipped,
            diagnostics,
            elapsed_secs: elapsed.as_secs_f64(),
        };
        println!("{}", serde_json::to_string_pretty(&output_json)?);
    } else {
        for message in &diagnostics {
            eprintln!("{}", message);
        }
        for table in &skipped {
            eprintln!("Skipped {} (config)", table);
        }
        eprintln!("Seed: {}", ctx.seed());
        for result in &results {
            eprintln!(
                "Generated {} records for the '{}' table.",
                result.rows, result.table
            );
        }
        eprintln!(
            "Wrote {} tables to {} in {:.3}s",
            results.len(),
            output.display(),
            elapsed.as_secs_f64()
        );
    }

    Ok(())
}
