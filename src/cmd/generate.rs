//! Generate command CLI handler.

use super::prompt::Prompter;
use super::{build_context, load_config, parse_count, progress_bar, progress_hook};
use crate::generator::{FilledTable, Generator};
use crate::schema::Table;
use crate::writer;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// JSON output for generate command
#[derive(Serialize)]
struct GenerateJsonOutput {
    table: Table,
    rows: usize,
    seed: u64,
    clock: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_file: Option<String>,
    filled: Vec<FilledTable>,
    diagnostics: Vec<String>,
    elapsed_secs: f64,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    table: Option<String>,
    count: Option<usize>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    no_auto_fill: bool,
    progress: bool,
    json: bool,
) -> anyhow::Result<()> {
    // Ask for whatever the command line left out
    let mut prompter = None;
    let table = match table {
        Some(t) => t,
        None => prompter.get_or_insert(Prompter::new()?).table()?,
    };
    let table: Table = table.parse().map_err(|e| anyhow::anyhow!("{}", e))?;

    let count = match count {
        Some(n) => n,
        None => {
            let answer = match prompter.as_mut() {
                Some(p) => p.count()?,
                None => Prompter::new()?.count()?,
            };
            parse_count(&answer).map_err(|e| anyhow::anyhow!("{}", e))?
        }
    };

    let config = load_config(config.as_deref())?;
    let ctx = build_context(seed, config.as_ref())?;
    let auto_fill = !no_auto_fill && config.as_ref().and_then(|c| c.auto_fill).unwrap_or(true);
    let batches = config.as_ref().map(|c| c.batches()).unwrap_or_default();

    let mut generator = Generator::new(ctx)
        .with_auto_fill(auto_fill)
        .with_batches(batches);

    let pb = if progress && !json {
        let pb = progress_bar();
        pb.set_message(format!("Generating {}...", table));
        generator
            .context_mut()
            .set_progress(Some(progress_hook(&pb)));
        Some(pb)
    } else {
        None
    };

    let start_time = Instant::now();
    let outcome = generator.run(table, count);
    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    let rows = writer::write_table(output.as_deref(), &outcome.data)?;
    let elapsed = start_time.elapsed();

    let ctx = generator.context_mut();
    let diagnostics = ctx.take_diagnostics();

    if json {
        let output_json = GenerateJsonOutput {
            table,
            rows,
            seed: ctx.seed(),
            clock: ctx.timestamp(),
            output_file: output.as_ref().map(|p| p.display().to_string()),
            filled: outcome.filled,
            diagnostics,
            elapsed_secs: elapsed.as_secs_f64(),
        };
        let rendered = serde_json::to_string_pretty(&output_json)?;
        // stdout carries the CSV unless it went to a file
        if output.is_some() {
            println!("{}", rendered);
        } else {
            eprintln!("{}", rendered);
        }
    } else {
        for message in &diagnostics {
            eprintln!("{}", message);
        }
        eprintln!("Seed: {}", ctx.seed());
        if progress {
            eprintln!("Clock: {}", ctx.timestamp());
            eprintln!("Elapsed: {:.3}s", elapsed.as_secs_f64());
        }
        if rows > 0 {
            eprintln!("Generated {} records for the '{}' table.", rows, table);
        }
    }

    Ok(())
}
