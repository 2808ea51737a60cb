//! Tables command CLI handler.

use crate::schema::{Table, TableGraph};
use serde::Serialize;

#[derive(Serialize)]
struct TableInfo {
    name: &'static str,
    alias: &'static str,
    prerequisites: Vec<Table>,
    auto_fill: Vec<Table>,
    default_batch: usize,
    columns: Vec<&'static str>,
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let graph = TableGraph::new();
    let infos: Vec<TableInfo> = graph
        .topo_order()
        .into_iter()
        .map(|table| TableInfo {
            name: table.name(),
            alias: table.singular(),
            prerequisites: table.prerequisites().to_vec(),
            auto_fill: table.fill_dependencies().to_vec(),
            default_batch: table.default_batch(),
            columns: table.columns(true),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for info in &infos {
        println!("{} (alias: {})", info.name, info.alias);
        if !info.prerequisites.is_empty() {
            let deps: Vec<&str> = info.prerequisites.iter().map(|t| t.name()).collect();
            println!("  Requires: {}", deps.join(", "));
        }
        println!("  Columns:  {}", info.columns.join(", "));
    }
    Ok(())
}
