//! Row generation for every shop table.
//!
//! Each table has its own generator function taking the explicit
//! [`GenerationContext`]. [`Generator`] sits on top and runs the prerequisite
//! tables first when the requested table needs them.

mod catalog;
mod contact;
pub mod context;
mod invoices;
mod products;
mod users;

pub use context::{GenerationContext, ProgressHook, TIMESTAMP_FORMAT};

use crate::schema::{fill_plan, Table};
use serde::Serialize;
use std::fmt;

/// A single CSV field
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Rendered as the literal `NULL` marker
    Null,
    Int(i64),
    /// Rendered with two decimals
    Decimal(f64),
    Text(String),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Format for a CSV field
    pub fn to_field(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Int(n) => n.to_string(),
            Value::Decimal(n) => format!("{:.2}", n),
            Value::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_field())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<Option<String>> for Value {
    fn from(s: Option<String>) -> Self {
        s.map(Value::Text).unwrap_or(Value::Null)
    }
}

/// A row of generated data
pub type Row = Vec<Value>;

/// Generated data for a single table
#[derive(Debug, Clone)]
pub struct TableData {
    pub table: Table,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl TableData {
    pub fn new(table: Table, columns: Vec<&str>, rows: Vec<Row>) -> Self {
        Self {
            table,
            columns: columns.into_iter().map(String::from).collect(),
            rows,
        }
    }

    /// Result of a generator that refused to run
    pub fn empty(table: Table) -> Self {
        Self {
            table,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of one column, in row order
    pub fn column(&self, name: &str) -> Vec<&Value> {
        match self.column_index(name) {
            Some(idx) => self.rows.iter().map(|r| &r[idx]).collect(),
            None => Vec::new(),
        }
    }

    /// Primary keys of the generated rows
    pub fn ids(&self) -> Vec<i64> {
        self.rows
            .iter()
            .filter_map(|r| r.first().and_then(Value::as_int))
            .collect()
    }
}

/// Generate `count` rows for `table` without touching prerequisites.
///
/// Returns an empty [`TableData`] and records a diagnostic when a required
/// identifier sequence is empty.
pub fn generate_table(ctx: &mut GenerationContext, table: Table, count: usize) -> TableData {
    match table {
        Table::Users => users::generate(ctx, count),
        Table::Categories => catalog::generate_categories(ctx, count),
        Table::Brands => catalog::generate_brands(ctx, count),
        Table::Products => products::generate_products(ctx, count),
        Table::ProductImages => products::generate_product_images(ctx, count),
        Table::Invoices => invoices::generate_invoices(ctx, count),
        Table::InvoiceItems => invoices::generate_invoice_items(ctx, count),
        Table::ContactReplies => contact::generate(ctx, count),
    }
}

/// A prerequisite table generated on the caller's behalf
#[derive(Debug, Clone, Serialize)]
pub struct FilledTable {
    pub table: Table,
    pub rows: usize,
}

/// Result of one dispatcher run
#[derive(Debug, Clone)]
pub struct Outcome {
    pub data: TableData,
    /// Prerequisites generated before `data`, in generation order
    pub filled: Vec<FilledTable>,
    /// Full output of the filled tables, when requested
    pub filled_data: Vec<TableData>,
}

/// Batch sizes used when a prerequisite table is auto-filled
#[derive(Debug, Clone, Copy)]
pub struct FillBatches {
    pub default: usize,
    pub brands: usize,
}

impl Default for FillBatches {
    fn default() -> Self {
        Self {
            default: Table::Users.default_batch(),
            brands: Table::Brands.default_batch(),
        }
    }
}

impl FillBatches {
    pub fn for_table(&self, table: Table) -> usize {
        match table {
            Table::Brands => self.brands,
            _ => self.default,
        }
    }
}

/// Table dispatcher with prerequisite auto-fill
pub struct Generator {
    ctx: GenerationContext,
    auto_fill: bool,
    batches: FillBatches,
    keep_filled: bool,
}

impl Generator {
    pub fn new(ctx: GenerationContext) -> Self {
        Self {
            ctx,
            auto_fill: true,
            batches: FillBatches::default(),
            keep_filled: false,
        }
    }

    /// Disable or enable prerequisite auto-fill
    pub fn with_auto_fill(mut self, auto_fill: bool) -> Self {
        self.auto_fill = auto_fill;
        self
    }

    pub fn with_batches(mut self, batches: FillBatches) -> Self {
        self.batches = batches;
        self
    }

    /// Keep the rows of auto-filled tables in [`Outcome::filled_data`]
    pub fn with_filled_data(mut self, keep: bool) -> Self {
        self.keep_filled = keep;
        self
    }

    pub fn context(&self) -> &GenerationContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut GenerationContext {
        &mut self.ctx
    }

    pub fn into_context(self) -> GenerationContext {
        self.ctx
    }

    /// Generate `count` rows for `table`, filling prerequisites first
    pub fn run(&mut self, table: Table, count: usize) -> Outcome {
        let mut filled = Vec::new();
        let mut filled_data = Vec::new();

        if self.auto_fill {
            let plan = fill_plan(table, |t| self.ctx.is_populated(t));
            for prereq in plan {
                let batch = self.batches.for_table(prereq);
                self.ctx.diagnose(format!(
                    "Generating {} {} first to ensure {} data can be created...",
                    batch,
                    prereq,
                    table.name().replace('_', " ")
                ));
                let data = generate_table(&mut self.ctx, prereq, batch);
                filled.push(FilledTable {
                    table: prereq,
                    rows: data.len(),
                });
                if self.keep_filled {
                    filled_data.push(data);
                }
            }
        }

        let data = generate_table(&mut self.ctx, table, count);
        Outcome {
            data,
            filled,
            filled_data,
        }
    }
}
