//! Per-run generation state.
//!
//! The context owns everything a table generator reads or writes besides its
//! own output: the seeded random source, the clock anchor used for
//! timestamps, the identifier sequences of already generated tables and the
//! diagnostics collected along the way.

use crate::fake::FakeData;
use crate::schema::Table;
use ahash::AHashMap;
use chrono::{Local, NaiveDateTime, Timelike};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Timestamp format used for every date/time column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Callback receiving the number of rows produced so far for the current table
pub type ProgressHook = Box<dyn Fn(u64)>;

/// Identifier sequences for FK relationships
#[derive(Debug, Default, Clone)]
pub struct IdRegistry {
    /// Table -> ids generated for it in this run
    ids: AHashMap<Table, Vec<i64>>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the identifier sequence of a table
    pub fn replace(&mut self, table: Table, ids: Vec<i64>) {
        self.ids.insert(table, ids);
    }

    pub fn get_ids(&self, table: Table) -> &[i64] {
        self.ids.get(&table).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn is_populated(&self, table: Table) -> bool {
        !self.get_ids(table).is_empty()
    }
}

/// Explicit state shared by the table generators of one run
pub struct GenerationContext {
    seed: u64,
    pub(crate) rng: ChaCha8Rng,
    clock: NaiveDateTime,
    pub(crate) ids: IdRegistry,
    diagnostics: Vec<String>,
    progress: Option<ProgressHook>,
}

impl GenerationContext {
    /// Create a context seeded with `seed`, anchored at the current local time
    pub fn new(seed: u64) -> Self {
        let now = Local::now().naive_local();
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            clock: now.with_nanosecond(0).unwrap_or(now),
            ids: IdRegistry::new(),
            diagnostics: Vec::new(),
            progress: None,
        }
    }

    /// Pin the clock anchor, making timestamps reproducible
    pub fn with_clock(mut self, clock: NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Install a per-row progress callback
    pub fn with_progress(mut self, hook: ProgressHook) -> Self {
        self.progress = Some(hook);
        self
    }

    pub fn set_progress(&mut self, hook: Option<ProgressHook>) {
        self.progress = hook;
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn clock(&self) -> NaiveDateTime {
        self.clock
    }

    /// The clock anchor formatted as `YYYY-MM-DD HH:MM:SS`
    pub fn timestamp(&self) -> String {
        self.clock.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Fake data helper borrowing this context's random source
    pub fn fake(&mut self) -> FakeData<&mut ChaCha8Rng> {
        FakeData::new(&mut self.rng)
    }

    pub fn ids(&self, table: Table) -> &[i64] {
        self.ids.get_ids(table)
    }

    pub fn is_populated(&self, table: Table) -> bool {
        self.ids.is_populated(table)
    }

    /// Record a diagnostic message for the caller to report
    pub fn diagnose(&mut self, message: impl Into<String>) {
        self.diagnostics.push(message.into());
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Drain collected diagnostics
    pub fn take_diagnostics(&mut self) -> Vec<String> {
        std::mem::take(&mut self.diagnostics)
    }

    pub(crate) fn tick(&self, rows: u64) {
        if let Some(hook) = &self.progress {
            hook(rows);
        }
    }

    /// Check that every prerequisite of `table` has identifiers.
    ///
    /// Records a diagnostic naming the first empty prerequisite and returns
    /// false when one is missing.
    pub(crate) fn require(&mut self, table: Table) -> bool {
        let missing = table
            .prerequisites()
            .iter()
            .copied()
            .find(|t| !self.is_populated(*t));

        match missing {
            Some(prereq) => {
                self.diagnose(format!(
                    "Please generate {} first to create {}.",
                    prereq,
                    table.name().replace('_', " ")
                ));
                false
            }
            None => true,
        }
    }
}
