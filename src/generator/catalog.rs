//! Categories and brands.

use super::{GenerationContext, Row, TableData, Value};
use crate::fake::slugify;
use crate::schema::Table;
use std::collections::HashSet;

/// Fixed tool taxonomy, used for the first categories of every run
const BASE_CATEGORIES: &[(&str, &str)] = &[
    ("Hand Tools", "hand-tools"),
    ("Power Tools", "power-tools"),
    ("Hammer", "hammer"),
    ("Hand Saw", "hand-saw"),
    ("Wrench", "wrench"),
    ("Screwdriver", "screwdriver"),
    ("Pliers", "pliers"),
    ("Grinder", "grinder"),
    ("Sander", "sander"),
    ("Saw", "saw"),
    ("Drill", "drill"),
    ("Other", "other"),
];

/// Taxonomy roots; never attached to a parent
const ROOT_CATEGORIES: &[&str] = &["Hand Tools", "Power Tools"];

/// Leaves that belong under "Hand Tools" (id 1)
const HAND_TOOL_LEAVES: &[&str] = &["Hammer", "Hand Saw", "Wrench", "Screwdriver", "Pliers"];

/// Leaves that belong under "Power Tools" (id 2)
const POWER_TOOL_LEAVES: &[&str] = &["Grinder", "Sander", "Saw", "Drill"];

/// Chance a non-taxonomy category attaches to a random earlier category
const RANDOM_PARENT_PROBABILITY: f64 = 0.2;

const BASE_BRANDS: &[&str] = &[
    "Brand name 1",
    "Brand name 2",
    "ToolMaster",
    "PowerCraft",
    "DIYPro",
];

/// Attempts at a fresh fake name before falling back to a numeric suffix
const UNIQUE_ATTEMPTS: usize = 16;

/// Hands out names that have not been used in this table yet
struct UniqueNames {
    used: HashSet<String>,
}

impl UniqueNames {
    fn new<'a>(reserved: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            used: reserved.into_iter().map(String::from).collect(),
        }
    }

    /// Draw candidates from `make` until one is unused
    fn next(&mut self, mut make: impl FnMut() -> String) -> String {
        let mut candidate = make();
        for _ in 0..UNIQUE_ATTEMPTS {
            if !self.used.contains(&candidate) {
                break;
            }
            candidate = make();
        }

        let base = candidate.clone();
        let mut n = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{} {}", base, n);
            n += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

pub(super) fn generate_categories(ctx: &mut GenerationContext, count: usize) -> TableData {
    let mut rows: Vec<Row> = Vec::with_capacity(count);
    let mut ids: Vec<i64> = Vec::with_capacity(count);
    let mut names = UniqueNames::new(BASE_CATEGORIES.iter().map(|(name, _)| *name));

    for i in 1..=count {
        let id = i as i64;
        ids.push(id);
        let mut fake = ctx.fake();

        let (name, slug) = match BASE_CATEGORIES.get(i - 1) {
            Some((name, slug)) => (name.to_string(), slug.to_string()),
            None => {
                let name = names.next(|| format!("{} Category", fake.word()));
                let slug = slugify(&name);
                (name, slug)
            }
        };

        let parent_id = if ROOT_CATEGORIES.contains(&name.as_str()) {
            Value::Null
        } else if HAND_TOOL_LEAVES.contains(&name.as_str()) && ids.contains(&1) {
            Value::Int(1)
        } else if POWER_TOOL_LEAVES.contains(&name.as_str()) && ids.contains(&2) {
            Value::Int(2)
        } else if ids.len() > 1 && fake.bool_with_probability(RANDOM_PARENT_PROBABILITY) {
            // Earlier categories only, never the row itself
            Value::Int(fake.pick_id(&ids[..ids.len() - 1]))
        } else {
            Value::Null
        };

        rows.push(vec![
            Value::Int(id),
            parent_id,
            Value::Text(name),
            Value::Text(slug),
            Value::Null,
            Value::Null,
        ]);
        ctx.tick(i as u64);
    }

    ctx.ids.replace(Table::Categories, ids);
    TableData::new(Table::Categories, Table::Categories.columns(false), rows)
}

pub(super) fn generate_brands(ctx: &mut GenerationContext, count: usize) -> TableData {
    let mut rows: Vec<Row> = Vec::with_capacity(count);
    let mut ids: Vec<i64> = Vec::with_capacity(count);
    let mut names = UniqueNames::new(BASE_BRANDS.iter().copied());

    for i in 1..=count {
        let id = i as i64;
        let mut fake = ctx.fake();

        let name = match BASE_BRANDS.get(i - 1) {
            Some(name) => name.to_string(),
            None => names.next(|| format!("{} Tools", fake.company_name())),
        };
        let slug = slugify(&name);

        rows.push(vec![
            Value::Int(id),
            Value::Text(name),
            Value::Text(slug),
            Value::Null,
            Value::Null,
        ]);
        ids.push(id);
        ctx.tick(i as u64);
    }

    ctx.ids.replace(Table::Brands, ids);
    TableData::new(Table::Brands, Table::Brands.columns(false), rows)
}
