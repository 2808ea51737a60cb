//! Users table.

use super::{GenerationContext, Row, TableData, Value};
use crate::address::random_address;
use crate::schema::Table;
use chrono::{Duration, Months};
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};

/// Placeholder password every generated user shares
const PLACEHOLDER_PASSWORD: &str = "password123";

/// Hex SHA-256 digest of the placeholder password
pub static PASSWORD_DIGEST: Lazy<String> =
    Lazy::new(|| hex::encode(Sha256::digest(PLACEHOLDER_PASSWORD.as_bytes())));

const MIN_AGE_YEARS: u32 = 18;
const MAX_AGE_YEARS: u32 = 90;

pub(super) fn generate(ctx: &mut GenerationContext, count: usize) -> TableData {
    let today = ctx.clock().date();
    let youngest = today
        .checked_sub_months(Months::new(12 * MIN_AGE_YEARS))
        .unwrap_or(today);
    let oldest = today
        .checked_sub_months(Months::new(12 * MAX_AGE_YEARS))
        .unwrap_or(today);
    let span_days = (youngest - oldest).num_days();

    let mut rows: Vec<Row> = Vec::with_capacity(count);
    let mut ids = Vec::with_capacity(count);

    for i in 1..=count {
        let id = i as i64;
        let mut fake = ctx.fake();

        let first = fake.first_name();
        let last = fake.last_name();
        let addr = random_address(fake.rng());
        let dob = oldest + Duration::days(fake.int_range(0, span_days));
        let domain = fake.domain_name();
        let email = fake.email(&first, &last, &domain);

        rows.push(vec![
            Value::Int(id),
            Value::Text(first),
            Value::Text(last),
            Value::Text(addr.address),
            Value::Text(addr.city),
            Value::from(addr.state),
            Value::from(addr.country.name()),
            Value::Text(addr.postcode),
            Value::Text(addr.phone),
            Value::Text(dob.format("%Y-%m-%d").to_string()),
            Value::Text(email),
            Value::Text(PASSWORD_DIGEST.clone()),
            Value::from("user"),
            Value::Int(1),
            Value::Int(0),
            Value::Null,
            Value::Null,
        ]);
        ids.push(id);
        ctx.tick(i as u64);
    }

    ctx.ids.replace(Table::Users, ids);
    TableData::new(Table::Users, Table::Users.columns(false), rows)
}
