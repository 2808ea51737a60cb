//! Invoices and invoice line items.

use super::{GenerationContext, Row, TableData, Value, TIMESTAMP_FORMAT};
use crate::address::{random_address, Address};
use crate::fake::FakeData;
use crate::schema::Table;
use ahash::AHashMap;
use chrono::Duration;

const PAYMENT_METHODS: &[&str] = &["Cash On Delivery", "Bank Transfer", "Credit Card"];

const BANK_TRANSFER: &str = "Bank Transfer";

/// Account details used for every non bank-transfer payment
const DEFAULT_ACCOUNT_NAME: &str = "Tester";
const DEFAULT_ACCOUNT_NUMBER: &str = "09076540ABC";

const STATUSES: &[&str] = &["AWAITING_FULFILLMENT", "ON HOLD", "COMPLETED", "CANCELLED"];

const MAX_INVOICE_AGE_DAYS: i64 = 365;
const MAX_ITEM_AGE_MINUTES: i64 = 60;

const MIN_UNIT_PRICE: f64 = 5.0;
const MAX_UNIT_PRICE: f64 = 500.0;
const MAX_ITEM_QUANTITY: i64 = 5;

pub(super) fn generate_invoices(ctx: &mut GenerationContext, count: usize) -> TableData {
    if !ctx.require(Table::Invoices) {
        return TableData::empty(Table::Invoices);
    }

    let clock = ctx.clock();

    // One billing address per user, indexed like the users id sequence
    let addresses: Vec<Address> = {
        let user_count = ctx.ids.get_ids(Table::Users).len();
        let mut fake = FakeData::new(&mut ctx.rng);
        (0..user_count).map(|_| random_address(fake.rng())).collect()
    };

    let mut rows: Vec<Row> = Vec::with_capacity(count);
    let mut ids = Vec::with_capacity(count);

    for i in 1..=count {
        let id = i as i64;
        let mut fake = FakeData::new(&mut ctx.rng);
        let users = ctx.ids.get_ids(Table::Users);

        let slot = fake.index(users.len());
        let user_id = users[slot];
        let addr = &addresses[slot];

        let days_ago = fake.int_range(1, MAX_INVOICE_AGE_DAYS);
        let invoice_date = clock - Duration::days(days_ago);
        let invoice_number = format!(
            "INV-{}-{}",
            invoice_date.format("%Y%m%d"),
            fake.int_range(1_000_000, 9_999_999)
        );

        let payment_method = *fake.pick(PAYMENT_METHODS);
        let (account_name, account_number) = if payment_method == BANK_TRANSFER {
            let name = fake.full_name();
            let number = format!("{}{}", fake.letters(4), fake.digits(14));
            (name, number)
        } else {
            (
                DEFAULT_ACCOUNT_NAME.to_string(),
                DEFAULT_ACCOUNT_NUMBER.to_string(),
            )
        };
        let status = *fake.pick(STATUSES);
        let invoice_date = invoice_date.format(TIMESTAMP_FORMAT).to_string();

        rows.push(vec![
            Value::Int(id),
            Value::Int(user_id),
            Value::Text(invoice_date.clone()),
            Value::Text(invoice_number),
            Value::Text(addr.address.clone()),
            Value::Text(addr.city.clone()),
            Value::from(addr.state.clone()),
            Value::from(addr.country.name()),
            Value::Text(addr.postcode.clone()),
            Value::from(payment_method),
            Value::Text(account_name),
            Value::Text(account_number),
            Value::from(status),
            Value::Null,
            Value::Text(invoice_date),
            Value::Null,
        ]);
        ids.push(id);
        ctx.tick(i as u64);
    }

    ctx.ids.replace(Table::Invoices, ids);
    TableData::new(Table::Invoices, Table::Invoices.columns(false), rows)
}

pub(super) fn generate_invoice_items(ctx: &mut GenerationContext, count: usize) -> TableData {
    if !ctx.require(Table::InvoiceItems) {
        return TableData::empty(Table::InvoiceItems);
    }

    let clock = ctx.clock();

    // Each product sells at one price across all invoices
    let prices: AHashMap<i64, f64> = {
        let mut fake = FakeData::new(&mut ctx.rng);
        ctx.ids
            .get_ids(Table::Products)
            .iter()
            .map(|&pid| (pid, fake.price(MIN_UNIT_PRICE, MAX_UNIT_PRICE)))
            .collect()
    };

    let mut rows: Vec<Row> = Vec::with_capacity(count);

    for i in 1..=count {
        let mut fake = FakeData::new(&mut ctx.rng);
        let invoice_id = fake.pick_id(ctx.ids.get_ids(Table::Invoices));
        let product_id = fake.pick_id(ctx.ids.get_ids(Table::Products));
        let quantity = fake.int_range(1, MAX_ITEM_QUANTITY);
        let minutes_ago = fake.int_range(1, MAX_ITEM_AGE_MINUTES);
        let created_at = clock - Duration::minutes(minutes_ago);
        let unit_price = prices.get(&product_id).copied().unwrap_or(MIN_UNIT_PRICE);

        rows.push(vec![
            Value::Int(i as i64),
            Value::Int(invoice_id),
            Value::Int(product_id),
            Value::Decimal(unit_price),
            Value::Int(quantity),
            Value::Text(created_at.format(TIMESTAMP_FORMAT).to_string()),
            Value::Null,
        ]);
        ctx.tick(i as u64);
    }

    TableData::new(
        Table::InvoiceItems,
        Table::InvoiceItems.columns(false),
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_table;
    use chrono::{NaiveDate, NaiveDateTime};

    fn clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn parse(value: &Value) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&value.to_field(), TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_invoices_require_users() {
        let mut ctx = GenerationContext::new(2).with_clock(clock());
        let data = generate_invoices(&mut ctx, 3);
        assert!(data.is_empty());
        assert_eq!(
            ctx.diagnostics(),
            &["Please generate users first to create invoices.".to_string()]
        );
    }

    #[test]
    fn test_invoice_billing_matches_a_user_address_shape() {
        let mut ctx = GenerationContext::new(21).with_clock(clock());
        generate_table(&mut ctx, Table::Users, 8);
        let data = generate_invoices(&mut ctx, 40);

        assert_eq!(data.len(), 40);
        for row in &data.rows {
            let user_id = row[1].as_int().unwrap();
            assert!((1..=8).contains(&user_id));

            let date = parse(&row[2]);
            let age = clock() - date;
            assert!(age.num_days() >= 1 && age.num_days() <= 365);
            assert_eq!(row[14], row[2]);

            let number = row[3].to_field();
            let expected_prefix = format!("INV-{}-", date.format("%Y%m%d"));
            assert!(number.starts_with(&expected_prefix), "{}", number);
            assert_eq!(number.len(), expected_prefix.len() + 7);

            let country = row[7].to_field();
            let state_null = row[6].is_null();
            match country.as_str() {
                "United Kingdom" | "Vietnam" | "Germany" => assert!(state_null),
                _ => assert!(!state_null),
            }

            assert!(row[13].is_null());
            assert!(row[15].is_null());
            assert!(STATUSES.contains(&row[12].to_field().as_str()));
        }
    }

    #[test]
    fn test_same_user_reuses_billing_address() {
        let mut ctx = GenerationContext::new(9).with_clock(clock());
        generate_table(&mut ctx, Table::Users, 3);
        let data = generate_invoices(&mut ctx, 30);

        let mut seen: AHashMap<i64, Vec<String>> = AHashMap::new();
        for row in &data.rows {
            let user_id = row[1].as_int().unwrap();
            let billing: Vec<String> = row[4..9].iter().map(|v| v.to_field()).collect();
            let first = seen.entry(user_id).or_insert_with(|| billing.clone());
            assert_eq!(*first, billing);
        }
    }

    #[test]
    fn test_payment_accounts() {
        let mut ctx = GenerationContext::new(5).with_clock(clock());
        generate_table(&mut ctx, Table::Users, 5);
        let data = generate_invoices(&mut ctx, 60);

        for row in &data.rows {
            let method = row[9].to_field();
            assert!(PAYMENT_METHODS.contains(&method.as_str()));
            if method == BANK_TRANSFER {
                assert_ne!(row[10].to_field(), DEFAULT_ACCOUNT_NAME);
                assert_eq!(row[11].to_field().len(), 18);
            } else {
                assert_eq!(row[10], Value::from(DEFAULT_ACCOUNT_NAME));
                assert_eq!(row[11], Value::from(DEFAULT_ACCOUNT_NUMBER));
            }
        }
    }

    #[test]
    fn test_invoice_items_with_nothing_present() {
        let mut ctx = GenerationContext::new(1).with_clock(clock());
        let data = generate_invoice_items(&mut ctx, 5);
        assert!(data.is_empty());
        assert_eq!(ctx.diagnostics().len(), 1);
    }

    #[test]
    fn test_invoice_items_use_one_price_per_product() {
        let mut ctx = GenerationContext::new(33).with_clock(clock());
        generate_table(&mut ctx, Table::Users, 4);
        generate_table(&mut ctx, Table::Invoices, 6);
        generate_table(&mut ctx, Table::Categories, 2);
        generate_table(&mut ctx, Table::Products, 4);
        let data = generate_invoice_items(&mut ctx, 50);

        let mut prices: AHashMap<i64, String> = AHashMap::new();
        for row in &data.rows {
            let invoice_id = row[1].as_int().unwrap();
            let product_id = row[2].as_int().unwrap();
            assert!((1..=6).contains(&invoice_id));
            assert!((1..=4).contains(&product_id));

            let price = row[3].to_field();
            let value: f64 = price.parse().unwrap();
            assert!((5.0..=500.0).contains(&value));
            let first = prices.entry(product_id).or_insert_with(|| price.clone());
            assert_eq!(*first, price);

            let qty = row[4].as_int().unwrap();
            assert!((1..=5).contains(&qty));

            let minutes = (clock() - parse(&row[5])).num_minutes();
            assert!((1..=60).contains(&minutes));
            assert!(row[6].is_null());
        }
    }
}
