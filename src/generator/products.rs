//! Products and their images.

use super::{GenerationContext, Row, TableData, Value};
use crate::fake::FakeData;
use crate::schema::Table;
use ahash::AHashMap;

/// Chance a product carries no brand when brands exist
const NO_BRAND_PROBABILITY: f64 = 0.3;

const MIN_PRICE: f64 = 5.0;
const MAX_PRICE: f64 = 1000.0;
const MAX_QUANTITY: i64 = 500;

const IMAGE_URL_BASE: &str = "https://example.com/images/products";

pub(super) fn generate_products(ctx: &mut GenerationContext, count: usize) -> TableData {
    if !ctx.require(Table::Products) {
        return TableData::empty(Table::Products);
    }

    let with_brand = ctx.is_populated(Table::Brands);
    let timestamp = ctx.timestamp();
    let mut rows: Vec<Row> = Vec::with_capacity(count);
    let mut ids = Vec::with_capacity(count);

    for i in 1..=count {
        let id = i as i64;
        let mut fake = FakeData::new(&mut ctx.rng);

        let category_id = fake.pick_id(ctx.ids.get_ids(Table::Categories));
        let mut row = vec![Value::Int(id), Value::Int(category_id)];
        if with_brand {
            let brand_id = if fake.bool_with_probability(NO_BRAND_PROBABILITY) {
                Value::Null
            } else {
                Value::Int(fake.pick_id(ctx.ids.get_ids(Table::Brands)))
            };
            row.push(brand_id);
        }

        let name = fake.product_name();
        let description = fake.paragraph(3);
        let price = fake.price(MIN_PRICE, MAX_PRICE);
        let sku = format!("PROD-{:04}-{}", id, fake.int_range(100, 999));
        let quantity = fake.int_range(0, MAX_QUANTITY);

        row.extend([
            Value::Text(name),
            Value::Text(description),
            Value::Decimal(price),
            Value::Text(sku),
            Value::Int(quantity),
            Value::Int(1),
            Value::Text(timestamp.clone()),
            Value::Text(timestamp.clone()),
        ]);
        rows.push(row);
        ids.push(id);
        ctx.tick(i as u64);
    }

    ctx.ids.replace(Table::Products, ids);
    TableData::new(Table::Products, Table::Products.columns(with_brand), rows)
}

pub(super) fn generate_product_images(ctx: &mut GenerationContext, count: usize) -> TableData {
    if !ctx.require(Table::ProductImages) {
        return TableData::empty(Table::ProductImages);
    }

    let timestamp = ctx.timestamp();
    let mut sort_orders: AHashMap<i64, i64> = AHashMap::new();
    let mut rows: Vec<Row> = Vec::with_capacity(count);

    for i in 1..=count {
        let mut fake = FakeData::new(&mut ctx.rng);
        let product_id = fake.pick_id(ctx.ids.get_ids(Table::Products));

        let sort_order = sort_orders.entry(product_id).or_insert(0);
        *sort_order += 1;
        let sort_order = *sort_order;

        // The first image of a product is always its thumbnail
        let is_thumbnail = if sort_order == 1 {
            1
        } else {
            fake.int_range(0, 1)
        };

        rows.push(vec![
            Value::Int(i as i64),
            Value::Int(product_id),
            Value::Text(format!(
                "{}/{}_{}.jpg",
                IMAGE_URL_BASE, product_id, sort_order
            )),
            Value::Int(sort_order),
            Value::Int(is_thumbnail),
            Value::Text(timestamp.clone()),
            Value::Text(timestamp.clone()),
        ]);
        ctx.tick(i as u64);
    }

    TableData::new(
        Table::ProductImages,
        Table::ProductImages.columns(false),
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_table;
    use chrono::NaiveDate;

    fn ctx() -> GenerationContext {
        let clock = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(8, 15, 30)
            .unwrap();
        GenerationContext::new(17).with_clock(clock)
    }

    #[test]
    fn test_products_require_categories() {
        let mut ctx = ctx();
        let data = generate_products(&mut ctx, 5);
        assert!(data.is_empty());
        assert_eq!(
            ctx.diagnostics(),
            &["Please generate categories first to create products.".to_string()]
        );
    }

    #[test]
    fn test_products_without_brands_have_no_brand_column() {
        let mut ctx = ctx();
        generate_table(&mut ctx, Table::Categories, 4);
        let data = generate_products(&mut ctx, 10);

        assert_eq!(data.len(), 10);
        assert!(data.column_index("brand_id").is_none());
        for value in data.column("category_id") {
            let id = value.as_int().unwrap();
            assert!((1..=4).contains(&id));
        }
    }

    #[test]
    fn test_product_fields() {
        let mut ctx = ctx();
        generate_table(&mut ctx, Table::Categories, 3);
        generate_table(&mut ctx, Table::Brands, 5);
        let data = generate_products(&mut ctx, 60);

        assert_eq!(data.column_index("brand_id"), Some(2));
        let mut saw_null_brand = false;
        for row in &data.rows {
            match &row[2] {
                Value::Null => saw_null_brand = true,
                Value::Int(b) => assert!((1..=5).contains(b)),
                other => panic!("unexpected brand_id {:?}", other),
            }
            let id = row[0].as_int().unwrap();
            let sku = row[6].to_field();
            assert!(sku.starts_with(&format!("PROD-{:04}-", id)), "{}", sku);
            match &row[5] {
                Value::Decimal(p) => assert!((5.0..=1000.0).contains(p)),
                other => panic!("unexpected price {:?}", other),
            }
            let qty = row[7].as_int().unwrap();
            assert!((0..=500).contains(&qty));
            assert_eq!(row[8], Value::Int(1));
            assert_eq!(row[9], Value::from("2024-06-01 08:15:30"));
            assert_eq!(row[10], Value::from("2024-06-01 08:15:30"));
        }
        assert!(saw_null_brand);
        assert_eq!(ctx.ids(Table::Products).len(), 60);
    }

    #[test]
    fn test_image_sort_order_and_thumbnail() {
        let mut ctx = ctx();
        generate_table(&mut ctx, Table::Categories, 2);
        generate_table(&mut ctx, Table::Products, 3);
        let data = generate_product_images(&mut ctx, 30);

        let mut last: AHashMap<i64, i64> = AHashMap::new();
        for row in &data.rows {
            let product_id = row[1].as_int().unwrap();
            let sort_order = row[3].as_int().unwrap();
            let expected = last.get(&product_id).copied().unwrap_or(0) + 1;
            assert_eq!(sort_order, expected);
            last.insert(product_id, sort_order);

            if sort_order == 1 {
                assert_eq!(row[4], Value::Int(1));
            }
            assert_eq!(
                row[2].to_field(),
                format!(
                    "https://example.com/images/products/{}_{}.jpg",
                    product_id, sort_order
                )
            );
        }
    }
}
