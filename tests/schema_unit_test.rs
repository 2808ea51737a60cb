//! Unit tests for the table catalogue and prerequisite graph.

use shop_datagen::schema::{fill_plan, Table};

#[test]
fn test_every_table_parses_by_both_names() {
    for table in Table::ALL {
        assert_eq!(table.name().parse::<Table>().unwrap(), table);
        assert_eq!(table.singular().parse::<Table>().unwrap(), table);
        assert_eq!(
            table.name().to_uppercase().parse::<Table>().unwrap(),
            table
        );
    }
}

#[test]
fn test_fill_plan_from_empty() {
    assert_eq!(
        fill_plan(Table::ProductImages, |_| false),
        vec![Table::Categories, Table::Brands, Table::Products]
    );
    assert_eq!(fill_plan(Table::ContactReplies, |_| false), vec![Table::Users]);
    assert!(fill_plan(Table::Users, |_| false).is_empty());
}

#[test]
fn test_fill_plan_skips_populated() {
    let plan = fill_plan(Table::InvoiceItems, |t| t == Table::Users || t == Table::Brands);
    assert_eq!(
        plan,
        vec![Table::Invoices, Table::Categories, Table::Products]
    );
}

#[test]
fn test_column_counts() {
    let expected = [
        (Table::Users, 17),
        (Table::Categories, 6),
        (Table::Brands, 5),
        (Table::ProductImages, 7),
        (Table::Invoices, 16),
        (Table::InvoiceItems, 7),
        (Table::ContactReplies, 7),
    ];
    for (table, count) in expected {
        assert_eq!(table.columns(false).len(), count, "{}", table);
        assert_eq!(table.columns(false)[0], "id");
    }
    assert_eq!(Table::Products.columns(false).len(), 10);
}
