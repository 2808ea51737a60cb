//! Table catalogue for the generated shop schema.
//!
//! Names, accepted aliases, column lists and the prerequisite edges between
//! tables. The generator and the CLI both resolve tables through this module.

pub mod graph;

pub use graph::{fill_plan, TableGraph};

use serde::Serialize;
use std::fmt;

/// The tables this tool knows how to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Users,
    Categories,
    Brands,
    Products,
    ProductImages,
    Invoices,
    InvoiceItems,
    ContactReplies,
}

impl Table {
    /// All tables in dependency order (prerequisites first)
    pub const ALL: [Table; 8] = [
        Table::Users,
        Table::Categories,
        Table::Brands,
        Table::Products,
        Table::ProductImages,
        Table::Invoices,
        Table::InvoiceItems,
        Table::ContactReplies,
    ];

    /// Canonical table name, used for CSV file names and messages
    pub fn name(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Categories => "categories",
            Table::Brands => "brands",
            Table::Products => "products",
            Table::ProductImages => "product_images",
            Table::Invoices => "invoices",
            Table::InvoiceItems => "invoice_items",
            Table::ContactReplies => "contact_replies",
        }
    }

    /// Singular form accepted on the command line
    pub fn singular(&self) -> &'static str {
        match self {
            Table::Users => "user",
            Table::Categories => "category",
            Table::Brands => "brand",
            Table::Products => "product",
            Table::ProductImages => "product_image",
            Table::Invoices => "invoice",
            Table::InvoiceItems => "invoice_item",
            Table::ContactReplies => "contact_reply",
        }
    }

    /// Tables whose identifiers must exist before this table can be generated
    pub fn prerequisites(&self) -> &'static [Table] {
        match self {
            Table::Users | Table::Categories | Table::Brands => &[],
            Table::Products => &[Table::Categories],
            Table::ProductImages => &[Table::Products],
            Table::Invoices => &[Table::Users],
            Table::InvoiceItems => &[Table::Invoices, Table::Products],
            Table::ContactReplies => &[Table::Users],
        }
    }

    /// Tables the dispatcher populates before running this one.
    ///
    /// Brands are optional for products but get a default batch so the
    /// `brand_id` column is present.
    pub fn fill_dependencies(&self) -> &'static [Table] {
        match self {
            Table::Products => &[Table::Categories, Table::Brands],
            other => other.prerequisites(),
        }
    }

    /// Size of the batch generated when this table is auto-filled
    pub fn default_batch(&self) -> usize {
        match self {
            Table::Brands => 5,
            _ => 10,
        }
    }

    /// Column names, in output order.
    ///
    /// `with_brand` only affects products, whose `brand_id` column exists
    /// only when brands have been generated.
    pub fn columns(&self, with_brand: bool) -> Vec<&'static str> {
        match self {
            Table::Users => vec![
                "id",
                "first_name",
                "last_name",
                "address",
                "city",
                "state",
                "country",
                "postcode",
                "phone",
                "dob",
                "email",
                "password",
                "role",
                "enabled",
                "failed_login_attempts",
                "created_at",
                "updated_at",
            ],
            Table::Categories => vec!["id", "parent_id", "name", "slug", "created_at", "updated_at"],
            Table::Brands => vec!["id", "name", "slug", "created_at", "updated_at"],
            Table::Products => {
                let mut cols = vec![
                    "id",
                    "category_id",
                    "name",
                    "description",
                    "price",
                    "sku",
                    "quantity",
                    "status",
                    "created_at",
                    "updated_at",
                ];
                if with_brand {
                    cols.insert(2, "brand_id");
                }
                cols
            }
            Table::ProductImages => vec![
                "id",
                "product_id",
                "image_url",
                "sort_order",
                "is_thumbnail",
                "created_at",
                "updated_at",
            ],
            Table::Invoices => vec![
                "id",
                "user_id",
                "invoice_date",
                "invoice_number",
                "billing_address",
                "billing_city",
                "billing_state",
                "billing_country",
                "billing_postcode",
                "payment_method",
                "payment_account_name",
                "payment_account_number",
                "status",
                "status_message",
                "created_at",
                "updated_at",
            ],
            Table::InvoiceItems => vec![
                "id",
                "invoice_id",
                "product_id",
                "unit_price",
                "quantity",
                "created_at",
                "updated_at",
            ],
            Table::ContactReplies => vec![
                "id",
                "contact_id",
                "user_id",
                "reply_message",
                "replied_at",
                "created_at",
                "updated_at",
            ],
        }
    }

    /// Comma-separated list of valid names, for error messages
    pub fn valid_names() -> String {
        Table::ALL
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Table::ALL
            .iter()
            .copied()
            .find(|t| t.name() == lower || t.singular() == lower)
            .ok_or_else(|| {
                format!(
                    "Invalid table name: {}. Please choose from: {}",
                    s.trim(),
                    Table::valid_names()
                )
            })
    }
}
