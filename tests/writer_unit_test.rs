//! Unit tests for writer module: files, gzip output and directory layout.

use flate2::read::GzDecoder;
use shop_datagen::generator::{generate_table, GenerationContext, Generator};
use shop_datagen::schema::Table;
use shop_datagen::writer::{to_csv_string, write_table, DirectoryWriter};
use std::fs;
use std::io::Read;
use tempfile::TempDir;

fn ctx() -> GenerationContext {
    let clock = chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    GenerationContext::new(42).with_clock(clock)
}

#[test]
fn test_write_table_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("nested").join("brands.csv");

    let mut ctx = ctx();
    let data = generate_table(&mut ctx, Table::Brands, 7);
    let rows = write_table(Some(&file_path), &data).unwrap();
    assert_eq!(rows, 7);

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, to_csv_string(&data).unwrap());
    assert!(content.starts_with("id,name,slug,created_at,updated_at\n"));
    assert_eq!(content.lines().count(), 8);
}

#[test]
fn test_gzip_output_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("users.csv.gz");

    let mut ctx = ctx();
    let data = generate_table(&mut ctx, Table::Users, 12);
    write_table(Some(&file_path), &data).unwrap();

    let mut decoded = String::new();
    GzDecoder::new(fs::File::open(&file_path).unwrap())
        .read_to_string(&mut decoded)
        .unwrap();
    assert_eq!(decoded, to_csv_string(&data).unwrap());
}

#[test]
fn test_csv_reader_parses_quoted_fields() {
    let mut gen = Generator::new(ctx());
    let data = gen.run(Table::Products, 20).data;
    let csv = to_csv_string(&data).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), data.columns.len());

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 20);
    let desc_idx = data.column_index("description").unwrap();
    for (record, row) in records.iter().zip(&data.rows) {
        assert_eq!(&record[desc_idx], row[desc_idx].to_field());
    }
}

#[test]
fn test_directory_writer() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");
    let writer = DirectoryWriter::new(out.clone());
    writer.ensure_output_dir().unwrap();

    let mut ctx = ctx();
    let users = generate_table(&mut ctx, Table::Users, 3);
    let replies = generate_table(&mut ctx, Table::ContactReplies, 4);

    let (users_path, users_rows) = writer.write(&users).unwrap();
    let (replies_path, replies_rows) = writer.write(&replies).unwrap();

    assert_eq!(users_path, out.join("users.csv"));
    assert_eq!(replies_path, out.join("contact_replies.csv"));
    assert_eq!((users_rows, replies_rows), (3, 4));
    assert!(fs::read_to_string(&replies_path)
        .unwrap()
        .starts_with("id,contact_id,user_id,reply_message,replied_at,created_at,updated_at\n"));
}
