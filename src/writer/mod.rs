//! CSV output for generated tables.
//!
//! Rows are written with a header line and quote-on-demand fields. Output goes
//! to stdout, a plain file, or a gzip-compressed file when the path ends in
//! `.gz`.

use crate::generator::TableData;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// Where CSV bytes end up
pub enum Output {
    Stdout(BufWriter<Stdout>),
    File(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl Output {
    /// Open `path` for writing, or stdout when `None`.
    ///
    /// Parent directories are created as needed.
    pub fn open(path: Option<&Path>) -> io::Result<Self> {
        let path = match path {
            Some(p) => p,
            None => return Ok(Output::Stdout(BufWriter::new(io::stdout()))),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = BufWriter::with_capacity(WRITER_BUFFER_SIZE, File::create(path)?);

        if is_gzip_path(path) {
            Ok(Output::Gzip(GzEncoder::new(file, Compression::default())))
        } else {
            Ok(Output::File(file))
        }
    }

    /// Flush buffered data and write the gzip trailer if any
    pub fn finish(self) -> io::Result<()> {
        match self {
            Output::Stdout(mut w) => w.flush(),
            Output::File(mut w) => w.flush(),
            Output::Gzip(enc) => enc.finish()?.flush(),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(w) => w.write(buf),
            Output::File(w) => w.write(buf),
            Output::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(w) => w.flush(),
            Output::File(w) => w.flush(),
            Output::Gzip(w) => w.flush(),
        }
    }
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Streams one table as CSV
pub struct CsvTableWriter<W: Write> {
    inner: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> CsvTableWriter<W> {
    pub fn new(writer: W) -> Self {
        let inner = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(writer);
        Self {
            inner,
            rows_written: 0,
        }
    }

    /// Write the header line followed by every row.
    ///
    /// A table without columns (a generator that refused to run) produces no
    /// output at all.
    pub fn write_table(&mut self, data: &TableData) -> csv::Result<()> {
        if data.columns.is_empty() {
            return Ok(());
        }

        self.inner.write_record(&data.columns)?;
        for row in &data.rows {
            self.inner.write_record(row.iter().map(|v| v.to_field()))?;
            self.rows_written += 1;
        }
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> anyhow::Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush CSV output: {}", e.error()))
    }
}

/// Write a table to `path` (or stdout) and return the number of rows written
pub fn write_table(path: Option<&Path>, data: &TableData) -> anyhow::Result<usize> {
    let mut writer = CsvTableWriter::new(Output::open(path)?);
    writer.write_table(data)?;
    let rows = writer.rows_written();
    writer.into_inner()?.finish()?;
    Ok(rows)
}

/// Render a table as a CSV string
pub fn to_csv_string(data: &TableData) -> anyhow::Result<String> {
    let mut writer = CsvTableWriter::new(Vec::new());
    writer.write_table(data)?;
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes one `<table>.csv` per table into a directory
pub struct DirectoryWriter {
    output_dir: PathBuf,
    compress: bool,
}

impl DirectoryWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            compress: false,
        }
    }

    /// Write `<table>.csv.gz` files instead of plain CSV
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn ensure_output_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.output_dir)
    }

    pub fn path_for(&self, data: &TableData) -> PathBuf {
        let ext = if self.compress { "csv.gz" } else { "csv" };
        self.output_dir.join(format!("{}.{}", data.table.name(), ext))
    }

    /// Write one table, returning the file path and the row count
    pub fn write(&self, data: &TableData) -> anyhow::Result<(PathBuf, usize)> {
        let path = self.path_for(data);
        let rows = write_table(Some(&path), data)?;
        Ok((path, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Row, Value};
    use crate::schema::Table;

    fn brands(rows: Vec<Row>) -> TableData {
        TableData::new(Table::Brands, Table::Brands.columns(false), rows)
    }

    #[test]
    fn test_header_and_null_marker() {
        let data = brands(vec![vec![
            Value::Int(1),
            Value::from("ToolMaster"),
            Value::from("toolmaster"),
            Value::Null,
            Value::Null,
        ]]);
        let csv = to_csv_string(&data).unwrap();
        assert_eq!(
            csv,
            "id,name,slug,created_at,updated_at\n1,ToolMaster,toolmaster,NULL,NULL\n"
        );
    }

    #[test]
    fn test_quotes_only_when_needed() {
        let data = brands(vec![vec![
            Value::Int(1),
            Value::from("Smith, Jones and Co Tools"),
            Value::from("say \"hi\""),
            Value::Null,
            Value::Null,
        ]]);
        let csv = to_csv_string(&data).unwrap();
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "1,\"Smith, Jones and Co Tools\",\"say \"\"hi\"\"\",NULL,NULL"
        );
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let csv = to_csv_string(&TableData::empty(Table::Products)).unwrap();
        assert!(csv.is_empty());
    }

    #[test]
    fn test_gzip_detection() {
        assert!(is_gzip_path(Path::new("out/users.csv.gz")));
        assert!(is_gzip_path(Path::new("USERS.GZ")));
        assert!(!is_gzip_path(Path::new("users.csv")));
        assert!(!is_gzip_path(Path::new("gz")));
    }

    #[test]
    fn test_directory_writer_paths() {
        let data = TableData::empty(Table::InvoiceItems);
        let plain = DirectoryWriter::new(PathBuf::from("out"));
        assert_eq!(plain.path_for(&data), PathBuf::from("out/invoice_items.csv"));
        let gz = DirectoryWriter::new(PathBuf::from("out")).with_compression(true);
        assert_eq!(gz.path_for(&data), PathBuf::from("out/invoice_items.csv.gz"));
    }
}
