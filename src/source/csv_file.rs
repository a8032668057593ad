//! Delimited-file record source.

use std::fs;
use std::path::Path;

use crate::common::{CompositeKey, RecordId};
use crate::error::{Error, Result};

/// Typed records parsed out of a comma-separated file with a header row.
///
/// The file is read once at open time; the named key columns form each
/// row's [`CompositeKey`] and the id column its [`RecordId`]. Rows are
/// addressed by 1-based record number, matching how the surrounding
/// system refers to tuples.
///
/// # Usage
/// ```no_run
/// use ordindex::{BPlusTree, CsvSource};
///
/// let source = CsvSource::open("data.csv", ("sales", "price"), "tid")?;
/// let mut tree = BPlusTree::new();
/// tree.bulk_load(source.range(1, source.len())?);
/// # Ok::<(), ordindex::Error>(())
/// ```
#[derive(Debug)]
pub struct CsvSource {
    records: Vec<(CompositeKey, RecordId)>,
}

impl CsvSource {
    /// Read and parse a file.
    ///
    /// `key_columns` names the two header columns forming the composite
    /// key, in order; `id_column` names the record-identifier column.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be read.
    /// - `Error::MissingColumn` if a named column is absent from the
    ///   header row (an empty file has no header row, so every column is
    ///   missing).
    /// - `Error::MalformedRecord` for a row with too few fields or a
    ///   field that does not parse as an integer.
    pub fn open<P: AsRef<Path>>(
        path: P,
        key_columns: (&str, &str),
        id_column: &str,
    ) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let mut lines = text.lines();

        let header: Vec<&str> = lines
            .next()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .collect();
        let column = |name: &str| -> Result<usize> {
            header
                .iter()
                .position(|&h| h == name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };
        let key_a = column(key_columns.0)?;
        let key_b = column(key_columns.1)?;
        let id = column(id_column)?;

        let mut records = Vec::new();
        for (row, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let tid = row + 1;
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let field = |idx: usize| -> Result<&str> {
                fields.get(idx).copied().ok_or(Error::MalformedRecord(tid))
            };
            let a: i64 = field(key_a)?
                .parse()
                .map_err(|_| Error::MalformedRecord(tid))?;
            let b: i64 = field(key_b)?
                .parse()
                .map_err(|_| Error::MalformedRecord(tid))?;
            let rid: u64 = field(id)?
                .parse()
                .map_err(|_| Error::MalformedRecord(tid))?;
            records.push((CompositeKey::new(a, b), RecordId::new(rid)));
        }
        Ok(Self { records })
    }

    /// Number of data rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the file had no data rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up one record by 1-based number.
    ///
    /// # Errors
    /// `Error::RecordOutOfRange` for 0 or a number past the last row.
    pub fn record(&self, tid: usize) -> Result<(CompositeKey, RecordId)> {
        if tid == 0 || tid > self.records.len() {
            return Err(Error::RecordOutOfRange(tid));
        }
        Ok(self.records[tid - 1])
    }

    /// The records numbered `start..=end`, for batch loading.
    ///
    /// An inverted range yields no records.
    ///
    /// # Errors
    /// `Error::RecordOutOfRange` if either bound misses the row range.
    pub fn range(&self, start: usize, end: usize) -> Result<Vec<(CompositeKey, RecordId)>> {
        if start == 0 || start > self.records.len() {
            return Err(Error::RecordOutOfRange(start));
        }
        if end == 0 || end > self.records.len() {
            return Err(Error::RecordOutOfRange(end));
        }
        if start > end {
            return Ok(Vec::new());
        }
        Ok(self.records[start - 1..end].to_vec())
    }
}
