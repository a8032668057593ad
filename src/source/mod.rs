//! Record sources - where indexed (key, record id) pairs come from.

mod csv_file;

pub use csv_file::CsvSource;
