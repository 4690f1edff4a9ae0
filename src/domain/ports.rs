use crate::utils::error::Result;
use chrono::NaiveDate;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn exists(&self, path: &str) -> bool;
}

/// Source of "today" for date-dependent queries such as overdue detection.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn archive_file(&self) -> &str;
}
