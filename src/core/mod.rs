pub mod archive;
pub mod catalog;
pub mod codec;
pub mod ledger;

pub use crate::domain::model::{Book, CatalogItem, Magazine, Periodicity};
pub use crate::domain::ports::{Clock, ConfigProvider, Storage};
pub use crate::utils::error::Result;
