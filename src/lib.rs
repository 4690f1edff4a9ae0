pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::LibraryConfig;

pub use adapters::{FixedClock, LocalStorage, MemoryStorage, SystemClock};
pub use core::{archive::CatalogArchive, catalog::CatalogStore, ledger::LoanLedger};
pub use domain::loan::{Loan, LoanStatus, User, LOAN_PERIOD_DAYS};
pub use domain::model::{Book, CatalogItem, ItemKind, Magazine, Periodicity};
pub use domain::ports::{Clock, ConfigProvider, Storage};
pub use utils::error::{LibraryError, Result};
