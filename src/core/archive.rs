use crate::adapters::storage::LocalStorage;
use crate::core::catalog::CatalogStore;
use crate::core::codec;
use crate::domain::model::CatalogItem;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{LibraryError, Result};

/// Saves and restores a `CatalogStore` through a `Storage` backend.
#[derive(Debug, Clone)]
pub struct CatalogArchive<S: Storage> {
    storage: S,
    file_name: String,
}

impl CatalogArchive<LocalStorage> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(LocalStorage::new(config.data_dir()), config.archive_file())
    }
}

impl<S: Storage> CatalogArchive<S> {
    pub fn new(storage: S, file_name: impl Into<String>) -> Self {
        Self {
            storage,
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn exists(&self) -> bool {
        self.storage.exists(&self.file_name)
    }

    pub fn save(&self, store: &CatalogStore) -> Result<()> {
        let result = codec::encode(store.items())
            .and_then(|bytes| self.storage.write_file(&self.file_name, &bytes));

        match result {
            Ok(()) => {
                tracing::info!("💾 Saved {} item(s) to {}", store.len(), self.file_name);
                Ok(())
            }
            Err(e) => {
                tracing::error!("❌ Saving catalog to {} failed: {}", self.file_name, e);
                Err(LibraryError::SaveError {
                    path: self.file_name.clone(),
                    source: Box::new(e),
                })
            }
        }
    }

    pub fn load(&self) -> Result<Vec<CatalogItem>> {
        let result = self
            .storage
            .read_file(&self.file_name)
            .and_then(|bytes| codec::decode(&bytes));

        match result {
            Ok(items) => {
                tracing::info!("📂 Loaded {} item(s) from {}", items.len(), self.file_name);
                Ok(items)
            }
            Err(e) => {
                tracing::error!("❌ Loading catalog from {} failed: {}", self.file_name, e);
                Err(LibraryError::LoadError {
                    path: self.file_name.clone(),
                    source: Box::new(e),
                })
            }
        }
    }

    /// Replaces the store's contents with the archive. On failure the store is left as it was.
    pub fn restore(&self, store: &mut CatalogStore) -> Result<usize> {
        let items = self.load()?;
        let count = items.len();
        store.replace_items(items);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStorage;
    use crate::domain::model::{Book, Magazine, Periodicity};

    fn sample_store() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.add(Book::new("A1", "The Two Towers", 1954, "J.R.R. Tolkien", "Fantasy", 352));
        store.add(Magazine::new("B1", "Wired", 2024, 7, Periodicity::Monthly));
        store
    }

    #[test]
    fn test_save_and_restore() {
        let archive = CatalogArchive::new(MemoryStorage::new(), "archive.dat");
        let store = sample_store();
        archive.save(&store).unwrap();

        let mut restored = CatalogStore::new();
        assert_eq!(archive.restore(&mut restored).unwrap(), 2);
        assert_eq!(restored, store);
    }

    #[test]
    fn test_missing_archive_leaves_store_untouched() {
        let archive = CatalogArchive::new(MemoryStorage::new(), "archive.dat");
        let mut store = sample_store();

        let err = archive.restore(&mut store).unwrap_err();
        assert!(matches!(err, LibraryError::LoadError { .. }));
        assert_eq!(store, sample_store());
    }

    #[test]
    fn test_malformed_archive_leaves_store_untouched() {
        let storage = MemoryStorage::new();
        storage.write_file("archive.dat", b"definitely not an archive").unwrap();
        let archive = CatalogArchive::new(storage, "archive.dat");
        let mut store = sample_store();

        let err = archive.restore(&mut store).unwrap_err();
        assert!(err.to_string().contains("load"));
        assert!(matches!(
            err,
            LibraryError::LoadError { ref source, .. }
                if matches!(**source, LibraryError::MalformedArchiveError { .. })
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_exists() {
        let archive = CatalogArchive::new(MemoryStorage::new(), "archive.dat");
        assert!(!archive.exists());
        archive.save(&CatalogStore::new()).unwrap();
        assert!(archive.exists());
        assert!(archive.storage().exists(archive.file_name()));
    }
}
