use crate::domain::model::{Book, CatalogItem};

/// Ordered, in-memory collection of catalog items.
///
/// Insertion order is preserved and duplicate ISBNs are allowed. Every
/// lookup is a linear scan using exact, case-sensitive comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    items: Vec<CatalogItem>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: impl Into<CatalogItem>) {
        let item = item.into();
        tracing::debug!("Adding {} '{}' ({})", item.kind(), item.title(), item.isbn());
        self.items.push(item);
    }

    /// Removes every item with the given ISBN and returns how many were dropped.
    pub fn remove_by_isbn(&mut self, isbn: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.isbn() != isbn);
        let removed = before - self.items.len();
        tracing::debug!("Removed {} item(s) with ISBN {}", removed, isbn);
        removed
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.isbn() == isbn)
    }

    pub fn find_by_publication_year(&self, year: i32) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.publication_year() == year)
            .collect()
    }

    /// Only books carry an author, so magazines never match.
    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        self.items
            .iter()
            .filter_map(CatalogItem::as_book)
            .filter(|book| book.author() == author)
            .collect()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn replace_items(&mut self, items: Vec<CatalogItem>) {
        self.items = items;
    }
}

impl FromIterator<CatalogItem> for CatalogStore {
    fn from_iter<I: IntoIterator<Item = CatalogItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Magazine, Periodicity};

    fn book(isbn: &str, year: i32, author: &str) -> Book {
        Book::new(isbn, format!("Book {}", isbn), year, author, "Fantasy", 300)
    }

    fn magazine(isbn: &str, year: i32) -> Magazine {
        Magazine::new(isbn, "J.R.R. Tolkien", year, 1, Periodicity::Weekly)
    }

    #[test]
    fn test_add_preserves_insertion_order_and_duplicates() {
        let mut store = CatalogStore::new();
        store.add(book("A1", 1954, "Tolkien"));
        store.add(magazine("B1", 2024));
        store.add(book("A1", 1955, "Tolkien"));

        let isbns: Vec<&str> = store.items().iter().map(CatalogItem::isbn).collect();
        assert_eq!(isbns, vec!["A1", "B1", "A1"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_find_by_isbn_returns_first_match() {
        let mut store = CatalogStore::new();
        store.add(book("A1", 1954, "Tolkien"));
        store.add(book("A1", 1999, "Someone Else"));

        let found = store.find_by_isbn("A1").unwrap();
        assert_eq!(found.publication_year(), 1954);
        assert!(store.find_by_isbn("a1").is_none());
    }

    #[test]
    fn test_remove_by_isbn_drops_all_matches() {
        let mut store = CatalogStore::new();
        store.add(book("A1", 1954, "Tolkien"));
        store.add(magazine("B1", 2024));
        store.add(book("A1", 1955, "Tolkien"));

        assert_eq!(store.remove_by_isbn("A1"), 2);
        assert!(store.find_by_isbn("A1").is_none());
        assert_eq!(store.len(), 1);

        // 再刪一次不會有任何變化
        assert_eq!(store.remove_by_isbn("A1"), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_isbn_is_noop() {
        let mut store = CatalogStore::new();
        store.add(book("A1", 1954, "Tolkien"));
        let before = store.clone();

        store.remove_by_isbn("Z9");
        assert_eq!(store, before);
    }

    #[test]
    fn test_find_by_author_excludes_magazines() {
        let mut store = CatalogStore::new();
        store.add(book("A1", 1954, "J.R.R. Tolkien"));
        // 雜誌標題剛好等於作者名稱
        store.add(magazine("B1", 2024));
        store.add(book("A2", 1954, "J.R.R. Tolkien"));
        store.add(book("A3", 1954, "C.S. Lewis"));

        let books = store.find_by_author("J.R.R. Tolkien");
        let isbns: Vec<&str> = books.iter().map(|b| b.isbn()).collect();
        assert_eq!(isbns, vec!["A1", "A2"]);
        assert!(store.find_by_author("j.r.r. tolkien").is_empty());
    }

    #[test]
    fn test_find_by_publication_year() {
        let mut store = CatalogStore::new();
        store.add(book("A1", 1954, "Tolkien"));
        store.add(magazine("B1", 2024));
        store.add(book("A2", 1954, "Tolkien"));

        let found: Vec<&str> = store
            .find_by_publication_year(1954)
            .into_iter()
            .map(CatalogItem::isbn)
            .collect();
        assert_eq!(found, vec!["A1", "A2"]);
        assert!(store.find_by_publication_year(1900).is_empty());
    }

    #[test]
    fn test_replace_items() {
        let mut store: CatalogStore = vec![CatalogItem::from(book("A1", 1954, "Tolkien"))]
            .into_iter()
            .collect();
        store.replace_items(vec![magazine("B1", 2024).into()]);

        assert_eq!(store.len(), 1);
        assert!(store.find_by_isbn("B1").is_some());
    }
}
