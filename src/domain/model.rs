use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    Weekly,
    Monthly,
    Semiannual,
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Semiannual => "semiannual",
        };
        f.write_str(name)
    }
}

impl FromStr for Periodicity {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "semiannual" => Ok(Self::Semiannual),
            other => Err(LibraryError::validation(format!(
                "Unknown periodicity '{}'. Valid values: weekly, monthly, semiannual",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    isbn: String,
    title: String,
    publication_year: i32,
    author: String,
    genre: String,
    num_pages: u32,
}

impl Book {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        publication_year: i32,
        author: impl Into<String>,
        genre: impl Into<String>,
        num_pages: u32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            publication_year,
            author: author.into(),
            genre: genre.into(),
            num_pages,
        }
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn num_pages(&self) -> u32 {
        self.num_pages
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    isbn: String,
    title: String,
    publication_year: i32,
    issue_number: u32,
    periodicity: Periodicity,
}

impl Magazine {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        publication_year: i32,
        issue_number: u32,
        periodicity: Periodicity,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            publication_year,
            issue_number,
            periodicity,
        }
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn issue_number(&self) -> u32 {
        self.issue_number
    }

    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Book,
    Magazine,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book => f.write_str("Book"),
            Self::Magazine => f.write_str("Magazine"),
        }
    }
}

/// A catalog entry. The ISBN is the lookup key for both variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogItem {
    Book(Book),
    Magazine(Magazine),
}

impl CatalogItem {
    pub fn isbn(&self) -> &str {
        match self {
            Self::Book(book) => book.isbn(),
            Self::Magazine(magazine) => magazine.isbn(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Book(book) => book.title(),
            Self::Magazine(magazine) => magazine.title(),
        }
    }

    pub fn publication_year(&self) -> i32 {
        match self {
            Self::Book(book) => book.publication_year(),
            Self::Magazine(magazine) => magazine.publication_year(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Book(_) => ItemKind::Book,
            Self::Magazine(_) => ItemKind::Magazine,
        }
    }

    pub fn as_book(&self) -> Option<&Book> {
        match self {
            Self::Book(book) => Some(book),
            Self::Magazine(_) => None,
        }
    }

    pub fn as_magazine(&self) -> Option<&Magazine> {
        match self {
            Self::Magazine(magazine) => Some(magazine),
            Self::Book(_) => None,
        }
    }
}

impl From<Book> for CatalogItem {
    fn from(book: Book) -> Self {
        Self::Book(book)
    }
}

impl From<Magazine> for CatalogItem {
    fn from(magazine: Magazine) -> Self {
        Self::Magazine(magazine)
    }
}

impl Validate for CatalogItem {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("isbn", self.isbn())?;
        validate_non_empty_string("title", self.title())?;

        if let Self::Book(book) = self {
            validate_non_empty_string("author", book.author())?;
        }

        Ok(())
    }
}
