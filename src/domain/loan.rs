use crate::domain::model::Book;
use chrono::{Days, NaiveDate};

/// Length of every loan, counted from its start date.
pub const LOAN_PERIOD_DAYS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub membership_id: String,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
        membership_id: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            membership_id: membership_id.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanStatus {
    Active,
    Overdue,
    Returned,
}

/// A book lent to a member.
///
/// The member and the book are referenced by key (membership id and ISBN)
/// so a loan stays valid after either is dropped from its collection.
/// The due date is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    membership_id: String,
    isbn: String,
    start_date: NaiveDate,
    due_date: NaiveDate,
    return_date: Option<NaiveDate>,
}

impl Loan {
    pub fn new(user: &User, book: &Book, start_date: NaiveDate) -> Self {
        // 超出日期範圍時停在 NaiveDate::MAX
        let due_date = start_date
            .checked_add_days(Days::new(LOAN_PERIOD_DAYS))
            .unwrap_or(NaiveDate::MAX);

        Self {
            membership_id: user.membership_id.clone(),
            isbn: book.isbn().to_string(),
            start_date,
            due_date,
            return_date: None,
        }
    }

    pub fn membership_id(&self) -> &str {
        &self.membership_id
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn return_date(&self) -> Option<NaiveDate> {
        self.return_date
    }

    pub fn is_overdue_on(&self, date: NaiveDate) -> bool {
        self.return_date.is_none() && date > self.due_date
    }

    pub fn status_on(&self, date: NaiveDate) -> LoanStatus {
        match self.return_date {
            Some(_) => LoanStatus::Returned,
            None if date > self.due_date => LoanStatus::Overdue,
            None => LoanStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_loan(start: NaiveDate) -> Loan {
        let user = User::new("Mario", "Rossi", date(1990, 5, 17), "M-001");
        let book = Book::new("A1", "The Hobbit", 1937, "J.R.R. Tolkien", "Fantasy", 310);
        Loan::new(&user, &book, start)
    }

    #[test]
    fn test_due_date_is_thirty_days_after_start() {
        let loan = sample_loan(date(2024, 4, 1));
        assert_eq!(loan.due_date(), date(2024, 5, 1));

        // 跨年與閏年
        assert_eq!(sample_loan(date(2023, 12, 15)).due_date(), date(2024, 1, 14));
        assert_eq!(sample_loan(date(2024, 2, 1)).due_date(), date(2024, 3, 2));
    }

    #[test]
    fn test_loan_keeps_keys_by_value() {
        let loan = sample_loan(date(2024, 4, 1));
        assert_eq!(loan.membership_id(), "M-001");
        assert_eq!(loan.isbn(), "A1");
        assert_eq!(loan.return_date(), None);
    }

    #[test]
    fn test_status_is_derived_from_date() {
        let loan = sample_loan(date(2024, 4, 1));

        assert_eq!(loan.status_on(date(2024, 4, 15)), LoanStatus::Active);
        assert_eq!(loan.status_on(date(2024, 5, 1)), LoanStatus::Active);
        assert_eq!(loan.status_on(date(2024, 5, 2)), LoanStatus::Overdue);
        assert!(!loan.is_overdue_on(date(2024, 5, 1)));
        assert!(loan.is_overdue_on(date(2024, 5, 2)));
    }

    #[test]
    fn test_due_date_saturates_at_max_date() {
        let loan = sample_loan(NaiveDate::MAX);
        assert_eq!(loan.due_date(), NaiveDate::MAX);
    }
}
