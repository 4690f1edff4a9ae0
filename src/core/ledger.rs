use crate::adapters::clock::SystemClock;
use crate::domain::loan::Loan;
use crate::domain::ports::Clock;
use chrono::NaiveDate;

/// Append-only record of loans.
///
/// There is no way to mark a loan as returned, so every loan stays
/// active until its due date passes and overdue afterwards.
#[derive(Debug, Clone)]
pub struct LoanLedger<C: Clock = SystemClock> {
    loans: Vec<Loan>,
    clock: C,
}

impl LoanLedger<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for LoanLedger<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> LoanLedger<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            loans: Vec::new(),
            clock,
        }
    }

    /// Appends without checking whether the book is already on loan.
    pub fn add_loan(&mut self, loan: Loan) {
        tracing::debug!(
            "Recording loan of {} to member {} (due {})",
            loan.isbn(),
            loan.membership_id(),
            loan.due_date()
        );
        self.loans.push(loan);
    }

    pub fn find_by_member(&self, membership_id: &str) -> Vec<&Loan> {
        self.loans
            .iter()
            .filter(|loan| loan.membership_id() == membership_id)
            .collect()
    }

    /// Overdue loans as of the clock's current date. Re-evaluated on every call.
    pub fn find_overdue(&self) -> Vec<&Loan> {
        self.find_overdue_on(self.clock.today())
    }

    pub fn find_overdue_on(&self, date: NaiveDate) -> Vec<&Loan> {
        let overdue: Vec<&Loan> = self
            .loans
            .iter()
            .filter(|loan| loan.is_overdue_on(date))
            .collect();
        tracing::debug!("{} overdue loan(s) as of {}", overdue.len(), date);
        overdue
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}
