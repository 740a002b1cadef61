//! Loan endpoints

use super::{endpoints, ApiClient};
use crate::{
    error::AppResult,
    models::{LateLoan, Loan, LoanRequest, LoanedBook, MessageResponse, NameQuery},
};

impl ApiClient {
    /// Lend a book to a customer
    pub async fn loan_book(&self, loan: &LoanRequest) -> AppResult<MessageResponse> {
        self.post(endpoints::LOAN_BOOK, loan).await
    }

    /// Record a book coming back
    pub async fn return_book(&self, loan: &LoanRequest) -> AppResult<MessageResponse> {
        self.post(endpoints::RETURN_BOOK, loan).await
    }

    pub async fn display_all_loans(&self) -> AppResult<Vec<Loan>> {
        self.get(endpoints::DISPLAY_ALL_LOANS).await
    }

    /// Loans past their due date
    pub async fn late_loans(&self) -> AppResult<Vec<LateLoan>> {
        self.get(endpoints::LATE_LOANS).await
    }

    /// Loaned books whose name matches the query
    pub async fn find_loaned_books(&self, query: &NameQuery) -> AppResult<Vec<LoanedBook>> {
        self.get_with_query(endpoints::FIND_LOANED_BOOKS, query).await
    }
}
