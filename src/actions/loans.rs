//! Loan actions

use super::{Action, Desk, Outcome};
use crate::{
    forms::{fields::containers, LoanForm, LoanedBookQueryForm},
    render,
    view::ViewPort,
};

pub const NO_LOANS: &str = "No books are loaned, you can loan a book.";
pub const NO_LATE_LOANS: &str = "No late books are loaned, you can loan a book.";
pub const NO_LOANED_BOOKS_FOUND: &str = "No loaned books found.";

impl<V: ViewPort> Desk<V> {
    /// Lend a book. The fields are kept so several loans can be entered quickly.
    pub async fn loan_book(&mut self) -> Outcome {
        let loan = match LoanForm::read_loan(&self.view).into_request() {
            Ok(loan) => loan,
            Err(e) => return self.reject(Action::LoanBook, e),
        };

        let result = self.api.loan_book(&loan).await;
        self.finish(Action::LoanBook, result, &[])
    }

    pub async fn return_book(&mut self) -> Outcome {
        let loan = match LoanForm::read_return(&self.view).into_request() {
            Ok(loan) => loan,
            Err(e) => return self.reject(Action::ReturnBook, e),
        };

        let result = self.api.return_book(&loan).await;
        self.finish(Action::ReturnBook, result, &[])
    }

    pub async fn display_all_loans(&mut self) -> Outcome {
        match self.api.display_all_loans().await {
            Ok(loans) => self.show_rows(containers::LOANS, NO_LOANS, &loans, |view, rows| {
                view.render_list(containers::LOANS, rows, render::loan_item)
            }),
            Err(e) => self.fail(Action::DisplayAllLoans, e),
        }
    }

    pub async fn display_late_loans(&mut self) -> Outcome {
        match self.api.late_loans().await {
            Ok(loans) => {
                self.show_rows(containers::LATE_LOANS, NO_LATE_LOANS, &loans, |view, rows| {
                    view.render_list(containers::LATE_LOANS, rows, render::late_loan_item)
                })
            }
            Err(e) => self.fail(Action::DisplayLateLoans, e),
        }
    }

    /// Loaned books matching a name; a 404 counts as no matches
    pub async fn find_loaned_books(&mut self) -> Outcome {
        let query = match LoanedBookQueryForm::read(&self.view).into_query() {
            Ok(query) => query,
            Err(e) => return self.reject(Action::FindLoanedBooks, e),
        };

        match self.api.find_loaned_books(&query).await {
            Ok(books) => self.show_rows(
                containers::LOANED_BOOKS,
                NO_LOANED_BOOKS_FOUND,
                &books,
                |view, rows| {
                    view.render_list(containers::LOANED_BOOKS, rows, render::loaned_book_item)
                },
            ),
            Err(e) if e.is_not_found() => {
                self.no_results(containers::LOANED_BOOKS, NO_LOANED_BOOKS_FOUND)
            }
            Err(e) => self.fail(Action::FindLoanedBooks, e),
        }
    }
}
