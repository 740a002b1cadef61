//! The desk: every user-triggered operation against the library service
//!
//! Each action follows the same protocol: read named fields, validate, send
//! one request (two for check-then-write updates), then either update the
//! view and show a success notice, or classify the failure and show an error.
//! Fields are cleared only after a successful mutation.
//!
//! Actions take `&mut self`, so one desk never has two actions in flight.

pub mod books;
pub mod customers;
pub mod loans;
pub mod update;

use std::fmt;
use std::str::FromStr;

use crate::{
    api::ApiClient,
    config::AppConfig,
    error::{AppError, AppResult},
    models::MessageResponse,
    session::{NoticeCategory, ShownNotices},
    view::{Notice, ViewPort},
};

use self::update::{UpdateEnd, UpdateRun};

/// Shown once per session before the slow full listings
pub const SLOW_LISTING_NOTICE: &str = "This may take a few seconds";

/// How an action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Local validation failed; nothing was sent
    Rejected,
    /// An update's new key is already taken; nothing was written
    Aborted,
    Completed,
    /// A lookup or listing came back empty
    NoResults,
    Failed,
}

/// Every operation the desk offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddCustomer,
    AddBook,
    LoanBook,
    ReturnBook,
    DisplayAllBooks,
    DisplayAllCustomers,
    DisplayAllLoans,
    DisplayLateLoans,
    FindBookByName,
    FindCustomerByName,
    RemoveBook,
    RemoveCustomer,
    RestoreBook,
    RestoreCustomer,
    UpdateBook,
    UpdateCustomer,
    FindLoanedBooks,
    CustomersWithLoanedBooks,
}

impl Action {
    pub const ALL: &'static [Action] = &[
        Action::AddCustomer,
        Action::AddBook,
        Action::LoanBook,
        Action::ReturnBook,
        Action::DisplayAllBooks,
        Action::DisplayAllCustomers,
        Action::DisplayAllLoans,
        Action::DisplayLateLoans,
        Action::FindBookByName,
        Action::FindCustomerByName,
        Action::RemoveBook,
        Action::RemoveCustomer,
        Action::RestoreBook,
        Action::RestoreCustomer,
        Action::UpdateBook,
        Action::UpdateCustomer,
        Action::FindLoanedBooks,
        Action::CustomersWithLoanedBooks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::AddCustomer => "add-customer",
            Action::AddBook => "add-book",
            Action::LoanBook => "loan-book",
            Action::ReturnBook => "return-book",
            Action::DisplayAllBooks => "display-all-books",
            Action::DisplayAllCustomers => "display-all-customers",
            Action::DisplayAllLoans => "display-all-loans",
            Action::DisplayLateLoans => "display-late-loans",
            Action::FindBookByName => "find-book-by-name",
            Action::FindCustomerByName => "find-customer-by-name",
            Action::RemoveBook => "remove-book",
            Action::RemoveCustomer => "remove-customer",
            Action::RestoreBook => "restore-book",
            Action::RestoreCustomer => "restore-customer",
            Action::UpdateBook => "update-book",
            Action::UpdateCustomer => "update-customer",
            Action::FindLoanedBooks => "find-loaned-books",
            Action::CustomersWithLoanedBooks => "customers-with-loaned-books",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    /// Accepts `add-book`, `add_book` and `addBook` alike
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = compact(s);
        Action::ALL
            .iter()
            .copied()
            .find(|a| compact(a.as_str()) == wanted)
            .ok_or_else(|| format!("Unknown action: {}", s))
    }
}

fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// One session at the desk: a service client, a view and the notices
/// already shown in this session
pub struct Desk<V: ViewPort> {
    api: ApiClient,
    view: V,
    shown: ShownNotices,
}

impl<V: ViewPort> Desk<V> {
    pub fn new(api: ApiClient, view: V) -> Self {
        Self {
            api,
            view,
            shown: ShownNotices::new(),
        }
    }

    pub fn from_config(config: &AppConfig, view: V) -> AppResult<Self> {
        let api = ApiClient::new(&config.server, &config.http)?;
        Ok(Self::new(api, view))
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Run any action by name
    pub async fn perform(&mut self, action: Action) -> Outcome {
        match action {
            Action::AddCustomer => self.add_customer().await,
            Action::AddBook => self.add_book().await,
            Action::LoanBook => self.loan_book().await,
            Action::ReturnBook => self.return_book().await,
            Action::DisplayAllBooks => self.display_all_books().await,
            Action::DisplayAllCustomers => self.display_all_customers().await,
            Action::DisplayAllLoans => self.display_all_loans().await,
            Action::DisplayLateLoans => self.display_late_loans().await,
            Action::FindBookByName => self.find_book_by_name().await,
            Action::FindCustomerByName => self.find_customer_by_name().await,
            Action::RemoveBook => self.remove_book().await,
            Action::RemoveCustomer => self.remove_customer().await,
            Action::RestoreBook => self.restore_book().await,
            Action::RestoreCustomer => self.restore_customer().await,
            Action::UpdateBook => self.update_book().await,
            Action::UpdateCustomer => self.update_customer().await,
            Action::FindLoanedBooks => self.find_loaned_books().await,
            Action::CustomersWithLoanedBooks => self.customers_with_loaned_books().await,
        }
    }

    /// Show the slow-listing notice unless this category already had it
    fn notice_once(&mut self, category: NoticeCategory) {
        if self.shown.first_time(category) {
            self.view.notify(Notice::info(SLOW_LISTING_NOTICE));
        }
    }

    /// Local validation failed: tell the user, touch nothing else
    fn reject(&mut self, action: Action, err: AppError) -> Outcome {
        tracing::debug!("{} rejected: {}", action, err);
        self.view.notify(Notice::error(err.notice_text()));
        Outcome::Rejected
    }

    fn fail(&mut self, action: Action, err: AppError) -> Outcome {
        tracing::warn!("{} failed: {}", action, err);
        self.view.notify(Notice::error(err.notice_text()));
        Outcome::Failed
    }

    /// Finish a mutating action: show the service message and clear `fields`
    fn finish(
        &mut self,
        action: Action,
        result: AppResult<MessageResponse>,
        fields: &[&str],
    ) -> Outcome {
        match result {
            Ok(response) => {
                tracing::info!("{} succeeded: {}", action, response.message);
                self.view.notify(Notice::success(response.message));
                for field in fields {
                    self.view.clear_field(field);
                }
                Outcome::Completed
            }
            Err(e) => self.fail(action, e),
        }
    }

    fn finish_update(
        &mut self,
        action: Action,
        run: UpdateRun,
        key_taken: &str,
        fields: &[&str],
    ) -> Outcome {
        tracing::debug!("{} stages: {:?}", action, run.trail);
        match run.end {
            UpdateEnd::Aborted => {
                tracing::info!("{} aborted: new key already in use", action);
                self.view.notify(Notice::error(key_taken));
                Outcome::Aborted
            }
            UpdateEnd::Done(response) => self.finish(action, Ok(response), fields),
            UpdateEnd::Failed(e) => self.fail(action, e),
        }
    }

    /// Replace `container` with rendered rows, or report that there are none
    fn show_rows<T, F>(&mut self, container: &str, empty: &str, rows: &[T], render: F) -> Outcome
    where
        F: FnOnce(&mut V, &[T]),
    {
        self.view.clear_html(container);
        if rows.is_empty() {
            return self.no_results(container, empty);
        }
        render(&mut self.view, rows);
        Outcome::Completed
    }

    fn no_results(&mut self, container: &str, text: &str) -> Outcome {
        tracing::debug!("no results for {}", container);
        self.view.clear_html(container);
        self.view.notify(Notice::info(text));
        Outcome::NoResults
    }
}
