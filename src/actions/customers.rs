//! Customer actions

use super::{update, Action, Desk, Outcome};
use crate::{
    forms::{
        fields::{self, containers},
        AddCustomerForm, BorrowerQueryForm, CustomerEmailForm, CustomerNameForm,
        UpdateCustomerForm,
    },
    render,
    session::NoticeCategory,
    view::{Notice, ViewPort},
};

pub const FETCH_CUSTOMERS_FAILED: &str = "Error fetching customers.";
pub const NO_CUSTOMERS_FOUND: &str = "No customers found.";
pub const NO_BORROWERS_FOUND: &str = "No customers with loaned books found.";
pub const EMAIL_TAKEN: &str = "Email already exists.";

impl<V: ViewPort> Desk<V> {
    /// Create a customer from the add-customer fields
    pub async fn add_customer(&mut self) -> Outcome {
        let customer = match AddCustomerForm::read(&self.view).into_request() {
            Ok(customer) => customer,
            Err(e) => return self.reject(Action::AddCustomer, e),
        };

        let result = self.api.add_customer(&customer).await;
        self.finish(Action::AddCustomer, result, AddCustomerForm::FIELDS)
    }

    /// List every customer. Any failure shows one fixed message.
    pub async fn display_all_customers(&mut self) -> Outcome {
        self.notice_once(NoticeCategory::Customers);

        match self.api.display_all_customers().await {
            Ok(customers) => {
                tracing::info!("Listed {} customers", customers.len());
                self.view
                    .render_list(containers::CUSTOMERS, &customers, render::customer_item);
                Outcome::Completed
            }
            Err(e) => {
                tracing::warn!("{} failed: {}", Action::DisplayAllCustomers, e);
                self.view.notify(Notice::error(FETCH_CUSTOMERS_FAILED));
                Outcome::Failed
            }
        }
    }

    pub async fn find_customer_by_name(&mut self) -> Outcome {
        let query = match CustomerNameForm::read(&self.view).into_query() {
            Ok(query) => query,
            Err(e) => return self.reject(Action::FindCustomerByName, e),
        };

        match self.api.find_customer_by_name(&query).await {
            Ok(customers) => self.show_rows(
                containers::FOUND_CUSTOMERS,
                NO_CUSTOMERS_FOUND,
                &customers,
                |view, rows| {
                    view.render_list(containers::FOUND_CUSTOMERS, rows, render::customer_item)
                },
            ),
            Err(e) if e.is_not_found() => {
                self.no_results(containers::FOUND_CUSTOMERS, NO_CUSTOMERS_FOUND)
            }
            Err(e) => self.fail(Action::FindCustomerByName, e),
        }
    }

    pub async fn remove_customer(&mut self) -> Outcome {
        let customer =
            match CustomerEmailForm::read(&self.view, fields::REMOVE_CUSTOMER_EMAIL).into_ref() {
                Ok(customer) => customer,
                Err(e) => return self.reject(Action::RemoveCustomer, e),
            };

        let result = self.api.remove_customer(&customer).await;
        self.finish(Action::RemoveCustomer, result, &[fields::REMOVE_CUSTOMER_EMAIL])
    }

    pub async fn restore_customer(&mut self) -> Outcome {
        let customer =
            match CustomerEmailForm::read(&self.view, fields::RESTORE_CUSTOMER_EMAIL).into_ref() {
                Ok(customer) => customer,
                Err(e) => return self.reject(Action::RestoreCustomer, e),
            };

        let result = self.api.restore_customer(&customer).await;
        self.finish(Action::RestoreCustomer, result, &[fields::RESTORE_CUSTOMER_EMAIL])
    }

    /// Update a customer, checking first that a new email is not already taken
    pub async fn update_customer(&mut self) -> Outcome {
        let customer = match UpdateCustomerForm::read(&self.view).into_request() {
            Ok(customer) => customer,
            Err(e) => return self.reject(Action::UpdateCustomer, e),
        };

        let check = customer.email_check();
        let run = update::run(
            check.as_ref().map(|c| self.api.check_customer_exists(c)),
            || self.api.update_customer(&customer),
        )
        .await;

        self.finish_update(Action::UpdateCustomer, run, EMAIL_TAKEN, UpdateCustomerForm::FIELDS)
    }

    /// Customers matching a name, each with the book they currently hold.
    /// Clears the query field once results are shown.
    pub async fn customers_with_loaned_books(&mut self) -> Outcome {
        let query = match BorrowerQueryForm::read(&self.view).into_query() {
            Ok(query) => query,
            Err(e) => return self.reject(Action::CustomersWithLoanedBooks, e),
        };

        let container = containers::CUSTOMERS_WITH_LOANED_BOOKS;
        match self.api.customers_with_loaned_books(&query).await {
            Ok(rows) => {
                let outcome = self.show_rows(container, NO_BORROWERS_FOUND, &rows, |view, rows| {
                    view.set_html(container, &render::customer_loans(rows))
                });
                if outcome == Outcome::Completed {
                    self.view.clear_field(fields::BORROWER_NAME);
                }
                outcome
            }
            Err(e) if e.is_not_found() => self.no_results(container, NO_BORROWERS_FOUND),
            Err(e) => self.fail(Action::CustomersWithLoanedBooks, e),
        }
    }
}
