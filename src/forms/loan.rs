//! Loan forms

use validator::Validate;

use super::{check, fields, read_text};
use crate::{
    error::AppResult,
    models::{LoanRequest, NameQuery},
    view::ViewPort,
};

/// Book name + customer email, for lending and returning
#[derive(Debug, Clone, Validate)]
pub struct LoanForm {
    #[validate(length(min = 1, message = "Both Book Name and Customer Email are required."))]
    pub book_name: String,
    #[validate(length(min = 1, message = "Both Book Name and Customer Email are required."))]
    pub customer_email: String,
}

impl LoanForm {
    pub fn read_loan<V: ViewPort>(view: &V) -> Self {
        Self {
            book_name: read_text(view, fields::LOAN_BOOK_NAME),
            customer_email: read_text(view, fields::LOAN_CUSTOMER_EMAIL),
        }
    }

    pub fn read_return<V: ViewPort>(view: &V) -> Self {
        Self {
            book_name: read_text(view, fields::RETURN_BOOK_NAME),
            customer_email: read_text(view, fields::RETURN_CUSTOMER_EMAIL),
        }
    }

    pub fn into_request(self) -> AppResult<LoanRequest> {
        check(&self, &["book_name", "customer_email"])?;
        Ok(LoanRequest {
            book_name: self.book_name,
            customer_email: self.customer_email,
        })
    }
}

/// Book name to look up among current loans
#[derive(Debug, Clone, Validate)]
pub struct LoanedBookQueryForm {
    #[validate(length(min = 1, message = "Please provide a book name."))]
    pub name: String,
}

impl LoanedBookQueryForm {
    pub fn read<V: ViewPort>(view: &V) -> Self {
        Self {
            name: read_text(view, fields::LOANED_BOOK_NAME),
        }
    }

    pub fn into_query(self) -> AppResult<NameQuery> {
        check(&self, &["name"])?;
        Ok(NameQuery { name: self.name })
    }
}

/// Customer name to look up among borrowers
#[derive(Debug, Clone, Validate)]
pub struct BorrowerQueryForm {
    #[validate(length(min = 1, message = "Please provide a customer name."))]
    pub name: String,
}

impl BorrowerQueryForm {
    pub fn read<V: ViewPort>(view: &V) -> Self {
        Self {
            name: read_text(view, fields::BORROWER_NAME),
        }
    }

    pub fn into_query(self) -> AppResult<NameQuery> {
        check(&self, &["name"])?;
        Ok(NameQuery { name: self.name })
    }
}
