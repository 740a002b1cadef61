//! Reading and validating the desk's input fields
//!
//! Each form reads a fixed set of named fields from a [`ViewPort`], trims
//! text, parses integers in radix 10 and validates the result before it is
//! turned into a request payload. Validation is best effort; the service
//! re-validates everything.

pub mod book;
pub mod customer;
pub mod fields;
pub mod loan;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    error::{AppError, AppResult},
    view::ViewPort,
};

pub use book::{AddBookForm, BookNameForm, UpdateBookForm};
pub use customer::{AddCustomerForm, CustomerEmailForm, CustomerNameForm, UpdateCustomerForm};
pub use loan::{BorrowerQueryForm, LoanForm, LoanedBookQueryForm};

/// `local@domain.tld`, nothing more
pub static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Same shape, but an empty value is accepted
pub static OPTIONAL_EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^$|^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub const FILL_ALL_FIELDS: &str = "Please ensure all fields are filled out correctly.";

/// Validator codes that mean "missing" rather than "malformed"
const PRESENCE_CODES: &[&str] = &["length", "required"];

/// Trimmed text value of a field
pub(crate) fn read_text<V: ViewPort>(view: &V, id: &str) -> String {
    view.read_field(id).trim().to_string()
}

/// Integer value of a field; `None` when blank or not an integer
pub(crate) fn read_int<V: ViewPort>(view: &V, id: &str) -> Option<i64> {
    parse_int(&view.read_field(id))
}

pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Optional integer input: blank, or an integer in radix 10
pub(crate) fn whole_number(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() || parse_int(raw).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("whole_number"))
    }
}

/// Validate a form, reporting the most important problem first.
///
/// `order` lists the form's fields in display order. Missing values outrank
/// range and shape problems, whatever field they are on.
pub(crate) fn check<F: Validate>(form: &F, order: &[&str]) -> AppResult<()> {
    form.validate()
        .map_err(|errors| AppError::Validation(first_problem(&errors, order)))
}

fn first_problem(errors: &ValidationErrors, order: &[&str]) -> String {
    let field_errors = errors.field_errors();
    let ordered: Vec<_> = order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .collect();

    ordered
        .iter()
        .find(|e| PRESENCE_CODES.iter().any(|code| *code == e.code))
        .or_else(|| ordered.first())
        .and_then(|e| e.message.as_ref())
        .map(|m| m.to_string())
        .unwrap_or_else(|| FILL_ALL_FIELDS.to_string())
}
