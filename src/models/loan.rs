//! Loan payloads and the read-only loan views returned by the service

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull};

/// Loan or return request
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub book_name: String,
    pub customer_email: String,
}

/// Loan as listed by `display_all_loans`.
///
/// Ids are whatever the service sends (number or string) and are shown as-is.
/// Dates stay raw strings until rendered.
#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub cust_id: Value,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub customer_name: String,
    pub book_id: Value,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub book_name: String,
    pub loan_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
}

/// Overdue loan as listed by `late_loans`
#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LateLoan {
    pub book_id: Value,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub book_name: String,
    pub book_type: Value,
    pub customer_id: Value,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub customer_name: String,
    pub loan_date: Option<String>,
    pub due_date: Option<String>,
}

/// Borrower details nested in a [`LoanedBook`]
#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoanCustomer {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub city: String,
    pub age: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub email: String,
}

/// A currently loaned book matching a name query
#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoanedBook {
    pub book_id: Value,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub book_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub author: String,
    pub year_published: i64,
    #[serde(rename = "type")]
    pub book_type: Value,
    pub loan_date: Option<String>,
    pub customer: LoanCustomer,
}

/// One (customer, loaned book) row matching a customer name query
#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CustomerLoan {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub customer_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub city: String,
    pub age: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub email: String,
    pub book_id: Value,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub book_name: String,
    pub book_type: Value,
    pub loan_date: Option<String>,
}
