//! Customer payloads exchanged with the library service

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Customer record as listed by the service
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
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

/// Create customer request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub city: String,
    pub age: i64,
    pub email: String,
}

/// Identifies a customer by email for remove/restore
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    pub customer_email: String,
}

/// Existence check for a prospective new customer email
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerEmailCheck {
    pub new_email: String,
}

/// Update customer request
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    /// Current email of the customer being updated
    pub customer_email: String,
    pub name: String,
    pub city: String,
    pub age: Option<i64>,
    pub new_email: String,
}

impl CustomerUpdate {
    /// The existence check to run first, if a new email was supplied
    pub fn email_check(&self) -> Option<CustomerEmailCheck> {
        (!self.new_email.is_empty()).then(|| CustomerEmailCheck {
            new_email: self.new_email.clone(),
        })
    }
}
