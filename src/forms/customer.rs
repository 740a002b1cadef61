//! Customer forms

use validator::Validate;

use super::{
    check, fields, parse_int, read_int, read_text, whole_number, EMAIL_PATTERN, FILL_ALL_FIELDS,
    OPTIONAL_EMAIL_PATTERN,
};
use crate::{
    error::{AppError, AppResult},
    models::{CustomerRef, CustomerUpdate, NameQuery, NewCustomer},
    view::ViewPort,
};

/// Add customer form
#[derive(Debug, Clone, Validate)]
pub struct AddCustomerForm {
    #[validate(length(min = 1, message = "Please ensure all fields are filled out correctly."))]
    pub name: String,
    #[validate(length(min = 1, message = "Please ensure all fields are filled out correctly."))]
    pub city: String,
    #[validate(
        required(message = "Please ensure all fields are filled out correctly."),
        range(min = 0, max = 999, message = "Age can only contain up to 3 numbers.")
    )]
    pub age: Option<i64>,
    #[validate(
        length(min = 1, message = "Please ensure all fields are filled out correctly."),
        regex(path = *EMAIL_PATTERN, message = "Email must be valid.")
    )]
    pub email: String,
}

impl AddCustomerForm {
    pub fn read<V: ViewPort>(view: &V) -> Self {
        Self {
            name: read_text(view, fields::CUSTOMER_NAME),
            city: read_text(view, fields::CUSTOMER_CITY),
            age: read_int(view, fields::CUSTOMER_AGE),
            email: read_text(view, fields::CUSTOMER_EMAIL),
        }
    }

    /// Fields cleared after the customer was created
    pub const FIELDS: &'static [&'static str] = &[
        fields::CUSTOMER_NAME,
        fields::CUSTOMER_CITY,
        fields::CUSTOMER_AGE,
        fields::CUSTOMER_EMAIL,
    ];

    pub fn into_request(self) -> AppResult<NewCustomer> {
        check(&self, &["name", "city", "age", "email"])?;
        let age = self
            .age
            .ok_or_else(|| AppError::Validation(FILL_ALL_FIELDS.to_string()))?;
        Ok(NewCustomer {
            name: self.name,
            city: self.city,
            age,
            email: self.email,
        })
    }
}

/// A customer name lookup
#[derive(Debug, Clone, Validate)]
pub struct CustomerNameForm {
    #[validate(length(min = 1, message = "Customer name is required."))]
    pub name: String,
}

impl CustomerNameForm {
    pub fn read<V: ViewPort>(view: &V) -> Self {
        Self {
            name: read_text(view, fields::FIND_CUSTOMER_NAME),
        }
    }

    pub fn into_query(self) -> AppResult<NameQuery> {
        check(&self, &["name"])?;
        Ok(NameQuery { name: self.name })
    }
}

/// A single customer email, as used by remove and restore
#[derive(Debug, Clone, Validate)]
pub struct CustomerEmailForm {
    #[validate(length(min = 1, message = "Customer email is required."))]
    pub email: String,
}

impl CustomerEmailForm {
    pub fn read<V: ViewPort>(view: &V, field: &str) -> Self {
        Self {
            email: read_text(view, field),
        }
    }

    pub fn into_ref(self) -> AppResult<CustomerRef> {
        check(&self, &["email"])?;
        Ok(CustomerRef {
            customer_email: self.email,
        })
    }
}

/// Update customer form. Only the current email is required; a new email,
/// when given, must have the usual shape.
#[derive(Debug, Clone, Validate)]
pub struct UpdateCustomerForm {
    #[validate(length(min = 1, message = "Customer email is required."))]
    pub customer_email: String,
    pub name: String,
    pub city: String,
    /// Blank is sent as `null`; anything else must be an integer
    #[validate(custom(function = "whole_number", message = "Age can only contain up to 3 numbers."))]
    pub age: String,
    #[validate(range(min = 0, max = 999, message = "Age can only contain up to 3 numbers."))]
    age_value: Option<i64>,
    #[validate(regex(path = *OPTIONAL_EMAIL_PATTERN, message = "Email must be valid."))]
    pub new_email: String,
}

impl UpdateCustomerForm {
    pub fn read<V: ViewPort>(view: &V) -> Self {
        let age = read_text(view, fields::UPDATE_CUSTOMER_AGE);
        Self {
            customer_email: read_text(view, fields::UPDATE_CUSTOMER_EMAIL),
            name: read_text(view, fields::UPDATE_CUSTOMER_NAME),
            city: read_text(view, fields::UPDATE_CUSTOMER_CITY),
            age_value: parse_int(&age),
            age,
            new_email: read_text(view, fields::UPDATE_CUSTOMER_NEW_EMAIL),
        }
    }

    pub const FIELDS: &'static [&'static str] = &[
        fields::UPDATE_CUSTOMER_EMAIL,
        fields::UPDATE_CUSTOMER_NAME,
        fields::UPDATE_CUSTOMER_CITY,
        fields::UPDATE_CUSTOMER_AGE,
        fields::UPDATE_CUSTOMER_NEW_EMAIL,
    ];

    pub fn into_request(self) -> AppResult<CustomerUpdate> {
        check(&self, &["customer_email", "age", "age_value", "new_email"])?;
        Ok(CustomerUpdate {
            customer_email: self.customer_email,
            name: self.name,
            city: self.city,
            age: self.age_value,
            new_email: self.new_email,
        })
    }
}
