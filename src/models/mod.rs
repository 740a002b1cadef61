//! Data models for Library Desk

pub mod book;
pub mod customer;
pub mod loan;
pub mod response;

// Re-export commonly used types
pub use book::{Book, BookNameCheck, BookRef, BookUpdate, NewBook};
pub use customer::{Customer, CustomerEmailCheck, CustomerRef, CustomerUpdate, NewCustomer};
pub use loan::{CustomerLoan, LateLoan, Loan, LoanCustomer, LoanRequest, LoanedBook};
pub use response::{ErrorBody, ExistsResponse, MessageResponse, NameQuery};
