//! HTML fragments for every list-style response
//!
//! Each template renders one record. Server-supplied text is escaped; dates go
//! through [`format_date`].

use serde_json::Value;

use crate::{
    format::{escape_html, format_age, format_date, format_year_published},
    models::{Book, Customer, CustomerLoan, LateLoan, Loan, LoanedBook},
};

/// `<strong>Label:</strong> value` pairs joined by `,<br>`
fn labelled(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(label, value)| format!("<strong>{}:</strong> {}", label, value))
        .collect::<Vec<_>>()
        .join(",<br>")
}

/// Opaque JSON id or code as display text
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => escape_html(s),
        Value::Null => String::new(),
        other => escape_html(&other.to_string()),
    }
}

pub fn book_item(book: &Book) -> String {
    format!(
        "<li>Name: {}, Author: {}, Year Published: {}, Type: {}</li>",
        escape_html(&book.name),
        escape_html(&book.author),
        format_year_published(book.year_published),
        book.book_type
    )
}

pub fn customer_item(customer: &Customer) -> String {
    format!(
        "<li>Name: {}, City: {}, Age: {}, Email: {}</li>",
        escape_html(&customer.name),
        escape_html(&customer.city),
        format_age(customer.age),
        escape_html(&customer.email)
    )
}

pub fn loan_item(loan: &Loan) -> String {
    format!(
        "<li>{}</li>",
        labelled(&[
            ("Customer ID", value_text(&loan.cust_id)),
            ("Customer Name", escape_html(&loan.customer_name)),
            ("Book ID", value_text(&loan.book_id)),
            ("Book Name", escape_html(&loan.book_name)),
            ("Loan Date", format_date(loan.loan_date.as_deref())),
            ("Return Date", format_date(loan.return_date.as_deref())),
        ])
    )
}

pub fn late_loan_item(loan: &LateLoan) -> String {
    format!(
        "<li>{}</li>",
        labelled(&[
            ("Book ID", value_text(&loan.book_id)),
            ("Book Name", escape_html(&loan.book_name)),
            ("Book Type", value_text(&loan.book_type)),
            ("Customer ID", value_text(&loan.customer_id)),
            ("Customer Name", escape_html(&loan.customer_name)),
            ("Loan Date", format_date(loan.loan_date.as_deref())),
            ("Due Date", format_date(loan.due_date.as_deref())),
        ])
    )
}

pub fn loaned_book_item(book: &LoanedBook) -> String {
    format!(
        "<li>{}</li>",
        labelled(&[
            ("Book ID", value_text(&book.book_id)),
            ("Book Name", escape_html(&book.book_name)),
            ("Author", escape_html(&book.author)),
            ("Year Published", format_year_published(book.year_published)),
            ("Type", value_text(&book.book_type)),
            ("Loan Date", format_date(book.loan_date.as_deref())),
            ("Loaned to", escape_html(&book.customer.name)),
            ("City", escape_html(&book.customer.city)),
            ("Age", format_age(book.customer.age).to_string()),
            ("Email", escape_html(&book.customer.email)),
        ])
    )
}

/// One customer block with the single book they hold
pub fn customer_loan_block(row: &CustomerLoan) -> String {
    let customer = [
        ("Name", escape_html(&row.customer_name)),
        ("City", escape_html(&row.city)),
        ("Age", format_age(row.age).to_string()),
        ("Email", escape_html(&row.email)),
    ]
    .iter()
    .map(|(label, value)| format!("<strong>{}:</strong> {}<br>", label, value))
    .collect::<String>();

    format!(
        "<div>{}<strong>Loaned Books:</strong><br><ul><li>{}</li></ul></div>",
        customer,
        labelled(&[
            ("Book ID", value_text(&row.book_id)),
            ("Book Name", escape_html(&row.book_name)),
            ("Book Type", value_text(&row.book_type)),
            ("Loan Date", format_date(row.loan_date.as_deref())),
        ])
    )
}

/// Customer blocks separated by horizontal rules
pub fn customer_loans(rows: &[CustomerLoan]) -> String {
    rows.iter()
        .map(customer_loan_block)
        .collect::<Vec<_>>()
        .join("<hr>")
}
