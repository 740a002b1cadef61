//! Loan actions, lookups and transport failures

use axum::http::Method;
use serde_json::json;

use library_desk::{
    actions::loans::{NO_LATE_LOANS, NO_LOANED_BOOKS_FOUND, NO_LOANS},
    error::NO_RESPONSE_MESSAGE,
    forms::fields::{self, containers},
    MemoryView, NoticeKind, Outcome, ViewPort,
};

use crate::support::{desk, notices, unreachable_base_url, Stub};

fn loan_form() -> MemoryView {
    MemoryView::new()
        .with_field(fields::LOAN_BOOK_NAME, "Dune")
        .with_field(fields::LOAN_CUSTOMER_EMAIL, "ada@x.io")
}

#[tokio::test]
async fn test_loan_book_keeps_fields() {
    let stub = Stub::new().respond(Method::POST, "loan_book", 200, json!({ "message": "Book loaned" }));
    let base_url = stub.start().await;
    let mut desk = desk(&base_url, loan_form());

    assert_eq!(desk.loan_book().await, Outcome::Completed);

    let requests = stub.requests();
    assert_eq!(
        requests[0].body,
        json!({ "bookName": "Dune", "customerEmail": "ada@x.io" })
    );
    assert_eq!(notices(&desk, NoticeKind::Success), vec!["Book loaned"]);
    assert_eq!(desk.view().read_field(fields::LOAN_BOOK_NAME), "Dune");
}

#[tokio::test]
async fn test_return_book_requires_both_fields() {
    let stub = Stub::new();
    let base_url = stub.start().await;
    let view = MemoryView::new().with_field(fields::RETURN_BOOK_NAME, "Dune");
    let mut desk = desk(&base_url, view);

    assert_eq!(desk.return_book().await, Outcome::Rejected);
    assert!(stub.requests().is_empty());
    assert_eq!(
        notices(&desk, NoticeKind::Error),
        vec!["Both Book Name and Customer Email are required."]
    );
}

#[tokio::test]
async fn test_return_book_error_without_message() {
    let stub = Stub::new().respond(Method::POST, "return_book", 400, json!({ "detail": "nope" }));
    let base_url = stub.start().await;
    let view = MemoryView::new()
        .with_field(fields::RETURN_BOOK_NAME, "Dune")
        .with_field(fields::RETURN_CUSTOMER_EMAIL, "ada@x.io");
    let mut desk = desk(&base_url, view);

    assert_eq!(desk.return_book().await, Outcome::Failed);
    assert_eq!(notices(&desk, NoticeKind::Error), vec!["An error occurred."]);
}

#[tokio::test]
async fn test_display_all_loans() {
    let stub = Stub::new().respond(
        Method::GET,
        "display_all_loans",
        200,
        json!([{
            "custId": 7,
            "customerName": "Ada",
            "bookId": 3,
            "bookName": "Dune",
            "loanDate": "2024-01-05T15:04:05",
            "returnDate": null
        }]),
    );
    let base_url = stub.start().await;
    let mut desk = desk(&base_url, MemoryView::new());

    assert_eq!(desk.display_all_loans().await, Outcome::Completed);

    let html = desk.view().html(containers::LOANS).unwrap_or_default();
    assert!(html.starts_with("<ul><li><strong>Customer ID:</strong> 7,<br>"));
    assert!(html.ends_with("<strong>Return Date:</strong> Not returned yet</li></ul>"));
    // no slow-listing notice for loans
    assert!(desk.view().notices().is_empty());
}

#[tokio::test]
async fn test_empty_loan_listings() {
    let stub = Stub::new()
        .respond(Method::GET, "display_all_loans", 200, json!([]))
        .respond(Method::GET, "late_loans", 200, json!([]));
    let base_url = stub.start().await;
    let view = MemoryView::new();
    let mut desk = desk(&base_url, view);
    desk.view_mut().set_html(containers::LOANS, "<ul><li>stale</li></ul>");

    assert_eq!(desk.display_all_loans().await, Outcome::NoResults);
    assert_eq!(desk.display_late_loans().await, Outcome::NoResults);

    assert_eq!(desk.view().html(containers::LOANS), Some(""));
    assert_eq!(desk.view().html(containers::LATE_LOANS), Some(""));
    assert_eq!(notices(&desk, NoticeKind::Info), vec![NO_LOANS, NO_LATE_LOANS]);
}

#[tokio::test]
async fn test_late_loans_render_due_date() {
    let stub = Stub::new().respond(
        Method::GET,
        "late_loans",
        200,
        json!([{
            "book_id": 3,
            "book_name": "Dune",
            "book_type": 2,
            "customer_id": 7,
            "customer_name": "Ada",
            "loan_date": "2024-01-01T10:00:00",
            "due_date": "2024-01-03T10:00:00"
        }]),
    );
    let base_url = stub.start().await;
    let mut desk = desk(&base_url, MemoryView::new());

    assert_eq!(desk.display_late_loans().await, Outcome::Completed);
    let html = desk.view().html(containers::LATE_LOANS).unwrap_or_default();
    assert!(html.contains("<strong>Due Date:</strong> January 3, 2024, 10:00:00 AM</li>"));
}

#[tokio::test]
async fn test_find_loaned_books_query_and_empty_answers() {
    let stub = Stub::new().respond(Method::GET, "find_loaned_books", 200, json!([]));
    let base_url = stub.start().await;
    let view = MemoryView::new().with_field(fields::LOANED_BOOK_NAME, "Dune");
    let mut desk = desk(&base_url, view);

    assert_eq!(desk.find_loaned_books().await, Outcome::NoResults);

    let requests = stub.requests();
    assert_eq!(requests[0].path, "/find_loaned_books");
    assert_eq!(requests[0].query.as_deref(), Some("name=Dune"));
    assert_eq!(desk.view().html(containers::LOANED_BOOKS), Some(""));
    assert_eq!(notices(&desk, NoticeKind::Info), vec![NO_LOANED_BOOKS_FOUND]);
}

#[tokio::test]
async fn test_find_loaned_books_not_found_is_empty_result() {
    let stub = Stub::new();
    let base_url = stub.start().await;
    let view = MemoryView::new().with_field(fields::LOANED_BOOK_NAME, "Solaris");
    let mut desk = desk(&base_url, view);

    assert_eq!(desk.find_loaned_books().await, Outcome::NoResults);
    assert_eq!(notices(&desk, NoticeKind::Info), vec![NO_LOANED_BOOKS_FOUND]);
    assert!(notices(&desk, NoticeKind::Error).is_empty());
}

#[tokio::test]
async fn test_find_loaned_books_requires_name() {
    let stub = Stub::new();
    let base_url = stub.start().await;
    let mut desk = desk(&base_url, MemoryView::new());

    assert_eq!(desk.find_loaned_books().await, Outcome::Rejected);
    assert!(stub.requests().is_empty());
    assert_eq!(notices(&desk, NoticeKind::Error), vec!["Please provide a book name."]);
}

#[tokio::test]
async fn test_unreachable_service() {
    let base_url = unreachable_base_url().await;
    let mut desk = desk(&base_url, loan_form());

    assert_eq!(desk.loan_book().await, Outcome::Failed);
    assert_eq!(notices(&desk, NoticeKind::Error), vec![NO_RESPONSE_MESSAGE]);
    assert_eq!(desk.view().read_field(fields::LOAN_BOOK_NAME), "Dune");
}

#[tokio::test]
async fn test_malformed_success_body() {
    let stub = Stub::new().respond(Method::GET, "display_all_loans", 200, json!({ "loans": [] }));
    let base_url = stub.start().await;
    let mut desk = desk(&base_url, MemoryView::new());

    assert_eq!(desk.display_all_loans().await, Outcome::Failed);
    let errors = notices(&desk, NoticeKind::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Error: "));
}

#[tokio::test]
async fn test_loan_listing_survives_null_names() {
    let stub = Stub::new().respond(
        Method::GET,
        "display_all_loans",
        200,
        json!([
            { "custId": 7, "customerName": null, "bookId": 3, "bookName": "Dune", "loanDate": null },
            { "custId": 8, "customerName": "Ada", "bookId": 4, "bookName": "Emma", "loanDate": null }
        ]),
    );
    let base_url = stub.start().await;
    let mut desk = desk(&base_url, MemoryView::new());

    assert_eq!(desk.display_all_loans().await, Outcome::Completed);

    let html = desk.view().html(containers::LOANS).unwrap_or_default();
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(html.contains("<strong>Customer Name:</strong> ,<br>"));
    assert!(html.contains("<strong>Customer Name:</strong> Ada,<br>"));
}
