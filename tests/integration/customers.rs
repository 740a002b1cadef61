//! Customer actions against the stub service

use axum::http::Method;
use serde_json::json;

use library_desk::{
    actions::{
        customers::{EMAIL_TAKEN, FETCH_CUSTOMERS_FAILED, NO_BORROWERS_FOUND},
        SLOW_LISTING_NOTICE,
    },
    forms::fields::{self, containers},
    MemoryView, NoticeKind, Outcome, ViewPort,
};

use crate::support::{desk, notices, Stub};

fn ada_form(age: &str) -> MemoryView {
    MemoryView::new()
        .with_field(fields::CUSTOMER_NAME, "Ada")
        .with_field(fields::CUSTOMER_CITY, "London")
        .with_field(fields::CUSTOMER_AGE, age)
        .with_field(fields::CUSTOMER_EMAIL, "ada@x.io")
}

#[tokio::test]
async fn test_add_customer() {
    let stub = Stub::new().respond(
        Method::POST,
        "add_customer",
        201,
        json!({ "message": "Customer added" }),
    );
    let base_url = stub.start().await;
    let mut desk = desk(&base_url, ada_form("36"));

    assert_eq!(desk.add_customer().await, Outcome::Completed);

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/add_customer");
    assert_eq!(
        requests[0].body,
        json!({ "name": "Ada", "city": "London", "age": 36, "email": "ada@x.io" })
    );
    assert_eq!(notices(&desk, NoticeKind::Success), vec!["Customer added"]);
    for field in [
        fields::CUSTOMER_NAME,
        fields::CUSTOMER_CITY,
        fields::CUSTOMER_AGE,
        fields::CUSTOMER_EMAIL,
    ] {
        assert_eq!(desk.view().read_field(field), "");
    }
}

#[tokio::test]
async fn test_add_customer_rejects_bad_age_and_email() {
    let stub = Stub::new();
    let base_url = stub.start().await;

    let mut desk = desk(&base_url, ada_form("1000"));
    assert_eq!(desk.add_customer().await, Outcome::Rejected);
    assert_eq!(
        notices(&desk, NoticeKind::Error),
        vec!["Age can only contain up to 3 numbers."]
    );

    let view = ada_form("36").with_field(fields::CUSTOMER_EMAIL, "ada@x");
    let mut desk = crate::support::desk(&base_url, view);
    assert_eq!(desk.add_customer().await, Outcome::Rejected);
    assert_eq!(notices(&desk, NoticeKind::Error), vec!["Email must be valid."]);

    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_display_all_customers_failure_uses_fixed_message() {
    let stub = Stub::new().respond(
        Method::GET,
        "display_all_customers",
        500,
        json!({ "message": "database down" }),
    );
    let base_url = stub.start().await;
    let mut desk = desk(&base_url, MemoryView::new());

    assert_eq!(desk.display_all_customers().await, Outcome::Failed);
    assert_eq!(notices(&desk, NoticeKind::Error), vec![FETCH_CUSTOMERS_FAILED]);
    assert_eq!(notices(&desk, NoticeKind::Info), vec![SLOW_LISTING_NOTICE]);
}

#[tokio::test]
async fn test_display_all_customers_clamps_age() {
    let stub = Stub::new().respond(
        Method::GET,
        "display_all_customers",
        200,
        json!([{ "name": "Old", "city": "Rome", "age": 2024, "email": "o@r.it" }]),
    );
    let base_url = stub.start().await;
    let mut desk = desk(&base_url, MemoryView::new());

    assert_eq!(desk.display_all_customers().await, Outcome::Completed);
    assert_eq!(
        desk.view().html(containers::CUSTOMERS),
        Some("<ul><li>Name: Old, City: Rome, Age: 999, Email: o@r.it</li></ul>")
    );
}

fn email_change_form() -> MemoryView {
    MemoryView::new()
        .with_field(fields::UPDATE_CUSTOMER_EMAIL, "ada@x.io")
        .with_field(fields::UPDATE_CUSTOMER_CITY, "Paris")
        .with_field(fields::UPDATE_CUSTOMER_NEW_EMAIL, "ada@y.io")
}

#[tokio::test]
async fn test_update_customer_aborts_when_email_is_taken() {
    let stub = Stub::new()
        .respond(Method::POST, "check_customer_exists", 200, json!({ "exists": true }))
        .respond(Method::PUT, "update_customer", 200, json!({ "message": "Customer updated" }));
    let base_url = stub.start().await;
    let mut desk = desk(&base_url, email_change_form());

    assert_eq!(desk.update_customer().await, Outcome::Aborted);

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, json!({ "newEmail": "ada@y.io" }));
    assert_eq!(notices(&desk, NoticeKind::Error), vec![EMAIL_TAKEN]);
    assert_eq!(desk.view().read_field(fields::UPDATE_CUSTOMER_CITY), "Paris");
}

#[tokio::test]
async fn test_update_customer_writes_when_email_is_free() {
    let stub = Stub::new()
        .respond(Method::POST, "check_customer_exists", 200, json!({ "exists": false }))
        .respond(Method::PUT, "update_customer", 200, json!({ "message": "Customer updated" }));
    let base_url = stub.start().await;
    let mut desk = desk(&base_url, email_change_form());

    assert_eq!(desk.update_customer().await, Outcome::Completed);

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, Method::PUT);
    assert_eq!(
        requests[1].body,
        json!({
            "customerEmail": "ada@x.io",
            "name": "",
            "city": "Paris",
            "age": null,
            "newEmail": "ada@y.io"
        })
    );
    assert_eq!(desk.view().read_field(fields::UPDATE_CUSTOMER_NEW_EMAIL), "");
}

#[tokio::test]
async fn test_update_customer_check_failure_never_writes() {
    let stub = Stub::new()
        .respond(Method::POST, "check_customer_exists", 503, json!({}))
        .respond(Method::PUT, "update_customer", 200, json!({ "message": "Customer updated" }));
    let base_url = stub.start().await;
    let mut desk = desk(&base_url, email_change_form());

    assert_eq!(desk.update_customer().await, Outcome::Failed);
    assert_eq!(stub.requests().len(), 1);
    assert_eq!(notices(&desk, NoticeKind::Error), vec!["An error occurred."]);
}

#[tokio::test]
async fn test_remove_and_restore_customer() {
    let stub = Stub::new()
        .respond(Method::DELETE, "remove_customer", 200, json!({ "message": "Customer removed" }))
        .respond(Method::POST, "restore_customer", 200, json!({ "message": "Customer restored" }));
    let base_url = stub.start().await;
    let view = MemoryView::new()
        .with_field(fields::REMOVE_CUSTOMER_EMAIL, "ada@x.io")
        .with_field(fields::RESTORE_CUSTOMER_EMAIL, "ada@x.io");
    let mut desk = desk(&base_url, view);

    assert_eq!(desk.remove_customer().await, Outcome::Completed);
    assert_eq!(desk.restore_customer().await, Outcome::Completed);

    let requests = stub.requests();
    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(requests[0].body, json!({ "customerEmail": "ada@x.io" }));
    assert_eq!(requests[1].method, Method::POST);
    assert_eq!(requests[1].path, "/restore_customer");
    assert_eq!(
        notices(&desk, NoticeKind::Success),
        vec!["Customer removed", "Customer restored"]
    );
}

#[tokio::test]
async fn test_customers_with_loaned_books_renders_and_clears_input() {
    let row = json!({
        "customer_name": "Ada L",
        "city": "London",
        "age": 36,
        "email": "ada@x.io",
        "book_id": 4,
        "book_name": "Dune",
        "book_type": 1,
        "loan_date": "2024-03-01T09:30:00"
    });
    let stub = Stub::new().respond(
        Method::GET,
        "customers_with_loaned_books",
        200,
        json!([row.clone(), row]),
    );
    let base_url = stub.start().await;
    let view = MemoryView::new().with_field(fields::BORROWER_NAME, "Ada L");
    let mut desk = desk(&base_url, view);

    assert_eq!(desk.customers_with_loaned_books().await, Outcome::Completed);

    let requests = stub.requests();
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].query.as_deref(), Some("name=Ada+L"));

    let html = desk
        .view()
        .html(containers::CUSTOMERS_WITH_LOANED_BOOKS)
        .unwrap_or_default();
    assert_eq!(html.matches("<hr>").count(), 1);
    assert!(html.contains("<strong>Loan Date:</strong> March 1, 2024, 09:30:00 AM"));
    assert_eq!(desk.view().read_field(fields::BORROWER_NAME), "");
}

#[tokio::test]
async fn test_customers_with_loaned_books_empty_keeps_input() {
    let stub = Stub::new().respond(Method::GET, "customers_with_loaned_books", 200, json!([]));
    let base_url = stub.start().await;
    let view = MemoryView::new().with_field(fields::BORROWER_NAME, "Nobody");
    let mut desk = desk(&base_url, view);

    assert_eq!(desk.customers_with_loaned_books().await, Outcome::NoResults);
    assert_eq!(notices(&desk, NoticeKind::Info), vec![NO_BORROWERS_FOUND]);
    assert_eq!(desk.view().read_field(fields::BORROWER_NAME), "Nobody");
}

#[tokio::test]
async fn test_find_customer_by_name() {
    let stub = Stub::new().respond(
        Method::POST,
        "find_customer_by_name",
        200,
        json!([{ "name": "Ada", "city": "London", "age": 36, "email": "ada@x.io" }]),
    );
    let base_url = stub.start().await;
    let view = MemoryView::new().with_field(fields::FIND_CUSTOMER_NAME, " Ada ");
    let mut desk = desk(&base_url, view);

    assert_eq!(desk.find_customer_by_name().await, Outcome::Completed);
    assert_eq!(stub.requests()[0].body, json!({ "name": "Ada" }));
    assert_eq!(
        desk.view().html(containers::FOUND_CUSTOMERS),
        Some("<ul><li>Name: Ada, City: London, Age: 36, Email: ada@x.io</li></ul>")
    );
    // lookups keep their input
    assert_eq!(desk.view().read_field(fields::FIND_CUSTOMER_NAME), " Ada ");
}

#[tokio::test]
async fn test_update_customer_rejects_non_integer_age() {
    let stub = Stub::new()
        .respond(Method::POST, "check_customer_exists", 200, json!({ "exists": false }))
        .respond(Method::PUT, "update_customer", 200, json!({ "message": "Customer updated" }));
    let base_url = stub.start().await;
    let view = email_change_form().with_field(fields::UPDATE_CUSTOMER_AGE, "thirty");
    let mut desk = desk(&base_url, view);

    assert_eq!(desk.update_customer().await, Outcome::Rejected);

    assert!(stub.requests().is_empty());
    assert_eq!(
        notices(&desk, NoticeKind::Error),
        vec!["Age can only contain up to 3 numbers."]
    );
}
