//! HTTP client for the library management REST service
//!
//! Every endpoint is a relative path joined onto one configured base URL.
//! Responses are classified into [`AppError`] variants here so callers only
//! ever see the taxonomy, never raw transport errors.

pub mod books;
pub mod customers;
pub mod loans;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::{HttpConfig, ServerConfig},
    error::{AppError, AppResult},
    models::ErrorBody,
};

/// Endpoint paths, relative to the base URL
pub mod endpoints {
    pub const ADD_CUSTOMER: &str = "add_customer";
    pub const ADD_BOOK: &str = "add_book";
    pub const LOAN_BOOK: &str = "loan_book";
    pub const RETURN_BOOK: &str = "return_book";
    pub const DISPLAY_ALL_BOOKS: &str = "display_all_books";
    pub const DISPLAY_ALL_CUSTOMERS: &str = "display_all_customers";
    pub const DISPLAY_ALL_LOANS: &str = "display_all_loans";
    pub const LATE_LOANS: &str = "late_loans";
    pub const FIND_BOOK_BY_NAME: &str = "find_book_by_name";
    pub const FIND_CUSTOMER_BY_NAME: &str = "find_customer_by_name";
    pub const REMOVE_BOOK: &str = "remove_book";
    pub const REMOVE_CUSTOMER: &str = "remove_customer";
    pub const RESTORE_BOOK: &str = "restore_book";
    pub const RESTORE_CUSTOMER: &str = "restore_customer";
    pub const CHECK_BOOK_EXISTS: &str = "check_book_exists";
    pub const CHECK_CUSTOMER_EXISTS: &str = "check_customer_exists";
    pub const UPDATE_BOOK: &str = "update_book";
    pub const UPDATE_CUSTOMER: &str = "update_customer";
    pub const FIND_LOANED_BOOKS: &str = "find_loaned_books";
    pub const CUSTOMERS_WITH_LOANED_BOOKS: &str = "customers_with_loaned_books";
}

/// Client for the library service
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(server: &ServerConfig, http: &HttpConfig) -> AppResult<Self> {
        let mut builder = Client::builder().user_agent(http.user_agent.clone());
        if let Some(secs) = http.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| AppError::Request(e.to_string()))?;

        Ok(Self {
            http: client,
            base_url: normalize_base_url(&server.base_url)?,
        })
    }

    /// Base URL every endpoint is joined onto (always ends with `/`)
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of an endpoint, with exactly one slash between base and path
    pub fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| AppError::Request(format!("Invalid endpoint {}: {}", path, e)))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);
        self.send(self.http.get(url)).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);
        self.send(self.http.get(url).query(query)).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);
        self.send(self.http.post(url).json(body)).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        tracing::debug!("PUT {}", url);
        self.send(self.http.put(url).json(body)).await
    }

    /// DELETE carrying a JSON body, as the remove endpoints expect
    pub(crate) async fn delete<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        tracing::debug!("DELETE {}", url);
        self.send(self.http.delete(url).json(body)).await
    }

    /// Send a request and decode a success body, or classify the failure
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Could not read {} response body: {}", status, e);
                    String::new()
                }
            };
            let message = error_message(&body);
            tracing::warn!("Service answered {}: {:?}", status, message);
            return Err(AppError::Server { status, message });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// `message` of an error body, if the body is JSON and carries one
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
}

/// Parse the configured base URL, making sure relative joins keep its path
fn normalize_base_url(raw: &str) -> AppResult<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| AppError::Request(format!("Invalid base URL {}: {}", raw, e)))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
