//! Book endpoints

use super::{endpoints, ApiClient};
use crate::{
    error::AppResult,
    models::{
        Book, BookNameCheck, BookRef, BookUpdate, ExistsResponse, MessageResponse, NameQuery,
        NewBook,
    },
};

impl ApiClient {
    /// Create a book
    pub async fn add_book(&self, book: &NewBook) -> AppResult<MessageResponse> {
        self.post(endpoints::ADD_BOOK, book).await
    }

    /// List every book
    pub async fn display_all_books(&self) -> AppResult<Vec<Book>> {
        self.get(endpoints::DISPLAY_ALL_BOOKS).await
    }

    /// Find books by name
    pub async fn find_book_by_name(&self, query: &NameQuery) -> AppResult<Vec<Book>> {
        self.post(endpoints::FIND_BOOK_BY_NAME, query).await
    }

    /// Remove a book
    pub async fn remove_book(&self, book: &BookRef) -> AppResult<MessageResponse> {
        self.delete(endpoints::REMOVE_BOOK, book).await
    }

    /// Restore a previously removed book
    pub async fn restore_book(&self, book: &BookRef) -> AppResult<MessageResponse> {
        self.post(endpoints::RESTORE_BOOK, book).await
    }

    /// Ask whether a book with the given name already exists
    pub async fn check_book_exists(&self, check: &BookNameCheck) -> AppResult<ExistsResponse> {
        self.post(endpoints::CHECK_BOOK_EXISTS, check).await
    }

    /// Update a book
    pub async fn update_book(&self, update: &BookUpdate) -> AppResult<MessageResponse> {
        self.put(endpoints::UPDATE_BOOK, update).await
    }
}
