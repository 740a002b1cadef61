//! Book actions

use super::{update, Action, Desk, Outcome};
use crate::{
    forms::{
        fields::{self, containers},
        AddBookForm, BookNameForm, UpdateBookForm,
    },
    render,
    session::NoticeCategory,
    view::{Notice, ViewPort},
};

pub const FETCH_BOOKS_FAILED: &str = "Error fetching books.";
pub const NO_BOOKS_FOUND: &str = "No books found.";
pub const BOOK_NAME_TAKEN: &str = "A book with this name already exists.";

impl<V: ViewPort> Desk<V> {
    /// Create a book from the add-book fields
    pub async fn add_book(&mut self) -> Outcome {
        let book = match AddBookForm::read(&self.view).into_request() {
            Ok(book) => book,
            Err(e) => return self.reject(Action::AddBook, e),
        };

        let result = self.api.add_book(&book).await;
        self.finish(Action::AddBook, result, AddBookForm::FIELDS)
    }

    /// List every book. Any failure shows one fixed message.
    pub async fn display_all_books(&mut self) -> Outcome {
        self.notice_once(NoticeCategory::Books);

        match self.api.display_all_books().await {
            Ok(books) => {
                tracing::info!("Listed {} books", books.len());
                self.view
                    .render_list(containers::BOOKS, &books, render::book_item);
                Outcome::Completed
            }
            Err(e) => {
                tracing::warn!("{} failed: {}", Action::DisplayAllBooks, e);
                self.view.notify(Notice::error(FETCH_BOOKS_FAILED));
                Outcome::Failed
            }
        }
    }

    pub async fn find_book_by_name(&mut self) -> Outcome {
        let query = match BookNameForm::read(&self.view, fields::FIND_BOOK_NAME).into_query() {
            Ok(query) => query,
            Err(e) => return self.reject(Action::FindBookByName, e),
        };

        match self.api.find_book_by_name(&query).await {
            Ok(books) => self.show_rows(
                containers::FOUND_BOOKS,
                NO_BOOKS_FOUND,
                &books,
                |view, rows| view.render_list(containers::FOUND_BOOKS, rows, render::book_item),
            ),
            Err(e) if e.is_not_found() => self.no_results(containers::FOUND_BOOKS, NO_BOOKS_FOUND),
            Err(e) => self.fail(Action::FindBookByName, e),
        }
    }

    pub async fn remove_book(&mut self) -> Outcome {
        let book = match BookNameForm::read(&self.view, fields::REMOVE_BOOK_NAME).into_ref() {
            Ok(book) => book,
            Err(e) => return self.reject(Action::RemoveBook, e),
        };

        let result = self.api.remove_book(&book).await;
        self.finish(Action::RemoveBook, result, &[fields::REMOVE_BOOK_NAME])
    }

    pub async fn restore_book(&mut self) -> Outcome {
        let book = match BookNameForm::read(&self.view, fields::RESTORE_BOOK_NAME).into_ref() {
            Ok(book) => book,
            Err(e) => return self.reject(Action::RestoreBook, e),
        };

        let result = self.api.restore_book(&book).await;
        self.finish(Action::RestoreBook, result, &[fields::RESTORE_BOOK_NAME])
    }

    /// Update a book, checking first that a new name is not already taken
    pub async fn update_book(&mut self) -> Outcome {
        let book = match UpdateBookForm::read(&self.view).into_request() {
            Ok(book) => book,
            Err(e) => return self.reject(Action::UpdateBook, e),
        };

        let check = book.rename_check();
        let run = update::run(
            check.as_ref().map(|c| self.api.check_book_exists(c)),
            || self.api.update_book(&book),
        )
        .await;

        self.finish_update(Action::UpdateBook, run, BOOK_NAME_TAKEN, UpdateBookForm::FIELDS)
    }
}
