//! Book forms

use validator::Validate;

use super::{check, fields, parse_int, read_int, read_text, whole_number, FILL_ALL_FIELDS};
use crate::{
    error::{AppError, AppResult},
    models::{BookRef, BookUpdate, NameQuery, NewBook},
    view::ViewPort,
};

/// Add book form
#[derive(Debug, Clone, Validate)]
pub struct AddBookForm {
    #[validate(length(min = 1, message = "Please ensure all fields are filled out correctly."))]
    pub name: String,
    #[validate(length(min = 1, message = "Please ensure all fields are filled out correctly."))]
    pub author: String,
    #[validate(
        required(message = "Please ensure all fields are filled out correctly."),
        range(min = 1000, max = 9999, message = "The Year Published must contain 4 digits.")
    )]
    pub year_published: Option<i64>,
    #[validate(required(message = "Please ensure all fields are filled out correctly."))]
    pub book_type: Option<i64>,
}

impl AddBookForm {
    pub fn read<V: ViewPort>(view: &V) -> Self {
        Self {
            name: read_text(view, fields::BOOK_NAME),
            author: read_text(view, fields::BOOK_AUTHOR),
            year_published: read_int(view, fields::BOOK_YEAR_PUBLISHED),
            book_type: read_int(view, fields::BOOK_TYPE),
        }
    }

    /// Fields cleared after the book was created
    pub const FIELDS: &'static [&'static str] = &[
        fields::BOOK_NAME,
        fields::BOOK_AUTHOR,
        fields::BOOK_YEAR_PUBLISHED,
        fields::BOOK_TYPE,
    ];

    pub fn into_request(self) -> AppResult<NewBook> {
        check(&self, &["name", "author", "year_published", "book_type"])?;
        match (self.year_published, self.book_type) {
            (Some(year_published), Some(book_type)) => Ok(NewBook {
                name: self.name,
                author: self.author,
                year_published,
                book_type,
            }),
            _ => Err(AppError::Validation(FILL_ALL_FIELDS.to_string())),
        }
    }
}

/// A single book name, as used by find, remove and restore
#[derive(Debug, Clone, Validate)]
pub struct BookNameForm {
    #[validate(length(min = 1, message = "Book name is required."))]
    pub name: String,
}

impl BookNameForm {
    pub fn read<V: ViewPort>(view: &V, field: &str) -> Self {
        Self {
            name: read_text(view, field),
        }
    }

    pub fn into_query(self) -> AppResult<NameQuery> {
        check(&self, &["name"])?;
        Ok(NameQuery { name: self.name })
    }

    pub fn into_ref(self) -> AppResult<BookRef> {
        check(&self, &["name"])?;
        Ok(BookRef {
            book_name: self.name,
        })
    }
}

/// Update book form. Only the current name is required; a year or type left
/// blank is sent as `null`, but one that is filled in must be an integer.
#[derive(Debug, Clone, Validate)]
pub struct UpdateBookForm {
    #[validate(length(min = 1, message = "Original book name is required."))]
    pub book_name: String,
    pub new_name: String,
    pub author: String,
    #[validate(custom(
        function = "whole_number",
        message = "The Year Published must contain 4 digits."
    ))]
    pub year_published: String,
    #[validate(custom(
        function = "whole_number",
        message = "Please ensure all fields are filled out correctly."
    ))]
    pub book_type: String,
    #[validate(range(min = 1000, max = 9999, message = "The Year Published must contain 4 digits."))]
    year_value: Option<i64>,
}

impl UpdateBookForm {
    pub fn read<V: ViewPort>(view: &V) -> Self {
        let year_published = read_text(view, fields::UPDATE_BOOK_YEAR_PUBLISHED);
        Self {
            book_name: read_text(view, fields::UPDATE_BOOK_NAME),
            new_name: read_text(view, fields::NEW_BOOK_NAME),
            author: read_text(view, fields::UPDATE_BOOK_AUTHOR),
            year_value: parse_int(&year_published),
            year_published,
            book_type: read_text(view, fields::UPDATE_BOOK_TYPE),
        }
    }

    pub const FIELDS: &'static [&'static str] = &[
        fields::UPDATE_BOOK_NAME,
        fields::NEW_BOOK_NAME,
        fields::UPDATE_BOOK_AUTHOR,
        fields::UPDATE_BOOK_YEAR_PUBLISHED,
        fields::UPDATE_BOOK_TYPE,
    ];

    pub fn into_request(self) -> AppResult<BookUpdate> {
        check(&self, &["book_name", "year_published", "year_value", "book_type"])?;
        Ok(BookUpdate {
            book_name: self.book_name,
            new_name: self.new_name,
            author: self.author,
            year_published: self.year_value,
            book_type: parse_int(&self.book_type),
        })
    }
}
