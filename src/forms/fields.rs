//! Ids of the named input fields and result containers on the desk page

// Add customer
pub const CUSTOMER_NAME: &str = "customerName";
pub const CUSTOMER_CITY: &str = "customerCity";
pub const CUSTOMER_AGE: &str = "customerAge";
pub const CUSTOMER_EMAIL: &str = "customerEmail";

// Add book
pub const BOOK_NAME: &str = "bookName";
pub const BOOK_AUTHOR: &str = "bookAuthor";
pub const BOOK_YEAR_PUBLISHED: &str = "bookYearPublished";
pub const BOOK_TYPE: &str = "bookType";

// Loans
pub const LOAN_BOOK_NAME: &str = "loanBookName";
pub const LOAN_CUSTOMER_EMAIL: &str = "loanCustomerEmail";
pub const RETURN_BOOK_NAME: &str = "returnBookName";
pub const RETURN_CUSTOMER_EMAIL: &str = "returnCustomerEmail";

// Lookups
pub const FIND_BOOK_NAME: &str = "findBookName";
pub const FIND_CUSTOMER_NAME: &str = "findCustomerName";
pub const LOANED_BOOK_NAME: &str = "bookNameInput";
pub const BORROWER_NAME: &str = "customerNameInput";

// Remove / restore
pub const REMOVE_BOOK_NAME: &str = "removeBookName";
pub const REMOVE_CUSTOMER_EMAIL: &str = "removeCustomerEmail";
pub const RESTORE_BOOK_NAME: &str = "restoreBookName";
pub const RESTORE_CUSTOMER_EMAIL: &str = "restoreCustomerEmail";

// Update book
pub const UPDATE_BOOK_NAME: &str = "updateBookName";
pub const NEW_BOOK_NAME: &str = "newBookName";
pub const UPDATE_BOOK_AUTHOR: &str = "updateBookAuthor";
pub const UPDATE_BOOK_YEAR_PUBLISHED: &str = "updateBookYearPublished";
pub const UPDATE_BOOK_TYPE: &str = "updateBookType";

// Update customer
pub const UPDATE_CUSTOMER_EMAIL: &str = "updateCustomerEmail";
pub const UPDATE_CUSTOMER_NAME: &str = "updateCustomerName";
pub const UPDATE_CUSTOMER_CITY: &str = "updateCustomerCity";
pub const UPDATE_CUSTOMER_AGE: &str = "updateCustomerAge";
pub const UPDATE_CUSTOMER_NEW_EMAIL: &str = "updateCustomerNewEmail";

/// Result containers
pub mod containers {
    pub const BOOKS: &str = "booksDisplay";
    pub const CUSTOMERS: &str = "customersDisplay";
    pub const LOANS: &str = "loansDisplay";
    pub const LATE_LOANS: &str = "lateLoansDisplay";
    pub const FOUND_BOOKS: &str = "foundBooksDisplay";
    pub const FOUND_CUSTOMERS: &str = "foundCustomersDisplay";
    pub const LOANED_BOOKS: &str = "loanedBooksDisplay";
    pub const CUSTOMERS_WITH_LOANED_BOOKS: &str = "customersWithLoanedBooksDisplay";
}
