//! Customer endpoints

use super::{endpoints, ApiClient};
use crate::{
    error::AppResult,
    models::{
        Customer, CustomerEmailCheck, CustomerLoan, CustomerRef, CustomerUpdate, ExistsResponse,
        MessageResponse, NameQuery, NewCustomer,
    },
};

impl ApiClient {
    /// Create a customer
    pub async fn add_customer(&self, customer: &NewCustomer) -> AppResult<MessageResponse> {
        self.post(endpoints::ADD_CUSTOMER, customer).await
    }

    /// List every customer
    pub async fn display_all_customers(&self) -> AppResult<Vec<Customer>> {
        self.get(endpoints::DISPLAY_ALL_CUSTOMERS).await
    }

    /// Find customers by name
    pub async fn find_customer_by_name(&self, query: &NameQuery) -> AppResult<Vec<Customer>> {
        self.post(endpoints::FIND_CUSTOMER_BY_NAME, query).await
    }

    pub async fn remove_customer(&self, customer: &CustomerRef) -> AppResult<MessageResponse> {
        self.delete(endpoints::REMOVE_CUSTOMER, customer).await
    }

    pub async fn restore_customer(&self, customer: &CustomerRef) -> AppResult<MessageResponse> {
        self.post(endpoints::RESTORE_CUSTOMER, customer).await
    }

    /// Ask whether a customer with the given email already exists
    pub async fn check_customer_exists(
        &self,
        check: &CustomerEmailCheck,
    ) -> AppResult<ExistsResponse> {
        self.post(endpoints::CHECK_CUSTOMER_EXISTS, check).await
    }

    pub async fn update_customer(&self, update: &CustomerUpdate) -> AppResult<MessageResponse> {
        self.put(endpoints::UPDATE_CUSTOMER, update).await
    }

    /// Customers whose name matches, one row per book they currently hold
    pub async fn customers_with_loaned_books(
        &self,
        query: &NameQuery,
    ) -> AppResult<Vec<CustomerLoan>> {
        self.get_with_query(endpoints::CUSTOMERS_WITH_LOANED_BOOKS, query)
            .await
    }
}
