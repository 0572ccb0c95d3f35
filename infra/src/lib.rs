//! Infrastructure layer for the OrderDesk backend.
//!
//! Provides the MySQL implementations of the repository ports defined in
//! `od_core::repositories`, plus connection pool construction.

pub mod database;

pub use database::create_pool;
pub use database::mysql::{
    MySqlCategoryRepository, MySqlCustomerRepository, MySqlOfferRepository,
    MySqlOrderRepository, MySqlSupplierRepository, MySqlUserRepository,
};
