//! Repository ports: storage-agnostic persistence interfaces.
//!
//! One trait per entity. The `infra` crate provides the MySQL
//! implementations; each module also ships an in-memory mock for tests.

pub mod category_repository;
pub mod customer_repository;
pub mod offer_repository;
pub mod order_repository;
pub mod supplier_repository;
pub mod user_repository;

pub use category_repository::{CategoryFilter, CategoryRepository};
pub use customer_repository::{CustomerFilter, CustomerRepository};
pub use offer_repository::{OfferFilter, OfferRepository};
pub use order_repository::{OrderFilter, OrderRepository};
pub use supplier_repository::{SupplierFilter, SupplierRepository};
pub use user_repository::{UserFilter, UserRepository};
