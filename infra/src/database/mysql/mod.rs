//! MySQL implementations of the repository ports.

mod category_repository_impl;
mod customer_repository_impl;
mod offer_repository_impl;
mod order_repository_impl;
mod supplier_repository_impl;
mod user_repository_impl;

pub use category_repository_impl::MySqlCategoryRepository;
pub use customer_repository_impl::MySqlCustomerRepository;
pub use offer_repository_impl::MySqlOfferRepository;
pub use order_repository_impl::MySqlOrderRepository;
pub use supplier_repository_impl::MySqlSupplierRepository;
pub use user_repository_impl::MySqlUserRepository;

/// Wrap a text filter value into a SQL LIKE pattern matching substrings
pub(crate) fn like_pattern(value: &str) -> String {
    format!("%{}%", value)
}
