//! Route handlers and shared application state.

pub mod auth;
pub mod categories;
pub mod customers;
pub mod offers;
pub mod orders;
pub mod suppliers;
pub mod users;

use std::sync::Arc;

use od_core::repositories::{
    CategoryRepository, CustomerRepository, OfferRepository, OrderRepository,
    SupplierRepository, UserRepository,
};
use od_core::services::{
    AuthService, CategoryService, CustomerService, OfferService, OrderService, SupplierService,
    UserService,
};

/// Shared application state holding one use-case service per entity.
///
/// Generic over the repository ports so the same handlers serve the MySQL
/// implementations in production and in-memory ones in tests.
pub struct AppState<Ca, Su, Cu, Us, Of, Or>
where
    Ca: CategoryRepository,
    Su: SupplierRepository,
    Cu: CustomerRepository,
    Us: UserRepository,
    Of: OfferRepository,
    Or: OrderRepository,
{
    pub category_service: Arc<CategoryService<Ca>>,
    pub supplier_service: Arc<SupplierService<Su>>,
    pub customer_service: Arc<CustomerService<Cu>>,
    pub user_service: Arc<UserService<Us>>,
    pub offer_service: Arc<OfferService<Of, Ca, Su>>,
    pub order_service: Arc<OrderService<Or, Of, Cu, Us>>,
    pub auth_service: Arc<AuthService<Us>>,
}
