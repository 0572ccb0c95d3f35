//! Use-case services orchestrating the domain model over the repository
//! ports. One service per entity, plus the authentication services.

pub mod auth;
pub mod category;
pub mod customer;
pub mod offer;
pub mod order;
pub mod supplier;
pub mod token;
pub mod user;

pub use auth::AuthService;
pub use category::{CategoryService, CategoryUpdate};
pub use customer::{CustomerService, CustomerUpdate};
pub use offer::{OfferService, OfferUpdate};
pub use order::OrderService;
pub use supplier::{SupplierService, SupplierUpdate};
pub use token::{TokenService, TokenServiceConfig};
pub use user::{UserService, UserUpdate};
