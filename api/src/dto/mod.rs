//! Request and response data transfer objects.
//!
//! Request DTOs derive `validator::Validate`; handlers reject invalid
//! payloads before touching the services. Response DTOs are built from the
//! domain entities with `From` impls.

pub mod auth;
pub mod category;
pub mod customer;
pub mod offer;
pub mod order;
pub mod supplier;
pub mod user;

use od_shared::types::Pagination;

/// Build pagination from optional query parameters, falling back to the
/// shared defaults
pub(crate) fn pagination_from(page: Option<u32>, per_page: Option<u32>) -> Pagination {
    let defaults = Pagination::default();
    Pagination::new(
        page.unwrap_or(defaults.page),
        per_page.unwrap_or(defaults.per_page),
    )
}
