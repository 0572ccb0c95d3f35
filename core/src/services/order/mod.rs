//! Order use-cases: lifecycle of the order aggregate and its line items.

mod service;

#[cfg(test)]
mod tests;

pub use service::OrderService;
