//! Authentication use-cases: credential check with token issuance, and
//! token validation with user lookup.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
