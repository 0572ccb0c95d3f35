//! Core business logic and domain layer for the OrderDesk backend
//!
//! This crate contains the domain model (entities and value objects), the
//! repository ports the persistence layer implements, the use-case services,
//! and the domain error types. It is storage- and transport-agnostic: the
//! `infra` crate plugs in MySQL repositories and the `api` crate exposes the
//! services over HTTP.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
