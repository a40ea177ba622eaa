//! Back-office API client library
//!
//! A Rust async client for the facilities back-office REST API: paginated
//! list endpoints, filter predicates, envelope normalization, and the thin
//! CRUD verbs the screens are built on.

pub mod auth;
pub mod endpoint;
pub mod error;
pub mod model;
pub mod query;
pub mod retry;

mod client;
mod envelope;
mod pages;

pub use client::*;
pub use pages::ListPages;
