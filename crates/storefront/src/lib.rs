//! Oakleaf Storefront client library.
//!
//! Drives the customer-facing shopping flow against the Oakleaf backend API:
//! catalog browsing and search, the session cart with broadcast totals, and
//! the multi-step checkout form that submits an order.
//!
//! # Architecture
//!
//! - [`api`] - REST clients for the backend (catalog, reference data, checkout)
//! - [`cart`] - session cart with derived totals broadcast over watch channels
//! - [`checkout`] - checkout form validation, assembly, and submission
//! - [`views`] - read-only display surfaces over the cart and catalog
//! - [`app`] - dependency-injected container wiring the services together
//!
//! The backend is an external collaborator; this crate never persists state
//! across sessions and never talks to a payment processor.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod app;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod fetch;
pub mod model;
pub mod routes;
pub mod views;
