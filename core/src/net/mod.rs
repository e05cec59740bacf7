//! Catalog transport
//!
//! - [`response`] - Growable accumulator for streamed bodies
//! - [`auth`] - Basic-Auth credential
//! - [`client`] - Authenticated GET + decode for each catalog endpoint
//! - [`task`] - Background fetch handle with cancellation

pub mod auth;
pub mod client;
pub mod response;
pub mod task;

pub use auth::basic_authorization;
pub use client::{CatalogClient, fetch_platforms, fetch_platforms_blocking};
pub use response::{INITIAL_CAPACITY, OutOfMemory, ResponseBuffer};
pub use task::PendingFetch;
