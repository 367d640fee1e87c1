//! Clinic payment proxy library
//!
//! Relays payment registration and status queries from the clinic website
//! to the bank gateway, keeping merchant credentials on the server.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::configure;
pub use modules::payments;
