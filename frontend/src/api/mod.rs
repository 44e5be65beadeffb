mod auth;
pub mod client;
pub mod types;
mod user;

pub use client::*;
pub use types::*;
