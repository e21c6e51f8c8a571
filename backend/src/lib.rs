pub mod routes;
pub mod queries;
pub mod cors;
pub mod error;
pub mod rate_limiter;
pub mod catchers;
pub use shared::{models::*, error::*, ClientInfo};

#[cfg(test)]
mod tests;
