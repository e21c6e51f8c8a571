pub mod error;
pub mod models;
pub mod candidates;
pub mod tally;
pub mod session;
pub mod client_info;

pub use error::{Error, ErrorCode, Result};
pub use models::*;
pub use tally::{tally, leaderboard, Standing};
pub use session::{DeviceSession, DeviceStore, MemoryStore};
pub use client_info::ClientInfo;

#[cfg(test)]
mod tests;
