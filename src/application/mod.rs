//! Application layer - The notifier client and port interfaces
//!
//! Contains the operations offered to callers and the trait definitions
//! for external system interactions.

pub mod client;
pub mod ports;

pub use client::{ClientError, NotifierClient};
