//! snipstash-core
//!
//! Pure domain types and validation. No storage or HTTP dependency — this is
//! the shared vocabulary of the snipstash system.

pub mod error;
pub mod models;
pub mod timefmt;
