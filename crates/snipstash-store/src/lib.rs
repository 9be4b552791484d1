//! snipstash-store
//!
//! SQLite-backed snippet persistence. The store owns the snippet collection
//! and is the only component that mutates it; records are created once and
//! never updated or deleted.

pub mod db;
pub mod error;
pub mod query;
pub mod snippets;
