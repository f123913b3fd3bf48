//! Data models for webhook payloads and persisted documents.

mod record;
mod webhook;

pub use record::*;
pub use webhook::*;
