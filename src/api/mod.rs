//! Webhook API module.

mod webhook;

pub use webhook::*;
