//! Reads production order confirmations and their material movements and batch characteristics
//! through a configurable set of call chains

pub mod accepter;
pub mod chain;
pub mod config;
pub mod dispatch;
pub mod input;
pub mod source;

#[cfg(test)]
pub(crate) mod fake;
