//! kalite-core
//!
//! Pure domain types shared by the taxonomy resolver, the wizard engine and
//! the session service. No I/O; this is the shared vocabulary of Kalite.

pub mod error;
pub mod models;
