//! `ztransform` library crate.
//!
//! The binary (`zt`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the transform/ROC/response pieces are reusable on their own
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod plot;
pub mod report;
pub mod response;
pub mod roc;
pub mod transform;
