//! Request middleware.
//!
//! Purpose: request lifecycle concerns that sit in front of every handler,
//! currently trace identifier assignment and request logging.

pub mod trace;

pub use trace::Trace;
