//! Modular common utilities shared across OrgBoard crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: display formatting and serde helpers
//! - `observability`: optional tracing of lenient parse fallbacks

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod format;
#[cfg(feature = "foundation")]
pub mod utils;

// Re-export commonly used helpers for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use format::{
    date_part, eok_from_amount, format_eok, format_yymmdd, normalize_memo_text, EOK,
};
#[cfg(feature = "foundation")]
pub use utils::serde::{lenient_f64, lenient_number};
