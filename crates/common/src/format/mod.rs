//! Display formatting for dashboard values
//!
//! The backend ships raw currency amounts and ISO-like date strings; the
//! dashboard renders amounts in 억 (1e8) units and dates either as the plain
//! date portion or as a compact `YYMMDD` string.

pub mod amount;
pub mod date;
pub mod text;

pub use amount::{eok_from_amount, format_eok, EOK};
pub use date::{date_part, format_yymmdd};
pub use text::normalize_memo_text;
