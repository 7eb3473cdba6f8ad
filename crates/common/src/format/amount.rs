//! 억 (eok) amount scaling

/// One 억 in base currency units.
pub const EOK: f64 = 100_000_000.0;

/// Convert a raw currency amount into 억 units.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use orgboard_common::format::eok_from_amount;
///
/// assert_eq!(eok_from_amount(250_000_000.0), 2.5);
/// # }
/// ```
pub fn eok_from_amount(amount: f64) -> f64 {
    amount / EOK
}

/// Render a raw currency amount as an 억 string with two decimals.
///
/// Missing or non-finite amounts render as `"-"`.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use orgboard_common::format::format_eok;
///
/// assert_eq!(format_eok(Some(123_000_000.0)), "1.23");
/// assert_eq!(format_eok(None), "-");
/// # }
/// ```
pub fn format_eok(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value.is_finite() => format!("{:.2}", eok_from_amount(value)),
        _ => "-".to_string(),
    }
}
