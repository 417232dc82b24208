//! Denomination conversion between minimal ("micro") and display units.
//!
//! Non-numeric input converts to zero rather than failing.

const MICRO: f64 = 1_000_000.0;

/// Anything a page hands us as an amount: typed numbers or raw input text.
pub trait Amount {
    /// NaN when the value is not a number.
    fn as_f64(&self) -> f64;
}

impl Amount for str {
    fn as_f64(&self) -> f64 {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return 0.0;
        }
        trimmed.parse().unwrap_or(f64::NAN)
    }
}

impl Amount for String {
    fn as_f64(&self) -> f64 { self.as_str().as_f64() }
}

impl Amount for f64 {
    fn as_f64(&self) -> f64 { *self }
}

impl Amount for u64 {
    fn as_f64(&self) -> f64 { *self as f64 }
}

impl Amount for u128 {
    fn as_f64(&self) -> f64 { *self as f64 }
}

impl Amount for i64 {
    fn as_f64(&self) -> f64 { *self as f64 }
}

/// Minimal units → display units.
pub fn to_display_units<A: Amount + ?Sized>(amount: &A) -> f64 {
    let value = amount.as_f64() / MICRO;
    if value.is_finite() { value } else { 0.0 }
}

/// Display units → minimal units, as a base-10 integer string.
pub fn to_minimal_units<A: Amount + ?Sized>(amount: &A) -> String {
    let value = (amount.as_f64() * MICRO).round();
    if !value.is_finite() || value == 0.0 {
        return "0".into();
    }
    format!("{:.0}", value)
}

/// `"ujuno"` → `"JUNO"`.
pub fn display_denom(minimal_denom: &str) -> String {
    let mut chars = minimal_denom.chars();
    chars.next();
    chars.as_str().to_uppercase()
}

/// Two decimals above 0.01, untouched below.
pub fn to_fixed_display<A: Amount + ?Sized>(amount: &A) -> String {
    let value = amount.as_f64();
    if value > 0.01 {
        format!("{:.2}", value)
    } else {
        format!("{}", value)
    }
}
