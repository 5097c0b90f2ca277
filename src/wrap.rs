//! Wrap-around index arithmetic for ring positions.
//!
//! Both functions expect `0 <= value < limit`.

/// Step forward around the ring
///
/// Returns `0` after the last position.
#[inline]
pub const fn increment_wrapped(value: usize, limit: usize) -> usize {
    debug_assert!(value < limit, "ring index out of range");
    if value + 1 >= limit { 0 } else { value + 1 }
}

/// Step backward around the ring
///
/// Returns `limit - 1` before the first position.
#[inline]
pub const fn decrement_wrapped(value: usize, limit: usize) -> usize {
    debug_assert!(value < limit, "ring index out of range");
    if value == 0 { limit - 1 } else { value - 1 }
}
