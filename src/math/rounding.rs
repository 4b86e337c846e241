//! Round-to-nearest used for canvas height calculation
//!
//! Canvas height is derived from the block count as `round(blocks / blocks_per_row)`
//! rather than ceiling division. Existing pattern catalogs were laid out with this
//! rule, so it is kept bit-for-bit: quotients whose fractional part is below one
//! half round *down*, leaving the placement loop to report an overflow when that
//! allocates too few rows.

/// Round a non-negative quotient to the nearest integer, halves rounding up
///
/// Diverges from true ceiling division: `round_half_up(1.25)` is `1`, where a
/// ceiling would give `2`.
pub fn round_half_up(value: f64) -> usize {
    (value + 0.5) as usize
}
