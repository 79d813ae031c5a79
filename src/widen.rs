/// Largest magnitude at which `widen_i64` is exact.
///
/// An `f64` mantissa holds 53 bits, so every integer in
/// `[-MAX_SAFE_INTEGER, MAX_SAFE_INTEGER]` converts without loss.
pub const MAX_SAFE_INTEGER: i64 = 1 << 53;

/// Widens a 64-bit signed integer to the nearest `f64`.
///
/// The host runtime has no 64-bit integer type, so values cross the
/// boundary as doubles. Exact up to [`MAX_SAFE_INTEGER`]; beyond that the
/// result is the nearest representable double, silently. The loss is part
/// of the contract; callers that need full precision must split the value
/// into 32-bit halves on their side instead.
///
/// # Arguments
///
/// * `value` - The integer to widen.
///
/// # Returns
///
/// * `f64` - The closest double to `value`.
pub fn widen_i64(value: i64) -> f64 {
    value as f64
}
