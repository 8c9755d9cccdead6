use crate::{
    error::{FactorialError, Result},
    LOG_TARGET,
};

/// Largest argument whose factorial is representable as `u128`.
pub const MAX_ARGUMENT: u32 = 34;

/// Computes `n!` by self-recursion: `0! = 1` and `n! = n * (n - 1)!`.
///
/// Defined for `n <= MAX_ARGUMENT`. Larger arguments saturate to `u128::MAX`,
/// which is not `n!`, so that the output is the same in debug and release
/// builds; use [`try_factorial`] to have them rejected instead. Recursion depth
/// is `n + 1` frames, so very large `n` exhausts the stack.
pub fn factorial(n: u32) -> u128 {
    if n == 0 {
        1
    } else {
        u128::from(n).saturating_mul(factorial(n - 1))
    }
}

/// Validated factorial over signed input.
///
/// Negative `n` is rejected with [`FactorialError::InvalidArgument`] instead of
/// recursing forever, and `n > MAX_ARGUMENT` with [`FactorialError::Overflow`].
pub fn try_factorial(n: i64) -> Result<u128> {
    tracing::debug!(target: LOG_TARGET, n, "evaluating factorial");

    if n < 0 {
        return Err(FactorialError::InvalidArgument(n));
    }
    let arg = u32::try_from(n)
        .ok()
        .filter(|&arg| arg <= MAX_ARGUMENT)
        .ok_or(FactorialError::Overflow(n))?;

    let value = factorial(arg);

    tracing::trace!(target: LOG_TARGET, n, %value, "factorial done");
    Ok(value)
}
