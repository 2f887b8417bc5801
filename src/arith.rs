//! Shell arithmetic helpers
//!
//! Integer functions used to size and normalize Gaussian shells. All of them are
//! pure: they read only their arguments and `MAX_SHELL_TYPE`, so they can be
//! called from any thread without synchronization.
//!
//! Inputs are signed so that out-of-range values coming from shell codes are
//! rejected with [`ShellError::InvalidArgument`] instead of wrapping around.

use crate::config::MAX_SHELL_TYPE;
use crate::error::{ShellError, ShellResult};

/// Double factorial `n!! = n (n-2) (n-4) ...`, ending at 1 or 2.
///
/// `0!!` and `1!!` are both 1. The result is exact up to `33!!`; larger
/// inputs return [`ShellError::Overflow`].
///
/// # Examples
/// ```
/// use gbasis_shells::arith::double_step_factorial;
/// assert_eq!(double_step_factorial(5).unwrap(), 15);
/// assert_eq!(double_step_factorial(6).unwrap(), 48);
/// ```
pub fn double_step_factorial(n: i64) -> ShellResult<u64> {
    const OP: &str = "double_step_factorial";
    if n < 0 {
        return Err(ShellError::invalid(
            OP,
            format!("n must be non-negative (got {})", n),
        ));
    }

    let mut result: u64 = 1;
    let mut k = n as u64;
    while k > 1 {
        result = result
            .checked_mul(k)
            .ok_or_else(|| ShellError::overflow(OP, n))?;
        k -= 2;
    }

    Ok(result)
}

/// Binomial coefficient `C(n, m)` as a ratio of two falling products.
///
/// The numerator `n (n-1) ... (m+1)` and the denominator `(n-m)!` are built one
/// factor at a time, the denominator factors taken as `1, 2, ..., n-m`. After
/// each step both are divided by their gcd, so the running ratio is always the
/// integer `C(n, j)` and the last division is exact. `m` is first replaced by
/// `max(m, n - m)`, which gives the same coefficient from a shorter product.
///
/// Every coefficient that fits in a `u64` is returned exactly; `C(67, 33)` is
/// the largest central one. Larger results return [`ShellError::Overflow`].
///
/// When `m > n` the result is 0, the number of ways to pick more items than
/// there are. Negative inputs are rejected.
///
/// # Examples
/// ```
/// use gbasis_shells::arith::falling_binomial;
/// assert_eq!(falling_binomial(5, 2).unwrap(), 10);
/// assert_eq!(falling_binomial(3, 5).unwrap(), 0);
/// ```
pub fn falling_binomial(n: i64, m: i64) -> ShellResult<u64> {
    const OP: &str = "falling_binomial";
    if n < 0 || m < 0 {
        return Err(ShellError::invalid(
            OP,
            format!("n and m must be non-negative (got n={}, m={})", n, m),
        ));
    }
    if m > n {
        return Ok(0);
    }

    let overflow = || ShellError::overflow(OP, format!("n={}, m={}", n, m));
    let m = m.max(n - m);

    let mut numer: u128 = 1;
    let mut denom: u128 = 1;
    let mut k = n;
    while k > m {
        numer = numer.checked_mul(k as u128).ok_or_else(overflow)?;
        denom = denom.checked_mul((n - k + 1) as u128).ok_or_else(overflow)?;
        let g = gcd(numer, denom);
        numer /= g;
        denom /= g;
        k -= 1;
    }

    u64::try_from(numer / denom).map_err(|_| overflow())
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Number of basis functions in a shell with the given type code.
///
/// Positive codes are Cartesian shells with `(l+1)(l+2)/2` functions. Codes of
/// -2 and below are pure shells with `2l+1` functions for `l = -shell_type`.
/// Code 0 (an s shell) has one function in either convention. Code -1 does not
/// exist, since p shells are always Cartesian, and is rejected.
///
/// # Examples
/// ```
/// use gbasis_shells::arith::shell_basis_size;
/// assert_eq!(shell_basis_size(2).unwrap(), 6);
/// assert_eq!(shell_basis_size(-2).unwrap(), 5);
/// assert!(shell_basis_size(-1).is_err());
/// ```
pub fn shell_basis_size(shell_type: i64) -> ShellResult<usize> {
    const OP: &str = "shell_basis_size";
    let count = if shell_type > 0 {
        // Cartesian
        shell_type
            .checked_add(1)
            .zip(shell_type.checked_add(2))
            .and_then(|(a, b)| a.checked_mul(b))
            .map(|product| product / 2)
    } else if shell_type == -1 {
        return Err(ShellError::invalid(
            OP,
            "shell type -1 is reserved (p shells are Cartesian only)",
        ));
    } else {
        // Pure
        shell_type.checked_mul(-2).and_then(|v| v.checked_add(1))
    };

    count
        .and_then(|c| usize::try_from(c).ok())
        .ok_or_else(|| ShellError::overflow(OP, shell_type))
}

/// Highest shell angular momentum supported by this crate.
pub const fn max_shell_type() -> i64 {
    MAX_SHELL_TYPE
}
