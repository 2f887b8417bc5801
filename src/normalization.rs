//! Normalization of Gaussian primitives and the Cartesian-to-pure transformation
//!
//! Primitive normalization constants are built from odd double factorials and
//! the real solid harmonic expansion coefficients from binomial coefficients.

use ndarray::Array2;
use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::arith::{double_step_factorial, falling_binomial, shell_basis_size};
use crate::config::MAX_SHELL_TYPE;
use crate::error::{ShellError, ShellResult};
use crate::shell::cartesian_exponents;

/// `(2n-1)!!`, with `(-1)!! = 1`
fn odd_double_factorial(n: u32) -> ShellResult<f64> {
    if n == 0 {
        return Ok(1.0);
    }
    Ok(double_step_factorial(2 * i64::from(n) - 1)? as f64)
}

/// `n! = n!! (n-1)!!`
fn factorial(n: i64) -> ShellResult<f64> {
    let lower = if n == 0 { 1 } else { double_step_factorial(n - 1)? };
    Ok(double_step_factorial(n)? as f64 * lower as f64)
}

fn binom(n: i64, m: i64) -> ShellResult<f64> {
    Ok(falling_binomial(n, m)? as f64)
}

fn check_exponent(operation: &'static str, alpha: f64) -> ShellResult<()> {
    if alpha.is_finite() && alpha > 0.0 {
        Ok(())
    } else {
        Err(ShellError::invalid(
            operation,
            format!("Gaussian exponent must be positive and finite (got {})", alpha),
        ))
    }
}

/// Normalization constant of the Cartesian primitive `x^nx y^ny z^nz exp(-alpha r^2)`.
pub fn cartesian_normalization(alpha: f64, exponents: [u32; 3]) -> ShellResult<f64> {
    const OP: &str = "cartesian_normalization";
    check_exponent(OP, alpha)?;
    let l = exponents
        .iter()
        .try_fold(0u32, |acc, &n| acc.checked_add(n))
        .filter(|&l| l <= i32::MAX as u32)
        .ok_or_else(|| ShellError::overflow(OP, format!("{:?}", exponents)))?;
    let denom = exponents
        .iter()
        .map(|&n| odd_double_factorial(n))
        .product::<ShellResult<f64>>()?;

    Ok(((2.0 * alpha / PI).powf(1.5) * (4.0 * alpha).powi(l as i32) / denom).sqrt())
}

/// Normalization constant shared by all functions of a pure primitive shell.
pub fn pure_normalization(alpha: f64, l: u32) -> ShellResult<f64> {
    check_exponent("pure_normalization", alpha)?;
    let denom = odd_double_factorial(l)?;

    Ok(((2.0 * alpha / PI).powf(1.5) * (4.0 * alpha).powi(l as i32) / denom).sqrt())
}

/// Magnetic quantum numbers in pure shell order: `0, +1, -1, +2, -2, ...`
pub fn pure_order(l: u32) -> impl Iterator<Item = i64> {
    let l = i64::from(l);
    std::iter::once(0).chain((1..=l).flat_map(|m| [m, -m]))
}

/// Expansion of the real solid harmonic `S_lm` in Cartesian monomials.
fn solid_harmonic_terms(l: i64, m: i64) -> ShellResult<Vec<([u32; 3], f64)>> {
    let ma = m.abs();
    // cosine-type harmonics pick even powers of y, sine-type odd ones
    let parity = if m < 0 { 1 } else { 0 };
    let delta = if m == 0 { 2.0 } else { 1.0 };
    let norm = (2.0 * factorial(l + ma)? * factorial(l - ma)? / delta).sqrt()
        / (2f64.powi(ma as i32) * factorial(l)?);

    let mut terms = Vec::new();
    for t in 0..=(l - ma) / 2 {
        let bt = binom(l, t)? * binom(l - t, ma + t)? * 0.25f64.powi(t as i32);
        for u in 0..=t {
            let btu = bt * binom(t, u)?;
            for k in (parity..=ma).step_by(2) {
                let sign = if (t + (k - parity) / 2) % 2 == 0 { 1.0 } else { -1.0 };
                let coeff = sign * btu * binom(ma, k)?;
                let exponents = [
                    (2 * t + ma - 2 * u - k) as u32,
                    (2 * u + k) as u32,
                    (l - 2 * t - ma) as u32,
                ];
                terms.push((exponents, norm * coeff));
            }
        }
    }

    Ok(terms)
}

/// Matrix mapping the Cartesian functions of a shell onto its pure functions.
///
/// Rows follow [`pure_order`], columns follow [`cartesian_exponents`]. For
/// `l = 2` the first row is `zz - xx/2 - yy/2`.
pub fn solid_harmonic_transform(l: u32) -> ShellResult<Array2<f64>> {
    if i64::from(l) > MAX_SHELL_TYPE {
        return Err(ShellError::UnsupportedShellType {
            shell_type: -i64::from(l),
            max: MAX_SHELL_TYPE,
        });
    }

    let monomials = cartesian_exponents(l);
    let ncart = shell_basis_size(i64::from(l))?;
    let npure = 2 * l as usize + 1;
    let mut transform = Array2::zeros((npure, ncart));

    for (row, m) in pure_order(l).enumerate() {
        for (exponents, coeff) in solid_harmonic_terms(i64::from(l), m)? {
            let col = monomials
                .iter()
                .position(|e| *e == exponents)
                .ok_or_else(|| {
                    ShellError::Shape(format!("monomial {:?} not in shell l={}", exponents, l))
                })?;
            transform[[row, col]] += coeff;
        }
    }

    log::trace!("solid harmonic transform for l={}: {}x{}", l, npure, ncart);
    Ok(transform)
}

#[allow(clippy::declare_interior_mutable_const)]
const UNBUILT: OnceLock<Array2<f64>> = OnceLock::new();
static TRANSFORMS: [OnceLock<Array2<f64>>; MAX_SHELL_TYPE as usize + 1] =
    [UNBUILT; MAX_SHELL_TYPE as usize + 1];

/// Process-wide copy of [`solid_harmonic_transform`], built on first use per `l`.
pub fn shared_solid_harmonic_transform(l: u32) -> ShellResult<&'static Array2<f64>> {
    let slot = TRANSFORMS
        .get(l as usize)
        .ok_or(ShellError::UnsupportedShellType {
            shell_type: -i64::from(l),
            max: MAX_SHELL_TYPE,
        })?;
    if let Some(transform) = slot.get() {
        return Ok(transform);
    }
    let transform = solid_harmonic_transform(l)?;
    Ok(slot.get_or_init(|| transform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_factorial_from_double_factorials() {
        assert_eq!(factorial(0).unwrap(), 1.0);
        assert_eq!(factorial(5).unwrap(), 120.0);
        assert_eq!(factorial(14).unwrap(), 87_178_291_200.0);
    }

    #[test]
    fn test_s_normalization() {
        let alpha = 0.8;
        let expected = (2.0 * alpha / PI).powf(0.75);
        assert_abs_diff_eq!(cartesian_normalization(alpha, [0, 0, 0]).unwrap(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(pure_normalization(alpha, 0).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_axis_aligned_cartesian_matches_pure() {
        // x^l alone carries the same constant as the pure shell
        for l in 0..=4 {
            let cart = cartesian_normalization(1.3, [l, 0, 0]).unwrap();
            let pure = pure_normalization(1.3, l).unwrap();
            assert_abs_diff_eq!(cart, pure, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bad_exponent_rejected() {
        assert!(pure_normalization(0.0, 1).unwrap_err().is_invalid_argument());
        assert!(cartesian_normalization(-1.0, [0, 0, 0]).is_err());
        assert!(cartesian_normalization(f64::NAN, [1, 0, 0]).is_err());
    }

    #[test]
    fn test_exponent_sum_overflow() {
        let err = cartesian_normalization(1.0, [u32::MAX, 1, 0]).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn test_pure_order() {
        let order: Vec<i64> = pure_order(2).collect();
        assert_eq!(order, vec![0, 1, -1, 2, -2]);
    }

    #[test]
    fn test_transform_shapes() {
        for l in 2..=MAX_SHELL_TYPE as u32 {
            let t = solid_harmonic_transform(l).unwrap();
            assert_eq!(t.nrows(), shell_basis_size(-i64::from(l)).unwrap());
            assert_eq!(t.ncols(), shell_basis_size(i64::from(l)).unwrap());
        }
        assert!(solid_harmonic_transform(8).is_err());
    }

    #[test]
    fn test_p_transform_is_permutation() {
        // rows z, x, y
        let t = solid_harmonic_transform(1).unwrap();
        let expected = Array2::from_shape_vec((3, 3), vec![
            0.0, 0.0, 1.0,
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
        ]).unwrap();
        for (a, b) in t.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_d_transform_rows() {
        let t = solid_harmonic_transform(2).unwrap();
        let sqrt3 = 3f64.sqrt();
        // columns: xx xy xz yy yz zz
        let expected = [
            [-0.5, 0.0, 0.0, -0.5, 0.0, 1.0],
            [0.0, 0.0, sqrt3, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, sqrt3, 0.0],
            [0.5 * sqrt3, 0.0, 0.0, -0.5 * sqrt3, 0.0, 0.0],
            [0.0, sqrt3, 0.0, 0.0, 0.0, 0.0],
        ];
        for (row, values) in expected.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                assert_abs_diff_eq!(t[[row, col]], *value, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_f_transform_c0_row() {
        let t = solid_harmonic_transform(3).unwrap();
        // columns: xxx xxy xxz xyy xyz xzz yyy yyz yzz zzz
        assert_abs_diff_eq!(t[[0, 9]], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t[[0, 2]], -1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(t[[0, 7]], -1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(t.row(0).iter().map(|v| v.abs()).sum::<f64>(), 4.0, epsilon = 1e-12);
    }

    /// Overlap of unnormalized monomials sharing one Gaussian, up to a common factor.
    fn monomial_metric(l: u32) -> Array2<f64> {
        let monomials = cartesian_exponents(l);
        let n = monomials.len();
        let mut g = Array2::zeros((n, n));
        for (i, a) in monomials.iter().enumerate() {
            for (j, b) in monomials.iter().enumerate() {
                let sums = [a[0] + b[0], a[1] + b[1], a[2] + b[2]];
                if sums.iter().all(|s| s % 2 == 0) {
                    g[[i, j]] = sums.iter().map(|s| odd_double_factorial(s / 2).unwrap()).product();
                }
            }
        }
        g
    }

    #[test]
    fn test_transform_rows_orthonormal() {
        for l in 1..=MAX_SHELL_TYPE as u32 {
            let t = solid_harmonic_transform(l).unwrap();
            let overlap = t.dot(&monomial_metric(l)).dot(&t.t()) / odd_double_factorial(l).unwrap();
            for ((i, j), value) in overlap.indexed_iter() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(*value, expected, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_shared_transform_built_once() {
        let first = shared_solid_harmonic_transform(3).unwrap();
        let second = shared_solid_harmonic_transform(3).unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(*first, solid_harmonic_transform(3).unwrap());
        assert!(shared_solid_harmonic_transform(8).is_err());
    }
}
