//! Shell type codes
//!
//! A shell type is a signed code: `l >= 0` for a Cartesian shell of angular
//! momentum `l`, and `-l` for a pure shell with `l >= 2`.

use std::fmt;

use crate::arith::shell_basis_size;
use crate::config::{MAX_SHELL_TYPE, SHELL_LABELS};
use crate::error::{ShellError, ShellResult};

/// A validated shell type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShellType(i64);

impl ShellType {
    /// Validates a raw shell type code.
    ///
    /// Rejects the reserved code -1 and any code whose angular momentum is
    /// above `MAX_SHELL_TYPE`.
    pub fn new(code: i64) -> ShellResult<Self> {
        if code == -1 {
            return Err(ShellError::invalid(
                "ShellType::new",
                "shell type -1 is reserved (p shells are Cartesian only)",
            ));
        }
        if code.unsigned_abs() > MAX_SHELL_TYPE as u64 {
            return Err(ShellError::UnsupportedShellType {
                shell_type: code,
                max: MAX_SHELL_TYPE,
            });
        }
        Ok(Self(code))
    }

    /// Cartesian shell with angular momentum `l`.
    pub fn cartesian(l: u32) -> ShellResult<Self> {
        Self::new(i64::from(l))
    }

    /// Pure shell with angular momentum `l`.
    ///
    /// For s and p shells both conventions coincide and the Cartesian code is returned.
    pub fn pure(l: u32) -> ShellResult<Self> {
        if l <= 1 {
            Self::cartesian(l)
        } else {
            Self::new(-i64::from(l))
        }
    }

    /// Raw signed code.
    pub fn code(self) -> i64 {
        self.0
    }

    pub fn angular_momentum(self) -> u32 {
        // bounded by MAX_SHELL_TYPE
        self.0.unsigned_abs() as u32
    }

    pub fn is_pure(self) -> bool {
        self.0 < -1
    }

    /// Number of basis functions in a shell of this type.
    pub fn nbasis(self) -> ShellResult<usize> {
        shell_basis_size(self.0)
    }

    /// Spectroscopic letter (`s`, `p`, `d`, ...).
    pub fn label(self) -> char {
        SHELL_LABELS[self.angular_momentum() as usize]
    }
}

impl TryFrom<i64> for ShellType {
    type Error = ShellError;

    fn try_from(code: i64) -> ShellResult<Self> {
        Self::new(code)
    }
}

impl From<ShellType> for i64 {
    fn from(shell_type: ShellType) -> Self {
        shell_type.0
    }
}

impl fmt::Display for ShellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let convention = if self.is_pure() { "pure" } else { "cartesian" };
        write!(f, "{} ({})", self.label(), convention)
    }
}

/// Cartesian exponent triples `[nx, ny, nz]` of a shell with angular momentum `l`.
///
/// Ordered alphabetically by monomial: `xx, xy, xz, yy, yz, zz` for `l = 2`.
pub fn cartesian_exponents(l: u32) -> Vec<[u32; 3]> {
    (0..=l)
        .rev()
        .flat_map(|nx| (0..=l - nx).rev().map(move |ny| [nx, ny, l - nx - ny]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_code_rejected() {
        let err = ShellType::new(-1).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_code_above_maximum_rejected() {
        assert!(matches!(
            ShellType::new(MAX_SHELL_TYPE + 1),
            Err(ShellError::UnsupportedShellType { shell_type: 8, max: 7 })
        ));
        assert!(ShellType::new(-MAX_SHELL_TYPE - 1).is_err());
        assert!(ShellType::new(-MAX_SHELL_TYPE).is_ok());
    }

    #[test]
    fn test_pure_falls_back_for_low_l() {
        assert_eq!(ShellType::pure(0).unwrap().code(), 0);
        assert_eq!(ShellType::pure(1).unwrap().code(), 1);
        let d = ShellType::pure(2).unwrap();
        assert_eq!(d.code(), -2);
        assert!(d.is_pure());
        assert_eq!(d.angular_momentum(), 2);
    }

    #[test]
    fn test_nbasis_and_label() {
        let f = ShellType::pure(3).unwrap();
        assert_eq!(f.nbasis().unwrap(), 7);
        assert_eq!(f.label(), 'f');
        assert_eq!(f.to_string(), "f (pure)");

        let p = ShellType::cartesian(1).unwrap();
        assert_eq!(p.nbasis().unwrap(), 3);
        assert_eq!(p.to_string(), "p (cartesian)");
    }

    #[test]
    fn test_cartesian_exponents_order() {
        assert_eq!(cartesian_exponents(0), vec![[0, 0, 0]]);
        assert_eq!(
            cartesian_exponents(2),
            vec![[2, 0, 0], [1, 1, 0], [1, 0, 1], [0, 2, 0], [0, 1, 1], [0, 0, 2]]
        );
    }

    #[test]
    fn test_cartesian_exponents_count_matches_shell_size() {
        for l in 0..=MAX_SHELL_TYPE as u32 {
            let expected = shell_basis_size(i64::from(l)).unwrap();
            assert_eq!(cartesian_exponents(l).len(), expected);
        }
    }
}
