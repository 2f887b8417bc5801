//! # Gaussian basis shells
//!
//! Integer arithmetic for Gaussian atomic-orbital shells and the basis-set
//! layout built on top of it.
//!
//! ## Modules
//!
//! - `arith`: double factorials, binomial coefficients, shell sizes, maximum shell type
//! - `shell`: validated shell type codes and Cartesian exponent ordering
//! - `normalization`: primitive normalization and the Cartesian-to-pure transformation
//! - `molecule`: atomic centers
//! - `basis`: contracted shells, basis-function offsets and evaluation
//! - `config`: build-time limits
//! - `error`: error kinds shared by all of the above

pub mod arith;
pub mod basis;
pub mod config;
pub mod error;
pub mod molecule;
pub mod normalization;
pub mod shell;

/// Re-export commonly used items
pub use arith::{double_step_factorial, falling_binomial, max_shell_type, shell_basis_size};
pub use basis::{BasisSet, GaussianPrimitive, Shell};
pub use config::MAX_SHELL_TYPE;
pub use error::{ShellError, ShellResult};
pub use molecule::{Atom, Molecule};
pub use shell::ShellType;
