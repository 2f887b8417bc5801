//! Contracted Gaussian basis sets
//!
//! A basis set is a list of shells, each attached to a center. The shells are
//! laid out one after another, so the basis functions of shell `i` start at
//! `shell_offsets()[i]` and span `shell_basis_size(shell_type)` entries.

use ndarray::{s, Array1};
use serde::Deserialize;

use crate::error::{ShellError, ShellResult};
use crate::molecule::Molecule;
use crate::normalization::{
    cartesian_normalization, pure_normalization, shared_solid_harmonic_transform,
};
use crate::shell::{cartesian_exponents, ShellType};

/// A primitive Gaussian in a contraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianPrimitive {
    /// Exponent (alpha)
    pub exponent: f64,
    /// Contraction coefficient
    pub coefficient: f64,
}

impl GaussianPrimitive {
    pub fn new(exponent: f64, coefficient: f64) -> Self {
        Self { exponent, coefficient }
    }
}

/// A contracted shell: all functions of one angular momentum sharing primitives
#[derive(Debug, Clone)]
pub struct Shell {
    /// Index into the basis set's centers
    pub center: usize,
    pub shell_type: ShellType,
    pub primitives: Vec<GaussianPrimitive>,
}

impl Shell {
    pub fn new(center: usize, shell_type: ShellType, primitives: Vec<GaussianPrimitive>) -> ShellResult<Self> {
        if primitives.is_empty() {
            return Err(ShellError::Shape(format!(
                "{} shell on center {} has no primitives",
                shell_type, center
            )));
        }
        Ok(Self {
            center,
            shell_type,
            primitives,
        })
    }

    fn from_pairs(center: usize, shell_type: ShellType, pairs: &[(f64, f64)]) -> ShellResult<Self> {
        let primitives = pairs
            .iter()
            .map(|&(exponent, coefficient)| GaussianPrimitive::new(exponent, coefficient))
            .collect();
        Self::new(center, shell_type, primitives)
    }

    pub fn nbasis(&self) -> ShellResult<usize> {
        self.shell_type.nbasis()
    }

    /// Values of all functions of this shell at `delta = point - center`.
    fn evaluate(&self, delta: [f64; 3]) -> ShellResult<Array1<f64>> {
        let l = self.shell_type.angular_momentum();
        let r2 = delta.iter().map(|d| d * d).sum::<f64>();
        let monomials = cartesian_exponents(l);
        let powers = |e: &[u32; 3]| {
            delta[0].powi(e[0] as i32) * delta[1].powi(e[1] as i32) * delta[2].powi(e[2] as i32)
        };

        if self.shell_type.is_pure() {
            let mut radial = 0.0;
            for p in &self.primitives {
                radial += p.coefficient * pure_normalization(p.exponent, l)? * (-p.exponent * r2).exp();
            }
            let cart: Array1<f64> = monomials.iter().map(|e| radial * powers(e)).collect();
            Ok(shared_solid_harmonic_transform(l)?.dot(&cart))
        } else {
            monomials
                .iter()
                .map(|e| -> ShellResult<f64> {
                    let mut radial = 0.0;
                    for p in &self.primitives {
                        radial += p.coefficient
                            * cartesian_normalization(p.exponent, *e)?
                            * (-p.exponent * r2).exp();
                    }
                    Ok(radial * powers(e))
                })
                .collect()
        }
    }
}

/// A contracted Gaussian basis set
#[derive(Debug, Clone)]
pub struct BasisSet {
    /// Shell centers [x, y, z] in Bohr
    pub centers: Vec<[f64; 3]>,
    pub shells: Vec<Shell>,
}

impl BasisSet {
    /// Builds a basis set, checking that every shell refers to an existing center
    pub fn new(centers: Vec<[f64; 3]>, shells: Vec<Shell>) -> ShellResult<Self> {
        if let Some(bad) = shells.iter().find(|sh| sh.center >= centers.len()) {
            return Err(ShellError::Shape(format!(
                "shell refers to center {} but only {} centers exist",
                bad.center,
                centers.len()
            )));
        }

        let basis = Self { centers, shells };
        let nbasis = basis.nbasis()?;
        log::debug!(
            "basis set: {} centers, {} shells, {} functions",
            basis.centers.len(),
            basis.shells.len(),
            nbasis
        );
        Ok(basis)
    }

    /// Creates a minimal basis set for a molecule
    ///
    /// STO-3G for H and He, a small 1s/2s/2p contraction for Li-Ne.
    pub fn minimal(molecule: &Molecule) -> ShellResult<Self> {
        let mut shells = Vec::new();
        for (center, atom) in molecule.atoms.iter().enumerate() {
            shells.extend(Self::minimal_atom_shells(atom.atomic_number, center)?);
        }
        Self::new(molecule.positions(), shells)
    }

    fn minimal_atom_shells(atomic_number: u32, center: usize) -> ShellResult<Vec<Shell>> {
        let s = ShellType::cartesian(0)?;
        let p = ShellType::cartesian(1)?;
        match atomic_number {
            1 => Ok(vec![Shell::from_pairs(
                center,
                s,
                &[
                    (3.425250914, 0.154328967),
                    (0.623913730, 0.535328142),
                    (0.168855404, 0.444634542),
                ],
            )?]),
            2 => Ok(vec![Shell::from_pairs(
                center,
                s,
                &[
                    (6.362421394, 0.154328967),
                    (1.158922999, 0.535328142),
                    (0.313649791, 0.444634542),
                ],
            )?]),
            3..=10 => Ok(vec![
                // core
                Shell::from_pairs(center, s, &[(10.0, 0.4), (2.0, 0.6)])?,
                // valence
                Shell::from_pairs(center, s, &[(1.5, 0.5), (0.4, 0.5)])?,
                Shell::from_pairs(center, p, &[(1.0, 0.5), (0.3, 0.5)])?,
            ]),
            z => {
                log::warn!("no minimal basis for atomic number {}", z);
                Err(ShellError::invalid(
                    "BasisSet::minimal",
                    format!("no minimal basis for atomic number {}", z),
                ))
            }
        }
    }

    /// Loads a basis set from a JSON description
    ///
    /// ```json
    /// {"centers": [[0.0, 0.0, 0.0]],
    ///  "shells": [{"center": 0, "shell_type": -2,
    ///              "exponents": [0.8], "coefficients": [1.0]}]}
    /// ```
    pub fn from_json(json: &str) -> ShellResult<Self> {
        let record: BasisRecord = serde_json::from_str(json)?;
        let shells = record
            .shells
            .into_iter()
            .map(ShellRecord::into_shell)
            .collect::<ShellResult<Vec<_>>>()?;
        Self::new(record.centers, shells)
    }

    /// Total number of basis functions
    pub fn nbasis(&self) -> ShellResult<usize> {
        self.shells.iter().map(Shell::nbasis).sum()
    }

    /// Index of the first basis function of each shell
    pub fn shell_offsets(&self) -> ShellResult<Vec<usize>> {
        let mut offset = 0;
        self.shells
            .iter()
            .map(|sh| -> ShellResult<usize> {
                let start = offset;
                offset += sh.nbasis()?;
                Ok(start)
            })
            .collect()
    }

    pub fn max_angular_momentum(&self) -> Option<u32> {
        self.shells.iter().map(|sh| sh.shell_type.angular_momentum()).max()
    }

    /// Evaluates every basis function at a point
    pub fn evaluate(&self, point: [f64; 3]) -> ShellResult<Array1<f64>> {
        let mut values = Array1::zeros(self.nbasis()?);
        let offsets = self.shell_offsets()?;

        for (shell, &start) in self.shells.iter().zip(&offsets) {
            let c = self.centers.get(shell.center).ok_or_else(|| {
                ShellError::Shape(format!(
                    "shell refers to center {} but only {} centers exist",
                    shell.center,
                    self.centers.len()
                ))
            })?;
            let delta = [point[0] - c[0], point[1] - c[1], point[2] - c[2]];
            let shell_values = shell.evaluate(delta)?;
            values
                .slice_mut(s![start..start + shell_values.len()])
                .assign(&shell_values);
        }

        Ok(values)
    }
}

#[derive(Debug, Deserialize)]
struct BasisRecord {
    centers: Vec<[f64; 3]>,
    shells: Vec<ShellRecord>,
}

#[derive(Debug, Deserialize)]
struct ShellRecord {
    center: usize,
    shell_type: i64,
    exponents: Vec<f64>,
    coefficients: Vec<f64>,
}

impl ShellRecord {
    fn into_shell(self) -> ShellResult<Shell> {
        if self.exponents.len() != self.coefficients.len() {
            return Err(ShellError::Shape(format!(
                "{} exponents but {} coefficients",
                self.exponents.len(),
                self.coefficients.len()
            )));
        }
        let primitives = self
            .exponents
            .iter()
            .zip(&self.coefficients)
            .map(|(&a, &c)| GaussianPrimitive::new(a, c))
            .collect();
        Shell::new(self.center, ShellType::new(self.shell_type)?, primitives)
    }
}
