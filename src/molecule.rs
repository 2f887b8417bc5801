//! Atomic centers carrying basis shells

/// An atom in 3D space
#[derive(Debug, Clone)]
pub struct Atom {
    /// Atomic number (number of protons)
    pub atomic_number: u32,
    /// Position (x, y, z) in Bohr
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(atomic_number: u32, position: [f64; 3]) -> Self {
        Self {
            atomic_number,
            position,
        }
    }
}

/// A molecule as an ordered list of atoms; atom indices are shell center indices
#[derive(Debug, Clone)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Atom positions in order, as used for shell centers
    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    /// Hydrogen molecule at 1.4 Bohr
    pub fn h2() -> Self {
        let bond_length = 1.4;
        Self::new(vec![
            Atom::new(1, [0.0, 0.0, 0.0]),
            Atom::new(1, [0.0, 0.0, bond_length]),
        ])
    }

    /// Water, approximate geometry in Bohr
    pub fn h2o() -> Self {
        Self::new(vec![
            Atom::new(8, [0.0, 0.0, 0.0]),   // O
            Atom::new(1, [0.0, 1.43, 1.11]),  // H
            Atom::new(1, [0.0, -1.43, 1.11]), // H
        ])
    }
}
