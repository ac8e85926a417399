// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{fmt::Display, ops::Mul};

use crate::{QubitId, index_set::IndexSet};

/// An element of the phase group {+1, 𝑖, −1, −𝑖}, stored as an exponent of 𝑖.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    One,
    I,
    MinusOne,
    MinusI,
}

impl Phase {
    #[must_use]
    pub const fn from_exponent(exponent: u8) -> Self {
        match exponent % 4 {
            0 => Phase::One,
            1 => Phase::I,
            2 => Phase::MinusOne,
            _ => Phase::MinusI,
        }
    }

    #[must_use]
    pub const fn exponent(self) -> u8 {
        match self {
            Phase::One => 0,
            Phase::I => 1,
            Phase::MinusOne => 2,
            Phase::MinusI => 3,
        }
    }

    #[must_use]
    pub const fn times(self, other: Phase) -> Phase {
        Phase::from_exponent(self.exponent() + other.exponent())
    }

    /// Multiplies by −1 when `negate` is set.
    #[must_use]
    pub const fn negated_if(self, negate: bool) -> Phase {
        if negate {
            self.times(Phase::MinusOne)
        } else {
            self
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Phase {
        Phase::from_exponent(4 - self.exponent())
    }

    #[must_use]
    pub const fn is_real(self) -> bool {
        self.exponent() % 2 == 0
    }

    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Phase::One => "",
            Phase::I => "i",
            Phase::MinusOne => "-",
            Phase::MinusI => "-i",
        }
    }
}

impl Mul for Phase {
    type Output = Phase;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(rhs)
    }
}

/// A Pauli axis, used both as a measurement basis and as the axis of
/// an entangling rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// The component of a generator on one qubit. `W` is the product `XZ`,
/// that is `−𝑖Y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    I,
    X,
    Z,
    W,
}

impl Component {
    #[must_use]
    pub fn from_bits(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => Component::I,
            (true, false) => Component::X,
            (false, true) => Component::Z,
            (true, true) => Component::W,
        }
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Component::I => 'I',
            Component::X => 'X',
            Component::Z => 'Z',
            Component::W => 'W',
        }
    }
}

/// Renders a generator given its phase and per-qubit components.
///
/// With `print_y` every `W` is shown as `Y` and the phase is adjusted by
/// `W = −𝑖Y`.
pub(crate) fn render(phase: Phase, components: &[Component], print_y: bool) -> String {
    let mut phase = phase;
    let mut letters = String::with_capacity(components.len());
    for component in components {
        if print_y && *component == Component::W {
            phase = phase * Phase::MinusI;
            letters.push('Y');
        } else {
            letters.push(component.letter());
        }
    }
    format!("{}{letters}", phase.prefix())
}

/// A sparse Pauli operator `phase · ⊗_q X^{x_q} Z^{z_q}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PauliString {
    pub phase: Phase,
    pub xs: IndexSet,
    pub zs: IndexSet,
}

impl PauliString {
    pub fn new(phase: Phase, xs: IndexSet, zs: IndexSet) -> Self {
        PauliString { phase, xs, zs }
    }

    /// Builds the Hermitian operator with `X`, `Y` and `Z` on the given
    /// qubits, folding `Y = 𝑖XZ` into the phase.
    pub fn from_letters(xs: &[QubitId], ys: &[QubitId], zs: &[QubitId]) -> Self {
        let mut x_support: IndexSet = xs.iter().copied().collect();
        let mut z_support: IndexSet = zs.iter().copied().collect();
        for &qubit in ys {
            x_support.insert(qubit);
            z_support.insert(qubit);
        }
        let phase = Phase::from_exponent(u8::try_from(ys.len() % 4).unwrap_or_default());
        PauliString::new(phase, x_support, z_support)
    }

    #[must_use]
    pub fn weight(&self) -> usize {
        self.xs.union(&self.zs).len()
    }

    /// Number of qubits carrying a `W`, that is a `Y` component.
    #[must_use]
    pub fn y_count(&self) -> usize {
        self.xs.intersection_count(&self.zs)
    }

    /// Right-multiplies by `other`.
    pub fn multiply(&mut self, other: &PauliString) {
        let swaps = self.zs.intersection_count(&other.xs);
        self.xs.xor_assign(&other.xs);
        self.zs.xor_assign(&other.zs);
        self.phase = (self.phase * other.phase).negated_if(swaps % 2 == 1);
    }

    #[must_use]
    pub fn commutes_with(&self, other: &PauliString) -> bool {
        (self.xs.intersection_count(&other.zs) + self.zs.intersection_count(&other.xs)) % 2 == 0
    }
}

impl Display for PauliString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let y_phase = Phase::from_exponent(u8::try_from((3 * self.y_count()) % 4).unwrap_or(0));
        write!(f, "{}", (self.phase * y_phase).prefix())?;
        let mut first = true;
        for qubit in self.xs.union(&self.zs).iter() {
            let letter = match (self.xs.contains(qubit), self.zs.contains(qubit)) {
                (true, true) => 'Y',
                (true, false) => 'X',
                _ => 'Z',
            };
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{letter}{qubit}")?;
            first = false;
        }
        Ok(())
    }
}
