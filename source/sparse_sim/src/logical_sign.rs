// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use log::debug;
use rustc_hash::FxHashSet;

use crate::{
    QubitId,
    error::{Error, Result},
    gens::Gens,
    index_set::IndexSet,
    pauli::PauliString,
    state::StabilizerState,
};

/// A logical Pauli operator written as `(symbol, qubits)` pairs per tick,
/// for example `[("X", [0, 1]), ("Z", [4])]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogicalOperator {
    ticks: Vec<Vec<(String, Vec<QubitId>)>>,
}

impl LogicalOperator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A logical operator that acts within a single tick.
    #[must_use]
    pub fn from_paulis<S: Into<String>>(paulis: impl IntoIterator<Item = (S, Vec<QubitId>)>) -> Self {
        let mut logical = Self::new();
        logical.push_tick(paulis);
        logical
    }

    pub fn push_tick<S: Into<String>>(
        &mut self,
        paulis: impl IntoIterator<Item = (S, Vec<QubitId>)>,
    ) -> &mut Self {
        self.ticks.push(
            paulis
                .into_iter()
                .map(|(symbol, qubits)| (symbol.into(), qubits))
                .collect(),
        );
        self
    }

    #[must_use]
    pub fn ticks(&self) -> &[Vec<(String, Vec<QubitId>)>] {
        &self.ticks
    }

    /// The Hermitian Pauli operator this describes.
    pub fn to_pauli(&self, num_qubits: usize) -> Result<PauliString> {
        let paulis = match self.ticks.as_slice() {
            [] => return Ok(PauliString::default()),
            [paulis] => paulis,
            ticks => return Err(Error::MultiTickLogical(ticks.len())),
        };

        let mut seen = FxHashSet::default();
        let (mut xs, mut ys, mut zs) = (Vec::new(), Vec::new(), Vec::new());
        for (symbol, qubits) in paulis {
            let letters = match symbol.as_str() {
                "X" => &mut xs,
                "Y" => &mut ys,
                "Z" => &mut zs,
                _ => return Err(Error::UnsupportedPauli(symbol.clone())),
            };
            for &qubit in qubits {
                if qubit >= num_qubits {
                    return Err(Error::QubitOutOfRange { qubit, num_qubits });
                }
                if !seen.insert(qubit) {
                    return Err(Error::DuplicateLogicalQubit(qubit));
                }
                letters.push(qubit);
            }
        }
        Ok(PauliString::from_letters(&xs, &ys, &zs))
    }
}

/// The generators whose product has X support `xs` and Z support `zs`,
/// or `None` if no product does.
///
/// The operator anticommutes with destabilizer `g` exactly when generator `g`
/// takes part in the product.
pub(crate) fn decompose(stabs: &Gens, destabs: &Gens, xs: &IndexSet, zs: &IndexSet) -> Option<IndexSet> {
    let mut members = IndexSet::new();
    for qubit in xs.iter() {
        members.xor_assign(&destabs.col_z[qubit]);
    }
    for qubit in zs.iter() {
        members.xor_assign(&destabs.col_x[qubit]);
    }
    let product = product(stabs, &members);
    (product.xs == *xs && product.zs == *zs).then_some(members)
}

/// The ordered product of the given generators.
pub(crate) fn product(stabs: &Gens, members: &IndexSet) -> PauliString {
    let mut product = PauliString::default();
    for gen_id in members.iter() {
        product.multiply(&stabs.row(gen_id));
    }
    product
}

/// Returns 0 if the stabilizer group contains `logical` and 1 if it contains
/// its negation.
///
/// When `delogical` is given it must anticommute with `logical`.
pub fn find_logical_sign(
    state: &StabilizerState,
    logical: &LogicalOperator,
    delogical: Option<&LogicalOperator>,
) -> Result<u8> {
    let num_qubits = state.num_qubits();
    let operator = logical.to_pauli(num_qubits)?;
    if let Some(delogical) = delogical {
        if operator.commutes_with(&delogical.to_pauli(num_qubits)?) {
            return Err(Error::LogicalsCommute);
        }
    }

    let members = decompose(&state.stabs, &state.destabs, &operator.xs, &operator.zs)
        .ok_or(Error::NotInStabilizerGroup)?;
    let product = product(&state.stabs, &members);
    let relative = product.phase * operator.phase.inverse();
    if !relative.is_real() {
        return Err(Error::ImaginarySign);
    }
    debug!("{operator} is the product of generators {:?}", members.to_vec());
    Ok(relative.exponent() / 2)
}
