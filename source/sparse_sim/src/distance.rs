// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use itertools::Itertools;
use log::debug;

use crate::{
    QubitId,
    error::{Error, Result},
    index_set::IndexSet,
    logical_sign::decompose,
    pauli::{Axis, PauliString},
    state::StabilizerState,
};

/// Finds a lowest-weight Pauli operator on `qubits` that commutes with every
/// check generator without being a product of check generators.
///
/// `checks` holds the stabilizer generator indices of the code's check group;
/// the other stabilizers fix the encoded state and do not constrain the search.
/// Candidates are tried by weight, then by qubit combination, then by letters
/// in X, Y, Z order. Returns `None` if nothing up to `max_weight` qualifies.
/// Gives up with [`Error::SearchExhausted`] after the configured budget.
pub fn find_min_weight_logical(
    state: &StabilizerState,
    checks: &IndexSet,
    qubits: &[QubitId],
    max_weight: usize,
) -> Result<Option<PauliString>> {
    let num_qubits = state.num_qubits();
    if let Some(&qubit) = qubits.iter().find(|&&q| q >= num_qubits) {
        return Err(Error::QubitOutOfRange { qubit, num_qubits });
    }
    if let Some(check) = checks.last().filter(|&g| g >= num_qubits) {
        return Err(Error::QubitOutOfRange {
            qubit: check,
            num_qubits,
        });
    }
    let qubits: Vec<QubitId> = qubits.iter().copied().unique().collect();
    let budget = state.config().search_budget;
    let mut tried = 0;

    for weight in 1..=max_weight.min(qubits.len()) {
        for support in qubits.iter().copied().combinations(weight) {
            let letters = (0..weight).map(|_| [Axis::X, Axis::Y, Axis::Z]);
            for axes in letters.multi_cartesian_product() {
                if tried == budget {
                    return Err(Error::SearchExhausted(budget));
                }
                tried += 1;

                let candidate = candidate(&support, &axes);
                if commutes_with_checks(state, checks, &candidate)
                    && !in_check_group(state, checks, &candidate)
                {
                    debug!("found logical {candidate} after {tried} candidates");
                    return Ok(Some(candidate));
                }
            }
        }
    }
    Ok(None)
}

fn candidate(support: &[QubitId], axes: &[Axis]) -> PauliString {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut zs = Vec::new();
    for (&qubit, axis) in support.iter().zip(axes) {
        match axis {
            Axis::X => xs.push(qubit),
            Axis::Y => ys.push(qubit),
            Axis::Z => zs.push(qubit),
        }
    }
    PauliString::from_letters(&xs, &ys, &zs)
}

fn commutes_with_checks(state: &StabilizerState, checks: &IndexSet, operator: &PauliString) -> bool {
    let stabs = state.stabs();
    let mut anticommuting = IndexSet::new();
    for qubit in operator.xs.iter() {
        anticommuting.xor_assign(stabs.col_z(qubit));
    }
    for qubit in operator.zs.iter() {
        anticommuting.xor_assign(stabs.col_x(qubit));
    }
    anticommuting.is_disjoint(checks)
}

/// Stabilizer generators are independent, so the decomposition is unique.
fn in_check_group(state: &StabilizerState, checks: &IndexSet, operator: &PauliString) -> bool {
    decompose(state.stabs(), state.destabs(), &operator.xs, &operator.zs)
        .is_some_and(|members| members.difference(checks).is_empty())
}
