// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{QubitId, gates::one_qubit, state::StabilizerState};

/// The single-qubit states a qubit can be prepared in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InitState {
    Zero,
    One,
    Plus,
    Minus,
    PlusI,
    MinusI,
}

impl StabilizerState {
    /// Prepares `qubit` in `target`, leaving the other qubits' reduced
    /// state alone.
    pub(crate) fn initialize(&mut self, target: InitState, qubit: QubitId) {
        let bit = u8::from(target == InitState::One || target == InitState::Minus);
        let outcome = self.measure_z(qubit, Some(bit));
        if outcome != bit {
            self.apply_one_qubit(one_qubit::x, qubit);
        }
        match target {
            InitState::Zero | InitState::One => {}
            InitState::Plus | InitState::Minus => self.apply_one_qubit(one_qubit::h, qubit),
            InitState::PlusI => self.apply_one_qubit(one_qubit::h5, qubit),
            InitState::MinusI => self.apply_one_qubit(one_qubit::h6, qubit),
        }
    }
}
