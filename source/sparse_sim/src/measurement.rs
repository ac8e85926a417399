// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use log::debug;
use rand::Rng;

use crate::{
    QubitId,
    gates::one_qubit,
    index_set::IndexSet,
    pauli::{Axis, PauliString, Phase},
    state::StabilizerState,
};

impl StabilizerState {
    pub(crate) fn measure_basis(&mut self, basis: Axis, qubit: QubitId, forced: Option<u8>) -> u8 {
        match basis {
            Axis::Z => self.measure_z(qubit, forced),
            Axis::X => {
                self.apply_one_qubit(one_qubit::h, qubit);
                let outcome = self.measure_z(qubit, forced);
                self.apply_one_qubit(one_qubit::h, qubit);
                outcome
            }
            Axis::Y => {
                // H5 exchanges Y and Z and is its own inverse.
                self.apply_one_qubit(one_qubit::h5, qubit);
                let outcome = self.measure_z(qubit, forced);
                self.apply_one_qubit(one_qubit::h5, qubit);
                outcome
            }
        }
    }

    pub(crate) fn measure_z(&mut self, qubit: QubitId, forced: Option<u8>) -> u8 {
        if self.stabs.col_x[qubit].is_empty() {
            let outcome = self.deterministic_z(qubit);
            if let Some(requested) = forced.filter(|&requested| requested != outcome) {
                debug!(
                    "ignoring forced outcome {requested} for deterministic measurement of qubit {qubit}"
                );
            }
            outcome
        } else {
            let outcome = forced.unwrap_or_else(|| u8::from(self.rng.r#gen::<bool>()));
            self.collapse_z(qubit, outcome);
            outcome
        }
    }

    /// Sign of `Z_qubit` in the stabilizer group, which must contain `±Z_qubit`.
    ///
    /// `Z_qubit` is the product of the generators whose destabilizers have an
    /// X component on the qubit.
    fn deterministic_z(&self, qubit: QubitId) -> u8 {
        let mut minus = 0;
        let mut i_count = 0;
        let mut cumulative_z = IndexSet::new();
        for gen_id in self.destabs.col_x[qubit].iter() {
            minus += usize::from(self.stabs.signs_minus.contains(gen_id));
            i_count += usize::from(self.stabs.signs_i.contains(gen_id));
            minus += cumulative_z.intersection_count(&self.stabs.row_x[gen_id]);
            cumulative_z.xor_assign(&self.stabs.row_z[gen_id]);
        }
        // The product is Hermitian, so the factors of 𝑖 pair up into signs.
        u8::from((minus + i_count / 2) % 2 == 1)
    }

    /// Projects onto the `outcome` eigenspace of `Z_qubit` when it anticommutes
    /// with at least one stabilizer generator.
    fn collapse_z(&mut self, qubit: QubitId, outcome: u8) {
        let anticommuting = self.stabs.col_x[qubit].clone();
        let Some(pivot) = anticommuting
            .iter()
            .min_by_key(|&gen_id| (self.stabs.weight(gen_id), gen_id))
        else {
            return;
        };
        let pivot_row = self.stabs.row(pivot);

        for gen_id in anticommuting.iter().filter(|&g| g != pivot) {
            self.stabs.multiply_row(gen_id, &pivot_row);
        }
        let destabs = self.destabs.col_x[qubit].clone();
        for gen_id in destabs.iter().filter(|&g| g != pivot) {
            self.destabs.multiply_row(gen_id, &pivot_row);
        }
        self.destabs.overwrite_row(pivot, &pivot_row);

        let measured = PauliString::new(
            Phase::One.negated_if(outcome == 1),
            IndexSet::new(),
            IndexSet::singleton(qubit),
        );
        self.stabs.overwrite_row(pivot, &measured);
    }
}
