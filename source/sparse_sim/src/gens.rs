// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{
    QubitId,
    bit_set::BitSet,
    error::{Error, Result},
    index_set::IndexSet,
    pauli::{Component, PauliString, Phase, render},
};

/// A list of `n` Pauli generators over `n` qubits.
///
/// Generator `g` is `phase(g) · ⊗_q X^{x(g,q)} Z^{z(g,q)}` with the per-qubit
/// factors in `XZ` order. The X/Z support is kept twice: once per qubit
/// (columns) and once per generator (rows), and the two views always agree.
/// The phase is `(−1)^{minus(g)} · 𝑖^{i(g)}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gens {
    num_qubits: usize,
    pub(crate) col_x: Vec<IndexSet>,
    pub(crate) col_z: Vec<IndexSet>,
    pub(crate) row_x: Vec<IndexSet>,
    pub(crate) row_z: Vec<IndexSet>,
    pub(crate) signs_minus: BitSet,
    pub(crate) signs_i: BitSet,
}

impl Gens {
    /// Creates `num_qubits` identity generators.
    #[must_use]
    pub fn new(num_qubits: usize) -> Self {
        Gens {
            num_qubits,
            col_x: vec![IndexSet::new(); num_qubits],
            col_z: vec![IndexSet::new(); num_qubits],
            row_x: vec![IndexSet::new(); num_qubits],
            row_z: vec![IndexSet::new(); num_qubits],
            signs_minus: BitSet::with_capacity(num_qubits),
            signs_i: BitSet::with_capacity(num_qubits),
        }
    }

    /// Generators `Z_0, Z_1, …` with positive signs.
    #[must_use]
    pub fn all_z(num_qubits: usize) -> Self {
        let mut gens = Gens::new(num_qubits);
        for q in 0..num_qubits {
            gens.toggle_z(q, q);
        }
        gens
    }

    /// Generators `X_0, X_1, …` with positive signs.
    #[must_use]
    pub fn all_x(num_qubits: usize) -> Self {
        let mut gens = Gens::new(num_qubits);
        for q in 0..num_qubits {
            gens.toggle_x(q, q);
        }
        gens
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[must_use]
    pub fn col_x(&self, qubit: QubitId) -> &IndexSet {
        &self.col_x[qubit]
    }

    #[must_use]
    pub fn col_z(&self, qubit: QubitId) -> &IndexSet {
        &self.col_z[qubit]
    }

    #[must_use]
    pub fn row_x(&self, gen_id: usize) -> &IndexSet {
        &self.row_x[gen_id]
    }

    #[must_use]
    pub fn row_z(&self, gen_id: usize) -> &IndexSet {
        &self.row_z[gen_id]
    }

    #[must_use]
    pub fn signs_minus(&self) -> &BitSet {
        &self.signs_minus
    }

    #[must_use]
    pub fn signs_i(&self) -> &BitSet {
        &self.signs_i
    }

    #[must_use]
    pub fn phase(&self, gen_id: usize) -> Phase {
        let i = u8::from(self.signs_i.contains(gen_id));
        let minus = 2 * u8::from(self.signs_minus.contains(gen_id));
        Phase::from_exponent(i + minus)
    }

    /// Number of X factors plus number of Z factors, so a `W` counts twice.
    #[must_use]
    pub fn weight(&self, gen_id: usize) -> usize {
        self.row_x[gen_id].len() + self.row_z[gen_id].len()
    }

    #[must_use]
    pub fn pauli_at(&self, gen_id: usize, qubit: QubitId) -> Component {
        Component::from_bits(
            self.row_x[gen_id].contains(qubit),
            self.row_z[gen_id].contains(qubit),
        )
    }

    #[must_use]
    pub fn row(&self, gen_id: usize) -> PauliString {
        PauliString::new(
            self.phase(gen_id),
            self.row_x[gen_id].clone(),
            self.row_z[gen_id].clone(),
        )
    }

    pub(crate) fn toggle_x(&mut self, gen_id: usize, qubit: QubitId) {
        self.col_x[qubit].toggle(gen_id);
        self.row_x[gen_id].toggle(qubit);
    }

    pub(crate) fn toggle_z(&mut self, gen_id: usize, qubit: QubitId) {
        self.col_z[qubit].toggle(gen_id);
        self.row_z[gen_id].toggle(qubit);
    }

    pub(crate) fn set_component(&mut self, gen_id: usize, qubit: QubitId, x: bool, z: bool) {
        if self.row_x[gen_id].contains(qubit) != x {
            self.toggle_x(gen_id, qubit);
        }
        if self.row_z[gen_id].contains(qubit) != z {
            self.toggle_z(gen_id, qubit);
        }
    }

    /// Exchanges the X and Z support on `qubit` for every generator.
    pub(crate) fn swap_components(&mut self, qubit: QubitId) {
        let changed = self.col_x[qubit].symmetric_difference(&self.col_z[qubit]);
        for gen_id in changed.iter() {
            self.row_x[gen_id].toggle(qubit);
            self.row_z[gen_id].toggle(qubit);
        }
        std::mem::swap(&mut self.col_x[qubit], &mut self.col_z[qubit]);
    }

    /// Exchanges the roles of qubits `a` and `b` in every generator.
    pub(crate) fn swap_qubits(&mut self, a: QubitId, b: QubitId) {
        let moved = self.col_x[a].symmetric_difference(&self.col_x[b]);
        for gen_id in moved.iter() {
            self.row_x[gen_id].toggle(a);
            self.row_x[gen_id].toggle(b);
        }
        self.col_x.swap(a, b);

        let moved = self.col_z[a].symmetric_difference(&self.col_z[b]);
        for gen_id in moved.iter() {
            self.row_z[gen_id].toggle(a);
            self.row_z[gen_id].toggle(b);
        }
        self.col_z.swap(a, b);
    }

    pub(crate) fn set_phase(&mut self, gen_id: usize, phase: Phase) {
        let exponent = phase.exponent();
        self.signs_i.assign(gen_id, exponent % 2 == 1);
        self.signs_minus.assign(gen_id, exponent >= 2);
    }

    pub(crate) fn multiply_phase(&mut self, gen_id: usize, phase: Phase) {
        if phase != Phase::One {
            self.set_phase(gen_id, self.phase(gen_id) * phase);
        }
    }

    /// Replaces generator `gen_id` with `row`.
    pub(crate) fn overwrite_row(&mut self, gen_id: usize, row: &PauliString) {
        let x_changes = self.row_x[gen_id].symmetric_difference(&row.xs);
        for qubit in x_changes.iter() {
            self.toggle_x(gen_id, qubit);
        }
        let z_changes = self.row_z[gen_id].symmetric_difference(&row.zs);
        for qubit in z_changes.iter() {
            self.toggle_z(gen_id, qubit);
        }
        self.set_phase(gen_id, row.phase);
    }

    /// Right-multiplies generator `gen_id` by `row`.
    pub(crate) fn multiply_row(&mut self, gen_id: usize, row: &PauliString) {
        // Moving each X of `row` left past the Z factors of the target.
        let swaps = self.row_z[gen_id].intersection_count(&row.xs);
        for qubit in row.xs.iter() {
            self.toggle_x(gen_id, qubit);
        }
        for qubit in row.zs.iter() {
            self.toggle_z(gen_id, qubit);
        }
        self.multiply_phase(gen_id, row.phase.negated_if(swaps % 2 == 1));
    }

    /// Whether generator `gen_id` anticommutes with generator `other_id` of `other`.
    #[must_use]
    pub fn anticommutes(&self, gen_id: usize, other: &Gens, other_id: usize) -> bool {
        let overlaps = self.row_x[gen_id].intersection_count(&other.row_z[other_id])
            + self.row_z[gen_id].intersection_count(&other.row_x[other_id]);
        overlaps % 2 == 1
    }

    /// Renders every generator from the per-qubit columns.
    #[must_use]
    pub fn col_string(&self, print_y: bool) -> Vec<String> {
        let mut components = vec![vec![Component::I; self.num_qubits]; self.num_qubits];
        for qubit in 0..self.num_qubits {
            for gen_id in self.col_x[qubit].iter() {
                components[gen_id][qubit] = Component::X;
            }
            for gen_id in self.col_z[qubit].iter() {
                components[gen_id][qubit] = match components[gen_id][qubit] {
                    Component::X => Component::W,
                    _ => Component::Z,
                };
            }
        }
        components
            .iter()
            .enumerate()
            .map(|(gen_id, row)| render(self.phase(gen_id), row, print_y))
            .collect()
    }

    /// Renders every generator from the per-generator rows.
    #[must_use]
    pub fn row_string(&self, print_y: bool) -> Vec<String> {
        (0..self.num_qubits)
            .map(|gen_id| {
                let row: Vec<Component> = (0..self.num_qubits)
                    .map(|qubit| self.pauli_at(gen_id, qubit))
                    .collect();
                render(self.phase(gen_id), &row, print_y)
            })
            .collect()
    }

    /// Confirms that the column and row views describe the same generators.
    pub fn check_duality(&self) -> Result<()> {
        let views = [
            ("x", &self.col_x, &self.row_x),
            ("z", &self.col_z, &self.row_z),
        ];
        for (name, cols, rows) in views {
            for (qubit, col) in cols.iter().enumerate() {
                if let Some(gen_id) = col
                    .iter()
                    .find(|&g| rows.get(g).is_none_or(|row| !row.contains(qubit))) {
                    return Err(Error::InconsistentTableau(format!(
                        "col_{name}[{qubit}] holds generator {gen_id} but row_{name}[{gen_id}] lacks qubit {qubit}"
                    )));
                }
            }
            for (gen_id, row) in rows.iter().enumerate() {
                if let Some(qubit) = row
                    .iter()
                    .find(|&q| cols.get(q).is_none_or(|col| !col.contains(gen_id))) {
                    return Err(Error::InconsistentTableau(format!(
                        "row_{name}[{gen_id}] holds qubit {qubit} but col_{name}[{qubit}] lacks generator {gen_id}"
                    )));
                }
            }
        }
        Ok(())
    }
}
