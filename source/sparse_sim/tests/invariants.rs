// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use proptest::prelude::*;
use sparse_sim::{Axis, Gate, GateParams, Location, SimConfig, StabilizerState};

const NUM_QUBITS: usize = 5;

fn gate_pool() -> Vec<Gate> {
    let mut pool: Vec<Gate> = enum_iterator::all::<Gate>()
        .filter(|gate| gate.is_clifford())
        .collect();
    pool.extend([
        Gate::InitZero,
        Gate::InitOne,
        Gate::InitPlus,
        Gate::InitMinus,
        Gate::InitPlusI,
        Gate::InitMinusI,
        Gate::MeasureX,
        Gate::MeasureY,
        Gate::MeasureZ,
    ]);
    pool
}

fn arbitrary_steps() -> impl Strategy<Value = Vec<(usize, usize, usize)>> {
    prop::collection::vec((any::<usize>(), 0..NUM_QUBITS, 1..NUM_QUBITS), 0..48)
}

fn arbitrary_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

fn location(gate: Gate, qubit: usize, offset: usize) -> Location {
    if gate.num_qubits() == 1 {
        Location::Single(qubit)
    } else {
        Location::Pair(qubit, (qubit + offset) % NUM_QUBITS)
    }
}

fn run(seed: u64, steps: &[(usize, usize, usize)]) -> StabilizerState {
    let pool = gate_pool();
    let mut state = StabilizerState::with_config(NUM_QUBITS, SimConfig::DEFAULT.with_seed(seed));
    for &(choice, qubit, offset) in steps {
        let gate = pool[choice % pool.len()];
        state
            .apply(gate, &[location(gate, qubit, offset)], GateParams::None)
            .expect("gate should apply");
        state.verify().expect("tableau should stay valid");
    }
    state
}

proptest! {
    #[test]
    fn every_step_keeps_the_tableau_valid(seed in any::<u64>(), steps in arbitrary_steps()) {
        let state = run(seed, &steps);
        for gens in [state.stabs(), state.destabs()] {
            prop_assert_eq!(gens.col_string(true), gens.row_string(true));
        }
    }

    #[test]
    fn repeated_measurement_agrees(
        seed in any::<u64>(),
        steps in arbitrary_steps(),
        basis in arbitrary_axis(),
        qubit in 0..NUM_QUBITS,
    ) {
        let mut state = run(seed, &steps);
        let first = state.measure(basis, qubit, None).expect("measure should succeed");
        prop_assert!(state.is_deterministic(basis, qubit));
        let second = state.measure(basis, qubit, None).expect("measure should succeed");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn involutions_restore_the_tableau(
        seed in any::<u64>(),
        steps in arbitrary_steps(),
        choice in 0..7usize,
        qubit in 0..NUM_QUBITS,
        offset in 1..NUM_QUBITS,
    ) {
        let original = run(seed, &steps);
        let gate = [Gate::H, Gate::X, Gate::Y, Gate::Z, Gate::SWAP, Gate::CX, Gate::CZ][choice];
        let location = location(gate, qubit, offset);
        let mut state = original.clone();
        for _ in 0..2 {
            state
                .apply(gate, &[location], GateParams::None)
                .expect("gate should apply");
        }
        prop_assert_eq!(state.stabs(), original.stabs());
        prop_assert_eq!(state.destabs(), original.destabs());
    }

    #[test]
    fn copies_do_not_alias(seed in any::<u64>(), steps in arbitrary_steps(), qubit in 0..NUM_QUBITS) {
        let original = run(seed, &steps);
        let before = original.tableau_string(false, true);
        let mut copy = original.clone();
        copy.apply(Gate::MeasureX, &[Location::Single(qubit)], GateParams::None)
            .expect("measure should succeed");
        copy.apply(Gate::H, &[Location::Single(qubit)], GateParams::None)
            .expect("H should succeed");
        prop_assert_eq!(original.tableau_string(false, true), before);
    }
}
