// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{f64::consts::PI, fmt::Write};

use expect_test::expect;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    Gate, GateParams, Kind, Location, OneQubitFn, TwoQubitFn,
    one_qubit::{self, OneQubitRule},
    two_qubit::{self, TwoQubitRule},
};
use crate::{
    config::SimConfig,
    error::Error,
    gens::Gens,
    pauli::{Axis, Phase},
    state::StabilizerState,
};

/// Generators `X0`, `Z0`, `Y0` on a single qubit.
fn single_qubit_paulis() -> Gens {
    let mut gens = Gens::new(3);
    gens.set_component(0, 0, true, false);
    gens.set_component(1, 0, false, true);
    gens.set_component(2, 0, true, true);
    gens.set_phase(2, Phase::I);
    gens
}

/// Generators `X0`, `Z0`, `X1`, `Z1`.
fn two_qubit_paulis() -> Gens {
    let mut gens = Gens::new(4);
    gens.set_component(0, 0, true, false);
    gens.set_component(1, 0, false, true);
    gens.set_component(2, 1, true, false);
    gens.set_component(3, 1, false, true);
    gens
}

fn scrambled(num_qubits: usize, seed: u64) -> StabilizerState {
    let mut state = StabilizerState::with_config(num_qubits, SimConfig::DEFAULT.with_seed(seed));
    let mut rng = StdRng::seed_from_u64(seed);
    let gates = [Gate::H, Gate::SZ, Gate::SX, Gate::F, Gate::CX, Gate::CZ, Gate::SYY];
    for _ in 0..60 {
        let gate = gates[rng.gen_range(0..gates.len())];
        let a = rng.gen_range(0..num_qubits);
        let location = if gate.num_qubits() == 1 {
            Location::Single(a)
        } else {
            Location::Pair(a, (a + rng.gen_range(1..num_qubits)) % num_qubits)
        };
        state
            .apply(gate, &[location], GateParams::None)
            .expect("gate should apply");
    }
    state
}

#[test]
fn single_qubit_conjugation_table() {
    let mut output = String::new();
    for gate in enum_iterator::all::<Gate>() {
        let Kind::OneQubit(apply) = gate.kind() else {
            continue;
        };
        let mut gens = single_qubit_paulis();
        apply(&mut gens, 0);
        writeln!(
            output,
            "{gate}: X -> {}, Z -> {}, Y -> {}",
            gens.row(0),
            gens.row(1),
            gens.row(2)
        )
        .expect("write should succeed");
    }
    expect![[r#"
        I: X -> X0, Z -> Z0, Y -> Y0
        X: X -> X0, Z -> -Z0, Y -> -Y0
        Y: X -> -X0, Z -> -Z0, Y -> Y0
        Z: X -> -X0, Z -> Z0, Y -> -Y0
        SX: X -> X0, Z -> -Y0, Y -> Z0
        SXdg: X -> X0, Z -> Y0, Y -> -Z0
        SY: X -> -Z0, Z -> X0, Y -> Y0
        SYdg: X -> Z0, Z -> -X0, Y -> Y0
        SZ: X -> Y0, Z -> Z0, Y -> -X0
        SZdg: X -> -Y0, Z -> Z0, Y -> X0
        H: X -> Z0, Z -> X0, Y -> -Y0
        H2: X -> -Z0, Z -> -X0, Y -> -Y0
        H3: X -> Y0, Z -> -Z0, Y -> X0
        H4: X -> -Y0, Z -> -Z0, Y -> -X0
        H5: X -> -X0, Z -> Y0, Y -> Z0
        H6: X -> -X0, Z -> -Y0, Y -> -Z0
        F: X -> Y0, Z -> X0, Y -> Z0
        Fdg: X -> Z0, Z -> Y0, Y -> X0
        F2: X -> -Z0, Z -> Y0, Y -> -X0
        F2dg: X -> -Y0, Z -> -X0, Y -> Z0
        F3: X -> Y0, Z -> -X0, Y -> -Z0
        F3dg: X -> -Z0, Z -> -Y0, Y -> X0
        F4: X -> Z0, Z -> -Y0, Y -> -X0
        F4dg: X -> -Y0, Z -> X0, Y -> -Z0
    "#]]
    .assert_eq(&output);
}

#[test]
fn two_qubit_conjugation_table() {
    let mut output = String::new();
    for gate in enum_iterator::all::<Gate>() {
        let Kind::TwoQubit(apply) = gate.kind() else {
            continue;
        };
        let mut gens = two_qubit_paulis();
        apply(&mut gens, 0, 1);
        writeln!(
            output,
            "{gate}: {} | {} | {} | {}",
            gens.row(0),
            gens.row(1),
            gens.row(2),
            gens.row(3)
        )
        .expect("write should succeed");
    }
    expect![[r#"
        II: X0 | Z0 | X1 | Z1
        CX: X0 X1 | Z0 | X1 | Z0 Z1
        CY: X0 Y1 | Z0 | Z0 X1 | Z0 Z1
        CZ: X0 Z1 | Z0 | Z0 X1 | Z1
        SWAP: X1 | Z1 | X0 | Z0
        G2: X1 | X0 Z1 | X0 | Z0 X1
        SXX: X0 | -Y0 X1 | X1 | -X0 Y1
        SXXdg: X0 | Y0 X1 | X1 | X0 Y1
        SYY: -Z0 Y1 | X0 Y1 | -Y0 Z1 | Y0 X1
        SYYdg: Z0 Y1 | -X0 Y1 | Y0 Z1 | -Y0 X1
        SZZ: Y0 Z1 | Z0 | Z0 Y1 | Z1
        SZZdg: -Y0 Z1 | Z0 | -Z0 Y1 | Z1
    "#]]
    .assert_eq(&output);
}

#[test]
fn sign_only_updates_match_their_rules() {
    let state = scrambled(5, 11);
    for gens in [state.stabs(), state.destabs()] {
        for qubit in 0..5 {
            let cases: [(OneQubitFn, OneQubitRule); 4] = [
                (one_qubit::x, one_qubit::X),
                (one_qubit::y, one_qubit::Y),
                (one_qubit::z, one_qubit::Z),
                (one_qubit::h, one_qubit::H),
            ];
            for (fast, rule) in cases {
                let mut expected = gens.clone();
                rule.conjugate(&mut expected, qubit);
                let mut actual = gens.clone();
                fast(&mut actual, qubit);
                assert_eq!(actual, expected);
            }
        }
    }
}

#[test]
fn two_qubit_fast_paths_match_their_rules() {
    let state = scrambled(5, 23);
    for gens in [state.stabs(), state.destabs()] {
        for (a, b) in [(0, 1), (1, 0), (2, 4), (4, 3)] {
            let cases: [(TwoQubitFn, TwoQubitRule); 3] = [
                (two_qubit::cx, two_qubit::CX),
                (two_qubit::cz, two_qubit::CZ),
                (two_qubit::swap, two_qubit::SWAP),
            ];
            for (fast, rule) in cases {
                let mut expected = gens.clone();
                rule.conjugate(&mut expected, a, b);
                let mut actual = gens.clone();
                fast(&mut actual, a, b);
                assert_eq!(actual, expected);
            }
        }
    }
}

#[test]
fn every_clifford_is_undone_by_its_inverse() {
    let original = scrambled(4, 5);
    for gate in enum_iterator::all::<Gate>().filter(|gate| gate.is_clifford()) {
        let inverse = gate.inverse().expect("Clifford gates have inverses");
        let location = if gate.num_qubits() == 1 {
            Location::Single(2)
        } else {
            Location::Pair(3, 1)
        };
        let mut state = original.clone();
        state
            .apply(gate, &[location], GateParams::None)
            .expect("gate should apply");
        state.verify().expect("tableau should stay valid");
        state
            .apply(inverse, &[location], GateParams::None)
            .expect("inverse should apply");
        assert_eq!(state.stabs(), original.stabs(), "{gate}");
        assert_eq!(state.destabs(), original.destabs(), "{gate}");
    }
}

#[test]
fn symbols_and_aliases_parse() {
    for gate in enum_iterator::all::<Gate>() {
        assert_eq!(gate.symbol().parse::<Gate>(), Ok(gate));
    }
    for (alias, gate) in [
        ("CNOT", Gate::CX),
        ("S", Gate::SZ),
        ("Sd", Gate::SZdg),
        ("Q", Gate::SX),
        ("R", Gate::SY),
        ("H-x+y", Gate::H5),
        ("F1d", Gate::Fdg),
        ("G", Gate::G2),
        ("SqrtZZ", Gate::SZZ),
        ("Init +Y", Gate::InitPlusI),
        ("Measure", Gate::MeasureZ),
    ] {
        assert_eq!(alias.parse::<Gate>(), Ok(gate));
    }
}

#[test]
fn unknown_symbol_is_rejected() {
    assert_eq!(
        "T".parse::<Gate>(),
        Err(Error::UnknownGate("T".to_string()))
    );
}

#[test]
fn quarter_turns_accept_only_multiples_of_half_pi() {
    assert_eq!(two_qubit::quarter_turns(0.0), Some(0));
    assert_eq!(two_qubit::quarter_turns(PI / 2.0), Some(1));
    assert_eq!(two_qubit::quarter_turns(PI), Some(2));
    assert_eq!(two_qubit::quarter_turns(-PI / 2.0), Some(3));
    assert_eq!(two_qubit::quarter_turns(5.0 * PI / 2.0), Some(1));
    assert_eq!(two_qubit::quarter_turns(PI / 4.0), None);
    assert_eq!(two_qubit::quarter_turns(f64::NAN), None);
}

#[test]
fn rotations_resolve_to_fixed_gates() {
    let base = scrambled(3, 7);
    let cases: [(Axis, f64, TwoQubitFn); 4] = [
        (Axis::X, PI / 2.0, two_qubit::sxx),
        (Axis::X, -PI / 2.0, two_qubit::sxxdg),
        (Axis::Y, PI / 2.0, two_qubit::syy),
        (Axis::Z, 3.0 * PI / 2.0, two_qubit::szzdg),
    ];
    for (axis, angle, fixed) in cases {
        let rotation = two_qubit::rotation(axis, angle).expect("angle should be Clifford");
        let mut expected = base.stabs().clone();
        fixed(&mut expected, 0, 2);
        let mut actual = base.stabs().clone();
        rotation(&mut actual, 0, 2);
        assert_eq!(actual, expected);
    }

    let mut expected = base.stabs().clone();
    one_qubit::z(&mut expected, 0);
    one_qubit::z(&mut expected, 2);
    let mut actual = base.stabs().clone();
    two_qubit::rotation(Axis::Z, PI).expect("angle should be Clifford")(&mut actual, 0, 2);
    assert_eq!(actual, expected);

    assert!(two_qubit::rotation(Axis::Y, 0.3).is_none());
}

#[test]
fn forced_params_from_integers() {
    assert_eq!(GateParams::forced(-1), Ok(GateParams::None));
    assert_eq!(GateParams::forced(1), Ok(GateParams::ForcedOutcome(1)));
    assert_eq!(GateParams::forced(2), Err(Error::InvalidForcedOutcome(2)));
}
