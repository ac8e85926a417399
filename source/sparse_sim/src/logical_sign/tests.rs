// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{LogicalOperator, find_logical_sign};
use crate::{
    config::SimConfig,
    error::Error,
    gates::{Gate, GateParams, Location},
    state::StabilizerState,
};

fn bell() -> StabilizerState {
    let mut state = StabilizerState::with_config(2, SimConfig::DEFAULT.with_seed(9));
    state
        .apply(Gate::H, &[Location::Single(0)], GateParams::None)
        .expect("H should succeed");
    state
        .apply(Gate::CX, &[Location::Pair(0, 1)], GateParams::None)
        .expect("CX should succeed");
    state
}

fn logical(symbol: &str, qubits: &[usize]) -> LogicalOperator {
    LogicalOperator::from_paulis([(symbol, qubits.to_vec())])
}

#[test]
fn bell_state_signs() {
    let state = bell();
    assert_eq!(find_logical_sign(&state, &logical("X", &[0, 1]), None), Ok(0));
    assert_eq!(find_logical_sign(&state, &logical("Z", &[0, 1]), None), Ok(0));
    assert_eq!(find_logical_sign(&state, &logical("Y", &[0, 1]), None), Ok(1));
}

#[test]
fn mixed_letters_in_one_tick() {
    let mut state = bell();
    state
        .apply(Gate::SZ, &[Location::Single(1)], GateParams::None)
        .expect("SZ should succeed");
    // SZ takes XX to XY.
    let operator = LogicalOperator::from_paulis([("X", vec![0]), ("Y", vec![1])]);
    assert_eq!(find_logical_sign(&state, &operator, None), Ok(0));
}

#[test]
fn single_qubit_eigenstates() {
    for (init, letter, expected) in [
        (Gate::InitOne, "Z", 1),
        (Gate::InitPlus, "X", 0),
        (Gate::InitMinus, "X", 1),
        (Gate::InitPlusI, "Y", 0),
        (Gate::InitMinusI, "Y", 1),
    ] {
        let mut state = StabilizerState::new(1);
        state
            .apply(init, &[Location::Single(0)], GateParams::None)
            .expect("init should succeed");
        assert_eq!(
            find_logical_sign(&state, &logical(letter, &[0]), None),
            Ok(expected),
            "{init}"
        );
    }
}

#[test]
fn delogical_must_anticommute() {
    let state = bell();
    assert_eq!(
        find_logical_sign(&state, &logical("X", &[0, 1]), Some(&logical("Z", &[0]))),
        Ok(0)
    );
    assert_eq!(
        find_logical_sign(&state, &logical("X", &[0, 1]), Some(&logical("Z", &[0, 1]))),
        Err(Error::LogicalsCommute)
    );
}

#[test]
fn operators_outside_the_group_are_rejected() {
    let state = bell();
    assert_eq!(
        find_logical_sign(&state, &logical("X", &[0]), None),
        Err(Error::NotInStabilizerGroup)
    );
}

#[test]
fn malformed_logicals_are_rejected() {
    let state = bell();
    let mut two_ticks = logical("X", &[0]);
    two_ticks.push_tick([("X", vec![1])]);
    assert_eq!(
        find_logical_sign(&state, &two_ticks, None),
        Err(Error::MultiTickLogical(2))
    );
    assert_eq!(
        find_logical_sign(&state, &logical("W", &[0]), None),
        Err(Error::UnsupportedPauli("W".to_string()))
    );
    assert_eq!(
        find_logical_sign(
            &state,
            &LogicalOperator::from_paulis([("X", vec![0]), ("Z", vec![0])]),
            None
        ),
        Err(Error::DuplicateLogicalQubit(0))
    );
    assert_eq!(
        find_logical_sign(&state, &logical("Z", &[5]), None),
        Err(Error::QubitOutOfRange {
            qubit: 5,
            num_qubits: 2,
        })
    );
}

#[test]
fn empty_logical_is_the_identity() {
    assert_eq!(
        find_logical_sign(&bell(), &LogicalOperator::new(), None),
        Ok(0)
    );
}
