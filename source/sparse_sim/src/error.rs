// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use miette::Diagnostic;
use thiserror::Error;

use crate::QubitId;

#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum Error {
    #[error("unknown gate symbol `{0}`")]
    #[diagnostic(code("SparseSim.UnknownGate"))]
    UnknownGate(String),

    #[error("gate `{gate}` acts on {expected} qubit(s) but was given {found}")]
    #[diagnostic(code("SparseSim.LocationArity"))]
    LocationArity {
        gate: String,
        expected: usize,
        found: usize,
    },

    #[error("qubit {qubit} is out of range for a state of {num_qubits} qubits")]
    #[diagnostic(code("SparseSim.QubitOutOfRange"))]
    QubitOutOfRange { qubit: QubitId, num_qubits: usize },

    #[error("gate `{gate}` was given qubit {qubit} twice")]
    #[diagnostic(code("SparseSim.RepeatedQubit"))]
    RepeatedQubit { gate: String, qubit: QubitId },

    #[error("gate `{gate}` requires {expected}")]
    #[diagnostic(code("SparseSim.MissingParams"))]
    MissingParams { gate: String, expected: &'static str },

    #[error("gate `{gate}` with angle {angle} is not a Clifford operation")]
    #[diagnostic(
        code("SparseSim.NonCliffordAngle"),
        help("angles must be integer multiples of π/2")
    )]
    NonCliffordAngle { gate: String, angle: f64 },

    #[error("forced outcome must be 0 or 1, got {0}")]
    #[diagnostic(code("SparseSim.InvalidForcedOutcome"))]
    InvalidForcedOutcome(i64),

    #[error("logical operators spanning {0} ticks are not supported")]
    #[diagnostic(code("SparseSim.MultiTickLogical"))]
    MultiTickLogical(usize),

    #[error("`{0}` is not a Pauli symbol")]
    #[diagnostic(code("SparseSim.UnsupportedPauli"))]
    UnsupportedPauli(String),

    #[error("qubit {0} appears more than once in the logical operator")]
    #[diagnostic(code("SparseSim.DuplicateLogicalQubit"))]
    DuplicateLogicalQubit(QubitId),

    #[error("the logical operator commutes with its delogical partner")]
    #[diagnostic(code("SparseSim.LogicalsCommute"))]
    LogicalsCommute,

    #[error("the operator is not in the stabilizer group")]
    #[diagnostic(code("SparseSim.NotInStabilizerGroup"))]
    NotInStabilizerGroup,

    #[error("the logical operator has an imaginary sign")]
    #[diagnostic(code("SparseSim.ImaginarySign"))]
    ImaginarySign,

    #[error("tableau is inconsistent: {0}")]
    #[diagnostic(code("SparseSim.InconsistentTableau"))]
    InconsistentTableau(String),

    #[error("logical search gave up after {0} candidates")]
    #[diagnostic(code("SparseSim.SearchExhausted"))]
    SearchExhausted(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
