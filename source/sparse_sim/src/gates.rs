// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

pub(crate) mod one_qubit;
pub(crate) mod two_qubit;

#[cfg(test)]
mod tests;

use std::{fmt::Display, str::FromStr};

use enum_iterator::Sequence;

use crate::{
    QubitId,
    error::{Error, Result},
    gens::Gens,
    init::InitState,
    pauli::Axis,
};

pub(crate) type OneQubitFn = fn(&mut Gens, QubitId);
pub(crate) type TwoQubitFn = fn(&mut Gens, QubitId, QubitId);

/// Every operation the simulator understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Sequence)]
pub enum Gate {
    I,
    X,
    Y,
    Z,
    SX,
    SXdg,
    SY,
    SYdg,
    SZ,
    SZdg,
    H,
    H2,
    H3,
    H4,
    H5,
    H6,
    F,
    Fdg,
    F2,
    F2dg,
    F3,
    F3dg,
    F4,
    F4dg,
    II,
    CX,
    CY,
    CZ,
    SWAP,
    G2,
    SXX,
    SXXdg,
    SYY,
    SYYdg,
    SZZ,
    SZZdg,
    RXX,
    RYY,
    RZZ,
    R2XXYYZZ,
    InitZero,
    InitOne,
    InitPlus,
    InitMinus,
    InitPlusI,
    InitMinusI,
    MeasureX,
    MeasureY,
    MeasureZ,
    ForceOutput,
}

/// How a gate is carried out.
#[derive(Clone, Copy)]
pub(crate) enum Kind {
    OneQubit(OneQubitFn),
    TwoQubit(TwoQubitFn),
    Rotation(Axis),
    Rotation3,
    Init(InitState),
    Measure(Axis),
    ForceOutput,
}

impl Gate {
    /// The canonical symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Gate::I => "I",
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::SX => "SX",
            Gate::SXdg => "SXdg",
            Gate::SY => "SY",
            Gate::SYdg => "SYdg",
            Gate::SZ => "SZ",
            Gate::SZdg => "SZdg",
            Gate::H => "H",
            Gate::H2 => "H2",
            Gate::H3 => "H3",
            Gate::H4 => "H4",
            Gate::H5 => "H5",
            Gate::H6 => "H6",
            Gate::F => "F",
            Gate::Fdg => "Fdg",
            Gate::F2 => "F2",
            Gate::F2dg => "F2dg",
            Gate::F3 => "F3",
            Gate::F3dg => "F3dg",
            Gate::F4 => "F4",
            Gate::F4dg => "F4dg",
            Gate::II => "II",
            Gate::CX => "CX",
            Gate::CY => "CY",
            Gate::CZ => "CZ",
            Gate::SWAP => "SWAP",
            Gate::G2 => "G2",
            Gate::SXX => "SXX",
            Gate::SXXdg => "SXXdg",
            Gate::SYY => "SYY",
            Gate::SYYdg => "SYYdg",
            Gate::SZZ => "SZZ",
            Gate::SZZdg => "SZZdg",
            Gate::RXX => "RXX",
            Gate::RYY => "RYY",
            Gate::RZZ => "RZZ",
            Gate::R2XXYYZZ => "R2XXYYZZ",
            Gate::InitZero => "init |0>",
            Gate::InitOne => "init |1>",
            Gate::InitPlus => "init |+>",
            Gate::InitMinus => "init |->",
            Gate::InitPlusI => "init |+i>",
            Gate::InitMinusI => "init |-i>",
            Gate::MeasureX => "measure X",
            Gate::MeasureY => "measure Y",
            Gate::MeasureZ => "measure Z",
            Gate::ForceOutput => "force output",
        }
    }

    /// Number of qubits in each location the gate is applied to.
    #[must_use]
    pub fn num_qubits(self) -> usize {
        match self.kind() {
            Kind::TwoQubit(_) | Kind::Rotation(_) | Kind::Rotation3 => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn is_clifford(self) -> bool {
        matches!(self.kind(), Kind::OneQubit(_) | Kind::TwoQubit(_))
    }

    /// The inverse of a fixed Clifford gate.
    #[must_use]
    pub fn inverse(self) -> Option<Gate> {
        let inverse = match self {
            Gate::SX => Gate::SXdg,
            Gate::SXdg => Gate::SX,
            Gate::SY => Gate::SYdg,
            Gate::SYdg => Gate::SY,
            Gate::SZ => Gate::SZdg,
            Gate::SZdg => Gate::SZ,
            Gate::F => Gate::Fdg,
            Gate::Fdg => Gate::F,
            Gate::F2 => Gate::F2dg,
            Gate::F2dg => Gate::F2,
            Gate::F3 => Gate::F3dg,
            Gate::F3dg => Gate::F3,
            Gate::F4 => Gate::F4dg,
            Gate::F4dg => Gate::F4,
            Gate::SXX => Gate::SXXdg,
            Gate::SXXdg => Gate::SXX,
            Gate::SYY => Gate::SYYdg,
            Gate::SYYdg => Gate::SYY,
            Gate::SZZ => Gate::SZZdg,
            Gate::SZZdg => Gate::SZZ,
            gate if gate.is_clifford() => gate,
            _ => return None,
        };
        Some(inverse)
    }

    pub(crate) fn kind(self) -> Kind {
        use one_qubit as q1;
        use two_qubit as q2;
        match self {
            Gate::I => Kind::OneQubit(q1::identity),
            Gate::X => Kind::OneQubit(q1::x),
            Gate::Y => Kind::OneQubit(q1::y),
            Gate::Z => Kind::OneQubit(q1::z),
            Gate::SX => Kind::OneQubit(q1::sx),
            Gate::SXdg => Kind::OneQubit(q1::sxdg),
            Gate::SY => Kind::OneQubit(q1::sy),
            Gate::SYdg => Kind::OneQubit(q1::sydg),
            Gate::SZ => Kind::OneQubit(q1::sz),
            Gate::SZdg => Kind::OneQubit(q1::szdg),
            Gate::H => Kind::OneQubit(q1::h),
            Gate::H2 => Kind::OneQubit(q1::h2),
            Gate::H3 => Kind::OneQubit(q1::h3),
            Gate::H4 => Kind::OneQubit(q1::h4),
            Gate::H5 => Kind::OneQubit(q1::h5),
            Gate::H6 => Kind::OneQubit(q1::h6),
            Gate::F => Kind::OneQubit(q1::f),
            Gate::Fdg => Kind::OneQubit(q1::fdg),
            Gate::F2 => Kind::OneQubit(q1::f2),
            Gate::F2dg => Kind::OneQubit(q1::f2dg),
            Gate::F3 => Kind::OneQubit(q1::f3),
            Gate::F3dg => Kind::OneQubit(q1::f3dg),
            Gate::F4 => Kind::OneQubit(q1::f4),
            Gate::F4dg => Kind::OneQubit(q1::f4dg),
            Gate::II => Kind::TwoQubit(q2::identity),
            Gate::CX => Kind::TwoQubit(q2::cx),
            Gate::CY => Kind::TwoQubit(q2::cy),
            Gate::CZ => Kind::TwoQubit(q2::cz),
            Gate::SWAP => Kind::TwoQubit(q2::swap),
            Gate::G2 => Kind::TwoQubit(q2::g2),
            Gate::SXX => Kind::TwoQubit(q2::sxx),
            Gate::SXXdg => Kind::TwoQubit(q2::sxxdg),
            Gate::SYY => Kind::TwoQubit(q2::syy),
            Gate::SYYdg => Kind::TwoQubit(q2::syydg),
            Gate::SZZ => Kind::TwoQubit(q2::szz),
            Gate::SZZdg => Kind::TwoQubit(q2::szzdg),
            Gate::RXX => Kind::Rotation(Axis::X),
            Gate::RYY => Kind::Rotation(Axis::Y),
            Gate::RZZ => Kind::Rotation(Axis::Z),
            Gate::R2XXYYZZ => Kind::Rotation3,
            Gate::InitZero => Kind::Init(InitState::Zero),
            Gate::InitOne => Kind::Init(InitState::One),
            Gate::InitPlus => Kind::Init(InitState::Plus),
            Gate::InitMinus => Kind::Init(InitState::Minus),
            Gate::InitPlusI => Kind::Init(InitState::PlusI),
            Gate::InitMinusI => Kind::Init(InitState::MinusI),
            Gate::MeasureX => Kind::Measure(Axis::X),
            Gate::MeasureY => Kind::Measure(Axis::Y),
            Gate::MeasureZ => Kind::Measure(Axis::Z),
            Gate::ForceOutput => Kind::ForceOutput,
        }
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Gate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let gate = match s {
            "I" => Gate::I,
            "X" => Gate::X,
            "Y" => Gate::Y,
            "Z" => Gate::Z,
            "SX" | "Q" | "SqrtX" => Gate::SX,
            "SXdg" | "Qd" | "SqrtXd" => Gate::SXdg,
            "SY" | "R" | "SqrtY" => Gate::SY,
            "SYdg" | "Rd" | "SqrtYd" => Gate::SYdg,
            "SZ" | "S" | "SqrtZ" => Gate::SZ,
            "SZdg" | "Sd" | "SqrtZd" => Gate::SZdg,
            "H" | "H1" | "H+z+x" => Gate::H,
            "H2" | "H-z-x" => Gate::H2,
            "H3" | "H+y-z" => Gate::H3,
            "H4" | "H-y-z" => Gate::H4,
            "H5" | "H-x+y" => Gate::H5,
            "H6" | "H-x-y" => Gate::H6,
            "F" | "F1" => Gate::F,
            "Fdg" | "F1d" | "F1dg" | "Fd" => Gate::Fdg,
            "F2" => Gate::F2,
            "F2dg" | "F2d" => Gate::F2dg,
            "F3" => Gate::F3,
            "F3dg" | "F3d" => Gate::F3dg,
            "F4" => Gate::F4,
            "F4dg" | "F4d" => Gate::F4dg,
            "II" => Gate::II,
            "CX" | "CNOT" => Gate::CX,
            "CY" => Gate::CY,
            "CZ" => Gate::CZ,
            "SWAP" => Gate::SWAP,
            "G2" | "G" => Gate::G2,
            "SXX" | "SqrtXX" => Gate::SXX,
            "SXXdg" | "SqrtXXd" => Gate::SXXdg,
            "SYY" | "SqrtYY" => Gate::SYY,
            "SYYdg" | "SqrtYYd" => Gate::SYYdg,
            "SZZ" | "SqrtZZ" => Gate::SZZ,
            "SZZdg" | "SqrtZZd" => Gate::SZZdg,
            "RXX" => Gate::RXX,
            "RYY" => Gate::RYY,
            "RZZ" => Gate::RZZ,
            "R2XXYYZZ" | "RXXYYZZ" => Gate::R2XXYYZZ,
            "init |0>" | "Init" | "Init +Z" => Gate::InitZero,
            "init |1>" | "Init -Z" => Gate::InitOne,
            "init |+>" | "Init +X" => Gate::InitPlus,
            "init |->" | "Init -X" => Gate::InitMinus,
            "init |+i>" | "Init +Y" => Gate::InitPlusI,
            "init |-i>" | "Init -Y" => Gate::InitMinusI,
            "measure X" | "Measure +X" => Gate::MeasureX,
            "measure Y" | "Measure +Y" => Gate::MeasureY,
            "measure Z" | "Measure" | "Measure +Z" => Gate::MeasureZ,
            "force output" => Gate::ForceOutput,
            _ => return Err(Error::UnknownGate(s.to_string())),
        };
        Ok(gate)
    }
}

/// Where a gate is applied: one qubit, or an ordered pair of qubits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    Single(QubitId),
    Pair(QubitId, QubitId),
}

impl Location {
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Location::Single(_) => 1,
            Location::Pair(..) => 2,
        }
    }

    #[must_use]
    pub fn qubits(self) -> Vec<QubitId> {
        match self {
            Location::Single(q) => vec![q],
            Location::Pair(a, b) => vec![a, b],
        }
    }
}

impl From<QubitId> for Location {
    fn from(value: QubitId) -> Self {
        Location::Single(value)
    }
}

impl From<(QubitId, QubitId)> for Location {
    fn from((a, b): (QubitId, QubitId)) -> Self {
        Location::Pair(a, b)
    }
}

/// Parameters attached to a gate application.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GateParams {
    #[default]
    None,
    /// Outcome to report for a non-deterministic measurement.
    ForcedOutcome(u8),
    Angle(f64),
    Angles([f64; 3]),
    /// The value a `force output` reports.
    Output(u8),
}

impl GateParams {
    /// Forced measurement outcome from an integer; `-1` means none.
    pub fn forced(outcome: i64) -> Result<Self> {
        match outcome {
            -1 => Ok(GateParams::None),
            0 | 1 => Ok(GateParams::ForcedOutcome(u8::from(outcome == 1))),
            _ => Err(Error::InvalidForcedOutcome(outcome)),
        }
    }

    pub(crate) fn forced_outcome(self) -> Option<u8> {
        match self {
            GateParams::ForcedOutcome(outcome) => Some(outcome),
            _ => None,
        }
    }
}
