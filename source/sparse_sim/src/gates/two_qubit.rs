// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Two-qubit Clifford gates and the Clifford angles of the entangling
//! rotations.

use std::f64::consts::FRAC_PI_2;

use super::{TwoQubitFn, one_qubit};
use crate::{QubitId, gens::Gens, pauli::Axis, pauli::Phase};

const ANGLE_TOLERANCE: f64 = 1e-9;

/// The image of a Pauli on the two qubits `(a, b)` as
/// `phase · X_a^{xa} Z_a^{za} X_b^{xb} Z_b^{zb}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PairImage {
    xa: bool,
    za: bool,
    xb: bool,
    zb: bool,
    phase: Phase,
}

impl PairImage {
    const IDENTITY: PairImage = PairImage::new([false; 4], 0);

    const fn new(bits: [bool; 4], exponent: u8) -> Self {
        PairImage {
            xa: bits[0],
            za: bits[1],
            xb: bits[2],
            zb: bits[3],
            phase: Phase::from_exponent(exponent),
        }
    }

    const fn times(self, other: PairImage) -> PairImage {
        PairImage {
            xa: self.xa ^ other.xa,
            za: self.za ^ other.za,
            xb: self.xb ^ other.xb,
            zb: self.zb ^ other.zb,
            phase: self
                .phase
                .times(other.phase)
                .negated_if((self.za && other.xa) ^ (self.zb && other.xb)),
        }
    }
}

/// Images of `X_a`, `Z_a`, `X_b` and `Z_b`, in that order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TwoQubitRule {
    images: [PairImage; 4],
}

const XA: PairImage = PairImage::new([true, false, false, false], 0);
const ZA: PairImage = PairImage::new([false, true, false, false], 0);
const XB: PairImage = PairImage::new([false, false, true, false], 0);
const ZB: PairImage = PairImage::new([false, false, false, true], 0);

impl TwoQubitRule {
    const fn new(xa: PairImage, za: PairImage, xb: PairImage, zb: PairImage) -> Self {
        TwoQubitRule {
            images: [xa, za, xb, zb],
        }
    }

    pub(crate) fn conjugate(&self, gens: &mut Gens, a: QubitId, b: QubitId) {
        let touched = gens.col_x[a]
            .union(&gens.col_z[a])
            .union(&gens.col_x[b].union(&gens.col_z[b]));
        for gen_id in touched.iter() {
            let present = [
                gens.row_x[gen_id].contains(a),
                gens.row_z[gen_id].contains(a),
                gens.row_x[gen_id].contains(b),
                gens.row_z[gen_id].contains(b),
            ];
            let image = present
                .iter()
                .zip(&self.images)
                .filter(|(present, _)| **present)
                .fold(PairImage::IDENTITY, |acc, (_, image)| acc.times(*image));
            gens.set_component(gen_id, a, image.xa, image.za);
            gens.set_component(gen_id, b, image.xb, image.zb);
            gens.multiply_phase(gen_id, image.phase);
        }
    }
}

#[cfg(test)]
pub(crate) const CX: TwoQubitRule = TwoQubitRule::new(
    PairImage::new([true, false, true, false], 0),
    ZA,
    XB,
    PairImage::new([false, true, false, true], 0),
);
#[cfg(test)]
pub(crate) const CZ: TwoQubitRule = TwoQubitRule::new(
    PairImage::new([true, false, false, true], 0),
    ZA,
    PairImage::new([false, true, true, false], 0),
    ZB,
);
#[cfg(test)]
pub(crate) const SWAP: TwoQubitRule = TwoQubitRule::new(XB, ZB, XA, ZA);

pub(crate) const CY: TwoQubitRule = TwoQubitRule::new(
    PairImage::new([true, false, true, true], 1),
    ZA,
    PairImage::new([false, true, true, false], 0),
    PairImage::new([false, true, false, true], 0),
);
pub(crate) const G2: TwoQubitRule = TwoQubitRule::new(
    XB,
    PairImage::new([true, false, false, true], 0),
    XA,
    PairImage::new([false, true, true, false], 0),
);
pub(crate) const SXX: TwoQubitRule = TwoQubitRule::new(
    XA,
    PairImage::new([true, true, true, false], 3),
    XB,
    PairImage::new([true, false, true, true], 3),
);
pub(crate) const SXXDG: TwoQubitRule = TwoQubitRule::new(
    XA,
    PairImage::new([true, true, true, false], 1),
    XB,
    PairImage::new([true, false, true, true], 1),
);
pub(crate) const SYY: TwoQubitRule = TwoQubitRule::new(
    PairImage::new([false, true, true, true], 3),
    PairImage::new([true, false, true, true], 1),
    PairImage::new([true, true, false, true], 3),
    PairImage::new([true, true, true, false], 1),
);
pub(crate) const SYYDG: TwoQubitRule = TwoQubitRule::new(
    PairImage::new([false, true, true, true], 1),
    PairImage::new([true, false, true, true], 3),
    PairImage::new([true, true, false, true], 1),
    PairImage::new([true, true, true, false], 3),
);
pub(crate) const SZZ: TwoQubitRule = TwoQubitRule::new(
    PairImage::new([true, true, false, true], 1),
    ZA,
    PairImage::new([false, true, true, true], 1),
    ZB,
);
pub(crate) const SZZDG: TwoQubitRule = TwoQubitRule::new(
    PairImage::new([true, true, false, true], 3),
    ZA,
    PairImage::new([false, true, true, true], 3),
    ZB,
);

pub(crate) fn identity(_: &mut Gens, _: QubitId, _: QubitId) {}

pub(crate) fn cx(gens: &mut Gens, control: QubitId, target: QubitId) {
    let controls = gens.col_x[control].clone();
    for gen_id in controls.iter() {
        gens.toggle_x(gen_id, target);
    }
    let targets = gens.col_z[target].clone();
    for gen_id in targets.iter() {
        gens.toggle_z(gen_id, control);
    }
}

pub(crate) fn cz(gens: &mut Gens, a: QubitId, b: QubitId) {
    let xs_a = gens.col_x[a].clone();
    let xs_b = gens.col_x[b].clone();
    gens.signs_minus.toggle_all(&xs_a.intersection(&xs_b));
    for gen_id in xs_a.iter() {
        gens.toggle_z(gen_id, b);
    }
    for gen_id in xs_b.iter() {
        gens.toggle_z(gen_id, a);
    }
}

pub(crate) fn swap(gens: &mut Gens, a: QubitId, b: QubitId) {
    gens.swap_qubits(a, b);
}

pub(crate) fn cy(gens: &mut Gens, control: QubitId, target: QubitId) {
    CY.conjugate(gens, control, target);
}

pub(crate) fn g2(gens: &mut Gens, a: QubitId, b: QubitId) {
    G2.conjugate(gens, a, b);
}

pub(crate) fn sxx(gens: &mut Gens, a: QubitId, b: QubitId) {
    SXX.conjugate(gens, a, b);
}

pub(crate) fn sxxdg(gens: &mut Gens, a: QubitId, b: QubitId) {
    SXXDG.conjugate(gens, a, b);
}

pub(crate) fn syy(gens: &mut Gens, a: QubitId, b: QubitId) {
    SYY.conjugate(gens, a, b);
}

pub(crate) fn syydg(gens: &mut Gens, a: QubitId, b: QubitId) {
    SYYDG.conjugate(gens, a, b);
}

pub(crate) fn szz(gens: &mut Gens, a: QubitId, b: QubitId) {
    SZZ.conjugate(gens, a, b);
}

pub(crate) fn szzdg(gens: &mut Gens, a: QubitId, b: QubitId) {
    SZZDG.conjugate(gens, a, b);
}

fn xx(gens: &mut Gens, a: QubitId, b: QubitId) {
    one_qubit::x(gens, a);
    one_qubit::x(gens, b);
}

fn yy(gens: &mut Gens, a: QubitId, b: QubitId) {
    one_qubit::y(gens, a);
    one_qubit::y(gens, b);
}

fn zz(gens: &mut Gens, a: QubitId, b: QubitId) {
    one_qubit::z(gens, a);
    one_qubit::z(gens, b);
}

/// Number of quarter turns in `angle`, if it is a multiple of π/2.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn quarter_turns(angle: f64) -> Option<u8> {
    if !angle.is_finite() {
        return None;
    }
    let turns = angle / FRAC_PI_2;
    let rounded = turns.round();
    if (turns - rounded).abs() > ANGLE_TOLERANCE {
        return None;
    }
    Some(rounded.rem_euclid(4.0) as u8)
}

/// The Clifford implementing `exp(−𝑖θ/2 · P⊗P)` for a multiple of π/2,
/// up to global phase.
pub(crate) fn rotation(axis: Axis, angle: f64) -> Option<TwoQubitFn> {
    let turns = quarter_turns(angle)?;
    let gate: TwoQubitFn = match (axis, turns) {
        (_, 0) => identity,
        (Axis::X, 1) => sxx,
        (Axis::X, 2) => xx,
        (Axis::X, _) => sxxdg,
        (Axis::Y, 1) => syy,
        (Axis::Y, 2) => yy,
        (Axis::Y, _) => syydg,
        (Axis::Z, 1) => szz,
        (Axis::Z, 2) => zz,
        (Axis::Z, _) => szzdg,
    };
    Some(gate)
}
