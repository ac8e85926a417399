// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Single-qubit Clifford gates.
//!
//! Each gate is described by where it sends `X` and `Z` under conjugation.
//! The image of `W = XZ` follows from those two, so a rule touches only the
//! generators with support on the qubit. The Paulis get dedicated updates
//! since they only change signs.

use crate::{QubitId, gens::Gens, pauli::Phase};

/// The image of a single-qubit Pauli as `phase · X^x Z^z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Image {
    pub(crate) x: bool,
    pub(crate) z: bool,
    pub(crate) phase: Phase,
}

impl Image {
    const fn new(x: bool, z: bool, phase: Phase) -> Self {
        Image { x, z, phase }
    }

    /// `self · other`, with the sign from commuting `other`'s X past `self`'s Z.
    pub(crate) const fn times(self, other: Image) -> Image {
        Image {
            x: self.x ^ other.x,
            z: self.z ^ other.z,
            phase: self
                .phase
                .times(other.phase)
                .negated_if(self.z && other.x),
        }
    }
}

const PX: Image = Image::new(true, false, Phase::One);
const MX: Image = Image::new(true, false, Phase::MinusOne);
const PZ: Image = Image::new(false, true, Phase::One);
const MZ: Image = Image::new(false, true, Phase::MinusOne);
// Y = 𝑖W
const PY: Image = Image::new(true, true, Phase::I);
const MY: Image = Image::new(true, true, Phase::MinusI);

#[derive(Clone, Copy, Debug)]
pub(crate) struct OneQubitRule {
    x: Image,
    z: Image,
    w: Image,
}

impl OneQubitRule {
    const fn new(x: Image, z: Image) -> Self {
        OneQubitRule {
            x,
            z,
            w: x.times(z),
        }
    }

    pub(crate) fn image(&self, x: bool, z: bool) -> Image {
        match (x, z) {
            (false, false) => Image::new(false, false, Phase::One),
            (true, false) => self.x,
            (false, true) => self.z,
            (true, true) => self.w,
        }
    }

    pub(crate) fn conjugate(&self, gens: &mut Gens, qubit: QubitId) {
        let touched = gens.col_x[qubit].union(&gens.col_z[qubit]);
        for gen_id in touched.iter() {
            let image = self.image(
                gens.row_x[gen_id].contains(qubit),
                gens.row_z[gen_id].contains(qubit),
            );
            gens.set_component(gen_id, qubit, image.x, image.z);
            gens.multiply_phase(gen_id, image.phase);
        }
    }
}

#[cfg(test)]
pub(crate) const X: OneQubitRule = OneQubitRule::new(PX, MZ);
#[cfg(test)]
pub(crate) const Y: OneQubitRule = OneQubitRule::new(MX, MZ);
#[cfg(test)]
pub(crate) const Z: OneQubitRule = OneQubitRule::new(MX, PZ);
#[cfg(test)]
pub(crate) const H: OneQubitRule = OneQubitRule::new(PZ, PX);

pub(crate) const H2: OneQubitRule = OneQubitRule::new(MZ, MX);
pub(crate) const H3: OneQubitRule = OneQubitRule::new(PY, MZ);
pub(crate) const H4: OneQubitRule = OneQubitRule::new(MY, MZ);
pub(crate) const H5: OneQubitRule = OneQubitRule::new(MX, PY);
pub(crate) const H6: OneQubitRule = OneQubitRule::new(MX, MY);
pub(crate) const SX: OneQubitRule = OneQubitRule::new(PX, MY);
pub(crate) const SXDG: OneQubitRule = OneQubitRule::new(PX, PY);
pub(crate) const SY: OneQubitRule = OneQubitRule::new(MZ, PX);
pub(crate) const SYDG: OneQubitRule = OneQubitRule::new(PZ, MX);
pub(crate) const SZ: OneQubitRule = OneQubitRule::new(PY, PZ);
pub(crate) const SZDG: OneQubitRule = OneQubitRule::new(MY, PZ);
pub(crate) const F: OneQubitRule = OneQubitRule::new(PY, PX);
pub(crate) const FDG: OneQubitRule = OneQubitRule::new(PZ, PY);
pub(crate) const F2: OneQubitRule = OneQubitRule::new(MZ, PY);
pub(crate) const F2DG: OneQubitRule = OneQubitRule::new(MY, MX);
pub(crate) const F3: OneQubitRule = OneQubitRule::new(PY, MX);
pub(crate) const F3DG: OneQubitRule = OneQubitRule::new(MZ, MY);
pub(crate) const F4: OneQubitRule = OneQubitRule::new(PZ, MY);
pub(crate) const F4DG: OneQubitRule = OneQubitRule::new(MY, PX);

pub(crate) fn identity(_: &mut Gens, _: QubitId) {}

/// Negates every generator with a Z component on the qubit.
pub(crate) fn x(gens: &mut Gens, qubit: QubitId) {
    gens.signs_minus.toggle_all(&gens.col_z[qubit]);
}

pub(crate) fn y(gens: &mut Gens, qubit: QubitId) {
    let odd = gens.col_x[qubit].symmetric_difference(&gens.col_z[qubit]);
    gens.signs_minus.toggle_all(&odd);
}

pub(crate) fn z(gens: &mut Gens, qubit: QubitId) {
    gens.signs_minus.toggle_all(&gens.col_x[qubit]);
}

/// `X ↔ Z`, and `W → −W`.
pub(crate) fn h(gens: &mut Gens, qubit: QubitId) {
    let both = gens.col_x[qubit].intersection(&gens.col_z[qubit]);
    gens.signs_minus.toggle_all(&both);
    gens.swap_components(qubit);
}

pub(crate) fn h2(gens: &mut Gens, qubit: QubitId) {
    H2.conjugate(gens, qubit);
}

pub(crate) fn h3(gens: &mut Gens, qubit: QubitId) {
    H3.conjugate(gens, qubit);
}

pub(crate) fn h4(gens: &mut Gens, qubit: QubitId) {
    H4.conjugate(gens, qubit);
}

pub(crate) fn h5(gens: &mut Gens, qubit: QubitId) {
    H5.conjugate(gens, qubit);
}

pub(crate) fn h6(gens: &mut Gens, qubit: QubitId) {
    H6.conjugate(gens, qubit);
}

pub(crate) fn sx(gens: &mut Gens, qubit: QubitId) {
    SX.conjugate(gens, qubit);
}

pub(crate) fn sxdg(gens: &mut Gens, qubit: QubitId) {
    SXDG.conjugate(gens, qubit);
}

pub(crate) fn sy(gens: &mut Gens, qubit: QubitId) {
    SY.conjugate(gens, qubit);
}

pub(crate) fn sydg(gens: &mut Gens, qubit: QubitId) {
    SYDG.conjugate(gens, qubit);
}

pub(crate) fn sz(gens: &mut Gens, qubit: QubitId) {
    SZ.conjugate(gens, qubit);
}

pub(crate) fn szdg(gens: &mut Gens, qubit: QubitId) {
    SZDG.conjugate(gens, qubit);
}

pub(crate) fn f(gens: &mut Gens, qubit: QubitId) {
    F.conjugate(gens, qubit);
}

pub(crate) fn fdg(gens: &mut Gens, qubit: QubitId) {
    FDG.conjugate(gens, qubit);
}

pub(crate) fn f2(gens: &mut Gens, qubit: QubitId) {
    F2.conjugate(gens, qubit);
}

pub(crate) fn f2dg(gens: &mut Gens, qubit: QubitId) {
    F2DG.conjugate(gens, qubit);
}

pub(crate) fn f3(gens: &mut Gens, qubit: QubitId) {
    F3.conjugate(gens, qubit);
}

pub(crate) fn f3dg(gens: &mut Gens, qubit: QubitId) {
    F3DG.conjugate(gens, qubit);
}

pub(crate) fn f4(gens: &mut Gens, qubit: QubitId) {
    F4.conjugate(gens, qubit);
}

pub(crate) fn f4dg(gens: &mut Gens, qubit: QubitId) {
    F4DG.conjugate(gens, qubit);
}
