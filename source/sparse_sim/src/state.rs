// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use std::fmt::{Display, Write};

use log::trace;
use rand::{SeedableRng, rngs::StdRng};
use rustc_hash::FxHashMap;

use crate::{
    QubitId,
    config::SimConfig,
    error::{Error, Result},
    gates::{Gate, GateParams, Kind, Location, OneQubitFn, TwoQubitFn, two_qubit},
    gens::Gens,
    init::InitState,
    pauli::Axis,
};

/// A stabilizer state on `n` qubits.
///
/// `stabs` generates the stabilizer group of the state and `destabs` holds a
/// partner for each generator: `destabs[i]` anticommutes with `stabs[i]` and
/// commutes with every other generator of either table.
#[derive(Clone, Debug)]
pub struct StabilizerState {
    num_qubits: usize,
    pub(crate) stabs: Gens,
    pub(crate) destabs: Gens,
    pub(crate) rng: StdRng,
    config: SimConfig,
}

/// A gate with its parameters checked and resolved.
#[derive(Clone, Copy)]
enum Action {
    OneQubit(OneQubitFn),
    TwoQubit(TwoQubitFn),
    TwoQubitSequence([TwoQubitFn; 3]),
    Init(InitState),
    Measure(Axis, Option<u8>),
    Output(u8),
}

impl Action {
    fn resolve(gate: Gate, params: GateParams) -> Result<Self> {
        let action = match gate.kind() {
            Kind::OneQubit(apply) => Action::OneQubit(apply),
            Kind::TwoQubit(apply) => Action::TwoQubit(apply),
            Kind::Rotation(axis) => {
                let GateParams::Angle(angle) = params else {
                    return Err(Error::MissingParams {
                        gate: gate.to_string(),
                        expected: "an angle",
                    });
                };
                Action::TwoQubit(rotation(gate, axis, angle)?)
            }
            Kind::Rotation3 => {
                let GateParams::Angles([xx, yy, zz]) = params else {
                    return Err(Error::MissingParams {
                        gate: gate.to_string(),
                        expected: "three angles",
                    });
                };
                // The three rotations commute, so the order is immaterial.
                Action::TwoQubitSequence([
                    rotation(gate, Axis::Z, zz)?,
                    rotation(gate, Axis::Y, yy)?,
                    rotation(gate, Axis::X, xx)?,
                ])
            }
            Kind::Init(target) => Action::Init(target),
            Kind::Measure(basis) => {
                let forced = params.forced_outcome();
                if let Some(outcome) = forced.filter(|&outcome| outcome > 1) {
                    return Err(Error::InvalidForcedOutcome(outcome.into()));
                }
                Action::Measure(basis, forced)
            }
            Kind::ForceOutput => {
                let GateParams::Output(value) = params else {
                    return Err(Error::MissingParams {
                        gate: gate.to_string(),
                        expected: "an output value",
                    });
                };
                Action::Output(value)
            }
        };
        Ok(action)
    }
}

fn rotation(gate: Gate, axis: Axis, angle: f64) -> Result<TwoQubitFn> {
    two_qubit::rotation(axis, angle).ok_or_else(|| Error::NonCliffordAngle {
        gate: gate.to_string(),
        angle,
    })
}

impl StabilizerState {
    /// Creates the all-zeros state `|0…0⟩`.
    #[must_use]
    pub fn new(num_qubits: usize) -> Self {
        Self::with_config(num_qubits, SimConfig::DEFAULT)
    }

    #[must_use]
    pub fn with_config(num_qubits: usize, config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            num_qubits,
            stabs: Gens::all_z(num_qubits),
            destabs: Gens::all_x(num_qubits),
            rng,
            config,
        }
    }

    /// Returns to `|0…0⟩`. The RNG keeps its current position.
    pub fn reset(&mut self) -> &mut Self {
        self.stabs = Gens::all_z(self.num_qubits);
        self.destabs = Gens::all_x(self.num_qubits);
        self
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[must_use]
    pub fn stabs(&self) -> &Gens {
        &self.stabs
    }

    #[must_use]
    pub fn destabs(&self) -> &Gens {
        &self.destabs
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Applies `symbol` at each location and collects measurement results.
    pub fn run_gate(
        &mut self,
        symbol: &str,
        locations: &[Location],
        params: GateParams,
    ) -> Result<FxHashMap<Location, u8>> {
        let gate: Gate = symbol.parse()?;
        self.apply(gate, locations, params)
    }

    /// Applies `gate` at each location in order. Every location and the
    /// parameters are checked before the state is touched.
    pub fn apply(
        &mut self,
        gate: Gate,
        locations: &[Location],
        params: GateParams,
    ) -> Result<FxHashMap<Location, u8>> {
        trace!("{gate} at {locations:?}");
        for &location in locations {
            self.check_location(gate, location)?;
        }
        let action = Action::resolve(gate, params)?;

        let mut results = FxHashMap::default();
        for &location in locations {
            if let Some(outcome) = self.perform(gate, action, location)? {
                results.insert(location, outcome);
            }
        }

        if self.config.check_invariants {
            self.verify()?;
        }
        Ok(results)
    }

    fn check_qubit(&self, qubit: QubitId) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(Error::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_location(&self, gate: Gate, location: Location) -> Result<()> {
        match location {
            Location::Single(q) => {
                single(gate, location)?;
                self.check_qubit(q)
            }
            Location::Pair(a, b) => {
                pair(gate, location)?;
                self.check_qubit(a)?;
                self.check_qubit(b)
            }
        }
    }

    fn perform(&mut self, gate: Gate, action: Action, location: Location) -> Result<Option<u8>> {
        match action {
            Action::OneQubit(apply) => {
                self.apply_one_qubit(apply, single(gate, location)?);
            }
            Action::TwoQubit(apply) => {
                let (a, b) = pair(gate, location)?;
                self.apply_two_qubit(apply, a, b);
            }
            Action::TwoQubitSequence(sequence) => {
                let (a, b) = pair(gate, location)?;
                for apply in sequence {
                    self.apply_two_qubit(apply, a, b);
                }
            }
            Action::Init(target) => self.initialize(target, single(gate, location)?),
            Action::Measure(basis, forced) => {
                return Ok(Some(self.measure_basis(basis, single(gate, location)?, forced)));
            }
            Action::Output(value) => {
                single(gate, location)?;
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    pub(crate) fn apply_one_qubit(&mut self, apply: OneQubitFn, qubit: QubitId) {
        apply(&mut self.stabs, qubit);
        apply(&mut self.destabs, qubit);
    }

    pub(crate) fn apply_two_qubit(&mut self, apply: TwoQubitFn, a: QubitId, b: QubitId) {
        apply(&mut self.stabs, a, b);
        apply(&mut self.destabs, a, b);
    }

    /// Measures `qubit` in `basis`. A forced outcome only takes effect when
    /// the result is random.
    pub fn measure(&mut self, basis: Axis, qubit: QubitId, forced: Option<u8>) -> Result<u8> {
        self.check_qubit(qubit)?;
        if let Some(outcome) = forced.filter(|&outcome| outcome > 1) {
            return Err(Error::InvalidForcedOutcome(outcome.into()));
        }
        let outcome = self.measure_basis(basis, qubit, forced);
        if self.config.check_invariants {
            self.verify()?;
        }
        Ok(outcome)
    }

    /// Whether measuring `qubit` in `basis` has a determined outcome.
    #[must_use]
    pub fn is_deterministic(&self, basis: Axis, qubit: QubitId) -> bool {
        let col_x = &self.stabs.col_x[qubit];
        let col_z = &self.stabs.col_z[qubit];
        match basis {
            Axis::X => col_z.is_empty(),
            Axis::Y => col_x == col_z,
            Axis::Z => col_x.is_empty(),
        }
    }

    /// Replaces `stabs[target]` with `stabs[target] · stabs[source]` and
    /// `destabs[source]` with `destabs[source] · destabs[target]`, which keeps
    /// every pairing relation.
    pub fn multiply_stabilizer(&mut self, target: usize, source: usize) -> Result<()> {
        self.check_qubit(target)?;
        self.check_qubit(source)?;
        if target == source {
            return Err(Error::RepeatedQubit {
                gate: "multiply_stabilizer".to_string(),
                qubit: target,
            });
        }
        let stab = self.stabs.row(source);
        self.stabs.multiply_row(target, &stab);
        let destab = self.destabs.row(target);
        self.destabs.multiply_row(source, &destab);
        Ok(())
    }

    /// Checks the structural invariants of the tableau.
    pub fn verify(&self) -> Result<()> {
        self.stabs.check_duality()?;
        self.destabs.check_duality()?;
        let n = self.num_qubits;
        for i in 0..n {
            for (name, gens) in [("stabilizer", &self.stabs), ("destabilizer", &self.destabs)] {
                let y_count = gens.row_x[i].intersection_count(&gens.row_z[i]);
                if usize::from(gens.phase(i).exponent() % 2) != y_count % 2 {
                    return Err(Error::InconsistentTableau(format!(
                        "{name} {i} is not Hermitian"
                    )));
                }
            }
            for j in 0..n {
                if j > i && self.stabs.anticommutes(i, &self.stabs, j) {
                    return Err(Error::InconsistentTableau(format!(
                        "stabilizers {i} and {j} anticommute"
                    )));
                }
                if j > i && self.destabs.anticommutes(i, &self.destabs, j) {
                    return Err(Error::InconsistentTableau(format!(
                        "destabilizers {i} and {j} anticommute"
                    )));
                }
                if self.destabs.anticommutes(i, &self.stabs, j) != (i == j) {
                    return Err(Error::InconsistentTableau(format!(
                        "destabilizer {i} and stabilizer {j} break the pairing"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Renders the tableau one generator per line.
    #[must_use]
    pub fn tableau_string(&self, print_y: bool, print_destabs: bool) -> String {
        let mut buffer = String::new();
        let mut tables = vec![("stabs", &self.stabs)];
        if print_destabs {
            tables.push(("destabs", &self.destabs));
        }
        for (name, gens) in tables {
            let _ = writeln!(&mut buffer, "{name}:");
            for line in gens.col_string(print_y) {
                let (prefix, letters) = line.split_at(line.find(['I', 'X', 'Y', 'Z', 'W']).unwrap_or(0));
                let _ = writeln!(&mut buffer, "  {prefix:>2}{letters}");
            }
        }
        buffer
    }
}

impl Display for StabilizerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tableau_string(true, true))
    }
}

fn single(gate: Gate, location: Location) -> Result<QubitId> {
    match location {
        Location::Single(q) if gate.num_qubits() == 1 => Ok(q),
        _ => Err(Error::LocationArity {
            gate: gate.to_string(),
            expected: gate.num_qubits(),
            found: location.arity(),
        }),
    }
}

fn pair(gate: Gate, location: Location) -> Result<(QubitId, QubitId)> {
    match location {
        Location::Pair(a, b) if gate.num_qubits() == 2 => {
            if a == b {
                Err(Error::RepeatedQubit {
                    gate: gate.to_string(),
                    qubit: a,
                })
            } else {
                Ok((a, b))
            }
        }
        _ => Err(Error::LocationArity {
            gate: gate.to_string(),
            expected: gate.num_qubits(),
            found: location.arity(),
        }),
    }
}
