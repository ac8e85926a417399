// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use rustc_hash::FxHashMap;

use crate::{
    error::Result,
    gates::{Gate, GateParams, Location},
    state::StabilizerState,
};

/// One gate applied at a list of locations.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub gate: Gate,
    pub locations: Vec<Location>,
    pub params: GateParams,
}

impl Operation {
    pub fn new(gate: Gate, locations: impl IntoIterator<Item = Location>) -> Self {
        Operation {
            gate,
            locations: locations.into_iter().collect(),
            params: GateParams::None,
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: GateParams) -> Self {
        self.params = params;
        self
    }
}

/// Operations that happen in the same time step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tick {
    operations: Vec<Operation>,
}

impl Tick {
    pub fn push(&mut self, operation: Operation) -> &mut Self {
        self.operations.push(operation);
        self
    }

    /// Adds `symbol` at `locations`, rejecting unknown symbols immediately.
    pub fn add(
        &mut self,
        symbol: &str,
        locations: impl IntoIterator<Item = Location>,
        params: GateParams,
    ) -> Result<&mut Self> {
        let gate: Gate = symbol.parse()?;
        Ok(self.push(Operation::new(gate, locations).with_params(params)))
    }

    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

/// An ordered list of ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Circuit {
    ticks: Vec<Tick>,
}

impl Circuit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new tick and returns it for filling in.
    pub fn tick(&mut self) -> &mut Tick {
        self.ticks.push(Tick::default());
        let last = self.ticks.len() - 1;
        &mut self.ticks[last]
    }

    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.ticks.iter().flat_map(|tick| tick.operations.iter())
    }
}

impl StabilizerState {
    /// Runs every tick in order and returns the measurement results of each.
    pub fn run_circuit(&mut self, circuit: &Circuit) -> Result<Vec<FxHashMap<Location, u8>>> {
        circuit
            .ticks()
            .iter()
            .map(|tick| {
                let mut results = FxHashMap::default();
                for operation in tick.operations() {
                    results.extend(self.apply(
                        operation.gate,
                        &operation.locations,
                        operation.params,
                    )?);
                }
                Ok(results)
            })
            .collect()
    }
}
