// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};

/// Simulation settings shared by a state and every copy made from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the measurement RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Re-verify the tableau invariants after every operation.
    pub check_invariants: bool,
    /// Maximum number of candidates the logical-operator search may test.
    pub search_budget: usize,
}

impl SimConfig {
    pub const DEFAULT: Self = Self {
        seed: None,
        check_invariants: false,
        search_budget: 1_000_000,
    };

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
