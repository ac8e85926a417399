// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Write;

use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{circuit::Circuit, config::SimConfig, error::Result, state::StabilizerState};

/// Runs `circuit` from `|0…0⟩` once per shot, in parallel.
///
/// Each shot gets its own state seeded from a master RNG, itself seeded from
/// `config.seed`, so a fixed seed gives the same shots in the same order. A
/// shot is the string of its measurement and output values in circuit order.
pub fn run_shots(
    num_qubits: usize,
    circuit: &Circuit,
    shots: usize,
    config: &SimConfig,
) -> Result<Vec<String>> {
    // Create a random number generator to generate the seed for each individual shot.
    let mut rng = if let Some(seed) = config.seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };

    (0..shots)
        .map(|_| rng.r#gen())
        .collect::<Vec<u64>>()
        .par_iter()
        .map(|&shot_seed| {
            let shot_config = config.clone().with_seed(shot_seed);
            run_shot(num_qubits, circuit, shot_config)
        })
        .collect()
}

fn run_shot(num_qubits: usize, circuit: &Circuit, config: SimConfig) -> Result<String> {
    let mut state = StabilizerState::with_config(num_qubits, config);
    let mut buffer = String::new();
    for operation in circuit.operations() {
        let results = state.apply(operation.gate, &operation.locations, operation.params)?;
        for location in &operation.locations {
            if let Some(outcome) = results.get(location) {
                let _ = write!(&mut buffer, "{outcome}");
            }
        }
    }
    Ok(buffer)
}
