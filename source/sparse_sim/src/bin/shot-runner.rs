// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Samples a GHZ circuit and prints a histogram of the measured bitstrings.

use std::{collections::BTreeMap, path::PathBuf};

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use sparse_sim::{Circuit, GateParams, Location, SimConfig, StabilizerState, run_shots};

#[derive(Parser)]
#[command(name = "shot-runner", about = "Sample a GHZ circuit on the sparse stabilizer simulator")]
struct Cli {
    /// Number of qubits in the GHZ state.
    #[arg(long, default_value_t = 3)]
    qubits: usize,

    /// Number of shots.
    #[arg(long, default_value_t = 100)]
    shots: usize,

    /// Seed for the shot RNG; overrides the one in `--config`.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with simulator settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the tableau of the prepared state before sampling.
    #[arg(long)]
    print_tableau: bool,
}

fn ghz(qubits: usize) -> miette::Result<Circuit> {
    let mut circuit = Circuit::new();
    circuit.tick().add("init |0>", (0..qubits).map(Location::Single), GateParams::None)?;
    circuit.tick().add("H", [Location::Single(0)], GateParams::None)?;
    for target in 1..qubits {
        circuit.tick().add("CX", [Location::Pair(0, target)], GateParams::None)?;
    }
    circuit.tick().add("measure Z", (0..qubits).map(Location::Single), GateParams::None)?;
    Ok(circuit)
}

fn main() -> miette::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<SimConfig>(&contents).into_diagnostic()?
        }
        None => SimConfig::DEFAULT,
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    let circuit = ghz(cli.qubits)?;
    if cli.print_tableau {
        let mut state = StabilizerState::with_config(cli.qubits, config.clone());
        let prepare = circuit.ticks().len().saturating_sub(1);
        for tick in &circuit.ticks()[..prepare] {
            for operation in tick.operations() {
                state.apply(operation.gate, &operation.locations, operation.params)?;
            }
        }
        print!("{state}");
    }

    let results = run_shots(cli.qubits, &circuit, cli.shots, &config)?;
    let mut histogram = BTreeMap::new();
    for shot in results {
        *histogram.entry(shot).or_insert(0usize) += 1;
    }
    for (bits, count) in histogram {
        println!("{bits} {count}");
    }
    Ok(())
}
