// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, distributions::Uniform, prelude::Distribution, rngs::StdRng};
use sparse_sim::{
    Circuit, Gate, Location, Operation, QubitId, SimConfig, StabilizerState, run_shots,
};
use std::hint::black_box;

const SEED: u64 = 1000;
const NUM_QUBITS: usize = 1_224;

fn random_qubit(rng: &mut StdRng) -> QubitId {
    let distr = Uniform::new(0, NUM_QUBITS);
    distr.sample(rng)
}

fn random_pair(rng: &mut StdRng) -> Location {
    let a = random_qubit(rng);
    let offset = Uniform::new(1, NUM_QUBITS).sample(rng);
    Location::Pair(a, (a + offset) % NUM_QUBITS)
}

fn gate(rng: &mut StdRng) -> Operation {
    let distr = Uniform::new(0, 10);
    let gate = match distr.sample(rng) {
        0 => Gate::I,
        1 => Gate::X,
        2 => Gate::Y,
        3 => Gate::Z,
        4 => Gate::H,
        5 => Gate::SZ,
        6 => Gate::F,
        7 => Gate::CX,
        8 => Gate::CZ,
        9 => Gate::SXX,
        _ => unreachable!(),
    };
    let location = if gate.num_qubits() == 1 {
        Location::Single(random_qubit(rng))
    } else {
        random_pair(rng)
    };
    Operation::new(gate, [location])
}

fn random_gates(num_gates: usize) -> Circuit {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut circuit = Circuit::new();
    let tick = circuit.tick();
    for _ in 0..num_gates {
        tick.push(gate(&mut rng));
    }
    circuit
        .tick()
        .push(Operation::new(Gate::MeasureZ, (0..NUM_QUBITS).map(Location::Single)));
    circuit
}

fn ghz(num_qubits: usize) -> Circuit {
    let mut circuit = Circuit::new();
    circuit
        .tick()
        .push(Operation::new(Gate::H, [Location::Single(0)]));
    for target in 1..num_qubits {
        circuit
            .tick()
            .push(Operation::new(Gate::CX, [Location::Pair(0, target)]));
    }
    circuit
        .tick()
        .push(Operation::new(Gate::MeasureZ, (0..num_qubits).map(Location::Single)));
    circuit
}

fn sim_1k_gates(c: &mut Criterion) {
    let circuit = random_gates(1_000);
    c.bench_function("1k gates", |b| {
        b.iter(|| {
            let mut state = StabilizerState::with_config(NUM_QUBITS, SimConfig::DEFAULT.with_seed(SEED));
            black_box(state.run_circuit(black_box(&circuit)))
        });
    });
}

fn sim_20k_gates(c: &mut Criterion) {
    let circuit = random_gates(20_000);
    c.bench_function("20k gates", |b| {
        b.iter(|| {
            let mut state = StabilizerState::with_config(NUM_QUBITS, SimConfig::DEFAULT.with_seed(SEED));
            black_box(state.run_circuit(black_box(&circuit)))
        });
    });
}

fn ghz_measure(c: &mut Criterion) {
    let circuit = ghz(NUM_QUBITS);
    c.bench_function("ghz measure", |b| {
        b.iter(|| {
            let mut state = StabilizerState::with_config(NUM_QUBITS, SimConfig::DEFAULT.with_seed(SEED));
            black_box(state.run_circuit(black_box(&circuit)))
        });
    });
}

fn ghz_100_shots(c: &mut Criterion) {
    let circuit = ghz(64);
    let config = SimConfig::DEFAULT.with_seed(SEED);
    c.bench_function("ghz 100 shots", |b| {
        b.iter(|| black_box(run_shots(64, black_box(&circuit), 100, &config)));
    });
}

fn init_after_entangling(c: &mut Criterion) {
    let mut circuit = ghz(NUM_QUBITS);
    circuit
        .tick()
        .push(Operation::new(Gate::InitPlus, (0..NUM_QUBITS).map(Location::Single)));
    c.bench_function("init after ghz", |b| {
        b.iter(|| {
            let mut state = StabilizerState::with_config(NUM_QUBITS, SimConfig::DEFAULT.with_seed(SEED));
            black_box(state.run_circuit(black_box(&circuit)))
        });
    });
}

criterion_group!(
    benches,
    sim_1k_gates,
    sim_20k_gates,
    ghz_measure,
    ghz_100_shots,
    init_after_entangling
);
criterion_main!(benches);
