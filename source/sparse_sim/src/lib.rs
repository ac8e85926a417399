// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A sparse stabilizer simulator.
//!
//! A state on `n` qubits is tracked as `n` stabilizer generators together with
//! `n` destabilizer generators. Both tables store each generator's X and Z
//! support twice, indexed by qubit and by generator, so Clifford gates and
//! measurements only touch the generators that act on the qubits involved.

pub mod bit_set;
pub mod circuit;
pub mod config;
pub mod distance;
pub mod error;
pub mod gates;
pub mod gens;
pub mod index_set;
mod init;
pub mod logical_sign;
mod measurement;
pub mod pauli;
pub mod refactor;
pub mod shots;
pub mod state;

/// A qubit ID.
pub type QubitId = usize;

pub use circuit::{Circuit, Operation, Tick};
pub use config::SimConfig;
pub use distance::find_min_weight_logical;
pub use error::{Error, Result};
pub use gates::{Gate, GateParams, Location};
pub use gens::Gens;
pub use init::InitState;
pub use logical_sign::{LogicalOperator, find_logical_sign};
pub use pauli::{Axis, PauliString, Phase};
pub use refactor::Choose;
pub use shots::run_shots;
pub use state::StabilizerState;
