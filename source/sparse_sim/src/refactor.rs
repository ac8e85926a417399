// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use log::debug;

use crate::{
    QubitId,
    error::{Error, Result},
    index_set::IndexSet,
    logical_sign::decompose,
    state::StabilizerState,
};

/// How `refactor` picks the generator that becomes the requested operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Choose {
    /// Fewest X and Z factors, then lowest index.
    #[default]
    LowestWeight,
    First,
    Last,
}

impl StabilizerState {
    /// Whether `X^{xs} Z^{zs}`, up to sign, is in the stabilizer group.
    pub fn find_stab(&self, xs: &[QubitId], zs: &[QubitId]) -> Result<bool> {
        let (xs, zs) = self.qubit_sets(xs, zs)?;
        Ok(decompose(&self.stabs, &self.destabs, &xs, &zs).is_some())
    }

    /// Rewrites the generating set so that one generator is exactly
    /// `±X^{xs} Z^{zs}`, using only products of generators. The state is
    /// unchanged.
    ///
    /// `prefer` limits which generators may be chosen and `protected` excludes
    /// generators from being chosen. Returns the index of the rewritten
    /// generator, or `None` when the operator is not in the group or no
    /// eligible generator takes part in its decomposition.
    pub fn refactor(
        &mut self,
        xs: &[QubitId],
        zs: &[QubitId],
        choose: Choose,
        prefer: Option<&IndexSet>,
        protected: Option<&IndexSet>,
    ) -> Result<Option<usize>> {
        let (xs, zs) = self.qubit_sets(xs, zs)?;
        let Some(members) = decompose(&self.stabs, &self.destabs, &xs, &zs) else {
            return Ok(None);
        };

        let mut eligible = members.clone();
        if let Some(prefer) = prefer {
            eligible = eligible.intersection(prefer);
        }
        if let Some(protected) = protected {
            eligible = eligible.difference(protected);
        }
        let chosen = match choose {
            Choose::LowestWeight => eligible
                .iter()
                .min_by_key(|&gen_id| (self.stabs.weight(gen_id), gen_id)),
            Choose::First => eligible.first(),
            Choose::Last => eligible.last(),
        };
        let Some(chosen) = chosen else {
            return Ok(None);
        };

        for other in members.iter().filter(|&g| g != chosen) {
            self.multiply_stabilizer(chosen, other)?;
        }
        if self.stabs.row_x[chosen] != xs || self.stabs.row_z[chosen] != zs {
            return Err(Error::InconsistentTableau(format!(
                "generator {chosen} does not match the requested operator after refactoring"
            )));
        }
        debug!("refactored generator {chosen} from {:?}", members.to_vec());
        Ok(Some(chosen))
    }

    fn qubit_sets(&self, xs: &[QubitId], zs: &[QubitId]) -> Result<(IndexSet, IndexSet)> {
        for &qubit in xs.iter().chain(zs) {
            if qubit >= self.num_qubits() {
                return Err(Error::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits(),
                });
            }
        }
        Ok((xs.iter().copied().collect(), zs.iter().copied().collect()))
    }
}
