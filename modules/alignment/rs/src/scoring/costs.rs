use derive_more::Constructor;
use eyre::Result;

use crate::{Cost, Error};

/// Edit operation costs for the weighted Damerau–Levenshtein distance.
#[derive(Copy, Clone, PartialEq, Debug, Constructor)]
pub struct Costs<C: Cost> {
    pub delete: C,
    pub insert: C,
    pub substitute: C,
    pub transpose: C,
}

impl<C: Cost> Costs<C> {
    /// All operations cost one.
    pub fn unit() -> Self {
        Self::new(C::one(), C::one(), C::one(), C::one())
    }

    /// Rejects negative (or incomparable, e.g. NaN) costs.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("delete", self.delete),
            ("insert", self.insert),
            ("substitute", self.substitute),
            ("transpose", self.transpose),
        ] {
            // Written as a negated comparison to reject NaN as well
            if !(value >= C::zero()) {
                log::debug!("Rejected {name} cost: {value:?}");
                return Err(Error::InvalidConfiguration {
                    reason: format!("{name} cost must be non-negative, got {value:?}"),
                }
                .into());
            }
        }
        Ok(())
    }

    /// The largest cost of a plain deletion or insertion.
    pub(crate) fn max_indel(&self) -> C {
        if self.delete >= self.insert {
            self.delete
        } else {
            self.insert
        }
    }
}

impl<C: Cost> Default for Costs<C> {
    fn default() -> Self {
        Self::unit()
    }
}
