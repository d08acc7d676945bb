// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The periodic jobs the scheduler runs and operators can trigger.

use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Job {
    /// Starbase alert sweep.
    Structures,
    /// Starbase warning re-arm sweep.
    ClearSweep,
    Trades,
    Contracts,
    Industry,
}

impl Job {
    pub const ALL: [Job; 5] = [
        Job::Structures,
        Job::ClearSweep,
        Job::Trades,
        Job::Contracts,
        Job::Industry,
    ];

    /// Label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Job::Structures => "structures",
            Job::ClearSweep => "clear-sweep",
            Job::Trades => "trades",
            Job::Contracts => "contracts",
            Job::Industry => "industry",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_kebab_case_names() {
        for job in Job::ALL {
            assert_eq!(Job::from_str(job.as_str()).unwrap(), job);
            assert_eq!(job.to_string(), job.as_str());
        }
        assert!(Job::from_str("pos").is_err());
    }
}
