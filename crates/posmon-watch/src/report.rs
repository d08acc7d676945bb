// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outcome summary of a single detector pass.

use std::fmt;

/// Counters collected while a detector pass runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Notifications handed to the sink, including failed deliveries.
    pub notifications: usize,
    /// Notifications the sink rejected.
    pub delivery_failures: usize,
    /// Warnings re-armed by the clear sweep.
    pub rearmed: usize,
    /// Records (or corporations) skipped because of a store or upstream error.
    pub skipped: usize,
    /// The upstream feed could not be read; the pass saw nothing.
    pub upstream_failed: bool,
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.upstream_failed {
            return write!(f, "upstream unavailable, nothing checked");
        }
        write!(f, "{} notifications", self.notifications)?;
        if self.delivery_failures > 0 {
            write!(f, " ({} undelivered)", self.delivery_failures)?;
        }
        if self.rearmed > 0 {
            write!(f, ", {} warnings re-armed", self.rearmed)?;
        }
        if self.skipped > 0 {
            write!(f, ", {} skipped", self.skipped)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_summarizes_counters() {
        let report = SweepReport {
            notifications: 3,
            delivery_failures: 1,
            rearmed: 0,
            skipped: 2,
            upstream_failed: false,
        };
        assert_eq!(report.to_string(), "3 notifications (1 undelivered), 2 skipped");

        let failed = SweepReport {
            upstream_failed: true,
            ..SweepReport::default()
        };
        assert_eq!(failed.to_string(), "upstream unavailable, nothing checked");
    }
}
