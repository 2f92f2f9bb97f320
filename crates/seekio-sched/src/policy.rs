//! The six scheduling policies and their dispatch facade
//!
//! Each policy is a pure function from a [`RequestSet`] to a
//! [`ScheduleResult`]. The four directional policies (SCAN, C-SCAN, LOOK,
//! C-LOOK) share one sweep skeleton: sort an owned copy of the queue,
//! split it at the first position at or above the head, service the
//! upward run first, then the downward run. They differ only in whether
//! the downward run is reversed (the head turns around) and whether the
//! disk boundaries are visited in between (the head wraps to the start).

use crate::error::{Error, Result};
use crate::request::RequestSet;
use crate::schedule::ScheduleResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Closed set of supported scheduling policies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Service requests in arrival order
    Fifo,
    /// Shortest seek time first: always the closest remaining request
    Sstf,
    /// Sweep upward, then reverse through the remaining requests
    Scan,
    /// Sweep upward to the disk edge, wrap to position 0, sweep up again
    Cscan,
    /// SCAN without overshooting past the outermost pending request
    Look,
    /// C-SCAN without the boundary jump
    Clook,
}

impl Policy {
    /// All policies in canonical order, for comparison runs
    pub const ALL: [Self; 6] = [
        Self::Fifo,
        Self::Sstf,
        Self::Scan,
        Self::Cscan,
        Self::Look,
        Self::Clook,
    ];

    /// The lowercase wire name of this policy
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Sstf => "sstf",
            Self::Scan => "scan",
            Self::Cscan => "cscan",
            Self::Look => "look",
            Self::Clook => "clook",
        }
    }

    /// Whether this policy visits the disk boundaries and therefore needs
    /// a bounded [`RequestSet`]
    #[must_use]
    pub const fn requires_disk_size(self) -> bool {
        matches!(self, Self::Cscan)
    }

    /// Evaluate this policy against a request queue.
    ///
    /// This is the single entry point external callers use. Stateless and
    /// side-effect free; concurrent calls never interfere.
    pub fn evaluate(self, set: &RequestSet) -> Result<ScheduleResult> {
        if self.requires_disk_size() && set.disk_size().is_none() {
            return Err(Error::DiskSizeRequired {
                policy: self.as_str(),
            });
        }

        let result = match self {
            Self::Fifo => fifo(set),
            Self::Sstf => sstf(set),
            Self::Scan | Self::Look => directional_sweep(set, Sweep::REVERSING),
            Self::Cscan => directional_sweep(
                set,
                Sweep {
                    reverse_left: false,
                    boundaries: set.disk_size(),
                },
            ),
            Self::Clook => directional_sweep(set, Sweep::WRAPPING),
        };

        debug!(
            policy = self.as_str(),
            queue = set.requests().len(),
            head = set.head(),
            total = result.total_movement(),
            "schedule computed"
        );

        Ok(result)
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "sstf" => Ok(Self::Sstf),
            "scan" => Ok(Self::Scan),
            "cscan" => Ok(Self::Cscan),
            "look" => Ok(Self::Look),
            "clook" => Ok(Self::Clook),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up a policy by wire name and evaluate it in one call.
///
/// An unrecognized name fails with [`Error::UnknownPolicy`] before any
/// scheduling computation happens.
pub fn evaluate(name: &str, set: &RequestSet) -> Result<ScheduleResult> {
    name.parse::<Policy>()?.evaluate(set)
}

/// Shape of a directional sweep
struct Sweep {
    /// Service the below-head run highest-first (the head reverses) rather
    /// than lowest-first (the head wraps to the start)
    reverse_left: bool,
    /// Disk size whose boundaries (`size - 1`, then `0`) are visited
    /// between the two runs
    boundaries: Option<u32>,
}

impl Sweep {
    const REVERSING: Self = Self {
        reverse_left: true,
        boundaries: None,
    };

    const WRAPPING: Self = Self {
        reverse_left: false,
        boundaries: None,
    };
}

fn fifo(set: &RequestSet) -> ScheduleResult {
    ScheduleResult::from_order(set.requests().to_vec(), set.head())
}

fn sstf(set: &RequestSet) -> ScheduleResult {
    let mut remaining = set.requests().to_vec();
    let mut order = Vec::with_capacity(remaining.len());
    let mut position = set.head();

    // min_by_key keeps the first of equally-close requests, so the lowest
    // index among the remaining set wins ties.
    while let Some((index, _)) = remaining
        .iter()
        .enumerate()
        .min_by_key(|&(_, &request)| position.abs_diff(request))
    {
        let request = remaining.remove(index);
        order.push(request);
        position = request;
    }

    ScheduleResult::from_order(order, set.head())
}

fn directional_sweep(set: &RequestSet, sweep: Sweep) -> ScheduleResult {
    let sorted = set.sorted_requests();
    let split = sorted.partition_point(|&request| request < set.head());
    let (left, right) = sorted.split_at(split);

    let mut order = Vec::with_capacity(sorted.len() + 2);
    order.extend_from_slice(right);
    if let Some(disk_size) = sweep.boundaries {
        order.push(disk_size - 1);
        order.push(0);
    }
    if sweep.reverse_left {
        order.extend(left.iter().rev());
    } else {
        order.extend_from_slice(left);
    }

    ScheduleResult::from_order(order, set.head())
}
