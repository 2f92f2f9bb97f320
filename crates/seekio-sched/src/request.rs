//! Request queue validation and normalization
//!
//! A [`RequestSet`] is the validated input to every policy evaluation:
//! the pending block positions, the starting head position, and the disk
//! geometry. It is immutable after construction; policies that need
//! sorted order sort a private copy and never observe caller aliasing.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Disk size of the reference deployment
pub const DEFAULT_DISK_SIZE: u32 = 200;

/// A validated queue of pending block positions plus disk geometry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSet {
    requests: Vec<u32>,
    head: u32,
    disk_size: Option<u32>,
}

impl RequestSet {
    /// Create a request set from already-numeric input.
    ///
    /// Rejects an empty queue, and any position (request or head) at or
    /// beyond `disk_size` when a disk size is supplied. `None` selects the
    /// unbounded model, valid for every policy that never references the
    /// bound.
    pub fn new(requests: Vec<u32>, head: u32, disk_size: Option<u32>) -> Result<Self> {
        if requests.is_empty() {
            return Err(Error::EmptyQueue);
        }

        if let Some(size) = disk_size {
            for &position in requests.iter().chain(std::iter::once(&head)) {
                if position >= size {
                    return Err(Error::PositionOutOfRange {
                        position,
                        disk_size: size,
                    });
                }
            }
        }

        Ok(Self {
            requests,
            head,
            disk_size,
        })
    }

    /// Parse a comma-separated list of positions (e.g. `"98, 183, 37"`).
    ///
    /// The whole set is rejected on the first token that does not parse as
    /// a non-negative integer; blank tokens count as invalid, not skipped.
    pub fn parse(raw: &str, head: u32, disk_size: Option<u32>) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(Error::EmptyQueue);
        }

        let requests = raw
            .split(',')
            .map(|token| {
                let token = token.trim();
                token.parse::<u32>().map_err(|_| Error::invalid_token(token))
            })
            .collect::<Result<Vec<u32>>>()?;

        Self::new(requests, head, disk_size)
    }

    /// The pending positions, in arrival order
    #[must_use]
    pub fn requests(&self) -> &[u32] {
        &self.requests
    }

    /// The starting head position
    #[must_use]
    pub const fn head(&self) -> u32 {
        self.head
    }

    /// The exclusive upper bound on valid positions, if bounded
    #[must_use]
    pub const fn disk_size(&self) -> Option<u32> {
        self.disk_size
    }

    /// Owned ascending copy of the queue for the directional policies.
    pub(crate) fn sorted_requests(&self) -> Vec<u32> {
        let mut sorted = self.requests.clone();
        sorted.sort_unstable();
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_queue() {
        assert!(matches!(
            RequestSet::new(vec![], 53, None),
            Err(Error::EmptyQueue)
        ));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = RequestSet::new(vec![98, 250], 53, Some(200)).unwrap_err();
        assert!(matches!(
            err,
            Error::PositionOutOfRange {
                position: 250,
                disk_size: 200
            }
        ));
    }

    #[test]
    fn test_new_rejects_out_of_range_head() {
        let err = RequestSet::new(vec![98], 200, Some(200)).unwrap_err();
        assert!(matches!(err, Error::PositionOutOfRange { position: 200, .. }));
    }

    #[test]
    fn test_unbounded_model_skips_range_check() {
        let set = RequestSet::new(vec![98, 5000], 53, None).unwrap();
        assert_eq!(set.requests(), &[98, 5000]);
        assert_eq!(set.disk_size(), None);
    }

    #[test]
    fn test_parse_accepts_whitespace() {
        let set = RequestSet::parse(" 98, 183 ,37 ", 53, Some(200)).unwrap();
        assert_eq!(set.requests(), &[98, 183, 37]);
        assert_eq!(set.head(), 53);
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = RequestSet::parse("98,abc,37", 53, Some(200)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRequestToken { ref token } if token == "abc"
        ));
    }

    #[test]
    fn test_parse_rejects_blank_token() {
        assert!(matches!(
            RequestSet::parse("1,,2", 53, None),
            Err(Error::InvalidRequestToken { .. })
        ));
        assert!(matches!(
            RequestSet::parse("1,2,", 53, None),
            Err(Error::InvalidRequestToken { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(
            RequestSet::parse("   ", 53, None),
            Err(Error::EmptyQueue)
        ));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(matches!(
            RequestSet::parse("98,-3", 53, None),
            Err(Error::InvalidRequestToken { .. })
        ));
    }

    #[test]
    fn test_duplicates_preserved() {
        let set = RequestSet::parse("14,14,37", 53, Some(200)).unwrap();
        assert_eq!(set.requests(), &[14, 14, 37]);
    }

    #[test]
    fn test_sorted_copy_leaves_arrival_order_intact() {
        let set = RequestSet::new(vec![98, 183, 37], 53, None).unwrap();
        assert_eq!(set.sorted_requests(), vec![37, 98, 183]);
        assert_eq!(set.requests(), &[98, 183, 37]);
    }
}
