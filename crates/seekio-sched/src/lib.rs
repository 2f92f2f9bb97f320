//! SeekIO Scheduling - Disk-arm scheduling policy engine
//!
//! This crate evaluates a queue of storage-block access requests against
//! the six classic disk-scheduling policies (FIFO, SSTF, SCAN, C-SCAN,
//! LOOK, C-LOOK) and reports the servicing order and head movement each
//! one produces. Evaluation is pure computation with no I/O and no shared
//! state, so concurrent evaluations never interfere.
//!
//! # Example
//!
//! ```
//! use seekio_sched::{Policy, RequestSet};
//!
//! let queue = RequestSet::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53, Some(200)).unwrap();
//! let result = Policy::Sstf.evaluate(&queue).unwrap();
//!
//! // 65 is the closest pending position to head 53
//! assert_eq!(result.order[0], 65);
//! assert_eq!(result.movements[0], 12);
//! ```
//!
//! Raw textual input goes through [`RequestSet::parse`], and policy names
//! resolve through [`Policy::from_str`](std::str::FromStr); both reject
//! bad input before any scheduling computation starts.

pub mod error;
pub mod policy;
pub mod replay;
pub mod request;
pub mod schedule;

pub use error::{Error, Result};
pub use policy::{Policy, evaluate};
pub use replay::{Replay, ReplayStep};
pub use request::{DEFAULT_DISK_SIZE, RequestSet};
pub use schedule::ScheduleResult;
