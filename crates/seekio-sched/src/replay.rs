//! Lazy step-through of a computed schedule
//!
//! The engine produces the whole order/movement sequence up front;
//! consumers that animate head motion replay it one step at a time at
//! whatever cadence they choose. Nothing here recomputes scheduling
//! decisions.

use crate::schedule::ScheduleResult;

/// One serviced position of a schedule replay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayStep {
    /// Head position before the step
    pub from: u32,
    /// Position being serviced
    pub to: u32,
    /// Distance the head travels
    pub distance: u32,
}

/// Iterator over the head path of a schedule, starting at the initial head
pub struct Replay<'a> {
    result: &'a ScheduleResult,
    position: u32,
    index: usize,
}

impl<'a> Replay<'a> {
    /// Start a replay of `result` from the head position the schedule was
    /// computed with
    #[must_use]
    pub const fn new(result: &'a ScheduleResult, head: u32) -> Self {
        Self {
            result,
            position: head,
            index: 0,
        }
    }
}

impl Iterator for Replay<'_> {
    type Item = ReplayStep;

    fn next(&mut self) -> Option<ReplayStep> {
        let to = *self.result.order.get(self.index)?;
        let step = ReplayStep {
            from: self.position,
            to,
            distance: self.position.abs_diff(to),
        };
        self.position = to;
        self.index += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.result.order.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Replay<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Policy;
    use crate::request::RequestSet;

    #[test]
    fn test_replay_agrees_with_movements() {
        let set = RequestSet::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53, Some(200)).unwrap();
        let result = Policy::Scan.evaluate(&set).unwrap();

        let steps: Vec<ReplayStep> = Replay::new(&result, set.head()).collect();

        assert_eq!(steps.len(), result.order.len());
        for (step, (&target, &movement)) in steps
            .iter()
            .zip(result.order.iter().zip(result.movements.iter()))
        {
            assert_eq!(step.to, target);
            assert_eq!(step.distance, movement);
        }
    }

    #[test]
    fn test_replay_chains_positions() {
        let set = RequestSet::new(vec![10, 90], 50, None).unwrap();
        let result = Policy::Fifo.evaluate(&set).unwrap();

        let mut replay = Replay::new(&result, set.head());
        assert_eq!(replay.len(), 2);

        let first = replay.next().unwrap();
        assert_eq!((first.from, first.to, first.distance), (50, 10, 40));

        let second = replay.next().unwrap();
        assert_eq!((second.from, second.to, second.distance), (10, 90, 80));

        assert!(replay.next().is_none());
    }
}
