//! Computed schedule results
//!
//! A [`ScheduleResult`] is derived data with no independent identity: it
//! is recomputed fresh on every evaluation and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Outcome of evaluating one policy against one request queue
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Positions in the sequence they are serviced. Same multiset as the
    /// input queue, except C-SCAN additionally visits both disk boundaries.
    pub order: Vec<u32>,
    /// Head travel before servicing each position in `order`
    pub movements: Vec<u32>,
    /// Mean head travel per serviced position, rounded to two decimals
    pub average: f64,
}

impl ScheduleResult {
    /// Walk `order` from the starting head, recording the distance of
    /// each step.
    ///
    /// `order` must be non-empty; every evaluator guarantees this through
    /// the [`RequestSet`](crate::RequestSet) non-empty precondition.
    pub(crate) fn from_order(order: Vec<u32>, head: u32) -> Self {
        let mut position = head;
        let mut movements = Vec::with_capacity(order.len());
        let mut sum: u64 = 0;

        for &target in &order {
            let distance = position.abs_diff(target);
            movements.push(distance);
            sum += u64::from(distance);
            position = target;
        }

        let average = round2(sum as f64 / order.len() as f64);

        Self {
            order,
            movements,
            average,
        }
    }

    /// Exact total head travel across the whole schedule
    #[must_use]
    pub fn total_movement(&self) -> u64 {
        self.movements.iter().map(|&m| u64::from(m)).sum()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_from_head() {
        let result = ScheduleResult::from_order(vec![98, 183, 37], 53);
        assert_eq!(result.movements, vec![45, 85, 146]);
        assert_eq!(result.total_movement(), 276);
        assert_eq!(result.average, 92.0);
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        // 45 + 85 = 130 over 3 steps -> 43.333...
        let result = ScheduleResult::from_order(vec![98, 183, 183], 53);
        assert_eq!(result.average, 43.33);
    }

    #[test]
    fn test_zero_distance_steps_are_kept() {
        let result = ScheduleResult::from_order(vec![53, 53], 53);
        assert_eq!(result.movements, vec![0, 0]);
        assert_eq!(result.average, 0.0);
    }

    #[test]
    fn test_serializes_as_structured_data() {
        let result = ScheduleResult::from_order(vec![65], 53);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["order"][0], 65);
        assert_eq!(json["movements"][0], 12);
        assert_eq!(json["average"], 12.0);
    }
}
