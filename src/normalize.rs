//! Post-processing for generated task lists: weight normalization and tier gating.

use serde::{Deserialize, Serialize};

use crate::domain::{GeneratedTask, MembershipTier};
use crate::util::round_half_up;

/// Rescale raw weights to shares of 100 and number the tasks 1..=N in list order.
///
/// Each weight becomes `round(weight / total * 100)` (half-up). Rounding drift of a
/// point or so is left as is. A zero total maps every weight to 0.
pub fn assign_order_and_normalize(mut tasks: Vec<GeneratedTask>) -> Vec<GeneratedTask> {
  let total: u64 = tasks.iter().map(|t| t.weight as u64).sum();
  for (i, task) in tasks.iter_mut().enumerate() {
    task.weight = if total == 0 {
      0
    } else {
      round_half_up(task.weight as f64 / total as f64 * 100.0)
    };
    task.display_order = i as u32 + 1;
  }
  tasks
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TierPartition {
  pub accessible: Vec<GeneratedTask>,
  pub locked: Vec<GeneratedTask>,
}

/// Split tasks into those the tier can open and those shown as locked.
/// Order inside each half follows the input order.
pub fn filter_tasks_by_tier(tasks: &[GeneratedTask], tier: MembershipTier) -> TierPartition {
  let (accessible, locked): (Vec<GeneratedTask>, Vec<GeneratedTask>) = tasks
    .iter()
    .cloned()
    .partition(|t| !t.requires_pro || tier.is_elevated());
  TierPartition { accessible, locked }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{TaskCategory, TaskType};

  fn task(title: &str, weight: u32) -> GeneratedTask {
    GeneratedTask::new(title, "", TaskType::SelfTracked, TaskCategory::Reading, weight)
  }

  #[test]
  fn weights_are_rescaled_to_hundred() {
    let out = assign_order_and_normalize(vec![task("a", 10), task("b", 30), task("c", 60)]);
    let weights: Vec<u32> = out.iter().map(|t| t.weight).collect();
    assert_eq!(weights, vec![10, 30, 60]);
    assert_eq!(out.iter().map(|t| t.weight).sum::<u32>(), 100);
  }

  #[test]
  fn uneven_weights_drift_at_most_one() {
    let out = assign_order_and_normalize(vec![task("a", 1), task("b", 1), task("c", 1)]);
    assert!(out.iter().all(|t| t.weight == 33));
    let sum: i64 = out.iter().map(|t| t.weight as i64).sum();
    assert!((sum - 100).abs() <= 1);
  }

  #[test]
  fn zero_total_maps_to_zero() {
    let out = assign_order_and_normalize(vec![task("a", 0), task("b", 0)]);
    assert!(out.iter().all(|t| t.weight == 0));
    assert_eq!(out[1].display_order, 2);
  }

  #[test]
  fn display_order_is_dense_and_follows_position() {
    let mut input = vec![task("a", 5), task("b", 5), task("c", 5), task("d", 5)];
    input[2].display_order = 99;
    let out = assign_order_and_normalize(input);
    let order: Vec<u32> = out.iter().map(|t| t.display_order).collect();
    assert_eq!(order, vec![1, 2, 3, 4]);
    assert_eq!(out[2].title, "c");
  }

  #[test]
  fn explorer_sees_pro_tasks_locked() {
    let tasks = vec![task("free", 50), task("mentor", 50).pro()];
    let split = filter_tasks_by_tier(&tasks, MembershipTier::Explorer);
    assert_eq!(split.accessible.len(), 1);
    assert_eq!(split.locked.len(), 1);
    assert_eq!(split.locked[0].title, "mentor");

    for tier in [MembershipTier::Insider, MembershipTier::Visionary] {
      let split = filter_tasks_by_tier(&tasks, tier);
      assert_eq!(split.accessible.len(), 2);
      assert!(split.locked.is_empty());
    }
  }

  #[test]
  fn partition_leaves_input_untouched() {
    let tasks = vec![task("a", 1).pro(), task("b", 2)];
    let before = tasks.clone();
    let _ = filter_tasks_by_tier(&tasks, MembershipTier::Explorer);
    assert_eq!(tasks, before);
  }
}
