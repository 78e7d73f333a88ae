use serde::{Deserialize, Serialize};

/// Findings from a validator. Warnings and recommendations are advisory;
/// callers gate "proceed" on `is_valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
  pub is_valid: bool,
  pub warnings: Vec<String>,
  pub recommendations: Vec<String>,
}

impl Default for ValidationReport {
  fn default() -> Self {
    Self {
      is_valid: true,
      warnings: Vec::new(),
      recommendations: Vec::new(),
    }
  }
}

impl ValidationReport {
  pub fn warn(&mut self, message: impl Into<String>) {
    self.warnings.push(message.into());
  }

  /// Record a warning that also blocks the plan
  pub fn reject(&mut self, message: impl Into<String>) {
    self.is_valid = false;
    self.warnings.push(message.into());
  }

  pub fn recommend(&mut self, message: impl Into<String>) {
    self.recommendations.push(message.into());
  }

  /// Combine two reports, keeping `self`'s findings first
  pub fn merge(mut self, other: &ValidationReport) -> Self {
    self.is_valid = self.is_valid && other.is_valid;
    self.warnings.extend(other.warnings.iter().cloned());
    self.recommendations.extend(other.recommendations.iter().cloned());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_merge_keeps_order_and_ands_validity() {
    let mut plan = ValidationReport::default();
    plan.recommend("plan rec");
    let mut volume = ValidationReport::default();
    volume.reject("volume warning");

    let merged = plan.merge(&volume);

    assert!(!merged.is_valid);
    assert_eq!(merged.warnings, vec!["volume warning"]);
    assert_eq!(merged.recommendations, vec!["plan rec"]);
  }
}
