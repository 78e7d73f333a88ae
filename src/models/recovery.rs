use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
  Poor,
  Fair,
  Good,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalorieTarget {
  #[serde(rename = "deficit")]
  Deficit,
  #[serde(rename = "maintenance")]
  Maintenance,
  #[serde(rename = "maintenance+200")]
  LeanSurplus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepTargets {
  pub duration_hours: f64,
  pub quality: SleepQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProtocol {
  /// g/kg bodyweight
  pub protein_g_per_kg: f64,
  pub calories: CalorieTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRecovery {
  pub sessions_per_week: u32,
  pub duration_min: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressManagement {
  pub techniques: Vec<String>,
}

/// Recovery habits the client commits to alongside the program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecoveryProtocols {
  pub sleep: SleepTargets,
  pub nutrition: NutritionProtocol,
  pub active_recovery: ActiveRecovery,
  pub stress_management: StressManagement,
}

impl Default for RecoveryProtocols {
  fn default() -> Self {
    Self {
      sleep: SleepTargets {
        duration_hours: 8.0,
        quality: SleepQuality::Good,
      },
      nutrition: NutritionProtocol {
        protein_g_per_kg: 1.6,
        calories: CalorieTarget::LeanSurplus,
      },
      active_recovery: ActiveRecovery {
        sessions_per_week: 2,
        duration_min: 30,
      },
      stress_management: StressManagement::default(),
    }
  }
}

impl RecoveryProtocols {
  /// Recovery adequacy score, 0-100
  pub fn adequacy_score(&self) -> u32 {
    let mut score = 0;

    if self.sleep.duration_hours >= 7.0 {
      score += 25;
    }
    if self.sleep.quality == SleepQuality::Good {
      score += 15;
    }
    if self.nutrition.protein_g_per_kg >= 1.6 {
      score += 20;
    }
    if self.nutrition.calories == CalorieTarget::LeanSurplus {
      score += 15;
    }
    if self.active_recovery.sessions_per_week >= 2 {
      score += 15;
    }
    if !self.stress_management.techniques.is_empty() {
      score += 10;
    }

    score.min(100)
  }
}
