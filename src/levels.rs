//! CEFR <-> band score mapping table.
//!
//! IELTS bands use the usual half-band scale (0.0..=9.0); TOEFL iBT uses 0..=120.
//! Each CEFR level maps to a representative target band and the lowest score that counts
//! as reaching it.

use serde::Serialize;

use crate::domain::ProficiencyLevel;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct LevelBand {
  pub level: ProficiencyLevel,
  /// Lowest IELTS band counted as this level.
  pub ielts_min: f32,
  /// Band a learner aiming for this level should target.
  pub ielts_target: f32,
  pub toefl_min: u32,
  pub label: &'static str,
}

pub static LEVEL_TABLE: [LevelBand; 6] = [
  LevelBand { level: ProficiencyLevel::A1, ielts_min: 0.0, ielts_target: 3.0, toefl_min: 0, label: "Beginner" },
  LevelBand { level: ProficiencyLevel::A2, ielts_min: 3.5, ielts_target: 4.0, toefl_min: 20, label: "Elementary" },
  LevelBand { level: ProficiencyLevel::B1, ielts_min: 4.5, ielts_target: 5.0, toefl_min: 42, label: "Intermediate" },
  LevelBand { level: ProficiencyLevel::B2, ielts_min: 5.5, ielts_target: 6.0, toefl_min: 72, label: "Upper Intermediate" },
  LevelBand { level: ProficiencyLevel::C1, ielts_min: 7.0, ielts_target: 7.0, toefl_min: 95, label: "Advanced" },
  LevelBand { level: ProficiencyLevel::C2, ielts_min: 8.5, ielts_target: 8.5, toefl_min: 114, label: "Proficient" },
];

pub fn level_band(level: ProficiencyLevel) -> &'static LevelBand {
  &LEVEL_TABLE[level.index() as usize]
}

/// Number of CEFR steps from `from` up to `to`. Never negative.
pub fn get_level_gap(from: ProficiencyLevel, to: ProficiencyLevel) -> u8 {
  to.index().saturating_sub(from.index())
}

pub fn cefr_to_ielts(level: ProficiencyLevel) -> f32 {
  level_band(level).ielts_target
}

/// Highest level whose minimum band is at or below `band`. Non-finite input maps to A1.
pub fn ielts_to_cefr(band: f32) -> ProficiencyLevel {
  if !band.is_finite() {
    return ProficiencyLevel::A1;
  }
  LEVEL_TABLE
    .iter()
    .rev()
    .find(|row| band >= row.ielts_min)
    .map(|row| row.level)
    .unwrap_or(ProficiencyLevel::A1)
}

pub fn toefl_to_cefr(score: u32) -> ProficiencyLevel {
  LEVEL_TABLE
    .iter()
    .rev()
    .find(|row| score >= row.toefl_min)
    .map(|row| row.level)
    .unwrap_or(ProficiencyLevel::A1)
}

/// Rough IELTS equivalent of a TOEFL iBT score, on the half-band grid.
pub fn toefl_to_ielts(score: u32) -> f32 {
  match score {
    0..=31 => 4.0,
    32..=34 => 4.5,
    35..=45 => 5.0,
    46..=59 => 5.5,
    60..=78 => 6.0,
    79..=93 => 6.5,
    94..=101 => 7.0,
    102..=109 => 7.5,
    110..=114 => 8.0,
    115..=117 => 8.5,
    _ => 9.0,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use ProficiencyLevel::*;

  #[test]
  fn gap_is_floored_at_zero() {
    assert_eq!(get_level_gap(C1, B1), 0);
    assert_eq!(get_level_gap(B2, B2), 0);
    assert_eq!(get_level_gap(A1, C2), 5);
    assert_eq!(get_level_gap(B1, C1), 2);
  }

  #[test]
  fn table_is_indexed_by_level() {
    for level in ProficiencyLevel::ALL {
      assert_eq!(level_band(level).level, level);
    }
  }

  #[test]
  fn band_lookup_uses_lower_bounds() {
    assert_eq!(ielts_to_cefr(5.5), B2);
    assert_eq!(ielts_to_cefr(6.5), B2);
    assert_eq!(ielts_to_cefr(7.0), C1);
    assert_eq!(ielts_to_cefr(9.0), C2);
    assert_eq!(ielts_to_cefr(1.0), A1);
    assert_eq!(ielts_to_cefr(f32::NAN), A1);
    assert_eq!(toefl_to_cefr(100), C1);
    assert_eq!(toefl_to_cefr(41), A2);
  }

  #[test]
  fn cefr_targets_round_trip_to_same_level() {
    for level in ProficiencyLevel::ALL {
      assert_eq!(ielts_to_cefr(cefr_to_ielts(level)), level);
    }
  }

  #[test]
  fn toefl_conversion_is_monotonic() {
    let mut prev = 0.0;
    for score in 0..=120 {
      let band = toefl_to_ielts(score);
      assert!(band >= prev, "score {score} dropped to {band}");
      prev = band;
    }
  }
}
