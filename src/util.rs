//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Round half away from zero on non-negative input, then clamp into `u32`.
/// Every derived quantity in the planner goes through this one rule.
pub fn round_half_up(x: f64) -> u32 {
  if !x.is_finite() || x <= 0.0 {
    return 0;
  }
  let r = (x + 0.5).floor();
  if r >= u32::MAX as f64 { u32::MAX } else { r as u32 }
}

/// Percentage of `part` in `total`, rounded half-up. Zero total yields zero.
pub fn percent_of(part: u64, total: u64) -> u32 {
  if total == 0 {
    return 0;
  }
  round_half_up(part as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn template_replaces_every_occurrence() {
    let s = fill_template("{a} and {a} then {b}", &[("a", "x"), ("b", "y")]);
    assert_eq!(s, "x and x then y");
  }

  #[test]
  fn rounding_is_half_up() {
    assert_eq!(round_half_up(2.5), 3);
    assert_eq!(round_half_up(3.5), 4);
    assert_eq!(round_half_up(2.49), 2);
    assert_eq!(round_half_up(-4.0), 0);
    assert_eq!(round_half_up(f64::NAN), 0);
    assert_eq!(round_half_up(f64::INFINITY), 0);
  }

  #[test]
  fn percent_guards_zero_total() {
    assert_eq!(percent_of(5, 0), 0);
    assert_eq!(percent_of(1, 3), 33);
    assert_eq!(percent_of(2, 3), 67);
  }
}
