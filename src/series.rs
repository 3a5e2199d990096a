use serde::{Deserialize, Serialize};

pub const SERIES_LEN: usize = 7;

/// Seven risk samples in percent, one per forecast position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Series(pub [f64; SERIES_LEN]);

impl Series {
    pub const INITIAL: Series = Series([40.0, 55.0, 60.0, 50.0, 65.0, 45.0, 55.0]);

    pub fn new(values: [f64; SERIES_LEN]) -> Self {
        Self(values.map(|value| value.clamp(0.0, 100.0)))
    }

    /// Builds the target series for a risk score by fixed offsets around it.
    /// A floor value replaces an offset only when the offset goes negative.
    pub fn from_score(score: u8) -> Self {
        let s = f64::from(score.min(100));
        let below = |offset: f64, floor: f64| if s - offset < 0.0 { floor } else { s - offset };
        let above = |offset: f64| (s + offset).min(100.0);

        Self::new([
            below(15.0, 5.0),
            below(5.0, 10.0),
            s,
            above(8.0),
            above(15.0),
            below(10.0, 5.0),
            s,
        ])
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Per-index linear blend towards `target`; `t` is already eased.
    pub fn lerp(&self, target: &Series, t: f64) -> Series {
        let mut out = [0.0; SERIES_LEN];
        for (i, slot) in out.iter_mut().enumerate() {
            let start = self.0[i];
            *slot = start + (target.0[i] - start) * t;
        }
        Series(out)
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_zero_uses_floor_values() {
        let series = Series::from_score(0);
        assert_eq!(series.0, [5.0, 10.0, 0.0, 8.0, 15.0, 5.0, 0.0]);
    }

    #[test]
    fn score_hundred_caps_upper_offsets() {
        let series = Series::from_score(100);
        assert_eq!(series.0, [85.0, 95.0, 100.0, 100.0, 100.0, 90.0, 100.0]);
    }

    #[test]
    fn score_55_matches_expected_target() {
        let series = Series::from_score(55);
        assert_eq!(series.0, [40.0, 50.0, 55.0, 63.0, 70.0, 45.0, 55.0]);
    }

    #[test]
    fn floor_only_applies_when_offset_is_negative() {
        // 17 - 15 = 2 stays 2, 12 - 15 falls back to 5
        assert_eq!(Series::from_score(17).0[0], 2.0);
        assert_eq!(Series::from_score(12).0[0], 5.0);
    }

    #[test]
    fn every_score_maps_into_range() {
        for score in 0..=100u8 {
            let series = Series::from_score(score);
            assert!(series.0.iter().all(|v| (0.0..=100.0).contains(v)));
            assert_eq!(series.0[2], f64::from(score));
            assert_eq!(series.0[6], f64::from(score));
            assert_eq!(series, Series::from_score(score));
        }
    }

    #[test]
    fn new_clamps_out_of_range_samples() {
        let series = Series::new([-4.0, 120.0, 50.0, 0.0, 100.0, 33.0, 101.0]);
        assert_eq!(series.0, [0.0, 100.0, 50.0, 0.0, 100.0, 33.0, 100.0]);
    }
}
