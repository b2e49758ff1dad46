//! Value/position mapping for single and range sliders.

use serde::{Deserialize, Serialize};

/// Position of `value` along the track as a percentage in `[0, 100]`.
pub fn get_position(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return 0.0;
    }
    (((value - min) / span) * 100.0).clamp(0.0, 100.0)
}

/// Number of decimals implied by `step` (`0.05` → 2, `5` → 0).
pub fn get_precision(step: f64) -> u32 {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let formatted = format!("{step}");
    formatted
        .split_once('.')
        .map(|(_, decimals)| decimals.len() as u32)
        .unwrap_or(0)
}

/// Rounds `value` to `precision` decimals.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Maps a pointer `ratio` along the track (`0.0` = start, `1.0` = end) to a stepped value.
///
/// The ratio is clamped to the track, the result snapped to the nearest step from `min`, clamped to
/// `[min, max]`, and rounded to `precision` (or the precision implied by `step`).
pub fn get_change_value(ratio: f64, min: f64, max: f64, step: f64, precision: Option<u32>) -> f64 {
    let ratio = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let dx = ratio * (max - min);
    let stepped = if dx != 0.0 && step > 0.0 {
        (dx / step).round() * step
    } else {
        dx
    };
    let value = (stepped + min).clamp(min, max.max(min));
    round_to_precision(value, precision.unwrap_or_else(|| get_precision(step)))
}

/// Ratio of a pointer x coordinate within a track spanning `[track_left, track_left + track_width]`.
pub fn pointer_ratio(pointer_x: f64, track_left: f64, track_width: f64) -> f64 {
    if track_width <= 0.0 {
        return 0.0;
    }
    ((pointer_x - track_left) / track_width).clamp(0.0, 1.0)
}

/// Moves `value` by `steps` steps (negative moves left), clamped to `[min, max]`.
pub fn step_value(value: f64, steps: i32, min: f64, max: f64, step: f64) -> f64 {
    let next = (value + f64::from(steps) * step).clamp(min, max.max(min));
    round_to_precision(next, get_precision(step))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Labelled point along the slider track.
pub struct SliderMark {
    /// Value the mark sits at.
    pub value: f64,
    /// Optional label rendered under the mark.
    pub label: Option<String>,
}

impl SliderMark {
    /// Mark without a label.
    pub fn at(value: f64) -> Self {
        Self { value, label: None }
    }

    /// Mark with a label.
    pub fn labelled(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }

    /// Whether the mark falls inside the filled part of a single-value slider.
    pub fn is_filled(&self, value: f64) -> bool {
        self.value <= value
    }

    /// Whether the mark falls inside the selected span of a range slider.
    pub fn is_filled_in_range(&self, range: RangeValue) -> bool {
        self.value >= range.start && self.value <= range.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Thumb of a range slider.
pub enum RangeThumb {
    /// Lower bound thumb.
    Start,
    /// Upper bound thumb.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Selected span of a range slider; `start <= end` always holds.
pub struct RangeValue {
    /// Lower bound.
    pub start: f64,
    /// Upper bound.
    pub end: f64,
}

impl RangeValue {
    /// Builds an ordered range from two values.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Thumb nearest to `value`; ties go to the end thumb when the value is above the range.
    pub fn nearest_thumb(&self, value: f64) -> RangeThumb {
        let to_start = (value - self.start).abs();
        let to_end = (value - self.end).abs();
        if to_start < to_end || (to_start == to_end && value < self.start) {
            RangeThumb::Start
        } else {
            RangeThumb::End
        }
    }

    /// Moves `thumb` to `value`, keeping the thumbs at least `min_range` apart inside `[min, max]`.
    pub fn move_thumb(
        self,
        thumb: RangeThumb,
        value: f64,
        min_range: f64,
        min: f64,
        max: f64,
    ) -> Self {
        let min_range = min_range.max(0.0);
        match thumb {
            RangeThumb::Start => {
                let upper = (self.end - min_range).max(min);
                Self {
                    start: value.clamp(min, upper),
                    end: self.end,
                }
            }
            RangeThumb::End => {
                let lower = (self.start + min_range).min(max);
                Self {
                    start: self.start,
                    end: value.clamp(lower, max),
                }
            }
        }
    }

    /// Track positions of both thumbs as percentages.
    pub fn positions(&self, min: f64, max: f64) -> (f64, f64) {
        (get_position(self.start, min, max), get_position(self.end, min, max))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn position_is_clamped_percentage() {
        assert_eq!(get_position(50.0, 0.0, 100.0), 50.0);
        assert_eq!(get_position(-10.0, 0.0, 100.0), 0.0);
        assert_eq!(get_position(250.0, 0.0, 100.0), 100.0);
        assert_eq!(get_position(15.0, 10.0, 20.0), 50.0);
        assert_eq!(get_position(5.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn precision_follows_step_decimals() {
        assert_eq!(get_precision(1.0), 0);
        assert_eq!(get_precision(0.1), 1);
        assert_eq!(get_precision(0.05), 2);
        assert_eq!(get_precision(25.0), 0);
    }

    #[test]
    fn change_value_snaps_to_step_and_clamps() {
        assert_eq!(get_change_value(0.5, 0.0, 100.0, 1.0, None), 50.0);
        assert_eq!(get_change_value(0.47, 0.0, 100.0, 10.0, None), 50.0);
        assert_eq!(get_change_value(0.44, 0.0, 100.0, 10.0, None), 40.0);
        assert_eq!(get_change_value(-0.3, 0.0, 100.0, 1.0, None), 0.0);
        assert_eq!(get_change_value(1.7, 0.0, 100.0, 1.0, None), 100.0);
        assert_eq!(get_change_value(0.333, 0.0, 1.0, 0.1, None), 0.3);
        assert_eq!(get_change_value(0.5, 20.0, 40.0, 5.0, None), 30.0);
    }

    #[test]
    fn change_value_never_exceeds_max_when_step_overshoots() {
        assert_eq!(get_change_value(1.0, 0.0, 10.0, 4.0, None), 10.0);
        assert_eq!(get_change_value(1.0, 0.0, 10.0, 3.0, None), 9.0);
    }

    #[test]
    fn keyboard_steps_clamp() {
        assert_eq!(step_value(50.0, 1, 0.0, 100.0, 1.0), 51.0);
        assert_eq!(step_value(99.0, 10, 0.0, 100.0, 1.0), 100.0);
        assert_eq!(step_value(0.2, -3, 0.0, 1.0, 0.1), 0.0);
        assert_eq!(step_value(0.2, 1, 0.0, 1.0, 0.1), 0.3);
    }

    #[test]
    fn pointer_ratio_handles_degenerate_tracks() {
        assert_eq!(pointer_ratio(150.0, 100.0, 200.0), 0.25);
        assert_eq!(pointer_ratio(50.0, 100.0, 200.0), 0.0);
        assert_eq!(pointer_ratio(150.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn range_thumbs_keep_order_and_min_range() {
        let range = RangeValue::new(20.0, 60.0);

        let moved = range.move_thumb(RangeThumb::Start, 70.0, 10.0, 0.0, 100.0);
        assert_eq!(moved, RangeValue { start: 50.0, end: 60.0 });

        let moved = range.move_thumb(RangeThumb::End, 5.0, 10.0, 0.0, 100.0);
        assert_eq!(moved, RangeValue { start: 20.0, end: 30.0 });

        let moved = range.move_thumb(RangeThumb::End, 140.0, 0.0, 0.0, 100.0);
        assert_eq!(moved.end, 100.0);
    }

    #[test]
    fn nearest_thumb_and_marks() {
        let range = RangeValue::new(60.0, 20.0);
        assert_eq!(range, RangeValue { start: 20.0, end: 60.0 });
        assert_eq!(range.nearest_thumb(25.0), RangeThumb::Start);
        assert_eq!(range.nearest_thumb(55.0), RangeThumb::End);
        assert_eq!(range.nearest_thumb(40.0), RangeThumb::End);

        assert!(SliderMark::at(40.0).is_filled_in_range(range));
        assert!(!SliderMark::labelled(80.0, "80%").is_filled_in_range(range));
        assert!(SliderMark::at(10.0).is_filled(25.0));
    }
}
