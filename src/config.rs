// Editor tunables.

/// Limits and step sizes used by the transform editor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorConfig {
    /// Hard scale floor enforced whenever no gesture is active.
    pub min_scale: f64,
    /// Hard scale ceiling enforced whenever no gesture is active.
    pub max_scale: f64,
    /// Quiet period after the last change before `on_save` fires.
    pub autosave_delay_ms: u32,
    pub wheel_zoom_in: f64,
    pub wheel_zoom_out: f64,
    /// Per-frame pinch ratios outside this open interval are treated as noise.
    pub pinch_ratio_min: f64,
    pub pinch_ratio_max: f64,
    /// Fraction of an out-of-range pinch excess that is kept while pinching.
    pub elastic_damping: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 3.0,
            autosave_delay_ms: 800,
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
            pinch_ratio_min: 0.5,
            pinch_ratio_max: 2.0,
            elastic_damping: 0.1,
        }
    }
}

impl EditorConfig {
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Soft limit applied to pinch results before the gesture ends.
    pub fn elastic_scale(&self, scale: f64) -> f64 {
        if scale < self.min_scale {
            // Mirrors the ceiling; `min + (min - s) * d` would grow as the fingers close.
            self.min_scale - (self.min_scale - scale) * self.elastic_damping
        } else if scale > self.max_scale {
            self.max_scale + (scale - self.max_scale) * self.elastic_damping
        } else {
            scale
        }
    }

    /// Raw pinch scale whose elastic image is `shown`.
    pub fn unelastic_scale(&self, shown: f64) -> f64 {
        if self.elastic_damping <= 0.0 {
            return shown;
        }
        if shown < self.min_scale {
            self.min_scale - (self.min_scale - shown) / self.elastic_damping
        } else if shown > self.max_scale {
            self.max_scale + (shown - self.max_scale) / self.elastic_damping
        } else {
            shown
        }
    }

    pub fn accepts_pinch_ratio(&self, ratio: f64) -> bool {
        ratio > self.pinch_ratio_min && ratio < self.pinch_ratio_max
    }
}
