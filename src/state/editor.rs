//! Interactive transform editor state.
//!
//! `TransformEditor` owns the transform being edited, the gesture in progress
//! and the auto-save debounce. It never touches the DOM: input handlers are
//! plain method calls and any timer work is returned as a [`Command`] for the
//! component to carry out. This keeps every rule below testable natively.
//!
//! Scale rules:
//! - pinching applies an elastic soft limit outside `[min_scale, max_scale]`
//! - wheel and button zoom clamp immediately
//! - ending a gesture hard-clamps, so the range holds whenever nothing is active

use super::autosave::{Debounce, Ticket};
use super::gesture::{Gesture, Point};
use crate::config::EditorConfig;
use crate::model::{ImageMetrics, SavePayload, Transform, Viewport, cover_fit_scale};

/// Side effects requested by the editor.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Start (or restart) the debounce timer; call `autosave_elapsed(ticket)` when it fires.
    ArmAutoSave { ticket: Ticket, delay_ms: u32 },
    /// Drop any outstanding debounce timer.
    CancelAutoSave,
    /// Hand the payload to `on_save`.
    Save(SavePayload),
}

#[derive(Debug)]
pub struct TransformEditor {
    config: EditorConfig,
    transform: Transform,
    gesture: Gesture,
    /// Unclamped scale accumulated over the current pinch; the shown scale is
    /// its elastic image so finger spread maps monotonically to zoom.
    pinch_scale: f64,
    active: bool,
    pending: bool,
    autosave: Debounce,
    image_src: String,
    image: Option<ImageMetrics>,
    viewport: Viewport,
}

impl TransformEditor {
    pub fn new(config: EditorConfig, viewport: Viewport) -> Self {
        Self {
            config,
            transform: Transform::IDENTITY,
            gesture: Gesture::Idle,
            pinch_scale: 1.0,
            active: false,
            pending: false,
            autosave: Debounce::default(),
            image_src: String::new(),
            image: None,
            viewport,
        }
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_interacting(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn has_pending_changes(&self) -> bool {
        self.pending
    }

    pub fn pinch_origin(&self) -> Option<Point> {
        match self.gesture {
            Gesture::Pinching { origin, .. } => Some(origin),
            _ => None,
        }
    }

    /// Start a new session from the last saved transform. Anything left over
    /// from a previous session, including an armed auto-save, is discarded.
    pub fn activate(&mut self, saved: Option<Transform>, image_src: &str) -> Option<Command> {
        self.transform = saved.unwrap_or_default();
        self.gesture = Gesture::Idle;
        self.pending = false;
        self.autosave.cancel();
        self.active = true;
        self.image_src = image_src.to_string();
        log::debug!(
            "crop editor activated: src={} transform={:?}",
            self.image_src,
            self.transform
        );
        Some(Command::CancelAutoSave)
    }

    /// Tear the session down without saving. Safe to call repeatedly.
    pub fn deactivate(&mut self) -> Option<Command> {
        if self.active {
            log::debug!(
                "crop editor deactivated (pending={} interacting={})",
                self.pending,
                self.is_interacting()
            );
        }
        self.active = false;
        self.abandon()
    }

    /// User asked to abandon editing. The transform is left as is; the owner discards it.
    pub fn cancel(&mut self) -> Option<Command> {
        log::debug!("crop editor cancelled");
        self.abandon()
    }

    fn abandon(&mut self) -> Option<Command> {
        self.gesture = Gesture::Idle;
        self.pending = false;
        self.autosave.cancel();
        Some(Command::CancelAutoSave)
    }

    /// Mouse button went down inside the viewport.
    pub fn pointer_down(&mut self, at: Point) {
        if !self.active {
            return;
        }
        self.gesture = Gesture::Dragging { last: at };
    }

    /// Touches changed inside the viewport; `points` are all current touches.
    pub fn touch_start(&mut self, points: &[Point]) {
        if !self.active || points.is_empty() {
            return;
        }
        let was_pinching = self.gesture.is_pinching();
        self.gesture = Gesture::begin(points);
        // An extra finger joining a pinch keeps the accumulated scale.
        if self.gesture.is_pinching() && !was_pinching {
            self.seed_pinch();
        }
    }

    fn seed_pinch(&mut self) {
        self.pinch_scale = self.config.unelastic_scale(self.transform.scale);
    }

    /// Mouse moved anywhere on the page. Returns whether the transform changed.
    pub fn pointer_move(&mut self, at: Point) -> bool {
        if let Gesture::Dragging { last } = self.gesture {
            self.transform.translate_x += at.x - last.x;
            self.transform.translate_y += at.y - last.y;
            self.gesture = Gesture::Dragging { last: at };
            self.pending = true;
            true
        } else {
            false
        }
    }

    /// Touches moved anywhere on the page. Returns whether the transform changed.
    pub fn touch_move(&mut self, points: &[Point]) -> bool {
        match (self.gesture, points) {
            (Gesture::Dragging { .. }, [p]) => self.pointer_move(*p),
            // Second finger landed outside the viewport, so no touchstart was seen.
            (Gesture::Dragging { .. }, [_, _, ..]) => {
                self.gesture = Gesture::begin(points);
                self.seed_pinch();
                false
            }
            (Gesture::Pinching { last_distance, .. }, [a, b, ..]) => {
                self.pinch_to(last_distance, *a, *b)
            }
            _ => false,
        }
    }

    fn pinch_to(&mut self, last_distance: f64, a: Point, b: Point) -> bool {
        let distance = a.distance(b);
        let origin = a.midpoint(b);
        self.gesture = Gesture::Pinching {
            last_distance: distance,
            origin,
        };
        // Coincident fingers give no usable ratio; take this frame as the new baseline.
        if last_distance <= 0.0 || !last_distance.is_finite() || !distance.is_finite() {
            return false;
        }
        let ratio = distance / last_distance;
        if !self.config.accepts_pinch_ratio(ratio) {
            return false;
        }
        self.pinch_scale *= ratio;
        self.transform.scale = self.config.elastic_scale(self.pinch_scale);
        self.pending = true;
        true
    }

    /// Mouse released or last finger lifted anywhere on the page.
    pub fn gesture_end(&mut self) -> Option<Command> {
        if !self.gesture.is_active() {
            return None;
        }
        self.gesture = Gesture::Idle;
        self.transform.scale = self.config.clamp_scale(self.transform.scale);
        if self.pending {
            Some(self.arm_autosave())
        } else {
            None
        }
    }

    /// Wheel tick. Positive `delta_y` (scrolling down/away) zooms out.
    pub fn wheel(&mut self, delta_y: f64) -> Option<Command> {
        if delta_y > 0.0 {
            self.zoom_by(self.config.wheel_zoom_out)
        } else if delta_y < 0.0 {
            self.zoom_by(self.config.wheel_zoom_in)
        } else {
            None
        }
    }

    pub fn zoom_in(&mut self) -> Option<Command> {
        self.zoom_by(self.config.wheel_zoom_in)
    }

    pub fn zoom_out(&mut self) -> Option<Command> {
        self.zoom_by(self.config.wheel_zoom_out)
    }

    /// Multiply the scale and clamp right away; there is no end event to wait for.
    fn zoom_by(&mut self, factor: f64) -> Option<Command> {
        if !self.active {
            return None;
        }
        self.transform.scale = self.config.clamp_scale(self.transform.scale * factor);
        self.pending = true;
        Some(self.arm_autosave())
    }

    /// Back to the identity transform, saved like any other change.
    pub fn reset(&mut self) -> Option<Command> {
        if !self.active {
            return None;
        }
        self.gesture = Gesture::Idle;
        self.transform = Transform::IDENTITY;
        self.pending = true;
        Some(self.arm_autosave())
    }

    fn arm_autosave(&mut self) -> Command {
        Command::ArmAutoSave {
            ticket: self.autosave.arm(),
            delay_ms: self.config.autosave_delay_ms,
        }
    }

    /// The debounce timer for `ticket` went off.
    pub fn autosave_elapsed(&mut self, ticket: Ticket) -> Option<Command> {
        if !self.autosave.fire(ticket) || !self.active || !self.pending {
            return None;
        }
        // Mid-gesture the scale may sit in the elastic band; the gesture end re-arms.
        if self.is_interacting() {
            return None;
        }
        self.pending = false;
        log::debug!("crop editor auto-save: {:?}", self.transform);
        Some(Command::Save(SavePayload {
            transform: self.transform,
            original_image_src: self.image_src.clone(),
        }))
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Record the natural image size once it has loaded.
    pub fn set_image_metrics(&mut self, metrics: ImageMetrics) {
        self.image = Some(metrics);
        if let Some(scale) = self.suggested_fit_scale() {
            // Not applied: the first view deliberately shows the whole image.
            log::debug!("cover-fit scale for {}: {:.3}", self.image_src, scale);
        }
    }

    /// Scale that would make the image cover the viewport, once its size is known.
    pub fn suggested_fit_scale(&self) -> Option<f64> {
        self.image.map(|image| cover_fit_scale(image, self.viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = "https://cdn.example.com/clip.jpg";

    /// Drives an editor against a fake clock, playing the role of the component's timer.
    struct Harness {
        editor: TransformEditor,
        now: u32,
        timer: Option<(Ticket, u32)>,
        saves: Vec<SavePayload>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                editor: TransformEditor::new(
                    EditorConfig::default(),
                    Viewport {
                        width: 360.0,
                        height: 640.0,
                    },
                ),
                now: 0,
                timer: None,
                saves: Vec::new(),
            }
        }

        fn activated(saved: Option<Transform>) -> Self {
            let mut h = Self::new();
            let cmd = h.editor.activate(saved, SRC);
            h.apply(cmd);
            h
        }

        fn apply(&mut self, cmd: Option<Command>) {
            match cmd {
                Some(Command::ArmAutoSave { ticket, delay_ms }) => {
                    self.timer = Some((ticket, self.now + delay_ms))
                }
                Some(Command::CancelAutoSave) => self.timer = None,
                Some(Command::Save(payload)) => self.saves.push(payload),
                None => {}
            }
        }

        fn advance(&mut self, ms: u32) {
            self.now += ms;
            if let Some((ticket, due)) = self.timer {
                if due <= self.now {
                    self.timer = None;
                    let cmd = self.editor.autosave_elapsed(ticket);
                    self.apply(cmd);
                }
            }
        }

        fn drag(&mut self, from: Point, to: Point) {
            self.editor.touch_start(&[from]);
            self.editor.touch_move(&[to]);
            let cmd = self.editor.gesture_end();
            self.apply(cmd);
        }

        fn pinch_start(&mut self, distance: f64) {
            self.editor
                .touch_start(&[Point::new(0.0, 0.0), Point::new(distance, 0.0)]);
        }

        fn pinch_move(&mut self, distance: f64) -> bool {
            self.editor
                .touch_move(&[Point::new(0.0, 0.0), Point::new(distance, 0.0)])
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_activate_defaults_to_identity() {
        let h = Harness::activated(None);
        assert_eq!(h.editor.transform(), Transform::IDENTITY);
        assert!(h.editor.is_active());
        assert!(!h.editor.is_interacting());
        assert!(!h.editor.has_pending_changes());
    }

    #[test]
    fn test_reactivation_resets_to_saved() {
        let mut h = Harness::activated(None);
        h.drag(Point::new(0.0, 0.0), Point::new(40.0, 40.0));
        h.editor.deactivate();
        let saved = Transform::new(2.0, 10.0, -5.0);
        h.editor.activate(Some(saved), SRC);
        assert_eq!(h.editor.transform(), saved);
        assert!(!h.editor.has_pending_changes());
    }

    #[test]
    fn test_single_finger_drag_then_autosave() {
        let mut h = Harness::activated(None);
        h.editor.touch_start(&[Point::new(100.0, 100.0)]);
        assert!(h.editor.is_interacting());
        assert!(h.editor.touch_move(&[Point::new(150.0, 130.0)]));
        assert_eq!(h.editor.transform(), Transform::new(1.0, 50.0, 30.0));
        let cmd = h.editor.gesture_end();
        h.apply(cmd);
        assert!(!h.editor.is_interacting());

        h.advance(799);
        assert!(h.saves.is_empty());
        h.advance(1);
        assert_eq!(
            h.saves,
            vec![SavePayload {
                transform: Transform::new(1.0, 50.0, 30.0),
                original_image_src: SRC.to_string(),
            }]
        );
        assert!(!h.editor.has_pending_changes());
    }

    #[test]
    fn test_drag_accumulates_deltas() {
        let mut h = Harness::activated(None);
        h.editor.pointer_down(Point::new(10.0, 10.0));
        h.editor.pointer_move(Point::new(20.0, 5.0));
        h.editor.pointer_move(Point::new(25.0, 0.0));
        assert_eq!(h.editor.transform(), Transform::new(1.0, 15.0, -10.0));
    }

    #[test]
    fn test_debounce_collapses_to_last_value() {
        let mut h = Harness::activated(None);
        for i in 0..5 {
            h.drag(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
            h.advance(100 + i * 50);
        }
        assert!(h.saves.is_empty());
        h.advance(800);
        assert_eq!(h.saves.len(), 1);
        assert_eq!(h.saves[0].transform, Transform::new(1.0, 50.0, 0.0));
    }

    #[test]
    fn test_no_save_without_change() {
        let mut h = Harness::activated(None);
        let cmd = h.editor.deactivate();
        h.apply(cmd);
        h.advance(5_000);
        assert!(h.saves.is_empty());
    }

    #[test]
    fn test_tap_without_move_does_not_save() {
        let mut h = Harness::activated(None);
        h.editor.pointer_down(Point::new(5.0, 5.0));
        let cmd = h.editor.gesture_end();
        assert_eq!(cmd, None);
        h.advance(1_000);
        assert!(h.saves.is_empty());
    }

    #[test]
    fn test_deactivate_mid_debounce_drops_save() {
        let mut h = Harness::activated(None);
        h.drag(Point::new(0.0, 0.0), Point::new(30.0, 30.0));
        h.advance(400);
        let cmd = h.editor.deactivate();
        h.apply(cmd);
        h.advance(1_000);
        assert!(h.saves.is_empty());
    }

    #[test]
    fn test_stale_timer_after_reactivation_is_ignored() {
        let mut h = Harness::activated(None);
        h.drag(Point::new(0.0, 0.0), Point::new(30.0, 30.0));
        let (stale, _) = h.timer.expect("armed");
        h.editor.activate(Some(Transform::new(2.0, 0.0, 0.0)), SRC);
        // The browser timer raced the reset and fired anyway.
        assert_eq!(h.editor.autosave_elapsed(stale), None);
        assert_eq!(h.editor.transform(), Transform::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_deactivate_mid_gesture_is_idempotent() {
        let mut h = Harness::activated(None);
        h.editor.touch_start(&[Point::new(0.0, 0.0)]);
        h.editor.touch_move(&[Point::new(5.0, 5.0)]);
        h.editor.deactivate();
        h.editor.deactivate();
        assert!(!h.editor.is_interacting());
        assert!(!h.editor.has_pending_changes());
        assert!(!h.editor.pointer_move(Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_inactive_editor_ignores_input() {
        let mut h = Harness::new();
        h.editor.pointer_down(Point::new(0.0, 0.0));
        assert!(!h.editor.is_interacting());
        assert_eq!(h.editor.wheel(-1.0), None);
        assert_eq!(h.editor.reset(), None);
    }

    #[test]
    fn test_cancel_keeps_transform_and_drops_save() {
        let mut h = Harness::activated(None);
        h.drag(Point::new(0.0, 0.0), Point::new(30.0, 0.0));
        let cmd = h.editor.cancel();
        h.apply(cmd);
        h.advance(1_000);
        assert!(h.saves.is_empty());
        assert_eq!(h.editor.transform(), Transform::new(1.0, 30.0, 0.0));
    }

    #[test]
    fn test_pinch_scales_by_distance_ratio() {
        let mut h = Harness::activated(None);
        h.pinch_start(100.0);
        assert!(h.editor.pinch_origin().is_some());
        assert!(h.pinch_move(150.0));
        assert!(approx(h.editor.transform().scale, 1.5));
    }

    #[test]
    fn test_pinch_ratio_of_exactly_two_is_rejected() {
        let mut h = Harness::activated(None);
        h.pinch_start(100.0);
        h.pinch_move(150.0);
        assert!(!h.pinch_move(300.0));
        assert!(approx(h.editor.transform().scale, 1.5));
        // The rejected frame becomes the new baseline.
        assert!(h.pinch_move(330.0));
        assert!(approx(h.editor.transform().scale, 1.65));
    }

    #[test]
    fn test_pinch_ratio_of_exactly_half_is_rejected() {
        let mut h = Harness::activated(None);
        h.pinch_start(200.0);
        assert!(!h.pinch_move(100.0));
        assert!(approx(h.editor.transform().scale, 1.0));
    }

    #[test]
    fn test_pinch_zero_distance_guard() {
        let mut h = Harness::activated(None);
        h.editor
            .touch_start(&[Point::new(50.0, 50.0), Point::new(50.0, 50.0)]);
        assert!(!h.pinch_move(80.0));
        assert_eq!(h.editor.transform().scale, 1.0);
        // Baseline recovered from the guarded frame.
        assert!(h.pinch_move(120.0));
        assert!(approx(h.editor.transform().scale, 1.5));
    }

    #[test]
    fn test_pinch_collapsing_to_zero_is_ignored() {
        let mut h = Harness::activated(None);
        h.pinch_start(100.0);
        assert!(!h.pinch_move(0.0));
        assert_eq!(h.editor.transform().scale, 1.0);
    }

    #[test]
    fn test_pinch_overshoot_is_elastic_then_clamped() {
        let mut h = Harness::activated(Some(Transform::new(2.5, 0.0, 0.0)));
        h.pinch_start(100.0);
        h.pinch_move(190.0); // raw 4.75
        let s = h.editor.transform().scale;
        assert!(s > 3.0 && s < 3.2, "elastic scale {s}");
        let cmd = h.editor.gesture_end();
        h.apply(cmd);
        assert_eq!(h.editor.transform().scale, 3.0);
    }

    #[test]
    fn test_pinch_undershoot_is_elastic_then_clamped() {
        let mut h = Harness::activated(Some(Transform::new(0.6, 0.0, 0.0)));
        h.pinch_start(100.0);
        h.pinch_move(60.0); // raw 0.36
        let s = h.editor.transform().scale;
        assert!(s < 0.5 && s > 0.45, "elastic scale {s}");
        let cmd = h.editor.gesture_end();
        h.apply(cmd);
        assert_eq!(h.editor.transform().scale, 0.5);
    }

    #[test]
    fn test_pinch_is_monotonic_past_the_ceiling() {
        let mut h = Harness::activated(Some(Transform::new(2.8, 0.0, 0.0)));
        h.pinch_start(100.0);
        let mut previous = h.editor.transform().scale;
        for d in [120.0, 140.0, 160.0, 180.0, 200.0] {
            h.pinch_move(d);
            let s = h.editor.transform().scale;
            assert!(s >= previous, "{s} < {previous}");
            previous = s;
        }
    }

    #[test]
    fn test_second_finger_upgrades_drag_to_pinch() {
        let mut h = Harness::activated(None);
        h.editor.touch_start(&[Point::new(0.0, 0.0)]);
        h.editor
            .touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        assert!(h.editor.pinch_origin().is_some());
        // A lone point no longer drags while pinching.
        assert!(!h.editor.touch_move(&[Point::new(10.0, 10.0)]));
    }

    #[test]
    fn test_third_finger_keeps_overshooting_pinch_monotonic() {
        let mut h = Harness::activated(Some(Transform::new(2.5, 0.0, 0.0)));
        h.pinch_start(100.0);
        assert!(h.pinch_move(190.0));
        let before = h.editor.transform().scale;
        assert!(approx(before, 3.175));

        h.editor.touch_start(&[
            Point::new(0.0, 0.0),
            Point::new(190.0, 0.0),
            Point::new(50.0, 80.0),
        ]);
        assert!(h.pinch_move(191.0));
        let after = h.editor.transform().scale;
        assert!(after > before, "{before} -> {after}");
        assert!(approx(after, 3.0 + (4.75 * 191.0 / 190.0 - 3.0) * 0.1));
    }

    #[test]
    fn test_pinch_from_out_of_range_saved_scale_does_not_jump() {
        let mut h = Harness::activated(Some(Transform::new(3.5, 0.0, 0.0)));
        h.pinch_start(100.0);
        assert!(h.pinch_move(101.0));
        let scale = h.editor.transform().scale;
        assert!(scale > 3.5 && scale < 3.6, "{scale}");
    }

    #[test]
    fn test_second_finger_outside_viewport_turns_drag_into_pinch() {
        let mut h = Harness::activated(None);
        h.editor.touch_start(&[Point::new(0.0, 0.0)]);
        // The second touchstart never reached the viewport.
        assert!(!h.pinch_move(100.0));
        assert!(h.editor.pinch_origin().is_some());
        assert!(h.pinch_move(150.0));
        assert!(approx(h.editor.transform().scale, 1.5));
    }

    #[test]
    fn test_wheel_clamps_immediately() {
        let mut h = Harness::activated(Some(Transform::new(0.52, 0.0, 0.0)));
        let cmd = h.editor.wheel(120.0);
        h.apply(cmd);
        assert_eq!(h.editor.transform().scale, 0.5);

        let mut h = Harness::activated(Some(Transform::new(2.95, 0.0, 0.0)));
        let cmd = h.editor.wheel(-120.0);
        assert!(matches!(cmd, Some(Command::ArmAutoSave { delay_ms: 800, .. })));
        assert_eq!(h.editor.transform().scale, 3.0);
    }

    #[test]
    fn test_wheel_steps_and_saves() {
        let mut h = Harness::activated(None);
        let cmd = h.editor.wheel(-3.0);
        h.apply(cmd);
        assert!(approx(h.editor.transform().scale, 1.1));
        let cmd = h.editor.wheel(3.0);
        h.apply(cmd);
        assert!(approx(h.editor.transform().scale, 0.99));
        h.advance(800);
        assert_eq!(h.saves.len(), 1);
        assert!(approx(h.saves[0].transform.scale, 0.99));
    }

    #[test]
    fn test_wheel_zero_delta_is_noop() {
        let mut h = Harness::activated(None);
        assert_eq!(h.editor.wheel(0.0), None);
        assert!(!h.editor.has_pending_changes());
    }

    #[test]
    fn test_out_of_range_saved_scale_pulled_in_on_gesture_end() {
        let mut h = Harness::activated(Some(Transform::new(5.0, 0.0, 0.0)));
        assert_eq!(h.editor.transform().scale, 5.0);
        h.drag(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert_eq!(h.editor.transform().scale, 3.0);
    }

    #[test]
    fn test_timer_during_gesture_defers_save() {
        let mut h = Harness::activated(None);
        let cmd = h.editor.wheel(-1.0);
        h.apply(cmd);
        h.editor.touch_start(&[Point::new(0.0, 0.0)]);
        h.editor.touch_move(&[Point::new(10.0, 0.0)]);
        h.advance(800);
        assert!(h.saves.is_empty());
        let cmd = h.editor.gesture_end();
        h.apply(cmd);
        h.advance(800);
        assert_eq!(h.saves.len(), 1);
        assert_eq!(h.saves[0].transform.translate_x, 10.0);
    }

    #[test]
    fn test_reset_saves_identity() {
        let mut h = Harness::activated(Some(Transform::new(2.0, 10.0, 10.0)));
        let cmd = h.editor.reset();
        h.apply(cmd);
        h.advance(800);
        assert_eq!(h.saves.len(), 1);
        assert_eq!(h.saves[0].transform, Transform::IDENTITY);
    }

    #[test]
    fn test_suggested_fit_scale_not_applied() {
        let mut h = Harness::activated(None);
        assert_eq!(h.editor.suggested_fit_scale(), None);
        h.editor.set_image_metrics(ImageMetrics {
            natural_width: 1920.0,
            natural_height: 1080.0,
        });
        let fit = h.editor.suggested_fit_scale().expect("metrics known");
        assert!(fit > 1.0);
        assert_eq!(h.editor.transform(), Transform::IDENTITY);
    }
}
