use trellis_engine::coords::{Rect, Vec2};

use crate::painter::Painter;
use crate::theme::Theme;
use crate::widget::Widget;

const LABEL_HEIGHT: f32 = 16.0;
const TRACK_GAP: f32 = 4.0;
const TRACK_HEIGHT: f32 = 6.0;
const THUMB_RADIUS: f32 = 8.0;
/// Width reserved right of the track for the value readout.
const VALUE_WIDTH: f32 = 50.0;

/// Horizontal slider selecting a value in `[min, max]`.
///
/// The driver starts a drag on a press inside the slider, feeds the pointer x
/// to [`update_value`](Self::update_value) every tick while the button is
/// held, and stops the drag on release.
///
/// # Example
/// ```rust,ignore
/// Slider::new("Volume", 0.0, 100.0, 50.0)
///     .step(5.0)
///     .on_change(|v| log::info!("volume {v}"))
/// ```
pub struct Slider {
    bounds: Rect,
    label: String,
    min: f32,
    max: f32,
    value: f32,
    step: f32,
    show_value: bool,
    dragging: bool,
    on_change: Option<Box<dyn FnMut(f32)>>,
}

impl Slider {
    /// `initial` is clamped into range. The default step is 1/100 of the range.
    pub fn new(label: impl Into<String>, min: f32, max: f32, initial: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            bounds: Rect::ZERO,
            label: label.into(),
            min,
            max,
            value: initial.clamp(min, max),
            step: (max - min) / 100.0,
            show_value: true,
            dragging: false,
            on_change: None,
        }
    }

    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Non-positive steps disable snapping.
    pub fn set_step(&mut self, step: f32) {
        self.step = step;
    }

    pub fn set_show_value(&mut self, show: bool) {
        self.show_value = show;
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value without notifying. Clamped into range.
    pub fn set_value(&mut self, v: f32) {
        self.value = v.clamp(self.min, self.max);
    }

    #[inline]
    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    // ── drag lifecycle ────────────────────────────────────────────────────

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn start_drag(&mut self) {
        log::debug!("slider {:?} drag start", self.label);
        self.dragging = true;
    }

    pub fn stop_drag(&mut self) {
        log::debug!("slider {:?} drag stop at {}", self.label, self.value);
        self.dragging = false;
    }

    #[inline]
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.bounds.contains((x, y).into())
    }

    /// Width of the draggable track: the full width minus the value readout.
    pub fn track_width(&self) -> f32 {
        let w = if self.show_value { self.bounds.w - VALUE_WIDTH } else { self.bounds.w };
        w.max(0.0)
    }

    fn track_rect(&self) -> Rect {
        let y = self.bounds.y + LABEL_HEIGHT + TRACK_GAP;
        Rect::new(self.bounds.x, y, self.track_width(), TRACK_HEIGHT)
    }

    fn normalized(&self) -> f32 {
        if self.max - self.min <= 0.0 {
            0.0
        } else {
            ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        }
    }

    /// Snaps to the nearest step counted from `min`, half rounding up.
    ///
    /// Steps are offsets from `min`, not absolute multiples of `step`: with
    /// `min = 1` and `step = 2` the grid is 1, 3, 5. The two agree whenever
    /// `min` is itself a multiple of `step`.
    fn snap(&self, v: f32) -> f32 {
        if self.step <= 0.0 {
            return v;
        }
        let n = ((v - self.min) / self.step + 0.5).floor();
        (self.min + n * self.step).clamp(self.min, self.max)
    }

    /// Maps pointer `x` across the track onto the range and snaps it.
    ///
    /// The track ends map exactly to `min` and `max`. The callback fires only
    /// when the value actually changes.
    pub fn update_value(&mut self, x: f32) {
        let track_w = self.track_width();
        let t = if track_w > 0.0 { ((x - self.bounds.x) / track_w).clamp(0.0, 1.0) } else { 0.0 };

        let v = if t <= 0.0 {
            self.min
        } else if t >= 1.0 {
            self.max
        } else {
            self.snap(self.min + t * (self.max - self.min))
        };

        if v != self.value {
            self.value = v;
            log::trace!("slider {:?} -> {}", self.label, v);
            if let Some(f) = &mut self.on_change {
                f(v);
            }
        }
    }
}

impl Widget for Slider {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn paint(&self, painter: &mut Painter<'_>, theme: &Theme) {
        let t = &theme.slider;
        let b = self.bounds;

        if !self.label.is_empty() {
            painter.text_v_centered(&self.label, b.x, b.y, LABEL_HEIGHT, t.text);
        }

        let track = self.track_rect();
        painter.fill_rect(track, t.track_fill);
        painter.stroke_rect(track, 1.0, t.track_stroke);

        let fill_w = track.w * self.normalized();
        if fill_w > 0.0 {
            painter.fill_rect(Rect::new(track.x, track.y, fill_w, track.h), t.fill);
        }

        let thumb = Vec2::new(track.x + fill_w, track.y + track.h / 2.0);
        painter.fill_circle(thumb, THUMB_RADIUS, t.thumb_fill);
        painter.stroke_circle(thumb, THUMB_RADIUS, 1.5, t.thumb_stroke);

        if self.show_value {
            let readout = format!("{:.1}", self.value);
            painter.text_v_centered(&readout, track.right() + 8.0, track.y, track.h, t.text);
        }
    }
}
