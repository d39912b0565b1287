use trellis_engine::coords::{Rect, Vec2};
use trellis_engine::scene::ZIndex;

use crate::painter::Painter;
use crate::theme::Theme;
use crate::widget::Widget;

const TEXT_PADDING: f32 = 8.0;
const ARROW_SIZE: f32 = 6.0;

/// An option within a [`Dropdown`].
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// Collapsible option list.
///
/// Closed, it shows the selected label (or its placeholder). Open, the list
/// hangs directly below the control with one fixed-height row per option.
pub struct Dropdown {
    bounds: Rect,
    placeholder: String,
    options: Vec<DropdownOption>,
    selected: Option<usize>,
    hovered: Option<usize>,
    open: bool,
    item_height: f32,
    on_change: Option<Box<dyn FnMut(usize, &str)>>,
}

impl Dropdown {
    pub fn new(placeholder: impl Into<String>, options: Vec<DropdownOption>) -> Self {
        Self {
            bounds: Rect::ZERO,
            placeholder: placeholder.into(),
            options,
            selected: None,
            hovered: None,
            open: false,
            item_height: 24.0,
            on_change: None,
        }
    }

    pub fn item_height(mut self, h: f32) -> Self {
        self.item_height = h;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(usize, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn set_item_height(&mut self, h: f32) {
        self.item_height = h;
    }

    #[inline]
    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    /// Replaces every option and clears selection and hover.
    pub fn set_options(&mut self, options: Vec<DropdownOption>) {
        self.options = options;
        self.selected = None;
        self.hovered = None;
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&DropdownOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Label shown in the closed control.
    pub fn display_text(&self) -> &str {
        self.selected_option().map_or(self.placeholder.as_str(), |o| o.label.as_str())
    }

    // ── open / close ──────────────────────────────────────────────────────

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        log::debug!("dropdown {:?} open", self.placeholder);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.hovered = None;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    // ── hit testing ───────────────────────────────────────────────────────

    #[inline]
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.bounds.contains((x, y).into())
    }

    /// Rectangle of the expanded list, `None` while closed.
    pub fn list_bounds(&self) -> Option<Rect> {
        if !self.open {
            return None;
        }
        let b = self.bounds;
        Some(Rect::new(b.x, b.bottom(), b.w, self.options.len() as f32 * self.item_height))
    }

    /// Option row under `(x, y)` in the open list.
    pub fn hit_test_list(&self, x: f32, y: f32) -> Option<usize> {
        let list = self.list_bounds()?;
        if !list.contains(Vec2::new(x, y)) || self.item_height <= 0.0 {
            return None;
        }
        let row = ((y - list.y) / self.item_height) as usize;
        (row < self.options.len()).then_some(row)
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index;
    }

    /// Selects `index`, reports it and closes. Out of range is a no-op.
    pub fn select(&mut self, index: usize) {
        let Some(opt) = self.options.get(index) else {
            return;
        };
        self.selected = Some(index);
        log::debug!("dropdown select {} ({:?})", index, opt.value);
        if let Some(f) = &mut self.on_change {
            f(index, &opt.value);
        }
        self.close();
    }

    fn paint_arrow(&self, painter: &mut Painter<'_>, theme: &Theme) {
        let b = self.bounds;
        let x = b.right() - ARROW_SIZE - TEXT_PADDING;
        let y = b.y + (b.h - ARROW_SIZE) / 2.0;
        let c = theme.dropdown.arrow;
        // Three shrinking bars: pointing down when closed, up when open.
        for i in 0..3 {
            let inset = i as f32;
            let w = ARROW_SIZE - inset * 2.0;
            let row_y = if self.open { y + ARROW_SIZE - inset * 2.0 } else { y + inset * 2.0 };
            painter.fill_rect(Rect::new(x + inset, row_y, w, 1.0), c);
        }
    }

    fn paint_list(&self, painter: &mut Painter<'_>, theme: &Theme, list: Rect) {
        let t = &theme.dropdown;
        painter.fill_rect(list, t.fill);
        painter.stroke_rect(list, 1.0, t.stroke);

        for (i, opt) in self.options.iter().enumerate() {
            let row = Rect::new(list.x, list.y + i as f32 * self.item_height, list.w, self.item_height);
            if self.selected == Some(i) {
                painter.fill_rect(row.inset(1.0), t.selected);
            } else if self.hovered == Some(i) {
                painter.fill_rect(row.inset(1.0), t.hover);
            }
            painter.text_v_centered(&opt.label, row.x + TEXT_PADDING, row.y, row.h, t.text);
        }
    }
}

impl Widget for Dropdown {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn paint(&self, painter: &mut Painter<'_>, theme: &Theme) {
        let t = &theme.dropdown;
        let b = self.bounds;
        painter.fill_rect(b, t.fill);
        painter.stroke_rect(b, 1.0, t.stroke);
        painter.text_v_centered(self.display_text(), b.x + TEXT_PADDING, b.y, b.h, t.text);
        self.paint_arrow(painter, theme);

        if let Some(list) = self.list_bounds() {
            painter.with_layer(ZIndex::OVERLAY, |p| self.paint_list(p, theme, list));
        }
    }
}
