use trellis_engine::coords::{Rect, Vec2};
use trellis_engine::scene::ZIndex;

use crate::painter::Painter;
use crate::theme::Theme;
use crate::widget::Widget;

const TEXT_PADDING: f32 = 10.0;

/// A context menu row.
pub enum ContextMenuEntry {
    Action {
        label: String,
        on_click: Option<Box<dyn FnMut()>>,
        disabled: bool,
    },
    Separator,
}

impl ContextMenuEntry {
    #[inline]
    pub fn is_action(&self) -> bool {
        matches!(self, ContextMenuEntry::Action { .. })
    }
}

/// Popup menu anchored at a point rather than placed by layout.
///
/// Hit testing and [`click`](Self::click) count *actions* only; separators
/// take vertical space but have no index.
///
/// # Example
/// ```rust,ignore
/// ContextMenu::new()
///     .item("Copy", || log::info!("copy"))
///     .separator()
///     .disabled_item("Paste")
/// ```
pub struct ContextMenu {
    entries: Vec<ContextMenuEntry>,
    open: bool,
    anchor: Vec2,
    hovered: Option<usize>,
    item_height: f32,
    separator_height: f32,
    min_width: f32,
}

impl Default for ContextMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextMenu {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            open: false,
            anchor: Vec2::ZERO,
            hovered: None,
            item_height: 24.0,
            separator_height: 8.0,
            min_width: 150.0,
        }
    }

    pub fn item(mut self, label: impl Into<String>, f: impl FnMut() + 'static) -> Self {
        self.add_item(label, f);
        self
    }

    pub fn disabled_item(mut self, label: impl Into<String>) -> Self {
        self.entries.push(ContextMenuEntry::Action { label: label.into(), on_click: None, disabled: true });
        self
    }

    pub fn separator(mut self) -> Self {
        self.entries.push(ContextMenuEntry::Separator);
        self
    }

    pub fn add_item(&mut self, label: impl Into<String>, f: impl FnMut() + 'static) -> &mut Self {
        self.entries.push(ContextMenuEntry::Action {
            label: label.into(),
            on_click: Some(Box::new(f)),
            disabled: false,
        });
        self
    }

    pub fn add_separator(&mut self) -> &mut Self {
        self.entries.push(ContextMenuEntry::Separator);
        self
    }

    pub fn set_item_height(&mut self, h: f32) {
        self.item_height = h;
    }

    pub fn set_min_width(&mut self, w: f32) {
        self.min_width = w;
    }

    /// Enables or disables the `action_index`-th action.
    pub fn set_disabled(&mut self, action_index: usize, disabled: bool) {
        if let Some(ContextMenuEntry::Action { disabled: d, .. }) = self.action_mut(action_index) {
            *d = disabled;
        }
    }

    #[inline]
    pub fn entries(&self) -> &[ContextMenuEntry] {
        &self.entries
    }

    pub fn action_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_action()).count()
    }

    fn action_mut(&mut self, action_index: usize) -> Option<&mut ContextMenuEntry> {
        self.entries.iter_mut().filter(|e| e.is_action()).nth(action_index)
    }

    fn row_height(&self, entry: &ContextMenuEntry) -> f32 {
        if entry.is_action() { self.item_height } else { self.separator_height }
    }

    // ── open / close ──────────────────────────────────────────────────────

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Shows the menu with its top-left corner at `(x, y)`.
    pub fn open(&mut self, x: f32, y: f32) {
        log::debug!("context menu open at ({x}, {y})");
        self.open = true;
        self.anchor = Vec2::new(x, y);
        self.hovered = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.hovered = None;
    }

    // ── hit testing ───────────────────────────────────────────────────────

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_hovered(&mut self, action_index: Option<usize>) {
        self.hovered = action_index;
    }

    /// Action under `(x, y)`. Disabled actions, separators and points outside
    /// the open menu yield `None`.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        if !self.open || !self.bounds().contains(Vec2::new(x, y)) {
            return None;
        }
        let mut top = self.anchor.y;
        let mut action = 0;
        for entry in &self.entries {
            let h = self.row_height(entry);
            if let ContextMenuEntry::Action { disabled, .. } = entry {
                if y >= top && y < top + h {
                    return (!disabled).then_some(action);
                }
                action += 1;
            }
            top += h;
        }
        None
    }

    /// Runs the `action_index`-th action if it is enabled, then closes.
    ///
    /// The menu closes even when the index is out of range.
    pub fn click(&mut self, action_index: usize) {
        if let Some(ContextMenuEntry::Action { label, on_click, disabled }) = self.action_mut(action_index) {
            if !*disabled {
                log::debug!("context menu {:?} clicked", label);
                if let Some(f) = on_click {
                    f();
                }
            }
        }
        self.close();
    }
}

impl Widget for ContextMenu {
    /// Anchor plus content size while open; empty while closed.
    fn bounds(&self) -> Rect {
        if !self.open {
            return Rect::ZERO;
        }
        let h = self.entries.iter().map(|e| self.row_height(e)).sum();
        Rect::new(self.anchor.x, self.anchor.y, self.min_width, h)
    }

    fn paint(&self, painter: &mut Painter<'_>, theme: &Theme) {
        if !self.open {
            return;
        }
        let t = &theme.context_menu;
        let b = self.bounds();

        painter.with_layer(ZIndex::OVERLAY, |p| {
            p.fill_rect(b, t.fill);
            p.stroke_rect(b, 1.0, t.stroke);

            let mut y = b.y;
            let mut action = 0;
            for entry in &self.entries {
                let h = self.row_height(entry);
                match entry {
                    ContextMenuEntry::Separator => {
                        let sy = y + h / 2.0;
                        p.line(Vec2::new(b.x + 6.0, sy), Vec2::new(b.right() - 6.0, sy), 1.0, t.separator);
                    }
                    ContextMenuEntry::Action { label, disabled, .. } => {
                        let row = Rect::new(b.x, y, b.w, h);
                        if self.hovered == Some(action) && !disabled {
                            p.fill_rect(row.inset(1.0), t.hover);
                        }
                        let color = if *disabled { t.disabled_text } else { t.text };
                        p.text_v_centered(label, b.x + TEXT_PADDING, y, h, color);
                        action += 1;
                    }
                }
                y += h;
            }
        });
    }
}
