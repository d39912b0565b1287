//! Horizontal menu strip with drop-down submenus.
//!
//! Geometry is derived from a fixed per-character width estimate, so hit
//! testing does not depend on which font ends up painting the labels.

use trellis_engine::coords::{Rect, Vec2};
use trellis_engine::scene::ZIndex;

use crate::layout::SizeSpec;
use crate::painter::Painter;
use crate::theme::Theme;
use crate::widget::Widget;

const BAR_PADDING_X: f32 = 8.0;
const TOP_PADDING_X: f32 = 8.0;
const SUB_PADDING_X: f32 = 10.0;
const SUB_ITEM_HEIGHT: f32 = 22.0;
const SEPARATOR_HEIGHT: f32 = 8.0;
const MIN_SUBMENU_WIDTH: f32 = 120.0;
const MIN_BAR_WIDTH: f32 = 40.0;
const CHAR_WIDTH: f32 = 8.0;

/// How the bar's own width is chosen before layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum MenuBarWidth {
    /// Sum of the item widths plus outer padding.
    #[default]
    Auto,
    /// 100 % of the parent.
    Full,
}

/// A submenu row.
pub enum MenuEntry {
    Action { label: String, on_click: Option<Box<dyn FnMut()>> },
    Separator,
}

impl MenuEntry {
    #[inline]
    pub fn is_separator(&self) -> bool {
        matches!(self, MenuEntry::Separator)
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            MenuEntry::Action { label, .. } => Some(label),
            MenuEntry::Separator => None,
        }
    }
}

/// A top-level label, optionally owning a submenu.
///
/// An item without entries acts as a plain button on the bar.
pub struct MenuItem {
    label: String,
    on_click: Option<Box<dyn FnMut()>>,
    entries: Vec<MenuEntry>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), on_click: None, entries: Vec::new() }
    }

    /// Callback for items without a submenu.
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn entry(mut self, label: impl Into<String>, f: impl FnMut() + 'static) -> Self {
        self.add_entry(label, f);
        self
    }

    pub fn separator(mut self) -> Self {
        self.entries.push(MenuEntry::Separator);
        self
    }

    pub fn add_entry(&mut self, label: impl Into<String>, f: impl FnMut() + 'static) -> &mut Self {
        self.entries.push(MenuEntry::Action { label: label.into(), on_click: Some(Box::new(f)) });
        self
    }

    pub fn add_separator(&mut self) -> &mut Self {
        self.entries.push(MenuEntry::Separator);
        self
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    #[inline]
    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// Menu strip state machine: which submenu is open and what is hovered.
pub struct MenuBar {
    bounds: Rect,
    width_mode: MenuBarWidth,
    items: Vec<MenuItem>,
    open: Option<usize>,
    hovered_top: Option<usize>,
    hovered_sub: Option<usize>,
}

impl MenuBar {
    pub fn new(width_mode: MenuBarWidth) -> Self {
        Self {
            bounds: Rect::ZERO,
            width_mode,
            items: Vec::new(),
            open: None,
            hovered_top: None,
            hovered_sub: None,
        }
    }

    pub fn item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    /// Appends a top-level item and returns it for further entries.
    pub fn add_item(&mut self, item: MenuItem) -> &mut MenuItem {
        self.items.push(item);
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    #[inline]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[inline]
    pub fn width_mode(&self) -> MenuBarWidth {
        self.width_mode
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[inline]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    #[inline]
    pub fn hovered_top(&self) -> Option<usize> {
        self.hovered_top
    }

    #[inline]
    pub fn hovered_sub(&self) -> Option<usize> {
        self.hovered_sub
    }

    /// Closes any open submenu.
    pub fn close(&mut self) {
        if let Some(i) = self.open.take() {
            log::debug!("menu {:?} closed", self.items[i].label);
        }
        self.hovered_sub = None;
    }

    fn open_item(&mut self, index: usize) {
        log::debug!("menu {:?} opened", self.items[index].label);
        self.open = Some(index);
        self.hovered_sub = None;
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Width request for the layout node, recomputed before every layout pass.
    pub fn width_spec(&self) -> SizeSpec {
        match self.width_mode {
            MenuBarWidth::Full => SizeSpec::Percent(100.0),
            MenuBarWidth::Auto => {
                let items: f32 = self.items.iter().map(|it| top_item_width(&it.label)).sum();
                SizeSpec::Fixed((BAR_PADDING_X * 2.0 + items).max(MIN_BAR_WIDTH))
            }
        }
    }

    /// Top-level item rectangles, left to right from the bar's inner padding.
    pub fn top_item_rects(&self) -> Vec<Rect> {
        let b = self.bounds;
        let mut x = b.x + BAR_PADDING_X;
        self.items
            .iter()
            .map(|it| {
                let w = top_item_width(&it.label);
                let r = Rect::new(x, b.y, w, b.h);
                x += w;
                r
            })
            .collect()
    }

    /// Entry rectangles of the open submenu, stacked below its top item.
    pub fn open_entry_rects(&self) -> Vec<Rect> {
        let Some(open) = self.open else {
            return Vec::new();
        };
        let item = &self.items[open];
        let Some(top) = self.top_item_rects().get(open).copied() else {
            return Vec::new();
        };
        let w = submenu_width(item);
        let mut y = self.bounds.bottom();
        item.entries
            .iter()
            .map(|e| {
                let h = if e.is_separator() { SEPARATOR_HEIGHT } else { SUB_ITEM_HEIGHT };
                let r = Rect::new(top.x, y, w, h);
                y += h;
                r
            })
            .collect()
    }

    /// Outline of the open submenu, `None` when nothing with entries is open.
    pub fn open_submenu_bounds(&self) -> Option<Rect> {
        let rects = self.open_entry_rects();
        let first = *rects.first()?;
        let h = rects.iter().map(|r| r.h).sum();
        Some(Rect::new(first.x, first.y, first.w, h))
    }

    fn hit_top(&self, p: Vec2) -> Option<usize> {
        self.top_item_rects().iter().position(|r| r.contains(p))
    }

    fn hit_entry(&self, p: Vec2, include_separators: bool) -> Option<usize> {
        let open = self.open?;
        let i = self.open_entry_rects().iter().position(|r| r.contains(p))?;
        if !include_separators && self.items[open].entries[i].is_separator() {
            return None;
        }
        Some(i)
    }

    // ── pointer ───────────────────────────────────────────────────────────

    /// Hover tracking. Moving onto another item that has entries while a
    /// submenu is open switches to it.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let p = Vec2::new(x, y);
        self.hovered_top = self.hit_top(p);

        if let (Some(open), Some(hover)) = (self.open, self.hovered_top) {
            if hover != open && self.items[hover].has_entries() {
                self.open_item(hover);
            }
        }

        self.hovered_sub = if self.open.is_some() { self.hit_entry(p, false) } else { None };
    }

    /// Handles a press. Returns `true` when the press belongs to this bar.
    ///
    /// While a submenu is open, every press is consumed: entries fire and
    /// close, separators absorb the click, anything else just closes.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> bool {
        let p = Vec2::new(x, y);

        if let Some(top) = self.hit_top(p) {
            if !self.items[top].has_entries() {
                log::debug!("menu item {:?} clicked", self.items[top].label);
                if let Some(f) = &mut self.items[top].on_click {
                    f();
                }
                self.close();
            } else if self.open == Some(top) {
                self.close();
            } else {
                self.open_item(top);
            }
            return true;
        }

        let Some(open) = self.open else {
            return false;
        };

        match self.hit_entry(p, true) {
            Some(i) => {
                if let MenuEntry::Action { label, on_click } = &mut self.items[open].entries[i] {
                    log::debug!("menu entry {:?} clicked", label);
                    if let Some(f) = on_click {
                        f();
                    }
                    self.close();
                }
            }
            None => self.close(),
        }
        true
    }

    fn paint_submenu(&self, painter: &mut Painter<'_>, theme: &Theme) {
        let t = &theme.menu;
        let (Some(open), Some(outline)) = (self.open, self.open_submenu_bounds()) else {
            return;
        };
        painter.fill_rect(outline, t.fill);
        painter.stroke_rect(outline, 1.0, t.stroke);

        for (i, (r, entry)) in self.open_entry_rects().iter().zip(&self.items[open].entries).enumerate() {
            match entry {
                MenuEntry::Separator => {
                    let y = r.y + r.h / 2.0;
                    painter.fill_rect(Rect::new(r.x + 6.0, y, r.w - 12.0, 1.0), t.separator);
                }
                MenuEntry::Action { label, .. } => {
                    if self.hovered_sub == Some(i) {
                        painter.fill_rect(*r, t.hover);
                    }
                    painter.text_v_centered(label, r.x + SUB_PADDING_X, r.y, r.h, t.text);
                }
            }
        }
    }
}

fn text_width(label: &str) -> f32 {
    label.chars().count() as f32 * CHAR_WIDTH
}

fn top_item_width(label: &str) -> f32 {
    text_width(label) + TOP_PADDING_X * 2.0
}

fn submenu_width(item: &MenuItem) -> f32 {
    item.entries
        .iter()
        .filter_map(MenuEntry::label)
        .map(|l| text_width(l) + SUB_PADDING_X * 2.0)
        .fold(SUB_PADDING_X * 2.0, f32::max)
        .max(MIN_SUBMENU_WIDTH)
}

impl Widget for MenuBar {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn paint(&self, painter: &mut Painter<'_>, theme: &Theme) {
        let t = &theme.menu;
        painter.fill_rect(self.bounds, t.fill);
        painter.stroke_rect(self.bounds, 1.0, t.stroke);

        for (i, (r, item)) in self.top_item_rects().iter().zip(&self.items).enumerate() {
            if self.hovered_top == Some(i) {
                painter.fill_rect(*r, t.hover);
            }
            if self.open == Some(i) {
                painter.fill_rect(*r, t.active);
            }
            painter.text_v_centered(&item.label, r.x + TOP_PADDING_X, r.y, r.h, t.text);
        }

        painter.with_layer(ZIndex::OVERLAY, |p| self.paint_submenu(p, theme));
    }
}
