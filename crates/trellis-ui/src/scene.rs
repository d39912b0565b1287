use trellis_engine::coords::Rect;

use crate::action::ActionQueue;
use crate::handle::{Handle, WidgetId};
use crate::layout::{self, Align, LayoutNode, LayoutTree, NodeId, SizeSpec};
use crate::painter::Painter;
use crate::registry::Registry;
use crate::theme::Theme;
use crate::widgets::button::Button;
use crate::widgets::checkbox::Checkbox;
use crate::widgets::context_menu::ContextMenu;
use crate::widgets::dropdown::Dropdown;
use crate::widgets::menu_bar::MenuBar;
use crate::widgets::panel::Panel;
use crate::widgets::radio::RadioGroup;
use crate::widgets::slider::Slider;

// ── Parent ────────────────────────────────────────────────────────────────

/// Where a new widget's layout node is attached.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parent {
    Root,
    Panel(Handle<Panel>),
}

impl From<Handle<Panel>> for Parent {
    fn from(h: Handle<Panel>) -> Self {
        Parent::Panel(h)
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────

/// Owns the layout tree and every widget, grouped by kind.
///
/// Widgets are added through the `add_*` constructors, which attach a layout
/// node under the given parent and return a typed [`Handle`]. Each kind is
/// kept in creation order; the driver dispatches and paints in that order.
///
/// # Example
///
/// ```rust,ignore
/// let mut scene = Scene::new();
/// let bar = scene.add_menu_bar(Parent::Root, SizeSpec::Fixed(28.0), MenuBar::new(MenuBarWidth::Full));
/// let body = scene.add_panel(Parent::Root, SizeSpec::Percent(100.0), SizeSpec::Fill, Panel::new());
/// scene.add_button(body, SizeSpec::Fixed(120.0), SizeSpec::Fixed(32.0), Button::new("OK"));
/// scene.layout(800.0, 600.0);
/// ```
pub struct Scene {
    tree: LayoutTree,
    root: NodeId,
    scale: f32,
    next_id: u32,
    actions: ActionQueue,

    panels: Registry<Panel>,
    buttons: Registry<Button>,
    menu_bars: Registry<MenuBar>,
    checkboxes: Registry<Checkbox>,
    radio_groups: Registry<RadioGroup>,
    sliders: Registry<Slider>,
    dropdowns: Registry<Dropdown>,
    context_menus: Registry<ContextMenu>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! registry_access {
    ($ty:ty, $field:ident, $field_mut:ident, $one:ident, $one_mut:ident) => {
        pub fn $field(&self) -> &Registry<$ty> {
            &self.$field
        }

        pub fn $field_mut(&mut self) -> &mut Registry<$ty> {
            &mut self.$field
        }

        pub fn $one(&self, h: Handle<$ty>) -> Option<&$ty> {
            self.$field.get(h)
        }

        pub fn $one_mut(&mut self, h: Handle<$ty>) -> Option<&mut $ty> {
            self.$field.get_mut(h)
        }
    };
}

impl Scene {
    pub fn new() -> Self {
        let mut tree = LayoutTree::new();
        let root = tree.insert(LayoutNode::new(SizeSpec::Fill, SizeSpec::Fill));
        Self {
            tree,
            root,
            scale: 1.0,
            next_id: 0,
            actions: ActionQueue::new(),
            panels: Registry::default(),
            buttons: Registry::default(),
            menu_bars: Registry::default(),
            checkboxes: Registry::default(),
            radio_groups: Registry::default(),
            sliders: Registry::default(),
            dropdowns: Registry::default(),
            context_menus: Registry::default(),
        }
    }

    // ── scale ─────────────────────────────────────────────────────────────

    /// Root scale factor. Always positive.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Non-positive or non-finite values are stored as `1.0`.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
    }

    // ── tree ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Rectangle of the root node after the last layout pass.
    pub fn root_bounds(&self) -> Rect {
        self.tree.bounds(self.root)
    }

    /// Sets how `parent` places its children.
    pub fn set_alignment(&mut self, parent: impl Into<Parent>, h: Align, v: Align) {
        let node = self.parent_node(parent.into());
        self.tree.set_alignment(node, h, v);
    }

    fn parent_node(&self, parent: Parent) -> NodeId {
        match parent {
            Parent::Root => self.root,
            Parent::Panel(h) => match self.panels.node(h) {
                Some(node) => node,
                None => {
                    log::warn!("unknown panel {:?}; attaching to root", h);
                    self.root
                }
            },
        }
    }

    fn next_handle<T>(&mut self) -> Handle<T> {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        Handle::new(id)
    }

    fn attach(&mut self, parent: Parent, width: SizeSpec, height: SizeSpec) -> NodeId {
        let parent = self.parent_node(parent);
        self.tree.insert_child(parent, LayoutNode::new(width, height))
    }

    // ── constructors ──────────────────────────────────────────────────────

    pub fn add_panel(
        &mut self,
        parent: impl Into<Parent>,
        width: SizeSpec,
        height: SizeSpec,
        panel: Panel,
    ) -> Handle<Panel> {
        let node = self.attach(parent.into(), width, height);
        let h = self.next_handle();
        self.panels.insert(h, Some(node), panel);
        h
    }

    pub fn add_button(
        &mut self,
        parent: impl Into<Parent>,
        width: SizeSpec,
        height: SizeSpec,
        button: Button,
    ) -> Handle<Button> {
        let node = self.attach(parent.into(), width, height);
        let h = self.next_handle();
        self.buttons.insert(h, Some(node), button);
        h
    }

    /// Adds a menu bar. Its width follows the bar's [`MenuBarWidth`] mode and
    /// is refreshed on every layout pass.
    ///
    /// [`MenuBarWidth`]: crate::widgets::menu_bar::MenuBarWidth
    pub fn add_menu_bar(
        &mut self,
        parent: impl Into<Parent>,
        height: SizeSpec,
        bar: MenuBar,
    ) -> Handle<MenuBar> {
        let node = self.attach(parent.into(), bar.width_spec(), height);
        let h = self.next_handle();
        self.menu_bars.insert(h, Some(node), bar);
        h
    }

    pub fn add_checkbox(
        &mut self,
        parent: impl Into<Parent>,
        width: SizeSpec,
        height: SizeSpec,
        checkbox: Checkbox,
    ) -> Handle<Checkbox> {
        let node = self.attach(parent.into(), width, height);
        let h = self.next_handle();
        self.checkboxes.insert(h, Some(node), checkbox);
        h
    }

    pub fn add_radio_group(
        &mut self,
        parent: impl Into<Parent>,
        width: SizeSpec,
        height: SizeSpec,
        group: RadioGroup,
    ) -> Handle<RadioGroup> {
        let node = self.attach(parent.into(), width, height);
        let h = self.next_handle();
        self.radio_groups.insert(h, Some(node), group);
        h
    }

    pub fn add_slider(
        &mut self,
        parent: impl Into<Parent>,
        width: SizeSpec,
        height: SizeSpec,
        slider: Slider,
    ) -> Handle<Slider> {
        let node = self.attach(parent.into(), width, height);
        let h = self.next_handle();
        self.sliders.insert(h, Some(node), slider);
        h
    }

    pub fn add_dropdown(
        &mut self,
        parent: impl Into<Parent>,
        width: SizeSpec,
        height: SizeSpec,
        dropdown: Dropdown,
    ) -> Handle<Dropdown> {
        let node = self.attach(parent.into(), width, height);
        let h = self.next_handle();
        self.dropdowns.insert(h, Some(node), dropdown);
        h
    }

    /// Adds a free-floating context menu. It has no layout node and is shown
    /// at a pointer position by [`ContextMenu::open`].
    pub fn add_context_menu(&mut self, menu: ContextMenu) -> Handle<ContextMenu> {
        let h = self.next_handle();
        self.context_menus.insert(h, None, menu);
        h
    }

    /// Adds `menu` and makes it the right-click menu of `panel`, replacing
    /// any previous one.
    pub fn attach_context_menu(&mut self, panel: Handle<Panel>, menu: ContextMenu) -> Handle<ContextMenu> {
        let h = self.add_context_menu(menu);
        match self.panels.get_mut(panel) {
            Some(p) => p.set_context_menu(h),
            None => log::warn!("attach_context_menu: unknown panel {:?}", panel),
        }
        h
    }

    // ── access ────────────────────────────────────────────────────────────

    registry_access!(Panel, panels, panels_mut, panel, panel_mut);
    registry_access!(Button, buttons, buttons_mut, button, button_mut);
    registry_access!(MenuBar, menu_bars, menu_bars_mut, menu_bar, menu_bar_mut);
    registry_access!(Checkbox, checkboxes, checkboxes_mut, checkbox, checkbox_mut);
    registry_access!(RadioGroup, radio_groups, radio_groups_mut, radio_group, radio_group_mut);
    registry_access!(Slider, sliders, sliders_mut, slider, slider_mut);
    registry_access!(Dropdown, dropdowns, dropdowns_mut, dropdown, dropdown_mut);
    registry_access!(ContextMenu, context_menus, context_menus_mut, context_menu, context_menu_mut);

    /// Number of widgets across all kinds.
    pub fn widget_count(&self) -> usize {
        self.panels.len()
            + self.buttons.len()
            + self.menu_bars.len()
            + self.checkboxes.len()
            + self.radio_groups.len()
            + self.sliders.len()
            + self.dropdowns.len()
            + self.context_menus.len()
    }

    // ── popups ────────────────────────────────────────────────────────────

    pub fn any_popup_open(&self) -> bool {
        self.menu_bars.widgets().any(MenuBar::is_open)
            || self.dropdowns.widgets().any(Dropdown::is_open)
            || self.context_menus.widgets().any(ContextMenu::is_open)
    }

    /// Closes open submenus, dropdown lists and context menus.
    pub fn close_popups(&mut self) {
        self.menu_bars.widgets_mut().for_each(MenuBar::close);
        self.dropdowns.widgets_mut().for_each(Dropdown::close);
        self.context_menus.widgets_mut().for_each(ContextMenu::close);
    }

    // ── actions ───────────────────────────────────────────────────────────

    /// Queue shared with widget callbacks. See [`ActionQueue`].
    pub fn actions(&self) -> ActionQueue {
        self.actions.clone()
    }

    /// Runs queued actions in push order. Actions queued while draining run
    /// in the same call. Returns how many ran.
    pub fn apply_actions(&mut self) -> usize {
        let mut ran = 0;
        loop {
            let batch = self.actions.take();
            if batch.is_empty() {
                return ran;
            }
            for action in batch {
                action(self);
                ran += 1;
            }
        }
    }

    // ── layout / paint ────────────────────────────────────────────────────

    /// Lays out the whole tree into a `width × height` logical area and
    /// copies the result into every widget.
    pub fn layout(&mut self, width: f32, height: f32) {
        for (h, bar) in self.menu_bars.iter() {
            if let Some(node) = self.menu_bars.node(h) {
                self.tree.node_mut(node).width = bar.width_spec();
            }
        }

        layout::layout(&mut self.tree, self.root, width, height);

        self.panels.sync_bounds(&self.tree);
        self.buttons.sync_bounds(&self.tree);
        self.menu_bars.sync_bounds(&self.tree);
        self.checkboxes.sync_bounds(&self.tree);
        self.radio_groups.sync_bounds(&self.tree);
        self.sliders.sync_bounds(&self.tree);
        self.dropdowns.sync_bounds(&self.tree);
    }

    /// Paints every widget. Popups switch themselves to the overlay layer.
    pub fn paint(&self, painter: &mut Painter<'_>, theme: &Theme) {
        self.panels.paint_all(painter, theme);
        self.buttons.paint_all(painter, theme);
        self.checkboxes.paint_all(painter, theme);
        self.radio_groups.paint_all(painter, theme);
        self.sliders.paint_all(painter, theme);
        self.dropdowns.paint_all(painter, theme);
        self.menu_bars.paint_all(painter, theme);
        self.context_menus.paint_all(painter, theme);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use trellis_engine::scene::DrawList;
    use trellis_engine::text::{FontId, MonospaceMetrics};

    use super::*;
    use crate::widget::Widget;
    use crate::widgets::menu_bar::{MenuBarWidth, MenuItem};
    use crate::widgets::radio::RadioOption;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn handles_are_unique_across_kinds() {
        let mut scene = Scene::new();
        let p = scene.add_panel(Parent::Root, SizeSpec::Fill, SizeSpec::Fill, Panel::new());
        let b = scene.add_button(p, SizeSpec::Fixed(10.0), SizeSpec::Fixed(10.0), Button::new("a"));
        let c = scene.add_context_menu(ContextMenu::new());
        assert_ne!(p.id(), b.id());
        assert_ne!(b.id(), c.id());
        assert_eq!(scene.widget_count(), 3);
    }

    #[test]
    fn lookup_by_handle() {
        let mut scene = Scene::new();
        let b = scene.add_button(Parent::Root, SizeSpec::Fill, SizeSpec::Fill, Button::new("go"));
        assert_eq!(scene.button(b).map(Button::label), Some("go"));
        scene.button_mut(b).unwrap().set_label("stop");
        assert_eq!(scene.button(b).unwrap().label(), "stop");
    }

    #[test]
    fn registry_keeps_creation_order() {
        let mut scene = Scene::new();
        for label in ["a", "b", "c"] {
            scene.add_button(Parent::Root, SizeSpec::Fill, SizeSpec::Fixed(5.0), Button::new(label));
        }
        let labels: Vec<&str> = scene.buttons().widgets().map(Button::label).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        let rev: Vec<&str> = scene.buttons().widgets().rev().map(Button::label).collect();
        assert_eq!(rev, vec!["c", "b", "a"]);
    }

    #[test]
    fn non_positive_scale_stored_as_one() {
        let mut scene = Scene::new();
        scene.set_scale(0.0);
        assert_eq!(scene.scale(), 1.0);
        scene.set_scale(-2.0);
        assert_eq!(scene.scale(), 1.0);
        scene.set_scale(1.5);
        assert_eq!(scene.scale(), 1.5);
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn menu_bar_and_fill_panel_split_the_window() {
        let mut scene = Scene::new();
        let bar = scene.add_menu_bar(
            Parent::Root,
            SizeSpec::Fixed(28.0),
            MenuBar::new(MenuBarWidth::Full).item(MenuItem::new("File")),
        );
        let body = scene.add_panel(Parent::Root, SizeSpec::Percent(100.0), SizeSpec::Fill, Panel::new());
        scene.layout(800.0, 600.0);

        assert_eq!(scene.menu_bar(bar).unwrap().bounds(), r(0.0, 0.0, 800.0, 28.0));
        assert_eq!(scene.panel(body).unwrap().bounds(), r(0.0, 28.0, 800.0, 572.0));
    }

    #[test]
    fn fill_width_beside_full_menu_bar_gets_nothing() {
        let mut scene = Scene::new();
        scene.add_menu_bar(Parent::Root, SizeSpec::Fixed(28.0), MenuBar::new(MenuBarWidth::Full));
        let body = scene.add_panel(Parent::Root, SizeSpec::Fill, SizeSpec::Fill, Panel::new());
        scene.layout(800.0, 600.0);
        assert_eq!(scene.panel(body).unwrap().bounds(), r(0.0, 28.0, 0.0, 572.0));
    }

    #[test]
    fn auto_menu_bar_width_tracks_items() {
        let mut scene = Scene::new();
        let bar = scene.add_menu_bar(Parent::Root, SizeSpec::Fixed(28.0), MenuBar::new(MenuBarWidth::Auto));
        scene.layout(800.0, 600.0);
        let before = scene.menu_bar(bar).unwrap().bounds().w;

        scene.menu_bar_mut(bar).unwrap().add_item(MenuItem::new("Settings"));
        scene.layout(800.0, 600.0);
        let after = scene.menu_bar(bar).unwrap().bounds().w;
        assert!(after > before);
    }

    #[test]
    fn children_of_panel_are_offset_by_panel() {
        let mut scene = Scene::new();
        scene.add_panel(Parent::Root, SizeSpec::Fill, SizeSpec::Fixed(40.0), Panel::new());
        let body = scene.add_panel(Parent::Root, SizeSpec::Fill, SizeSpec::Fill, Panel::new());
        let b = scene.add_button(body, SizeSpec::Fixed(100.0), SizeSpec::Fixed(30.0), Button::new("x"));
        scene.layout(400.0, 300.0);
        assert_eq!(scene.button(b).unwrap().bounds(), r(0.0, 40.0, 100.0, 30.0));
    }

    #[test]
    fn alignment_applies_to_panel_children() {
        let mut scene = Scene::new();
        let body = scene.add_panel(Parent::Root, SizeSpec::Fill, SizeSpec::Fill, Panel::new());
        scene.set_alignment(body, Align::Center, Align::Center);
        let b = scene.add_button(body, SizeSpec::Fixed(100.0), SizeSpec::Fixed(50.0), Button::new("x"));
        scene.layout(300.0, 250.0);
        assert_eq!(scene.button(b).unwrap().bounds(), r(100.0, 100.0, 100.0, 50.0));
    }

    #[test]
    fn radio_row_hit_after_layout() {
        let mut scene = Scene::new();
        scene.add_panel(Parent::Root, SizeSpec::Fill, SizeSpec::Fixed(10.0), Panel::new());
        let g = scene.add_radio_group(
            Parent::Root,
            SizeSpec::Fixed(200.0),
            SizeSpec::Fixed(72.0),
            RadioGroup::new(vec![
                RadioOption::new("Low", "low"),
                RadioOption::new("Mid", "mid"),
                RadioOption::new("High", "high"),
            ]),
        );
        scene.layout(400.0, 300.0);
        let group = scene.radio_group(g).unwrap();
        assert_eq!(group.bounds().y, 10.0);
        assert_eq!(group.hit_test(20.0, 50.0), Some(1));
    }

    #[test]
    fn context_menu_has_no_layout_node() {
        let mut scene = Scene::new();
        let p = scene.add_panel(Parent::Root, SizeSpec::Fill, SizeSpec::Fill, Panel::new());
        let before = scene.tree().len();
        let m = scene.attach_context_menu(p, ContextMenu::new().item("Copy", || {}));
        assert_eq!(scene.tree().len(), before);
        assert_eq!(scene.context_menus().node(m), None);
        assert_eq!(scene.panel(p).unwrap().context_menu(), Some(m));
    }

    // ── popups ────────────────────────────────────────────────────────────

    #[test]
    fn close_popups_closes_everything() {
        let mut scene = Scene::new();
        let d = scene.add_dropdown(Parent::Root, SizeSpec::Fixed(100.0), SizeSpec::Fixed(24.0), Dropdown::new("pick", vec![]));
        let m = scene.add_context_menu(ContextMenu::new().item("Copy", || {}));
        scene.dropdown_mut(d).unwrap().open();
        scene.context_menu_mut(m).unwrap().open(5.0, 5.0);
        assert!(scene.any_popup_open());

        scene.close_popups();
        assert!(!scene.any_popup_open());
    }

    // ── actions ───────────────────────────────────────────────────────────

    #[test]
    fn queued_actions_mutate_the_scene() {
        let mut scene = Scene::new();
        let s = scene.add_slider(Parent::Root, SizeSpec::Fixed(200.0), SizeSpec::Fixed(30.0), Slider::new("v", 0.0, 100.0, 10.0));
        let queue = scene.actions();
        queue.push(move |scene| {
            if let Some(slider) = scene.slider_mut(s) {
                slider.set_value(75.0);
            }
        });
        assert_eq!(queue.len(), 1);
        assert_eq!(scene.apply_actions(), 1);
        assert_eq!(scene.slider(s).unwrap().value(), 75.0);
        assert!(queue.is_empty());
    }

    #[test]
    fn actions_queued_by_actions_run_in_same_drain() {
        let mut scene = Scene::new();
        let hits = Rc::new(Cell::new(0));
        let queue = scene.actions();
        let inner = queue.clone();
        let h = hits.clone();
        queue.push(move |_| {
            h.set(h.get() + 1);
            let h2 = h.clone();
            inner.push(move |_| h2.set(h2.get() + 1));
        });
        assert_eq!(scene.apply_actions(), 2);
        assert_eq!(hits.get(), 2);
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paint_emits_commands_for_each_widget() {
        let mut scene = Scene::new();
        let p = scene.add_panel(Parent::Root, SizeSpec::Fill, SizeSpec::Fill, Panel::new());
        scene.add_button(p, SizeSpec::Fixed(80.0), SizeSpec::Fixed(24.0), Button::new("ok"));
        scene.layout(200.0, 100.0);

        let metrics = MonospaceMetrics::default();
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list, &metrics, FontId::DEFAULT, 13.0);
            scene.paint(&mut painter, &Theme::default());
        }
        assert!(list.len() >= 2);
    }
}
