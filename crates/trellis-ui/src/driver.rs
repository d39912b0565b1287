use trellis_engine::coords::{Rect, Vec2, Viewport};
use trellis_engine::input::{InputState, Key, MouseButton};
use trellis_engine::scene::{DrawList, ZIndex};
use trellis_engine::text::TextMeasure;

use crate::painter::Painter;
use crate::scene::Scene;
use crate::theme::Theme;
use crate::widget::Widget;

const DEBUG_LABEL: &str = "Debug Mode";
const DEBUG_MARGIN: f32 = 8.0;

// ── DriverConfig ──────────────────────────────────────────────────────────

/// Frame driver settings.
///
/// ```rust,ignore
/// let config = DriverConfig::default()
///     .window_scale(1.25)
///     .auto_dpi(true)
///     .scale_hotkeys(true);
/// ```
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Scale applied on top of the scene's root scale.
    pub window_scale: f32,
    /// Multiply in the device scale factor passed to [`Driver::update`].
    pub auto_dpi: bool,
    /// Ctrl + `=` / `-` adjust the window scale.
    pub scale_hotkeys: bool,
    pub scale_step: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Toggles the debug overlay.
    pub debug_key: Key,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            window_scale: 1.0,
            auto_dpi: false,
            scale_hotkeys: false,
            scale_step: 0.1,
            min_scale: 0.5,
            max_scale: 4.0,
            debug_key: Key::F12,
        }
    }
}

impl DriverConfig {
    pub fn window_scale(mut self, scale: f32) -> Self {
        self.window_scale = scale;
        self
    }

    pub fn auto_dpi(mut self, enabled: bool) -> Self {
        self.auto_dpi = enabled;
        self
    }

    pub fn scale_hotkeys(mut self, enabled: bool) -> Self {
        self.scale_hotkeys = enabled;
        self
    }

    pub fn scale_step(mut self, step: f32) -> Self {
        self.scale_step = step;
        self
    }

    pub fn scale_limits(mut self, min: f32, max: f32) -> Self {
        self.min_scale = min;
        self.max_scale = max;
        self
    }

    pub fn debug_key(mut self, key: Key) -> Self {
        self.debug_key = key;
        self
    }
}

fn normalize_scale(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 { v } else { 1.0 }
}

// ── Driver ────────────────────────────────────────────────────────────────

/// Runs one UI tick: layout, pointer routing, painting.
///
/// Left presses are offered to widgets in a fixed order and the first one
/// that claims the press wins:
///
/// 1. an open context menu (hit fires the action, miss closes; consumed either way)
/// 2. menu bars
/// 3. buttons
/// 4. checkboxes
/// 5. radio groups
/// 6. sliders (starts a drag)
/// 7. dropdowns
///
/// Within a kind, widgets are tried in creation order. This order is the
/// z-order; nothing is depth-tested.
///
/// Callbacks run synchronously inside dispatch. Scene mutations they queue
/// on [`Scene::actions`] are applied once the firing widget has finished its
/// own transition, before the tick continues.
///
/// # Frame loop
///
/// ```rust,ignore
/// let list = driver.frame(&mut scene, &input, viewport, device_scale, &fonts);
/// renderer.submit(list, driver.scale());
/// input.end_frame();
/// ```
pub struct Driver {
    config: DriverConfig,
    window_scale: f32,
    scale: f32,
    logical: Vec2,
    pointer: Vec2,
    debug: bool,
    hovered: Option<Rect>,
    theme: Theme,
    draw_list: DrawList,
    on_window_scale_changed: Option<Box<dyn FnMut(f32)>>,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            window_scale: normalize_scale(config.window_scale),
            config,
            scale: 1.0,
            logical: Vec2::ZERO,
            pointer: Vec2::ZERO,
            debug: false,
            hovered: None,
            theme: Theme::default(),
            draw_list: DrawList::new(),
            on_window_scale_changed: None,
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn on_window_scale_changed(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_window_scale_changed = Some(Box::new(f));
        self
    }

    pub fn set_on_window_scale_changed(&mut self, f: impl FnMut(f32) + 'static) {
        self.on_window_scale_changed = Some(Box::new(f));
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn window_scale(&self) -> f32 {
        self.window_scale
    }

    /// Non-positive values count as `1.0`. The change callback fires only
    /// when the stored value changes.
    pub fn set_window_scale(&mut self, scale: f32) {
        let next = normalize_scale(scale);
        if next == self.window_scale {
            return;
        }
        self.window_scale = next;
        log::debug!("window scale -> {next}");
        if let Some(f) = &mut self.on_window_scale_changed {
            f(next);
        }
    }

    /// Root scale × window scale × device scale (when auto-DPI is on).
    pub fn effective_scale(&self, scene: &Scene, device_scale: f32) -> f32 {
        let mut s = scene.scale() * self.window_scale;
        if self.config.auto_dpi && device_scale.is_finite() && device_scale > 0.0 {
            s *= device_scale;
        }
        s
    }

    /// Effective scale used by the last update. Renderers multiply logical
    /// draw coordinates by this.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Logical size the last layout ran at.
    #[inline]
    pub fn logical_size(&self) -> Vec2 {
        self.logical
    }

    /// Pointer position in logical coordinates as of the last update.
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    // ── debug overlay ─────────────────────────────────────────────────────

    #[inline]
    pub fn debug_mode(&self) -> bool {
        self.debug
    }

    pub fn set_debug_mode(&mut self, on: bool) {
        self.debug = on;
        if !on {
            self.hovered = None;
        }
    }

    /// Topmost element under the pointer. Tracked only in debug mode.
    #[inline]
    pub fn hovered_rect(&self) -> Option<Rect> {
        self.hovered
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut Theme {
        &mut self.theme
    }

    // ── tick ──────────────────────────────────────────────────────────────

    /// Runs layout and routes this frame's input into `scene`.
    ///
    /// `viewport` and pointer positions in `input` are in device pixels.
    /// Call [`InputState::end_frame`] afterwards.
    pub fn update(&mut self, scene: &mut Scene, input: &InputState, viewport: Viewport, device_scale: f32) {
        if input.key_just_pressed(self.config.debug_key) {
            self.set_debug_mode(!self.debug);
            log::debug!("debug mode {}", if self.debug { "on" } else { "off" });
        }
        if self.config.scale_hotkeys {
            self.handle_scale_hotkeys(input);
        }
        if input.key_just_pressed(Key::Escape) && scene.any_popup_open() {
            log::debug!("escape: closing popups");
            scene.close_popups();
        }

        self.scale = self.effective_scale(scene, device_scale);
        self.logical = viewport.logical(self.scale);
        scene.layout(self.logical.x, self.logical.y);

        let raw = input.pointer();
        let p = Vec2::new(raw.x / self.scale, raw.y / self.scale);
        self.pointer = p;

        self.track_pointer(scene, p);
        scene.apply_actions();

        if input.button_just_pressed(MouseButton::Left) {
            let consumed = dispatch_left_press(scene, p);
            log::trace!("left press at {:?} consumed={}", p, consumed);
            scene.apply_actions();
        }
        if input.button_just_pressed(MouseButton::Right) {
            dispatch_right_press(scene, p);
            scene.apply_actions();
        }
        if input.button_just_released(MouseButton::Left) {
            for s in scene.sliders_mut().widgets_mut().filter(|s| s.is_dragging()) {
                s.stop_drag();
            }
        }
    }

    /// Paints `scene` into the driver's draw list in logical coordinates.
    pub fn paint(&mut self, scene: &Scene, measure: &dyn TextMeasure) -> &mut DrawList {
        self.draw_list.clear();
        {
            let theme = &self.theme;
            let mut painter = Painter::new(&mut self.draw_list, measure, theme.font, theme.font_size);
            painter.fill_rect(Rect::from_origin_size(Vec2::ZERO, self.logical), theme.background);
            scene.paint(&mut painter, theme);
            if self.debug {
                paint_debug_overlay(&mut painter, theme, self.hovered, self.logical);
            }
        }
        &mut self.draw_list
    }

    /// [`update`](Self::update) followed by [`paint`](Self::paint).
    pub fn frame(
        &mut self,
        scene: &mut Scene,
        input: &InputState,
        viewport: Viewport,
        device_scale: f32,
        measure: &dyn TextMeasure,
    ) -> &mut DrawList {
        self.update(scene, input, viewport, device_scale);
        self.paint(scene, measure)
    }

    fn handle_scale_hotkeys(&mut self, input: &InputState) {
        if !input.ctrl_held() {
            return;
        }
        let cur = self.window_scale;
        let step = self.config.scale_step;
        if input.key_just_pressed(Key::Equal) || input.key_just_pressed(Key::NumpadAdd) {
            self.set_window_scale((cur + step).min(self.config.max_scale));
        }
        if input.key_just_pressed(Key::Minus) || input.key_just_pressed(Key::NumpadSubtract) {
            self.set_window_scale((cur - step).max(self.config.min_scale));
        }
    }

    /// Per-tick pointer work that does not need a press.
    fn track_pointer(&mut self, scene: &mut Scene, p: Vec2) {
        for m in scene.menu_bars_mut().widgets_mut() {
            m.on_pointer_move(p.x, p.y);
        }

        self.hovered = if self.debug { hovered_element(scene, p) } else { None };

        for s in scene.sliders_mut().widgets_mut().filter(|s| s.is_dragging()) {
            s.update_value(p.x);
        }
        for g in scene.radio_groups_mut().widgets_mut() {
            let hit = g.hit_test(p.x, p.y);
            g.set_hovered(hit);
        }
        for d in scene.dropdowns_mut().widgets_mut().filter(|d| d.is_open()) {
            let hit = d.hit_test_list(p.x, p.y);
            d.set_hovered(hit);
        }
        for m in scene.context_menus_mut().widgets_mut().filter(|m| m.is_open()) {
            let hit = m.hit_test(p.x, p.y);
            m.set_hovered(hit);
        }
        for c in scene.checkboxes_mut().widgets_mut() {
            let hit = c.hit_test(p.x, p.y);
            c.set_hovered(hit);
        }
    }
}

// ── dispatch ──────────────────────────────────────────────────────────────

/// Offers a left press to each widget kind in priority order.
fn dispatch_left_press(scene: &mut Scene, p: Vec2) -> bool {
    if let Some(menu) = scene.context_menus_mut().widgets_mut().rev().find(|m| m.is_open()) {
        match menu.hit_test(p.x, p.y) {
            Some(i) => menu.click(i),
            None => menu.close(),
        }
        return true;
    }

    if scene.menu_bars_mut().widgets_mut().any(|m| m.on_pointer_down(p.x, p.y)) {
        return true;
    }

    if let Some(b) = scene.buttons_mut().widgets_mut().find(|b| b.hit_test(p.x, p.y)) {
        b.click();
        return true;
    }

    if let Some(c) = scene.checkboxes_mut().widgets_mut().find(|c| c.hit_test(p.x, p.y)) {
        c.toggle();
        return true;
    }

    for g in scene.radio_groups_mut().widgets_mut() {
        if let Some(i) = g.hit_test(p.x, p.y) {
            g.select(i);
            return true;
        }
    }

    if let Some(s) = scene.sliders_mut().widgets_mut().find(|s| s.hit_test(p.x, p.y)) {
        s.start_drag();
        s.update_value(p.x);
        return true;
    }

    for d in scene.dropdowns_mut().widgets_mut() {
        if d.is_open() {
            if let Some(i) = d.hit_test_list(p.x, p.y) {
                d.select(i);
                return true;
            }
            if !d.list_bounds().is_some_and(|r| r.contains(p)) {
                d.close();
                return true;
            }
        } else if d.hit_test(p.x, p.y) {
            d.open();
            return true;
        }
    }

    false
}

/// Opens the context menu of the innermost panel under the pointer that has one.
fn dispatch_right_press(scene: &mut Scene, p: Vec2) {
    let target = scene
        .panels()
        .widgets()
        .rev()
        .filter(|panel| panel.bounds().contains(p))
        .find_map(|panel| panel.context_menu());

    let Some(target) = target else {
        return;
    };
    for (h, menu) in scene.context_menus_mut().iter_mut() {
        if h == target {
            menu.open(p.x, p.y);
        } else {
            menu.close();
        }
    }
}

// ── debug overlay ─────────────────────────────────────────────────────────

/// Open submenu entries, then top items and bars, then buttons, then panels.
/// Later-created widgets win within each group.
fn hovered_element(scene: &Scene, p: Vec2) -> Option<Rect> {
    let bars = scene.menu_bars();

    for bar in bars.widgets().rev().filter(|m| m.is_open()) {
        if let Some(r) = bar.open_entry_rects().into_iter().rev().find(|r| r.contains(p)) {
            return Some(r);
        }
    }
    for bar in bars.widgets().rev() {
        if let Some(r) = bar.top_item_rects().into_iter().rev().find(|r| r.contains(p)) {
            return Some(r);
        }
        if bar.bounds().contains(p) {
            return Some(bar.bounds());
        }
    }

    let button = scene.buttons().widgets().rev().map(|b| b.bounds()).find(|r| r.contains(p));
    button.or_else(|| scene.panels().widgets().rev().map(|panel| panel.bounds()).find(|r| r.contains(p)))
}

fn paint_debug_overlay(painter: &mut Painter<'_>, theme: &Theme, hovered: Option<Rect>, logical: Vec2) {
    painter.with_layer(ZIndex::OVERLAY, |p| {
        if let Some(r) = hovered {
            p.stroke_rect(r, 2.0, theme.debug);
        }
        let x = (logical.x - p.text_width(DEBUG_LABEL) - DEBUG_MARGIN).max(DEBUG_MARGIN);
        let y = (logical.y - DEBUG_MARGIN - p.line_height()).max(DEBUG_MARGIN);
        p.text(DEBUG_LABEL, Vec2::new(x, y), theme.debug);
    });
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use trellis_engine::scene::DrawCmd;
    use trellis_engine::text::MonospaceMetrics;

    use super::*;
    use crate::handle::Handle;
    use crate::layout::SizeSpec;
    use crate::scene::Parent;
    use crate::widgets::button::Button;
    use crate::widgets::checkbox::Checkbox;
    use crate::widgets::context_menu::ContextMenu;
    use crate::widgets::dropdown::{Dropdown, DropdownOption};
    use crate::widgets::menu_bar::{MenuBar, MenuBarWidth, MenuItem};
    use crate::widgets::panel::Panel;
    use crate::widgets::radio::{RadioGroup, RadioOption};
    use crate::widgets::slider::Slider;

    const VIEW: Viewport = Viewport::new(800.0, 600.0);

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let c = Rc::new(Cell::new(0));
        let c2 = c.clone();
        (c, move || c2.set(c2.get() + 1))
    }

    /// Runs one tick with the pointer at `(x, y)` and a left click.
    fn click(driver: &mut Driver, scene: &mut Scene, input: &mut InputState, x: f32, y: f32) {
        input.move_pointer(x, y);
        input.press(MouseButton::Left);
        driver.update(scene, input, VIEW, 1.0);
        input.end_frame();
        input.release(MouseButton::Left);
        driver.update(scene, input, VIEW, 1.0);
        input.end_frame();
    }

    fn tick(driver: &mut Driver, scene: &mut Scene, input: &mut InputState) {
        driver.update(scene, input, VIEW, 1.0);
        input.end_frame();
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    #[test]
    fn button_click_fires() {
        let mut scene = Scene::new();
        let (count, f) = counter();
        scene.add_button(Parent::Root, SizeSpec::Fixed(100.0), SizeSpec::Fixed(30.0), Button::new("ok").on_click(f));
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        click(&mut driver, &mut scene, &mut input, 10.0, 10.0);
        assert_eq!(count.get(), 1);

        click(&mut driver, &mut scene, &mut input, 150.0, 10.0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn open_submenu_wins_over_button_underneath() {
        let mut scene = Scene::new();
        let (entry, f) = counter();
        let (button, g) = counter();
        scene.add_menu_bar(
            Parent::Root,
            SizeSpec::Fixed(28.0),
            MenuBar::new(MenuBarWidth::Full).item(MenuItem::new("File").entry("Open", f)),
        );
        scene.add_button(Parent::Root, SizeSpec::Fixed(200.0), SizeSpec::Fixed(100.0), Button::new("b").on_click(g));
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        click(&mut driver, &mut scene, &mut input, 20.0, 10.0);
        click(&mut driver, &mut scene, &mut input, 20.0, 35.0);
        assert_eq!(entry.get(), 1);
        assert_eq!(button.get(), 0);

        click(&mut driver, &mut scene, &mut input, 20.0, 35.0);
        assert_eq!(button.get(), 1);
    }

    #[test]
    fn checkbox_toggles_on_click() {
        let mut scene = Scene::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let cb = scene.add_checkbox(
            Parent::Root,
            SizeSpec::Fixed(120.0),
            SizeSpec::Fixed(24.0),
            Checkbox::new("grid").on_change(move |v| s.borrow_mut().push(v)),
        );
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        click(&mut driver, &mut scene, &mut input, 5.0, 5.0);
        click(&mut driver, &mut scene, &mut input, 5.0, 5.0);
        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!scene.checkbox(cb).unwrap().is_checked());
    }

    #[test]
    fn dropdown_open_select_and_close_outside() {
        let mut scene = Scene::new();
        let picked = Rc::new(RefCell::new(None));
        let pk = picked.clone();
        let d = scene.add_dropdown(
            Parent::Root,
            SizeSpec::Fixed(150.0),
            SizeSpec::Fixed(24.0),
            Dropdown::new(
                "Theme",
                vec![DropdownOption::new("Dark", "dark"), DropdownOption::new("Light", "light")],
            )
            .on_change(move |i, v: &str| *pk.borrow_mut() = Some((i, v.to_string()))),
        );
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        click(&mut driver, &mut scene, &mut input, 10.0, 10.0);
        assert!(scene.dropdown(d).unwrap().is_open());

        // second row of the list: y in [48, 72)
        click(&mut driver, &mut scene, &mut input, 10.0, 60.0);
        assert_eq!(*picked.borrow(), Some((1, "light".to_string())));
        assert!(!scene.dropdown(d).unwrap().is_open());

        click(&mut driver, &mut scene, &mut input, 10.0, 10.0);
        assert!(scene.dropdown(d).unwrap().is_open());
        click(&mut driver, &mut scene, &mut input, 500.0, 500.0);
        assert!(!scene.dropdown(d).unwrap().is_open());
        assert_eq!(scene.dropdown(d).unwrap().selected(), Some(1));
    }

    #[test]
    fn slider_drag_lifecycle() {
        let mut scene = Scene::new();
        let s = scene.add_slider(
            Parent::Root,
            SizeSpec::Fixed(100.0),
            SizeSpec::Fixed(30.0),
            Slider::new("v", 0.0, 100.0, 0.0).show_value(false),
        );
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        input.move_pointer(0.0, 10.0);
        input.press(MouseButton::Left);
        tick(&mut driver, &mut scene, &mut input);
        assert!(scene.slider(s).unwrap().is_dragging());
        assert_eq!(scene.slider(s).unwrap().value(), 0.0);

        // dragging continues outside the slider's own rectangle
        input.move_pointer(50.0, 300.0);
        tick(&mut driver, &mut scene, &mut input);
        assert_eq!(scene.slider(s).unwrap().value(), 50.0);

        input.release(MouseButton::Left);
        tick(&mut driver, &mut scene, &mut input);
        assert!(!scene.slider(s).unwrap().is_dragging());

        input.move_pointer(90.0, 10.0);
        tick(&mut driver, &mut scene, &mut input);
        assert_eq!(scene.slider(s).unwrap().value(), 50.0);
    }

    #[test]
    fn callbacks_mutate_scene_through_action_queue() {
        let mut scene = Scene::new();
        let queue = scene.actions();
        let label = Rc::new(RefCell::new(None));
        let s = scene.add_slider(Parent::Root, SizeSpec::Fixed(100.0), SizeSpec::Fixed(30.0), Slider::new("v", 0.0, 10.0, 7.0));
        let b = scene.add_button(
            Parent::Root,
            SizeSpec::Fixed(100.0),
            SizeSpec::Fixed(30.0),
            Button::new("reset").on_click(move || {
                queue.push(move |scene| {
                    if let Some(slider) = scene.slider_mut(s) {
                        slider.set_value(0.0);
                    }
                });
            }),
        );
        let (mut driver, mut input) = (Driver::default(), InputState::new());
        let l = label.clone();
        scene.actions().push(move |scene| *l.borrow_mut() = scene.button(b).map(|b| b.label().to_string()));

        // button sits below the 30px slider
        click(&mut driver, &mut scene, &mut input, 10.0, 45.0);
        assert_eq!(scene.slider(s).unwrap().value(), 0.0);
        assert_eq!(label.borrow().as_deref(), Some("reset"));
    }

    // ── context menu ──────────────────────────────────────────────────────

    #[test]
    fn right_click_opens_panel_context_menu() {
        let mut scene = Scene::new();
        let (copied, f) = counter();
        let panel = scene.add_panel(Parent::Root, SizeSpec::Fill, SizeSpec::Fill, Panel::new());
        let menu = scene.attach_context_menu(panel, ContextMenu::new().item("Copy", f).item("Paste", || {}));
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        input.move_pointer(200.0, 100.0);
        input.press(MouseButton::Right);
        tick(&mut driver, &mut scene, &mut input);
        let m = scene.context_menu(menu).unwrap();
        assert!(m.is_open());
        assert_eq!(m.anchor(), Vec2::new(200.0, 100.0));

        click(&mut driver, &mut scene, &mut input, 210.0, 110.0);
        assert_eq!(copied.get(), 1);
        assert!(!scene.context_menu(menu).unwrap().is_open());
    }

    #[test]
    fn press_outside_open_context_menu_closes_and_is_consumed() {
        let mut scene = Scene::new();
        let (clicks, f) = counter();
        let panel = scene.add_panel(Parent::Root, SizeSpec::Fill, SizeSpec::Fixed(100.0), Panel::new());
        scene.add_button(Parent::Root, SizeSpec::Fixed(100.0), SizeSpec::Fixed(30.0), Button::new("b").on_click(f));
        let menu = scene.attach_context_menu(panel, ContextMenu::new().item("Copy", || {}));
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        input.move_pointer(300.0, 20.0);
        input.press(MouseButton::Right);
        tick(&mut driver, &mut scene, &mut input);
        assert!(scene.context_menu(menu).unwrap().is_open());

        click(&mut driver, &mut scene, &mut input, 10.0, 110.0);
        assert!(!scene.context_menu(menu).unwrap().is_open());
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn right_click_outside_panels_does_nothing() {
        let mut scene = Scene::new();
        let panel = scene.add_panel(Parent::Root, SizeSpec::Fixed(100.0), SizeSpec::Fixed(100.0), Panel::new());
        let menu = scene.attach_context_menu(panel, ContextMenu::new().item("Copy", || {}));
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        input.move_pointer(400.0, 400.0);
        input.press(MouseButton::Right);
        tick(&mut driver, &mut scene, &mut input);
        assert!(!scene.context_menu(menu).unwrap().is_open());
    }

    #[test]
    fn right_click_opens_menu_of_body_below_full_menu_bar() {
        let mut scene = Scene::new();
        scene.add_menu_bar(
            Parent::Root,
            SizeSpec::Fixed(28.0),
            MenuBar::new(MenuBarWidth::Full).item(MenuItem::new("File").entry("Quit", || {})),
        );
        let body = scene.add_panel(Parent::Root, SizeSpec::Percent(100.0), SizeSpec::Fill, Panel::new());
        let reset = Rc::new(Cell::new(false));
        let (queue, flag) = (scene.actions(), reset.clone());
        let menu = scene.attach_context_menu(
            body,
            ContextMenu::new().item("Reset", move || {
                let flag = flag.clone();
                queue.push(move |_| flag.set(true));
            }),
        );
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        input.move_pointer(400.0, 400.0);
        input.press(MouseButton::Right);
        tick(&mut driver, &mut scene, &mut input);
        assert_eq!(scene.panel(body).unwrap().bounds(), Rect::new(0.0, 28.0, 800.0, 572.0));
        assert!(scene.context_menu(menu).unwrap().is_open());

        input.release(MouseButton::Right);
        click(&mut driver, &mut scene, &mut input, 410.0, 410.0);
        assert!(reset.get());
        assert!(!scene.context_menu(menu).unwrap().is_open());
    }

    // ── priority ──────────────────────────────────────────────────────────

    /// A zero-height panel at the top of the root. Widgets added to separate
    /// layers all start at y = 0 and overlap.
    fn layer(scene: &mut Scene) -> Handle<Panel> {
        scene.add_panel(Parent::Root, SizeSpec::Fixed(200.0), SizeSpec::Fixed(0.0), Panel::new())
    }

    fn two_options() -> Vec<RadioOption> {
        vec![RadioOption::new("a", "a"), RadioOption::new("b", "b")]
    }

    #[test]
    fn button_wins_over_overlapping_checkbox() {
        let mut scene = Scene::new();
        let back = layer(&mut scene);
        let cb = scene.add_checkbox(back, SizeSpec::Fixed(200.0), SizeSpec::Fixed(24.0), Checkbox::new("c"));
        let front = layer(&mut scene);
        let (pressed, f) = counter();
        scene.add_button(front, SizeSpec::Fixed(200.0), SizeSpec::Fixed(24.0), Button::new("b").on_click(f));
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        click(&mut driver, &mut scene, &mut input, 10.0, 10.0);
        assert_eq!(pressed.get(), 1);
        assert!(!scene.checkbox(cb).unwrap().is_checked());
    }

    #[test]
    fn checkbox_wins_over_overlapping_radio_group() {
        let mut scene = Scene::new();
        let back = layer(&mut scene);
        let g = scene.add_radio_group(back, SizeSpec::Fixed(200.0), SizeSpec::Fixed(48.0), RadioGroup::new(two_options()));
        let front = layer(&mut scene);
        let cb = scene.add_checkbox(front, SizeSpec::Fixed(200.0), SizeSpec::Fixed(24.0), Checkbox::new("c"));
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        click(&mut driver, &mut scene, &mut input, 10.0, 10.0);
        assert!(scene.checkbox(cb).unwrap().is_checked());
        assert_eq!(scene.radio_group(g).unwrap().selected(), None);

        // below the checkbox only the group is hit
        click(&mut driver, &mut scene, &mut input, 10.0, 30.0);
        assert_eq!(scene.radio_group(g).unwrap().selected(), Some(1));
    }

    #[test]
    fn radio_group_wins_over_overlapping_slider() {
        let mut scene = Scene::new();
        let back = layer(&mut scene);
        let s = scene.add_slider(
            back,
            SizeSpec::Fixed(200.0),
            SizeSpec::Fixed(48.0),
            Slider::new("v", 0.0, 100.0, 0.0).show_value(false),
        );
        let front = layer(&mut scene);
        let g = scene.add_radio_group(front, SizeSpec::Fixed(200.0), SizeSpec::Fixed(48.0), RadioGroup::new(two_options()));
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        click(&mut driver, &mut scene, &mut input, 100.0, 10.0);
        assert_eq!(scene.radio_group(g).unwrap().selected(), Some(0));
        let slider = scene.slider(s).unwrap();
        assert_eq!(slider.value(), 0.0);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn slider_wins_over_open_dropdown_list() {
        let mut scene = Scene::new();
        let (changes, mut f) = counter();
        let top = layer(&mut scene);
        let d = scene.add_dropdown(
            top,
            SizeSpec::Fixed(150.0),
            SizeSpec::Fixed(24.0),
            Dropdown::new("pick", vec![DropdownOption::new("a", "a"), DropdownOption::new("b", "b")])
                .on_change(move |_, _: &str| f()),
        );
        // list hangs over y 24..72; the slider occupies 24..54
        scene.add_panel(Parent::Root, SizeSpec::Fixed(200.0), SizeSpec::Fixed(24.0), Panel::new());
        let s = scene.add_slider(
            Parent::Root,
            SizeSpec::Fixed(200.0),
            SizeSpec::Fixed(30.0),
            Slider::new("v", 0.0, 100.0, 0.0).show_value(false),
        );
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        click(&mut driver, &mut scene, &mut input, 10.0, 10.0);
        assert!(scene.dropdown(d).unwrap().is_open());

        click(&mut driver, &mut scene, &mut input, 100.0, 40.0);
        assert_eq!(scene.slider(s).unwrap().value(), 50.0);
        assert!(scene.dropdown(d).unwrap().is_open());
        assert_eq!(scene.dropdown(d).unwrap().selected(), None);
        assert_eq!(changes.get(), 0);

        // the part of the list below the slider still selects
        click(&mut driver, &mut scene, &mut input, 10.0, 60.0);
        assert_eq!(scene.dropdown(d).unwrap().selected(), Some(1));
        assert_eq!(changes.get(), 1);
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn escape_closes_popups() {
        let mut scene = Scene::new();
        let bar = scene.add_menu_bar(
            Parent::Root,
            SizeSpec::Fixed(28.0),
            MenuBar::new(MenuBarWidth::Full).item(MenuItem::new("File").entry("Quit", || {})),
        );
        let d = scene.add_dropdown(
            Parent::Root,
            SizeSpec::Fixed(150.0),
            SizeSpec::Fixed(24.0),
            Dropdown::new("pick", vec![DropdownOption::new("a", "a")]),
        );
        let (mut driver, mut input) = (Driver::default(), InputState::new());

        click(&mut driver, &mut scene, &mut input, 20.0, 10.0);
        scene.dropdown_mut(d).unwrap().open();
        assert!(scene.menu_bar(bar).unwrap().is_open());

        input.press_key(Key::Escape);
        tick(&mut driver, &mut scene, &mut input);
        assert!(!scene.any_popup_open());
    }

    #[test]
    fn debug_key_toggles_overlay() {
        let mut scene = Scene::new();
        let (mut driver, mut input) = (Driver::default(), InputState::new());
        input.press_key(Key::F12);
        tick(&mut driver, &mut scene, &mut input);
        assert!(driver.debug_mode());

        // held, not pressed again
        tick(&mut driver, &mut scene, &mut input);
        assert!(driver.debug_mode());

        input.release_key(Key::F12);
        input.press_key(Key::F12);
        tick(&mut driver, &mut scene, &mut input);
        assert!(!driver.debug_mode());
    }

    #[test]
    fn scale_hotkeys_clamp_and_report_changes() {
        let mut scene = Scene::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let mut driver = Driver::new(DriverConfig::default().scale_hotkeys(true).window_scale(3.95))
            .on_window_scale_changed(move |v| s.borrow_mut().push(v));
        let mut input = InputState::new();

        input.press_key(Key::Control);
        input.press_key(Key::Equal);
        tick(&mut driver, &mut scene, &mut input);
        assert_eq!(driver.window_scale(), 4.0);

        input.release_key(Key::Equal);
        input.press_key(Key::Equal);
        tick(&mut driver, &mut scene, &mut input);
        assert_eq!(driver.window_scale(), 4.0);
        assert_eq!(seen.borrow().len(), 1);

        input.press_key(Key::NumpadSubtract);
        tick(&mut driver, &mut scene, &mut input);
        assert!((driver.window_scale() - 3.9).abs() < 1e-4);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn scale_hotkeys_need_ctrl_and_opt_in() {
        let mut scene = Scene::new();
        let mut driver = Driver::new(DriverConfig::default().scale_hotkeys(true));
        let mut input = InputState::new();
        input.press_key(Key::Equal);
        tick(&mut driver, &mut scene, &mut input);
        assert_eq!(driver.window_scale(), 1.0);

        let mut driver = Driver::default();
        input.press_key(Key::Control);
        input.release_key(Key::Equal);
        input.press_key(Key::Equal);
        tick(&mut driver, &mut scene, &mut input);
        assert_eq!(driver.window_scale(), 1.0);
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn effective_scale_combines_factors() {
        let mut scene = Scene::new();
        scene.set_scale(2.0);
        let driver = Driver::new(DriverConfig::default().window_scale(1.5));
        assert_eq!(driver.effective_scale(&scene, 2.0), 3.0);

        let dpi = Driver::new(DriverConfig::default().window_scale(1.5).auto_dpi(true));
        assert_eq!(dpi.effective_scale(&scene, 2.0), 6.0);
        assert_eq!(dpi.effective_scale(&scene, 0.0), 3.0);
    }

    #[test]
    fn set_window_scale_normalises_and_skips_unchanged() {
        let (count, mut f) = counter();
        let mut driver = Driver::default().on_window_scale_changed(move |_| f());
        driver.set_window_scale(1.0);
        assert_eq!(count.get(), 0);
        driver.set_window_scale(-1.0);
        assert_eq!(driver.window_scale(), 1.0);
        assert_eq!(count.get(), 0);
        driver.set_window_scale(2.0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn pointer_and_layout_are_divided_by_scale() {
        let mut scene = Scene::new();
        let (count, f) = counter();
        let b = scene.add_button(Parent::Root, SizeSpec::Percent(50.0), SizeSpec::Fixed(40.0), Button::new("b").on_click(f));
        let mut driver = Driver::new(DriverConfig::default().window_scale(2.0));
        let mut input = InputState::new();

        // device (180, 60) is logical (90, 30): inside the 400x40 button
        input.move_pointer(180.0, 60.0);
        input.press(MouseButton::Left);
        driver.update(&mut scene, &input, Viewport::new(1600.0, 1200.0), 1.0);
        input.end_frame();

        assert_eq!(driver.logical_size(), Vec2::new(800.0, 600.0));
        assert_eq!(driver.pointer(), Vec2::new(90.0, 30.0));
        assert_eq!(scene.button(b).unwrap().bounds(), Rect::new(0.0, 0.0, 400.0, 40.0));
        assert_eq!(count.get(), 1);
    }

    // ── debug overlay ─────────────────────────────────────────────────────

    #[test]
    fn hovered_rect_prefers_button_over_panel() {
        let mut scene = Scene::new();
        let panel = scene.add_panel(Parent::Root, SizeSpec::Fill, SizeSpec::Fill, Panel::new());
        scene.add_button(panel, SizeSpec::Fixed(100.0), SizeSpec::Fixed(30.0), Button::new("b"));
        let mut driver = Driver::default();
        driver.set_debug_mode(true);
        let mut input = InputState::new();

        input.move_pointer(10.0, 10.0);
        tick(&mut driver, &mut scene, &mut input);
        assert_eq!(driver.hovered_rect(), Some(Rect::new(0.0, 0.0, 100.0, 30.0)));

        input.move_pointer(300.0, 300.0);
        tick(&mut driver, &mut scene, &mut input);
        assert_eq!(driver.hovered_rect(), Some(Rect::new(0.0, 0.0, 800.0, 600.0)));

        driver.set_debug_mode(false);
        tick(&mut driver, &mut scene, &mut input);
        assert_eq!(driver.hovered_rect(), None);
    }

    #[test]
    fn debug_overlay_paints_on_overlay_layer() {
        let mut scene = Scene::new();
        scene.add_button(Parent::Root, SizeSpec::Fixed(100.0), SizeSpec::Fixed(30.0), Button::new("b"));
        let mut driver = Driver::default();
        driver.set_debug_mode(true);
        let mut input = InputState::new();
        input.move_pointer(10.0, 10.0);
        tick(&mut driver, &mut scene, &mut input);

        let metrics = MonospaceMetrics::default();
        let list = driver.paint(&scene, &metrics);
        let overlay: Vec<&DrawCmd> = list
            .items()
            .iter()
            .filter(|i| i.key.z == ZIndex::OVERLAY)
            .map(|i| &i.cmd)
            .collect();
        assert!(overlay.iter().any(|c| matches!(c, DrawCmd::StrokeRect(s) if s.rect == Rect::new(0.0, 0.0, 100.0, 30.0))));
        assert!(overlay.iter().any(|c| matches!(c, DrawCmd::Text(t) if t.text == DEBUG_LABEL)));
    }

    #[test]
    fn paint_starts_with_background() {
        let mut scene = Scene::new();
        let mut driver = Driver::default();
        let mut input = InputState::new();
        tick(&mut driver, &mut scene, &mut input);
        let metrics = MonospaceMetrics::default();
        let list = driver.paint(&scene, &metrics);
        assert_eq!(list.len(), 1);
        assert!(matches!(&list.items()[0].cmd, DrawCmd::FillRect(r) if r.rect == Rect::new(0.0, 0.0, 800.0, 600.0)));
    }
}
