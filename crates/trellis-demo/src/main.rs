//! Headless showcase: builds every widget kind and drives it with a scripted
//! pointer/keyboard session through the real input state and frame driver.
//!
//! Usage: `trellis-demo [path/to/font.ttf]`. Without a font, text is measured
//! with a fixed-width estimate. `RUST_LOG=debug` shows widget transitions.

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use trellis_engine::logging::{LoggingConfig, init_logging};
use trellis_engine::scene::{DrawCmd, DrawList, ZIndex};
use trellis_engine::text::{FontSystem, MonospaceMetrics, TextMeasure};
use trellis_ui::prelude::*;

const WINDOW: Viewport = Viewport::new(800.0, 600.0);
const DEVICE_SCALE: f32 = 1.0;

// ── showcase ──────────────────────────────────────────────────────────────

struct Showcase {
    volume: Handle<Slider>,
    theme: Handle<Dropdown>,
}

fn build_showcase(scene: &mut Scene) -> Showcase {
    scene.add_menu_bar(
        Parent::Root,
        SizeSpec::Fixed(28.0),
        MenuBar::new(MenuBarWidth::Full)
            .item(
                MenuItem::new("File")
                    .entry("New", || log::info!("[menu] File > New"))
                    .entry("Open", || log::info!("[menu] File > Open"))
                    .separator()
                    .entry("Quit", || log::info!("[menu] File > Quit")),
            )
            .item(
                MenuItem::new("Edit")
                    .entry("Undo", || log::info!("[menu] Edit > Undo"))
                    .entry("Redo", || log::info!("[menu] Edit > Redo")),
            )
            .item(MenuItem::new("View").entry("Zoom", || log::info!("[menu] View > Zoom")))
            .item(MenuItem::new("Help").on_click(|| log::info!("[menu] Help"))),
    );

    let body = scene.add_panel(Parent::Root, SizeSpec::Percent(100.0), SizeSpec::Fill, Panel::new());

    scene.add_button(
        body,
        SizeSpec::Fixed(160.0),
        SizeSpec::Fixed(32.0),
        Button::new("Say hello").on_click(|| log::info!("[button] hello")),
    );
    scene.add_checkbox(
        body,
        SizeSpec::Fixed(160.0),
        SizeSpec::Fixed(24.0),
        Checkbox::new("Show grid").on_change(|v| log::info!("[checkbox] show grid = {v}")),
    );
    scene.add_radio_group(
        body,
        SizeSpec::Fixed(200.0),
        SizeSpec::Fixed(72.0),
        RadioGroup::new(vec![
            RadioOption::new("Low", "low"),
            RadioOption::new("Medium", "medium"),
            RadioOption::new("High", "high"),
        ])
        .on_change(|i, v| log::info!("[radio] quality #{i} = {v}")),
    );
    let volume = scene.add_slider(
        body,
        SizeSpec::Fixed(240.0),
        SizeSpec::Fixed(40.0),
        Slider::new("Volume", 0.0, 100.0, 30.0)
            .step(1.0)
            .on_change(|v| log::info!("[slider] volume = {v}")),
    );
    let theme = scene.add_dropdown(
        body,
        SizeSpec::Fixed(160.0),
        SizeSpec::Fixed(24.0),
        Dropdown::new(
            "Theme",
            vec![
                DropdownOption::new("Dark", "dark"),
                DropdownOption::new("Light", "light"),
                DropdownOption::new("Contrast", "contrast"),
            ],
        )
        .on_change(|i, v| log::info!("[dropdown] theme #{i} = {v}")),
    );

    let queue = scene.actions();
    scene.attach_context_menu(
        body,
        ContextMenu::new()
            .item("Copy", || log::info!("[context] copy"))
            .item("Paste", || log::info!("[context] paste"))
            .disabled_item("Delete")
            .separator()
            .item("Reset volume", move || {
                queue.push(move |scene| {
                    if let Some(s) = scene.slider_mut(volume) {
                        s.set_value(50.0);
                        log::info!("[context] volume reset to {}", s.value());
                    }
                });
            }),
    );

    Showcase { volume, theme }
}

// ── script ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Step {
    Move(f32, f32),
    Press(MouseButton),
    Release(MouseButton),
    /// Press and release on consecutive frames.
    Click(MouseButton),
    Tap(Key),
    CtrlTap(Key),
}

/// Body children stack from y = 28: button 28..60, checkbox 60..84,
/// radio 84..156, slider 156..196, dropdown 196..220 (list 220..292).
/// Positions are device pixels, so steps after a scale change are scaled too.
///
/// Ends with volume 50 (reset from the context menu) and theme "light".
fn script() -> Vec<Step> {
    use MouseButton::{Left, Right};
    use Step::*;
    vec![
        Move(20.0, 40.0),
        Click(Left),
        Move(10.0, 70.0),
        Click(Left),
        Move(20.0, 142.0),
        Click(Left),
        Move(0.0, 176.0),
        Press(Left),
        Move(120.0, 176.0),
        Move(180.0, 176.0),
        Release(Left),
        Move(20.0, 205.0),
        Click(Left),
        Move(20.0, 254.0),
        Click(Left),
        Move(20.0, 14.0),
        Click(Left),
        Move(70.0, 14.0),
        Move(70.0, 39.0),
        Click(Left),
        Move(400.0, 400.0),
        Click(Right),
        Move(410.0, 490.0),
        Click(Left),
        Move(170.0, 14.0),
        Click(Left),
        Tap(Key::F12),
        Move(20.0, 40.0),
        CtrlTap(Key::Equal),
        CtrlTap(Key::Equal),
        // Window scale is now 1.2: device (24, 246) is logical (20, 205).
        Move(24.0, 246.0),
        Click(Left),
        Tap(Key::Escape),
    ]
}

struct Session<'a> {
    scene: Scene,
    driver: Driver,
    input: InputState,
    metrics: &'a dyn TextMeasure,
    frames: u32,
}

impl Session<'_> {
    fn frame(&mut self) {
        let list = self.driver.frame(&mut self.scene, &self.input, WINDOW, DEVICE_SCALE, self.metrics);
        log::debug!("frame {}: {}", self.frames, summarize(list));
        self.input.end_frame();
        self.frames += 1;
    }

    fn run(&mut self, step: Step) {
        match step {
            Step::Move(x, y) => self.input.move_pointer(x, y),
            Step::Press(b) => self.input.press(b),
            Step::Release(b) => self.input.release(b),
            Step::Click(b) => {
                self.input.press(b);
                self.frame();
                self.input.release(b);
            }
            Step::Tap(k) => {
                self.input.press_key(k);
                self.frame();
                self.input.release_key(k);
            }
            Step::CtrlTap(k) => {
                self.input.press_key(Key::Control);
                self.input.press_key(k);
                self.frame();
                self.input.release_key(k);
                self.input.release_key(Key::Control);
            }
        }
        self.frame();

        if self.driver.debug_mode() {
            log::info!("[debug] hovered {:?}", self.driver.hovered_rect());
        }
    }
}

fn summarize(list: &DrawList) -> String {
    let mut kinds: BTreeMap<&str, usize> = BTreeMap::new();
    let mut overlay = 0;
    for item in list.items() {
        let kind = match item.cmd {
            DrawCmd::FillRect(_) => "fill_rect",
            DrawCmd::StrokeRect(_) => "stroke_rect",
            DrawCmd::FillCircle(_) => "fill_circle",
            DrawCmd::StrokeCircle(_) => "stroke_circle",
            DrawCmd::Line(_) => "line",
            DrawCmd::Text(_) => "text",
        };
        *kinds.entry(kind).or_default() += 1;
        if item.key.z >= ZIndex::OVERLAY {
            overlay += 1;
        }
    }
    format!("{} commands ({} overlay) {:?}", list.len(), overlay, kinds)
}

/// Builds the showcase and plays the whole script against it.
fn run_showcase(metrics: &dyn TextMeasure) -> (Session<'_>, Showcase) {
    let mut scene = Scene::new();
    let showcase = build_showcase(&mut scene);
    log::info!("showcase built: {} widgets", scene.widget_count());

    let driver = Driver::new(DriverConfig::default().scale_hotkeys(true))
        .on_window_scale_changed(|s| log::info!("[window] scale = {s:.1}"));

    let mut session = Session { scene, driver, input: InputState::new(), metrics, frames: 0 };
    session.frame();
    for step in script() {
        session.run(step);
    }
    (session, showcase)
}

// ── entry ─────────────────────────────────────────────────────────────────

fn load_fonts(path: Option<String>) -> Result<Option<FontSystem>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = std::fs::read(&path).with_context(|| format!("failed to read font {path}"))?;
    let mut fonts = FontSystem::new();
    fonts
        .load_font(&bytes)
        .with_context(|| format!("failed to parse font {path}"))?;
    log::info!("measuring text with {path}");
    Ok(Some(fonts))
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let fonts = load_fonts(std::env::args().nth(1))?;
    let mono = MonospaceMetrics::default();
    let metrics: &dyn TextMeasure = match &fonts {
        Some(f) => f,
        None => &mono,
    };

    let (mut session, showcase) = run_showcase(metrics);

    let scene = &session.scene;
    let volume = scene.slider(showcase.volume).map(Slider::value);
    let theme = scene
        .dropdown(showcase.theme)
        .and_then(Dropdown::selected_option)
        .map(|o| o.value.clone());
    log::info!(
        "done after {} frames: volume={:?} theme={:?} popups_open={}",
        session.frames,
        volume,
        theme,
        scene.any_popup_open()
    );

    let list = session.driver.paint(scene, metrics);
    log::info!("last frame: {}", summarize(list));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_resets_volume_and_picks_light_theme() {
        let metrics = MonospaceMetrics::default();
        let (session, showcase) = run_showcase(&metrics);
        let scene = &session.scene;

        assert!((session.driver.window_scale() - 1.2).abs() < 1e-5);
        assert_eq!(scene.slider(showcase.volume).map(Slider::value), Some(50.0));
        let theme = scene.dropdown(showcase.theme).and_then(Dropdown::selected_option);
        assert_eq!(theme.map(|o| o.value.as_str()), Some("light"));
        assert!(!scene.any_popup_open());
    }
}
