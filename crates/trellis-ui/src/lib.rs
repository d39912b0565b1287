//! Trellis UI: a retained widget toolkit on top of `trellis-engine`.
//!
//! A [`Scene`](scene::Scene) owns an arena layout tree and every widget.
//! Each frame the [`Driver`](driver::Driver) lays the tree out at the current
//! logical size, routes pointer and key input into the widgets in a fixed
//! priority order, and paints them into a [`DrawList`](trellis_engine::scene::DrawList).
//!
//! # Quick start
//!
//! ```rust,ignore
//! use trellis_ui::prelude::*;
//!
//! let mut scene = Scene::new();
//! scene.add_menu_bar(
//!     Parent::Root,
//!     SizeSpec::Fixed(28.0),
//!     MenuBar::new(MenuBarWidth::Full)
//!         .item(MenuItem::new("File").entry("Quit", || std::process::exit(0))),
//! );
//! let body = scene.add_panel(Parent::Root, SizeSpec::Percent(100.0), SizeSpec::Fill, Panel::new());
//! scene.add_button(body, SizeSpec::Fixed(120.0), SizeSpec::Fixed(32.0),
//!     Button::new("Hello").on_click(|| log::info!("clicked")));
//!
//! let mut driver = Driver::new(DriverConfig::default().scale_hotkeys(true));
//!
//! // Per frame:
//! let draw_list = driver.frame(&mut scene, &input, viewport, device_scale, &metrics);
//! input.end_frame();
//! ```
//!
//! # Custom widgets
//!
//! Widget kinds are fixed by the scene, but anything implementing [`Widget`]
//! can paint itself with a [`Painter`](painter::Painter) and a
//! [`Theme`](theme::Theme).

pub mod action;
pub mod driver;
pub mod handle;
pub mod layout;
pub mod painter;
pub mod registry;
pub mod scene;
pub mod theme;
pub mod widget;
pub mod widgets;

pub use driver::{Driver, DriverConfig};
pub use scene::{Parent, Scene};
pub use widget::Widget;

/// Everything needed to build a UI.
pub mod prelude {
    pub use crate::action::ActionQueue;
    pub use crate::driver::{Driver, DriverConfig};
    pub use crate::handle::{Handle, WidgetId};
    pub use crate::layout::{Align, LayoutTree, NodeId, SizeSpec};
    pub use crate::painter::Painter;
    pub use crate::registry::Registry;
    pub use crate::scene::{Parent, Scene};
    pub use crate::theme::Theme;
    pub use crate::widget::Widget;
    pub use crate::widgets::{
        button::Button,
        checkbox::Checkbox,
        context_menu::{ContextMenu, ContextMenuEntry},
        dropdown::{Dropdown, DropdownOption},
        menu_bar::{MenuBar, MenuBarWidth, MenuEntry, MenuItem},
        panel::Panel,
        radio::{RadioGroup, RadioOption},
        slider::Slider,
    };

    pub use trellis_engine::coords::{Rect, Vec2, Viewport};
    pub use trellis_engine::input::{InputState, Key, MouseButton};
    pub use trellis_engine::paint::Color;
    pub use trellis_engine::scene::DrawList;
    pub use trellis_engine::text::{FontId, TextMeasure};
}
