//! Built-in widget kinds.

pub mod button;
pub mod checkbox;
pub mod context_menu;
pub mod dropdown;
pub mod menu_bar;
pub mod panel;
pub mod radio;
pub mod slider;
