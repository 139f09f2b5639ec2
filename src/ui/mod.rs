//! UI module for egui-based user interface.

pub mod screens;
pub mod theme;

pub use theme::Theme;
