//! UI layer: app shell and card widgets.

pub mod app;
pub mod cards;

pub use app::CuratorApp;
