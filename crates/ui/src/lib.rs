#![allow(non_snake_case)]

pub mod app;
pub mod context;
pub mod media;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
