// src/gui/mod.rs
pub mod app;
pub mod progress;
pub mod screens;

pub use app::run;
