// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod assemble;
pub mod collect;
pub mod gui;
pub mod progress;
pub mod scrape;
pub mod session;
pub mod store;
pub mod work;
