// src/gui/mod.rs
pub mod app;
pub mod components;

pub use app::{initial_state, run};
