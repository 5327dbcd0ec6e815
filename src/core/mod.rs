// src/core/mod.rs

pub mod net;
pub mod normalize;
pub mod sanitize;

pub use normalize::normalize;
