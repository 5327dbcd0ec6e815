// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

pub mod cli;
pub mod csv;
pub mod data;
pub mod deeplink;
pub mod demo;
pub mod file;
pub mod filter;
pub mod gui;
pub mod infer;
pub mod record;
pub mod render;
pub mod store;
