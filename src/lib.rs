// src/lib.rs

pub mod categories;
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod export;
pub mod file;
pub mod log;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod title;
