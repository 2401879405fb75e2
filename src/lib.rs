pub mod config;
pub mod error;
pub mod flags;
pub mod parser;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod input;
pub mod process;
