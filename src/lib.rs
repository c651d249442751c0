pub mod error;
pub mod validation;
pub mod model;
pub mod parser;
pub mod commands;
pub mod storage;
pub mod logic;
pub mod config;
pub mod logging;
pub mod cli;
