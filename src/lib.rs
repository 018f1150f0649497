pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod plan;
pub mod profile;
pub mod visuals;
pub mod writer;
