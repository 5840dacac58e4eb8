pub mod config;
pub mod dynamics;
pub mod error;
pub mod field;
pub mod geometry;
pub mod output;
pub mod state;
