//! Dumps a bitmap as headerless RGBA bytes at a fixed set of square icon
//! sizes, ready to be pulled in with `include_bytes!`.

pub mod config;
pub mod error;
pub mod image;
pub mod rasterizer;
#[cfg(test)]
mod testutil;

pub use config::IconJob;
pub use rasterizer::run;
