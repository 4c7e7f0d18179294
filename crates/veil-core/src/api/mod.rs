//! File based entry points, each one prepared with a small builder.

pub mod capacity;
pub mod hide;
pub mod unveil;
pub mod unveil_raw;
