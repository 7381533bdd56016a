//! Container images that the pipeline engine injects into user workloads, and
//! the startup check that every one of them is configured.

pub mod cli;
pub mod config;
pub mod images;

pub use images::{ImageSet, MissingImagesError};
