//! Persistence for catalog videos.

pub mod entity;
pub mod repository;

pub use repository::{SqlVideoRepository, VideoRepository};
