//! Read-side catalog operations and the display projection they return.

pub mod display;
pub mod format;
pub mod service;

pub use display::VideoDisplay;
pub use service::CatalogService;
