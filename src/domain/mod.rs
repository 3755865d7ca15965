//! Catalog domain types, independent of storage and transport.

pub mod clock;
pub mod video;

pub use clock::{Clock, SystemClock};
pub use video::Video;
