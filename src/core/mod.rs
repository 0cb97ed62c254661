pub mod entry;
pub mod geometry;

pub use crate::domain::model::{AreaReport, EntryLine, Shape};
pub use crate::domain::ports::{Area, ConfigProvider, OutputSink};
pub use crate::utils::error::Result;
