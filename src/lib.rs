pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::output::{MemorySink, StdoutSink};
pub use config::EntryConfig;
pub use core::entry::EntryEngine;
pub use core::geometry::{checked_square_area, circle_area, square_area, PI_APPROX};
pub use domain::model::{AreaReport, EntryLine, Shape};
pub use domain::ports::Area;
pub use utils::error::{AreaError, Result};
