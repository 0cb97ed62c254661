use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Square { width: f64 },
    Circle { radius: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaReport {
    pub shape: Shape,
    pub area: f64,
}

/// The single line printed by the entry behavior.
///
/// The label already ends in a space and `Display` adds another before the
/// value, so `"The square of 4 is "` + `16` renders as `The square of 4 is  16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine {
    pub label: String,
    pub value: i64,
}

impl EntryLine {
    pub fn for_square(width: i64, area: i64) -> Self {
        Self {
            label: format!("The square of {} is ", width),
            value: area,
        }
    }
}

impl fmt::Display for EntryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.value)
    }
}
