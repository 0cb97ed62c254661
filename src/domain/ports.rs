use crate::utils::error::Result;

pub trait Area {
    fn area(&self) -> f64;
}

pub trait OutputSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn width(&self) -> i64;
    fn verbose(&self) -> bool;
}
