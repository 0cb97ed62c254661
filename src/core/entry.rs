use crate::core::geometry::checked_square_area;
use crate::core::{ConfigProvider, EntryLine, OutputSink};
use crate::utils::error::Result;

pub struct EntryEngine<S: OutputSink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: OutputSink, C: ConfigProvider> EntryEngine<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }

    /// Computes the square of the configured width and writes one line.
    pub fn run(&mut self) -> Result<EntryLine> {
        let width = self.config.width();
        tracing::debug!("Computing square area for width {}", width);

        let area = checked_square_area(width)?;
        let line = EntryLine::for_square(width, area);

        self.sink.write_line(&line.to_string())?;
        tracing::debug!("Entry line written: {:?}", line);

        Ok(line)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
