// Adapters layer: concrete implementations for external systems (stdout, in-memory buffers).

pub mod output;
