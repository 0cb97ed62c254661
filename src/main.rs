use area_calc::core::ConfigProvider;
use area_calc::utils::{logger, validation::Validate};
use area_calc::{EntryConfig, EntryEngine, StdoutSink};

fn main() -> anyhow::Result<()> {
    let config = EntryConfig::default();

    // 初始化日誌 (stderr)
    logger::init_logger(config.verbose());

    tracing::info!("Starting area-calc");
    config.validate()?;

    let mut engine = EntryEngine::new(StdoutSink::new(), config);
    let line = engine.run()?;
    tracing::info!("✅ Printed square area {}", line.value);

    Ok(())
}
