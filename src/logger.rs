use anyhow::Result;
use simple_logger::SimpleLogger;

pub fn init(level: log::LevelFilter) -> Result<()> {
    SimpleLogger::new()
        .with_level(level)
        .with_module_level("hyper", log::LevelFilter::Warn)
        .with_module_level("reqwest", log::LevelFilter::Warn)
        .init()?;

    Ok(())
}
