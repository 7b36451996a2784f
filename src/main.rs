use anyhow::Context;
use clap::Parser;
use bounded_access::utils::{logger, validation::Validate};
use bounded_access::{AccessDemo, CliConfig, DemoConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.format);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match &cli.config {
        Some(path) => DemoConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => DemoConfig::default(),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let demo = AccessDemo::from_settings(&config).with_format(cli.format);
    tracing::info!("Running access demo over {} elements", demo.letters().len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo.run(&mut out).context("access demo failed")?;

    Ok(())
}
