use anyhow::Context;
use clap::Parser;
use wb_commissions::core::report;
use wb_commissions::core::ConfigProvider;
use wb_commissions::utils::{logger, validation::Validate};
use wb_commissions::{CommissionPipeline, ConverterConfig, EtlEngine, LocalStorage};

/// Converts the commission sheet export into public/data/wb_commissions.csv.
/// Paths are fixed and resolved against the working directory.
#[derive(Parser)]
#[command(name = "wb-commissions", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    logger::init_cli_logger();

    let config = ConverterConfig::default();
    config.validate().context("invalid converter configuration")?;

    let spot_check_subject = config.spot_check_subject().to_string();
    let input_path = config.input_path().to_string();

    let pipeline = CommissionPipeline::new(LocalStorage::new("."), config);
    let engine = EtlEngine::new(pipeline);

    let outcome = match engine.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            return Err(e).with_context(|| format!("failed to convert {}", input_path));
        }
    };

    let stdout = std::io::stdout();
    report::print_summary(&mut stdout.lock(), &outcome, &spot_check_subject)
        .context("failed to print conversion summary")?;

    Ok(())
}
