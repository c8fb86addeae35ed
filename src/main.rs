use clap::Parser;
use fleet_command::utils::error::{ErrorSeverity, FleetError};
use fleet_command::utils::{logger, validation::Validate};
use fleet_command::{http, AppState, CliConfig};

fn exit_with(e: &FleetError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.log_format);

    tracing::info!("Starting fleet-command backend");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let fleet = config.build_fleet();
    tracing::info!(
        "🚚 Seeded {} vehicle(s) and {} driver(s)",
        fleet.vehicle_count(),
        fleet.drivers().len()
    );

    if let Err(e) = http::serve(AppState::new(fleet), &config.server).await {
        exit_with(&e);
    }

    tracing::info!("👋 Backend stopped");
    Ok(())
}
