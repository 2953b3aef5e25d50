use clap::Parser;
use endpoint_patcher::utils::{logger, validation::Validate};
use endpoint_patcher::{
    CliConfig, LocalStorage, PatchEngine, PatchReport, PatcherError, RuleStatus,
    CONFIRMATION_MESSAGE,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Patching failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), PatcherError> {
    config.validate()?;
    let rules = config.load_rules()?;

    let storage = LocalStorage::new(config.base_dir.clone());
    let engine = PatchEngine::new(storage, rules, config.target.clone());

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - {} will not be modified", engine.target());
        let (_, report) = engine.preview()?;
        print_dry_run(&report);
        write_report(config, &report)?;
        return Ok(());
    }

    let report = engine.run()?;
    write_report(config, &report)?;

    println!("{}", CONFIRMATION_MESSAGE);
    Ok(())
}

fn write_report(config: &CliConfig, report: &PatchReport) -> Result<(), PatcherError> {
    if let Some(path) = &config.report {
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(path, json)?;
        tracing::info!("📁 Report saved to: {}", path);
    }
    Ok(())
}

fn print_dry_run(report: &PatchReport) {
    println!("🔍 Dry run for {}:", report.target);
    for outcome in &report.outcomes {
        match (outcome.status, outcome.offset) {
            (RuleStatus::Applied, Some(offset)) => {
                println!("  ✅ {}: applies at byte {}", outcome.rule, offset)
            }
            _ => println!("  ⏭️  {}: no match", outcome.rule),
        }
    }
    if report.changed {
        println!("{} of {} rules would apply.", report.applied_count(), report.outcomes.len());
    } else {
        println!("No changes would be made.");
    }
}
