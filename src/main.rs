use anyhow::Context;
use clap::Parser;
use mlops_scaffold::config::yaml;
use mlops_scaffold::utils::logger;
use mlops_scaffold::{run, CliConfig, RunOutcome, Settings};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let logger = logger::init_cli_logger(
        settings.verbose,
        settings.log_format,
        settings.log_file.as_deref(),
    )
    .context("Failed to initialize logging")?;

    tracing::info!("Starting mlops-scaffold");
    // The config file is read before logging exists, so its load line is emitted here.
    if let Some(path) = &settings.config_file {
        yaml::log_loaded(path);
    }
    tracing::debug!("Settings: {:?}", settings);

    let outcome = match run(&settings) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("❌ Scaffolding failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if settings.json {
        let json =
            serde_json::to_string_pretty(&outcome).context("Failed to serialize the report")?;
        println!("{}", json);
    } else {
        print_summary(&outcome, &settings);
    }

    logger.shutdown();
    Ok(())
}

fn print_summary(outcome: &RunOutcome, settings: &Settings) {
    let report = &outcome.report;

    if let Some(planned) = &outcome.planned {
        println!("🔍 Dry run: {} operations planned", planned.len());
        for op in planned {
            println!("   {}", op);
        }
        return;
    }

    // The builder has already logged the summary counts.
    println!("🚀 Ready to start your MLOps project!");
    println!("📖 Next steps:");
    println!("   1. cd {}", report.root.display());
    println!("   2. python -m venv venv");
    println!("   3. source venv/bin/activate  # or venv\\Scripts\\activate on Windows");
    println!("   4. pip install -r requirements.txt");
    println!("   5. dvc init");
    println!("   6. Start implementing your entities and services!");

    if settings.verbose {
        tracing::debug!(
            "Additional directories: {}",
            report.additional_directories.join(", ")
        );
    }
}
