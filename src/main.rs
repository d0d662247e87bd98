use clap::Parser;
use small_tasks::config::{CliConfig, Command, LogFormat};
use small_tasks::utils::error::TaskError;
use small_tasks::utils::{logger, validation::Validate};
use small_tasks::{is_palindrome, second_largest_with, TaskRunner, TasksConfig};

fn run(config: &CliConfig) -> Result<bool, TaskError> {
    match &config.command {
        Command::SecondLargest { values, mode } => {
            tracing::debug!("Computing second largest of {:?} ({})", values, mode.as_str());
            let result = second_largest_with(values, *mode)?;
            println!("{}", result);
            Ok(true)
        }
        Command::Palindrome { text } => {
            let result = is_palindrome(text);
            println!("{}", result);
            Ok(true)
        }
        Command::Check { config: path, mode, json } => {
            tracing::info!("📁 Loading cases from: {}", path);
            let mut tasks = TasksConfig::from_file(path)?;
            if let Some(mode) = mode {
                tasks.override_mode(*mode);
                tracing::info!("🔧 Mode overridden to: {}", mode.as_str());
            }
            tasks.validate()?;
            tracing::info!("✅ Loaded {} case(s) from '{}'", tasks.case_count(), tasks.name());

            let report = TaskRunner::new(tasks).run()?;
            if *json {
                let output = serde_json::to_string_pretty(&report).map_err(|e| {
                    TaskError::ValidationError {
                        message: format!("could not serialize report: {}", e),
                    }
                })?;
                println!("{}", output);
            } else {
                for outcome in &report.outcomes {
                    let mark = if outcome.passed { "✅" } else { "❌" };
                    println!(
                        "{} {} (expected {}, got {})",
                        mark, outcome.name, outcome.expected, outcome.actual
                    );
                }
                println!("{} passed, {} failed", report.passed(), report.failed());
            }
            Ok(report.is_success())
        }
    }
}

fn main() {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}
