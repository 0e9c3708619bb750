use std::path::Path;
use std::process::ExitCode;
use taskbudget::config;
use taskbudget::convert::run_conversion;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    info!(source = config::SOURCE_PATH, "Converting catalog outline");

    match run_conversion(Path::new(config::SOURCE_PATH), Path::new(config::OUTPUT_PATH)) {
        Ok(count) => {
            println!(
                "Extracted {} task budget entries to {}",
                count,
                config::OUTPUT_PATH
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
