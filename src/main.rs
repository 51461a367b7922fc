//! pwd-audit entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pwd_audit::{
    AuditError, Auditor, BreachChecker, Config, HttpRangeSource, LogFormat, TracingReporter,
    write_report,
};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn run(config: &Config) -> Result<(), AuditError> {
    let source = HttpRangeSource::new(&config.base_url, config.timeout())?.with_retries(config.retries);
    let mut auditor = Auditor::new(BreachChecker::new(source), TracingReporter);

    let results = auditor.run_file(&config.input_file).await?;

    if let Some(output) = &config.output_file {
        write_report(output, &results)?;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Config::parse();
    init_tracing(config.log_format);

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
