//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire `recordbook_core` together end to end with real latency.
//! - Keep output deterministic for quick local sanity checks.

use recordbook_core::{
    core_version, init_logging, CoreConfig, LoginCredentials, RecordBook, RecordSort, DEMO_EMAIL,
    DEMO_PASSWORD,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    println!("recordbook_core version={}", core_version());

    let config = CoreConfig {
        log_dir: std::env::var("RECORDBOOK_LOG_DIR").ok(),
        ..CoreConfig::default()
    };
    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let book = match RecordBook::from_config(&config) {
        Ok(book) => book,
        Err(err) => {
            eprintln!("failed to build record store: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = book
        .session()
        .login(LoginCredentials::new(DEMO_EMAIL, DEMO_PASSWORD))
        .await
    {
        eprintln!("login failed: {err}");
        return ExitCode::FAILURE;
    }

    let Some((user, records)) = book.records() else {
        eprintln!("session not authenticated after login");
        return ExitCode::FAILURE;
    };
    println!("logged in as {} <{}>", user.username, user.email);

    match records.list_all().await {
        Ok(list) => {
            for record in RecordSort::default().sorted(list) {
                println!("{:>4}  {}", record.id, record.title);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to load records: {err}");
            ExitCode::FAILURE
        }
    }
}
