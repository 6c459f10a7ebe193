use crate::cli::Cli;
use crate::config::ApiConfig;
use crate::provider::RapidApiClient;
use crate::session::SearchSession;
use crate::templates::{search_page, SearchPageVm};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod controller;
mod domain;
mod errors;
mod provider;
mod session;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Environment and logging. Logs go to stderr; stdout is the page.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2️⃣ Build the search from the command line
    let cli = Cli::parse();
    let request = cli.request();

    let config = match ApiConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "❌ configuration failed");
            std::process::exit(1);
        }
    };

    let client = match RapidApiClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "❌ could not build search client");
            std::process::exit(1);
        }
    };

    // 3️⃣ Run it and wait. Failures end up on the page, not as a crash.
    let mut session = SearchSession::new(client, config.page_size);
    if session.submit(request.clone()).is_ok() {
        session.wait_all(config.timeout + Duration::from_secs(5));
    }

    // 4️⃣ Filter, sort and page the loaded results
    let view = cli.apply_view(&mut session);
    tracing::info!(
        shown = view.listings.len(),
        matched = view.filtered_count,
        page = view.page_index,
        "rendering results"
    );

    // 5️⃣ Render
    let vm = SearchPageVm::from_controller(session.controller(), request);
    println!("{}", search_page(&vm).into_string());
}
