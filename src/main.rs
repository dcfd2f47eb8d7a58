use std::sync::Arc;

use clap::Parser;

use sozluk::cli::{self, Commands};
use sozluk::dataset::DatasetState;
use sozluk::handlers::{Consts, Ctx};
use sozluk::search::Outcome;
use sozluk::{http, init, repl};

// Use mimalloc for musl builds.
#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() {
    init::init_logger();

    let cli = cli::Cli::parse();

    // Generate a new config file.
    if let Some(Commands::NewConfig { path }) = &cli.command {
        match init::generate_config(path) {
            Ok(_) => log::info!("config file generated: {}", path.display()),
            Err(e) => {
                log::error!("error generating config: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Load config.
    let mut config = init::init_config(&cli.config).unwrap_or_else(|e| {
        log::error!("error loading config: {}", e);
        std::process::exit(1);
    });
    if let Some(d) = cli.dataset {
        config.app.dataset = d;
    }

    // Load the dictionary once. Everything after this point is synchronous
    // lookups over the loaded data.
    let state = DatasetState::init(&config.app.dataset).await;

    match cli.command {
        Some(Commands::Search { query }) => {
            let Some(dataset) = state.dataset() else {
                std::process::exit(1);
            };

            let query = query.trim();
            let outcome = Outcome::compute(query, dataset);
            let mut out = std::io::stdout().lock();
            if let Err(e) = repl::print_outcome(dataset, query, &outcome, &mut out) {
                log::error!("error writing output: {}", e);
                std::process::exit(1);
            }
            if outcome == Outcome::NoMatch {
                std::process::exit(2);
            }
            return;
        }

        Some(Commands::Repl) => {
            let Some(dataset) = state.dataset() else {
                std::process::exit(1);
            };

            let stdin = std::io::stdin().lock();
            let mut out = std::io::stdout().lock();
            if let Err(e) = repl::run(dataset, stdin, &mut out) {
                log::error!("repl error: {}", e);
                std::process::exit(1);
            }
            return;
        }

        Some(Commands::NewConfig { .. }) | None => {}
    }

    // Initialize site templates (embedded).
    let tpl = init::init_templates().unwrap_or_else(|e| {
        log::error!("error loading templates: {}", e);
        std::process::exit(1);
    });

    // Setup the global app context used in HTTP handlers.
    let ctx = Arc::new(Ctx::new(
        state,
        config.app.dataset,
        tpl,
        Consts {
            root_url: config.app.root_url,
            max_results: config.app.max_results,
        },
        // Generate a random string for asset version cache busting.
        format!(
            "{:08}",
            chrono::Local::now().timestamp_nanos_opt().unwrap_or(0) % 100_000_000
        ),
    ));

    // Start the HTTP server.
    let routes = http::init_handlers(ctx);
    let addr = config.app.address;

    log::info!("starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("error listening on {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, routes).await {
        log::error!("server error: {}", e);
        std::process::exit(1);
    }
}
