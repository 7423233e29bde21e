//! CLI entrypoint for kababhut
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use kababhut_application::{
    AuthGateway, Catalog, CheckoutUseCase, DashboardError, InMemoryOnboarding, InMemoryTokenStore,
    InquiryGateway, LoadDashboardUseCase, LoadMenuUseCase, LoginError, LoginUseCase, NoProgress,
    OnboardingStore, ProgressNotifier, StorefrontSession, SubmitInquiryUseCase, TokenStore,
};
use kababhut_domain::{ContactForm, Credentials, OutputFormat};
use kababhut_infrastructure::{
    ApiClient, ConfigLoader, FileConfig, FileOnboardingStore, FileTokenStore, HttpAuthGateway,
    HttpInquiryGateway, HttpMenuSource, HttpStatsSource, StaticCatalog,
};
use kababhut_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, StorefrontShell};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let config = load_config(&cli)?;
    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            eprintln!("Config error: {}", issue.message);
        } else {
            eprintln!("Config warning: {}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }

    let storefront = config.storefront_config();

    if !config.output.use_color() {
        colored::control::set_override(false);
    }
    let format = cli
        .output
        .map(OutputFormat::from)
        .unwrap_or(config.output.format);

    info!("Starting kababhut against {}", config.api.base_url);

    // === Dependency Injection ===
    let client = Arc::new(ApiClient::new(
        config.api.base_url.clone(),
        config.api.timeout(),
    )?);
    let catalog: Arc<dyn Catalog> = Arc::new(StaticCatalog::new());
    let data_dir = config.storage.resolve_data_dir();

    let tokens: Arc<dyn TokenStore> = match (&data_dir, cli.ephemeral) {
        (Some(dir), false) => Arc::new(FileTokenStore::new(dir)),
        (None, false) => {
            warn!("No data directory available; sign-ins last for this run only");
            Arc::new(InMemoryTokenStore::new())
        }
        (_, true) => Arc::new(InMemoryTokenStore::new()),
    };

    let progress: Box<dyn ProgressNotifier> = if cli.quiet || format == OutputFormat::Json {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let json = format == OutputFormat::Json;

    match cli.command.clone().unwrap_or(Command::Shell) {
        Command::Menu { category } => {
            let use_case =
                LoadMenuUseCase::new(Arc::new(HttpMenuSource::new(client)), catalog);
            let load = use_case.execute_with_progress(progress.as_ref()).await;
            if json {
                let items: Vec<_> = match category.as_deref() {
                    Some(key) => load.menu.in_category(key).collect(),
                    None => load.menu.items().iter().collect(),
                };
                println!("{}", ConsoleFormatter::format_json(&items));
            } else {
                print!("{}", ConsoleFormatter::format_menu(&load, category.as_deref()));
            }
        }

        Command::Packages => {
            let packages = catalog.packages();
            if json {
                println!("{}", ConsoleFormatter::format_json(&packages));
            } else {
                print!(
                    "{}",
                    ConsoleFormatter::format_packages(&packages, &storefront.category_limits)
                );
            }
        }

        Command::Contact(args) => {
            let use_case = SubmitInquiryUseCase::new(
                Arc::new(HttpInquiryGateway::new(client)),
                storefront.submission_policy,
            );
            let receipt = use_case
                .execute_with_progress(ContactForm::from(args), progress.as_ref())
                .await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&receipt));
            } else {
                print!("{}", ConsoleFormatter::format_receipt(&receipt));
            }
        }

        Command::Login { email, password } => {
            let use_case = LoginUseCase::new(Arc::new(HttpAuthGateway::new(client)), tokens);
            match use_case
                .execute_with_progress(&Credentials::new(email, password), progress.as_ref())
                .await
            {
                Ok(outcome) if json => println!("{}", ConsoleFormatter::format_json(&outcome.route)),
                Ok(outcome) => println!("Signed in. Dashboard: {}", outcome.route.path()),
                Err(LoginError::InvalidCredentials) => bail!("Invalid credentials"),
                Err(e) => return Err(e.into()),
            }
        }

        Command::Logout => {
            tokens.clear_token()?;
            if !json {
                println!("Signed out");
            }
        }

        Command::Dashboard => {
            let use_case = LoadDashboardUseCase::new(
                Arc::new(HttpStatsSource::new(client)),
                tokens,
                catalog,
            );
            match use_case.execute_with_progress(progress.as_ref()).await {
                Ok(view) if json => println!("{}", ConsoleFormatter::format_json(&view)),
                Ok(view) => print!("{}", ConsoleFormatter::format_dashboard(&view)),
                Err(DashboardError::Unauthorized) => {
                    bail!("Not signed in. Run `kababhut login` first.")
                }
                Err(e) => return Err(e.into()),
            }
        }

        Command::Shell => {
            let onboarding: Arc<dyn OnboardingStore> = match &data_dir {
                Some(dir) => Arc::new(FileOnboardingStore::new(dir)),
                None => Arc::new(InMemoryOnboarding::new()),
            };

            let menu = LoadMenuUseCase::new(
                Arc::new(HttpMenuSource::new(client.clone())),
                catalog.clone(),
            )
            .execute_with_progress(progress.as_ref())
            .await;
            if menu.origin.is_fallback() {
                eprintln!("Menu service unavailable; showing the built-in menu.");
            }

            let inquiries: Arc<dyn InquiryGateway> =
                Arc::new(HttpInquiryGateway::new(client.clone()));
            let auth: Arc<dyn AuthGateway> = Arc::new(HttpAuthGateway::new(client));

            let session = StorefrontSession::new(menu.menu, &storefront);
            let mut shell = StorefrontShell::new(
                session,
                SubmitInquiryUseCase::new(inquiries, storefront.submission_policy),
                LoginUseCase::new(auth, tokens.clone()),
                CheckoutUseCase::new(tokens),
                catalog,
                onboarding,
            )
            .with_progress(!cli.quiet)
            .with_history_file(data_dir.map(|d| d.join("history.txt")));

            shell.run().await?;
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let Some(path) = &cli.log_file else {
        tracing_subscriber::registry().with(stderr_layer).init();
        return Ok(None);
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }
    Ok(ConfigLoader::load(cli.config.as_ref())?)
}
