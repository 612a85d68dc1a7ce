use anyhow::{Context, Result, bail};
use clap::Parser;
use lipi_core::application::{
    commands::users::CreateAdminInput,
    dto::Actor,
    ports::{ClockPort, PasswordHasherPort, SlugGeneratorPort},
    services::{ApplicationServices, Repositories},
};
use lipi_core::cli::{ADMIN_PASSWORD_ENV, Cli, Commands};
use lipi_core::config::AppConfig;
use lipi_core::domain::{
    slug::detect_language,
    user::{Role, UserId},
};
use lipi_core::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteTermRepository,
        SqliteUserRepository,
    },
    security::password::Argon2PasswordHasher,
    time::SystemClock,
    util::slug_generator,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::from_env()?;

    match cli.command_or_default() {
        Commands::Migrate => {
            let pool = connect(&config).await?;
            pool.close().await;
            tracing::info!("migrations applied");
            Ok(())
        }
        Commands::Slug { text } => {
            let text = text.join(" ");
            let slugger = slug_generator(config.slug_style(), config.slug_separator());
            println!("{}", slugger.slugify(&text));
            println!("language: {}", detect_language(&text));
            Ok(())
        }
        Commands::CreateAdmin {
            name,
            email,
            password_stdin,
        } => {
            let password = read_admin_password(password_stdin)?;
            let pool = connect(&config).await?;
            let services = wire_services(&config, pool.clone());
            // Nobody exists yet to act on behalf of; a transient super admin
            // identity authorises the first account.
            let bootstrap_actor = Actor::new(UserId(0), Role::SuperAdmin);
            let admin = services
                .user_commands
                .create_admin(
                    &bootstrap_actor,
                    CreateAdminInput {
                        name,
                        email,
                        password: password.clone(),
                        password_confirmation: password,
                        role: Role::SuperAdmin,
                        is_active: Some(true),
                        avatar: None,
                    },
                )
                .await
                .map_err(|err| match err.field_errors() {
                    Some(fields) => anyhow::anyhow!(
                        "invalid admin: {}",
                        serde_json::to_string(fields).unwrap_or_else(|_| err.to_string())
                    ),
                    None => anyhow::Error::new(err),
                })?;
            println!("{}", serde_json::to_string_pretty(&admin)?);
            pool.close().await;
            Ok(())
        }
    }
}

/// Stdin when asked for, then the env var, then an interactive prompt.
fn read_admin_password(from_stdin: bool) -> Result<String> {
    if from_stdin {
        let mut line = String::new();
        std::io::stdin()
            .read_line(&mut line)
            .context("failed to read password from stdin")?;
        return Ok(line.trim_end_matches(['\r', '\n']).to_string());
    }
    if let Ok(password) = std::env::var(ADMIN_PASSWORD_ENV) {
        return Ok(password);
    }

    let password = rpassword::prompt_password("Password: ")?;
    let confirmation = rpassword::prompt_password("Confirm password: ")?;
    if password != confirmation {
        bail!("passwords do not match");
    }
    Ok(password)
}

async fn connect(config: &AppConfig) -> Result<SqlitePool> {
    let pool = database::init_pool(config.database_url(), config.max_connections())
        .await
        .with_context(|| format!("failed to open {}", config.database_url()))?;
    database::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;
    Ok(pool)
}

fn wire_services(config: &AppConfig, pool: SqlitePool) -> ApplicationServices {
    let repos = Repositories {
        article_write: Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
        article_read: Arc::new(SqliteArticleReadRepository::new(pool.clone())),
        categories: Arc::new(SqliteTermRepository::categories(pool.clone())),
        tags: Arc::new(SqliteTermRepository::tags(pool.clone())),
        users: Arc::new(SqliteUserRepository::new(pool)),
    };

    let password_hasher: Arc<PasswordHasherPort> = Arc::new(Argon2PasswordHasher);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> =
        slug_generator(config.slug_style(), config.slug_separator());

    ApplicationServices::new(repos, password_hasher, clock, slugger)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
