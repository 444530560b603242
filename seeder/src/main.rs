use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use sea_orm::Database;
use seeder::config::DbConfig;
use seeder::Profile;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(
    name = "blog-seeder",
    version,
    about = "Reset and repopulate the blog schema with sample data"
)]
struct Cli {
    /// Seed the massive profile (thousands of rows per table)
    #[arg(long, short = 'm', conflicts_with_all = ["small", "mode"])]
    massive: bool,
    /// Seed the small fixture profile
    #[arg(long, short = 's', conflicts_with = "mode")]
    small: bool,
    /// Profile by name: small | massive (unknown names fall back to small)
    #[arg(long)]
    mode: Option<String>,
}

impl Cli {
    fn profile(&self) -> Profile {
        if self.massive {
            Profile::Massive
        } else if self.small {
            Profile::Small
        } else {
            self.mode
                .as_deref()
                .map(Profile::from_mode)
                .unwrap_or(Profile::Small)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let profile = cli.profile();

    let db = Database::connect(DbConfig::database_url())
        .await
        .context("database connection failed")?;
    db.ping().await.context("database ping failed")?;
    info!("connected to database");

    let summary = seeder::run(&db, profile).await?;
    info!(
        "{} seed complete: {} categories, {} users, {} tags, {} posts, {} comments, \
         {} post-tag links, {} activity logs",
        profile.name(),
        summary.categories,
        summary.users,
        summary.tags,
        summary.posts,
        summary.comments,
        summary.post_tags,
        summary.activity_logs,
    );
    Ok(())
}
