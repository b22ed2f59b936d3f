//! Course Manager - HTTP API for courses, tutors and enrollments.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_service_lib::{run_migrations, MigrateAction};
use gateway_lib::config::GatewayConfig;

#[derive(Parser)]
#[command(name = "course-manager")]
#[command(about = "Course manager HTTP service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "GATEWAY_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "GATEWAY_PORT", default_value = "8000")]
        port: u16,
    },
    /// Manage the postgres schema
    Migrate {
        #[arg(value_enum)]
        action: MigrateCommand,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MigrateCommand {
    /// Apply pending migrations
    Up,
    /// Roll back the last migration
    Down,
    /// Show applied and pending migrations
    Status,
    /// Drop everything and reapply
    Fresh,
}

impl From<MigrateCommand> for MigrateAction {
    fn from(cmd: MigrateCommand) -> Self {
        match cmd {
            MigrateCommand::Up => MigrateAction::Up,
            MigrateCommand::Down => MigrateAction::Down,
            MigrateCommand::Status => MigrateAction::Status,
            MigrateCommand::Fresh => MigrateAction::Fresh,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GatewayConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            gateway_lib::run_embedded(&host, port, config).await?;
        }
        Commands::Migrate { action } => {
            run_migrations(&config.courses, action.into()).await?;
        }
    }

    Ok(())
}
