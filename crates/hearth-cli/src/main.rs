use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod render;

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Hearth - property listings client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Sign out and drop the stored session
    Logout,
    /// Show the signed-in user's profile
    Whoami,
    /// Browse property listings
    Properties {
        #[command(subcommand)]
        action: PropertiesAction,
    },
}

#[derive(Subcommand)]
enum PropertiesAction {
    /// Load the listings and render them as a table
    List,
    /// Load one property and render its details
    Show { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email } => commands::auth::login(&email).await?,
        Commands::Register { name, email } => commands::auth::register(&name, &email).await?,
        Commands::Logout => commands::auth::logout().await?,
        Commands::Whoami => commands::auth::whoami().await?,
        Commands::Properties { action } => match action {
            PropertiesAction::List => commands::properties::list().await?,
            PropertiesAction::Show { id } => commands::properties::show(&id).await?,
        },
    }

    Ok(())
}
