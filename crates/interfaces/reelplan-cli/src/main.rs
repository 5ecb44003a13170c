use clap::{Parser, Subcommand};
use reelplan_app_core::GeminiConfig;
use reelplan_cli::commands::{self, Output};
use reelplan_cli::CliTab;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about = "Turn a video idea into a production plan")]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a guide for a video idea
    Generate {
        idea: String,
        #[arg(short, long, value_enum, conflicts_with = "json", help = "Print a single tab")]
        tab: Option<CliTab>,
        #[arg(long, help = "Print the raw guide as JSON")]
        json: bool,
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        #[arg(long, env = "REELPLAN_MODEL")]
        model: Option<String>,
        #[arg(long, env = "REELPLAN_ENDPOINT")]
        endpoint: Option<String>,
    },
    /// Print the response schema sent to the provider
    Schema,
    /// List title templates to start an idea from
    Templates,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate {
            idea,
            tab,
            json,
            api_key,
            model,
            endpoint,
        } => {
            let mut config = GeminiConfig::from_env();
            if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
                config.api_key = Some(key);
            }
            if let Some(model) = model {
                config.model = model;
            }
            if let Some(endpoint) = endpoint {
                config.endpoint = endpoint;
            }

            let output = if json {
                Output::Json
            } else {
                Output::Text {
                    tab: tab.map(Into::into),
                }
            };
            commands::cmd_generate(idea, config, output).await?;
        }
        Commands::Schema => commands::cmd_schema()?,
        Commands::Templates => commands::cmd_templates(),
    }

    Ok(())
}
