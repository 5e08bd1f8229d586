use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use reqwest::Client;
use std::time::Duration;
use tracing::info;
use ubahn_events::api::bus::BusClient;
use ubahn_events::api::members::MembersClient;
use ubahn_events::auth::M2mAuth;
use ubahn_events::config::loader::load_config;
use ubahn_events::kafka::options::kafka_options;
use ubahn_events::utils::constants::DEFAULT_HTTP_TIMEOUT_MS;
use ubahn_events::utils::logging::{self, LogLevel};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "ubahn-events.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Audience {
    Ubahn,
    Topcoder,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a fresh M2M token for the given audience
    Token {
        #[arg(value_enum)]
        audience: Audience,
    },
    /// Look up a member profile by handle
    Member { handle: String },
    /// Publish a JSON payload to the bus under the given topic
    PostEvent {
        topic: String,
        #[arg(long)]
        payload: String,
    },
    /// Print the Kafka connection options derived from config
    KafkaOptions,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read args, load YAML config, init logging
    // -------------------------------

    let args = Args::parse();
    let app_config = load_config(&args.config)?;
    logging::run(&app_config, args.log_level)?;

    // -------------------------------
    // 2. Build auth and API clients
    // -------------------------------

    let auth = M2mAuth::new(&app_config.auth0)?;
    let http = Client::builder()
        .timeout(Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS))
        .build()?;

    // -------------------------------
    // 3. Run the requested operation
    // -------------------------------

    match args.command {
        Command::Token { audience } => {
            let token = match audience {
                Audience::Ubahn => auth.ubahn_token().await?,
                Audience::Topcoder => auth.topcoder_token().await?,
            };
            println!("{}", token);
        }
        Command::Member { handle } => {
            let members = MembersClient::new(&app_config.api, http);
            let token = auth.topcoder_token().await?;
            let member = members.get_member(&handle, &token).await?;
            println!("{}", serde_json::to_string_pretty(&member)?);
        }
        Command::PostEvent { topic, payload } => {
            let bus = BusClient::new(&app_config.api, http);
            let payload = serde_json::from_str(&payload)?;
            let token = auth.topcoder_token().await?;
            bus.post_event(&topic, payload, &token).await?;
            info!("event posted to topic {}", topic);
        }
        Command::KafkaOptions => {
            let options = kafka_options(&app_config.kafka)?;
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
    }

    Ok(())
}
