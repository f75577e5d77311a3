use std::time::Duration;

use clap::{Parser, Subcommand};
use extblock::{ClientConfig, Error, ErrorBody, ExtensionClient};
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the extension service API
    #[arg(long, env = "EXTBLOCK_URL", default_value = "http://localhost:8080/api")]
    base_url: Url,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show fixed and custom extensions
    List,
    /// Toggle blocking of a fixed extension
    Toggle { extension: String },
    /// Register a custom extension
    Add { extension: String },
    /// Remove a custom extension
    Remove { extension: String },
}

async fn run(client: &ExtensionClient, command: Command) -> extblock::Result<()> {
    match command {
        Command::List => {
            let list = client.get_all().await?;

            println!("Fixed extensions:");
            for ext in &list.fixed_extensions {
                let mark = if ext.active { "x" } else { " " };
                println!("  [{}] {}", mark, ext.extension);
            }

            println!("Custom extensions ({}/{}):", list.custom_count, list.max_custom_count);
            for ext in &list.custom_extensions {
                println!("  {}", ext.extension);
            }
        }
        Command::Toggle { extension } => {
            client.toggle_fixed(&extension).await?;
            println!("Toggled '{extension}'");
        }
        Command::Add { extension } => {
            client.add_custom(&extension).await?;
            println!("Added '{extension}'");
        }
        Command::Remove { extension } => {
            client.delete_custom(&extension).await?;
            println!("Removed '{extension}'");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "extblock=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = ClientConfig {
        base_url: args.base_url,
        timeout: Duration::from_secs(args.timeout_secs),
    };
    let client = ExtensionClient::new(config);

    if let Err(err) = run(&client, args.command).await {
        // Surface the server's own error message when the body parses as one
        if let Error::Status { status, ref body } = err {
            if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
                anyhow::bail!("server rejected request ({}): [{}] {}", status, parsed.code, parsed.message);
            }
        }
        return Err(err.into());
    }

    Ok(())
}
