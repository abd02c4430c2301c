use clap::{Parser, Subcommand};
use serde_json::json;

use room_restyle_proxy::prompt::builder::{apply_defaults, build_prompt};

#[derive(Parser, Debug)]
#[command(name = "roomctl", about = "CLI for the Room Restyle Proxy", version)]
struct Cli {
    /// Base URL of a running proxy
    #[arg(global = true, long, default_value = "http://127.0.0.1:8190")]
    server_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a restyle job through the proxy and print the output
    Generate {
        /// Publicly reachable URL of the source room photo
        #[arg(long)]
        image_url: String,
        /// Room category, e.g. "Bedroom" or "Home Office"
        #[arg(long)]
        room: Option<String>,
        /// Design theme, e.g. "Coastal" or "Industrial"
        #[arg(long)]
        theme: Option<String>,
        /// Identifier sent as x-real-ip (useful against a local proxy)
        #[arg(long)]
        identifier: Option<String>,
    },
    /// Print the prompt that would be submitted, without calling anything
    Prompt {
        #[arg(long)]
        room: Option<String>,
        #[arg(long)]
        theme: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            image_url,
            room,
            theme,
            identifier,
        } => {
            let url = format!("{}/generate", cli.server_url.trim_end_matches('/'));
            let body = json!({
                "imageUrl": image_url,
                "room": room,
                "theme": theme,
            });
            let client = reqwest::Client::new();
            let mut request = client.post(&url).json(&body);
            if let Some(id) = identifier {
                request = request.header("x-real-ip", id);
            }
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            if status.is_success() {
                println!("{}", text);
            } else {
                eprintln!("{}: {}", status, text);
                std::process::exit(1);
            }
        }
        Commands::Prompt { room, theme } => {
            let (room, theme) = apply_defaults(room.as_deref(), theme.as_deref());
            println!("{}", build_prompt(&room, &theme));
        }
    }

    Ok(())
}
