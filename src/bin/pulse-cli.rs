use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "pulse-cli")]
#[command(about = "Management CLI for a running pulse sidecar", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[arg(short, long, default_value = "/pulse")]
    base_path: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check liveness
    Health,
    /// Show build and deployment metadata
    Info,
    /// Show the active log level
    Level,
    /// Change the active log level
    SetLevel {
        /// debug, info, warn, error, dpanic, panic or fatal
        level: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = format!("{}{}", cli.url.trim_end_matches('/'), cli.base_path);

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/health", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Info => {
            let res = client.get(format!("{}/info", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Level => {
            let res = client.get(format!("{}/logger", base)).send().await?;
            print_response(res).await?;
        }
        Commands::SetLevel { level } => {
            let res = client
                .post(format!("{}/logger", base))
                .json(&json!({ "level": level }))
                .send()
                .await?;
            let status = res.status();
            if status.is_success() {
                println!("Log level set to {}", level);
            } else {
                eprintln!("Error: pulse returned status {}", status);
                eprintln!("Response: {}", res.text().await?);
            }
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: pulse returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
