use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "agent-cli")]
#[command(about = "Management CLI for the router agent", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8079")]
    url: String,

    #[arg(short, long, default_value = "123456")]
    token: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check agent liveness
    Ping,
    /// Read an interface's credentials
    GetOption {
        #[arg(short, long)]
        interface: String,
    },
    /// Write an interface's credentials (empty values left untouched)
    SetOption {
        #[arg(short, long)]
        interface: String,
        #[arg(short, long, default_value = "")]
        username: String,
        #[arg(short, long, default_value = "")]
        password: String,
    },
    /// Query an interface's status
    Status {
        #[arg(short, long)]
        interface: String,
    },
    /// Bring an interface down then up
    Cycle {
        #[arg(short, long)]
        interface: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    headers.insert("Access-Token", HeaderValue::from_str(&cli.token)?);

    match cli.command {
        Commands::Ping => {
            let res = client
                .get(format!("{}/api/ping", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::GetOption { interface } => {
            let res = client
                .get(format!("{}/api/network/option", cli.url))
                .query(&[("interface", interface)])
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::SetOption {
            interface,
            username,
            password,
        } => {
            let res = client
                .post(format!("{}/api/network/option", cli.url))
                .headers(headers)
                .json(&json!({
                    "interface": interface,
                    "username": username,
                    "password": password,
                }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Status { interface } => {
            let res = client
                .get(format!("{}/api/network/status", cli.url))
                .query(&[("interface", interface)])
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Cycle { interface } => {
            let res = client
                .post(format!("{}/api/network/status", cli.url))
                .headers(headers)
                .json(&json!({ "interface": interface }))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: agent returned status {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}", text),
    }

    Ok(())
}
