use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "probe-cli")]
#[command(about = "Client for exercising a running mesh-probe", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:80")]
    url: String,

    /// Extra request header as `name:value` (repeatable)
    #[arg(short = 'H', long = "header", global = true)]
    headers: Vec<String>,

    /// Print status, headers and body as a JSON object
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request an arbitrary path (defaults to `/`)
    Echo {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Trigger the chaining endpoint
    Multi,
    /// Fetch a fresh id, optionally with a Cache-Control max-age
    Cached {
        #[arg(long)]
        max_age: Option<String>,
    },
    /// Echo request headers, or a single one
    Headers {
        #[arg(short, long)]
        key: Vec<String>,
    },
    /// Echo the server's environment, or a single variable
    Env {
        #[arg(short, long)]
        key: Vec<String>,
    },
    /// Fetch a fresh id under a chosen status code
    Status {
        #[arg(short, long)]
        code: Option<String>,
    },
}

#[derive(Serialize)]
struct ProbeOutput {
    url: String,
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let mut headers = HeaderMap::new();
    for raw in &cli.headers {
        let (name, value) = raw
            .split_once(':')
            .ok_or_else(|| format!("invalid header {raw:?}: expected name:value"))?;
        headers.append(
            HeaderName::from_bytes(name.trim().as_bytes())?,
            HeaderValue::from_str(value.trim())?,
        );
    }

    let (path, query): (String, Vec<(&str, String)>) = match &cli.command {
        Commands::Echo { path } => (path.clone(), Vec::new()),
        Commands::Multi => ("/multi".into(), Vec::new()),
        Commands::Cached { max_age } => (
            "/cached".into(),
            max_age.iter().map(|v| ("max-age", v.clone())).collect(),
        ),
        Commands::Headers { key } => (
            "/headers".into(),
            key.iter().map(|k| ("key", k.clone())).collect(),
        ),
        Commands::Env { key } => (
            "/env".into(),
            key.iter().map(|k| ("key", k.clone())).collect(),
        ),
        Commands::Status { code } => (
            "/status".into(),
            code.iter().map(|c| ("code", c.clone())).collect(),
        ),
    };

    let path = if path.starts_with('/') { path } else { format!("/{path}") };
    let res = client
        .get(format!("{base}{path}"))
        .query(&query)
        .headers(headers)
        .send()
        .await?;

    print_response(res, cli.json).await
}

async fn print_response(
    res: reqwest::Response,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = ProbeOutput {
        url: res.url().to_string(),
        status: res.status().as_u16(),
        headers: res
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
            .collect(),
        body: res.text().await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", output.status, output.url);
    for (name, value) in &output.headers {
        println!("{name}: {value}");
    }
    println!();
    print!("{}", output.body);
    if !output.body.ends_with('\n') {
        println!();
    }
    Ok(())
}
