pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use self::client::ApiClient;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5002/api";

#[derive(Parser)]
#[command(name = "blog")]
#[command(about = "Blog CLI - list, search and edit posts on a Blog API server")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, env = "BLOG_API_URL", default_value = DEFAULT_API_URL, help = "API base URL")]
    pub url: String,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List posts, optionally sorted")]
    List {
        #[arg(long, help = "Sort field: title or content")]
        sort: Option<String>,
        #[arg(long, default_value = "asc", help = "Sort direction: asc or desc")]
        direction: String,
    },

    #[command(about = "Search posts by title or content (case-insensitive)")]
    Search {
        #[arg(long, help = "Substring to look for in titles")]
        title: Option<String>,
        #[arg(long, help = "Substring to look for in content")]
        content: Option<String>,
    },

    #[command(about = "Create a post")]
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },

    #[command(about = "Update the title and/or content of a post")]
    Update {
        #[arg(help = "Post ID")]
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },

    #[command(about = "Delete a post")]
    Delete {
        #[arg(help = "Post ID")]
        id: u64,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.url)?;
    commands::handle(cli.command, &client, output_format).await
}
