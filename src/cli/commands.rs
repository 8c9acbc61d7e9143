use anyhow::bail;

use super::client::ApiClient;
use super::utils::{output_message, output_post, output_posts};
use super::{Commands, OutputFormat};

pub async fn handle(cmd: Commands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        Commands::List { sort, direction } => {
            let posts = client
                .list(sort.as_deref().map(|field| (field, direction.as_str())))
                .await?;
            output_posts(output_format, &posts, "No posts available.")
        }
        Commands::Search { title, content } => {
            let posts = client.search(title.as_deref(), content.as_deref()).await?;
            output_posts(output_format, &posts, "No posts found matching your search term.")
        }
        Commands::Create { title, content } => {
            let (title, content) = (title.trim(), content.trim());
            if title.is_empty() || content.is_empty() {
                bail!("Title and Content cannot be empty.");
            }
            let post = client.create(title, content).await?;
            output_post(output_format, &post)
        }
        Commands::Update { id, title, content } => {
            if title.is_none() && content.is_none() {
                bail!("Nothing to update; pass --title and/or --content.");
            }
            let post = client.update(id, title.as_deref(), content.as_deref()).await?;
            output_post(output_format, &post)
        }
        Commands::Delete { id } => {
            let message = client.delete(id).await?;
            output_message(output_format, &message)
        }
    }
}
