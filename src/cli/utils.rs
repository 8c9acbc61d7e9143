use serde_json::json;

use crate::cli::OutputFormat;
use crate::store::Post;

/// Text rendering of one post: header line, then indented content.
pub fn format_post(post: &Post) -> String {
    let mut out = format!("#{} {}", post.id, post.title);
    for line in post.content.lines() {
        out.push_str("\n    ");
        out.push_str(line);
    }
    out
}

pub fn output_posts(output_format: OutputFormat, posts: &[Post], empty_message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(posts)?);
        }
        OutputFormat::Text if posts.is_empty() => {
            println!("{}", empty_message);
        }
        OutputFormat::Text => {
            let rendered: Vec<String> = posts.iter().map(format_post).collect();
            println!("{}", rendered.join("\n\n"));
        }
    }
    Ok(())
}

pub fn output_post(output_format: OutputFormat, post: &Post) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(post)?),
        OutputFormat::Text => println!("{}", format_post(post)),
    }
    Ok(())
}

pub fn output_message(output_format: OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "message": message }))?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    #[test]
    fn test_format_post_indents_every_content_line() {
        let post = Post {
            id: 7,
            title: "Hello".into(),
            content: "line one\nline two".into(),
            extra: Map::new(),
        };
        assert_eq!(format_post(&post), "#7 Hello\n    line one\n    line two");
    }
}
