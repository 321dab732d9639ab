//! Plain-text rendering of posts
//!
//! Lays a thread out for pasting into a summarization prompt. Rendering is
//! deterministic: same posts in, same text out.

use std::str::FromStr;

use crate::post::{Post, Reply};
use crate::{Error, Result};

const RULE_WIDTH: usize = 80;
const NO_CONTENT: &str = "No content";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Render a batch of posts in the requested format
pub fn render_posts(posts: &[Post], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for post in posts {
                out.push_str(&render_post(post));
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(posts)?),
    }
}

/// Render one post with its answers and discussion
pub fn render_post(post: &Post) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    let number = post
        .post_number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let subject = if post.subject.is_empty() {
        "No Subject"
    } else {
        post.subject.as_str()
    };

    lines.push(rule.clone());
    lines.push(format!("POST #{} - {}", number, subject));
    lines.push(rule);
    lines.push(format!(
        "Type: {}",
        post.post_type.as_deref().unwrap_or("unknown")
    ));
    lines.push(String::new());

    lines.push("QUESTION:".to_string());
    lines.push(or_no_content(&post.content).to_string());
    lines.push(String::new());

    if let Some(answer) = &post.student_answer {
        lines.push("STUDENT ANSWER:".to_string());
        lines.push(or_no_content(&answer.content).to_string());
        lines.push(String::new());
    }

    if let Some(answer) = &post.instructor_answer {
        lines.push("INSTRUCTOR ANSWER:".to_string());
        lines.push(or_no_content(&answer.content).to_string());
        lines.push(String::new());
    }

    if !post.followups.is_empty() {
        lines.push(format!("FOLLOWUP DISCUSSIONS ({}):", post.followups.len()));
        for (i, followup) in post.followups.iter().enumerate() {
            lines.push(format!(
                "\n  Followup #{} (by {}):",
                i + 1,
                followup.author_type.as_str()
            ));
            lines.push(format!("  {}", or_no_content(&followup.content)));
            render_replies(&followup.replies, 4, &mut lines);
        }
        lines.push(String::new());
    }

    lines.push("\n".to_string());
    lines.join("\n")
}

fn render_replies(replies: &[Reply], indent: usize, lines: &mut Vec<String>) {
    let pad = " ".repeat(indent);
    for (j, reply) in replies.iter().enumerate() {
        lines.push(format!(
            "\n{}Reply #{} (by {}):",
            pad,
            j + 1,
            reply.author_type.as_str()
        ));
        lines.push(format!("{}{}", pad, or_no_content(&reply.content)));
        render_replies(&reply.replies, indent + 2, lines);
    }
}

fn or_no_content(text: &str) -> &str {
    if text.is_empty() { NO_CONTENT } else { text }
}
