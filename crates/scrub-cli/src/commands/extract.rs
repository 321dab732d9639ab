use std::path::Path;

use anyhow::{Context, Result};
use scrub_core::{OutputFormat, Post, render_posts};
use scrub_engine::{available_folders, filter_by_folder};

pub fn handle(
    input: &Path,
    folder: Option<&str>,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let posts: Vec<Post> = scrub_storage::read(input)
        .with_context(|| format!("Failed to read posts from {}", input.display()))?;

    let Some(folder) = folder else {
        list_folders(&posts);
        return Ok(());
    };

    let selected: Vec<Post> = filter_by_folder(&posts, folder)
        .into_iter()
        .cloned()
        .collect();
    if selected.is_empty() {
        println!("No posts found in folder '{}'", folder);
        return Ok(());
    }

    let rendered = render_posts(&selected, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "✓ Extracted {} posts from '{}' -> {}",
                selected.len(),
                folder,
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn list_folders(posts: &[Post]) {
    let folders = available_folders(posts);
    if folders.is_empty() {
        println!("No folders found.");
        return;
    }

    println!("Folders:");
    for folder in folders {
        let count = filter_by_folder(posts, &folder).len();
        println!("  {} ({} posts)", folder, count);
    }
}
