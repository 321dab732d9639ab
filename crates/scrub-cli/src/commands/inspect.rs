use std::path::Path;

use anyhow::Result;

pub fn handle(file: &Path, json: bool) -> Result<()> {
    let meta = scrub_storage::metadata(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&meta)?);
        return Ok(());
    }

    println!("File: {}", meta.path.display());
    if !meta.exists {
        println!("  Exists: no");
        return Ok(());
    }

    println!("  Records: {}", meta.record_count);
    println!("  Size: {} bytes", meta.size_bytes);
    if let Some(modified) = meta.modified {
        println!("  Modified: {}", modified);
    }

    Ok(())
}
