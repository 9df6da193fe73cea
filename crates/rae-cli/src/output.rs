use anyhow::Result;
use rae_model::RetrievalResult;
use std::fs;
use std::path::Path;

/// Human-readable rendering: numbered senses for an entry, or the
/// candidate headwords with the ids to fetch them by.
pub fn render_text(result: &RetrievalResult) -> String {
    match result {
        RetrievalResult::Single { items } if items.is_empty() => "No results.".to_string(),
        RetrievalResult::Single { items } => items
            .iter()
            .map(|sense| sense.text.clone())
            .collect::<Vec<_>>()
            .join("\n"),
        RetrievalResult::Disambiguation { items } => {
            let width = items.iter().map(|c| c.text.chars().count()).max().unwrap_or(0);
            let mut lines = vec![format!("{} matching entries:", items.len())];
            lines.extend(
                items
                    .iter()
                    .map(|c| format!("  {:<width$}  rae fetch {}", c.text, c.id)),
            );
            lines.join("\n")
        }
    }
}

pub fn render_json(result: &RetrievalResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Write the JSON form of `result` to `path`, creating parent directories.
pub fn write_json(result: &RetrievalResult, path: &str) -> Result<()> {
    let path = Path::new(path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_json(result)?)?;
    tracing::info!(path = %path.display(), items = result.len(), "Wrote result JSON");
    Ok(())
}
