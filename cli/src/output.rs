//! Reading the record and writing results

use crate::{ComposedCard, OutputPaths};
use anyhow::Context;
use quiz_model::QuestionRecord;
use render_model::OutputFormat;
use std::path::Path;

/// Read a record from `path`, or use the built-in sample.
///
/// An unreadable or invalid record file also falls back to the sample.
pub fn load_record(path: Option<&Path>) -> QuestionRecord {
    let Some(path) = path else {
        tracing::info!("No question file given, using the sample question");
        return QuestionRecord::sample();
    };

    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|json| QuestionRecord::from_json(&json).map_err(anyhow::Error::from));
    match parsed {
        Ok(record) => {
            tracing::info!("Loaded question from {}", path.display());
            record
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load question from {}: {}. Using the sample question",
                path.display(),
                e
            );
            QuestionRecord::sample()
        }
    }
}

/// Write the card image, the record, and the reveal sidecar
pub fn write_outputs(card: &ComposedCard, record: &QuestionRecord, paths: &OutputPaths) -> anyhow::Result<()> {
    for path in [&paths.image, &paths.record, &paths.overlay] {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    card.image
        .save(&paths.image, OutputFormat::from_path(&paths.image))
        .with_context(|| format!("writing {}", paths.image.display()))?;

    let record_json = serde_json::to_string_pretty(record)?;
    std::fs::write(&paths.record, record_json)
        .with_context(|| format!("writing {}", paths.record.display()))?;

    let overlay_json = serde_json::to_string_pretty(&card.reveal)?;
    std::fs::write(&paths.overlay, overlay_json)
        .with_context(|| format!("writing {}", paths.overlay.display()))?;

    tracing::info!(
        "Wrote {}, {} and {}",
        paths.image.display(),
        paths.record.display(),
        paths.overlay.display()
    );
    Ok(())
}
