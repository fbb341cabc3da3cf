// File: src/persistence.rs
use crate::core::model::SpamModel;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the model through a temp file in the target directory, then renames
/// it over `path`. Readers never observe a partially written artifact.
pub fn save_model(model: &SpamModel, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, model)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    tracing::info!(path = %path.display(), "saved model");
    Ok(())
}

pub fn load_model(path: &Path) -> Result<SpamModel> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let model: SpamModel = bincode::deserialize_from(reader)?;
    model.check_compatible()?;

    tracing::debug!(path = %path.display(), features = model.vectorizer().n_features(), "loaded model");
    Ok(model)
}
