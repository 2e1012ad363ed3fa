//! Persistence of character records to timestamped JSON and CSV files.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing::info;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::record::{CharacterRecord, FieldLabel};

/// Writes records into the configured data directory, one timestamped file
/// per call.
pub struct Storage {
    data_dir: PathBuf,
    filename_prefix: String,
}

impl Storage {
    /// Create a storage handle, creating the data directory if needed.
    pub fn new(config: &OutputConfig) -> Result<Self> {
        let data_dir = PathBuf::from(&config.data_dir);
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            data_dir,
            filename_prefix: config.filename_prefix.clone(),
        })
    }

    fn file_path(&self, name: &str, extension: &str) -> PathBuf {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        self.data_dir
            .join(format!("{}_{name}_{timestamp}.{extension}", self.filename_prefix))
    }

    /// Write one record as pretty-printed JSON. Returns the file path.
    pub fn save_json(&self, name: &str, record: &CharacterRecord) -> Result<PathBuf> {
        let path = self.file_path(name, "json");
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)?;
        info!(path = %path.display(), "record saved");
        Ok(path)
    }

    /// Write a batch of records as a flat CSV table. Description paragraphs
    /// are joined with ` | ` and image links with spaces, so each record
    /// stays one row. The image cell carries links only; width and height
    /// are preserved in the JSON output, not here.
    pub fn save_csv(&self, name: &str, records: &[CharacterRecord]) -> Result<PathBuf> {
        let path = self.file_path(name, "csv");
        let mut writer = csv::Writer::from_path(&path)?;

        writer.write_record([
            "source_url",
            "full_name",
            "current_age",
            "current_vocation",
            "season_one_age",
            "season_one_vocation",
            "parents",
            "siblings",
            "first_appearance",
            "status_end_of_series",
            "self_assessment",
            "description",
            "alter_ego_images",
        ])?;

        for record in records {
            let mut row = vec![record.source_url.clone()];
            for field in FieldLabel::ALL {
                row.push(record.field(field).to_string());
            }
            row.push(record.description.join(" | "));
            row.push(
                record
                    .alter_ego_images
                    .iter()
                    .map(|image| image.link.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            );
            writer.write_record(&row)?;
        }

        writer.flush()?;
        info!(path = %path.display(), count = records.len(), "records saved");
        Ok(path)
    }
}
