//! Input manager for reading resume and job description files

use crate::config::InputConfig;
use crate::error::{AtsError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    max_file_size_kb: u64,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self::from_config(&InputConfig::default())
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: config.enable_caching,
            max_file_size_kb: config.max_file_size_kb,
        }
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(AtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path);
        if file_type.is_binary_document() {
            warn!("Rejected binary document: {}", path.display());
            return Err(AtsError::UnsupportedFormat(format!(
                "{}: PDF and DOCX files are not parsed. Copy the text into a .txt file or paste it directly.",
                path.display()
            )));
        }
        if file_type == FileType::Unknown {
            return Err(AtsError::UnsupportedFormat(format!(
                "Unsupported file type for: {} (expected .txt or .md)",
                path.display()
            )));
        }

        let size_kb = tokio::fs::metadata(path).await?.len() / 1024;
        if size_kb > self.max_file_size_kb {
            return Err(AtsError::InvalidInput(format!(
                "{} is {} KB, larger than the {} KB limit",
                path.display(),
                size_kb,
                self.max_file_size_kb
            )));
        }

        let text = match file_type {
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            _ => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
