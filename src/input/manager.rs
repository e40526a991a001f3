//! Input manager: routes files to extractors, normalizes, and caches

use crate::error::{Result, ResumeRadarError};
use crate::input::file_detector::{FileKind, SUPPORTED_EXTENSIONS};
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    whitespace: Regex,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            whitespace: Regex::new(r"\s+").expect("static whitespace pattern"),
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Extract normalized plain text from a resume or job description file.
    /// Unknown extensions and missing files are errors; empty files are not.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let key = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&key) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeRadarError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let kind = FileKind::from_path(path).ok_or_else(|| {
            ResumeRadarError::UnsupportedFormat(format!(
                "Unsupported file type for '{}' (supported: {})",
                path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            ))
        })?;

        let raw = match kind {
            FileKind::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileKind::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileKind::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
        };

        let text = self.normalize(&raw);

        if self.enable_cache {
            self.cache.insert(key, text.clone());
        }

        Ok(text)
    }

    /// Collapse whitespace runs to single spaces. PDF extraction breaks
    /// lines mid-phrase, and multi-word keywords must still match as
    /// contiguous substrings.
    fn normalize(&self, text: &str) -> String {
        self.whitespace.replace_all(text.trim(), " ").into_owned()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
