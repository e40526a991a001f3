//! Text extraction from supported file formats

use crate::error::{Result, ResumeRadarError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

/// Markdown extractor: walks the pulldown-cmark event stream and keeps the
/// text content, dropping all formatting.
pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown))
    }
}

fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::Item)
            | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
            _ => {}
        }
    }
    text
}

/// PDF extractor. Page text is concatenated in page order by the underlying
/// library before it reaches the scorer.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeRadarError::PdfExtraction(format!(
                "Failed to extract text from '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_text_drops_formatting_and_keeps_content() {
        let text = markdown_to_text("## Skills\n\n- **OAuth 2.0** and `SAML`\n- GDPR work\n");
        assert!(text.contains("Skills"));
        assert!(text.contains("OAuth 2.0 and SAML"));
        assert!(text.contains("GDPR work"));
        assert!(!text.contains("**"));
        assert!(!text.contains("##"));
        assert!(!text.contains('`'));
    }

    #[test]
    fn soft_breaks_become_spaces_so_phrases_stay_joined() {
        let text = markdown_to_text("Multi-Factor\nAuthentication");
        assert!(text.contains("Multi-Factor Authentication"));
    }
}
