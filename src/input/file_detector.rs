//! Supported resume file kinds

use std::path::Path;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Text,
    Markdown,
}

impl FileKind {
    /// Detect the file kind from the path's extension. Returns None for
    /// extensionless or unsupported files.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(FileKind::Pdf),
            "txt" => Some(FileKind::Text),
            "md" | "markdown" => Some(FileKind::Markdown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_is_extension_based_and_case_insensitive() {
        assert_eq!(FileKind::from_path(Path::new("cv.PDF")), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_path(Path::new("cv.txt")), Some(FileKind::Text));
        assert_eq!(FileKind::from_path(Path::new("cv.markdown")), Some(FileKind::Markdown));
        assert_eq!(FileKind::from_path(Path::new("cv.docx")), None);
        assert_eq!(FileKind::from_path(Path::new("cv")), None);
    }
}
