//! Input pipeline
//! File kind routing, text extraction, and extraction caching

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
