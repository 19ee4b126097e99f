pub mod document;
pub mod format;
pub mod group;
