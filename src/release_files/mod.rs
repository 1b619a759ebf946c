mod fetch;
mod project_get;
mod releases_deserializer;
mod reporter;

pub use fetch::{ReleaseFilesError, fetch_project};
pub use project_get::{FileInfo, ProjectGet, Release, Releases};
pub use reporter::report;
