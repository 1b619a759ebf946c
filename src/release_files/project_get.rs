use serde::Deserialize;

// API: https://docs.pypi.org/api/json/#get-a-project
#[derive(Debug, Deserialize)]
pub struct ProjectGet {
    #[serde(default)]
    pub releases: Releases,
}

/// The releases of a project in the order the registry listed them.
#[derive(Debug, Default, PartialEq)]
pub struct Releases(pub Vec<Release>);

#[derive(Debug, PartialEq)]
pub struct Release {
    pub version: String,
    pub files: Vec<FileInfo>,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct FileInfo {
    pub filename: Option<String>,
}

impl ProjectGet {
    /// Returns the filename of every file of every release, skipping files without a filename.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.releases
            .0
            .iter()
            .flat_map(|release| release.files.iter())
            .filter_map(|file| file.filename.as_deref())
    }
}
