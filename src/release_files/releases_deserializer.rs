use crate::release_files::project_get::{FileInfo, Release, Releases};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, de};
use std::fmt::Formatter;

impl<'de> Deserialize<'de> for Releases {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ReleasesVisitor;

        impl<'de> Visitor<'de> for ReleasesVisitor {
            type Value = Releases;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                write!(formatter, "a map from version to a list of release files")
            }

            // Entries are kept in document order, a map type would reorder the versions
            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut releases = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((version, files)) = map.next_entry::<String, Vec<FileInfo>>()? {
                    releases.push(Release { version, files });
                }
                Ok(Releases(releases))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Releases::default())
            }
        }

        deserializer.deserialize_any(ReleasesVisitor)
    }
}
