use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Matches the `td-latest[-<platform>]-build-<buildId>.json` document
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildManifest {
    pub artifacts: OrderedMap<Option<OrderedMap<Option<ArtifactDetail>>>>,
    pub created_at: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ArtifactDetail {
    pub path: Option<String>,
    pub url: Option<String>,
}

/// A single installer referenced by a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub url: String,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactCategory {
    Appx,
    Msi,
    Nsis,
    NsisWeb,
    NsisWeb7z,
}

impl ArtifactCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactCategory::Appx => "appx",
            ArtifactCategory::Msi => "msi",
            ArtifactCategory::Nsis => "nsis",
            ArtifactCategory::NsisWeb => "nsis-web",
            ArtifactCategory::NsisWeb7z => "nsis-web-7z",
        }
    }

    /// Web installer payloads are kept together in their own subdirectory.
    pub fn is_web_installer(&self) -> bool {
        matches!(self, ArtifactCategory::NsisWeb | ArtifactCategory::NsisWeb7z)
    }
}

impl FromStr for ArtifactCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appx" => Ok(ArtifactCategory::Appx),
            "msi" => Ok(ArtifactCategory::Msi),
            "nsis" => Ok(ArtifactCategory::Nsis),
            "nsis-web" => Ok(ArtifactCategory::NsisWeb),
            "nsis-web-7z" => Ok(ArtifactCategory::NsisWeb7z),
            other => Err(anyhow::anyhow!("Unknown artifact category: {other}")),
        }
    }
}

impl BuildManifest {
    /// Every artifact with a download URL, in document order.
    /// Null categories, null entries and entries without a URL are skipped.
    pub fn assets(&self) -> Vec<Asset> {
        self.artifacts
            .iter()
            .filter_map(|(category, entries)| entries.as_ref().map(|e| (category, e)))
            .flat_map(|(category, entries)| {
                entries
                    .values()
                    .flatten()
                    .filter_map(|detail| detail.url.as_deref())
                    .filter(|url| !url.is_empty())
                    .map(move |url| Asset {
                        url: url.to_string(),
                        category: category.clone(),
                    })
            })
            .collect()
    }
}

/// JSON object that keeps its keys in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn iter(&self) -> impl Iterator<Item = (&String, &V)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, V)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    // Later duplicates win, as with a plain JSON object.
                    match entries.iter_mut().find(|(k, _)| *k == key) {
                        Some(entry) => entry.1 = value,
                        None => entries.push((key, value)),
                    }
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}
