//! Modality Configuration
//!
//! Per-feature description of the modalities to build. A feature is either
//! auto-partitioned or given an explicit, ordered list of named shapes:
//!
//! ```json
//! {
//!   "age":    {"auto": 5},
//!   "income": {"low": {"trimf": [0, 0, 50]}, "high": {"trimf": [0, 50, 100]}}
//! }
//! ```
//!
//! The shape of each entry is decided while parsing. Shape tags other than
//! `trimf`, `trapmf` and `gaussmf` are parse errors. Partition sizes are
//! checked later, by `fuzzify`.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{Error as DeError, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::membership::MembershipFunction;

const AUTO_KEY: &str = "auto";

/// Modalities of a single feature
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureModalities {
    /// Evenly spaced triangular partition of the given size
    Auto(usize),
    /// Named shapes, in declaration order
    Explicit(Vec<(String, MembershipFunction)>),
}

impl FeatureModalities {
    /// Explicit modalities from `(name, shape)` pairs
    pub fn explicit<S: Into<String>>(modalities: Vec<(S, MembershipFunction)>) -> Self {
        FeatureModalities::Explicit(
            modalities
                .into_iter()
                .map(|(name, f)| (name.into(), f))
                .collect(),
        )
    }
}

impl Serialize for FeatureModalities {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FeatureModalities::Auto(count) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(AUTO_KEY, count)?;
                map.end()
            }
            FeatureModalities::Explicit(modalities) => {
                let mut map = serializer.serialize_map(Some(modalities.len()))?;
                for (name, function) in modalities {
                    map.serialize_entry(name, function)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for FeatureModalities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(FeatureModalitiesVisitor)
    }
}

struct FeatureModalitiesVisitor;

impl<'de> Visitor<'de> for FeatureModalitiesVisitor {
    type Value = FeatureModalities;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(r#"{"auto": <count>} or a map of modality name to membership function"#)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut auto: Option<usize> = None;
        let mut modalities: Vec<(String, MembershipFunction)> = Vec::new();

        while let Some(key) = map.next_key::<String>()? {
            if key == AUTO_KEY {
                if auto.is_some() || !modalities.is_empty() {
                    return Err(A::Error::custom("\"auto\" must be the only key of a feature entry"));
                }
                auto = Some(map.next_value()?);
                continue;
            }
            if auto.is_some() {
                return Err(A::Error::custom("\"auto\" must be the only key of a feature entry"));
            }
            if modalities.iter().any(|(name, _)| *name == key) {
                return Err(A::Error::custom(format!("duplicate modality '{key}'")));
            }
            let function: MembershipFunction = map.next_value()?;
            modalities.push((key, function));
        }

        match auto {
            Some(count) => Ok(FeatureModalities::Auto(count)),
            None if modalities.is_empty() => Err(A::Error::custom("feature entry has no modalities")),
            None => Ok(FeatureModalities::Explicit(modalities)),
        }
    }
}

/// Feature name to modality description
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalityConfig {
    features: HashMap<String, FeatureModalities>,
}

impl ModalityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn insert<S: Into<String>>(&mut self, feature: S, modalities: FeatureModalities) {
        self.features.insert(feature.into(), modalities);
    }

    /// Builder-style [`ModalityConfig::insert`]
    pub fn with<S: Into<String>>(mut self, feature: S, modalities: FeatureModalities) -> Self {
        self.insert(feature, modalities);
        self
    }

    pub fn with_auto<S: Into<String>>(self, feature: S, count: usize) -> Self {
        self.with(feature, FeatureModalities::Auto(count))
    }

    pub fn get(&self, feature: &str) -> Option<&FeatureModalities> {
        self.features.get(feature)
    }

    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl From<HashMap<String, FeatureModalities>> for ModalityConfig {
    fn from(features: HashMap<String, FeatureModalities>) -> Self {
        Self { features }
    }
}
