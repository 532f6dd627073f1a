//! The OData v2 JSON envelope shared by every response of the service

use serde::{Deserialize, Serialize};

/// An entity which is served from a named entity set of the service
pub trait EntitySet {
    /// the entity set name as it appears in the url
    const NAME: &'static str;
}

/// A deferred navigation property, e.g.
/// `{"__deferred": {"uri": "https://.../ProdnOrdConf2(...)/to_ProdnOrdConfMatlDocItm"}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationProperty {
    #[serde(rename = "__deferred")]
    deferred: Deferred,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Deferred {
    uri: String,
}

impl NavigationProperty {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            deferred: Deferred { uri: uri.into() },
        }
    }

    /// the absolute url of the related collection
    pub fn uri(&self) -> &str {
        &self.deferred.uri
    }
}

impl std::fmt::Display for NavigationProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.uri())
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    d: serde_json::Value,
}

/// `{"d": {"results": [...]}}` for collections, `{"d": {...}}` for a single entity
#[derive(Debug)]
pub struct ODataResponse<T> {
    results: Vec<T>,
}

impl<T> ODataResponse<T> {
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

impl<T> ODataResponse<T>
where
    T: serde::de::DeserializeOwned,
{
    /// decode a raw response body. The payload shape is picked before the entities are
    /// decoded so a bad entity reports its own field error
    pub fn from_slice(body: &[u8]) -> Result<Vec<T>, serde_json::Error> {
        let Envelope { d } = serde_json::from_slice(body)?;
        Self::from_payload(d).map(Self::into_results)
    }

    fn from_payload(d: serde_json::Value) -> Result<Self, serde_json::Error> {
        let results = match d {
            serde_json::Value::Object(mut payload) if payload.contains_key("results") => {
                serde_json::from_value(payload.remove("results").unwrap_or_default())?
            }
            entity => vec![serde_json::from_value(entity)?],
        };

        Ok(Self { results })
    }
}
