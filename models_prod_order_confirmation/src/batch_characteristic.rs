use crate::odata::EntitySet;
use serde::{Deserialize, Serialize};

/// A classification value of the batch moved by a confirmation, served from `ProdnOrdConfBatchCharc`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchCharacteristic {
    pub confirmation_group: String,
    pub confirmation_count: String,
    #[serde(default)]
    pub material_document: Option<String>,
    #[serde(default)]
    pub material_document_item: Option<String>,
    #[serde(default)]
    pub material_document_year: Option<String>,
    #[serde(default)]
    pub batch: Option<String>,
    #[serde(default)]
    pub characteristic: Option<String>,
    #[serde(default)]
    pub charc_value: Option<String>,
    #[serde(default)]
    pub charc_value_unit: Option<String>,
    #[serde(default)]
    pub charc_from_numeric_value: Option<String>,
    #[serde(default)]
    pub charc_to_numeric_value: Option<String>,
}

impl EntitySet for BatchCharacteristic {
    const NAME: &'static str = "ProdnOrdConfBatchCharc";
}
