//! The SDC input document which selects what to read

use serde::{Deserialize, Serialize};

/// The input document. Only [Sdc::accepter] and [Sdc::production_order_confirmation]
/// drive the reads, the remaining fields are carried through for logging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sdc {
    #[serde(default)]
    pub connection_key: Option<String>,
    #[serde(default)]
    pub result: Option<bool>,
    #[serde(default)]
    pub redis_key: Option<String>,
    #[serde(default)]
    pub filepath: Option<String>,
    #[serde(default)]
    pub api_schema: Option<String>,
    /// names of the call chains to run, `All` or empty runs every chain
    #[serde(default)]
    pub accepter: Vec<String>,
    #[serde(default)]
    pub deleted: Option<bool>,
    #[serde(rename = "ProductionOrderConfirmation", default)]
    pub production_order_confirmation: ProductionOrderConfirmationSelection,
}

/// keys used to build the `$filter` of each call chain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductionOrderConfirmationSelection {
    #[serde(rename = "OrderID", default)]
    pub order_id: String,
    #[serde(default)]
    pub sequence: String,
    #[serde(default)]
    pub order_operation: String,
    #[serde(default)]
    pub confirmation_group: String,
    #[serde(default)]
    pub material_movements: MaterialMovementsSelection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MaterialMovementsSelection {
    #[serde(default)]
    pub batch: String,
}
