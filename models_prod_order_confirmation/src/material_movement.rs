use crate::odata::{EntitySet, NavigationProperty};
use serde::{Deserialize, Serialize};

/// A goods movement posted with a confirmation, served from `ProdnOrdConfMatlDocItm`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MaterialMovement {
    pub confirmation_group: String,
    pub confirmation_count: String,
    #[serde(default)]
    pub material_document: Option<String>,
    #[serde(default)]
    pub material_document_item: Option<String>,
    #[serde(default)]
    pub material_document_year: Option<String>,
    #[serde(rename = "OrderID", default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub order_item: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub plant: Option<String>,
    #[serde(default)]
    pub storage_location: Option<String>,
    #[serde(default)]
    pub batch: Option<String>,
    /// e.g. `101` goods receipt, `261` goods issue for order
    #[serde(default)]
    pub goods_movement_type: Option<String>,
    #[serde(default)]
    pub entry_unit: Option<String>,
    #[serde(default)]
    pub quantity_in_entry_unit: Option<String>,
    #[serde(default)]
    pub manufacture_date: Option<String>,
    #[serde(default)]
    pub shelf_life_expiration_date: Option<String>,
    #[serde(rename = "to_ProdnOrdConfBatchCharc", default)]
    pub to_batch_characteristic: Option<NavigationProperty>,
}

impl EntitySet for MaterialMovement {
    const NAME: &'static str = "ProdnOrdConfMatlDocItm";
}
