use crate::odata::{EntitySet, NavigationProperty};
use serde::{Deserialize, Serialize};

/// A production order confirmation, served from `ProdnOrdConf2`.
/// Keyed by [Confirmation::confirmation_group] and [Confirmation::confirmation_count]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Confirmation {
    pub confirmation_group: String,
    pub confirmation_count: String,
    #[serde(rename = "OrderID")]
    pub order_id: String,
    #[serde(default)]
    pub order_type: Option<String>,
    #[serde(default)]
    pub order_operation: Option<String>,
    #[serde(default)]
    pub sequence: Option<String>,
    #[serde(default)]
    pub order_suboperation: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub plant: Option<String>,
    #[serde(default)]
    pub work_center: Option<String>,
    #[serde(default)]
    pub confirmation_text: Option<String>,
    #[serde(default)]
    pub confirmation_unit: Option<String>,
    #[serde(default)]
    pub confirmation_yield_quantity: Option<String>,
    #[serde(default)]
    pub confirmation_scrap_quantity: Option<String>,
    #[serde(default)]
    pub confirmation_rework_quantity: Option<String>,
    /// `1` partial, `2` final, `3` automatic final
    #[serde(default)]
    pub final_confirmation_type: Option<String>,
    #[serde(default)]
    pub is_final_confirmation: bool,
    #[serde(default)]
    pub is_reversed: bool,
    #[serde(default)]
    pub is_reversal: bool,
    /// `/Date(<millis>)/`
    #[serde(default)]
    pub posting_date: Option<String>,
    #[serde(default)]
    pub confirmation_entry_date: Option<String>,
    #[serde(default)]
    pub entered_by_user: Option<String>,
    #[serde(rename = "to_ProdnOrdConfMatlDocItm", default)]
    pub to_material_movements: Option<NavigationProperty>,
}

impl EntitySet for Confirmation {
    const NAME: &'static str = "ProdnOrdConf2";
}
