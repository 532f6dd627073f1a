//! Models for the `API_PROD_ORDER_CONFIRMATION_2_SRV` OData service and the SDC input document

pub mod batch_characteristic;
pub mod confirmation;
pub mod material_movement;
pub mod odata;
pub mod sdc;

pub use batch_characteristic::BatchCharacteristic;
pub use confirmation::Confirmation;
pub use material_movement::MaterialMovement;
pub use odata::{EntitySet, NavigationProperty, ODataResponse};
pub use sdc::{MaterialMovementsSelection, ProductionOrderConfirmationSelection, Sdc};

/// name of the OData service all entity sets live under
pub static SERVICE_NAME: &str = "API_PROD_ORDER_CONFIRMATION_2_SRV";
