//! In memory [ConfirmationSource] which records every request it receives

use crate::source::ConfirmationSource;
use models_prod_order_confirmation::{
    BatchCharacteristic, Confirmation, EntitySet, MaterialMovement, NavigationProperty,
};
use prod_order_confirmation_client::{ODataFilter, error::ClientError};
use std::sync::Mutex;
use tokio::sync::Barrier;

pub(crate) static MOVEMENTS_URI: &str = "fake://ProdnOrdConf2('1')/to_ProdnOrdConfMatlDocItm";
pub(crate) static CHARACTERISTICS_URI: &str =
    "fake://ProdnOrdConfMatlDocItm('1')/to_ProdnOrdConfBatchCharc";

pub(crate) struct FakeSource {
    pub calls: Mutex<Vec<String>>,
    pub confirmations: Vec<Confirmation>,
    pub movements: Vec<MaterialMovement>,
    pub characteristics: Vec<BatchCharacteristic>,
    /// entity set which answers with a 503
    pub failing: Option<&'static str>,
    /// first hops wait here, so a serial dispatch never gets past it
    pub barrier: Option<Barrier>,
}

impl Default for FakeSource {
    fn default() -> Self {
        Self {
            calls: Mutex::default(),
            confirmations: vec![Confirmation {
                confirmation_group: "1000208".into(),
                confirmation_count: "1".into(),
                order_id: "1000010".into(),
                to_material_movements: Some(NavigationProperty::new(MOVEMENTS_URI)),
                ..Default::default()
            }],
            movements: vec![MaterialMovement {
                confirmation_group: "1000208".into(),
                confirmation_count: "1".into(),
                batch: Some("0000000101".into()),
                to_batch_characteristic: Some(NavigationProperty::new(CHARACTERISTICS_URI)),
                ..Default::default()
            }],
            characteristics: vec![BatchCharacteristic {
                confirmation_group: "1000208".into(),
                confirmation_count: "1".into(),
                characteristic: Some("LOBM_VFDAT".into()),
                charc_value: Some("20251231".into()),
                ..Default::default()
            }],
            failing: None,
            barrier: None,
        }
    }
}

impl FakeSource {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn wait(&self) {
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
    }

    fn respond<T: EntitySet + Clone>(
        &self,
        request: String,
        results: &[T],
    ) -> Result<Vec<T>, ClientError> {
        self.calls.lock().unwrap().push(request);
        if self.failing == Some(T::NAME) {
            return Err(ClientError::NetworkError {
                status_code: 503,
                message: "unavailable".into(),
            });
        }
        Ok(results.to_vec())
    }
}

impl ConfirmationSource for FakeSource {
    async fn confirmations(&self, filter: &ODataFilter) -> Result<Vec<Confirmation>, ClientError> {
        self.wait().await;
        self.respond(format!("{} {}", Confirmation::NAME, filter), &self.confirmations)
    }

    async fn material_movements(
        &self,
        filter: &ODataFilter,
    ) -> Result<Vec<MaterialMovement>, ClientError> {
        self.wait().await;
        self.respond(format!("{} {}", MaterialMovement::NAME, filter), &self.movements)
    }

    async fn batch_characteristics(
        &self,
        filter: &ODataFilter,
    ) -> Result<Vec<BatchCharacteristic>, ClientError> {
        self.wait().await;
        self.respond(
            format!("{} {}", BatchCharacteristic::NAME, filter),
            &self.characteristics,
        )
    }

    async fn follow_material_movements(
        &self,
        navigation: &NavigationProperty,
    ) -> Result<Vec<MaterialMovement>, ClientError> {
        self.respond(navigation.uri().to_string(), &self.movements)
    }

    async fn follow_batch_characteristics(
        &self,
        navigation: &NavigationProperty,
    ) -> Result<Vec<BatchCharacteristic>, ClientError> {
        self.respond(navigation.uri().to_string(), &self.characteristics)
    }
}
