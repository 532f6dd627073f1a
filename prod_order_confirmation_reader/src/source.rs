//! The port the call chains read through

use models_prod_order_confirmation::{
    BatchCharacteristic, Confirmation, MaterialMovement, NavigationProperty,
};
use prod_order_confirmation_client::{
    ODataFilter, ProdOrderConfirmationClient, error::ClientError,
};

/// Everything a call chain needs from the OData service
pub trait ConfirmationSource: Send + Sync {
    /// query `ProdnOrdConf2`
    fn confirmations(
        &self,
        filter: &ODataFilter,
    ) -> impl Future<Output = Result<Vec<Confirmation>, ClientError>> + Send;

    /// query `ProdnOrdConfMatlDocItm`
    fn material_movements(
        &self,
        filter: &ODataFilter,
    ) -> impl Future<Output = Result<Vec<MaterialMovement>, ClientError>> + Send;

    /// query `ProdnOrdConfBatchCharc`
    fn batch_characteristics(
        &self,
        filter: &ODataFilter,
    ) -> impl Future<Output = Result<Vec<BatchCharacteristic>, ClientError>> + Send;

    /// follow a confirmation's `to_ProdnOrdConfMatlDocItm`
    fn follow_material_movements(
        &self,
        navigation: &NavigationProperty,
    ) -> impl Future<Output = Result<Vec<MaterialMovement>, ClientError>> + Send;

    /// follow a material movement's `to_ProdnOrdConfBatchCharc`
    fn follow_batch_characteristics(
        &self,
        navigation: &NavigationProperty,
    ) -> impl Future<Output = Result<Vec<BatchCharacteristic>, ClientError>> + Send;
}

impl ConfirmationSource for ProdOrderConfirmationClient {
    async fn confirmations(&self, filter: &ODataFilter) -> Result<Vec<Confirmation>, ClientError> {
        self.get_confirmations(filter).await
    }

    async fn material_movements(
        &self,
        filter: &ODataFilter,
    ) -> Result<Vec<MaterialMovement>, ClientError> {
        self.get_material_movements(filter).await
    }

    async fn batch_characteristics(
        &self,
        filter: &ODataFilter,
    ) -> Result<Vec<BatchCharacteristic>, ClientError> {
        self.get_batch_characteristics(filter).await
    }

    async fn follow_material_movements(
        &self,
        navigation: &NavigationProperty,
    ) -> Result<Vec<MaterialMovement>, ClientError> {
        self.follow(navigation).await
    }

    async fn follow_batch_characteristics(
        &self,
        navigation: &NavigationProperty,
    ) -> Result<Vec<BatchCharacteristic>, ClientError> {
        self.follow(navigation).await
    }
}
