use super::ProdOrderConfirmationClient;
use crate::{error::ClientError, filter::ODataFilter};
use models_prod_order_confirmation::{BatchCharacteristic, EntitySet};

impl ProdOrderConfirmationClient {
    /// Query `ProdnOrdConfBatchCharc`, typically by `Batch`
    #[tracing::instrument(
        skip(self, filter),
        fields(url = %self.entity_set_url(BatchCharacteristic::NAME), filter = %filter),
        err
    )]
    pub async fn get_batch_characteristics(
        &self,
        filter: &ODataFilter,
    ) -> Result<Vec<BatchCharacteristic>, ClientError> {
        self.get_entity_set::<BatchCharacteristic>(filter).await
    }
}
