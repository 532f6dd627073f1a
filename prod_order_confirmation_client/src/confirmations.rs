use super::ProdOrderConfirmationClient;
use crate::{error::ClientError, filter::ODataFilter};
use models_prod_order_confirmation::{Confirmation, EntitySet};

impl ProdOrderConfirmationClient {
    /// Query `ProdnOrdConf2` with the given filter, e.g. `OrderID eq '1000010'`
    #[tracing::instrument(
        skip(self, filter),
        fields(url = %self.entity_set_url(Confirmation::NAME), filter = %filter),
        err
    )]
    pub async fn get_confirmations(
        &self,
        filter: &ODataFilter,
    ) -> Result<Vec<Confirmation>, ClientError> {
        self.get_entity_set::<Confirmation>(filter).await
    }
}
