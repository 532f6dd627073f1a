use super::ProdOrderConfirmationClient;
use crate::{error::ClientError, filter::ODataFilter};
use models_prod_order_confirmation::{MaterialMovement, EntitySet};

impl ProdOrderConfirmationClient {
    /// Query `ProdnOrdConfMatlDocItm` directly rather than through a confirmation
    #[tracing::instrument(
        skip(self, filter),
        fields(url = %self.entity_set_url(MaterialMovement::NAME), filter = %filter),
        err
    )]
    pub async fn get_material_movements(
        &self,
        filter: &ODataFilter,
    ) -> Result<Vec<MaterialMovement>, ClientError> {
        self.get_entity_set::<MaterialMovement>(filter).await
    }
}
