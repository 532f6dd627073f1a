use super::{ProdOrderConfirmationClient, decode};
use crate::error::{ClientError, ResponseExt};
use models_prod_order_confirmation::{EntitySet, NavigationProperty};
use serde::de::DeserializeOwned;

impl ProdOrderConfirmationClient {
    /// Fetch the related collection a navigation property points to.
    /// The uri is absolute and used as is, only the default headers are added
    #[tracing::instrument(skip(self, navigation), fields(uri = %navigation.uri()), err)]
    pub async fn follow<T>(&self, navigation: &NavigationProperty) -> Result<Vec<T>, ClientError>
    where
        T: EntitySet + DeserializeOwned,
    {
        let response = self
            .client
            .get(navigation.uri())
            .send()
            .await
            .map_client_error()
            .await?;

        decode::<T>(response).await
    }
}
