use error::{ClientError, ResponseExt};
use models_prod_order_confirmation::{EntitySet, ODataResponse, SERVICE_NAME};
use serde::de::DeserializeOwned;

pub mod batch_characteristics;
pub mod confirmations;
pub(crate) mod constants;
pub mod error;
pub mod filter;
pub mod material_movements;
pub mod navigation;

pub use filter::ODataFilter;

/// default base url of the SAP API business hub sandbox
pub static SANDBOX_BASE_URL: &str = "https://sandbox.api.sap.com/s4hanacloud/sap/opu/odata/sap/";

/// Client for the `API_PROD_ORDER_CONFIRMATION_2_SRV` read endpoints
#[derive(Clone, Debug)]
pub struct ProdOrderConfirmationClient {
    /// `<base url>/API_PROD_ORDER_CONFIRMATION_2_SRV` without a trailing slash
    url: String,
    client: reqwest::Client,
}

impl ProdOrderConfirmationClient {
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, ClientError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut api_key: reqwest::header::HeaderValue = api_key.parse()?;
        api_key.set_sensitive(true);
        headers.insert(constants::API_KEY_HEADER_KEY, api_key);
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(constants::ACCEPT_JSON),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ClientError::Build)?;

        let url = format!("{}/{}", base_url.trim_end_matches('/'), SERVICE_NAME);

        Ok(Self { url, client })
    }

    fn entity_set_url(&self, entity_set: &str) -> String {
        format!("{}/{}", self.url, entity_set)
    }

    /// GET `<service>/<T::NAME>?$filter=<filter>` and decode the collection
    async fn get_entity_set<T>(&self, filter: &ODataFilter) -> Result<Vec<T>, ClientError>
    where
        T: EntitySet + DeserializeOwned,
    {
        let mut request = self.client.get(self.entity_set_url(T::NAME));
        if !filter.is_empty() {
            request = request.query(&[(constants::FILTER_QUERY_KEY, filter.to_string())]);
        }

        let response = request.send().await.map_client_error().await?;
        decode::<T>(response).await
    }
}

async fn decode<T>(response: reqwest::Response) -> Result<Vec<T>, ClientError>
where
    T: EntitySet + DeserializeOwned,
{
    let body = response.bytes().await.map_err(|e| {
        ClientError::Generic(anyhow::anyhow!(
            "unable to read {} response body: {}",
            T::NAME,
            e
        ))
    })?;

    ODataResponse::<T>::from_slice(&body).map_err(|source| ClientError::Decode {
        entity: T::NAME,
        source,
    })
}
