use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, Uri},
    routing::get,
};
use models_prod_order_confirmation::{MaterialMovementsSelection, ProductionOrderConfirmationSelection};
use prod_order_confirmation_client::ProdOrderConfirmationClient;
use prod_order_confirmation_reader::{
    accepter::resolve_accepter,
    chain::{CallChain, run_chain},
    dispatch::dispatch,
};
use serde_json::json;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

const SERVICE: &str = "/API_PROD_ORDER_CONFIRMATION_2_SRV";

#[derive(Debug, Clone, PartialEq)]
struct Hit {
    path: String,
    filter: Option<String>,
    api_key: Option<String>,
}

#[derive(Clone)]
struct SandboxService {
    base: String,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl SandboxService {
    fn record(&self, uri: &Uri, headers: &HeaderMap, query: &HashMap<String, String>) {
        self.hits.lock().unwrap().push(Hit {
            path: uri.path().to_string(),
            filter: query.get("$filter").cloned(),
            api_key: headers
                .get("apikey")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        });
    }

    fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }

    fn deferred(&self, path: &str) -> serde_json::Value {
        json!({"__deferred": {"uri": format!("{}{}", self.base, path)}})
    }
}

async fn confirmations(
    State(svc): State<SandboxService>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    svc.record(&uri, &headers, &query);
    Json(json!({"d": {"results": [{
        "ConfirmationGroup": "1000208",
        "ConfirmationCount": "1",
        "OrderID": "1000010",
        "OrderOperation": "0010",
        "Sequence": "0",
        "to_ProdnOrdConfMatlDocItm": svc.deferred("/nav/movements")
    }]}}))
}

async fn movements(
    State(svc): State<SandboxService>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    svc.record(&uri, &headers, &query);
    Json(json!({"d": {"results": [{
        "ConfirmationGroup": "1000208",
        "ConfirmationCount": "1",
        "MaterialDocument": "4900000123",
        "Batch": "0000000101",
        "to_ProdnOrdConfBatchCharc": svc.deferred("/nav/characteristics")
    }]}}))
}

async fn characteristics(
    State(svc): State<SandboxService>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    svc.record(&uri, &headers, &query);
    Json(json!({"d": {"results": [{
        "ConfirmationGroup": "1000208",
        "ConfirmationCount": "1",
        "Batch": "0000000101",
        "Characteristic": "LOBM_VFDAT",
        "CharcValue": "20251231"
    }]}}))
}

async fn spawn_sandbox() -> SandboxService {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let svc = SandboxService {
        base: format!("http://{addr}"),
        hits: Default::default(),
    };

    let app = Router::new()
        .route(&format!("{SERVICE}/ProdnOrdConf2"), get(confirmations))
        .route(&format!("{SERVICE}/ProdnOrdConfMatlDocItm"), get(movements))
        .route(&format!("{SERVICE}/ProdnOrdConfBatchCharc"), get(characteristics))
        .route("/nav/movements", get(movements))
        .route("/nav/characteristics", get(characteristics))
        .with_state(svc.clone());

    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    svc
}

fn selection() -> ProductionOrderConfirmationSelection {
    ProductionOrderConfirmationSelection {
        order_id: "1000010".to_string(),
        sequence: "0".to_string(),
        order_operation: "0010".to_string(),
        confirmation_group: "1000208".to_string(),
        material_movements: MaterialMovementsSelection {
            batch: "0000000101".to_string(),
        },
    }
}

#[tokio::test]
async fn conf_by_order_id_walks_all_three_hops() {
    let svc = spawn_sandbox().await;
    let client = ProdOrderConfirmationClient::new("sandbox-key", &svc.base).unwrap();

    let output = run_chain(&client, CallChain::ConfByOrderId, &selection())
        .await
        .unwrap();

    assert_eq!(output.confirmations[0].order_id, "1000010");
    assert_eq!(
        output.material_movements[0].material_document.as_deref(),
        Some("4900000123")
    );
    assert_eq!(
        output.batch_characteristics[0].charc_value.as_deref(),
        Some("20251231")
    );

    let hits = svc.hits();
    let paths: Vec<&str> = hits.iter().map(|h| h.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "/API_PROD_ORDER_CONFIRMATION_2_SRV/ProdnOrdConf2",
            "/nav/movements",
            "/nav/characteristics",
        ]
    );
    assert_eq!(hits[0].filter.as_deref(), Some("OrderID eq '1000010'"));
    assert_eq!(hits[1].filter, None);
    assert_eq!(hits[2].filter, None);
    assert!(
        hits.iter()
            .all(|h| h.api_key.as_deref() == Some("sandbox-key"))
    );
}

#[tokio::test]
async fn material_movements_chain_filters_by_order_and_batch() {
    let svc = spawn_sandbox().await;
    let client = ProdOrderConfirmationClient::new("sandbox-key", &svc.base).unwrap();

    let output = run_chain(&client, CallChain::MaterialMovements, &selection())
        .await
        .unwrap();
    assert!(output.confirmations.is_empty());
    assert_eq!(output.batch_characteristics.len(), 1);

    let hits = svc.hits();
    assert_eq!(hits.len(), 2);
    assert_eq!(
        hits[0].path,
        "/API_PROD_ORDER_CONFIRMATION_2_SRV/ProdnOrdConfMatlDocItm"
    );
    assert_eq!(
        hits[0].filter.as_deref(),
        Some("OrderID eq '1000010' and Batch eq '0000000101'")
    );
    assert_eq!(hits[1].path, "/nav/characteristics");
}

#[tokio::test]
async fn dispatching_all_chains_hits_every_entity_set() {
    let svc = spawn_sandbox().await;
    let client = ProdOrderConfirmationClient::new("sandbox-key", &svc.base).unwrap();

    let chains = resolve_accepter(&["All"]);
    let report = dispatch(&client, &selection(), &chains).await;

    assert_eq!(report.succeeded(), 5);
    assert_eq!(report.failed(), 0);

    let filters: Vec<String> = svc.hits().into_iter().filter_map(|h| h.filter).collect();
    for expected in [
        "OrderID eq '1000010'",
        "OrderID eq '1000010' and Batch eq '0000000101'",
        "Batch eq '0000000101'",
        "OrderID eq '1000010' and ConfirmationGroup eq '1000208'",
        "OrderID eq '1000010' and Sequence eq '0' and OrderOperation eq '0010'",
    ] {
        assert!(filters.iter().any(|f| f == expected), "missing {expected}");
    }
    // 3 + 2 + 1 + 3 + 3 hops
    assert_eq!(svc.hits().len(), 12);
}
