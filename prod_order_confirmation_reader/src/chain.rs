//! The five call chains. Each chain is 1-3 dependent GETs, every hop after the first
//! follows the navigation property of the first result of the hop before it

use crate::source::ConfirmationSource;
use models_prod_order_confirmation::{
    BatchCharacteristic, Confirmation, EntitySet, MaterialMovement, NavigationProperty,
    ProductionOrderConfirmationSelection,
};
use prod_order_confirmation_client::{ODataFilter, error::ClientError};
use std::fmt::Debug;
use thiserror::Error;

/// A named call chain as it appears in the `accepter` list of the input document
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum CallChain {
    /// `ProdnOrdConf2` by order -> material movements -> batch characteristics
    #[strum(serialize = "ConfByOrderID")]
    ConfByOrderId,
    /// `ProdnOrdConfMatlDocItm` by order and batch -> batch characteristics
    MaterialMovements,
    /// `ProdnOrdConfBatchCharc` by batch
    BatchCharacteristic,
    /// `ProdnOrdConf2` by order and confirmation group -> material movements -> batch characteristics
    #[strum(serialize = "ConfByOrderIDConfGroup")]
    ConfByOrderIdConfGroup,
    /// `ProdnOrdConf2` by order, sequence and operation -> material movements -> batch characteristics
    #[strum(serialize = "ConfByOrderIDSeqOp")]
    ConfByOrderIdSeqOp,
}

impl CallChain {
    /// the `$filter` of the first hop
    pub fn filter(self, selection: &ProductionOrderConfirmationSelection) -> ODataFilter {
        let by_order = ODataFilter::new().eq("OrderID", &selection.order_id);
        match self {
            CallChain::ConfByOrderId => by_order,
            CallChain::MaterialMovements => {
                by_order.eq("Batch", &selection.material_movements.batch)
            }
            CallChain::BatchCharacteristic => {
                ODataFilter::new().eq("Batch", &selection.material_movements.batch)
            }
            CallChain::ConfByOrderIdConfGroup => {
                by_order.eq("ConfirmationGroup", &selection.confirmation_group)
            }
            CallChain::ConfByOrderIdSeqOp => by_order
                .eq("Sequence", &selection.sequence)
                .eq("OrderOperation", &selection.order_operation),
        }
    }
}

/// Every collection decoded along a chain
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainOutput {
    pub confirmations: Vec<Confirmation>,
    pub material_movements: Vec<MaterialMovement>,
    pub batch_characteristics: Vec<BatchCharacteristic>,
}

#[derive(Debug, Error)]
pub enum HopError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("no results returned")]
    Empty,
    #[error("first result has no {0} navigation property")]
    MissingNavigation(&'static str),
}

/// The hop a chain was aborted at. Hops are counted from 1
#[derive(Debug, Error)]
#[error("hop {hop} ({entity}): {kind}")]
pub struct ChainError {
    pub hop: usize,
    pub entity: &'static str,
    pub kind: HopError,
}

impl ChainError {
    fn new<T: EntitySet>(hop: usize, kind: impl Into<HopError>) -> Self {
        Self {
            hop,
            entity: T::NAME,
            kind: kind.into(),
        }
    }

    /// number of hops which returned a usable result before the abort
    pub fn hops_completed(&self) -> usize {
        match self.kind {
            HopError::Client(_) => self.hop - 1,
            HopError::Empty | HopError::MissingNavigation(_) => self.hop,
        }
    }
}

static TO_MATERIAL_MOVEMENTS: &str = "to_ProdnOrdConfMatlDocItm";
static TO_BATCH_CHARACTERISTIC: &str = "to_ProdnOrdConfBatchCharc";

/// run a single chain to completion or to the first failing hop
#[tracing::instrument(skip(source, selection), err)]
pub async fn run_chain<S: ConfirmationSource>(
    source: &S,
    chain: CallChain,
    selection: &ProductionOrderConfirmationSelection,
) -> Result<ChainOutput, ChainError> {
    let filter = chain.filter(selection);
    let mut output = ChainOutput::default();

    match chain {
        CallChain::ConfByOrderId
        | CallChain::ConfByOrderIdConfGroup
        | CallChain::ConfByOrderIdSeqOp => {
            let confirmations = source
                .confirmations(&filter)
                .await
                .map_err(|e| ChainError::new::<Confirmation>(1, e))?;
            log_hop(1, &filter, &confirmations);

            let navigation = first_navigation(1, &confirmations, TO_MATERIAL_MOVEMENTS, |c| {
                c.to_material_movements.as_ref()
            })?;
            output.confirmations = confirmations;

            let movements = source
                .follow_material_movements(&navigation)
                .await
                .map_err(|e| ChainError::new::<MaterialMovement>(2, e))?;
            log_hop(2, &navigation, &movements);
            output.material_movements = movements;

            follow_batch_characteristics(source, 3, &mut output).await?;
        }
        CallChain::MaterialMovements => {
            let movements = source
                .material_movements(&filter)
                .await
                .map_err(|e| ChainError::new::<MaterialMovement>(1, e))?;
            log_hop(1, &filter, &movements);
            output.material_movements = movements;

            follow_batch_characteristics(source, 2, &mut output).await?;
        }
        CallChain::BatchCharacteristic => {
            let characteristics = source
                .batch_characteristics(&filter)
                .await
                .map_err(|e| ChainError::new::<BatchCharacteristic>(1, e))?;
            log_hop(1, &filter, &characteristics);
            output.batch_characteristics = characteristics;
        }
    }

    Ok(output)
}

/// last hop shared by every chain which starts above the characteristics
async fn follow_batch_characteristics<S: ConfirmationSource>(
    source: &S,
    hop: usize,
    output: &mut ChainOutput,
) -> Result<(), ChainError> {
    let navigation = first_navigation(
        hop - 1,
        &output.material_movements,
        TO_BATCH_CHARACTERISTIC,
        |m| m.to_batch_characteristic.as_ref(),
    )?;

    let characteristics = source
        .follow_batch_characteristics(&navigation)
        .await
        .map_err(|e| ChainError::new::<BatchCharacteristic>(hop, e))?;
    log_hop(hop, &navigation, &characteristics);
    output.batch_characteristics = characteristics;

    Ok(())
}

fn first_navigation<T, F>(
    hop: usize,
    results: &[T],
    property: &'static str,
    get: F,
) -> Result<NavigationProperty, ChainError>
where
    T: EntitySet,
    F: Fn(&T) -> Option<&NavigationProperty>,
{
    let first = results
        .first()
        .ok_or_else(|| ChainError::new::<T>(hop, HopError::Empty))?;

    get(first)
        .cloned()
        .ok_or_else(|| ChainError::new::<T>(hop, HopError::MissingNavigation(property)))
}

fn log_hop<T: EntitySet + Debug>(hop: usize, request: &dyn std::fmt::Display, results: &[T]) {
    tracing::info!(
        hop,
        entity = T::NAME,
        request = %request,
        count = results.len(),
        results = ?results,
        "decoded response"
    );
}
