//! Runs the selected call chains concurrently

use crate::{
    chain::{CallChain, ChainError, ChainOutput, run_chain},
    source::ConfirmationSource,
};
use models_prod_order_confirmation::ProductionOrderConfirmationSelection;

/// outcome of every dispatched chain, in dispatch order
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub results: Vec<(CallChain, Result<ChainOutput, ChainError>)>,
}

impl DispatchReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|(_, res)| res.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}

/// Drive every chain at once on the current task. A failing chain is logged by
/// [run_chain] and does not affect its siblings
#[tracing::instrument(skip_all, fields(chains = ?chains))]
pub async fn dispatch<S: ConfirmationSource>(
    source: &S,
    selection: &ProductionOrderConfirmationSelection,
    chains: &[CallChain],
) -> DispatchReport {
    let futures = chains.iter().map(|&chain| async move {
        let result = run_chain(source, chain, selection).await;
        (chain, result)
    });

    let report = DispatchReport {
        results: futures::future::join_all(futures).await,
    };

    for (chain, result) in &report.results {
        match result {
            Ok(output) => tracing::info!(
                chain = %chain,
                confirmations = output.confirmations.len(),
                material_movements = output.material_movements.len(),
                batch_characteristics = output.batch_characteristics.len(),
                "call chain completed"
            ),
            Err(e) => tracing::warn!(
                chain = %chain,
                hops_completed = e.hops_completed(),
                error = %e,
                "call chain aborted"
            ),
        }
    }

    report
}
