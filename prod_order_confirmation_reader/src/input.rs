use anyhow::Context;
use models_prod_order_confirmation::Sdc;
use std::path::Path;

/// read and decode the SDC input document
#[tracing::instrument(err)]
pub fn read_sdc(path: &Path) -> anyhow::Result<Sdc> {
    let raw = std::fs::read(path)
        .with_context(|| format!("unable to read input file {}", path.display()))?;

    let sdc: Sdc = serde_json::from_slice(&raw)
        .with_context(|| format!("unable to decode input file {}", path.display()))?;

    tracing::debug!(accepter=?sdc.accepter, selection=?sdc.production_order_confirmation, "read input");
    Ok(sdc)
}
