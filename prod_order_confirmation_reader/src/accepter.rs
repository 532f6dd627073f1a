//! Resolves the `accepter` list of the input document into the call chains to run

use crate::chain::CallChain;
use strum::IntoEnumIterator;

/// accepter entry selecting every chain
pub static ALL: &str = "All";

/// Chains in accepter order with duplicates dropped.
/// An empty list or one containing [ALL] selects every chain, unknown names are skipped
pub fn resolve_accepter<T: AsRef<str>>(accepter: &[T]) -> Vec<CallChain> {
    if accepter.is_empty() || accepter.iter().any(|name| name.as_ref() == ALL) {
        return CallChain::iter().collect();
    }

    let mut chains = Vec::with_capacity(accepter.len());
    for name in accepter {
        match name.as_ref().parse::<CallChain>() {
            Ok(chain) if !chains.contains(&chain) => chains.push(chain),
            Ok(_) => {}
            Err(_) => tracing::debug!(name = name.as_ref(), "skipping unknown call chain"),
        }
    }

    chains
}
