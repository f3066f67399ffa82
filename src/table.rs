//! Name-to-version mapping that drives every rewrite.

use crate::error::{PinError, Result};
use std::collections::BTreeMap;

/// Versions published for the `web3_universal_*` packages.
const BUILTIN_PINS: &[(&str, &str)] = &[
    ("web3_universal_core", "^0.1.1"),
    ("web3_universal_crypto", "^0.2.0"),
    ("web3_universal_abi", "^0.1.1"),
    ("web3_universal_chains", "^0.1.0+1"),
    ("web3_universal_signer", "^0.1.1"),
    ("web3_universal_provider", "^0.1.0+1"),
    ("web3_universal_client", "^0.1.1+1"),
    ("web3_universal_contract", "^0.1.0+1"),
    ("web3_universal_ens", "^0.1.1+1"),
    ("web3_universal_aa", "^0.1.1+1"),
    ("web3_universal_reown", "^0.1.1"),
    ("web3_universal_swap", "^0.1.0+2"),
    ("web3_universal_price", "^0.1.1"),
    ("web3_universal_utxo", "^0.1.0+1"),
    ("web3_universal_bc_ur", "^0.1.0+1"),
    ("web3_universal_keystone", "^0.1.0+1"),
    ("web3_universal_ledger", "^0.1.0+1"),
    ("web3_universal_trezor", "^0.1.0+1"),
    ("web3_universal_mpc", "^0.1.0+1"),
    ("web3_universal_nft", "^0.1.1+1"),
    ("web3_universal_multicall", "^0.1.0+2"),
    ("web3_universal_mev", "^0.1.1"),
    ("web3_universal_staking", "^0.1.1+1"),
    ("web3_universal_history", "^0.1.1+1"),
    ("web3_universal_events", "^0.1.0+2"),
    ("web3_universal_solana", "^0.1.1"),
    ("web3_universal_bitcoin", "^0.1.1"),
    ("web3_universal_aptos", "^0.1.0"),
    ("web3_universal_ton", "^0.1.1"),
    ("web3_universal_tron", "^0.1.1"),
    ("web3_universal_polkadot", "^0.1.1"),
    ("web3_universal_cosmos", "^0.1.1"),
    ("web3_universal_debug", "^0.1.1"),
    ("web3_universal_bridge", "^0.1.0+2"),
    ("web3_universal_dapp", "^0.1.1+1"),
    ("web3_universal_compat", "^0.1.0"),
];

/// Immutable mapping from dependency name to version constraint.
///
/// Built once before the run; the scanner only ever reads from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    pins: BTreeMap<String, String>,
}

impl ReplacementTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table of published `web3_universal_*` versions.
    pub fn builtin() -> Self {
        BUILTIN_PINS.iter().copied().collect()
    }

    /// Adds `name`, replacing any version already mapped to it.
    pub fn with_override(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.pins.insert(name.into(), version.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pins.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pins.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pins.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReplacementTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pins: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parses a `NAME=VERSION` override.
///
/// The name must be non-empty and free of whitespace and `:` so that it can
/// match a trimmed `name:` line. The version must be non-empty.
pub fn parse_pin(raw: &str) -> Result<(String, String)> {
    let invalid = |reason: &str| PinError::InvalidPin(raw.to_string(), reason.to_string());

    let (name, version) = raw
        .split_once('=')
        .ok_or_else(|| invalid("expected NAME=VERSION"))?;
    let (name, version) = (name.trim(), version.trim());

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.chars().any(|c| c.is_whitespace() || c == ':') {
        return Err(invalid("name cannot contain whitespace or ':'"));
    }
    if version.is_empty() {
        return Err(invalid("version cannot be empty"));
    }
    if version.contains('=') {
        return Err(invalid("expected a single '='"));
    }

    Ok((name.to_string(), version.to_string()))
}
