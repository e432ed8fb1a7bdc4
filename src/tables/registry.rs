//! Process-wide registry of field tables
//!
//! Each field's tables are built on first use, outside the lock, and only
//! published once construction succeeded. Published tables are never
//! mutated or dropped, so they are handed out as `&'static` references that
//! any thread may read without further synchronisation.

use super::analysis::DefiningPolynomial;
use super::builder::LogExpTables;
use crate::error::Result;
use log::debug;
use rustc_hash::FxHashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Identifies the tables a field type needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// GF(p), primitive element discovered automatically
    Prime(u32),
    /// GF(2^m) with generator 2
    Binary(DefiningPolynomial),
}

impl FieldKey {
    fn build(&self) -> Result<LogExpTables> {
        match self {
            FieldKey::Prime(order) => LogExpTables::for_prime(*order, None),
            FieldKey::Binary(polynomial) => LogExpTables::for_binary(polynomial),
        }
    }
}

type Registry = RwLock<FxHashMap<FieldKey, &'static LogExpTables>>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| RwLock::new(FxHashMap::default()))
}

/// Look up the tables for `key`, building and publishing them on first use
pub fn tables_for(key: FieldKey) -> Result<&'static LogExpTables> {
    let cached = registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .copied();
    if let Some(tables) = cached {
        return Ok(tables);
    }

    let built = key.build()?;

    let mut map = registry().write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have published while we were building
    let tables = *map.entry(key).or_insert_with(|| {
        debug!("Publishing tables for {:?}", key);
        Box::leak(Box::new(built))
    });
    Ok(tables)
}
