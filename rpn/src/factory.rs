use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::provider::{ArithmeticProvider, OperatorProvider};

static SHARED: LazyLock<Arc<ProviderFactory>> =
    LazyLock::new(|| Arc::new(ProviderFactory::default()));

/// Resolves operator symbols to the provider that owns them.
///
/// Providers are searched in registration order and the first one that
/// claims a symbol wins. Lookups are memoized per symbol, misses included.
pub struct ProviderFactory {
    providers: Vec<Arc<dyn OperatorProvider>>,
    cache: Mutex<HashMap<char, Option<Arc<dyn OperatorProvider>>>>,
}

impl Default for ProviderFactory {
    fn default() -> ProviderFactory {
        ProviderFactory {
            providers: vec![Arc::new(ArithmeticProvider) as Arc<dyn OperatorProvider>],
            cache: Mutex::new(HashMap::new()),
        }
    }
}

impl ProviderFactory {
    pub fn new(providers: Vec<Arc<dyn OperatorProvider>>) -> Result<ProviderFactory> {
        if providers.is_empty() {
            return Err(Error::no_providers());
        }
        Ok(ProviderFactory{providers, cache: Mutex::new(HashMap::new())})
    }

    /// The process-wide factory holding only the arithmetic provider.
    pub fn shared() -> Arc<ProviderFactory> {
        Arc::clone(&SHARED)
    }

    pub fn get_provider(&self, symbol: char) -> Option<Arc<dyn OperatorProvider>> {
        if let Some(cached) = self.cache.lock().get(&symbol) {
            return cached.clone();
        }
        // the lock isn't held while providers run, they may call back in here
        let provider = self.providers.iter()
            .find(|p| p.can_create(symbol))
            .cloned();
        log::debug!("caching provider for '{}' (found: {})", symbol, provider.is_some());
        self.cache.lock().entry(symbol).or_insert(provider).clone()
    }

    pub fn providers(&self) -> &[Arc<dyn OperatorProvider>] {
        &self.providers
    }

    // number of symbols resolved so far, hits and misses
    pub fn cached_symbols(&self) -> usize {
        self.cache.lock().len()
    }
}
