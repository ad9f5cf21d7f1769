//! Provider registry — routes storage operations to the correct backend
//! by provider key.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use receipthub_core::config::storage::StorageConfig;
use receipthub_core::error::AppError;
use receipthub_core::result::AppResult;
use receipthub_core::traits::storage::ObjectStoreProvider;

use crate::providers::LocalStorageProvider;
use crate::providers::azure::AzureBlobProvider;

/// Central registry holding every configured storage provider.
///
/// Looking up an unregistered key is a configuration error and is
/// reported as such — never as a silent miss.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    /// Map of provider key → provider instance.
    providers: Arc<RwLock<HashMap<String, Arc<dyn ObjectStoreProvider>>>>,
    /// The default provider key.
    default_key: Arc<RwLock<Option<String>>>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            providers: Arc::new(RwLock::new(HashMap::new())),
            default_key: Arc::new(RwLock::new(None)),
        }
    }

    /// Build a registry from configuration, registering every enabled
    /// provider and selecting the configured default.
    pub async fn from_config(config: &StorageConfig, env: &str) -> AppResult<Self> {
        let registry = Self::new();

        let local = LocalStorageProvider::new(&config.local.root_path).await?;
        registry.register(Arc::new(local), false).await;

        if config.azure.enabled {
            let azure = AzureBlobProvider::from_config(&config.azure, env)?;
            registry.register(Arc::new(azure), false).await;
        }

        #[cfg(feature = "s3")]
        if config.s3.enabled {
            let s3 = crate::providers::s3::S3StorageProvider::from_config(&config.s3).await?;
            registry.register(Arc::new(s3), false).await;
        }

        registry.set_default(&config.default_provider).await?;
        Ok(registry)
    }

    /// Register a provider under its own key.
    pub async fn register(&self, provider: Arc<dyn ObjectStoreProvider>, is_default: bool) {
        let key = provider.provider_key().to_string();
        let mut providers = self.providers.write().await;
        providers.insert(key.clone(), provider);
        if is_default {
            let mut default = self.default_key.write().await;
            *default = Some(key);
        }
    }

    /// Remove a provider.
    pub async fn unregister(&self, key: &str) {
        let mut providers = self.providers.write().await;
        providers.remove(key);
        let mut default = self.default_key.write().await;
        if default.as_deref() == Some(key) {
            *default = None;
        }
    }

    /// Select the default provider key. The key must already be registered.
    pub async fn set_default(&self, key: &str) -> AppResult<()> {
        let providers = self.providers.read().await;
        if !providers.contains_key(key) {
            return Err(AppError::unknown_provider(format!(
                "Cannot set default: unknown storage provider '{key}'"
            )));
        }
        let mut default = self.default_key.write().await;
        *default = Some(key.to_string());
        Ok(())
    }

    /// Get a provider by key.
    pub async fn get(&self, key: &str) -> AppResult<Arc<dyn ObjectStoreProvider>> {
        let providers = self.providers.read().await;
        providers
            .get(key)
            .cloned()
            .ok_or_else(|| AppError::unknown_provider(format!("Unknown storage provider: '{key}'")))
    }

    /// Get the default provider.
    pub async fn get_default(&self) -> AppResult<Arc<dyn ObjectStoreProvider>> {
        let default_key = {
            let default = self.default_key.read().await;
            default
                .clone()
                .ok_or_else(|| AppError::configuration("No default storage provider configured"))?
        };
        self.get(&default_key).await
    }

    /// List all registered provider keys.
    pub async fn keys(&self) -> Vec<String> {
        let providers = self.providers.read().await;
        providers.keys().cloned().collect()
    }

    /// Check health of all registered providers.
    pub async fn health_check_all(&self) -> HashMap<String, bool> {
        let providers = self.providers.read().await;
        let mut results = HashMap::new();
        for (key, provider) in providers.iter() {
            let healthy = provider.health_check().await.unwrap_or(false);
            results.insert(key.clone(), healthy);
        }
        results
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
