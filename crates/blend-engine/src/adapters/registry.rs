//! In-memory digital-asset registry adapter.
//!
//! Models the slice of the external registry the engine reads: collections
//! with authorized-account lists, per-collection templates with supply
//! counters, and the asset-instance → template mapping.

use crate::domain::errors::BlendError;
use crate::ports::outbound::AssetRegistry;
use blend_types::{AccountName, AssetId, CollectionName, TemplateId, TemplateInfo};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
struct CollectionRecord {
    authorized_accounts: Vec<AccountName>,
    templates: BTreeMap<TemplateId, TemplateInfo>,
}

/// In-memory implementation of [`AssetRegistry`].
#[derive(Debug, Default, Clone)]
pub struct InMemoryAssetRegistry {
    collections: BTreeMap<CollectionName, CollectionRecord>,
    assets: BTreeMap<AssetId, TemplateId>,
}

impl InMemoryAssetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collection with the given authorized accounts.
    pub fn add_collection(&mut self, collection: CollectionName, authorized: Vec<AccountName>) {
        self.collections.insert(
            collection,
            CollectionRecord {
                authorized_accounts: authorized,
                templates: BTreeMap::new(),
            },
        );
    }

    /// Adds a template to an existing collection. A missing collection is a
    /// fixture bug, so this panics rather than returning an error.
    pub fn add_template(
        &mut self,
        collection: &CollectionName,
        template: TemplateId,
        info: TemplateInfo,
    ) {
        self.collections
            .get_mut(collection)
            .unwrap_or_else(|| panic!("fixture: unknown collection {collection}"))
            .templates
            .insert(template, info);
    }

    /// Records an asset instance as minted from a template.
    pub fn add_asset(&mut self, asset: AssetId, template: TemplateId) {
        self.assets.insert(asset, template);
    }

    /// Grants an account delegation for a collection.
    pub fn authorize(&mut self, collection: &CollectionName, account: AccountName) {
        if let Some(record) = self.collections.get_mut(collection) {
            if !record.authorized_accounts.contains(&account) {
                record.authorized_accounts.push(account);
            }
        }
    }

    /// Revokes an account's delegation for a collection.
    pub fn revoke(&mut self, collection: &CollectionName, account: &AccountName) {
        if let Some(record) = self.collections.get_mut(collection) {
            record.authorized_accounts.retain(|a| a != account);
        }
    }
}

impl AssetRegistry for InMemoryAssetRegistry {
    fn collection_exists(&self, collection: &CollectionName) -> bool {
        self.collections.contains_key(collection)
    }

    fn authorized_accounts(
        &self,
        collection: &CollectionName,
    ) -> Result<Vec<AccountName>, BlendError> {
        self.collections
            .get(collection)
            .map(|record| record.authorized_accounts.clone())
            .ok_or_else(|| BlendError::CollectionNotFound(collection.clone()))
    }

    fn template(
        &self,
        collection: &CollectionName,
        template: TemplateId,
    ) -> Result<TemplateInfo, BlendError> {
        let record = self
            .collections
            .get(collection)
            .ok_or_else(|| BlendError::CollectionNotFound(collection.clone()))?;
        record
            .templates
            .get(&template)
            .cloned()
            .ok_or_else(|| BlendError::TemplateNotFound {
                collection: collection.clone(),
                template,
            })
    }

    fn asset_template(&self, asset: AssetId) -> Result<TemplateId, BlendError> {
        self.assets
            .get(&asset)
            .copied()
            .ok_or(BlendError::AssetNotFound(asset))
    }
}
