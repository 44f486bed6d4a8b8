//! Blend recipe registry, keyed by target template.
//!
//! Pure keyed store; authorization preconditions for registration and
//! deletion live in the engine handler, which has access to the external
//! registry port.

use super::entities::BlendRecipe;
use super::errors::BlendError;
use blend_types::{AccountName, CollectionName, TemplateId};
use std::collections::BTreeMap;

/// Keyed store of registered blend recipes.
///
/// INVARIANT: re-registering an existing target replaces the inputs
/// wholesale; `owner` and `collection` are immutable after creation.
#[derive(Debug, Default, Clone)]
pub struct RecipeBook {
    recipes: BTreeMap<TemplateId, BlendRecipe>,
}

impl RecipeBook {
    /// Creates an empty recipe book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a recipe, or replaces the inputs of an existing one.
    ///
    /// On an existing target only `inputs` changes; the original owner and
    /// collection are kept.
    pub fn upsert(
        &mut self,
        owner: AccountName,
        collection: CollectionName,
        target: TemplateId,
        inputs: Vec<TemplateId>,
    ) {
        match self.recipes.get_mut(&target) {
            Some(recipe) => recipe.inputs = inputs,
            None => {
                self.recipes.insert(
                    target,
                    BlendRecipe {
                        owner,
                        collection,
                        target,
                        inputs,
                    },
                );
            }
        }
    }

    /// Deletes a recipe.
    ///
    /// # Errors
    /// - `RecipeNotFound`: no recipe keyed by `target`
    pub fn remove(&mut self, target: TemplateId) -> Result<BlendRecipe, BlendError> {
        self.recipes
            .remove(&target)
            .ok_or(BlendError::RecipeNotFound(target))
    }

    /// Looks up a recipe by its target template.
    ///
    /// # Errors
    /// - `RecipeNotFound`: no recipe keyed by `target`
    pub fn lookup(&self, target: TemplateId) -> Result<&BlendRecipe, BlendError> {
        self.recipes
            .get(&target)
            .ok_or(BlendError::RecipeNotFound(target))
    }

    /// Returns true if a recipe exists for the target.
    pub fn contains(&self, target: TemplateId) -> bool {
        self.recipes.contains_key(&target)
    }

    /// Number of registered recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true if no recipes are registered.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
