use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::db::{Database, SlotStorage};
use crate::models::{
    CookingReminder, FavoriteEntry, Ingredient, MeasurementPreference, NewCookingReminder,
    NewFavoriteEntry, NewIngredient, NewMeasurementPreference, NewRecipe, NewSearchQuery, Recipe,
    Record, SearchQuery, Snapshot, StoreSummary,
};
use crate::store::{RecordStore, StoreOptions};
use crate::validation::{Form, ValidationErrors};
use crate::view;

/// Everything a front-end needs: form submission, searchable lists,
/// deletion by list position, and whole-store summaries.
pub struct SoupService {
    store: RecordStore,
}

impl SoupService {
    pub fn open(path: &Path, options: StoreOptions) -> Result<Self> {
        let db = Database::open(path)?;
        Ok(Self::with_storage(db, options))
    }

    pub fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self::with_storage(db, StoreOptions::default()))
    }

    pub fn with_storage(storage: impl SlotStorage + 'static, options: StoreOptions) -> Self {
        Self {
            store: RecordStore::open(storage, options),
        }
    }

    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    // --- Submission ---

    /// Validate a form and append the resulting record.
    pub fn submit<F: Form>(&mut self, form: F) -> Result<F::Output, ValidationErrors> {
        let record = form.validate()?;
        self.store.add(record.clone());
        Ok(record)
    }

    pub fn submit_recipe(&mut self, form: NewRecipe) -> Result<Recipe, ValidationErrors> {
        self.submit(form)
    }

    pub fn submit_ingredient(
        &mut self,
        form: NewIngredient,
    ) -> Result<Ingredient, ValidationErrors> {
        self.submit(form)
    }

    pub fn submit_search_query(
        &mut self,
        form: NewSearchQuery,
    ) -> Result<SearchQuery, ValidationErrors> {
        self.submit(form)
    }

    pub fn submit_favorite(
        &mut self,
        form: NewFavoriteEntry,
    ) -> Result<FavoriteEntry, ValidationErrors> {
        self.submit(form)
    }

    pub fn submit_reminder(
        &mut self,
        form: NewCookingReminder,
    ) -> Result<CookingReminder, ValidationErrors> {
        self.submit(form)
    }

    pub fn submit_measurement_preference(
        &mut self,
        form: NewMeasurementPreference,
    ) -> Result<MeasurementPreference, ValidationErrors> {
        self.submit(form)
    }

    // --- Lists ---

    #[must_use]
    pub fn search<T: Record>(&self, term: &str) -> Vec<&T> {
        view::filter_view(self.store.records::<T>(), term)
    }

    #[must_use]
    pub fn search_recipes(&self, term: &str) -> Vec<&Recipe> {
        self.search(term)
    }

    #[must_use]
    pub fn search_ingredients(&self, term: &str) -> Vec<&Ingredient> {
        self.search(term)
    }

    #[must_use]
    pub fn search_queries(&self, term: &str) -> Vec<&SearchQuery> {
        self.search(term)
    }

    #[must_use]
    pub fn search_favorites(&self, term: &str) -> Vec<&FavoriteEntry> {
        self.search(term)
    }

    #[must_use]
    pub fn search_reminders(&self, term: &str) -> Vec<&CookingReminder> {
        self.search(term)
    }

    #[must_use]
    pub fn search_measurement_preferences(&self, term: &str) -> Vec<&MeasurementPreference> {
        self.search(term)
    }

    #[must_use]
    pub fn get<T: Record>(&self, id: Uuid) -> Option<&T> {
        self.store.get::<T>(id)
    }

    // --- Deletion ---

    /// Delete the records at `positions` of the list shown for `term`.
    /// Returns how many were removed.
    pub fn delete_visible<T: Record>(&mut self, term: &str, positions: &[usize]) -> usize {
        let ids = view::resolve_visible(&self.search::<T>(term), positions);
        self.store.delete_ids::<T>(&ids)
    }

    // --- Whole store ---

    /// Seed the sample records if there are no recipes.
    pub fn seed(&mut self) -> bool {
        self.store.seed_if_empty()
    }

    pub fn flush(&mut self) {
        self.store.flush();
    }

    #[must_use]
    pub fn summary(&self) -> StoreSummary {
        let now = Utc::now();
        let next_reminder = self
            .store
            .reminders()
            .iter()
            .filter(|r| r.is_active && !r.completed && r.fire_date >= now)
            .min_by_key(|r| r.fire_date)
            .cloned();

        StoreSummary {
            recipes: self.store.len::<Recipe>(),
            ingredients: self.store.len::<Ingredient>(),
            search_queries: self.store.len::<SearchQuery>(),
            favorites: self.store.len::<FavoriteEntry>(),
            reminders: self.store.len::<CookingReminder>(),
            measurement_prefs: self.store.len::<MeasurementPreference>(),
            next_reminder,
        }
    }

    #[must_use]
    pub fn export(&self) -> Snapshot {
        Snapshot {
            exported_at: Utc::now(),
            recipes: self.store.recipes().to_vec(),
            ingredients: self.store.ingredients().to_vec(),
            search_queries: self.store.search_queries().to_vec(),
            favorites: self.store.favorites().to_vec(),
            reminders: self.store.reminders().to_vec(),
            measurement_prefs: self.store.measurement_prefs().to_vec(),
        }
    }
}
