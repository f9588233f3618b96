use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::db::SlotStorage;
use crate::models::{
    CookingReminder, FavoriteEntry, Ingredient, MeasurementPreference, Recipe, Record, RecordKind,
    SearchQuery,
};
use crate::seed;

/// When mutations reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistMode {
    /// Every add/delete writes its collection before returning.
    #[default]
    Immediate,
    /// Mutations only mark collections dirty; `flush` writes them.
    Deferred,
}

#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    pub persist_mode: PersistMode,
    /// Insert the sample records when no recipes were loaded.
    pub seed_on_empty: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            persist_mode: PersistMode::Immediate,
            seed_on_empty: true,
        }
    }
}

/// The six ordered collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub(crate) recipes: Vec<Recipe>,
    pub(crate) ingredients: Vec<Ingredient>,
    pub(crate) search_queries: Vec<SearchQuery>,
    pub(crate) favorites: Vec<FavoriteEntry>,
    pub(crate) reminders: Vec<CookingReminder>,
    pub(crate) measurement_prefs: Vec<MeasurementPreference>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added { kind: RecordKind, id: Uuid },
    Deleted { kind: RecordKind, ids: Vec<Uuid> },
    Seeded,
    Persisted { kinds: Vec<RecordKind> },
}

type Subscriber = Box<dyn FnMut(&StoreEvent)>;

/// In-memory authority for every collection, persisted one slot per
/// collection through a `SlotStorage`.
///
/// Storage failures never reach the caller: an unreadable slot loads as an
/// empty collection and a failed write leaves the previous slot contents in
/// place (the collection stays dirty).
pub struct RecordStore {
    storage: Box<dyn SlotStorage>,
    collections: Collections,
    dirty: HashSet<RecordKind>,
    mode: PersistMode,
    subscribers: Vec<Subscriber>,
}

impl RecordStore {
    /// Load every collection from `storage`, then seed if configured.
    pub fn open(storage: impl SlotStorage + 'static, options: StoreOptions) -> Self {
        let mut store = Self {
            storage: Box::new(storage),
            collections: Collections::default(),
            dirty: HashSet::new(),
            mode: options.persist_mode,
            subscribers: Vec::new(),
        };
        store.load();
        if options.seed_on_empty {
            store.seed_if_empty();
        }
        store
    }

    /// Replace the in-memory state with what storage holds, slot by slot.
    pub fn load(&mut self) {
        self.collections.recipes = self.load_collection::<Recipe>();
        self.collections.ingredients = self.load_collection::<Ingredient>();
        self.collections.search_queries = self.load_collection::<SearchQuery>();
        self.collections.favorites = self.load_collection::<FavoriteEntry>();
        self.collections.reminders = self.load_collection::<CookingReminder>();
        self.collections.measurement_prefs = self.load_collection::<MeasurementPreference>();
        self.dirty.clear();
    }

    fn load_collection<T: Record>(&self) -> Vec<T> {
        let key = T::KIND.slot_key();
        let payload = match self.storage.read_slot(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(slot = key, error = %e, "failed to read slot, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<T>>(&payload) {
            Ok(records) => {
                debug!(slot = key, count = records.len(), "loaded collection");
                records
            }
            Err(e) => {
                warn!(slot = key, error = %e, "failed to decode slot, starting empty");
                Vec::new()
            }
        }
    }

    /// Seed one sample record into every collection, but only when the
    /// recipe collection is empty. The other collections are not consulted.
    /// Every collection is marked dirty and written according to the
    /// persist mode.
    pub fn seed_if_empty(&mut self) -> bool {
        if !self.collections.recipes.is_empty() {
            return false;
        }
        let sample = seed::sample_collections(chrono::Utc::now());
        self.collections.recipes.extend(sample.recipes);
        self.collections.ingredients.extend(sample.ingredients);
        self.collections.search_queries.extend(sample.search_queries);
        self.collections.favorites.extend(sample.favorites);
        self.collections.reminders.extend(sample.reminders);
        self.collections
            .measurement_prefs
            .extend(sample.measurement_prefs);
        debug!("seeded sample records");
        self.notify(&StoreEvent::Seeded);
        self.changed(&RecordKind::ALL);
        true
    }

    // --- Reads ---

    #[must_use]
    pub fn records<T: Record>(&self) -> &[T] {
        T::collection(&self.collections)
    }

    #[must_use]
    pub fn get<T: Record>(&self, id: Uuid) -> Option<&T> {
        self.records::<T>().iter().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn len<T: Record>(&self) -> usize {
        self.records::<T>().len()
    }

    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.collections.recipes
    }

    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.collections.ingredients
    }

    #[must_use]
    pub fn search_queries(&self) -> &[SearchQuery] {
        &self.collections.search_queries
    }

    #[must_use]
    pub fn favorites(&self) -> &[FavoriteEntry] {
        &self.collections.favorites
    }

    #[must_use]
    pub fn reminders(&self) -> &[CookingReminder] {
        &self.collections.reminders
    }

    #[must_use]
    pub fn measurement_prefs(&self) -> &[MeasurementPreference] {
        &self.collections.measurement_prefs
    }

    // --- Mutations ---

    /// Append an already-validated record.
    pub fn add<T: Record>(&mut self, record: T) {
        let id = record.id();
        T::collection_mut(&mut self.collections).push(record);
        debug!(kind = %T::KIND, %id, "record added");
        self.notify(&StoreEvent::Added { kind: T::KIND, id });
        self.changed(&[T::KIND]);
    }

    /// Remove every record whose id is listed. Unknown ids are ignored.
    pub fn delete_ids<T: Record>(&mut self, ids: &[Uuid]) -> usize {
        let records = T::collection_mut(&mut self.collections);
        let before = records.len();
        let mut removed = Vec::new();
        records.retain(|r| {
            if ids.contains(&r.id()) {
                removed.push(r.id());
                false
            } else {
                true
            }
        });
        let count = before - records.len();
        if count == 0 {
            return 0;
        }
        debug!(kind = %T::KIND, count, "records deleted");
        self.notify(&StoreEvent::Deleted {
            kind: T::KIND,
            ids: removed,
        });
        self.changed(&[T::KIND]);
        count
    }

    /// Remove records by raw storage index. Out-of-range indices are ignored.
    pub fn delete_at<T: Record>(&mut self, indices: &[usize]) -> usize {
        let records = self.records::<T>();
        let ids: Vec<Uuid> = indices
            .iter()
            .filter_map(|&i| records.get(i).map(Record::id))
            .collect();
        self.delete_ids::<T>(&ids)
    }

    // --- Persistence ---

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Mark every collection dirty and write them all.
    pub fn persist(&mut self) -> Vec<RecordKind> {
        self.dirty.extend(RecordKind::ALL);
        self.flush()
    }

    /// Write each dirty collection to its own slot. Returns the kinds that
    /// were written; a collection that fails stays dirty and does not stop
    /// the rest.
    pub fn flush(&mut self) -> Vec<RecordKind> {
        let mut written = Vec::new();
        for kind in RecordKind::ALL {
            if !self.dirty.contains(&kind) {
                continue;
            }
            let ok = match kind {
                RecordKind::Recipe => self.write_collection::<Recipe>(),
                RecordKind::Ingredient => self.write_collection::<Ingredient>(),
                RecordKind::SearchQuery => self.write_collection::<SearchQuery>(),
                RecordKind::FavoriteEntry => self.write_collection::<FavoriteEntry>(),
                RecordKind::CookingReminder => self.write_collection::<CookingReminder>(),
                RecordKind::MeasurementPreference => {
                    self.write_collection::<MeasurementPreference>()
                }
            };
            if ok {
                self.dirty.remove(&kind);
                written.push(kind);
            }
        }
        if !written.is_empty() {
            self.notify(&StoreEvent::Persisted {
                kinds: written.clone(),
            });
        }
        written
    }

    fn write_collection<T: Record>(&mut self) -> bool {
        let key = T::KIND.slot_key();
        let payload = match serde_json::to_string(T::collection(&self.collections)) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(slot = key, error = %e, "failed to encode collection, slot not updated");
                return false;
            }
        };
        // Non-finite floats encode as null and would poison the slot on reload.
        if let Err(e) = serde_json::from_str::<Vec<T>>(&payload) {
            warn!(slot = key, error = %e, "encoded collection does not decode, slot not updated");
            return false;
        }
        match self.storage.write_slot(key, &payload) {
            Ok(()) => {
                debug!(slot = key, bytes = payload.len(), "collection written");
                true
            }
            Err(e) => {
                warn!(slot = key, error = %e, "failed to write slot, slot not updated");
                false
            }
        }
    }

    fn changed(&mut self, kinds: &[RecordKind]) {
        self.dirty.extend(kinds.iter().copied());
        if self.mode == PersistMode::Immediate {
            self.flush();
        }
    }

    // --- Subscriptions ---

    /// Register a callback invoked after every add, delete, seed and flush.
    pub fn subscribe(&mut self, callback: impl FnMut(&StoreEvent) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    fn notify(&mut self, event: &StoreEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }
}

impl Drop for RecordStore {
    fn drop(&mut self) {
        if self.is_dirty() {
            debug!("flushing dirty collections on drop");
            self.flush();
        }
    }
}
