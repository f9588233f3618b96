use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Collections;

/// The six independently persisted record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Recipe,
    Ingredient,
    SearchQuery,
    FavoriteEntry,
    CookingReminder,
    MeasurementPreference,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Recipe,
        RecordKind::Ingredient,
        RecordKind::SearchQuery,
        RecordKind::FavoriteEntry,
        RecordKind::CookingReminder,
        RecordKind::MeasurementPreference,
    ];

    /// Storage slot holding the JSON array for this collection.
    #[must_use]
    pub fn slot_key(self) -> &'static str {
        match self {
            RecordKind::Recipe => "recipesKey",
            RecordKind::Ingredient => "ingredientsKey",
            RecordKind::SearchQuery => "searchQueriesKey",
            RecordKind::FavoriteEntry => "favoritesKey",
            RecordKind::CookingReminder => "remindersKey",
            RecordKind::MeasurementPreference => "measurementPrefsKey",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Recipe => "recipes",
            RecordKind::Ingredient => "ingredients",
            RecordKind::SearchQuery => "search queries",
            RecordKind::FavoriteEntry => "favorites",
            RecordKind::CookingReminder => "reminders",
            RecordKind::MeasurementPreference => "measurement preferences",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record type stored in one of the `RecordStore` collections.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned {
    const KIND: RecordKind;

    fn id(&self) -> Uuid;

    /// Text fields matched by a free-text search, in display priority.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Reorders a projection of the collection. Insertion order by default.
    fn order_view(_view: &mut Vec<&Self>) {}

    fn collection(collections: &Collections) -> &Vec<Self>;

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self>;
}

// --- Records ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub cuisine: String,
    pub difficulty: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub prep_minutes: i64,
    pub cook_minutes: i64,
    pub total_minutes: i64,
    pub servings: i64,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub notes: String,
    pub rating: f64,
    pub calories: i64,
    pub protein_grams: f64,
    pub fat_grams: f64,
    pub carbs_grams: f64,
    pub tags: Vec<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_dairy_free: bool,
    pub main_ingredient: String,
    pub utensil_needed: String,
    pub temperature_celsius: f64,
    pub image_name: String,
    pub video_link: String,
    pub source: String,
    pub region: String,
    pub flavor_profile: String,
    pub cost_estimate: String,
    pub favorite_count: i64,
    pub last_cooked: Option<DateTime<Utc>>,
}

impl Record for Recipe {
    const KIND: RecordKind = RecordKind::Recipe;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.summary.as_str()),
            Cow::Owned(self.ingredients.join(" ")),
            Cow::Borrowed(self.cuisine.as_str()),
            Cow::Borrowed(self.category.as_str()),
        ]
    }

    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.recipes
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.recipes
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: String,
    pub freshness_level: String,
    pub supplier: String,
    pub origin: String,
    pub purchase_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub storage_location: String,
    pub tags: Vec<String>,
    pub calories_per_100g: i64,
    pub cost_per_unit: f64,
    pub is_organic: bool,
    pub is_local: bool,
    pub is_allergen: bool,
    pub allergen_type: String,
    pub replacement_suggestions: Vec<String>,
    pub color: String,
    pub texture: String,
    pub aroma: String,
    pub taste: String,
    /// Never populated; kept so the stored shape stays stable.
    pub used_in_recipes: Vec<Uuid>,
    pub preferred_brand: String,
    pub moisture_level: String,
    pub density: f64,
    pub nutrition_grade: String,
    pub seasonality: String,
    pub handling_tips: String,
    pub preparation_steps: Vec<String>,
    pub rating: f64,
    pub last_updated: Option<DateTime<Utc>>,
    pub barcode: String,
    pub shelf_life_days: i64,
    pub availability_status: String,
}

impl Record for Ingredient {
    const KIND: RecordKind = RecordKind::Ingredient;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.category.as_str()),
            Cow::Borrowed(self.supplier.as_str()),
        ]
    }

    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.ingredients
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.ingredients
    }
}

/// A saved search. Stored as data only, never run against the recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub id: Uuid,
    pub text: String,
    pub ingredient_filters: Vec<String>,
    pub max_cook_time: Option<i64>,
    pub min_rating: f64,
    pub max_calories: i64,
    pub category_filter: String,
    pub cuisine_filter: String,
    pub is_vegetarian_only: bool,
    pub is_vegan_only: bool,
    pub include_gluten_free: bool,
    pub include_dairy_free: bool,
    pub sort_option: String,
    pub sort_order: String,
    pub show_favorites_only: bool,
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub saved_at: DateTime<Utc>,
    pub last_used: Option<DateTime<Utc>>,
    pub search_count: i64,
    pub total_results: i64,
    pub recent_result_titles: Vec<String>,
    pub is_advanced_mode: bool,
    pub time_range_label: String,
    pub difficulty_level: String,
    pub author_filter: String,
    pub region_filter: String,
    pub keyword_match_type: String,
    pub auto_suggestions_enabled: bool,
    pub last_used_device: String,
    pub language: String,
    pub temperature_unit: String,
    pub favorite_only: bool,
    pub user_note: String,
    pub include_images: bool,
    pub show_quick_recipes: bool,
    pub filter_group: String,
    pub cache_key: String,
}

impl Record for SearchQuery {
    const KIND: RecordKind = RecordKind::SearchQuery;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.text.as_str()),
            Cow::Borrowed(self.category_filter.as_str()),
            Cow::Borrowed(self.cuisine_filter.as_str()),
        ]
    }

    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.search_queries
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.search_queries
    }
}

/// A favorited recipe. `rating`/`rating_out_of_five` and
/// `times_cooked`/`cook_count` are independent and never reconciled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub id: Uuid,
    /// Soft reference; may point at a recipe that no longer exists.
    pub recipe_id: Uuid,
    pub added_at: DateTime<Utc>,
    pub note: Option<String>,
    pub rating: f64,
    pub times_cooked: i64,
    pub custom_label: String,
    pub mood_tag: String,
    pub shared_with_friends: bool,
    pub bookmarked_at: Option<DateTime<Utc>>,
    pub image_preview: String,
    pub last_cooked: Option<DateTime<Utc>>,
    pub category: String,
    pub cuisine: String,
    pub is_weekly_favorite: bool,
    pub is_seasonal_pick: bool,
    pub is_healthy_choice: bool,
    pub author: String,
    pub preparation_tips: String,
    pub nutrition_summary: String,
    pub cook_count: i64,
    pub last_modified: Option<DateTime<Utc>>,
    pub recipe_name: String,
    pub spice_level: String,
    pub flavor_profile: String,
    pub favorite_reason: String,
    pub difficulty_level: String,
    pub prep_time: i64,
    pub cook_time: i64,
    pub total_time: i64,
    pub rating_out_of_five: i64,
    pub location_added: String,
    pub source: String,
    pub backup_status: String,
    pub review_text: String,
    pub shared_date: Option<DateTime<Utc>>,
    pub mood_when_cooked: String,
}

impl Record for FavoriteEntry {
    const KIND: RecordKind = RecordKind::FavoriteEntry;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.recipe_name.as_str()),
            Cow::Borrowed(self.custom_label.as_str()),
            Cow::Borrowed(self.cuisine.as_str()),
            Cow::Borrowed(self.author.as_str()),
        ]
    }

    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.favorites
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.favorites
    }
}

/// A reminder to start cooking. `fire_date` is data only; nothing schedules it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingReminder {
    pub id: Uuid,
    /// Soft reference; may point at a recipe that no longer exists.
    pub recipe_id: Uuid,
    pub title: String,
    pub fire_date: DateTime<Utc>,
    pub repeat_interval_minutes: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub reminder_message: String,
    pub sound_name: String,
    pub vibration_enabled: bool,
    pub alert_type: String,
    pub snooze_minutes: i64,
    pub repeat_days: Vec<String>,
    pub is_persistent: bool,
    pub priority_level: String,
    pub reminder_category: String,
    pub recipe_name: String,
    pub duration_minutes: i64,
    pub estimated_completion: Option<DateTime<Utc>>,
    pub color_code: String,
    pub icon_name: String,
    pub show_on_lock_screen: bool,
    pub is_silent: bool,
    pub auto_delete_after_trigger: bool,
    pub linked_timer_id: Option<Uuid>,
    pub is_recurring: bool,
    pub start_cooking_time: Option<DateTime<Utc>>,
    pub end_cooking_time: Option<DateTime<Utc>>,
    pub kitchen_zone: String,
    pub assigned_user: String,
    pub display_order: i64,
    pub location_context: String,
    pub notes: String,
    pub completed: bool,
}

impl Record for CookingReminder {
    const KIND: RecordKind = RecordKind::CookingReminder;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.recipe_name.as_str()),
        ]
    }

    // Reminders always display soonest first, searched or not.
    fn order_view(view: &mut Vec<&Self>) {
        view.sort_by_key(|r| r.fire_date);
    }

    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.reminders
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.reminders
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementPreference {
    pub id: Uuid,
    pub unit_system: String,
    pub decimal_places: i64,
    pub weight_unit: String,
    pub volume_unit: String,
    pub temperature_unit: String,
    pub pressure_unit: String,
    pub preferred_language: String,
    pub default_currency: String,
    pub rounding_mode: String,
    pub conversion_precision: i64,
    pub auto_convert_enabled: bool,
    pub show_fraction_units: bool,
    pub display_abbreviations: bool,
    pub font_scale: f64,
    pub theme: String,
    pub show_tips: bool,
    pub quick_entry_mode: bool,
    pub include_scientific_units: bool,
    pub temperature_display_format: String,
    pub ingredient_sort_option: String,
    pub recipe_display_mode: String,
    pub remember_last_choice: bool,
    pub vibration_feedback: bool,
    pub haptic_level: i64,
    pub preferred_date_format: String,
    pub color_scheme: String,
    pub accessibility_text_size: i64,
    pub high_contrast_enabled: bool,
    pub auto_save_settings: bool,
    pub default_portion_size: i64,
    pub use_local_formatting: bool,
    pub region: String,
    pub backup_enabled: bool,
    pub last_updated: Option<DateTime<Utc>>,
    pub app_version: String,
    pub developer_mode: bool,
}

impl Record for MeasurementPreference {
    const KIND: RecordKind = RecordKind::MeasurementPreference;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.unit_system.as_str()),
            Cow::Borrowed(self.preferred_language.as_str()),
            Cow::Borrowed(self.theme.as_str()),
        ]
    }

    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.measurement_prefs
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.measurement_prefs
    }
}

// --- Form input types ---
//
// Forms carry text exactly as entered; `validation` turns them into records.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: String,
    pub summary: String,
    pub category: String,
    pub cuisine: String,
    pub difficulty: String,
    /// One ingredient per line.
    pub ingredients: String,
    /// One step per line.
    pub steps: String,
    pub prep_minutes: String,
    pub cook_minutes: String,
    pub servings: String,
    pub author: String,
    pub notes: String,
    pub rating: String,
    pub calories: String,
    pub protein_grams: String,
    pub fat_grams: String,
    pub carbs_grams: String,
    /// Comma separated.
    pub tags: String,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_dairy_free: bool,
    pub main_ingredient: String,
    pub utensil_needed: String,
    pub temperature_celsius: String,
    pub image_name: String,
    pub video_link: String,
    pub source: String,
    pub region: String,
    pub flavor_profile: String,
    pub cost_estimate: String,
    pub last_cooked: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewIngredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: String,
    pub freshness_level: String,
    pub supplier: String,
    pub origin: String,
    pub purchase_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub storage_location: String,
    /// Comma separated.
    pub tags: String,
    pub calories_per_100g: String,
    pub cost_per_unit: String,
    pub is_organic: bool,
    pub is_local: bool,
    pub is_allergen: bool,
    pub allergen_type: String,
    /// Comma separated.
    pub replacement_suggestions: String,
    pub color: String,
    pub texture: String,
    pub aroma: String,
    pub taste: String,
    pub preferred_brand: String,
    pub moisture_level: String,
    pub density: String,
    pub nutrition_grade: String,
    pub seasonality: String,
    pub handling_tips: String,
    /// Comma separated.
    pub preparation_steps: String,
    pub rating: String,
    pub barcode: String,
    pub shelf_life_days: String,
    pub availability_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewSearchQuery {
    pub text: String,
    /// Comma separated.
    pub ingredient_filters: String,
    /// Empty means no limit.
    pub max_cook_time: String,
    pub min_rating: f64,
    pub max_calories: String,
    pub category_filter: String,
    pub cuisine_filter: String,
    pub is_vegetarian_only: bool,
    pub is_vegan_only: bool,
    pub include_gluten_free: bool,
    pub include_dairy_free: bool,
    pub sort_option: String,
    pub sort_order: String,
    pub show_favorites_only: bool,
    /// Comma separated.
    pub include_tags: String,
    /// Comma separated.
    pub exclude_tags: String,
    pub search_count: String,
    pub total_results: String,
    /// Comma separated.
    pub recent_result_titles: String,
    pub is_advanced_mode: bool,
    pub time_range_label: String,
    pub difficulty_level: String,
    pub author_filter: String,
    pub region_filter: String,
    pub keyword_match_type: String,
    pub auto_suggestions_enabled: bool,
    pub last_used_device: String,
    pub language: String,
    pub temperature_unit: String,
    pub favorite_only: bool,
    pub user_note: String,
    pub include_images: bool,
    pub show_quick_recipes: bool,
    pub filter_group: String,
    pub cache_key: String,
}

impl Default for NewSearchQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            ingredient_filters: String::new(),
            max_cook_time: "45".to_string(),
            min_rating: 3.0,
            max_calories: "400".to_string(),
            category_filter: "All".to_string(),
            cuisine_filter: "All".to_string(),
            is_vegetarian_only: false,
            is_vegan_only: false,
            include_gluten_free: true,
            include_dairy_free: false,
            sort_option: "Relevance".to_string(),
            sort_order: "Descending".to_string(),
            show_favorites_only: false,
            include_tags: String::new(),
            exclude_tags: String::new(),
            search_count: "1".to_string(),
            total_results: "0".to_string(),
            recent_result_titles: String::new(),
            is_advanced_mode: false,
            time_range_label: String::new(),
            difficulty_level: "All".to_string(),
            author_filter: String::new(),
            region_filter: String::new(),
            keyword_match_type: "Fuzzy".to_string(),
            auto_suggestions_enabled: true,
            last_used_device: String::new(),
            language: "en".to_string(),
            temperature_unit: "Celsius".to_string(),
            favorite_only: false,
            user_note: String::new(),
            include_images: true,
            show_quick_recipes: false,
            filter_group: "Custom".to_string(),
            cache_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewFavoriteEntry {
    pub recipe_id: Option<Uuid>,
    pub note: String,
    pub rating: f64,
    pub times_cooked: String,
    pub custom_label: String,
    pub mood_tag: String,
    pub shared_with_friends: bool,
    pub bookmarked_at: Option<DateTime<Utc>>,
    pub image_preview: String,
    pub last_cooked: Option<DateTime<Utc>>,
    pub category: String,
    pub cuisine: String,
    pub is_weekly_favorite: bool,
    pub is_seasonal_pick: bool,
    pub is_healthy_choice: bool,
    pub author: String,
    pub preparation_tips: String,
    pub nutrition_summary: String,
    pub cook_count: String,
    pub recipe_name: String,
    pub spice_level: String,
    pub flavor_profile: String,
    pub favorite_reason: String,
    pub difficulty_level: String,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub rating_out_of_five: i64,
    pub location_added: String,
    pub source: String,
    pub backup_status: String,
    pub review_text: String,
    pub shared_date: Option<DateTime<Utc>>,
    pub mood_when_cooked: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewCookingReminder {
    pub recipe_id: Option<Uuid>,
    pub title: String,
    pub fire_date: Option<DateTime<Utc>>,
    /// Empty means the reminder does not repeat.
    pub repeat_interval_minutes: String,
    pub is_active: bool,
    pub reminder_message: String,
    pub sound_name: String,
    pub vibration_enabled: bool,
    pub alert_type: String,
    pub snooze_minutes: String,
    pub repeat_days: Vec<String>,
    pub is_persistent: bool,
    pub priority_level: String,
    pub reminder_category: String,
    pub recipe_name: String,
    pub duration_minutes: String,
    pub color_code: String,
    pub icon_name: String,
    pub show_on_lock_screen: bool,
    pub is_silent: bool,
    pub auto_delete_after_trigger: bool,
    pub is_recurring: bool,
    pub start_cooking_time: Option<DateTime<Utc>>,
    pub end_cooking_time: Option<DateTime<Utc>>,
    pub kitchen_zone: String,
    pub assigned_user: String,
    pub display_order: String,
    pub location_context: String,
    pub notes: String,
}

impl Default for NewCookingReminder {
    fn default() -> Self {
        Self {
            recipe_id: None,
            title: String::new(),
            fire_date: None,
            repeat_interval_minutes: String::new(),
            is_active: true,
            reminder_message: String::new(),
            sound_name: "Default".to_string(),
            vibration_enabled: true,
            alert_type: "Standard".to_string(),
            snooze_minutes: "10".to_string(),
            repeat_days: Vec::new(),
            is_persistent: false,
            priority_level: "Medium".to_string(),
            reminder_category: "Cooking".to_string(),
            recipe_name: String::new(),
            duration_minutes: "30".to_string(),
            color_code: "blue".to_string(),
            icon_name: "bell.fill".to_string(),
            show_on_lock_screen: true,
            is_silent: false,
            auto_delete_after_trigger: true,
            is_recurring: false,
            start_cooking_time: None,
            end_cooking_time: None,
            kitchen_zone: "Stovetop".to_string(),
            assigned_user: "Self".to_string(),
            display_order: "1".to_string(),
            location_context: "Home Kitchen".to_string(),
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewMeasurementPreference {
    pub unit_system: String,
    pub decimal_places: i64,
    pub weight_unit: String,
    pub volume_unit: String,
    pub temperature_unit: String,
    pub pressure_unit: String,
    pub preferred_language: String,
    pub default_currency: String,
    pub rounding_mode: String,
    pub conversion_precision: i64,
    pub auto_convert_enabled: bool,
    pub show_fraction_units: bool,
    pub display_abbreviations: bool,
    pub font_scale: f64,
    pub theme: String,
    pub show_tips: bool,
    pub quick_entry_mode: bool,
    pub include_scientific_units: bool,
    pub temperature_display_format: String,
    pub ingredient_sort_option: String,
    pub recipe_display_mode: String,
    pub remember_last_choice: bool,
    pub vibration_feedback: bool,
    pub haptic_level: i64,
    pub preferred_date_format: String,
    pub color_scheme: String,
    pub accessibility_text_size: i64,
    pub high_contrast_enabled: bool,
    pub auto_save_settings: bool,
    pub default_portion_size: i64,
    pub use_local_formatting: bool,
    pub region: String,
    pub backup_enabled: bool,
    pub app_version: String,
    pub developer_mode: bool,
}

impl Default for NewMeasurementPreference {
    // Mirrors the starting values of the preference screen.
    fn default() -> Self {
        Self {
            unit_system: "Metric".to_string(),
            decimal_places: 1,
            weight_unit: "grams".to_string(),
            volume_unit: "ml".to_string(),
            temperature_unit: "Celsius".to_string(),
            pressure_unit: "bar".to_string(),
            preferred_language: "English".to_string(),
            default_currency: "USD".to_string(),
            rounding_mode: "nearest".to_string(),
            conversion_precision: 2,
            auto_convert_enabled: true,
            show_fraction_units: false,
            display_abbreviations: true,
            font_scale: 1.0,
            theme: "Light".to_string(),
            show_tips: true,
            quick_entry_mode: false,
            include_scientific_units: false,
            temperature_display_format: "°C".to_string(),
            ingredient_sort_option: "alphabetical".to_string(),
            recipe_display_mode: "compact".to_string(),
            remember_last_choice: true,
            vibration_feedback: true,
            haptic_level: 2,
            preferred_date_format: "dd-MM-yyyy".to_string(),
            color_scheme: "system".to_string(),
            accessibility_text_size: 16,
            high_contrast_enabled: false,
            auto_save_settings: true,
            default_portion_size: 1,
            use_local_formatting: true,
            region: String::new(),
            backup_enabled: true,
            app_version: "1.0".to_string(),
            developer_mode: false,
        }
    }
}

// --- Summary / snapshot types ---

/// Per-collection counts for the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    pub recipes: usize,
    pub ingredients: usize,
    pub search_queries: usize,
    pub favorites: usize,
    pub reminders: usize,
    pub measurement_prefs: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_reminder: Option<CookingReminder>,
}

/// Every collection at a point in time, as written by `export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub exported_at: DateTime<Utc>,
    pub recipes: Vec<Recipe>,
    pub ingredients: Vec<Ingredient>,
    pub search_queries: Vec<SearchQuery>,
    pub favorites: Vec<FavoriteEntry>,
    pub reminders: Vec<CookingReminder>,
    pub measurement_prefs: Vec<MeasurementPreference>,
}
