//! Shared form validation.
//!
//! Every form is checked in full before anything is constructed: each failing
//! rule appends one human-readable message and the caller reports the whole
//! list at once. A form that produces no messages becomes a record with a
//! fresh id.

use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    CookingReminder, FavoriteEntry, Ingredient, MeasurementPreference, NewCookingReminder,
    NewFavoriteEntry, NewIngredient, NewMeasurementPreference, NewRecipe, NewSearchQuery, Recipe,
    Record, SearchQuery,
};

/// Every message collected while validating a form, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("please correct the following:\n• {}", .messages.join("\n• "))]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }
}

/// Collects rule failures for one form.
///
/// Parsing rules return a placeholder (`0`) on failure so validation can keep
/// going; the placeholder never escapes because `finish` fails first.
#[derive(Debug, Default)]
pub struct Validator {
    messages: Vec<String>,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(&mut self, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.messages.push(format!("{label} is required."));
        }
    }

    pub fn check(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.messages.push(message.into());
        }
    }

    pub fn integer(&mut self, label: &str, value: &str) -> i64 {
        if let Ok(n) = value.trim().parse::<i64>() {
            n
        } else {
            self.messages.push(format!("{label} must be a whole number."));
            0
        }
    }

    pub fn number(&mut self, label: &str, value: &str) -> f64 {
        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => n,
            _ => {
                self.messages.push(format!("{label} must be a number."));
                0.0
            }
        }
    }

    pub fn non_negative_integer(&mut self, label: &str, value: &str) -> i64 {
        match value.trim().parse::<i64>() {
            Ok(n) if n >= 0 => n,
            _ => {
                self.messages
                    .push(format!("{label} must be a non-negative whole number."));
                0
            }
        }
    }

    pub fn non_negative_number(&mut self, label: &str, value: &str) -> f64 {
        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => n,
            _ => {
                self.messages
                    .push(format!("{label} must be a non-negative number."));
                0.0
            }
        }
    }

    /// Blank input is `None`; anything else must parse.
    pub fn optional_integer(&mut self, label: &str, value: &str) -> Option<i64> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            Some(n)
        } else {
            self.messages.push(format!("{label} must be a whole number."));
            None
        }
    }

    pub fn int_at_least(&mut self, label: &str, value: &str, min: i64) -> i64 {
        match value.trim().parse::<i64>() {
            Ok(n) if n >= min => n,
            _ => {
                self.messages
                    .push(format!("{label} must be a whole number ({min} or greater)."));
                min
            }
        }
    }

    pub fn int_in_range(&mut self, label: &str, value: i64, range: RangeInclusive<i64>) {
        if !range.contains(&value) {
            self.messages.push(format!(
                "{label} must be {}-{}.",
                range.start(),
                range.end()
            ));
        }
    }

    pub fn number_in_range(&mut self, label: &str, value: f64, range: RangeInclusive<f64>) {
        if !range.contains(&value) {
            self.messages.push(format!(
                "{label} must be {:.1}-{:.1}.",
                range.start(),
                range.end()
            ));
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                messages: self.messages,
            })
        }
    }
}

/// Split multi-line input into trimmed, non-empty entries.
#[must_use]
pub fn split_lines(s: &str) -> Vec<String> {
    s.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Split comma-separated input into trimmed, non-empty entries.
#[must_use]
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

impl NewRecipe {
    pub fn into_record(self) -> Result<Recipe, ValidationErrors> {
        self.into_record_at(Utc::now())
    }

    pub fn into_record_at(self, now: DateTime<Utc>) -> Result<Recipe, ValidationErrors> {
        let mut v = Validator::new();
        for (value, label) in [
            (&self.title, "Title"),
            (&self.summary, "Summary"),
            (&self.author, "Author"),
            (&self.cuisine, "Cuisine"),
            (&self.main_ingredient, "Main Ingredient"),
            (&self.utensil_needed, "Utensil Needed"),
            (&self.image_name, "Image Name"),
            (&self.source, "Source"),
            (&self.ingredients, "Ingredients"),
            (&self.steps, "Steps"),
            (&self.notes, "Notes"),
            (&self.region, "Region"),
            (&self.flavor_profile, "Flavor Profile"),
            (&self.video_link, "Video Link"),
        ] {
            v.required(label, value);
        }

        let prep_minutes = v.non_negative_integer("Prep Minutes", &self.prep_minutes);
        let cook_minutes = v.non_negative_integer("Cook Minutes", &self.cook_minutes);
        let servings = v.integer("Servings", &self.servings);
        let rating = v.number("Rating", &self.rating);
        let calories = v.integer("Calories", &self.calories);
        let protein_grams = v.number("Protein", &self.protein_grams);
        let fat_grams = v.number("Fat", &self.fat_grams);
        let carbs_grams = v.number("Carbs", &self.carbs_grams);
        let temperature_celsius = v.number("Temperature", &self.temperature_celsius);
        let total_minutes = prep_minutes.checked_add(cook_minutes);
        v.check(total_minutes.is_some(), "Total Minutes is too large.");
        v.finish()?;

        Ok(Recipe {
            id: Uuid::new_v4(),
            title: self.title,
            summary: self.summary,
            category: self.category,
            cuisine: self.cuisine,
            difficulty: self.difficulty,
            ingredients: split_lines(&self.ingredients),
            steps: split_lines(&self.steps),
            prep_minutes,
            cook_minutes,
            total_minutes: total_minutes.unwrap_or_default(),
            servings,
            author: self.author,
            created_at: now,
            updated_at: None,
            notes: self.notes,
            rating,
            calories,
            protein_grams,
            fat_grams,
            carbs_grams,
            tags: split_list(&self.tags),
            is_vegetarian: self.is_vegetarian,
            is_vegan: self.is_vegan,
            is_gluten_free: self.is_gluten_free,
            is_dairy_free: self.is_dairy_free,
            main_ingredient: self.main_ingredient,
            utensil_needed: self.utensil_needed,
            temperature_celsius,
            image_name: self.image_name,
            video_link: self.video_link,
            source: self.source,
            region: self.region,
            flavor_profile: self.flavor_profile,
            cost_estimate: self.cost_estimate,
            favorite_count: 0,
            last_cooked: self.last_cooked,
        })
    }
}

impl NewIngredient {
    pub fn into_record(self) -> Result<Ingredient, ValidationErrors> {
        self.into_record_at(Utc::now())
    }

    pub fn into_record_at(self, now: DateTime<Utc>) -> Result<Ingredient, ValidationErrors> {
        let mut v = Validator::new();
        v.required("Name", &self.name);
        v.required("Quantity", &self.quantity);
        v.required("Unit", &self.unit);
        let calories_per_100g = v.non_negative_integer("Calories", &self.calories_per_100g);
        let cost_per_unit = v.non_negative_number("Cost", &self.cost_per_unit);
        if self.is_allergen {
            v.required("Allergen type", &self.allergen_type);
        }
        let density = v.non_negative_number("Density", &self.density);
        let shelf_life_days = v.non_negative_integer("Shelf life", &self.shelf_life_days);
        v.finish()?;

        // The rating slider is optional on the form; anything unparsable or
        // non-finite is 0.
        let rating = self
            .rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(0.0);

        Ok(Ingredient {
            id: Uuid::new_v4(),
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            category: self.category,
            freshness_level: self.freshness_level,
            supplier: self.supplier,
            origin: self.origin,
            purchase_date: self.purchase_date,
            expiry_date: self.expiry_date,
            storage_location: self.storage_location,
            tags: split_list(&self.tags),
            calories_per_100g,
            cost_per_unit,
            is_organic: self.is_organic,
            is_local: self.is_local,
            is_allergen: self.is_allergen,
            allergen_type: self.allergen_type,
            replacement_suggestions: split_list(&self.replacement_suggestions),
            color: self.color,
            texture: self.texture,
            aroma: self.aroma,
            taste: self.taste,
            used_in_recipes: Vec::new(),
            preferred_brand: self.preferred_brand,
            moisture_level: self.moisture_level,
            density,
            nutrition_grade: self.nutrition_grade,
            seasonality: self.seasonality,
            handling_tips: self.handling_tips,
            preparation_steps: split_list(&self.preparation_steps),
            rating,
            last_updated: Some(now),
            barcode: self.barcode,
            shelf_life_days,
            availability_status: self.availability_status,
        })
    }
}

impl NewSearchQuery {
    pub fn into_record(self) -> Result<SearchQuery, ValidationErrors> {
        self.into_record_at(Utc::now())
    }

    pub fn into_record_at(self, now: DateTime<Utc>) -> Result<SearchQuery, ValidationErrors> {
        let mut v = Validator::new();
        v.required("Search Text", &self.text);
        let max_cook_time = v.optional_integer("Max Cook Time", &self.max_cook_time);
        let max_calories = v.int_at_least("Max Calories", &self.max_calories, 0);
        let search_count = v.int_at_least("Search Count", &self.search_count, 1);
        let total_results = v.int_at_least("Total Results", &self.total_results, 0);
        v.finish()?;

        let cache_key = non_empty(self.cache_key).unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(SearchQuery {
            id: Uuid::new_v4(),
            text: self.text,
            ingredient_filters: split_list(&self.ingredient_filters),
            max_cook_time,
            min_rating: self.min_rating,
            max_calories,
            category_filter: self.category_filter,
            cuisine_filter: self.cuisine_filter,
            is_vegetarian_only: self.is_vegetarian_only,
            is_vegan_only: self.is_vegan_only,
            include_gluten_free: self.include_gluten_free,
            include_dairy_free: self.include_dairy_free,
            sort_option: self.sort_option,
            sort_order: self.sort_order,
            show_favorites_only: self.show_favorites_only,
            include_tags: split_list(&self.include_tags),
            exclude_tags: split_list(&self.exclude_tags),
            saved_at: now,
            last_used: None,
            search_count,
            total_results,
            recent_result_titles: split_list(&self.recent_result_titles),
            is_advanced_mode: self.is_advanced_mode,
            time_range_label: self.time_range_label,
            difficulty_level: self.difficulty_level,
            author_filter: self.author_filter,
            region_filter: self.region_filter,
            keyword_match_type: self.keyword_match_type,
            auto_suggestions_enabled: self.auto_suggestions_enabled,
            last_used_device: self.last_used_device,
            language: self.language,
            temperature_unit: self.temperature_unit,
            favorite_only: self.favorite_only,
            user_note: self.user_note,
            include_images: self.include_images,
            show_quick_recipes: self.show_quick_recipes,
            filter_group: self.filter_group,
            cache_key,
        })
    }
}

impl NewFavoriteEntry {
    pub fn into_record(self) -> Result<FavoriteEntry, ValidationErrors> {
        self.into_record_at(Utc::now())
    }

    pub fn into_record_at(self, now: DateTime<Utc>) -> Result<FavoriteEntry, ValidationErrors> {
        let mut v = Validator::new();
        for (value, label) in [
            (&self.recipe_name, "Recipe Name"),
            (&self.custom_label, "Custom Label"),
            (&self.author, "Author"),
            (&self.favorite_reason, "Favorite Reason"),
            (&self.category, "Category"),
            (&self.cuisine, "Cuisine"),
            (&self.difficulty_level, "Difficulty Level"),
            (&self.spice_level, "Spice Level"),
            (&self.flavor_profile, "Flavor Profile"),
            (&self.location_added, "Location Added"),
            (&self.source, "Source"),
        ] {
            v.required(label, value);
        }
        let times_cooked = v.non_negative_integer("Times Cooked", &self.times_cooked);
        let cook_count = v.non_negative_integer("Cook Count", &self.cook_count);
        let prep_time = v.non_negative_integer("Prep Time", &self.prep_time);
        let cook_time = v.non_negative_integer("Cook Time", &self.cook_time);
        let total_time = v.non_negative_integer("Total Time", &self.total_time);
        v.number_in_range("Rating", self.rating, 0.0..=5.0);
        v.int_in_range("Rating Out of Five", self.rating_out_of_five, 1..=5);
        v.finish()?;

        Ok(FavoriteEntry {
            id: Uuid::new_v4(),
            recipe_id: self.recipe_id.unwrap_or_else(Uuid::new_v4),
            added_at: now,
            note: non_empty(self.note),
            rating: self.rating,
            times_cooked,
            custom_label: self.custom_label,
            mood_tag: self.mood_tag,
            shared_with_friends: self.shared_with_friends,
            bookmarked_at: self.bookmarked_at,
            image_preview: self.image_preview,
            last_cooked: self.last_cooked,
            category: self.category,
            cuisine: self.cuisine,
            is_weekly_favorite: self.is_weekly_favorite,
            is_seasonal_pick: self.is_seasonal_pick,
            is_healthy_choice: self.is_healthy_choice,
            author: self.author,
            preparation_tips: self.preparation_tips,
            nutrition_summary: self.nutrition_summary,
            cook_count,
            last_modified: Some(now),
            recipe_name: self.recipe_name,
            spice_level: self.spice_level,
            flavor_profile: self.flavor_profile,
            favorite_reason: self.favorite_reason,
            difficulty_level: self.difficulty_level,
            prep_time,
            cook_time,
            total_time,
            rating_out_of_five: self.rating_out_of_five,
            location_added: self.location_added,
            source: self.source,
            backup_status: self.backup_status,
            review_text: self.review_text,
            shared_date: self.shared_date,
            mood_when_cooked: self.mood_when_cooked,
        })
    }
}

/// One day.
const MAX_SNOOZE_MINUTES: i64 = 24 * 60;
/// One week.
const MAX_DURATION_MINUTES: i64 = 7 * 24 * 60;

impl NewCookingReminder {
    pub fn into_record(self) -> Result<CookingReminder, ValidationErrors> {
        self.into_record_at(Utc::now())
    }

    pub fn into_record_at(self, now: DateTime<Utc>) -> Result<CookingReminder, ValidationErrors> {
        let mut v = Validator::new();
        v.required("Title", &self.title);
        v.required("Recipe Name", &self.recipe_name);
        let repeat_interval_minutes =
            v.optional_integer("Repeat Interval", &self.repeat_interval_minutes);
        let snooze_minutes = v.integer("Snooze Minutes", &self.snooze_minutes);
        let duration_minutes = v.integer("Duration Minutes", &self.duration_minutes);
        let display_order = v.integer("Display Order", &self.display_order);
        v.int_in_range("Snooze Minutes", snooze_minutes, 0..=MAX_SNOOZE_MINUTES);
        v.int_in_range("Duration Minutes", duration_minutes, 0..=MAX_DURATION_MINUTES);

        let fire_date = self.fire_date.unwrap_or(now + Duration::hours(1));
        let estimated_completion = Duration::try_minutes(duration_minutes)
            .and_then(|d| fire_date.checked_add_signed(d));
        v.check(
            estimated_completion.is_some(),
            "Duration Minutes runs past the latest supported date.",
        );
        v.finish()?;

        Ok(CookingReminder {
            id: Uuid::new_v4(),
            recipe_id: self.recipe_id.unwrap_or_else(Uuid::new_v4),
            title: self.title,
            fire_date,
            repeat_interval_minutes,
            is_active: self.is_active,
            created_at: now,
            updated_at: None,
            reminder_message: self.reminder_message,
            sound_name: self.sound_name,
            vibration_enabled: self.vibration_enabled,
            alert_type: self.alert_type,
            snooze_minutes,
            repeat_days: self.repeat_days,
            is_persistent: self.is_persistent,
            priority_level: self.priority_level,
            reminder_category: self.reminder_category,
            recipe_name: self.recipe_name,
            duration_minutes,
            estimated_completion,
            color_code: self.color_code,
            icon_name: self.icon_name,
            show_on_lock_screen: self.show_on_lock_screen,
            is_silent: self.is_silent,
            auto_delete_after_trigger: self.auto_delete_after_trigger,
            linked_timer_id: None,
            is_recurring: self.is_recurring,
            start_cooking_time: self.start_cooking_time.or(Some(fire_date)),
            end_cooking_time: self.end_cooking_time,
            kitchen_zone: self.kitchen_zone,
            assigned_user: self.assigned_user,
            display_order,
            location_context: self.location_context,
            notes: self.notes,
            completed: false,
        })
    }
}

impl NewMeasurementPreference {
    pub fn into_record(self) -> Result<MeasurementPreference, ValidationErrors> {
        self.into_record_at(Utc::now())
    }

    pub fn into_record_at(
        self,
        now: DateTime<Utc>,
    ) -> Result<MeasurementPreference, ValidationErrors> {
        let mut v = Validator::new();
        for (value, label) in [
            (&self.unit_system, "Unit System"),
            (&self.weight_unit, "Weight Unit"),
            (&self.volume_unit, "Volume Unit"),
            (&self.temperature_unit, "Temperature Unit"),
            (&self.preferred_language, "Preferred Language"),
            (&self.default_currency, "Default Currency"),
            (&self.rounding_mode, "Rounding Mode"),
            (&self.theme, "Theme"),
            (&self.temperature_display_format, "Temp Format"),
            (&self.ingredient_sort_option, "Sort Option"),
            (&self.recipe_display_mode, "Display Mode"),
            (&self.preferred_date_format, "Date Format"),
            (&self.color_scheme, "Color Scheme"),
            (&self.region, "Region"),
            (&self.app_version, "App Version"),
        ] {
            v.required(label, value);
        }
        v.int_in_range("Decimal Places", self.decimal_places, 0..=5);
        v.int_in_range("Conversion Precision", self.conversion_precision, 0..=5);
        v.number_in_range("Font Scale", self.font_scale, 0.5..=3.0);
        v.int_in_range("Haptic Level", self.haptic_level, 1..=5);
        v.int_in_range("Text Size", self.accessibility_text_size, 10..=30);
        v.int_in_range("Portion Size", self.default_portion_size, 1..=10);
        v.finish()?;

        Ok(MeasurementPreference {
            id: Uuid::new_v4(),
            unit_system: self.unit_system,
            decimal_places: self.decimal_places,
            weight_unit: self.weight_unit,
            volume_unit: self.volume_unit,
            temperature_unit: self.temperature_unit,
            pressure_unit: self.pressure_unit,
            preferred_language: self.preferred_language,
            default_currency: self.default_currency,
            rounding_mode: self.rounding_mode,
            conversion_precision: self.conversion_precision,
            auto_convert_enabled: self.auto_convert_enabled,
            show_fraction_units: self.show_fraction_units,
            display_abbreviations: self.display_abbreviations,
            font_scale: self.font_scale,
            theme: self.theme,
            show_tips: self.show_tips,
            quick_entry_mode: self.quick_entry_mode,
            include_scientific_units: self.include_scientific_units,
            temperature_display_format: self.temperature_display_format,
            ingredient_sort_option: self.ingredient_sort_option,
            recipe_display_mode: self.recipe_display_mode,
            remember_last_choice: self.remember_last_choice,
            vibration_feedback: self.vibration_feedback,
            haptic_level: self.haptic_level,
            preferred_date_format: self.preferred_date_format,
            color_scheme: self.color_scheme,
            accessibility_text_size: self.accessibility_text_size,
            high_contrast_enabled: self.high_contrast_enabled,
            auto_save_settings: self.auto_save_settings,
            default_portion_size: self.default_portion_size,
            use_local_formatting: self.use_local_formatting,
            region: self.region,
            backup_enabled: self.backup_enabled,
            last_updated: Some(now),
            app_version: self.app_version,
            developer_mode: self.developer_mode,
        })
    }
}

/// A form that validates into one kind of record.
pub trait Form: serde::de::DeserializeOwned {
    type Output: Record;

    fn validate(self) -> Result<Self::Output, ValidationErrors>;
}

impl Form for NewRecipe {
    type Output = Recipe;

    fn validate(self) -> Result<Recipe, ValidationErrors> {
        self.into_record()
    }
}

impl Form for NewIngredient {
    type Output = Ingredient;

    fn validate(self) -> Result<Ingredient, ValidationErrors> {
        self.into_record()
    }
}

impl Form for NewSearchQuery {
    type Output = SearchQuery;

    fn validate(self) -> Result<SearchQuery, ValidationErrors> {
        self.into_record()
    }
}

impl Form for NewFavoriteEntry {
    type Output = FavoriteEntry;

    fn validate(self) -> Result<FavoriteEntry, ValidationErrors> {
        self.into_record()
    }
}

impl Form for NewCookingReminder {
    type Output = CookingReminder;

    fn validate(self) -> Result<CookingReminder, ValidationErrors> {
        self.into_record()
    }
}

impl Form for NewMeasurementPreference {
    type Output = MeasurementPreference;

    fn validate(self) -> Result<MeasurementPreference, ValidationErrors> {
        self.into_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn recipe_form() -> NewRecipe {
        NewRecipe {
            title: "Tomato Soup".to_string(),
            summary: "Quick weeknight soup".to_string(),
            category: "Soup".to_string(),
            cuisine: "Italian".to_string(),
            difficulty: "Easy".to_string(),
            ingredients: "Tomatoes\n  Basil \n\nGarlic".to_string(),
            steps: "Chop\nSimmer".to_string(),
            prep_minutes: "10".to_string(),
            cook_minutes: "20".to_string(),
            servings: "4".to_string(),
            author: "Chef Anna".to_string(),
            notes: "Serve hot".to_string(),
            rating: "4.5".to_string(),
            calories: "180".to_string(),
            protein_grams: "5".to_string(),
            fat_grams: "7".to_string(),
            carbs_grams: "20".to_string(),
            tags: "vegetarian, quick,".to_string(),
            is_vegetarian: true,
            main_ingredient: "Tomatoes".to_string(),
            utensil_needed: "Pot".to_string(),
            temperature_celsius: "85".to_string(),
            image_name: "tomatoSoup".to_string(),
            video_link: "https://example.com/soup".to_string(),
            source: "Homemade".to_string(),
            region: "Europe".to_string(),
            flavor_profile: "Savory".to_string(),
            ..NewRecipe::default()
        }
    }

    #[test]
    fn test_recipe_total_minutes_is_prep_plus_cook() {
        let recipe = recipe_form().into_record().unwrap();
        assert_eq!(recipe.prep_minutes, 10);
        assert_eq!(recipe.cook_minutes, 20);
        assert_eq!(recipe.total_minutes, 30);
        assert_eq!(recipe.favorite_count, 0);
        assert!(recipe.last_cooked.is_none());
    }

    #[test]
    fn test_recipe_lists_are_split_and_trimmed() {
        let recipe = recipe_form().into_record().unwrap();
        assert_eq!(recipe.ingredients, vec!["Tomatoes", "Basil", "Garlic"]);
        assert_eq!(recipe.steps, vec!["Chop", "Simmer"]);
        assert_eq!(recipe.tags, vec!["vegetarian", "quick"]);
    }

    #[test]
    fn test_recipe_collects_every_error() {
        let form = NewRecipe {
            title: "   ".to_string(),
            prep_minutes: "ten".to_string(),
            rating: "great".to_string(),
            ..recipe_form()
        };
        let err = form.into_record().unwrap_err();
        assert!(err.contains("Title is required."));
        assert!(err.contains("Prep Minutes must be a non-negative whole number."));
        assert!(err.contains("Rating must be a number."));
        assert_eq!(err.messages().len(), 3);
    }

    #[test]
    fn test_recipe_total_minutes_overflow_is_reported() {
        let form = NewRecipe {
            prep_minutes: i64::MAX.to_string(),
            cook_minutes: "1".to_string(),
            ..recipe_form()
        };
        let err = form.into_record().unwrap_err();
        assert_eq!(err.messages(), ["Total Minutes is too large."]);
    }

    #[test]
    fn test_recipe_ids_are_unique() {
        let a = recipe_form().into_record().unwrap();
        let b = recipe_form().into_record().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_ingredient_allergen_type_required_only_for_allergens() {
        let base = NewIngredient {
            name: "Peanuts".to_string(),
            quantity: "200".to_string(),
            unit: "g".to_string(),
            calories_per_100g: "567".to_string(),
            cost_per_unit: "3.5".to_string(),
            density: "0.6".to_string(),
            shelf_life_days: "180".to_string(),
            ..NewIngredient::default()
        };
        assert!(base.clone().into_record().is_ok());

        let allergen = NewIngredient {
            is_allergen: true,
            ..base
        };
        let err = allergen.into_record().unwrap_err();
        assert_eq!(err.messages(), ["Allergen type is required."]);
    }

    #[test]
    fn test_ingredient_rejects_negative_numbers() {
        let form = NewIngredient {
            name: "Salt".to_string(),
            quantity: "1".to_string(),
            unit: "kg".to_string(),
            calories_per_100g: "-1".to_string(),
            cost_per_unit: "1".to_string(),
            density: "-0.5".to_string(),
            shelf_life_days: "365".to_string(),
            ..NewIngredient::default()
        };
        let err = form.into_record().unwrap_err();
        assert!(err.contains("Calories must be a non-negative whole number."));
        assert!(err.contains("Density must be a non-negative number."));
    }

    #[test]
    fn test_ingredient_used_in_recipes_starts_empty() {
        let form = NewIngredient {
            name: "Basil".to_string(),
            quantity: "1".to_string(),
            unit: "bunch".to_string(),
            calories_per_100g: "23".to_string(),
            cost_per_unit: "2".to_string(),
            density: "0.1".to_string(),
            shelf_life_days: "5".to_string(),
            rating: "not rated".to_string(),
            ..NewIngredient::default()
        };
        let ingredient = form.into_record().unwrap();
        assert!(ingredient.used_in_recipes.is_empty());
        assert_eq!(ingredient.rating, 0.0);
    }

    #[test]
    fn test_ingredient_non_finite_rating_is_zero() {
        for rating in ["NaN", "inf", "-infinity"] {
            let form = NewIngredient {
                name: "Basil".to_string(),
                quantity: "1".to_string(),
                unit: "bunch".to_string(),
                calories_per_100g: "23".to_string(),
                cost_per_unit: "2".to_string(),
                density: "0.1".to_string(),
                shelf_life_days: "5".to_string(),
                rating: rating.to_string(),
                ..NewIngredient::default()
            };
            let ingredient = form.into_record().unwrap();
            assert_eq!(ingredient.rating, 0.0, "rating {rating}");
        }
    }

    #[test]
    fn test_search_query_bounds() {
        let form = NewSearchQuery {
            text: "soup".to_string(),
            search_count: "0".to_string(),
            ..NewSearchQuery::default()
        };
        let err = form.into_record().unwrap_err();
        assert_eq!(
            err.messages(),
            ["Search Count must be a whole number (1 or greater)."]
        );
    }

    #[test]
    fn test_search_query_blank_cook_time_is_none() {
        let form = NewSearchQuery {
            text: "soup".to_string(),
            max_cook_time: String::new(),
            ..NewSearchQuery::default()
        };
        let query = form.into_record().unwrap();
        assert_eq!(query.max_cook_time, None);
        assert!(!query.cache_key.is_empty());
    }

    #[test]
    fn test_favorite_keeps_redundant_counters_independent() {
        let form = NewFavoriteEntry {
            recipe_name: "Tomato Soup".to_string(),
            custom_label: "Comfort".to_string(),
            author: "Chef Anna".to_string(),
            favorite_reason: "Cozy".to_string(),
            category: "Soup".to_string(),
            cuisine: "Italian".to_string(),
            difficulty_level: "Easy".to_string(),
            spice_level: "Mild".to_string(),
            flavor_profile: "Savory".to_string(),
            location_added: "Home".to_string(),
            source: "Homemade".to_string(),
            times_cooked: "8".to_string(),
            cook_count: "3".to_string(),
            prep_time: "10".to_string(),
            cook_time: "20".to_string(),
            total_time: "30".to_string(),
            rating: 4.0,
            rating_out_of_five: 5,
            ..NewFavoriteEntry::default()
        };
        let fav = form.into_record().unwrap();
        assert_eq!(fav.times_cooked, 8);
        assert_eq!(fav.cook_count, 3);
        assert_eq!(fav.rating, 4.0);
        assert_eq!(fav.rating_out_of_five, 5);
        assert!(fav.note.is_none());
    }

    #[test]
    fn test_reminder_estimated_completion() {
        let fire = Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap();
        let form = NewCookingReminder {
            title: "Start the soup".to_string(),
            recipe_name: "Tomato Soup".to_string(),
            fire_date: Some(fire),
            duration_minutes: "45".to_string(),
            ..NewCookingReminder::default()
        };
        let reminder = form.into_record().unwrap();
        assert_eq!(
            reminder.estimated_completion,
            Some(Utc.with_ymd_and_hms(2026, 3, 1, 18, 45, 0).unwrap())
        );
        assert_eq!(reminder.start_cooking_time, Some(fire));
        assert_eq!(reminder.repeat_interval_minutes, None);
        assert!(!reminder.completed);
    }

    #[test]
    fn test_reminder_huge_duration_is_rejected() {
        let form = NewCookingReminder {
            title: "Start the soup".to_string(),
            recipe_name: "Tomato Soup".to_string(),
            duration_minutes: "99999999999999".to_string(),
            ..NewCookingReminder::default()
        };
        let err = form.into_record().unwrap_err();
        assert!(err.contains("Duration Minutes must be 0-10080."));
        assert!(err.contains("Duration Minutes runs past the latest supported date."));
    }

    #[test]
    fn test_reminder_snooze_and_duration_ranges() {
        let form = NewCookingReminder {
            title: "Stir".to_string(),
            recipe_name: "Stew".to_string(),
            snooze_minutes: "-5".to_string(),
            duration_minutes: "-1".to_string(),
            ..NewCookingReminder::default()
        };
        let err = form.into_record().unwrap_err();
        assert_eq!(
            err.messages(),
            ["Snooze Minutes must be 0-1440.", "Duration Minutes must be 0-10080."]
        );

        let form = NewCookingReminder {
            title: "Stir".to_string(),
            recipe_name: "Stew".to_string(),
            snooze_minutes: "1440".to_string(),
            duration_minutes: "10080".to_string(),
            ..NewCookingReminder::default()
        };
        assert!(form.into_record().is_ok());
    }

    #[test]
    fn test_reminder_rejects_non_numeric_interval() {
        let form = NewCookingReminder {
            title: "Stir".to_string(),
            recipe_name: "Stew".to_string(),
            repeat_interval_minutes: "often".to_string(),
            ..NewCookingReminder::default()
        };
        let err = form.into_record().unwrap_err();
        assert_eq!(err.messages(), ["Repeat Interval must be a whole number."]);
    }

    #[test]
    fn test_measurement_preference_ranges() {
        let form = NewMeasurementPreference {
            region: "Pakistan".to_string(),
            decimal_places: 9,
            font_scale: 0.2,
            haptic_level: 0,
            ..NewMeasurementPreference::default()
        };
        let err = form.into_record().unwrap_err();
        assert_eq!(
            err.messages(),
            [
                "Decimal Places must be 0-5.",
                "Font Scale must be 0.5-3.0.",
                "Haptic Level must be 1-5.",
            ]
        );
    }

    #[test]
    fn test_measurement_preference_defaults_need_region() {
        let err = NewMeasurementPreference::default()
            .into_record()
            .unwrap_err();
        assert_eq!(err.messages(), ["Region is required."]);
    }

    #[test]
    fn test_validation_error_display_lists_messages() {
        let mut v = Validator::new();
        v.required("Name", "");
        v.required("Unit", " ");
        let err = v.finish().unwrap_err();
        assert_eq!(
            err.to_string(),
            "please correct the following:\n• Name is required.\n• Unit is required."
        );
    }

    #[test]
    fn test_split_helpers() {
        assert_eq!(split_list(" a, ,b ,"), vec!["a", "b"]);
        assert_eq!(split_lines("x\n\n y \n"), vec!["x", "y"]);
        assert!(split_list("").is_empty());
    }
}
