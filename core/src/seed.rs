//! Sample records inserted into an empty store so a first run has something
//! to show in every list.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::{
    CookingReminder, FavoriteEntry, Ingredient, MeasurementPreference, Recipe, SearchQuery,
};
use crate::store::Collections;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[must_use]
pub fn sample_recipe(now: DateTime<Utc>) -> Recipe {
    Recipe {
        id: Uuid::new_v4(),
        title: "Creamy Tomato Basil Soup".to_string(),
        summary: "A smooth and tangy classic comfort soup.".to_string(),
        category: "Vegetarian".to_string(),
        cuisine: "Italian".to_string(),
        difficulty: "Easy".to_string(),
        ingredients: strings(&["Tomatoes", "Basil", "Cream", "Garlic"]),
        steps: strings(&["Blend tomatoes", "Simmer with cream", "Add basil"]),
        prep_minutes: 10,
        cook_minutes: 20,
        total_minutes: 30,
        servings: 4,
        author: "Chef Anna".to_string(),
        created_at: now,
        updated_at: None,
        notes: "Best served with garlic bread.".to_string(),
        rating: 4.8,
        calories: 180,
        protein_grams: 5.0,
        fat_grams: 7.0,
        carbs_grams: 20.0,
        tags: strings(&["vegetarian", "creamy", "comfort"]),
        is_vegetarian: true,
        is_vegan: false,
        is_gluten_free: true,
        is_dairy_free: false,
        main_ingredient: "Tomatoes".to_string(),
        utensil_needed: "Blender".to_string(),
        temperature_celsius: 85.0,
        image_name: "tomatoSoup".to_string(),
        video_link: "https://example.com/tomatosoup".to_string(),
        source: "Homemade".to_string(),
        region: "Europe".to_string(),
        flavor_profile: "Savory".to_string(),
        cost_estimate: "Low".to_string(),
        favorite_count: 12,
        last_cooked: None,
    }
}

#[must_use]
pub fn sample_ingredient(now: DateTime<Utc>) -> Ingredient {
    Ingredient {
        id: Uuid::new_v4(),
        name: "Tomato".to_string(),
        quantity: "3".to_string(),
        unit: "pcs".to_string(),
        category: "Vegetable".to_string(),
        freshness_level: "Fresh".to_string(),
        supplier: "Local Market".to_string(),
        origin: "Pakistan".to_string(),
        purchase_date: None,
        expiry_date: None,
        storage_location: "Pantry".to_string(),
        tags: strings(&["vegetarian"]),
        calories_per_100g: 18,
        cost_per_unit: 10.0,
        is_organic: true,
        is_local: true,
        is_allergen: false,
        allergen_type: String::new(),
        replacement_suggestions: strings(&["Canned Tomato"]),
        color: "Red".to_string(),
        texture: "Smooth".to_string(),
        aroma: "Mild".to_string(),
        taste: "Tangy".to_string(),
        used_in_recipes: Vec::new(),
        preferred_brand: "N/A".to_string(),
        moisture_level: "High".to_string(),
        density: 0.9,
        nutrition_grade: "A".to_string(),
        seasonality: "Summer".to_string(),
        handling_tips: "Wash before use.".to_string(),
        preparation_steps: strings(&["Chop finely"]),
        rating: 4.9,
        last_updated: Some(now),
        barcode: "1234567890".to_string(),
        shelf_life_days: 7,
        availability_status: "Available".to_string(),
    }
}

#[must_use]
pub fn sample_search_query(now: DateTime<Utc>) -> SearchQuery {
    SearchQuery {
        id: Uuid::new_v4(),
        text: "Tomato Soup".to_string(),
        ingredient_filters: strings(&["Tomato"]),
        max_cook_time: Some(30),
        min_rating: 4.0,
        max_calories: 250,
        category_filter: "Vegetarian".to_string(),
        cuisine_filter: "Italian".to_string(),
        is_vegetarian_only: true,
        is_vegan_only: false,
        include_gluten_free: true,
        include_dairy_free: false,
        sort_option: "rating".to_string(),
        sort_order: "desc".to_string(),
        show_favorites_only: false,
        include_tags: strings(&["creamy"]),
        exclude_tags: Vec::new(),
        saved_at: now,
        last_used: None,
        search_count: 3,
        total_results: 5,
        recent_result_titles: strings(&["Creamy Tomato Soup"]),
        is_advanced_mode: false,
        time_range_label: "Quick".to_string(),
        difficulty_level: "Easy".to_string(),
        author_filter: "Chef Anna".to_string(),
        region_filter: "Europe".to_string(),
        keyword_match_type: "exact".to_string(),
        auto_suggestions_enabled: true,
        last_used_device: "iPhone 15".to_string(),
        language: "en".to_string(),
        temperature_unit: "Celsius".to_string(),
        favorite_only: false,
        user_note: "Try new version with garlic.".to_string(),
        include_images: true,
        show_quick_recipes: true,
        filter_group: "Default".to_string(),
        cache_key: "query_tomatoSoup".to_string(),
    }
}

#[must_use]
pub fn sample_favorite(recipe: &Recipe, now: DateTime<Utc>) -> FavoriteEntry {
    FavoriteEntry {
        id: Uuid::new_v4(),
        recipe_id: recipe.id,
        added_at: now,
        note: Some("All-time favorite soup.".to_string()),
        rating: 5.0,
        times_cooked: 8,
        custom_label: "Comfort".to_string(),
        mood_tag: "Relaxed".to_string(),
        shared_with_friends: false,
        bookmarked_at: None,
        image_preview: "tomatoSoup".to_string(),
        last_cooked: None,
        category: "Vegetarian".to_string(),
        cuisine: "Italian".to_string(),
        is_weekly_favorite: true,
        is_seasonal_pick: false,
        is_healthy_choice: true,
        author: "Chef Anna".to_string(),
        preparation_tips: "Blend longer for smoother texture.".to_string(),
        nutrition_summary: "Low fat, moderate carbs".to_string(),
        cook_count: 8,
        last_modified: None,
        recipe_name: recipe.title.clone(),
        spice_level: "Mild".to_string(),
        flavor_profile: "Savory".to_string(),
        favorite_reason: "Comfort food".to_string(),
        difficulty_level: "Easy".to_string(),
        prep_time: 10,
        cook_time: 20,
        total_time: 30,
        rating_out_of_five: 5,
        location_added: "Home Kitchen".to_string(),
        source: "Homemade".to_string(),
        backup_status: "Saved".to_string(),
        review_text: "Always turns out perfect!".to_string(),
        shared_date: None,
        mood_when_cooked: "Happy".to_string(),
    }
}

#[must_use]
pub fn sample_reminder(recipe: &Recipe, now: DateTime<Utc>) -> CookingReminder {
    let fire_date = now + Duration::hours(1);
    CookingReminder {
        id: Uuid::new_v4(),
        recipe_id: recipe.id,
        title: "Start simmering Tomato Soup".to_string(),
        fire_date,
        repeat_interval_minutes: None,
        is_active: true,
        created_at: now,
        updated_at: None,
        reminder_message: "Don't forget to stir occasionally!".to_string(),
        sound_name: "chime".to_string(),
        vibration_enabled: true,
        alert_type: "standard".to_string(),
        snooze_minutes: 10,
        repeat_days: Vec::new(),
        is_persistent: false,
        priority_level: "medium".to_string(),
        reminder_category: "Cooking".to_string(),
        recipe_name: "Tomato Soup".to_string(),
        duration_minutes: 20,
        estimated_completion: Some(fire_date + Duration::minutes(20)),
        color_code: "red".to_string(),
        icon_name: "timer".to_string(),
        show_on_lock_screen: true,
        is_silent: false,
        auto_delete_after_trigger: true,
        linked_timer_id: None,
        is_recurring: false,
        start_cooking_time: None,
        end_cooking_time: None,
        kitchen_zone: "Stovetop".to_string(),
        assigned_user: "Self".to_string(),
        display_order: 1,
        location_context: "Home Kitchen".to_string(),
        notes: "Add basil near the end.".to_string(),
        completed: false,
    }
}

#[must_use]
pub fn sample_measurement_preference(now: DateTime<Utc>) -> MeasurementPreference {
    MeasurementPreference {
        id: Uuid::new_v4(),
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
        region: "Pakistan".to_string(),
        backup_enabled: true,
        last_updated: Some(now),
        app_version: "1.0".to_string(),
        developer_mode: false,
    }
}

/// One record per collection; the favorite and reminder point at the recipe.
#[must_use]
pub fn sample_collections(now: DateTime<Utc>) -> Collections {
    let recipe = sample_recipe(now);
    Collections {
        favorites: vec![sample_favorite(&recipe, now)],
        reminders: vec![sample_reminder(&recipe, now)],
        ingredients: vec![sample_ingredient(now)],
        search_queries: vec![sample_search_query(now)],
        measurement_prefs: vec![sample_measurement_preference(now)],
        recipes: vec![recipe],
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn round_trip<T>(record: &T) -> T
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        let json = serde_json::to_string(record).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_every_sample_round_trips_through_json() {
        let sample = sample_collections(Utc::now());
        assert_eq!(round_trip(&sample.recipes), sample.recipes);
        assert_eq!(round_trip(&sample.ingredients), sample.ingredients);
        assert_eq!(round_trip(&sample.search_queries), sample.search_queries);
        assert_eq!(round_trip(&sample.favorites), sample.favorites);
        assert_eq!(round_trip(&sample.reminders), sample.reminders);
        assert_eq!(
            round_trip(&sample.measurement_prefs),
            sample.measurement_prefs
        );
    }

    #[test]
    fn test_fractional_floats_survive_json_exactly() {
        let now = Utc::now();
        let recipes: Vec<Recipe> = (1..500)
            .map(|n| {
                let mut r = sample_recipe(now);
                r.id = Uuid::new_v4();
                r.protein_grams = f64::from(n) / 7.0;
                r.rating = f64::from(n) * 0.1 + 1e-9;
                r.temperature_celsius = 1.0 / f64::from(n);
                r
            })
            .collect();
        assert_eq!(round_trip(&recipes), recipes);
    }

    #[test]
    fn test_wire_keys_are_camel_case_with_explicit_nulls() {
        let now = Utc::now();
        let recipe = sample_recipe(now);
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["totalMinutes"], Value::from(30));
        assert_eq!(value["isGlutenFree"], Value::Bool(true));
        assert_eq!(value["lastCooked"], Value::Null);
        assert_eq!(value["id"], Value::String(recipe.id.to_string()));

        let reminder = serde_json::to_value(sample_reminder(&recipe, now)).unwrap();
        assert_eq!(reminder["repeatIntervalMinutes"], Value::Null);
        assert_eq!(reminder["recipeId"], Value::String(recipe.id.to_string()));
    }

    #[test]
    fn test_sample_links_point_at_sample_recipe() {
        let sample = sample_collections(Utc::now());
        let recipe_id = sample.recipes[0].id;
        assert_eq!(sample.favorites[0].recipe_id, recipe_id);
        assert_eq!(sample.reminders[0].recipe_id, recipe_id);
        assert_eq!(sample.favorites[0].recipe_name, "Creamy Tomato Basil Soup");
    }

    #[test]
    fn test_sample_reminder_fires_in_an_hour() {
        let now = Utc::now();
        let reminder = sample_reminder(&sample_recipe(now), now);
        assert_eq!(reminder.fire_date - now, Duration::hours(1));
        assert_eq!(
            reminder.estimated_completion,
            Some(reminder.fire_date + Duration::minutes(20))
        );
    }
}
