use tabled::Tabled;

use soupify_core::models::{
    CookingReminder, FavoriteEntry, Ingredient, MeasurementPreference, Recipe, Record, SearchQuery,
};

use super::helpers::{fmt_time, truncate, yes_no};

/// How a record kind appears in `list` tables and one-line messages.
pub(crate) trait Listing: Record {
    type Row: Tabled;

    /// `position` is the 1-based position shown in the `#` column.
    fn row(&self, position: usize) -> Self::Row;

    fn headline(&self) -> String;
}

#[derive(Tabled)]
pub(crate) struct RecipeRow {
    #[tabled(rename = "#")]
    idx: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Cuisine")]
    cuisine: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

impl Listing for Recipe {
    type Row = RecipeRow;

    fn row(&self, position: usize) -> RecipeRow {
        let total = self.total_minutes;
        let rating = self.rating;
        RecipeRow {
            idx: position,
            title: truncate(&self.title, 35),
            cuisine: truncate(&self.cuisine, 15),
            category: truncate(&self.category, 15),
            time: format!("{total} min"),
            rating: format!("{rating:.1}"),
        }
    }

    fn headline(&self) -> String {
        self.title.clone()
    }
}

#[derive(Tabled)]
pub(crate) struct IngredientRow {
    #[tabled(rename = "#")]
    idx: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Supplier")]
    supplier: String,
    #[tabled(rename = "Allergen")]
    allergen: String,
}

impl Listing for Ingredient {
    type Row = IngredientRow;

    fn row(&self, position: usize) -> IngredientRow {
        let quantity = &self.quantity;
        let unit = &self.unit;
        IngredientRow {
            idx: position,
            name: truncate(&self.name, 30),
            quantity: format!("{quantity} {unit}").trim().to_string(),
            category: truncate(&self.category, 15),
            supplier: truncate(&self.supplier, 20),
            allergen: if self.is_allergen {
                self.allergen_type.clone()
            } else {
                "-".to_string()
            },
        }
    }

    fn headline(&self) -> String {
        self.name.clone()
    }
}

#[derive(Tabled)]
pub(crate) struct SearchQueryRow {
    #[tabled(rename = "#")]
    idx: usize,
    #[tabled(rename = "Text")]
    text: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Cuisine")]
    cuisine: String,
    #[tabled(rename = "Max time")]
    max_cook_time: String,
    #[tabled(rename = "Saved")]
    saved_at: String,
}

impl Listing for SearchQuery {
    type Row = SearchQueryRow;

    fn row(&self, position: usize) -> SearchQueryRow {
        SearchQueryRow {
            idx: position,
            text: truncate(&self.text, 35),
            category: truncate(&self.category_filter, 15),
            cuisine: truncate(&self.cuisine_filter, 15),
            max_cook_time: self
                .max_cook_time
                .map_or("-".into(), |m| format!("{m} min")),
            saved_at: fmt_time(&self.saved_at),
        }
    }

    fn headline(&self) -> String {
        self.text.clone()
    }
}

#[derive(Tabled)]
pub(crate) struct FavoriteRow {
    #[tabled(rename = "#")]
    idx: usize,
    #[tabled(rename = "Recipe")]
    recipe_name: String,
    #[tabled(rename = "Label")]
    custom_label: String,
    #[tabled(rename = "Cuisine")]
    cuisine: String,
    #[tabled(rename = "Stars")]
    stars: String,
    #[tabled(rename = "Cooked")]
    times_cooked: i64,
}

impl Listing for FavoriteEntry {
    type Row = FavoriteRow;

    fn row(&self, position: usize) -> FavoriteRow {
        FavoriteRow {
            idx: position,
            recipe_name: truncate(&self.recipe_name, 30),
            custom_label: truncate(&self.custom_label, 15),
            cuisine: truncate(&self.cuisine, 15),
            stars: format!("{}/5", self.rating_out_of_five),
            times_cooked: self.times_cooked,
        }
    }

    fn headline(&self) -> String {
        self.recipe_name.clone()
    }
}

#[derive(Tabled)]
pub(crate) struct ReminderRow {
    #[tabled(rename = "#")]
    idx: usize,
    #[tabled(rename = "Fires")]
    fire_date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Recipe")]
    recipe_name: String,
    #[tabled(rename = "Active")]
    active: String,
    #[tabled(rename = "Done")]
    completed: String,
}

impl Listing for CookingReminder {
    type Row = ReminderRow;

    fn row(&self, position: usize) -> ReminderRow {
        ReminderRow {
            idx: position,
            fire_date: fmt_time(&self.fire_date),
            title: truncate(&self.title, 35),
            recipe_name: truncate(&self.recipe_name, 25),
            active: yes_no(self.is_active).to_string(),
            completed: yes_no(self.completed).to_string(),
        }
    }

    fn headline(&self) -> String {
        let title = &self.title;
        let when = fmt_time(&self.fire_date);
        format!("{title} ({when})")
    }
}

#[derive(Tabled)]
pub(crate) struct PreferenceRow {
    #[tabled(rename = "#")]
    idx: usize,
    #[tabled(rename = "Units")]
    unit_system: String,
    #[tabled(rename = "Weight")]
    weight_unit: String,
    #[tabled(rename = "Volume")]
    volume_unit: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Theme")]
    theme: String,
    #[tabled(rename = "Region")]
    region: String,
}

impl Listing for MeasurementPreference {
    type Row = PreferenceRow;

    fn row(&self, position: usize) -> PreferenceRow {
        PreferenceRow {
            idx: position,
            unit_system: self.unit_system.clone(),
            weight_unit: self.weight_unit.clone(),
            volume_unit: self.volume_unit.clone(),
            language: truncate(&self.preferred_language, 15),
            theme: self.theme.clone(),
            region: truncate(&self.region, 20),
        }
    }

    fn headline(&self) -> String {
        let system = &self.unit_system;
        let region = &self.region;
        format!("{system} ({region})")
    }
}
