use anyhow::{Result, bail};
use serde::Serialize;
use std::path::Path;
use tabled::{Table, settings::Style};
use uuid::Uuid;

use soupify_core::models::Record;
use soupify_core::service::SoupService;
use soupify_core::validation::Form;

use super::helpers::{display_value, exit_invalid, label_for, print_json, read_form, to_indices};
use super::listing::Listing;

pub(crate) fn cmd_add<F>(service: &mut SoupService, form_path: &Path, json: bool) -> Result<()>
where
    F: Form,
    F::Output: Listing,
{
    let form: F = read_form(form_path)?;
    let record = match service.submit(form) {
        Ok(record) => record,
        Err(e) => exit_invalid(&e, json),
    };

    if json {
        print_json(&record)?;
    } else {
        let kind = <F::Output as Record>::KIND;
        let headline = record.headline();
        let id = record.id();
        println!("Added to {kind}: {headline} (id: {id})");
    }
    Ok(())
}

pub(crate) fn cmd_list<T: Listing>(
    service: &SoupService,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let view = service.search::<T>(search.unwrap_or(""));

    if json {
        return print_json(&view);
    }

    if view.is_empty() {
        match search {
            Some(term) => println!("No {} match '{term}'.", T::KIND),
            None => println!("No {} yet.", T::KIND),
        }
        return Ok(());
    }

    let rows: Vec<T::Row> = view.iter().enumerate().map(|(i, r)| r.row(i + 1)).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    Ok(())
}

pub(crate) fn cmd_show<T: Listing>(service: &SoupService, id: Uuid, json: bool) -> Result<()> {
    let Some(record) = service.get::<T>(id) else {
        bail!("No {} entry with id {id}", T::KIND);
    };

    if json {
        return print_json(record);
    }

    print_fields(record)?;
    Ok(())
}

fn print_fields<T: Serialize>(record: &T) -> Result<()> {
    let value = serde_json::to_value(record)?;
    let Some(fields) = value.as_object() else {
        bail!("Record did not serialize to an object");
    };
    let width = fields.keys().map(|k| label_for(k).len()).max().unwrap_or(0);
    for (key, field) in fields {
        let label = label_for(key);
        let shown = display_value(field);
        println!("{label:<width$}  {shown}");
    }
    Ok(())
}

pub(crate) fn cmd_delete<T: Listing>(
    service: &mut SoupService,
    positions: &[usize],
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let term = search.unwrap_or("");
    let removed = service.delete_visible::<T>(term, &to_indices(positions));

    if json {
        println!("{}", serde_json::json!({ "deleted": removed }));
    } else if removed == 0 {
        println!("Nothing deleted: no {} at those positions.", T::KIND);
    } else {
        println!("Deleted {removed} from {}.", T::KIND);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use soupify_core::db::Database;
    use soupify_core::models::{NewRecipe, Recipe};
    use soupify_core::seed;
    use soupify_core::store::StoreOptions;

    fn service_with_recipes(titles: &[&str]) -> SoupService {
        let db = Database::open_in_memory().unwrap();
        let mut service = SoupService::with_storage(
            db,
            StoreOptions {
                seed_on_empty: false,
                ..StoreOptions::default()
            },
        );
        let now = Utc::now();
        for title in titles {
            let mut r = seed::sample_recipe(now);
            r.id = Uuid::new_v4();
            r.title = (*title).to_string();
            r.summary = String::new();
            r.ingredients = Vec::new();
            service.store_mut().add(r);
        }
        service
    }

    fn titles(service: &SoupService) -> Vec<String> {
        service
            .store()
            .recipes()
            .iter()
            .map(|r| r.title.clone())
            .collect()
    }

    #[test]
    fn test_delete_with_search_uses_filtered_positions() {
        let mut service = service_with_recipes(&["Tomato Soup", "Lentil Dal", "Tomato Rasam"]);

        // Position 2 among the "tomato" matches is the third stored recipe.
        cmd_delete::<Recipe>(&mut service, &[2], Some("tomato"), false).unwrap();

        assert_eq!(titles(&service), vec!["Tomato Soup", "Lentil Dal"]);
    }

    #[test]
    fn test_delete_ignores_zero_and_out_of_range_positions() {
        let mut service = service_with_recipes(&["Tomato Soup", "Lentil Dal"]);
        cmd_delete::<Recipe>(&mut service, &[0, 9], None, true).unwrap();
        assert_eq!(titles(&service).len(), 2);
    }

    #[test]
    fn test_list_and_show_read_without_mutating() {
        let service = service_with_recipes(&["Tomato Soup"]);
        cmd_list::<Recipe>(&service, None, false).unwrap();
        cmd_list::<Recipe>(&service, Some("nothing matches"), false).unwrap();
        cmd_list::<Recipe>(&service, Some("TOMATO"), true).unwrap();

        let id = service.store().recipes()[0].id;
        cmd_show::<Recipe>(&service, id, false).unwrap();
        assert!(cmd_show::<Recipe>(&service, Uuid::new_v4(), false).is_err());
        assert_eq!(titles(&service), vec!["Tomato Soup"]);
    }

    #[test]
    fn test_add_reads_form_file() {
        let mut service = service_with_recipes(&[]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipe.json");
        let form = serde_json::json!({
            "title": "Pumpkin Soup",
            "summary": "Autumn bowl",
            "author": "Sam",
            "cuisine": "French",
            "mainIngredient": "Pumpkin",
            "utensilNeeded": "Blender",
            "imageName": "pumpkin",
            "source": "Notebook",
            "ingredients": "Pumpkin\nStock",
            "steps": "Roast\nBlend",
            "notes": "Add cream",
            "region": "Europe",
            "flavorProfile": "Sweet",
            "videoLink": "https://example.com/pumpkin",
            "prepMinutes": "15",
            "cookMinutes": "40",
            "servings": "4",
            "rating": "4",
            "calories": "210",
            "proteinGrams": "3",
            "fatGrams": "9",
            "carbsGrams": "25",
            "temperatureCelsius": "80"
        });
        std::fs::write(&path, form.to_string()).unwrap();

        cmd_add::<NewRecipe>(&mut service, &path, false).unwrap();

        let recipes = service.store().recipes();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Pumpkin Soup");
        assert_eq!(recipes[0].total_minutes, 55);
    }

    #[test]
    fn test_add_rejects_malformed_form_file() {
        let mut service = service_with_recipes(&[]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipe.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(cmd_add::<NewRecipe>(&mut service, &path, false).is_err());
        assert!(service.store().recipes().is_empty());
    }
}
