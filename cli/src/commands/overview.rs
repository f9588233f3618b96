use anyhow::{Context, Result};
use std::path::Path;
use tabled::{Table, Tabled, settings::Style};

use soupify_core::models::{RecordKind, StoreSummary};
use soupify_core::service::SoupService;

use super::helpers::{fmt_time, print_json};

pub(crate) fn cmd_dashboard(service: &SoupService, json: bool) -> Result<()> {
    let summary = service.summary();
    if json {
        return print_json(&summary);
    }

    #[derive(Tabled)]
    struct CountRow {
        #[tabled(rename = "Collection")]
        kind: String,
        #[tabled(rename = "Records")]
        count: usize,
    }

    let rows: Vec<CountRow> = counts(&summary)
        .into_iter()
        .map(|(kind, count)| CountRow {
            kind: kind.label().to_string(),
            count,
        })
        .collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    match &summary.next_reminder {
        Some(r) => {
            let title = &r.title;
            let when = fmt_time(&r.fire_date);
            println!("\nNext reminder: {title} at {when}");
        }
        None => println!("\nNo upcoming reminders."),
    }
    Ok(())
}

fn counts(summary: &StoreSummary) -> [(RecordKind, usize); 6] {
    [
        (RecordKind::Recipe, summary.recipes),
        (RecordKind::Ingredient, summary.ingredients),
        (RecordKind::SearchQuery, summary.search_queries),
        (RecordKind::FavoriteEntry, summary.favorites),
        (RecordKind::CookingReminder, summary.reminders),
        (RecordKind::MeasurementPreference, summary.measurement_prefs),
    ]
}

pub(crate) fn cmd_seed(service: &mut SoupService, json: bool) -> Result<()> {
    let seeded = service.seed();
    if json {
        println!("{}", serde_json::json!({ "seeded": seeded }));
    } else if seeded {
        println!("Added sample records to every collection.");
    } else {
        println!("Recipes already exist; nothing seeded.");
    }
    Ok(())
}

/// The snapshot is always JSON. `json` only changes the confirmation line
/// printed after writing to `out`.
pub(crate) fn cmd_export(service: &SoupService, out: Option<&Path>, json: bool) -> Result<()> {
    let snapshot = service.export();
    let Some(path) = out else {
        return print_json(&snapshot);
    };

    let body = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, body)
        .with_context(|| format!("Failed to write export: {}", path.display()))?;

    let total = snapshot.recipes.len()
        + snapshot.ingredients.len()
        + snapshot.search_queries.len()
        + snapshot.favorites.len()
        + snapshot.reminders.len()
        + snapshot.measurement_prefs.len();
    if json {
        println!(
            "{}",
            serde_json::json!({ "path": path.display().to_string(), "records": total })
        );
    } else {
        println!("Exported {total} records to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soupify_core::models::Snapshot;

    #[test]
    fn test_export_writes_snapshot_file() {
        let service = SoupService::open_in_memory().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        cmd_export(&service, Some(&path), false).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let snapshot: Snapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(snapshot.recipes.len(), 1);
        assert_eq!(snapshot.recipes[0].title, "Creamy Tomato Basil Soup");
    }

    #[test]
    fn test_export_json_flag_does_not_change_file() {
        let service = SoupService::open_in_memory().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.json");
        let flagged = dir.path().join("flagged.json");

        cmd_export(&service, Some(&plain), false).unwrap();
        cmd_export(&service, Some(&flagged), true).unwrap();

        let read = |path: &Path| -> serde_json::Value {
            let mut value: serde_json::Value =
                serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
            value.as_object_mut().unwrap().remove("exportedAt");
            value
        };
        assert_eq!(read(&plain), read(&flagged));
    }

    #[test]
    fn test_counts_follow_kind_order() {
        let service = SoupService::open_in_memory().unwrap();
        let summary = service.summary();
        let counts = counts(&summary);
        assert_eq!(counts[0], (RecordKind::Recipe, 1));
        assert_eq!(counts[5], (RecordKind::MeasurementPreference, 1));
    }
}
