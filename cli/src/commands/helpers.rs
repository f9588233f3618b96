use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use soupify_core::validation::ValidationErrors;

/// Read a JSON form from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_form<F: DeserializeOwned>(path: &Path) -> Result<F> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read form from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read form file: {}", path.display()))?
    };
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid form JSON in {}", path.display()))
}

/// Print every validation message and exit with status 2.
pub(crate) fn exit_invalid(err: &ValidationErrors, json: bool) -> ! {
    if json {
        #[derive(Serialize)]
        struct Invalid<'a> {
            error: &'a str,
            messages: &'a [String],
        }
        let body = Invalid {
            error: "validation failed",
            messages: err.messages(),
        };
        println!(
            "{}",
            serde_json::to_string(&body).unwrap_or_else(|_| json_error("validation failed"))
        );
    } else {
        eprintln!("{err}");
    }
    process::exit(2);
}

/// Convert 1-based list positions to view indices, dropping 0.
pub(crate) fn to_indices(positions: &[usize]) -> Vec<usize> {
    positions.iter().filter_map(|p| p.checked_sub(1)).collect()
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render one field of a record for the `show` view.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(b) => yes_no(*b).to_string(),
        Value::String(s) if s.is_empty() => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => "-".to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Turn a camelCase wire key into a spaced label: `prepMinutes` → `Prep minutes`.
pub(crate) fn label_for(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub(crate) fn fmt_time(t: &DateTime<Utc>) -> String {
    t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

pub(crate) fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

pub(crate) fn json_error(message: &str) -> String {
    #[derive(Serialize)]
    struct CliError<'a> {
        error: &'a str,
    }
    serde_json::to_string(&CliError { error: message })
        .unwrap_or_else(|_| format!("{{\"error\":\"{message}\"}}"))
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let end = s.char_indices().nth(max - 3).map_or(s.len(), |(i, _)| i);
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_indices_skips_zero() {
        assert_eq!(to_indices(&[1, 0, 3]), vec![0, 2]);
        assert!(to_indices(&[]).is_empty());
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&Value::Null), "-");
        assert_eq!(display_value(&json!(true)), "yes");
        assert_eq!(display_value(&json!("")), "-");
        assert_eq!(display_value(&json!(["Basil", "Cream"])), "Basil, Cream");
        assert_eq!(display_value(&json!(4.8)), "4.8");
        assert_eq!(display_value(&json!(30)), "30");
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for("prepMinutes"), "Prep minutes");
        assert_eq!(label_for("title"), "Title");
        assert_eq!(label_for("caloriesPer100g"), "Calories per100g");
    }

    #[test]
    fn test_read_form_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        std::fs::write(&path, r#"{"name": "Leek", "quantity": "2"}"#).unwrap();
        let form: soupify_core::models::NewIngredient = read_form(&path).unwrap();
        assert_eq!(form.name, "Leek");
        assert_eq!(form.quantity, "2");
        assert!(form.unit.is_empty());
    }

    #[test]
    fn test_read_form_missing_file() {
        let err = read_form::<Value>(Path::new("/nonexistent/form.json")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read form file"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world this is long", 10), "hello w...");
    }

    #[test]
    fn test_truncate_utf8() {
        assert_eq!(truncate("Crème fraîche", 10), "Crème f...");
        assert_eq!(truncate("日清カップヌードル", 8), "日清カップ...");
    }
}
