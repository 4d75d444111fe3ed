//! Development recipe management
//!
//! Load, save, and list film/developer combination recipes stored as YAML
//! files in the user's recipe directory.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A film/developer combination with its development parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposureRecipe {
    /// Recipe name (e.g. "Tri-X in HC-110 dil. B")
    pub name: String,

    /// Film stock (e.g. "Kodak Tri-X 400")
    pub film: String,

    /// Developer (e.g. "Kodak HC-110")
    pub developer: String,

    /// Dilution (e.g. "1:31")
    pub dilution: String,

    /// ISO the film was shot at
    #[serde(default = "default_shooting_iso")]
    pub shooting_iso: u32,

    /// Development time in minutes
    pub time_minutes: f64,

    /// Developer temperature in degrees Fahrenheit
    #[serde(default = "default_temperature_f")]
    pub temperature_f: f64,

    /// Agitation schedule (e.g. "30s initial, 3 inversions/min")
    #[serde(default)]
    pub agitation: Option<String>,

    /// Stops pushed (positive) or pulled (negative)
    #[serde(default)]
    pub push_pull: i32,

    /// Optional notes
    pub notes: Option<String>,
}

pub(crate) fn default_shooting_iso() -> u32 {
    400
}

pub(crate) fn default_temperature_f() -> f64 {
    68.0
}

impl Default for ExposureRecipe {
    fn default() -> Self {
        Self {
            name: "New recipe".to_string(),
            film: "Kodak Tri-X 400".to_string(),
            developer: "Kodak D-76".to_string(),
            dilution: "1:1".to_string(),
            shooting_iso: default_shooting_iso(),
            time_minutes: 9.75,
            temperature_f: default_temperature_f(),
            agitation: None,
            push_pull: 0,
            notes: None,
        }
    }
}

/// Validate a recipe name to prevent path traversal attacks.
/// Rejects names containing path separators, "..", or other dangerous patterns.
pub fn validate_recipe_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Recipe name cannot be empty".to_string());
    }

    // Reject path separators
    if name.contains('/') || name.contains('\\') {
        return Err("Recipe name cannot contain path separators".to_string());
    }

    // Reject parent directory references
    if name.contains("..") {
        return Err("Recipe name cannot contain '..'".to_string());
    }

    // Reject names that start with a dot (hidden files)
    if name.starts_with('.') {
        return Err("Recipe name cannot start with '.'".to_string());
    }

    // Reject null bytes
    if name.contains('\0') {
        return Err("Recipe name cannot contain null bytes".to_string());
    }

    Ok(())
}

/// Load a recipe from a YAML file
pub fn load_recipe<P: AsRef<Path>>(path: P) -> Result<ExposureRecipe, String> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read recipe file: {}", e))?;

    serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse recipe YAML: {}", e))
}

/// Save a recipe to a YAML file
pub fn save_recipe<P: AsRef<Path>>(recipe: &ExposureRecipe, path: P) -> Result<(), String> {
    let path = path.as_ref();
    let yaml =
        serde_yaml::to_string(recipe).map_err(|e| format!("Failed to serialize recipe: {}", e))?;

    std::fs::write(path, yaml).map_err(|e| format!("Failed to write recipe file: {}", e))
}

/// List all available recipes in a directory
pub fn list_recipes<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, String> {
    let dir = dir.as_ref();
    let mut recipes = Vec::new();

    let entries =
        std::fs::read_dir(dir).map_err(|e| format!("Failed to read recipes directory: {}", e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) == Some("yml")
            || path.extension().and_then(|e| e.to_str()) == Some("yaml")
        {
            if let Some(name) = path.file_stem().and_then(|n| n.to_str()) {
                recipes.push(name.to_string());
            }
        }
    }

    recipes.sort();
    Ok(recipes)
}

/// Get the default recipes directory
pub fn get_recipes_dir() -> Result<std::path::PathBuf, String> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| "Could not determine home directory".to_string())?;

    let recipes_dir = home_dir.join("dorkroom").join("recipes");

    // Create directory if it doesn't exist
    if !recipes_dir.exists() {
        std::fs::create_dir_all(&recipes_dir)
            .map_err(|e| format!("Failed to create recipes directory: {}", e))?;
    }

    Ok(recipes_dir)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_recipe_name() {
        assert!(validate_recipe_name("tri-x_d76").is_ok());
        assert!(validate_recipe_name("").is_err());
        assert!(validate_recipe_name("a/b").is_err());
        assert!(validate_recipe_name("a\\b").is_err());
        assert!(validate_recipe_name("..").is_err());
        assert!(validate_recipe_name(".hidden").is_err());
        assert!(validate_recipe_name("nul\0byte").is_err());
    }

    #[test]
    fn test_recipe_yaml_round_trip() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("hp5_ddx.yml");

        let recipe = ExposureRecipe {
            name: "HP5+ in DD-X".to_string(),
            film: "Ilford HP5 Plus".to_string(),
            developer: "Ilford DD-X".to_string(),
            dilution: "1:4".to_string(),
            shooting_iso: 800,
            time_minutes: 13.0,
            temperature_f: 68.0,
            agitation: Some("4 inversions/min".to_string()),
            push_pull: 1,
            notes: Some("One-stop push".to_string()),
        };

        save_recipe(&recipe, &path).expect("save");
        let loaded = load_recipe(&path).expect("load");

        assert_eq!(loaded.name, recipe.name);
        assert_eq!(loaded.shooting_iso, 800);
        assert_eq!(loaded.push_pull, 1);
        assert!((loaded.time_minutes - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_recipe_yaml_defaults_fill_in() {
        let yaml = "name: Minimal\nfilm: Fomapan 100\ndeveloper: Rodinal\ndilution: \"1:50\"\ntime_minutes: 11.0\n";
        let recipe: ExposureRecipe = serde_yaml::from_str(yaml).expect("parse");

        assert_eq!(recipe.shooting_iso, 400, "serde default applies");
        assert!((recipe.temperature_f - 68.0).abs() < 1e-9);
        assert_eq!(recipe.push_pull, 0);
        assert!(recipe.agitation.is_none());
    }

    #[test]
    fn test_list_recipes_filters_extensions() {
        let dir = tempdir().expect("temp dir");
        save_recipe(&ExposureRecipe::default(), dir.path().join("b.yml")).expect("save");
        save_recipe(&ExposureRecipe::default(), dir.path().join("a.yaml")).expect("save");
        std::fs::write(dir.path().join("notes.txt"), "not a recipe").expect("write");

        let names = list_recipes(dir.path()).expect("list");
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }
}
