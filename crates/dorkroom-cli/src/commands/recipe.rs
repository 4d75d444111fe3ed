//! Development recipe commands.

use std::path::PathBuf;

use dorkroom_core::recipes::ExposureRecipe;

/// List available recipes in the specified or default directory.
pub fn cmd_recipe_list(dir: Option<PathBuf>) -> Result<(), String> {
    let dir = dir.unwrap_or_else(|| {
        dorkroom_core::recipes::get_recipes_dir().unwrap_or_else(|_| PathBuf::from("recipes"))
    });

    println!("Listing recipes in: {}", dir.display());
    match dorkroom_core::recipes::list_recipes(&dir) {
        Ok(recipes) => {
            if recipes.is_empty() {
                println!("No recipes found.");
            } else {
                for recipe in recipes {
                    println!("  {}", recipe);
                }
            }
            Ok(())
        }
        Err(e) => Err(format!("Failed to list recipes: {}", e)),
    }
}

/// Display details of a development recipe.
pub fn cmd_recipe_show(recipe: String) -> Result<(), String> {
    println!("Loading recipe: {}", recipe);

    // Try to load as file first
    let recipe_path = PathBuf::from(&recipe);
    let recipe_obj = if recipe_path.exists() {
        dorkroom_core::recipes::load_recipe(&recipe_path)?
    } else {
        // Validate recipe name before constructing path to prevent path traversal
        dorkroom_core::recipes::validate_recipe_name(&recipe)?;
        // Try to find it in the recipes directory
        let dir = dorkroom_core::recipes::get_recipes_dir()
            .unwrap_or_else(|_| PathBuf::from("recipes"));
        let full_path = dir.join(format!("{}.yml", recipe));
        dorkroom_core::recipes::load_recipe(&full_path)?
    };

    println!("\nRecipe: {}", recipe_obj.name);
    println!("Film:        {}", recipe_obj.film);
    println!("Developer:   {} ({})", recipe_obj.developer, recipe_obj.dilution);
    println!("Shot at:     ISO {}", recipe_obj.shooting_iso);
    println!(
        "Development: {} min at {}F",
        recipe_obj.time_minutes, recipe_obj.temperature_f
    );

    if recipe_obj.push_pull != 0 {
        println!("Push/pull:   {:+} stops", recipe_obj.push_pull);
    }

    if let Some(agitation) = &recipe_obj.agitation {
        println!("Agitation:   {}", agitation);
    }

    if let Some(notes) = &recipe_obj.notes {
        println!("\nNotes: {}", notes);
    }

    println!();
    Ok(())
}

/// Create a new recipe template file with default values.
pub fn cmd_recipe_create(output: PathBuf, name: String) -> Result<(), String> {
    println!("Creating new recipe: {}", name);

    let recipe = ExposureRecipe {
        name,
        ..ExposureRecipe::default()
    };

    dorkroom_core::recipes::save_recipe(&recipe, &output)?;
    println!("Recipe template written to: {}", output.display());
    println!("Edit the file to fill in your film, developer, and times.");
    Ok(())
}
