use clap::{Parser, Subcommand};
use dorkroom_cli::commands::{
    cmd_border, cmd_ev, cmd_lens, cmd_recipe_create, cmd_recipe_list, cmd_recipe_show, cmd_resize,
    cmd_stops,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dorkroom")]
#[command(version, about = "Darkroom printing and camera exposure calculators", long_about = None)]
struct Cli {
    /// Print config and diagnostic messages
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute print borders, blade readings, and easel fit
    Border {
        /// Paper size in inches (e.g. 8x10); defaults from config
        #[arg(short, long, value_name = "WxH")]
        paper: Option<String>,

        /// Print aspect ratio (e.g. 3:2); defaults from config
        #[arg(short, long, value_name = "W:H")]
        ratio: Option<String>,

        /// Minimum border in inches; defaults from config
        #[arg(short = 'b', long, value_name = "INCHES")]
        min_border: Option<f64>,

        /// Horizontal print offset in inches (positive moves right)
        #[arg(long, value_name = "INCHES", default_value = "0.0", allow_hyphen_values = true)]
        offset_h: f64,

        /// Vertical print offset in inches (positive moves up)
        #[arg(long, value_name = "INCHES", default_value = "0.0", allow_hyphen_values = true)]
        offset_v: f64,

        /// Rotate the paper to landscape before easel fitting
        #[arg(short, long)]
        landscape: bool,

        /// Let offsets consume the minimum border
        #[arg(long)]
        ignore_min_border: bool,

        /// Search for a nearby minimum border that snaps the borders to
        /// quarter-inch blade marks
        #[arg(short, long)]
        optimize: bool,
    },

    /// Adjust an exposure time by stops, or compare two times
    Stops {
        /// Base exposure time in seconds
        #[arg(value_name = "SECONDS")]
        time: f64,

        /// Stops to add (negative subtracts)
        #[arg(short, long, value_name = "STOPS", allow_hyphen_values = true)]
        stops: Option<f64>,

        /// Target time to compare against instead
        #[arg(short, long, value_name = "SECONDS")]
        to_time: Option<f64>,
    },

    /// Scale an enlarger exposure for a new print size
    Resize {
        /// Current print size in inches (e.g. 8x10)
        #[arg(value_name = "WxH")]
        from: String,

        /// New print size in inches (e.g. 16x20)
        #[arg(value_name = "WxH")]
        to: String,

        /// Current exposure time in seconds
        #[arg(short, long, value_name = "SECONDS")]
        time: f64,
    },

    /// Exposure value math over the aperture/shutter/ISO triangle
    Ev {
        /// Aperture as an f-number (e.g. 5.6)
        #[arg(short, long, value_name = "F")]
        aperture: Option<f64>,

        /// Shutter speed (e.g. 1/125, 0.5, 2s)
        #[arg(short, long, value_name = "SPEED")]
        shutter: Option<String>,

        /// Film speed
        #[arg(short, long, value_name = "ISO", default_value = "100.0")]
        iso: f64,

        /// Target EV to solve against
        #[arg(short, long, value_name = "EV", allow_hyphen_values = true)]
        ev: Option<f64>,
    },

    /// Convert a focal length between film formats
    Lens {
        /// Focal length in millimetres
        #[arg(value_name = "MM")]
        focal: f64,

        /// Source format (e.g. 35mm)
        #[arg(short, long, value_name = "FORMAT")]
        from: String,

        /// Target format (e.g. 6x7)
        #[arg(short, long, value_name = "FORMAT")]
        to: String,
    },

    /// Manage development recipes
    Recipe {
        #[command(subcommand)]
        action: RecipeAction,
    },
}

#[derive(Subcommand)]
enum RecipeAction {
    /// List available recipes
    List {
        /// Recipes directory (default: ~/dorkroom/recipes)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Show a recipe by name or path
    Show {
        /// Recipe name or YAML file path
        recipe: String,
    },

    /// Create a recipe template
    Create {
        /// Output file path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Recipe name
        #[arg(short, long, value_name = "NAME")]
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    dorkroom_core::config::set_verbose(cli.verbose);

    let result = match cli.command {
        Commands::Border {
            paper,
            ratio,
            min_border,
            offset_h,
            offset_v,
            landscape,
            ignore_min_border,
            optimize,
        } => cmd_border(
            paper,
            ratio,
            min_border,
            offset_h,
            offset_v,
            landscape,
            ignore_min_border,
            optimize,
        ),

        Commands::Stops {
            time,
            stops,
            to_time,
        } => cmd_stops(time, stops, to_time),

        Commands::Resize { from, to, time } => cmd_resize(from, to, time),

        Commands::Ev {
            aperture,
            shutter,
            iso,
            ev,
        } => cmd_ev(aperture, shutter, iso, ev),

        Commands::Lens { focal, from, to } => cmd_lens(focal, from, to),

        Commands::Recipe { action } => match action {
            RecipeAction::List { dir } => cmd_recipe_list(dir),
            RecipeAction::Show { recipe } => cmd_recipe_show(recipe),
            RecipeAction::Create { output, name } => cmd_recipe_create(output, name),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
