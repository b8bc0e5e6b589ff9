use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use sommelier::{
    find_item, load_menu, ExclusionKey, Item, MenuPools, PairingConfig, PairingStats, PreferenceKey,
    PreferencePolicy,
};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Food and drink pairing engine
#[derive(Parser, Debug)]
#[command(name = "sommelier")]
#[command(about = "Score and recommend food and drink pairings", long_about = None)]
struct Args {
    /// Menu file (JSON array of items); repeat for several menus
    #[arg(short, long = "menu", required = true)]
    menus: Vec<PathBuf>,

    /// Pairing configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank pairings for one item
    Pair {
        id: String,
        /// Maximum number of results
        #[arg(short, long, default_value_t = sommelier::DEFAULT_MAX_RESULTS)]
        limit: usize,
        /// Treat the item as a drink and rank foods for it
        #[arg(long)]
        reverse: bool,
    },
    /// Glass and bottle recommendations for a food
    Food {
        id: String,
        /// Preferences to boost, comma separated (italian, fullBody, ...)
        #[arg(long, value_delimiter = ',')]
        prefer: Vec<PreferenceKey>,
        /// Characteristics to exclude, comma separated (red, sweetWines, ...)
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<ExclusionKey>,
        #[arg(long, default_value_t = 0)]
        min_score: u8,
        #[arg(long, default_value_t = 0.0)]
        min_price: f64,
        #[arg(long, default_value_t = 1000.0)]
        max_price: f64,
    },
    /// Food recommendations for a drink, grouped by course
    Wine { id: String },
    /// Compact menu or wine-list summary
    Summary { id: String },
    /// Every pairing section that applies to an item
    Context { id: String },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting sommelier v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => PairingConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PairingConfig::default(),
    };
    let recommender = config.recommender()?;

    let mut menu: Vec<Item> = Vec::new();
    for path in &args.menus {
        let items = load_menu(path).with_context(|| format!("failed to load menu {}", path.display()))?;
        info!("Loaded {} items from {}", items.len(), path.display());
        menu.extend(items);
    }

    let categories = recommender.categories();
    let (drinks, foods): (Vec<Item>, Vec<Item>) = menu.iter().cloned().partition(|item| categories.is_drink(item));
    let pairable_foods: Vec<Item> = foods.iter().filter(|f| categories.is_pairable_food(f)).cloned().collect();
    info!("Menu has {} drinks and {} foods", drinks.len(), foods.len());

    match args.command {
        Command::Pair { id, limit, reverse } => {
            let item = find_item(&menu, &id)?;
            let (results, candidates) = if reverse {
                (recommender.ranker().find_food_pairings(item, &pairable_foods, limit), pairable_foods.len())
            } else {
                (recommender.ranker().find_pairings(item, &drinks, limit), drinks.len())
            };
            let stats = PairingStats::compute(&results, candidates, recommender.ranker().scorer().weights());
            print_json(&json!({ "results": results, "stats": stats }))?;
        }
        Command::Food {
            id,
            prefer,
            exclude,
            min_score,
            min_price,
            max_price,
        } => {
            let item = find_item(&menu, &id)?;
            let mut policy = PreferencePolicy::default()
                .with_min_score(min_score)
                .with_price_range(min_price, max_price);
            for key in prefer {
                policy = policy.with_preference(key);
            }
            for key in exclude {
                policy = policy.with_exclusion(key);
            }
            let recs = recommender.get_food_pairing_recommendations(item, &drinks, Some(&policy));
            print_json(&recs)?;
        }
        Command::Wine { id } => {
            let item = find_item(&menu, &id)?;
            print_json(&recommender.get_wine_pairing_recommendations(item, &pairable_foods))?;
        }
        Command::Summary { id } => {
            let item = find_item(&menu, &id)?;
            if categories.is_drink(item) {
                print_json(&recommender.get_wine_list_pairing_summary(item, &pairable_foods))?;
            } else {
                print_json(&recommender.get_menu_pairing_summary(item, &drinks))?;
            }
        }
        Command::Context { id } => {
            let item = find_item(&menu, &id)?;
            let pools = MenuPools::from_menu(&drinks, &foods, categories);
            print_json(&recommender.contextual_pairings(item, &pools, None))?;
        }
    }

    Ok(())
}
