use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use meal_prep::meal_plan::{format_plan_for_display, load_recipe_file, plan_meal_prep};
use meal_prep::planner_config::PlannerConfig;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: meal_prep <recipe.json> <target-servings> [YYYY-MM-DD]";

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = PlannerConfig::from_env()?;
    init_logging(config.json_logs);

    info!("Starting meal prep planner");

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 3 {
        bail!(USAGE);
    }

    let target_servings: u32 = args[1]
        .parse()
        .with_context(|| format!("target servings must be a whole number, got '{}'", args[1]))?;

    // The clock is read here only; the planner itself takes the date as input
    let prep_date = match args.get(2) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("prep date must look like 2024-03-01, got '{raw}'"))?,
        None => chrono::Local::now().date_naive(),
    };

    let recipe = load_recipe_file(&args[0])?;
    let request = config.request_for(target_servings, Some(prep_date));
    let plan = plan_meal_prep(&recipe, &request)?;

    println!("{}", format_plan_for_display(&plan));
    Ok(())
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
