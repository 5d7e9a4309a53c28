use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use recipe_catalog::PrepTimeBucket;
use recipe_forms::AuthSubmission;
use recipe_hub::{format_price, HubConfig, RecipeHub};
use recipe_model::{Recipe, RecipeId};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("recipe-hub")
        .version(recipe_hub::VERSION)
        .about("Browse, open and buy recipes from the terminal")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML config file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("browse")
                .about("List one page of the filtered grid")
                .arg(Arg::new("category").long("category").help("Category, e.g. Dinner"))
                .arg(Arg::new("cuisine").long("cuisine").help("Cuisine, e.g. Italian"))
                .arg(
                    Arg::new("time")
                        .long("time")
                        .value_parser(value_parser!(PrepTimeBucket))
                        .help("Prep time: any, under15, 15-30, 30-60, over60"),
                )
                .arg(
                    Arg::new("premium")
                        .long("premium")
                        .action(ArgAction::SetTrue)
                        .help("Premium recipes only"),
                )
                .arg(Arg::new("search").long("search").help("Search title, description and cuisine"))
                .arg(
                    Arg::new("page")
                        .long("page")
                        .default_value("1")
                        .value_parser(value_parser!(usize))
                        .help("1-based page number"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Open a recipe's detail view")
                .arg(Arg::new("id").required(true))
                .arg(
                    Arg::new("login")
                        .long("login")
                        .action(ArgAction::SetTrue)
                        .help("Sign in as the configured user first"),
                ),
        )
        .subcommand(
            Command::new("buy")
                .about("Sign in and run the simulated checkout for a premium recipe")
                .arg(Arg::new("id").required(true)),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => HubConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => HubConfig::default(),
    };
    let json = matches.get_flag("json");
    let mut hub = RecipeHub::new(config)?;

    match matches.subcommand() {
        Some(("browse", args)) => browse(&mut hub, args, json),
        Some(("show", args)) => show(&mut hub, args, json),
        Some(("buy", args)) => buy(&mut hub, args, json).await,
        _ => unreachable!("subcommand is required"),
    }
}

fn recipe_id(args: &ArgMatches) -> RecipeId {
    RecipeId::new(args.get_one::<String>("id").map(String::as_str).unwrap_or_default())
}

fn card_line(hub: &RecipeHub, recipe: &Recipe) -> String {
    let premium = if recipe.is_premium {
        format!(
            " [premium {}]",
            format_price(recipe.price_or(hub.config().default_price), &hub.config().currency)
        )
    } else {
        String::new()
    };
    format!(
        "{:>4}  {}  ({} min, {}, {}, {:.1}★){premium}",
        recipe.id, recipe.title, recipe.prep_time, recipe.cuisine, recipe.category, recipe.rating
    )
}

fn browse(hub: &mut RecipeHub, args: &ArgMatches, json: bool) -> Result<()> {
    let catalog = hub.catalog_mut();
    if let Some(category) = args.get_one::<String>("category") {
        catalog.set_category(category.as_str());
    }
    if let Some(cuisine) = args.get_one::<String>("cuisine") {
        catalog.set_cuisine(cuisine.as_str());
    }
    if let Some(bucket) = args.get_one::<PrepTimeBucket>("time") {
        catalog.set_prep_time(*bucket);
    }
    catalog.set_premium_only(args.get_flag("premium"));
    if let Some(query) = args.get_one::<String>("search") {
        catalog.search(query.as_str());
    }
    let page = args.get_one::<usize>("page").copied().unwrap_or(1);
    catalog.go_to_page(page)?;

    let hub: &RecipeHub = hub;
    let catalog = hub.catalog();
    let recipes = catalog.current_page();
    let badges: Vec<String> = catalog.active_badges().iter().map(ToString::to_string).collect();

    if json {
        let report = json!({
            "page": catalog.pagination().current(),
            "totalPages": catalog.total_pages(),
            "matches": catalog.visible_count(),
            "filters": badges,
            "recipes": recipes,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !badges.is_empty() {
        println!("Filters: {}", badges.join(", "));
    }
    if catalog.is_empty_state() {
        println!("No recipes found. Try adjusting your filters or search criteria.");
        return Ok(());
    }
    for recipe in recipes {
        println!("{}", card_line(hub, recipe));
    }
    println!(
        "\nPage {} of {} ({} recipes)",
        catalog.pagination().current(),
        catalog.total_pages(),
        catalog.visible_count()
    );
    Ok(())
}

fn show(hub: &mut RecipeHub, args: &ArgMatches, json: bool) -> Result<()> {
    if args.get_flag("login") {
        sign_in(hub);
    }
    let id = recipe_id(args);
    hub.recipe_click(&id)?;

    let hub: &RecipeHub = hub;
    let Some(detail) = hub.detail() else {
        bail!("recipe {id} is premium; sign in with --login to open it");
    };
    let recipe = hub
        .catalog()
        .find(&id)
        .context("recipe disappeared from the catalog")?;
    let now = Utc::now();

    if json {
        let comments: Vec<_> = detail
            .comments()
            .iter()
            .map(|c| json!({ "user": c.author.name, "text": c.text, "date": c.date(now) }))
            .collect();
        let report = json!({
            "recipe": recipe,
            "purchasePrompt": hub.purchase_prompt(&id),
            "comments": comments,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n{}\n", recipe.title, recipe.description);
    println!(
        "{} min · {} · {} · {:.1}★ ({})",
        recipe.prep_time, recipe.cuisine, recipe.category, recipe.rating, recipe.rating_count
    );
    if let Some(author) = &recipe.author {
        println!("By {}", author.name);
    }
    if !recipe.ingredient_list().is_empty() {
        println!("\nIngredients:");
        for ingredient in recipe.ingredient_list() {
            println!("  - {ingredient}");
        }
    }
    if !recipe.instruction_list().is_empty() {
        println!("\nInstructions:");
        for step in recipe.instruction_list() {
            println!("  {}. {}", step.step, step.description);
        }
    }
    if let Some(prompt) = hub.purchase_prompt(&id) {
        println!("\nPremium Recipe: {prompt}");
    }
    println!("\n{}", detail.comments_label());
    for comment in detail.comments() {
        println!("  {} ({}): {}", comment.author.name, comment.date(now), comment.text);
    }
    Ok(())
}

fn sign_in(hub: &mut RecipeHub) {
    let submission = AuthSubmission::Login {
        email: "customer@example.com".into(),
    };
    hub.auth_success(&submission);
}

async fn buy(hub: &mut RecipeHub, args: &ArgMatches, json: bool) -> Result<()> {
    sign_in(hub);
    let id = recipe_id(args);

    hub.recipe_click(&id)?;
    hub.buy_recipe(&id)?;
    let Some(session) = hub.payment() else {
        bail!("recipe {id} is not premium; nothing to buy");
    };
    if !json {
        println!("{} {}", session.form.title, session.form.pay_label());
        println!("Processing...");
    }

    let reference = hub.pay().await?;
    let toasts = hub.take_toasts();

    if json {
        let report = json!({
            "reference": reference,
            "unlocked": hub.is_unlocked(&id),
            "toasts": toasts,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Transaction reference: {reference}");
        if let Some(toast) = toasts.last() {
            println!("{toast}");
        }
    }
    Ok(())
}
