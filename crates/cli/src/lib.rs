use anyhow::{anyhow, Context, Result};
use campus_nav_graph::{
    directions, popular_destinations, CampusDataset, DanglingEdgePolicy, NavigationGraph,
    NavigationNode, RouteConfig,
};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

mod report;

/// Exit status when both places exist but no route satisfies the constraints
const NO_ROUTE_EXIT: u8 = 2;

#[derive(Parser)]
#[command(name = "campus-nav")]
#[command(about = "Indoor/campus navigation: place search and accessible routing", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Campus dataset (JSON). Defaults to the bundled sample campus
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Routing config (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override walking speed (distance units per second)
    #[arg(long, global = true)]
    walking_speed: Option<f64>,

    /// Refuse datasets with edges pointing at unknown nodes
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search places by name or description
    Search(SearchArgs),

    /// Shortest route between two places
    Route(RouteArgs),

    /// Show a single place by id
    Node(NodeArgs),

    /// Most searched destinations
    Popular(PopularArgs),

    /// List buildings in the dataset
    Buildings(JsonArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Text to look for
    query: String,

    /// Maximum number of results
    #[arg(long, short = 'n', default_value_t = 6)]
    limit: usize,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RouteArgs {
    /// Start place (id, or text matched via search)
    from: String,

    /// Destination place (id, or text matched via search)
    to: String,

    /// Only use wheelchair-accessible connections
    #[arg(long, short = 'a')]
    accessible: bool,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct NodeArgs {
    id: String,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PopularArgs {
    #[arg(long, short = 'n', default_value_t = 5)]
    limit: usize,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct JsonArgs {
    /// Output JSON
    #[arg(long)]
    json: bool,
}

pub fn main_entry() -> Result<ExitCode> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON consumers
    let json_output = match &cli.command {
        Commands::Search(args) => args.json,
        Commands::Route(args) => args.json,
        Commands::Node(args) => args.json,
        Commands::Popular(args) => args.json,
        Commands::Buildings(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = resolve_config(&cli)?;
    let dataset = match &cli.data {
        Some(path) => CampusDataset::load(path)
            .with_context(|| format!("Failed to load dataset {}", path.display()))?,
        None => CampusDataset::builtin().context("Failed to load bundled campus")?,
    };
    let graph = dataset
        .graph(&config)
        .context("Failed to build navigation graph")?;

    match cli.command {
        Commands::Search(args) => run_search(&graph, args),
        Commands::Route(args) => run_route(&graph, args),
        Commands::Node(args) => run_node(&graph, args),
        Commands::Popular(args) => run_popular(&graph, &dataset, args),
        Commands::Buildings(args) => run_buildings(&dataset, args),
    }
}

fn resolve_config(cli: &Cli) -> Result<RouteConfig> {
    let mut config = match &cli.config {
        Some(path) => RouteConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RouteConfig::default(),
    };
    if let Some(speed) = cli.walking_speed {
        config = config.with_walking_speed(speed);
    }
    if cli.strict {
        config = config.with_dangling_edges(DanglingEdgePolicy::Reject);
    }
    config.validate()?;
    Ok(config)
}

/// Exact id first, otherwise the best search hit
fn resolve_place<'a>(graph: &'a NavigationGraph, input: &str) -> Result<&'a NavigationNode> {
    if let Some(node) = graph.get_node_by_id(input) {
        return Ok(node);
    }
    let hit = graph
        .search(input)
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("No place matches '{input}'"))?;
    log::info!("Resolved '{input}' to {} ({})", hit.name, hit.id);
    Ok(hit)
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_search(graph: &NavigationGraph, args: SearchArgs) -> Result<ExitCode> {
    let results = graph.search_limited(&args.query, args.limit);
    if args.json {
        print_json(&json!({ "status": "ok", "results": results }))?;
    } else {
        print!("{}", report::render_search(&args.query, &results));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_route(graph: &NavigationGraph, args: RouteArgs) -> Result<ExitCode> {
    let from = resolve_place(graph, &args.from)?;
    let to = resolve_place(graph, &args.to)?;

    let Some(path) = graph
        .shortest_path(&from.id, &to.id, args.accessible)
        .with_context(|| format!("Route {} -> {} failed", from.id, to.id))?
    else {
        if args.json {
            print_json(&json!({ "status": "no_route", "from": from.id, "to": to.id }))?;
        } else {
            println!("No route available from {} to {}", from.name, to.name);
        }
        return Ok(ExitCode::from(NO_ROUTE_EXIT));
    };

    let steps = directions(&path);
    if args.json {
        print_json(&json!({ "status": "ok", "route": path, "steps": steps }))?;
    } else {
        print!("{}", report::render_route(&path, &steps));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_node(graph: &NavigationGraph, args: NodeArgs) -> Result<ExitCode> {
    let node = graph
        .get_node_by_id(&args.id)
        .ok_or_else(|| anyhow!("Unknown node: {}", args.id))?;
    if args.json {
        print_json(&json!({ "status": "ok", "node": node }))?;
    } else {
        print!("{}", report::render_node(node));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_popular(
    graph: &NavigationGraph,
    dataset: &CampusDataset,
    args: PopularArgs,
) -> Result<ExitCode> {
    let mut popular = popular_destinations(graph, &dataset.popular);
    popular.truncate(args.limit);
    if args.json {
        print_json(&json!({ "status": "ok", "destinations": popular }))?;
    } else {
        print!("{}", report::render_popular(&popular));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_buildings(dataset: &CampusDataset, args: JsonArgs) -> Result<ExitCode> {
    if args.json {
        print_json(&json!({ "status": "ok", "buildings": dataset.buildings }))?;
    } else {
        print!("{}", report::render_buildings(&dataset.buildings));
    }
    Ok(ExitCode::SUCCESS)
}
