//! railnet CLI: route queries over a transit network.
//!
//! Usage:
//!   railnet [--network file | --routes "AB5, BC4"] distance A-B-C
//!   railnet trips --from C --to C --max-stops 3
//!   railnet routes --from C --to C --max-distance 30
//!   railnet shortest --from A --to C
//!   railnet report [--json]
//!   railnet serve [--addr 127.0.0.1:12345]

use clap::{Parser, Subcommand};
use railnet::logging;
use railnet::{
    GraphError, GraphResult, MenuOption, NetworkSpec, QueryLimits, RailNetwork, ServerConfig,
    ShortestRouteQuery, TripQuery, DEFAULT_MAX_EXPANSIONS,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "railnet",
    version,
    about = "Route queries over small directed transit networks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Network definition (.json, .yaml or a compact route list)
    #[arg(long, global = true, conflicts_with = "routes")]
    network: Option<PathBuf>,
    /// Inline compact route list, e.g. "AB5, BC4"
    #[arg(long, global = true)]
    routes: Option<String>,
    /// Abort enumeration queries after this many expansions
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_EXPANSIONS)]
    max_expansions: usize,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Explicit log filter (e.g. "trace" or "railnet=debug")
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Length of an exact route given as dash-separated towns
    Distance {
        /// Route such as A-B-C
        route: String,
    },
    /// Count trips within a stop bound
    Trips {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Count trips with at most this many stops
        #[arg(long, conflicts_with = "exact_stops", required_unless_present = "exact_stops")]
        max_stops: Option<usize>,
        /// Count trips with exactly this many stops
        #[arg(long)]
        exact_stops: Option<usize>,
    },
    /// Count routes shorter than a distance
    Routes {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Exclusive distance bound
        #[arg(long)]
        max_distance: u64,
    },
    /// Length and towns of the shortest route
    Shortest {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Answer every reference query
    Report {
        /// Print the answers as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Serve the reference queries over TCP
    Serve {
        /// Listen address
        #[arg(long, default_value = railnet::config::DEFAULT_ADDR)]
        addr: String,
    },
}

fn load_network(cli: &Cli) -> GraphResult<RailNetwork> {
    let spec = match (&cli.network, &cli.routes) {
        (Some(path), _) => NetworkSpec::load(path)?,
        (None, Some(text)) => NetworkSpec::parse_routes(text)?,
        (None, None) => NetworkSpec::canonical(),
    };
    spec.build_with_limits(QueryLimits {
        max_expansions: cli.max_expansions,
    })
}

fn cmd_distance(network: &RailNetwork, route: &str) -> GraphResult<()> {
    let stops: Vec<&str> = route.split('-').map(str::trim).collect();
    match network.distance(&stops) {
        Ok(distance) => println!("{distance}"),
        Err(GraphError::NoSuchRoute) => println!("{}", GraphError::NoSuchRoute),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn cmd_trips(
    network: &RailNetwork,
    from: &str,
    to: &str,
    max_stops: Option<usize>,
    exact_stops: Option<usize>,
) -> GraphResult<()> {
    let query = TripQuery::between(from, to);
    let query = match (exact_stops, max_stops) {
        (Some(stops), _) => query.exact_stops(stops),
        (None, Some(stops)) => query.max_stops(stops),
        (None, None) => {
            return Err(GraphError::InvalidArgument(
                "either --max-stops or --exact-stops is required".to_string(),
            ))
        }
    };
    println!("{}", query.execute(network)?);
    Ok(())
}

fn cmd_shortest(network: &RailNetwork, from: &str, to: &str) -> GraphResult<()> {
    let route = ShortestRouteQuery::between(from, to).execute(network)?;
    if route.is_found() {
        println!("{} ({})", route.distance, route.path.join("-"));
    } else {
        println!("{}", route.distance);
    }
    Ok(())
}

fn cmd_report(network: &RailNetwork, json: bool) -> GraphResult<()> {
    let mut answers = Vec::with_capacity(MenuOption::ALL.len());
    for option in MenuOption::ALL {
        let outcome = option.run(network)?;
        if json {
            answers.push(serde_json::json!({
                "option": option.number(),
                "description": option.description(),
                "outcome": outcome,
            }));
        } else {
            println!("Output #{}: {}", option.number(), outcome);
        }
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&answers)?);
    }
    Ok(())
}

fn cmd_serve(network: RailNetwork, addr: &str) -> GraphResult<()> {
    let config = ServerConfig::from_addr(addr)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(railnet::server::serve(&config, Arc::new(network)))
}

fn run(cli: Cli) -> GraphResult<()> {
    let network = load_network(&cli)?;
    tracing::debug!(
        towns = network.node_count(),
        routes = network.edge_count(),
        "network ready"
    );

    match cli.command {
        Commands::Distance { route } => cmd_distance(&network, &route),
        Commands::Trips {
            from,
            to,
            max_stops,
            exact_stops,
        } => cmd_trips(&network, &from, &to, max_stops, exact_stops),
        Commands::Routes {
            from,
            to,
            max_distance,
        } => {
            println!("{}", network.amount_of_routes(&from, &to, max_distance)?);
            Ok(())
        }
        Commands::Shortest { from, to } => cmd_shortest(&network, &from, &to),
        Commands::Report { json } => cmd_report(&network, json),
        Commands::Serve { addr } => cmd_serve(network, &addr),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
