use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use metro_route::{
    DuplicatePolicy, Error, MetroNetwork, NetworkConfig, RouteQuery, StationDirectory, StationKey,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest routes over a metro network")]
struct Cli {
    /// Stations file: name, id, line_id, address, line_name
    #[arg(long, env = "METRO_STATIONS", default_value = "data/stations.csv")]
    stations: PathBuf,

    /// Connections file: start_id, end_id, duration
    #[arg(long, env = "METRO_CONNECTIONS", default_value = "data/connections.csv")]
    connections: PathBuf,

    /// Keep the cheapest of duplicate connections instead of the last one
    #[arg(long)]
    keep_minimum: bool,

    /// Abandon a route computation after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two stations
    Route {
        /// Starting station name
        #[arg(long)]
        from: String,
        /// Starting station line
        #[arg(long)]
        from_line: String,
        /// Destination station name
        #[arg(long)]
        to: String,
        /// Destination station line
        #[arg(long)]
        to_line: String,
        /// Print the route as JSON
        #[arg(long)]
        json: bool,
    },
    /// List stations whose name contains the given text
    Search { text: String },
    /// List every loaded station
    Stations,
    /// Prompt for routes until 'exit' (the default)
    Interactive,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let config = NetworkConfig::default()
        .with_stations_path(&cli.stations)
        .with_connections_path(&cli.connections)
        .with_duplicate_policy(if cli.keep_minimum {
            DuplicatePolicy::KeepMinimum
        } else {
            DuplicatePolicy::Overwrite
        })
        .with_query_timeout(cli.timeout_ms.map(Duration::from_millis));

    let network = MetroNetwork::load(&config)?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Route {
            from,
            from_line,
            to,
            to_line,
            json,
        } => {
            let query = RouteQuery::new(
                StationKey::new(from, from_line),
                StationKey::new(to, to_line),
            );
            run_route(&network, &query, json)?;
        }
        Command::Search { text } => {
            print_suggestions(&mut io::stdout(), network.directory(), &text)?;
        }
        Command::Stations => {
            for station in network.directory().stations() {
                println!(
                    "Station ID: {}, Name: {}, Line ID: {}, Address: {}, Line Name: {}",
                    station.id,
                    station.name,
                    station.line_id,
                    station.address.as_deref().unwrap_or("-"),
                    station.line_name.as_deref().unwrap_or("-")
                );
            }
        }
        Command::Interactive => {
            let stdin = io::stdin();
            run_interactive(&network, &mut stdin.lock(), &mut io::stdout())?;
        }
    }

    Ok(())
}

fn run_route(network: &MetroNetwork, query: &RouteQuery, json: bool) -> Result<(), Error> {
    let route = match network.planner().plan(query) {
        Ok(route) => route,
        Err(err) => {
            if let Error::StationNotFound { name, .. } = &err {
                eprintln!("{}", err.to_string().red());
                print_suggestions(&mut io::stdout(), network.directory(), name)?;
            }
            return Err(err);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        println!("{}", route);
        println!("Total time: {} ({} transfers)", route.total_time, route.transfers());
    }
    Ok(())
}

/// Prompts for routes until 'exit', a negative answer or end of input
fn run_interactive(
    network: &MetroNetwork,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let directory = network.directory();
    let planner = network.planner();
    let rule = "-----------------".dimmed();

    loop {
        writeln!(out, "\n{}", "--- New Path Search ---".bold())?;
        writeln!(out, "Type 'exit' at any time to quit the program.")?;

        let Some(from) = prompt_station(input, out, directory, "start")? else {
            break;
        };
        let Some(to) = prompt_station(input, out, directory, "end")? else {
            break;
        };

        writeln!(
            out,
            "\n{}\n Shortest Path from {} to {}:\n{}\n",
            rule, from.name, to.name, rule
        )?;

        match planner.plan(&RouteQuery::new(from, to)) {
            Ok(route) => {
                writeln!(out, "{}", route)?;
                writeln!(
                    out,
                    "\n{}\n Total time: {} units\n{}\n",
                    rule,
                    route.total_time.to_string().green().bold(),
                    rule
                )?;
            }
            Err(err) => writeln!(out, "{} {}", "Error:".red().bold(), err)?,
        }

        let prompt = "Do you want to search for another path? (yes to continue): ";
        let Some(answer) = read_line(input, out, prompt)? else {
            break;
        };
        if answer != "yes" {
            break;
        }
    }

    writeln!(out, "Exiting program.")
}

/// Asks for a name and line until they resolve; `None` on 'exit' or end of input
fn prompt_station(
    input: &mut impl BufRead,
    out: &mut impl Write,
    directory: &StationDirectory,
    label: &str,
) -> io::Result<Option<StationKey>> {
    loop {
        let prompt = format!("Enter {} station name: ", label);
        let Some(name) = read_line(input, out, &prompt)? else {
            return Ok(None);
        };
        if name == "exit" {
            return Ok(None);
        }

        let prompt = format!("Enter {} station line: ", label);
        let Some(line) = read_line(input, out, &prompt)? else {
            return Ok(None);
        };
        if line == "exit" {
            return Ok(None);
        }

        match directory.resolve(&name, &line) {
            Ok(_) => return Ok(Some(StationKey::new(name, line))),
            Err(err) => {
                writeln!(out, "{}", err.to_string().red())?;
                writeln!(out, "-------------------")?;
                writeln!(
                    out,
                    "No exact match found. Here are some suggestions based on your input:"
                )?;
                writeln!(out, "-------------------")?;
                print_suggestions(out, directory, &name)?;
                writeln!(out, "-------------------")?;
                writeln!(out, "Please try again.")?;
            }
        }
    }
}

fn print_suggestions(
    out: &mut impl Write,
    directory: &StationDirectory,
    text: &str,
) -> io::Result<()> {
    let suggestions = directory.search(text);
    if suggestions.is_empty() {
        writeln!(out, "{}", "No matching stations.".yellow())?;
    }
    for suggestion in suggestions {
        writeln!(out, "{}", suggestion.to_string().yellow())?;
    }
    Ok(())
}

fn read_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
