use route_advisor::elicitation::elicit_preferences;
use route_advisor::utils::export::write_route_json;
use route_advisor::utils::loader::{demo_seed, load_network};
use route_advisor::{AnswerSource, DecisionTree, LocationId, RouteError, TransportNetwork};
use std::io::{self, BufRead, Write};

/// Reads answers line by line from stdin
struct PromptAnswers<R: BufRead> {
    input: R,
}

impl<R: BufRead> AnswerSource for PromptAnswers<R> {
    fn ask(&mut self, question: &str, options: &[&str]) -> route_advisor::Result<String> {
        if options.is_empty() {
            print!("{}: ", question);
        } else {
            print!("{} [{}]: ", question, options.join(" / "));
        }
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RouteError::AnswerSource("end of input".into()));
        }
        Ok(line)
    }
}

fn main() {
    env_logger::init();

    // usage: route_advisor [network.json [from-id to-id]]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let network = match args.first() {
        Some(path) => load_network(path),
        None => demo_seed().into_network(),
    };
    let network = match network {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Error loading network: {}", e);
            return;
        }
    };
    if network.locations().is_empty() {
        eprintln!("The network has no locations");
        return;
    }

    let (start, goal) = match endpoints(&args, &network) {
        Some(pair) => pair,
        None => {
            eprintln!("Usage: route_advisor [network.json [from-id to-id]]");
            return;
        }
    };

    let tree = DecisionTree::standard();
    println!("Preference questions:\n{}", tree.describe());

    let stdin = io::stdin();
    let mut answers = PromptAnswers {
        input: stdin.lock(),
    };
    let preferences = match elicit_preferences(&tree, &mut answers) {
        Ok(preferences) => preferences,
        Err(e) => {
            eprintln!("Could not read preferences: {}", e);
            return;
        }
    };
    println!("\nUsing preferences: {}", preferences);

    match network.find_path(start, goal, &preferences) {
        Ok(Some(route)) if route.is_trivial() => {
            println!("Start and destination are the same location.");
        }
        Ok(Some(route)) => {
            println!("\nBest route (score {:.4}):", route.score);
            for edge in &route.edges {
                let name = |id: LocationId| {
                    network
                        .location(id)
                        .map_or_else(|| id.to_string(), |l| l.name.clone())
                };
                println!(
                    "  {} -> {} by {} ({:.1} time, {:.2} cost, {:.1} distance)",
                    name(edge.source),
                    name(edge.destination),
                    edge.mode,
                    edge.time,
                    edge.cost,
                    edge.distance
                );
            }
            println!(
                "Total: {:.1} time, {:.2} cost, {:.1} distance",
                route.total_time(),
                route.total_cost(),
                route.total_distance()
            );

            match write_route_json("route_output.json", &network, &route) {
                Ok(()) => println!("Route written to route_output.json"),
                Err(e) => eprintln!("Failed to write route_output.json: {}", e),
            }
        }
        Ok(None) => println!("No route found."),
        Err(e) => eprintln!("Search failed: {}", e),
    }
}

/// Start and goal from the command line, else the first and last location.
/// `None` unless both ids are given as numbers, or neither is.
fn endpoints(args: &[String], network: &TransportNetwork) -> Option<(LocationId, LocationId)> {
    match args {
        [] | [_] => {
            let first = network.locations().iter().next()?.id;
            let last = network.locations().iter().last()?.id;
            Some((first, last))
        }
        [_, start, goal] => Some((start.parse().ok()?, goal.parse().ok()?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_endpoints_default_to_first_and_last() {
        let network = demo_seed().into_network().unwrap();
        assert_eq!(endpoints(&args(&[]), &network), Some((1, 3)));
        assert_eq!(endpoints(&args(&["net.json"]), &network), Some((1, 3)));
    }

    #[test]
    fn test_endpoints_from_arguments() {
        let network = demo_seed().into_network().unwrap();
        assert_eq!(endpoints(&args(&["net.json", "2", "1"]), &network), Some((2, 1)));
        assert_eq!(endpoints(&args(&["net.json", "2", "x"]), &network), None);
    }

    #[test]
    fn test_single_endpoint_is_rejected() {
        let network = demo_seed().into_network().unwrap();
        assert_eq!(endpoints(&args(&["net.json", "2"]), &network), None);
        assert_eq!(endpoints(&args(&["net.json", "1", "2", "3"]), &network), None);
    }
}
