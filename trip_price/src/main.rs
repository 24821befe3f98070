use std::path::Path;
use std::process::exit;

use docopt::Docopt;
use rust_libs::f_loc;
use rust_libs::tree_error::TreeError;
use rust_libs::utils::ResultLogExt;
use serde::Deserialize;
use trip_price::problem::{Format, Problem};
use trip_price::{minimum_total_price, plan_trips};

const USAGE: &str = "
Minimum total price of trips over a tree, after halving the prices of
some pairwise non-adjacent nodes.

Usage:
  trip_price [options] <input>
  trip_price [options] --example
  trip_price (-h | --help)

Options:
  -h --help        Show this screen.
  --format=<fmt>   Input format, leetcode or json [default: leetcode].
  --example        Solve the built-in example instead of reading input.
  --explain        Print the halved nodes and the path of every trip.
  --json           Print the full plan as JSON.
  -v --verbose     Log at debug level.

<input> may be - to read stdin.
";

#[derive(Debug, Deserialize)]
struct Args {
    arg_input: Option<String>,
    flag_format: String,
    flag_example: bool,
    flag_explain: bool,
    flag_json: bool,
    flag_verbose: bool,
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let level = if args.flag_verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::debug!("rustc {}", rustc_version_runtime::version());

    match run(&args) {
        Ok(()) => {}
        err => {
            err.log_error();
            exit(1);
        }
    }
}

fn run(args: &Args) -> Result<(), TreeError> {
    let problem = if args.flag_example {
        Problem::example()
    } else {
        let format: Format = args.flag_format.parse()?;
        let input = args
            .arg_input
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("-");
        Problem::load(Path::new(input), format).log_err(f_loc!())?
    };

    if args.flag_json {
        let plan = plan_trips(&problem)?;
        let text =
            serde_json::to_string_pretty(&plan).map_err(|e| TreeError::Parse(e.to_string()))?;
        println!("{text}");
    } else if args.flag_explain {
        print!("{}", plan_trips(&problem)?);
    } else {
        println!("{}", minimum_total_price(&problem)?);
    }
    Ok(())
}
