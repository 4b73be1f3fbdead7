use std::env;
use std::fmt::Display;
use std::io::{self, BufWriter};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use johnson_apsp::io::{write_matrix, EdgeListReader};
use johnson_apsp::{Error, Johnson, Weight};
use ordered_float::OrderedFloat;

const USAGE: &str = "usage: johnson <edge-list> [--sequential] [--threads N] [--float] [--matrix]";

struct Options {
    path: String,
    johnson: Johnson,
    float_weights: bool,
    print_matrix: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut args = env::args().skip(1);
    let mut path = None;
    let mut johnson = Johnson::new();
    let mut float_weights = false;
    let mut print_matrix = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sequential" => johnson = johnson.with_parallel(false),
            "--threads" => {
                let threads = args
                    .next()
                    .and_then(|n| n.parse().ok())
                    .ok_or("--threads expects a positive number")?;
                johnson = johnson.with_worker_threads(threads);
            }
            "--float" => float_weights = true,
            "--matrix" => print_matrix = true,
            other if other.starts_with("--") => return Err(format!("unknown option {}", other)),
            other => path = Some(other.to_string()),
        }
    }

    Ok(Options {
        path: path.ok_or("missing edge-list path")?,
        johnson,
        float_weights,
        print_matrix,
    })
}

fn run<W>(options: &Options) -> Result<(), Error>
where
    W: Weight + FromStr + Display,
{
    let start = Instant::now();

    let edge_list = EdgeListReader::new().read_file::<W, _>(&options.path)?;
    let graph = edge_list.into_graph()?;
    let result = options.johnson.run_all_pairs(&graph)?;

    match result.min_distance() {
        Some(min) => println!("{}", min),
        None => println!("graph has no vertices"),
    }
    if options.print_matrix {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        write_matrix(&result, &mut out)?;
    }

    println!("{}", start.elapsed().as_secs_f64());
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            process::exit(2);
        }
    };

    let outcome = if options.float_weights {
        run::<OrderedFloat<f64>>(&options)
    } else {
        run::<i64>(&options)
    };

    if let Err(err) = outcome {
        eprintln!("{}", err);
        process::exit(1);
    }
}
