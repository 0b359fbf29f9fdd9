//! Encounter balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 1000 encounters, data/ catalogs
//!   cargo run --bin simulate -- -n 100 --seed 42 # reproducible short run
//!   cargo run --bin simulate -- --level 3 --no-rest

use questfield::simulator::{run_simulation, SimConfig};
use questfield::Catalog;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, data_dir) = parse_args(&args);

    let catalog = match Catalog::load_from_dir(&data_dir) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("fatal: cannot load catalogs from '{data_dir}': {err}");
            process::exit(1);
        }
    };

    println!("Questfield encounter simulator");
    println!("  Encounters: {}", config.num_encounters);
    println!("  Level:      {}", config.character_level);
    println!("  Max hp:     {}", config.character_max_hp);
    println!("  Rest:       {}", config.rest_between);
    if let Some(seed) = config.seed {
        println!("  Seed:       {seed}");
    }
    println!();

    let report = run_simulation(&catalog, &config);
    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> (SimConfig, String) {
    let mut config = SimConfig::default();
    let mut data_dir = "data".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--encounters" => {
                i += 1;
                config.num_encounters = parse_value(args, i, "encounter count");
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_value(args, i, "seed"));
            }
            "--level" => {
                i += 1;
                config.character_level = parse_value(args, i, "level");
            }
            "--max-hp" => {
                i += 1;
                config.character_max_hp = parse_value(args, i, "max hp");
            }
            "--no-rest" => config.rest_between = false,
            "--no-sell" => config.sell_after = false,
            "--data" => {
                i += 1;
                data_dir = args
                    .get(i)
                    .unwrap_or_else(|| usage_exit("--data needs a directory"))
                    .clone();
            }
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => usage_exit(&format!("unknown option '{other}'")),
        }
        i += 1;
    }

    (config, data_dir)
}

fn parse_value<T: std::str::FromStr>(args: &[String], index: usize, what: &str) -> T {
    args.get(index)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| usage_exit(&format!("invalid or missing {what}")))
}

fn usage_exit(message: &str) -> ! {
    eprintln!("error: {message}");
    print_usage();
    process::exit(2);
}

fn print_usage() {
    eprintln!(
        "Usage: simulate [-n N] [--seed S] [--level L] [--max-hp H] \
         [--no-rest] [--no-sell] [--data DIR]"
    );
}
