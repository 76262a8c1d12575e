use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use comprec::catalog::{load_catalog, load_origins};
use comprec::constants::{MAX_TEAM_SIZE, MIN_TEAM_SIZE};
use comprec::recommend::recommend;
use comprec::search::SearchParams;
use comprec::types::{CompContext, EmblemCounts};

struct Args {
    catalog: String,
    anchor: String,
    team_size: usize,
    emblems: EmblemCounts,
    origins: Option<String>,
    restarts: usize,
    steps: usize,
    seed: u64,
    json: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let defaults = SearchParams::default();
    let mut catalog = comprec::env_config::catalog_path();
    let mut anchor = "ryze".to_string();
    let mut team_size = defaults.team_size;
    let mut emblems = EmblemCounts::new();
    let mut origins: Option<String> = None;
    let mut restarts = defaults.restarts;
    let mut steps = defaults.steps;
    let mut seed = defaults.seed;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" => {
                i += 1;
                if i < args.len() {
                    catalog = args[i].clone();
                }
            }
            "--anchor" => {
                i += 1;
                if i < args.len() {
                    anchor = args[i].clone();
                }
            }
            "--team-size" => {
                i += 1;
                if i < args.len() {
                    team_size = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --team-size value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--emblem" => {
                i += 1;
                if i < args.len() {
                    let (name, count) = parse_emblem(&args[i]);
                    *emblems.entry(name).or_insert(0) += count;
                }
            }
            "--origins" => {
                i += 1;
                if i < args.len() {
                    origins = Some(args[i].clone());
                }
            }
            "--restarts" => {
                i += 1;
                if i < args.len() {
                    restarts = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --restarts value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--steps" => {
                i += 1;
                if i < args.len() {
                    steps = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --steps value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        catalog,
        anchor,
        team_size,
        emblems,
        origins,
        restarts,
        steps,
        seed,
        json,
    }
}

/// Parse `Name=N` (count defaults to 1 when omitted).
fn parse_emblem(spec: &str) -> (String, i32) {
    match spec.split_once('=') {
        Some((name, count)) => {
            let n = count.parse().unwrap_or_else(|_| {
                eprintln!("Invalid --emblem count in: {}", spec);
                std::process::exit(1);
            });
            (name.to_string(), n)
        }
        None => (spec.to_string(), 1),
    }
}

fn print_usage() {
    println!("Usage: recommend [options]");
    println!("  --catalog <path>     game-data dump (default: $COMPREC_CATALOG or data/en_us.json)");
    println!("  --anchor <query>     anchor unit, matched by api-name substring (default: ryze)");
    println!(
        "  --team-size <n>      roster size, {}-{} (default: {})",
        MIN_TEAM_SIZE,
        MAX_TEAM_SIZE,
        SearchParams::default().team_size
    );
    println!("  --emblem Name=N      owned emblem count (repeatable)");
    println!("  --origins <path>     origin allow-list override (JSON array of names)");
    println!("  --restarts <n>       independent search runs");
    println!("  --steps <n>          mutation attempts per run");
    println!("  --seed <n>           RNG seed");
    println!("  --json               machine-readable output");
}

fn main() {
    let args = parse_args();

    if args.team_size < MIN_TEAM_SIZE || args.team_size > MAX_TEAM_SIZE {
        eprintln!(
            "team-size {} out of range {}-{}",
            args.team_size, MIN_TEAM_SIZE, MAX_TEAM_SIZE
        );
        std::process::exit(1);
    }

    comprec::env_config::init_rayon_threads();

    let Some(catalog) = load_catalog(Path::new(&args.catalog)) else {
        std::process::exit(1);
    };
    if !args.json {
        println!(
            "Set {}: {} units, {} traits",
            catalog.set_key,
            catalog.units.len(),
            catalog.synergies.len()
        );
    }

    let ctx = match &args.origins {
        Some(path) => {
            let Some(names) = load_origins(Path::new(path)) else {
                std::process::exit(1);
            };
            let origins: HashSet<String> = names.into_iter().collect();
            CompContext::new(catalog, origins)
        }
        None => CompContext::with_default_origins(catalog),
    };

    let params = SearchParams {
        restarts: args.restarts,
        steps: args.steps,
        team_size: args.team_size,
        seed: args.seed,
    };

    let start = Instant::now();
    let results = match recommend(&ctx, &args.anchor, &args.emblems, &params) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if args.json {
        let views: Vec<_> = results.iter().map(|r| r.view(&ctx)).collect();
        println!("{}", serde_json::to_string_pretty(&views).unwrap());
        return;
    }

    if results.is_empty() {
        println!("No unit matching '{}' found in the catalog.", args.anchor);
        return;
    }

    println!(
        "Top {} comps for '{}' (team size {}, {} runs x {} steps, {:.2?})",
        results.iter().filter(|r| !r.emblem_comp).count(),
        args.anchor,
        args.team_size,
        params.restarts,
        params.steps,
        elapsed
    );
    for (rank, result) in results.iter().enumerate() {
        let tag = if result.emblem_comp {
            "emblem pick".to_string()
        } else {
            format!("#{}", rank + 1)
        };
        println!(
            "\n{} — score {:.1}, {} origins, {} active, cost {}",
            tag,
            result.score,
            result.details.active_origins,
            result.details.active_count,
            result.details.total_cost
        );
        let names: Vec<&str> = result
            .team
            .iter()
            .map(|&i| ctx.unit(i).name.as_str())
            .collect();
        println!("  units: {}", names.join(", "));
        let traits: Vec<String> = result
            .details
            .activated
            .iter()
            .map(|a| {
                if a.is_origin {
                    format!("{} ({})*", a.name, a.count)
                } else {
                    format!("{} ({})", a.name, a.count)
                }
            })
            .collect();
        println!("  traits: {}", traits.join(", "));
    }
}
