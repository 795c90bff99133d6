//! # Pond Estimator CLI
//!
//! Terminal front end for the pond excavation estimator. Prompts for each
//! input, validates it as it is typed, then prints the single-equipment and
//! fleet estimates.
//!
//! ## Configuration
//!
//! The config file path comes from the first argument, then the
//! `POND_CONFIG` environment variable. Without either, built-in defaults are
//! used. Set `RUST_LOG=debug` to see calculation traces.

mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use pond_core::validation::validate_string_input;
use pond_core::{CalculationResult, Config, Excavator, Fleet, InputField, ProjectInputs, Truck};
use tracing::{info, warn};

use session::Session;

fn load_config() -> Config {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("POND_CONFIG").ok())
        .map(PathBuf::from);

    match path {
        Some(path) => match Config::load_from_file(&path) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded estimator config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        },
        None => Config::default(),
    }
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}

/// Prompt until the field validates. Blank input keeps the default; end of
/// input falls back to it.
fn prompt_field(config: &Config, field: InputField, default: f64) -> f64 {
    let range = config.validation.range_for(field.category());
    loop {
        let Some(input) = read_line(&format!("{} [{}]: ", field, default)) else {
            return default;
        };
        if input.trim().is_empty() {
            return default;
        }
        match validate_string_input(field, range, &input) {
            Ok(value) => return value,
            Err(e) => println!("  {}", e),
        }
    }
}

fn prompt_count(prompt: &str, default: usize, max: usize) -> usize {
    let Some(input) = read_line(&format!("{} [{}] (max {}): ", prompt, default, max)) else {
        return default;
    };
    input
        .trim()
        .parse()
        .ok()
        .filter(|n| (1..=max).contains(n))
        .unwrap_or(default)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    println!("Pond Excavation Timeline Estimator");
    println!("==================================");
    println!();

    let config = load_config();
    let mut inputs = ProjectInputs::from_defaults(&config.defaults);

    for field in InputField::ALL {
        let value = prompt_field(&config, field, inputs.value(field));
        inputs = inputs.with_value(field, value);
    }

    let mut session = Session::new();
    let state = session.recalculate(&config.validation, &inputs);

    println!();
    match (&state.result, &state.error) {
        (Some(result), None) => print_result("SINGLE EXCAVATOR + TRUCK", result),
        (_, Some(e)) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&state) {
                eprintln!();
                eprintln!("Display state JSON:");
                eprintln!("{}", json);
            }
            return;
        }
        (None, None) => return,
    }

    println!();
    let excavators = prompt_count("Number of excavators", 1, config.fleet_limits.max_excavators);
    let trucks = prompt_count("Number of trucks", 2, config.fleet_limits.max_trucks);

    let mut fleet = Fleet::new(
        vec![Excavator::new("Excavator 1", inputs.excavator_capacity_yd3, inputs.excavator_cycle_min)],
        vec![Truck::new("Truck 1", inputs.truck_capacity_yd3, inputs.truck_round_trip_min)],
    );
    for i in 1..excavators {
        fleet = fleet.add_excavator(
            Excavator::new(
                format!("Excavator {}", i + 1),
                inputs.excavator_capacity_yd3,
                inputs.excavator_cycle_min,
            ),
            &config.fleet_limits,
        );
    }
    for i in 1..trucks {
        fleet = fleet.add_truck(
            Truck::new(format!("Truck {}", i + 1), inputs.truck_capacity_yd3, inputs.truck_round_trip_min),
            &config.fleet_limits,
        );
    }

    for issue in fleet.validate(&config.validation) {
        println!("  [{}] {}", issue.equipment_id, issue.error);
    }

    println!();
    match fleet.calculate(inputs.pond_volume_yd3(), inputs.work_hours_per_day) {
        Ok(result) => {
            print_result("FLEET", &result);
            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn print_result(title: &str, result: &CalculationResult) {
    println!("═══════════════════════════════════════");
    println!("  {} ESTIMATE", title);
    println!("═══════════════════════════════════════");
    println!();
    println!("Rates:");
    println!("  Excavation: {:.1} yd³/hr", result.excavation_rate);
    println!("  Hauling:    {:.1} yd³/hr", result.hauling_rate);
    println!("  Effective:  {:.1} yd³/hr", result.effective_rate);
    println!();
    println!("Assumptions:");
    for note in &result.assumptions {
        println!("  - {}", note);
    }
    if !result.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for note in &result.warnings {
            println!("  ! {}", note);
        }
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", result.summary());
    println!("═══════════════════════════════════════");
}
