use std::path::Path;

use anyhow::Context;
use log::info;

use timegen::config::ConfigManager;
use timegen::engine::ConsoleProgressCallback;
use timegen::{EvolutionEngine, EvolutionOutcome, GridSpec, SubjectCatalog};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    let config_path = Path::new("timegen.toml");
    if config_path.exists() {
        manager
            .load_from_file(config_path)
            .context("failed to load timegen.toml")?;
        info!("Loaded configuration from {}", config_path.display());
    }
    let config = manager.get();

    let catalog = SubjectCatalog::with_defaults();
    let snapshot = catalog.snapshot();
    info!(
        "Generating timetable for {} subjects on a {}x{} grid",
        snapshot.len(),
        config.grid.day_count(),
        config.grid.slots_per_day
    );

    let mut engine = EvolutionEngine::new(config.evolution.clone());
    let outcome = engine.run(&snapshot, &config.grid, ConsoleProgressCallback);

    print_table(&outcome, &config.grid);
    println!(
        "\n{}",
        serde_json::to_string_pretty(&outcome.best.day_map(&config.grid))?
    );

    Ok(())
}

fn print_table(outcome: &EvolutionOutcome, grid: &GridSpec) {
    let width = outcome
        .best
        .genes()
        .map(|g| g.to_string().len())
        .max()
        .unwrap_or(1)
        .max(3);

    print!("{:<5}", "");
    for slot in 1..=grid.slots_per_day {
        print!(" {:^width$}", slot, width = width);
    }
    println!();

    for (label, day) in grid.days.iter().zip(outcome.best.iter_days()) {
        print!("{:<5}", label);
        for gene in day {
            print!(" {:^width$}", gene.to_string(), width = width);
        }
        println!();
    }

    println!(
        "\nScore {} after {} generations ({:?})",
        outcome.best_score, outcome.generations, outcome.termination
    );
}
