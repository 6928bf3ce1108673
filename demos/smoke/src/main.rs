//! End-to-end smoke run: create a simulation at a preset location, watch a
//! few live updates, patch it mid-run, and stop it.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p smoke
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use vn_core::Scenario;
use vn_engine::{
    preset_locations, CreateParams, Engine, EngineConfig, MetricsQuery, PatchParams,
};

fn main() -> Result<()> {
    env_logger::init();

    // A short tick period so the demo finishes in a couple of seconds.
    let engine = Engine::with_config(EngineConfig {
        tick_period: Duration::from_millis(250),
        seed:        None,
    });

    let delhi = preset_locations()
        .into_iter()
        .find(|p| p.kind == Scenario::Urban)
        .context("no urban preset in the catalogue")?;
    println!("spawning at {}: {}", delhi.name, delhi.position);

    let receipt = engine.create(
        CreateParams {
            scenario: delhi.kind,
            density:  10,
            location: delhi.position,
            duration_secs: None,
        },
        "smoke",
    )?;
    let id = receipt.simulation_id;
    println!("created {id}\n");

    let sub = engine.subscribe(&id)?;
    for _ in 0..5 {
        let update = sub
            .recv_timeout(Duration::from_secs(2))
            .context("tick update never arrived")?;
        println!(
            "tick @ {}  density={:.0}  linkLoss={:.3}  centrality={:.3}",
            update.timestamp.format("%H:%M:%S%.3f"),
            update.metrics.vehicle_density,
            update.metrics.link_loss,
            update.metrics.centrality,
        );
    }

    // Patch mid-run, then inspect one vehicle.
    let outcome = engine.patch(
        &id,
        &PatchParams { density: Some(25), scenario: Some(Scenario::Suburban) },
    )?;
    println!("\npatched: {:?} -> {}", outcome.updated, serde_json::to_string(&outcome.current)?);

    let first = engine
        .vehicles(&id, 1, 0)?
        .vehicles
        .first()
        .context("population is empty")?
        .id
        .clone();
    let detail = engine.vehicle_detail(&id, &first)?;
    println!(
        "vehicle {first}: {} path points, {} in-range peers",
        detail.path.len(),
        detail.connections.len()
    );

    let metrics = engine.metrics(&id, &MetricsQuery::default())?;
    println!("metrics:\n{}", serde_json::to_string_pretty(&metrics)?);

    let summary = engine.stop(&id)?;
    println!("\nstopped:\n{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
