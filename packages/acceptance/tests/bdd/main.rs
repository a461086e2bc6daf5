//! BDD test runner for the knowledge-base service.
//!
//! Runs the Gherkin features in the project's `features/` directory.
//!
//! # Usage
//!
//! Against the in-process stand-in service:
//!
//! ```bash
//! cargo test -p kbase-acceptance --test bdd
//! ```
//!
//! Against a running service:
//!
//! ```bash
//! KBASE_BASE_URL=http://localhost:3001 cargo test -p kbase-acceptance --test bdd
//! ```

// Allow panic/expect in test code - these are appropriate for test setup
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod steps;
mod world;

use std::path::Path;

use cucumber::World;
use futures::FutureExt;
use kbase_acceptance::StandInService;
use kbase_client::config::BASE_URL_ENV;
use kbase_client::HarnessConfig;

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .init();

    let features_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent() // packages/
        .and_then(|p| p.parent()) // project root
        .map(|p| p.join("features"))
        .expect("Could not find features directory");

    if !features_dir.exists() {
        panic!("Features directory not found: {}", features_dir.display());
    }

    // Keep the stand-in alive until every scenario has run
    let mut stand_in: Option<StandInService> = None;
    let config = if std::env::var_os(BASE_URL_ENV).is_some() {
        HarnessConfig::from_env().expect("Invalid service configuration")
    } else {
        let service = StandInService::start().await;
        let config = HarnessConfig::new(service.uri());
        stand_in = Some(service);
        config
    };
    tracing::info!(
        base_url = %config.base_url,
        stand_in = stand_in.is_some(),
        "Running features"
    );
    world::CONFIG
        .set(config)
        .expect("Service configuration initialised twice");

    world::KbaseWorld::cucumber()
        // Scenarios share the service under test; each feature uses its own organization
        .max_concurrent_scenarios(1)
        .after(|_feature, _rule, scenario, _event, world| {
            if let Some(world) = world {
                world.scenario.finish();
                tracing::debug!(scenario = %scenario.name, "Scenario finished");
            }
            futures::future::ready(()).boxed_local()
        })
        .with_default_cli()
        .run_and_exit(features_dir)
        .await;

    drop(stand_in);
}
