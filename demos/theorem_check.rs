//! Runs the closure check on the Beldiev and Andrist generating families.
//!
//! ```text
//! RUST_LOG=liebasis_solver=info cargo run --example theorem_check
//! ```

use std::sync::Arc;

use liebasis::prelude::*;
use tracing_subscriber::EnvFilter;

fn ring(n: usize) -> Arc<PolyRing<Q>> {
    let names: Vec<String> = (1..=n).map(|i| format!("z{i}")).collect();
    Arc::new(PolyRing::new(&names, MonomialOrder::Grevlex).expect("valid generator names"))
}

fn report(name: &str, n: usize, generators: Vec<Derivation<PolyRing<Q>>>) {
    println!("{name}, n = {n}:");
    for g in &generators {
        println!("  {g}");
    }

    let solver = LieBasisSolver::new(generators, SolverConfig::with_max_iter(500)).expect("valid generators");
    let outcome = solver.run();
    println!(
        "  -> {} after {} iterations ({} of {n} partial derivatives)",
        outcome.state, outcome.iterations, outcome.targets_found
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    for n in [2, 3] {
        let (u, v) = beldiev(ring(n)).expect("n >= 2");
        report("Beldiev", n, vec![u, v]);

        let (u, v, w) = andrist(ring(n)).expect("n >= 2");
        report("Andrist", n, vec![u, v, w]);
    }
}
