//! Command-line entry point: `ownership-bench [N]`.

use std::env;
use std::io;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use ownership_bench::Benchmark;

fn main() {
    // Diagnostics go to stderr so stdout carries nothing but the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let benchmark = Benchmark::from_args(env::args().skip(1));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // A vanished stdout leaves nothing useful to report to; note it on
    // stderr and exit cleanly either way.
    if let Err(error) = benchmark.run(&mut out) {
        warn!(%error, "report truncated");
    }
}
