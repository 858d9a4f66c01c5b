use std::process::ExitCode;
use tracing::{debug, error, info};

use icon_rasterizer::{run, IconJob};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let job = IconJob::default();
    info!(
        "Rasterizing {} at sizes {:?}",
        job.source.display(),
        job.sizes
    );

    match run(&job) {
        Ok(artifacts) => {
            for artifact in &artifacts {
                debug!("{0}x{0} -> {1}", artifact.size, artifact.path.display());
            }
            let total: usize = artifacts.iter().map(|a| a.len).sum();
            info!("Wrote {} icon dumps, {total} bytes", artifacts.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
