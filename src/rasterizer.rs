use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::IconJob;
use crate::error::{Error, Result};
use crate::image::{fit_square, load_rgba, to_raw_rgba};

/// A raw dump written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub size: u32,
    pub path: PathBuf,
    pub len: usize,
}

pub fn output_path(dir: &Path, basename: &str, size: u32) -> PathBuf {
    dir.join(format!("{basename}{size}.bin"))
}

/// Loads the source, squares it to `size` and writes the RGBA bytes,
/// replacing whatever file was there.
pub fn rasterize_size(job: &IconJob, size: u32) -> Result<Artifact> {
    let img = fit_square(load_rgba(&job.source)?, size);
    let data = to_raw_rgba(&img);

    let path = output_path(&job.output_dir, &job.basename, size);
    std::fs::write(&path, &data).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;

    info!("Created {} ({} bytes)", path.display(), data.len());

    Ok(Artifact {
        size,
        path,
        len: data.len(),
    })
}

/// Runs every size in order. The first failure aborts the run; files written
/// for earlier sizes stay on disk.
pub fn run(job: &IconJob) -> Result<Vec<Artifact>> {
    job.sizes
        .iter()
        .map(|&size| rasterize_size(job, size))
        .collect()
}
