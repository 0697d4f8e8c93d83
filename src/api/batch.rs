use rayon::prelude::*;
use tracing::debug;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartConfig, RenderJob, render_activity_chart};

/// Renders every job on the rayon pool, each with its own renderer built by
/// `make_renderer`. Results keep the job order; one failing job does not
/// affect the others.
pub fn render_batch<R, F>(jobs: &[RenderJob], make_renderer: F) -> Vec<ChartResult<Vec<u8>>>
where
    R: Renderer,
    F: Fn(&ChartConfig) -> ChartResult<R> + Sync,
{
    debug!(jobs = jobs.len(), "rendering chart batch");
    jobs.par_iter()
        .map(|job| {
            let mut renderer = make_renderer(&job.config)?;
            render_activity_chart(&mut renderer, &job.config, &job.series)
        })
        .collect()
}
