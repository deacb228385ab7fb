use crate::error::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Build the worker pool backing an engine.
///
/// `None` lets rayon size the pool to the available parallelism.
pub fn build_pool(num_threads: Option<usize>) -> Result<ThreadPool> {
    let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("strassen-{i}"));
    if let Some(n) = num_threads {
        builder = builder.num_threads(n);
    }

    let pool = builder.build()?;
    log::debug!(
        "built strassen worker pool with {} threads",
        pool.current_num_threads()
    );
    Ok(pool)
}
