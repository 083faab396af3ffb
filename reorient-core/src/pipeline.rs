//! Order-preserving parallel map.
//!
//! Records are annotated independently, but output has to come out in
//! input order. [`map_ordered`] hands items to a rayon pool, collects the
//! results over a channel and releases them to the sink strictly by input
//! index, buffering whatever finishes early.

use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use crossbeam_channel::unbounded;

use crate::constants::PIPELINE_WINDOW_PER_WORKER;
use crate::types::ReorientError;

/// Applies `work` to every item on `threads` workers and feeds the results
/// to `sink` in input order.
///
/// At most `threads * 4` items are between the input iterator and the sink
/// at any time. With `threads <= 1` everything runs on the calling thread.
///
/// The first error, whether from the input, `work` or `sink`, stops the run
/// once every earlier item has reached the sink. Returns the number of items
/// passed to the sink.
///
/// # Errors
///
/// Returns the first error in input order, or
/// [`ReorientError::WorkerPoolError`] if the pool cannot be built or a
/// worker panics.
///
/// # Examples
///
/// ```rust
/// use reorient_core::pipeline::map_ordered;
/// use reorient_core::types::ReorientError;
///
/// let mut squares = Vec::new();
/// let items = (1..=5u64).map(Ok::<_, ReorientError>);
/// let count = map_ordered(items, 3, |n| Ok(n * n), |square| {
///     squares.push(square);
///     Ok(())
/// })?;
///
/// assert_eq!(count, 5);
/// assert_eq!(squares, vec![1, 4, 9, 16, 25]);
/// # Ok::<(), ReorientError>(())
/// ```
pub fn map_ordered<I, T, R, W, S>(
    items: I,
    threads: usize,
    work: W,
    mut sink: S,
) -> Result<usize, ReorientError>
where
    I: IntoIterator<Item = Result<T, ReorientError>>,
    T: Send,
    R: Send,
    W: Fn(T) -> Result<R, ReorientError> + Sync,
    S: FnMut(R) -> Result<(), ReorientError>,
{
    if threads <= 1 {
        let mut count = 0;
        for item in items {
            sink(work(item?)?)?;
            count += 1;
        }
        return Ok(count);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("reorient-worker-{index}"))
        .build()
        .map_err(|e| ReorientError::WorkerPoolError(format!("Failed to build thread pool: {e}")))?;

    let window = threads * PIPELINE_WINDOW_PER_WORKER;
    let work = &work;

    pool.in_place_scope(|scope| {
        let (tx_result, rx_result) = unbounded::<(usize, Result<R, ReorientError>)>();
        let mut items = items.into_iter();
        let mut pending: BTreeMap<usize, Result<R, ReorientError>> = BTreeMap::new();
        let mut input_error = None;
        let mut input_done = false;
        let mut sent = 0usize;
        let mut next_idx = 0usize;

        loop {
            while !input_done && sent - next_idx < window {
                match items.next() {
                    Some(Ok(item)) => {
                        let idx = sent;
                        let tx_result = tx_result.clone();
                        scope.spawn(move |_| {
                            let result = panic::catch_unwind(AssertUnwindSafe(|| work(item)))
                                .unwrap_or_else(|_| {
                                    Err(ReorientError::WorkerPoolError(format!(
                                        "worker panicked on item {idx}"
                                    )))
                                });
                            let _ = tx_result.send((idx, result));
                        });
                        sent += 1;
                    }
                    Some(Err(e)) => {
                        input_error = Some(e);
                        input_done = true;
                    }
                    None => input_done = true,
                }
            }

            if next_idx == sent {
                break;
            }

            let (idx, result) = rx_result.recv().map_err(|_| {
                ReorientError::WorkerPoolError("worker result channel closed".to_string())
            })?;
            pending.insert(idx, result);
            while let Some(result) = pending.remove(&next_idx) {
                sink(result?)?;
                next_idx += 1;
            }
        }

        match input_error {
            Some(e) => Err(e),
            None => Ok(next_idx),
        }
    })
}
