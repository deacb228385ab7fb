//! Fan-out / barrier join over paired operands.

/// Run `task(lhs[i], rhs[i], &mut out[i])` for every `i` concurrently and
/// return once all of them have finished.
///
/// Tasks only share read access to their inputs and each writes its own
/// output slot, so the join is the only synchronisation. Tasks are
/// scheduled on the rayon pool the caller is running in (the global pool
/// outside of `ThreadPool::install`).
///
/// A panic in any task is re-raised here after the remaining tasks finish;
/// partial outputs must not be used.
pub fn fork_join<L, R, O, F>(lhs: &[L], rhs: &[R], out: &mut [O], task: F)
where
    L: Sync,
    R: Sync,
    O: Send,
    F: Fn(&L, &R, &mut O) + Sync,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    debug_assert_eq!(lhs.len(), out.len());

    let task = &task;
    rayon::scope(|s| {
        for ((l, r), o) in lhs.iter().zip(rhs).zip(out.iter_mut()) {
            s.spawn(move |_| task(l, r, o));
        }
    });
}
