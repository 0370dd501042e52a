use std::num::NonZeroUsize;
use std::thread;

use crossbeam_channel::{unbounded, Receiver};
use indicatif::ProgressBar;

use crate::error::{panic_message, SearchError};
use crate::search::{Engine, Found, SearchState, Solution};

/// Number of chosen words at which the tree is cut into work items. Nearly
/// all the work sits below the first word.
pub const SPLIT_DEPTH: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkItem {
    Search(SearchState),
    Stop,
}

/// What one worker did during a parallel run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker: usize,
    pub branches: usize,
    pub solutions: usize,
}

#[derive(Debug, Default)]
pub struct ParallelRun {
    pub solutions: Vec<Solution>,
    pub workers: Vec<WorkerReport>,
}

/// Available hardware parallelism, or 1 if unknown.
pub fn default_workers() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

impl Engine {
    /// Searches with a pool of `workers` threads fed from a shared queue.
    ///
    /// The calling thread walks the tree down to [`SPLIT_DEPTH`] and queues
    /// every branch it reaches, then one [`WorkItem::Stop`] per worker. Each
    /// worker keeps its own solutions until it is joined. `progress` grows by
    /// one per queued branch and advances as branches finish.
    pub fn solve_parallel(
        &self,
        workers: NonZeroUsize,
        progress: &ProgressBar,
    ) -> Result<ParallelRun, SearchError> {
        self.run_pool(workers, progress, |_, state, solutions| {
            self.descend(state, None, &mut |found| {
                if let Found::Solution(solution) = found {
                    solutions.push(solution);
                }
            })
        })
    }

    /// Runs the queue and worker pool, with `work(worker, branch, solutions)`
    /// searching one queued branch.
    fn run_pool<W>(
        &self,
        workers: NonZeroUsize,
        progress: &ProgressBar,
        work: W,
    ) -> Result<ParallelRun, SearchError>
    where
        W: Fn(usize, SearchState, &mut Vec<Solution>) + Sync,
    {
        let workers = workers.get();
        let work = &work;

        thread::scope(|scope| -> Result<ParallelRun, SearchError> {
            let (sender, receiver) = unbounded();

            let mut handles = Vec::with_capacity(workers);
            for worker in 0..workers {
                let receiver = receiver.clone();
                let handle = thread::Builder::new()
                    .name(format!("search-{}", worker))
                    .spawn_scoped(scope, move || drain(worker, &receiver, progress, work))?;
                handles.push(handle);
            }
            drop(receiver);

            // A send only fails once every worker has panicked, and the joins
            // below report that.
            let mut solutions = Vec::new();
            self.descend(
                SearchState::default(),
                Some(SPLIT_DEPTH),
                &mut |found| match found {
                    Found::Solution(solution) => solutions.push(solution),
                    Found::Branch(state) => {
                        progress.inc_length(1);
                        let _ = sender.send(WorkItem::Search(state));
                    }
                },
            );
            for _ in 0..workers {
                let _ = sender.send(WorkItem::Stop);
            }

            let mut run = ParallelRun {
                solutions,
                workers: Vec::with_capacity(workers),
            };
            let mut failure = None;
            for (worker, handle) in handles.into_iter().enumerate() {
                match handle.join() {
                    Ok((branches, mut found)) => {
                        run.workers.push(WorkerReport {
                            worker,
                            branches,
                            solutions: found.len(),
                        });
                        run.solutions.append(&mut found);
                    }
                    Err(payload) => {
                        failure.get_or_insert(SearchError::WorkerPanicked {
                            worker,
                            message: panic_message(payload.as_ref()),
                        });
                    }
                }
            }

            match failure {
                Some(err) => Err(err),
                None => Ok(run),
            }
        })
    }
}

/// Worker loop: search queued branches until told to stop.
fn drain<W>(
    worker: usize,
    receiver: &Receiver<WorkItem>,
    progress: &ProgressBar,
    work: &W,
) -> (usize, Vec<Solution>)
where
    W: Fn(usize, SearchState, &mut Vec<Solution>),
{
    let mut branches = 0;
    let mut solutions = Vec::new();
    while let Ok(WorkItem::Search(state)) = receiver.recv() {
        work(worker, state, &mut solutions);
        branches += 1;
        progress.inc(1);
    }
    (branches, solutions)
}
