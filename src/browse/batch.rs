// src/browse/batch.rs
//! Decoding many containers on a small pool of worker threads
//!
//! Each container is still decoded by one blocking call; the pool only
//! spreads independent files across threads. Results come back in input
//! order, one per path, so a failing file never hides the others.

use super::Progress;
use crate::error::Result;
use crate::reader::{Container, DecodeOptions};
use crossbeam_channel::unbounded;
use std::path::PathBuf;
use std::thread;

/// Outcome of decoding one file
#[derive(Debug)]
pub struct BatchResult {
    pub path: PathBuf,
    pub result: Result<Container>,
}

pub fn decode_all(paths: &[PathBuf], workers: usize, options: &DecodeOptions) -> Vec<BatchResult> {
    decode_all_with_progress(paths, workers, options, |_| {})
}

/// Decode every path, calling `progress` on the calling thread as each file
/// finishes.
pub fn decode_all_with_progress(
    paths: &[PathBuf],
    workers: usize,
    options: &DecodeOptions,
    mut progress: impl FnMut(&Progress),
) -> Vec<BatchResult> {
    let total = paths.len();
    let workers = workers.clamp(1, total.max(1));

    let (job_tx, job_rx) = unbounded::<(usize, PathBuf)>();
    let (done_tx, done_rx) = unbounded::<(usize, Result<Container>)>();

    for job in paths.iter().cloned().enumerate() {
        // Receivers outlive this loop, so sending cannot fail.
        let _ = job_tx.send(job);
    }
    drop(job_tx);

    let mut slots: Vec<Option<Result<Container>>> = (0..total).map(|_| None).collect();

    thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let done_tx = done_tx.clone();
            scope.spawn(move || {
                for (index, path) in job_rx.iter() {
                    let result = Container::open_with(&path, options);
                    if let Err(e) = &result {
                        log::warn!("failed to decode {}: {}", path.display(), e);
                    }
                    if done_tx.send((index, result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(done_tx);

        for (done, (index, result)) in done_rx.iter().enumerate() {
            slots[index] = Some(result);
            progress(&Progress {
                done: done + 1,
                total,
                current: paths[index].clone(),
            });
        }
    });

    paths
        .iter()
        .cloned()
        .zip(slots)
        .filter_map(|(path, slot)| slot.map(|result| BatchResult { path, result }))
        .collect()
}
