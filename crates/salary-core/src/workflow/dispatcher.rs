//! Concurrent rendering of letters into one file per record
//!
//! A fixed pool of tokio tasks pulls records from one bounded queue. Rendering
//! is CPU-bound and runs on the blocking pool; files are written with
//! `tokio::fs`. A failed record is logged and counted, never fatal.

use super::traits::DocumentRenderer;
use crate::config::RenderingConfig;
use crate::constants::{DEFAULT_PROGRESS_INTERVAL, DEFAULT_QUEUE_CAPACITY, DEFAULT_WORKER_COUNT};
use crate::error::{Result, SalaryError};
use crate::paths::letter_path;
use futures::future::join_all;
use salary_types::LetterFields;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

const BYTES_PER_KB: f64 = 1024.0;
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOptions {
    pub worker_count: usize,
    pub queue_capacity: usize,
    /// Log progress after every this many rendered files
    pub progress_interval: usize,
    /// Render only the first `limit` records; 0 renders all
    pub limit: usize,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            limit: 0,
        }
    }
}

impl From<&RenderingConfig> for DispatchOptions {
    fn from(config: &RenderingConfig) -> Self {
        Self {
            worker_count: config.worker_count,
            queue_capacity: config.queue_capacity,
            progress_interval: config.progress_interval,
            limit: config.limit,
        }
    }
}

/// Outcome of one dispatch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub queued: usize,
    pub rendered: usize,
    pub failed: usize,
    pub total_bytes: u64,
}

impl DispatchSummary {
    pub fn total_megabytes(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_MB
    }

    pub fn average_kilobytes(&self) -> f64 {
        if self.rendered == 0 {
            return 0.0;
        }
        self.total_bytes as f64 / self.rendered as f64 / BYTES_PER_KB
    }
}

/// Counters shared by all workers
#[derive(Default)]
struct Progress {
    rendered: AtomicUsize,
    failed: AtomicUsize,
    bytes: AtomicU64,
}

impl Progress {
    fn record_success(&self, bytes: u64, interval: usize) {
        let total_bytes = self.bytes.fetch_add(bytes, Ordering::SeqCst) + bytes;
        let rendered = self.rendered.fetch_add(1, Ordering::SeqCst) + 1;

        if interval > 0 && rendered % interval == 0 {
            log::info!(
                "Generated {} PDFs... (current size: {:.2} MB)",
                rendered,
                total_bytes as f64 / BYTES_PER_MB
            );
        }
    }

    fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::SeqCst);
    }
}

type SharedQueue = Arc<Mutex<mpsc::Receiver<LetterFields>>>;

pub struct RenderDispatcher<R> {
    renderer: Arc<R>,
    options: DispatchOptions,
}

impl<R: DocumentRenderer + 'static> RenderDispatcher<R> {
    pub fn new(renderer: Arc<R>, options: DispatchOptions) -> Self {
        Self { renderer, options }
    }

    pub fn options(&self) -> &DispatchOptions {
        &self.options
    }

    /// Render `records` into `output_dir`, creating the directory if needed.
    ///
    /// Only a failure to create the directory is returned as an error; per
    /// record failures show up in `DispatchSummary::failed`.
    pub async fn dispatch_all(&self, records: Vec<LetterFields>, output_dir: &Path) -> Result<DispatchSummary> {
        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|source| SalaryError::OutputDirectory {
                path: output_dir.to_path_buf(),
                source,
            })?;

        let limit = match self.options.limit {
            0 => records.len(),
            limit => limit.min(records.len()),
        };
        let worker_count = self.options.worker_count.max(1);

        log::info!(
            "Rendering {} of {} letters into {} with {} workers",
            limit,
            records.len(),
            output_dir.display(),
            worker_count
        );

        let (tx, rx) = mpsc::channel(self.options.queue_capacity.max(1));
        let queue: SharedQueue = Arc::new(Mutex::new(rx));
        let progress = Arc::new(Progress::default());

        let workers: Vec<_> = (0..worker_count)
            .map(|worker_id| {
                tokio::spawn(run_worker(
                    worker_id,
                    Arc::clone(&queue),
                    Arc::clone(&self.renderer),
                    Arc::clone(&progress),
                    output_dir.to_path_buf(),
                    self.options.progress_interval,
                ))
            })
            .collect();

        let mut queued = 0;
        for fields in records.into_iter().take(limit) {
            if tx.send(fields).await.is_err() {
                log::error!("All render workers stopped after {} queued letters", queued);
                break;
            }
            queued += 1;
        }
        // Closing the queue lets idle workers exit
        drop(tx);

        for joined in join_all(workers).await {
            if let Err(e) = joined {
                log::error!("Render worker terminated abnormally: {}", e);
            }
        }

        let summary = DispatchSummary {
            queued,
            rendered: progress.rendered.load(Ordering::SeqCst),
            failed: progress.failed.load(Ordering::SeqCst),
            total_bytes: progress.bytes.load(Ordering::SeqCst),
        };

        log::info!(
            "Successfully generated {} PDFs in {} ({} failed)",
            summary.rendered,
            output_dir.display(),
            summary.failed
        );
        log::info!(
            "Total size: {:.2} MB, average {:.2} KB per document",
            summary.total_megabytes(),
            summary.average_kilobytes()
        );

        Ok(summary)
    }
}

async fn run_worker<R: DocumentRenderer + 'static>(
    worker_id: usize,
    queue: SharedQueue,
    renderer: Arc<R>,
    progress: Arc<Progress>,
    output_dir: PathBuf,
    progress_interval: usize,
) {
    loop {
        // The lock covers only the receive; rendering and writing run unlocked
        let next = {
            let mut queue = queue.lock().await;
            queue.recv().await
        };
        let Some(fields) = next else {
            break;
        };

        let path = letter_path(&output_dir, &fields);
        match render_to_file(Arc::clone(&renderer), fields, &path).await {
            Ok(bytes) => progress.record_success(bytes, progress_interval),
            Err(e) => {
                progress.record_failure();
                log::error!("Error generating PDF {}: {}", path.display(), e);
            }
        }
    }

    log::debug!("Render worker {} finished", worker_id);
}

async fn render_to_file<R: DocumentRenderer + 'static>(
    renderer: Arc<R>,
    fields: LetterFields,
    path: &Path,
) -> Result<u64> {
    let document = tokio::task::spawn_blocking(move || renderer.render(&fields))
        .await
        .map_err(|e| SalaryError::Render(format!("Render task failed: {}", e)))??;

    tokio::fs::write(path, &document).await?;
    Ok(document.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Writes the identifier as the document body; fails for listed identifiers
    struct StubRenderer {
        failing: HashSet<String>,
    }

    impl StubRenderer {
        fn new() -> Self {
            Self { failing: HashSet::new() }
        }

        fn failing_on(identifiers: &[&str]) -> Self {
            Self {
                failing: identifiers.iter().map(|id| id.to_string()).collect(),
            }
        }
    }

    impl DocumentRenderer for StubRenderer {
        fn render(&self, fields: &LetterFields) -> Result<Vec<u8>> {
            if self.failing.contains(&fields.identifier) {
                return Err(SalaryError::Render(format!("forced failure for {}", fields.identifier)));
            }
            Ok(fields.identifier.clone().into_bytes())
        }
    }

    /// Holds each render until a second one is running at the same time
    struct RendezvousRenderer {
        arrived: std::sync::Mutex<usize>,
        ready: std::sync::Condvar,
    }

    impl DocumentRenderer for RendezvousRenderer {
        fn render(&self, fields: &LetterFields) -> Result<Vec<u8>> {
            let mut arrived = self.arrived.lock().unwrap();
            *arrived += 1;
            self.ready.notify_all();

            let (_arrived, wait) = self
                .ready
                .wait_timeout_while(arrived, std::time::Duration::from_secs(5), |n| *n < 2)
                .unwrap();
            if wait.timed_out() {
                return Err(SalaryError::Render(format!("{} rendered alone", fields.identifier)));
            }
            Ok(fields.identifier.clone().into_bytes())
        }
    }

    fn record(index: usize) -> LetterFields {
        LetterFields {
            identifier: format!("0101{:02}-{}", 60 + index % 40, 1000 + index),
            first_name: "Anne".to_string(),
            last_name: format!("Hansen{}", index),
            base_salary: "30000.00".to_string(),
            new_base_salary: "30750.00".to_string(),
            gross_salary: "36000.00".to_string(),
            new_gross_salary: "36900.00".to_string(),
            individual_adjustment: "750.00".to_string(),
            percentage_increase: "2.50".to_string(),
            effective_date: "1. marts 2025".to_string(),
            pension_increase: "1.00".to_string(),
            letter_type: None,
        }
    }

    fn records(count: usize) -> Vec<LetterFields> {
        (0..count).map(record).collect()
    }

    fn options(limit: usize) -> DispatchOptions {
        DispatchOptions {
            worker_count: 4,
            queue_capacity: 2,
            progress_interval: 5,
            limit,
        }
    }

    fn file_count(dir: &Path) -> usize {
        std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
    }

    #[tokio::test]
    async fn test_renders_every_record() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = RenderDispatcher::new(Arc::new(StubRenderer::new()), options(0));

        let batch = records(20);
        let expected_bytes: u64 = batch.iter().map(|r| r.identifier.len() as u64).sum();
        let summary = dispatcher.dispatch_all(batch, dir.path()).await.unwrap();

        assert_eq!(summary.queued, 20);
        assert_eq!(summary.rendered, 20);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.total_bytes, expected_bytes);
        assert_eq!(file_count(dir.path()), 20);

        let first = record(0);
        let written = std::fs::read(letter_path(dir.path(), &first)).unwrap();
        assert_eq!(written, first.identifier.into_bytes());
    }

    #[tokio::test]
    async fn test_workers_render_concurrently() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = RendezvousRenderer {
            arrived: std::sync::Mutex::new(0),
            ready: std::sync::Condvar::new(),
        };
        let options = DispatchOptions {
            worker_count: 2,
            ..options(0)
        };
        let dispatcher = RenderDispatcher::new(Arc::new(renderer), options);

        let summary = dispatcher.dispatch_all(records(4), dir.path()).await.unwrap();

        assert_eq!(summary.rendered, 4);
        assert_eq!(summary.failed, 0);
    }

    #[tokio::test]
    async fn test_zero_records() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("letters");
        let dispatcher = RenderDispatcher::new(Arc::new(StubRenderer::new()), options(0));

        let summary = dispatcher.dispatch_all(Vec::new(), &out).await.unwrap();

        assert_eq!(summary, DispatchSummary::default());
        assert!(out.is_dir());
        assert_eq!(file_count(&out), 0);
        assert_eq!(summary.average_kilobytes(), 0.0);
    }

    #[tokio::test]
    async fn test_limit_renders_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = RenderDispatcher::new(Arc::new(StubRenderer::new()), options(7));

        let summary = dispatcher.dispatch_all(records(30), dir.path()).await.unwrap();

        assert_eq!(summary.queued, 7);
        assert_eq!(summary.rendered, 7);
        assert_eq!(file_count(dir.path()), 7);
        for index in 0..7 {
            assert!(letter_path(dir.path(), &record(index)).exists());
        }
        assert!(!letter_path(dir.path(), &record(7)).exists());
    }

    #[tokio::test]
    async fn test_limit_larger_than_batch() {
        let dir = tempfile::tempdir().unwrap();
        let dispatcher = RenderDispatcher::new(Arc::new(StubRenderer::new()), options(100));

        let summary = dispatcher.dispatch_all(records(3), dir.path()).await.unwrap();
        assert_eq!(summary.rendered, 3);
    }

    #[tokio::test]
    async fn test_render_failure_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        let batch = records(10);
        let renderer = StubRenderer::failing_on(&[batch[3].identifier.as_str()]);
        let dispatcher = RenderDispatcher::new(Arc::new(renderer), options(0));

        let summary = dispatcher.dispatch_all(batch, dir.path()).await.unwrap();

        assert_eq!(summary.queued, 10);
        assert_eq!(summary.rendered, 9);
        assert_eq!(summary.failed, 1);
        assert_eq!(file_count(dir.path()), 9);
        assert!(!letter_path(dir.path(), &record(3)).exists());
    }

    #[tokio::test]
    async fn test_unwritable_path_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        let mut batch = records(5);
        // A separator in the name points into a directory that does not exist
        batch[2].first_name = "Anne/Marie".to_string();
        let dispatcher = RenderDispatcher::new(Arc::new(StubRenderer::new()), options(5));

        let summary = dispatcher.dispatch_all(batch, dir.path()).await.unwrap();

        assert_eq!(summary.rendered, 4);
        assert_eq!(summary.failed, 1);
        assert_eq!(file_count(dir.path()), 4);
    }

    #[tokio::test]
    async fn test_output_directory_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("occupied");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let dispatcher = RenderDispatcher::new(Arc::new(StubRenderer::new()), options(0));

        let err = dispatcher.dispatch_all(records(2), &blocker.join("letters")).await.unwrap_err();
        assert!(matches!(err, SalaryError::OutputDirectory { .. }));
    }

    #[tokio::test]
    async fn test_single_worker_single_slot_queue() {
        let dir = tempfile::tempdir().unwrap();
        let options = DispatchOptions {
            worker_count: 1,
            queue_capacity: 1,
            progress_interval: 1,
            limit: 0,
        };
        let dispatcher = RenderDispatcher::new(Arc::new(StubRenderer::new()), options);

        let summary = dispatcher.dispatch_all(records(12), dir.path()).await.unwrap();
        assert_eq!(summary.rendered, 12);
    }

    #[test]
    fn test_summary_sizes() {
        let summary = DispatchSummary {
            queued: 2,
            rendered: 2,
            failed: 0,
            total_bytes: 2 * 1024 * 1024,
        };
        assert!((summary.total_megabytes() - 2.0).abs() < f64::EPSILON);
        assert!((summary.average_kilobytes() - 1024.0).abs() < f64::EPSILON);
    }
}
