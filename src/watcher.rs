//! Debounced breach watching with stale-result suppression.
//!
//! [`BreachWatcher`] is the driver a UI feeds on every input change. The
//! local analysis runs synchronously and is returned immediately; the
//! breach check is debounced and its outcome is delivered on a channel,
//! tagged with the generation of the input that produced it. Outcomes for
//! inputs replaced before the update is queued are dropped. An input that
//! changes after queueing but before the receiver reads still leaves the
//! older update in the channel, so receivers should filter with
//! [`BreachWatcher::is_current`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;

use crate::breach::{BreachChecker, BreachError, BreachVerdict, RangeSource};
use crate::config::Settings;
use crate::debounce::Debouncer;
use crate::evaluator::{Analysis, Analyzer};

/// Breach outcome for one input generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachUpdate {
    pub generation: u64,
    pub outcome: Result<BreachVerdict, BreachError>,
}

/// Updates buffered before a debounced check waits for the receiver.
const UPDATE_CAPACITY: usize = 8;

type Job = (u64, SecretString);
type CheckFuture = std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>>;
type CheckFn = Box<dyn Fn(Job) -> CheckFuture + Send + Sync>;

pub struct BreachWatcher {
    analyzer: Analyzer,
    generation: Arc<AtomicU64>,
    debouncer: Debouncer<Job, CheckFn>,
}

impl BreachWatcher {
    /// Creates a watcher and the receiving end of its update channel.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new<S>(
        analyzer: Analyzer,
        source: S,
        settings: &Settings,
    ) -> (Self, mpsc::Receiver<BreachUpdate>)
    where
        S: RangeSource + Send + Sync + 'static,
    {
        let (tx, rx) = mpsc::channel(UPDATE_CAPACITY);
        let generation = Arc::new(AtomicU64::new(0));
        let checker = Arc::new(BreachChecker::new(source));

        let check: CheckFn = {
            let analyzer = analyzer.clone();
            let generation = Arc::clone(&generation);
            Box::new(move |(job_generation, password): Job| -> CheckFuture {
                let analyzer = analyzer.clone();
                let generation = Arc::clone(&generation);
                let checker = Arc::clone(&checker);
                let tx = tx.clone();
                Box::pin(async move {
                    let analysis = analyzer.analyze(&password);
                    let outcome = checker.screen(&password, &analysis).await;

                    // Wait for capacity before the staleness check so the
                    // check and the send happen without a suspension between.
                    let permit = match tx.reserve().await {
                        Ok(permit) => permit,
                        Err(_e) => {
                            #[cfg(feature = "tracing")]
                            tracing::error!("Failed to send breach update: {}", _e);
                            return;
                        }
                    };

                    if generation.load(Ordering::SeqCst) != job_generation {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            "discarding stale breach result for generation {}",
                            job_generation
                        );
                        return;
                    }

                    permit.send(BreachUpdate {
                        generation: job_generation,
                        outcome,
                    });
                })
            })
        };

        let watcher = Self {
            analyzer,
            generation,
            debouncer: Debouncer::new(check, settings.quiescence),
        };
        (watcher, rx)
    }

    /// Records a new input value: analyzes it now and schedules a
    /// debounced breach check.
    pub fn input(&mut self, password: &SecretString) -> Analysis {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let owned = SecretString::new(password.expose_secret().into());
        self.debouncer.call((generation, owned));
        self.analyzer.analyze(password)
    }

    /// Generation of the most recent input.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// True if `update` belongs to the most recent input.
    pub fn is_current(&self, update: &BreachUpdate) -> bool {
        update.generation == self.generation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::tests::FakeRangeSource;
    use crate::breach::HashRange;
    use std::time::Duration;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    fn settings() -> Settings {
        Settings {
            quiescence: Duration::from_millis(750),
            ..Settings::default()
        }
    }

    /// Range source that answers after a fixed delay.
    struct SlowSource {
        delay: Duration,
        inner: FakeRangeSource,
    }

    impl RangeSource for SlowSource {
        async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
            tokio::time::sleep(self.delay).await;
            self.inner.fetch_range(prefix).await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_returns_analysis_immediately() {
        let source = Arc::new(FakeRangeSource::default());
        let (mut watcher, _rx) = BreachWatcher::new(Analyzer::default(), Arc::clone(&source), &settings());

        let analysis = watcher.input(&secret("Xk9!mQ2#vL7$"));
        assert_eq!(analysis.score(), 3);
        assert_eq!(watcher.generation(), 1);
        assert!(source.queries().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_burst_checks_last_value_once() {
        let source = Arc::new(FakeRangeSource::default());
        let (mut watcher, mut rx) =
            BreachWatcher::new(Analyzer::default(), Arc::clone(&source), &settings());

        for typed in ["X", "Xk", "Xk9", "Xk9!", "Xk9!m"] {
            watcher.input(&secret(typed));
            tokio::time::sleep(Duration::from_millis(120)).await;
        }

        let update = rx.recv().await.expect("should receive update");
        assert_eq!(update.generation, 5);
        assert!(watcher.is_current(&update));
        assert_eq!(update.outcome, Ok(BreachVerdict::Clean));

        let expected = HashRange::of(&secret("Xk9!m"));
        assert_eq!(source.queries(), vec![expected.prefix().to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_known_common_skips_lookup() {
        let source = Arc::new(FakeRangeSource::default());
        let (mut watcher, mut rx) =
            BreachWatcher::new(Analyzer::default(), Arc::clone(&source), &settings());

        watcher.input(&secret("password"));
        let update = rx.recv().await.expect("should receive update");
        assert_eq!(update.outcome, Ok(BreachVerdict::KnownCommon));
        assert!(source.queries().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_clears() {
        let source = Arc::new(FakeRangeSource::default());
        let (mut watcher, mut rx) =
            BreachWatcher::new(Analyzer::default(), Arc::clone(&source), &settings());

        watcher.input(&secret(""));
        let update = rx.recv().await.expect("should receive update");
        assert_eq!(update.outcome, Ok(BreachVerdict::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_is_delivered() {
        let failure = BreachError::Transport("connection refused".to_string());
        let pwd = secret("Xk9!mQ2#vL7$");
        let range = HashRange::of(&pwd);
        let source = FakeRangeSource::with(range.prefix(), Err(failure.clone()));
        let (mut watcher, mut rx) = BreachWatcher::new(Analyzer::default(), source, &settings());

        watcher.input(&pwd);
        let update = rx.recv().await.expect("should receive update");
        assert_eq!(update.outcome, Err(failure));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_in_flight_result_is_dropped() {
        let source = SlowSource {
            delay: Duration::from_secs(5),
            inner: FakeRangeSource::default(),
        };
        let (mut watcher, mut rx) = BreachWatcher::new(Analyzer::default(), source, &settings());

        // First check fires after the window and is still in flight when
        // the input changes.
        watcher.input(&secret("first-value-1A"));
        tokio::time::sleep(Duration::from_secs(1)).await;
        watcher.input(&secret("second-value-2B"));

        let update = rx.recv().await.expect("should receive update");
        assert_eq!(update.generation, 2);
        assert_eq!(update.outcome, Ok(BreachVerdict::Clean));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_blocked_on_full_channel_is_dropped_when_stale() {
        let source = Arc::new(FakeRangeSource::default());
        let (mut watcher, mut rx) =
            BreachWatcher::new(Analyzer::default(), Arc::clone(&source), &settings());
        let settle = Duration::from_millis(800);

        // Fill the channel, then let one more check wait for capacity.
        for n in 1..=UPDATE_CAPACITY + 1 {
            watcher.input(&secret(&format!("value-{}-Ab1!", n)));
            tokio::time::sleep(settle).await;
        }
        let waiting = UPDATE_CAPACITY as u64 + 1;
        watcher.input(&secret("latest-Zz9?"));

        for expected in 1..=UPDATE_CAPACITY as u64 {
            let update = rx.recv().await.expect("should receive update");
            assert_eq!(update.generation, expected);
        }

        let update = rx.recv().await.expect("should receive update");
        assert_ne!(update.generation, waiting);
        assert_eq!(update.generation, waiting + 1);
        assert!(watcher.is_current(&update));
    }
}
