use std::time;

use anyhow::{anyhow, Error, Result};
use crossbeam_utils::thread;

pub trait Runnable: Sync {
    fn run(&self) -> Result<()>;
}

/// Runs every runnable on its own scoped thread and waits for all of them.
/// The first failure is returned once every thread has stopped.
pub fn run_in_parallel(runnables: Vec<&dyn Runnable>) -> Result<()> {
    run_supervised(runnables, |_| {})
}

/// Like [`run_in_parallel`], but `on_failure` is called from the failing
/// thread as soon as a runnable returns an error, while the others may
/// still be running.
pub fn run_supervised<F>(runnables: Vec<&dyn Runnable>, on_failure: F) -> Result<()>
where
    F: Fn(&Error) + Sync,
{
    let on_failure = &on_failure;

    thread::scope(|s| {
        let handles: Vec<_> = runnables
            .into_iter()
            .map(|runnable| {
                s.spawn(move |_| {
                    let result = runnable.run();

                    if let Err(err) = &result {
                        on_failure(err);
                    }

                    result
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(anyhow!("Runnable thread panicked")))
            })
            .collect::<Result<Vec<()>>>()
            .map(|_| ())
    })
    .map_err(|_| anyhow!("Runnable scope panicked"))?
}

pub fn sleep_millis(millis: u64) {
    let wait_duration = time::Duration::from_millis(millis);
    std::thread::sleep(wait_duration);
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex,
    };

    use anyhow::bail;

    use super::*;

    struct Counter(AtomicUsize);

    impl Runnable for Counter {
        fn run(&self) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Failing;

    impl Runnable for Failing {
        fn run(&self) -> Result<()> {
            bail!("boom")
        }
    }

    /// Spins until released, like a server loop that never returns by itself.
    struct Blocking(AtomicBool);

    impl Runnable for Blocking {
        fn run(&self) -> Result<()> {
            while !self.0.load(Ordering::SeqCst) {
                sleep_millis(1);
            }
            Ok(())
        }
    }

    #[test]
    fn runs_every_runnable() {
        let a = Counter(AtomicUsize::new(0));
        let b = Counter(AtomicUsize::new(0));

        run_in_parallel(vec![&a, &b]).unwrap();

        assert_eq!(a.0.load(Ordering::SeqCst), 1);
        assert_eq!(b.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reports_failures() {
        let ok = Counter(AtomicUsize::new(0));
        let err = run_in_parallel(vec![&ok, &Failing]).unwrap_err();

        assert_eq!(err.to_string(), "boom");
        assert_eq!(ok.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn signals_failure_while_others_keep_running() {
        let blocking = Blocking(AtomicBool::new(false));
        let failures = Mutex::new(Vec::new());

        let result = run_supervised(vec![&blocking, &Failing], |err| {
            failures.lock().unwrap().push(err.to_string());
            blocking.0.store(true, Ordering::SeqCst);
        });

        assert_eq!(result.unwrap_err().to_string(), "boom");
        assert_eq!(*failures.lock().unwrap(), vec!["boom".to_string()]);
    }

    #[test]
    fn no_failure_no_signal() {
        let ok = Counter(AtomicUsize::new(0));
        let signalled = AtomicBool::new(false);

        run_supervised(vec![&ok], |_| signalled.store(true, Ordering::SeqCst)).unwrap();

        assert!(!signalled.load(Ordering::SeqCst));
    }
}
