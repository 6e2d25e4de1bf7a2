use crate::backend::{BackendError, BackendResult, LockAge, LockBackend};
use crate::locks::Clock;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// In-memory lock backend with a single lock slot.
///
/// Create is atomic under the mutex, so concurrent callers see exactly one
/// winner.
#[derive(Default)]
pub(crate) struct StubBackend {
    state: Mutex<StubState>,
}

#[derive(Default)]
pub(crate) struct StubState {
    /// Current holder's owner marker.
    pub holder: Option<String>,
    /// Age reported while the lock is held.
    pub held_age: i64,
    /// Deletes report success but leave the holder in place.
    pub sticky: bool,
    /// Number of upcoming creates that fail with a server error.
    pub failing_creates: usize,
    pub fail_deletes: bool,
    pub fail_age_reads: bool,

    pub creates: usize,
    pub deletes: usize,
    pub age_reads: usize,
}

impl StubBackend {
    pub(crate) fn held(marker: &str, age: i64) -> Self {
        Self::default().configure(|s| {
            s.holder = Some(marker.to_string());
            s.held_age = age;
        })
    }

    pub(crate) fn configure(self, f: impl FnOnce(&mut StubState)) -> Self {
        f(&mut self.state.lock().unwrap());
        self
    }

    pub(crate) fn holder(&self) -> Option<String> {
        self.state.lock().unwrap().holder.clone()
    }

    pub(crate) fn creates(&self) -> usize {
        self.state.lock().unwrap().creates
    }

    pub(crate) fn deletes(&self) -> usize {
        self.state.lock().unwrap().deletes
    }

    pub(crate) fn age_reads(&self) -> usize {
        self.state.lock().unwrap().age_reads
    }
}

fn server_error() -> BackendError {
    BackendError::UnexpectedStatus {
        status: 500,
        body: "boom".to_string(),
    }
}

impl LockBackend for StubBackend {
    fn try_create(&self, _lock_name: &str, owner_marker: &str) -> BackendResult<bool> {
        let mut state = self.state.lock().unwrap();
        state.creates += 1;
        if state.failing_creates > 0 {
            state.failing_creates -= 1;
            return Err(server_error());
        }
        if state.holder.is_some() {
            return Ok(false);
        }
        state.holder = Some(owner_marker.to_string());
        Ok(true)
    }

    fn delete(&self, _lock_name: &str) -> BackendResult<()> {
        let mut state = self.state.lock().unwrap();
        state.deletes += 1;
        if state.fail_deletes {
            return Err(server_error());
        }
        if !state.sticky {
            state.holder = None;
        }
        Ok(())
    }

    fn read_age(&self, _lock_name: &str) -> BackendResult<LockAge> {
        let mut state = self.state.lock().unwrap();
        state.age_reads += 1;
        if state.fail_age_reads {
            return Err(server_error());
        }
        Ok(match state.holder {
            Some(_) => LockAge::Held {
                seconds: state.held_age,
            },
            None => LockAge::Absent,
        })
    }
}

/// Clock that only moves when slept on.
pub(crate) struct ManualClock {
    start: Instant,
    elapsed: Mutex<Duration>,
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualClock {
    pub(crate) fn new() -> Self {
        Self {
            start: Instant::now(),
            elapsed: Mutex::new(Duration::ZERO),
            sleeps: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Clock for &ManualClock {
    fn now(&self) -> Instant {
        self.start + *self.elapsed.lock().unwrap()
    }

    fn sleep(&self, duration: Duration) {
        *self.elapsed.lock().unwrap() += duration;
        self.sleeps.lock().unwrap().push(duration);
    }
}
