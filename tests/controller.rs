use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use pomodoro_ring::{
    controller_task,
    services::Notifier,
    state::{AppState, SessionType, BREAK_DURATION, WORK_DURATION},
    view::{Command, DisplaySnapshot},
};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::sleep,
};

#[derive(Default, Clone)]
struct RecordingNotifier {
    calls: Arc<AtomicUsize>,
    finished: Arc<Mutex<Vec<SessionType>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, finished: SessionType) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.finished.lock().unwrap().push(finished);
    }
}

struct Harness {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<DisplaySnapshot>,
    notifier: RecordingNotifier,
    controller: JoinHandle<AppState>,
}

impl Harness {
    fn start() -> Self {
        let notifier = RecordingNotifier::default();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let (commands, command_rx) = mpsc::unbounded_channel();
        let state = AppState::new(Box::new(notifier.clone()), tick_tx);
        let snapshots = state.subscribe();
        let controller = tokio::spawn(controller_task(state, command_rx, tick_rx));
        Self {
            commands,
            snapshots,
            notifier,
            controller,
        }
    }

    /// Send a command and let the controller handle it
    async fn send(&self, command: Command) {
        self.commands.send(command).unwrap();
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
    }

    fn snapshot(&self) -> DisplaySnapshot {
        self.snapshots.borrow().clone()
    }

    async fn stop(self) -> AppState {
        drop(self.commands);
        self.controller.await.unwrap()
    }
}

fn seconds(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[tokio::test(start_paused = true)]
async fn counts_down_once_per_second_while_running() {
    let harness = Harness::start();
    harness.send(Command::ToggleRun).await;

    sleep(Duration::from_millis(3500)).await;
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.time_left_seconds, WORK_DURATION - 3);
    assert_eq!(snapshot.formatted_time, "24:57");
    assert!(snapshot.is_running);
    assert_eq!(snapshot.completed_sessions, 0);

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn pausing_freezes_the_countdown() {
    let harness = Harness::start();
    harness.send(Command::ToggleRun).await;
    sleep(Duration::from_millis(2500)).await;
    harness.send(Command::ToggleRun).await;

    sleep(seconds(30)).await;
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.time_left_seconds, WORK_DURATION - 2);
    assert!(!snapshot.is_running);

    // resuming picks up where it left off
    harness.send(Command::ToggleRun).await;
    sleep(Duration::from_millis(1500)).await;
    assert_eq!(harness.snapshot().time_left_seconds, WORK_DURATION - 3);

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn full_work_session_rolls_into_a_paused_break() {
    let harness = Harness::start();
    harness.send(Command::ToggleRun).await;

    sleep(Duration::from_millis(u64::from(WORK_DURATION) * 1000 + 500)).await;
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.session_type, SessionType::Break);
    assert_eq!(snapshot.time_left_seconds, BREAK_DURATION);
    assert!(!snapshot.is_running);
    assert_eq!(snapshot.completed_sessions, 1);
    assert_eq!(snapshot.progress_percent, 0.0);
    assert!(snapshot.last_completed_at.is_some());
    assert_eq!(harness.notifier.calls.load(Ordering::SeqCst), 1);

    // the ticker is gone, nothing moves afterwards
    sleep(seconds(60)).await;
    assert_eq!(harness.snapshot().time_left_seconds, BREAK_DURATION);

    let state = harness.stop().await;
    assert!(!state.is_ticking());
}

#[tokio::test(start_paused = true)]
async fn break_completion_returns_to_work_without_counting() {
    let harness = Harness::start();
    harness.send(Command::SwitchSession(SessionType::Break)).await;
    harness.send(Command::ToggleRun).await;

    sleep(Duration::from_millis(u64::from(BREAK_DURATION) * 1000 + 500)).await;
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.session_type, SessionType::Work);
    assert_eq!(snapshot.time_left_seconds, WORK_DURATION);
    assert!(!snapshot.is_running);
    assert_eq!(snapshot.completed_sessions, 0);
    assert_eq!(
        *harness.notifier.finished.lock().unwrap(),
        vec![SessionType::Break]
    );

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn muted_completion_stays_silent() {
    let harness = Harness::start();
    harness.send(Command::ToggleSound).await;
    harness.send(Command::SwitchSession(SessionType::Break)).await;
    harness.send(Command::ToggleRun).await;

    sleep(Duration::from_millis(u64::from(BREAK_DURATION) * 1000 + 500)).await;
    assert_eq!(harness.snapshot().session_type, SessionType::Work);
    assert_eq!(harness.notifier.calls.load(Ordering::SeqCst), 0);

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn reset_mid_session_refills_and_stops() {
    let harness = Harness::start();
    harness.send(Command::ToggleRun).await;
    sleep(Duration::from_millis(700_500)).await;
    assert_eq!(harness.snapshot().time_left_seconds, 800);

    harness.send(Command::Reset).await;
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.time_left_seconds, WORK_DURATION);
    assert!(!snapshot.is_running);
    assert_eq!(snapshot.session_type, SessionType::Work);

    sleep(seconds(10)).await;
    assert_eq!(harness.snapshot().time_left_seconds, WORK_DURATION);

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn switching_mid_session_stops_and_never_counts() {
    let harness = Harness::start();
    harness.send(Command::ToggleRun).await;
    sleep(Duration::from_millis(300_500)).await;
    assert_eq!(harness.snapshot().time_left_seconds, 1200);

    harness.send(Command::SwitchSession(SessionType::Break)).await;
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.session_type, SessionType::Break);
    assert_eq!(snapshot.time_left_seconds, BREAK_DURATION);
    assert!(!snapshot.is_running);
    assert_eq!(snapshot.completed_sessions, 0);

    sleep(seconds(10)).await;
    assert_eq!(harness.snapshot().time_left_seconds, BREAK_DURATION);

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn quick_pause_resume_does_not_double_tick() {
    let harness = Harness::start();
    harness.send(Command::ToggleRun).await;
    sleep(Duration::from_millis(900)).await;
    harness.send(Command::ToggleRun).await;
    harness.send(Command::ToggleRun).await;

    // the new run starts its own full second
    sleep(Duration::from_millis(500)).await;
    assert_eq!(harness.snapshot().time_left_seconds, WORK_DURATION);
    sleep(Duration::from_millis(600)).await;
    assert_eq!(harness.snapshot().time_left_seconds, WORK_DURATION - 1);

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn closing_the_command_channel_releases_the_ticker() {
    let harness = Harness::start();
    harness.send(Command::ToggleRun).await;
    sleep(Duration::from_millis(1500)).await;

    let state = harness.stop().await;
    assert!(!state.is_ticking());
    assert_eq!(state.timer().time_left_seconds(), WORK_DURATION - 1);
}
