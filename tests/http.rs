use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

// 2025-07-05 sits on day index 4 of the plan window starting 2025-07-01.
const IN_WINDOW_DATE: &str = "2025-07-05";
const BEFORE_WINDOW_DATE: &str = "2025-06-30";

#[derive(Debug, Deserialize)]
struct DayResponse {
    index: usize,
    date: String,
    label: String,
    completed: [bool; 3],
    notes: String,
}

#[derive(Debug, Deserialize)]
struct TodayResponse {
    date: String,
    day_index: i64,
    active: bool,
    day: Option<DayResponse>,
}

#[derive(Debug, Deserialize)]
struct TaskResponse {
    label: String,
}

#[derive(Debug, Deserialize)]
struct GoalResponse {
    title: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct PlanResponse {
    start_date: String,
    view: String,
    today_index: i64,
    tasks: Vec<TaskResponse>,
    goals: Vec<GoalResponse>,
    days: Vec<DayResponse>,
}

#[derive(Debug, Deserialize)]
struct ViewResponse {
    view: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(reference_date: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_progress_tracker"))
        .env("PORT", port.to_string())
        .env("APP_REF_DATE", reference_date)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server(IN_WINDOW_DATE).await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_plan(client: &Client, base_url: &str) -> PlanResponse {
    client
        .get(format!("{base_url}/api/plan"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_plan_projection_is_complete() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let plan = fetch_plan(&client, &server.base_url).await;
    assert_eq!(plan.start_date, "2025-07-01");
    assert_eq!(plan.days.len(), 30);
    assert_eq!(plan.tasks.len(), 3);
    assert_eq!(plan.goals.len(), 3);
    assert_eq!(plan.tasks[0].label, "Study (30 mins)");
    assert_eq!(plan.goals[0].title, "Complete 1 full SAT test");
    assert!(!plan.goals[0].description.is_empty());
    assert_eq!(plan.days[0].date, "2025-07-01");
    assert_eq!(plan.days[0].label, "Jul 1");
    assert_eq!(plan.days[29].date, "2025-07-30");
    for (index, day) in plan.days.iter().enumerate() {
        assert_eq!(day.index, index);
    }
}

#[tokio::test]
async fn http_toggle_updates_single_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_plan(&client, &server.base_url).await;

    let updated: DayResponse = client
        .post(format!("{}/api/toggle", server.base_url))
        .json(&serde_json::json!({ "day": 2, "task": 1 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated.index, 2);
    assert_eq!(updated.completed[1], !before.days[2].completed[1]);
    assert_eq!(updated.completed[0], before.days[2].completed[0]);
    assert_eq!(updated.completed[2], before.days[2].completed[2]);

    let after = fetch_plan(&client, &server.base_url).await;
    for (index, day) in after.days.iter().enumerate() {
        if index == 2 {
            assert_eq!(day.completed, updated.completed);
        } else {
            assert_eq!(day.completed, before.days[index].completed);
            assert_eq!(day.notes, before.days[index].notes);
        }
    }

    // toggling again restores the original flag
    let restored: DayResponse = client
        .post(format!("{}/api/toggle", server.base_url))
        .json(&serde_json::json!({ "day": 2, "task": 1 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(restored.completed, before.days[2].completed);
}

#[tokio::test]
async fn http_toggle_rejects_out_of_range() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/toggle", server.base_url))
        .json(&serde_json::json!({ "day": 30, "task": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .post(format!("{}/api/toggle", server.base_url))
        .json(&serde_json::json!({ "day": 0, "task": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let plan = fetch_plan(&client, &server.base_url).await;
    assert!(!plan.days[0].completed[0]);
}

#[tokio::test]
async fn http_notes_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let text = "felt strong on the run, SAT review pending";
    let updated: DayResponse = client
        .post(format!("{}/api/notes", server.base_url))
        .json(&serde_json::json!({ "day": 9, "notes": text }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated.index, 9);
    assert_eq!(updated.notes, text);

    let plan = fetch_plan(&client, &server.base_url).await;
    assert_eq!(plan.days[9].notes, text);
    assert!(plan.days[8].notes.is_empty());
    assert!(plan.days[10].notes.is_empty());

    let response = client
        .post(format!("{}/api/notes", server.base_url))
        .json(&serde_json::json!({ "day": 30, "notes": "late" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_today_inside_window() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let today: TodayResponse = client
        .get(format!("{}/api/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(today.date, IN_WINDOW_DATE);
    assert_eq!(today.day_index, 4);
    assert!(today.active);
    let day = today.day.expect("day inside the window");
    assert_eq!(day.index, 4);
    assert_eq!(day.label, "Jul 5");

    let plan = fetch_plan(&client, &server.base_url).await;
    assert_eq!(plan.today_index, 4);
}

#[tokio::test]
async fn http_today_outside_window() {
    let _guard = TEST_LOCK.lock().await;
    let server = spawn_server(BEFORE_WINDOW_DATE).await;
    let client = Client::new();

    let today: TodayResponse = client
        .get(format!("{}/api/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(today.date, BEFORE_WINDOW_DATE);
    assert_eq!(today.day_index, -1);
    assert!(!today.active);
    assert!(today.day.is_none());
}

#[tokio::test]
async fn http_view_switching() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let switched: ViewResponse = client
        .post(format!("{}/api/view", server.base_url))
        .json(&serde_json::json!({ "view": "weekly" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(switched.view, "weekly");
    assert_eq!(fetch_plan(&client, &server.base_url).await.view, "weekly");

    // no-JS fallback route redirects home after switching
    let response = client
        .post(format!("{}/view/adjust", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(fetch_plan(&client, &server.base_url).await.view, "adjust");

    let response = client
        .post(format!("{}/view/monthly", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(fetch_plan(&client, &server.base_url).await.view, "adjust");

    let response = client
        .post(format!("{}/view/today", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(fetch_plan(&client, &server.base_url).await.view, "today");
}
