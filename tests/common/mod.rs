#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use sketchmate_lib::ai::{CompletionService, Turn};
use sketchmate_lib::relay::{router, RelayState, SharedState};
use sketchmate_lib::{Error, Result};

/// Completion service that answers from a script and records what it was sent.
///
/// `None` entries fail; an exhausted script answers `"ok"`.
pub struct ScriptedCompletion {
    replies: Mutex<VecDeque<Option<String>>>,
    calls: Mutex<Vec<Vec<Turn>>>,
    delay: Option<Duration>,
}

impl ScriptedCompletion {
    pub fn new(replies: &[Option<&str>]) -> Arc<Self> {
        Arc::new(Self::build(replies, None))
    }

    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self::build(&[], Some(delay)))
    }

    fn build(replies: &[Option<&str>], delay: Option<Duration>) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.map(str::to_string)).collect()),
            calls: Mutex::new(Vec::new()),
            delay,
        }
    }

    pub fn calls(&self) -> Vec<Vec<Turn>> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletion {
    async fn generate(&self, contents: &[Turn]) -> Result<String> {
        self.calls.lock().push(contents.to_vec());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let next = self.replies.lock().pop_front();
        match next {
            Some(Some(reply)) => Ok(reply),
            Some(None) => Err(Error::Completion("scripted failure".into())),
            None => Ok("ok".into()),
        }
    }
}

/// Serve the relay on an ephemeral port; returns its base URL and state.
pub async fn spawn_relay(completion: Arc<dyn CompletionService>) -> (String, SharedState) {
    let state = Arc::new(RelayState::new(completion));
    let app = router(state.clone(), 10 * 1024 * 1024);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), state)
}

/// A URL nothing is listening on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
