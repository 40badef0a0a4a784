// ABOUTME: Recommendation backend that replays a fixed script of attempt outcomes
// ABOUTME: Lets retry tests control every attempt and count how many were made

use async_trait::async_trait;
use nutrio_server::models::HealthProfile;
use nutrio_server::recommendation::{AttemptFailure, RecommendationBackend};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

/// One scripted attempt
#[derive(Debug, Clone)]
pub enum Step {
    /// Answer with raw model text
    Answer(String),
    /// Fail with the given outcome
    Fail(AttemptFailure),
    /// Never answer within any reasonable budget
    Hang,
}

/// Backend replaying `Step`s in order; the last step repeats
pub struct ScriptedBackend {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicU32,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicU32::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Attempts made so far
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn next_step(&self) -> Step {
        let mut steps = self.steps.lock().unwrap();
        if steps.len() > 1 {
            steps.pop_front().unwrap()
        } else {
            steps.front().cloned().expect("script must not be empty")
        }
    }
}

#[async_trait]
impl RecommendationBackend for ScriptedBackend {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn request(
        &self,
        _profile: &HealthProfile,
        prompt: &str,
    ) -> Result<String, AttemptFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_owned());
        match self.next_step() {
            Step::Answer(text) => Ok(text),
            Step::Fail(failure) => Err(failure),
            Step::Hang => {
                sleep(Duration::from_secs(3600)).await;
                Err(AttemptFailure::Timeout)
            }
        }
    }
}

/// Shorthand for an HTTP status failure
pub fn status(code: u16) -> AttemptFailure {
    AttemptFailure::Status {
        status: code,
        message: String::new(),
    }
}

/// Step failing with an HTTP status
pub fn fail_status(code: u16) -> Step {
    Step::Fail(status(code))
}
