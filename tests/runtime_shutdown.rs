use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use humanoide::generation::schema::GenerationRequest;
use humanoide::generation::{self, GenerationBackend, Humanizer};
use humanoide::types::HumanizeOptions;
use humanoide::ui::runtime::GenerationRuntime;
use humanoide::ui::state::SubmitTicket;

struct SlowBackend {
    delay: Duration,
}

impl GenerationBackend for SlowBackend {
    fn generate(&self, _request: &GenerationRequest) -> generation::Result<String> {
        thread::sleep(self.delay);
        Ok(r#"{"humanizedText":"tard","humanScore":50,"readabilityScore":50}"#.to_string())
    }
}

#[test]
fn dropping_runtime_does_not_wait_for_in_flight_request() -> Result<()> {
    let backend = SlowBackend {
        delay: Duration::from_secs(3),
    };
    let runtime = GenerationRuntime::spawn(Humanizer::new(backend, "slow-model"))?;
    runtime.submit(SubmitTicket {
        id: 1,
        text: "Texte".to_string(),
        options: HumanizeOptions::default(),
    })?;
    // let the worker pick the ticket up and enter the slow call
    thread::sleep(Duration::from_millis(100));

    let start = Instant::now();
    drop(runtime);
    assert!(
        start.elapsed() < Duration::from_millis(500),
        "drop blocked for {:?}",
        start.elapsed()
    );
    Ok(())
}

#[test]
fn idle_runtime_shuts_down_cleanly() -> Result<()> {
    let backend = SlowBackend {
        delay: Duration::from_millis(1),
    };
    let runtime = GenerationRuntime::spawn(Humanizer::new(backend, "idle-model"))?;
    let start = Instant::now();
    drop(runtime);
    assert!(start.elapsed() < Duration::from_millis(500));
    Ok(())
}
