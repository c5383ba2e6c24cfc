use std::time::Duration;

use anyhow::Result;
use humanoide::generation::{GenerationError, Humanizer, MockBackend};
use humanoide::types::HumanizedResult;
use humanoide::ui::runtime::GenerationRuntime;
use humanoide::ui::screens::humanizer::HumanizerApp;
use humanoide::ui::state::{Phase, ViewState, FAILURE_MESSAGE};

const WAIT: Duration = Duration::from_secs(5);
const REPLY: &str =
    r#"{"humanizedText":"Bonjour le monde","humanScore":82,"readabilityScore":90}"#;

fn app_with(backend: MockBackend, state: ViewState) -> Result<HumanizerApp> {
    let runtime = GenerationRuntime::spawn(Humanizer::new(backend, "test-model"))?;
    Ok(HumanizerApp::with_state(runtime, state))
}

#[test]
fn successful_round_trip_populates_result() -> Result<()> {
    let backend = MockBackend::new().with_reply(REPLY);
    let mut app = app_with(backend.clone(), ViewState::new().with_input("Hello world"))?;

    app.submit();
    assert_eq!(app.state().phase(), Phase::Loading);
    assert!(app.wait_for_outcome(WAIT), "outcome should arrive");

    let result = app.state().result().expect("result");
    assert_eq!(result.original_text, "Hello world");
    assert_eq!(result.word_count, 3);
    assert_eq!(app.state().phase(), Phase::Success);
    assert_eq!(backend.call_count(), 1);
    Ok(())
}

#[test]
fn double_submit_issues_a_single_call() -> Result<()> {
    let backend = MockBackend::new().with_reply(REPLY).with_reply(REPLY);
    let mut app = app_with(backend.clone(), ViewState::new().with_input("Texte"))?;

    app.submit();
    app.submit();
    assert!(app.wait_for_outcome(WAIT));
    assert!(!app.wait_for_outcome(Duration::from_millis(200)));
    assert_eq!(backend.call_count(), 1);
    Ok(())
}

#[test]
fn blank_input_does_not_reach_backend() -> Result<()> {
    let backend = MockBackend::new().with_reply(REPLY);
    let mut app = app_with(backend.clone(), ViewState::new().with_input("   "))?;

    app.submit();
    assert_eq!(app.state().phase(), Phase::Idle);
    assert!(!app.wait_for_outcome(Duration::from_millis(200)));
    assert_eq!(backend.call_count(), 0);
    Ok(())
}

#[test]
fn transport_failure_shows_message_and_keeps_result() -> Result<()> {
    let backend = MockBackend::new()
        .with_reply(REPLY)
        .with_error(GenerationError::transport("network unreachable"));
    let mut app = app_with(backend, ViewState::new().with_input("Texte"))?;

    app.submit();
    assert!(app.wait_for_outcome(WAIT));
    let before: HumanizedResult = app.state().result().cloned().expect("first result");

    app.submit();
    assert!(app.wait_for_outcome(WAIT));
    assert_eq!(app.state().phase(), Phase::Error);
    assert_eq!(app.state().error(), Some(FAILURE_MESSAGE));
    assert_eq!(app.state().result(), Some(&before));
    Ok(())
}
