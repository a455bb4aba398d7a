use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::event_bus::EventBusRuntime;
use crate::app::event_loop::LoopControl;
use crate::app::{App, Mode, Providers};
use crate::config::Config;
use crate::event::DomainEvent;
use crate::fixture::FixtureProvider;
use crate::playback::PlaybackPosition;
use crate::share::LogShareProvider;
use crate::story::StoryDeck;

const FIXTURE: &str = r#"{
    "saved": [
        {"id": "s1", "title": "Stoneware Mug", "vendor": "Clay Street"},
        {"id": "s2", "title": "Wool Socks", "vendor": "Trailfolk"}
    ],
    "analyses": {"carbonFootprint": {"kgCo2": 12.5}}
}"#;

fn fixture_app(share: Arc<LogShareProvider>) -> App {
    let fixture =
        Arc::new(FixtureProvider::from_json_str(FIXTURE).expect("fixture should parse"));
    let providers = Providers {
        catalog: fixture.clone(),
        content: fixture,
        share,
    };
    App::new(StoryDeck::default(), providers, Config::default())
}

fn key(code: KeyCode) -> DomainEvent {
    DomainEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

async fn next_event(rx: &mut UnboundedReceiver<DomainEvent>) -> DomainEvent {
    rx.recv().await.expect("bus should stay open")
}

#[tokio::test]
async fn catalog_load_opens_gate_and_analysis_lands_in_memo() {
    let mut app = fixture_app(Arc::new(LogShareProvider::default()));
    let (mut bus, mut rx) = EventBusRuntime::detached();

    app.spawn_catalog_load(&mut bus);
    let settled = next_event(&mut rx).await;
    assert!(matches!(settled, DomainEvent::CatalogSettled { retried: 0 }));
    let response = app.apply_domain_event(settled, 80, &mut bus);
    assert!(response.redraw);
    assert!(app.cache.is_ready());
    assert_eq!(
        app.state.status.message,
        "1 product collection(s) could not load"
    );

    app.apply_domain_event(key(KeyCode::Right), 80, &mut bus);
    app.apply_domain_event(key(KeyCode::Right), 80, &mut bus);
    assert_eq!(app.playback.position(), PlaybackPosition::new(0, 2));

    let completed = next_event(&mut rx).await;
    assert!(matches!(
        &completed,
        DomainEvent::AnalysisComplete { result: Ok(_), .. }
    ));
    assert!(app.apply_domain_event(completed, 80, &mut bus).redraw);
    assert!(app.cache.has_analysis("carbonFootprint"));
    assert_eq!(app.analyses.in_flight(), 0);

    app.apply_domain_event(key(KeyCode::Right), 80, &mut bus);
    let failed = next_event(&mut rx).await;
    assert!(matches!(
        &failed,
        DomainEvent::AnalysisComplete { result: Err(_), .. }
    ));
    app.apply_domain_event(failed, 80, &mut bus);
    assert!(!app.cache.has_analysis("topBrands"));
    bus.shutdown();
}

#[tokio::test]
async fn retry_refetches_missing_collection_and_reports_back() {
    let mut app = fixture_app(Arc::new(LogShareProvider::default()));
    let (mut bus, mut rx) = EventBusRuntime::detached();
    app.spawn_catalog_load(&mut bus);
    let settled = next_event(&mut rx).await;
    app.apply_domain_event(settled, 80, &mut bus);

    app.apply_domain_event(key(KeyCode::Char('r')), 80, &mut bus);
    let retried = next_event(&mut rx).await;
    assert!(matches!(retried, DomainEvent::CatalogSettled { retried: 1 }));
    app.apply_domain_event(retried, 80, &mut bus);
    assert_eq!(
        app.state.status.message,
        "1 product collection(s) could not load"
    );
    bus.shutdown();
}

#[tokio::test]
async fn share_key_dispatches_through_provider() {
    let share = Arc::new(LogShareProvider::default());
    let mut app = fixture_app(share.clone());
    let (mut bus, mut rx) = EventBusRuntime::detached();
    app.spawn_catalog_load(&mut bus);
    let settled = next_event(&mut rx).await;
    app.apply_domain_event(settled, 80, &mut bus);

    while app.state.mode != Mode::Share {
        app.apply_domain_event(key(KeyCode::Enter), 80, &mut bus);
    }
    app.apply_domain_event(key(KeyCode::Char('s')), 80, &mut bus);

    loop {
        let event = next_event(&mut rx).await;
        let is_share = matches!(event, DomainEvent::ShareComplete(_));
        app.apply_domain_event(event, 80, &mut bus);
        if is_share {
            break;
        }
    }
    assert_eq!(share.shared().len(), 1);
    assert!(app.state.status.message.starts_with("shared: "));
    bus.shutdown();
}

#[tokio::test]
async fn quit_key_breaks_the_loop() {
    let mut app = fixture_app(Arc::new(LogShareProvider::default()));
    let (mut bus, _rx) = EventBusRuntime::detached();
    let response = app.apply_domain_event(key(KeyCode::Char('q')), 80, &mut bus);
    assert_eq!(response.control, LoopControl::Break);
}
