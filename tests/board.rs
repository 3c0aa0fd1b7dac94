use std::collections::BTreeMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

use tierlist::app::LoadState;
use tierlist::catalog::parse_catalog;
use tierlist::ui::{Hit, UIViewModel};
use tierlist::worker::{CatalogWorker, WorkerMessage, WorkerResponse};
use tierlist::{handle_event, initialize, AppState, Config, Event, FilterLabel, Tier, TierBoard};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

const CATALOG: &[u8] = br#"[
    {"name": "X", "type": "sbc", "tier": "S", "tierPosition": 1},
    {"name": "Y", "type": "esb", "tier": "S", "tierPosition": 0},
    {"name": "Z", "type": "sbc", "tier": "X", "tierPosition": 0},
    {"name": "Pi Zero", "type": "SBC", "tier": "B", "tierPosition": 2},
    {"name": "Rock", "type": "sbc", "tier": "B", "tierPosition": 2},
    {"name": "Pico", "type": "devboard", "tier": "A", "tierPosition": 5,
     "videoUrl": "https://youtu.be/pico", "reviewDate": "2024-01-05"}
]"#;

fn names(board: &TierBoard, tier: Tier) -> Vec<&str> {
    board.bucket(tier).entries.iter().map(|e| e.name.as_str()).collect()
}

fn configured(catalog: &str) -> AppState {
    let options = BTreeMap::from([("catalog".to_string(), catalog.to_string())]);
    initialize(&Config::from_zellij(&options))
}

fn step(state: &AppState, event: Event) -> AppState {
    handle_event(state, &event).unwrap().state
}

#[test]
fn all_filter_orders_by_position() {
    let entries = parse_catalog(CATALOG).unwrap();
    let board = TierBoard::build(&entries, FilterLabel::All);

    assert_eq!(names(&board, Tier::S), vec!["Y", "X"]);
    assert_eq!(names(&board, Tier::A), vec!["Pico"]);
    assert_eq!(names(&board, Tier::B), vec!["Pi Zero", "Rock"]);
    assert!(board.bucket(Tier::C).is_empty());
    assert!(board.bucket(Tier::D).is_empty());
}

#[test]
fn category_filter_is_case_insensitive() {
    let entries = parse_catalog(CATALOG).unwrap();
    let board = TierBoard::build(&entries, FilterLabel::Sbcs);

    assert_eq!(names(&board, Tier::S), vec!["X"]);
    assert_eq!(names(&board, Tier::B), vec!["Pi Zero", "Rock"]);
    assert!(board.bucket(Tier::A).is_empty());
}

#[test]
fn unknown_tiers_never_appear() {
    let entries = parse_catalog(CATALOG).unwrap();
    for filter in FilterLabel::ALL {
        let board = TierBoard::build(&entries, filter);
        assert_eq!(board.buckets().len(), 5);
        assert!(board.find("Z").is_none(), "Z placed under {filter}");
    }
}

#[test]
fn building_is_deterministic() {
    let entries = parse_catalog(CATALOG).unwrap();
    assert_eq!(
        TierBoard::build(&entries, FilterLabel::All),
        TierBoard::build(&entries, FilterLabel::All)
    );
    assert!(TierBoard::build(&[], FilterLabel::All).is_empty());
}

#[test]
fn file_catalog_loads_through_worker() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG).unwrap();
    let path = file.path().to_string_lossy().to_string();

    let transition = handle_event(&configured(&path), &Event::PermissionsGranted).unwrap();
    let [tierlist::Action::PostToWorker(message)] = transition.actions.as_slice() else {
        panic!("expected a single worker message, got {:?}", transition.actions);
    };

    let WorkerMessage::LoadCatalog { path: requested, .. } = message;
    assert_eq!(requested, &path);

    let response = CatalogWorker.handle_message(message.clone());
    assert!(matches!(response, WorkerResponse::CatalogLoaded { ref entries } if entries.len() == 6));

    let state = step(&transition.state, Event::WorkerResponse(response));
    assert_eq!(state.load, LoadState::Loaded { count: 6 });
    assert_eq!(names(&state.board, Tier::S), vec!["Y", "X"]);
}

#[test]
fn browsing_session() {
    let state = step(
        &configured("https://sbctierlist.com/data.json"),
        Event::PermissionsGranted,
    );
    let state = step(
        &state,
        Event::CatalogFetched {
            status: 200,
            body: CATALOG.to_vec(),
        },
    );

    // Cursor starts on the first S card and walks down to Pico in A.
    assert_eq!(state.cursor_entry().map(|e| e.name.as_str()), Some("Y"));
    let state = step(&state, Event::MoveDown);
    assert_eq!(state.cursor_entry().map(|e| e.name.as_str()), Some("Pico"));

    let transition = handle_event(&state, &Event::OpenCursor).unwrap();
    let state = transition.state;
    assert!(state.is_detail_open());

    let transition = handle_event(&state, &Event::OpenVideo).unwrap();
    assert_eq!(
        transition.actions,
        vec![tierlist::Action::OpenLink {
            url: "https://youtu.be/pico".to_string()
        }]
    );

    // Filters are locked while the panel is open.
    let locked = step(&state, Event::NextFilter);
    assert_eq!(locked.filter, FilterLabel::All);

    let state = step(&state, Event::Dismiss);
    let state = step(&state, Event::FilterChanged(FilterLabel::DevBoards));
    assert_eq!(state.board.len(), 1);
    assert_eq!(state.cursor_entry().map(|e| e.name.as_str()), Some("Pico"));
}

#[test]
fn clicks_resolve_through_layout() {
    let state = step(
        &configured("https://sbctierlist.com/data.json"),
        Event::PermissionsGranted,
    );
    let state = step(
        &state,
        Event::CatalogFetched {
            status: 200,
            body: CATALOG.to_vec(),
        },
    );

    let vm = UIViewModel::compute(&state, 30, 100);
    let card = &vm.layout.tiers[Tier::B.index()].cards[1];
    let hit = vm.layout.hit_test(card.rect.row, card.rect.col);
    assert_eq!(hit, Hit::Entry("Rock".to_string()));

    let state = step(&state, hit.event().unwrap());
    assert_eq!(state.selection.as_ref().map(|e| e.name.as_str()), Some("Rock"));

    let vm = UIViewModel::compute(&state, 30, 100);
    assert_eq!(vm.layout.hit_test(0, 0), Hit::Backdrop);
    let state = step(&state, Hit::Backdrop.event().unwrap());
    assert!(!state.is_detail_open());
}

/// Collects `(level, message)` for every event.
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<(tracing::Level, String)>>>);

impl<S: tracing::Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut message = MessageField::default();
        event.record(&mut message);
        self.0.lock().unwrap().push((*event.metadata().level(), message.0));
    }
}

#[derive(Default)]
struct MessageField(String);

impl tracing::field::Visit for MessageField {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

#[test]
fn failed_fetch_leaves_five_empty_rows() {
    let state = step(
        &configured("https://sbctierlist.com/data.json"),
        Event::PermissionsGranted,
    );

    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let state = tracing::subscriber::with_default(subscriber, || {
        step(
            &state,
            Event::CatalogFetched {
                status: 503,
                body: Vec::new(),
            },
        )
    });

    assert_eq!(
        state.load,
        LoadState::Failed {
            error: "HTTP status 503".to_string()
        }
    );
    assert!(state.entries.is_empty());
    assert_eq!(state.board.buckets().len(), 5);
    assert!(state.board.is_empty());

    let records = recorder.0.lock().unwrap();
    assert!(
        records
            .iter()
            .any(|(level, message)| *level == tracing::Level::ERROR && message == "catalog load failed"),
        "no error diagnostic in {records:?}"
    );
}
