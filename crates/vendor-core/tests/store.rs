//! Record store transitions.

mod common;

use std::sync::Arc;

use vendor_core::{
    Effect, IdGenerator, Message, SelectionOrigin, StoreError, MAX_ID_ATTEMPTS,
};
use vendor_model::Locale;

use common::{draft, edit, id, ids, store, store_with, t0, vendor};

fn abc() -> Vec<vendor_model::Vendor> {
    vec![
        vendor("a", "Alpha Bakery", "Arash Alavi"),
        vendor("b", "Bolt Hardware", "Bahar Bagheri"),
        vendor("c", "Cedar Cafe", "Cyrus Chamran"),
    ]
}

#[test]
fn load_search_delete_scenario() {
    let (mut store, _) = store();
    assert!(store.snapshot().all().is_empty());

    store.load_succeeded(abc());
    let snap = store.snapshot();
    assert_eq!(ids(snap.filtered()), ["a", "b", "c"]);

    let b_owner = snap.all()[1].owner(Locale::Fa).to_string();
    store.set_search_term(b_owner);
    assert_eq!(ids(store.snapshot().filtered()), ["b"]);

    store
        .select(Some(&id("b")), SelectionOrigin::List)
        .unwrap();
    store.delete(&id("b")).unwrap();

    let snap = store.snapshot();
    assert_eq!(ids(snap.all()), ["a", "c"]);
    assert!(snap.filtered().is_empty());
    assert!(snap.selected().is_none());
    assert!(snap.is_consistent());
}

#[test]
fn deleting_other_record_keeps_selection() {
    let (mut store, _) = store();
    store.load_succeeded(abc());
    store.select(Some(&id("a")), SelectionOrigin::Map).unwrap();
    let before = Arc::clone(store.snapshot().selected_vendor().unwrap());

    store.delete(&id("c")).unwrap();

    let snap = store.snapshot();
    let after = snap.selected_vendor().unwrap();
    assert!(Arc::ptr_eq(&before, after));
    assert_eq!(snap.selected().unwrap().origin(), SelectionOrigin::Map);
}

#[test]
fn empty_term_restores_full_collection() {
    let (mut store, _) = store();
    store.load_succeeded(abc());
    store.set_search_term("cedar");
    store.set_search_term("zzz");
    assert!(store.snapshot().filtered().is_empty());

    store.set_search_term("");
    let snap = store.snapshot();
    assert_eq!(ids(snap.filtered()), ids(snap.all()));
}

#[test]
fn searching_twice_is_idempotent() {
    let (mut store, _) = store();
    store.load_succeeded(abc());
    store.set_search_term("a");
    let once = ids(store.snapshot().filtered());
    store.set_search_term("a");
    assert_eq!(ids(store.snapshot().filtered()), once);
}

#[test]
fn created_record_is_searchable_in_any_case() {
    let (mut store, _) = store();
    store.load_succeeded(abc());
    let created = store.create(draft("آکمه", "Acme")).unwrap();

    for term in ["acme", "ACME", "aCmE", "آکمه"] {
        store.set_search_term(term);
        let snap = store.snapshot();
        assert!(
            snap.filtered().iter().any(|v| v.id == created),
            "{term} should match"
        );
    }
    store.set_search_term("zzz");
    assert!(store.snapshot().filtered().iter().all(|v| v.id != created));
}

#[test]
fn create_appends_with_timestamps_and_defaults() {
    let (mut store, clock) = store();
    store.load_succeeded(abc());
    clock.advance_millis(5_000);

    let created = store.create(draft("آکمه", "Acme")).unwrap();
    assert_eq!(created.as_str(), "v-1");

    let snap = store.snapshot();
    let last = snap.all().last().unwrap();
    assert_eq!(last.id, created);
    assert_eq!(last.created_at, last.updated_at);
    assert_eq!(last.created_at.timestamp_millis(), t0().timestamp_millis() + 5_000);
    assert_eq!(
        last.username,
        format!("vendor{}", t0().timestamp_millis() + 5_000)
    );
    assert!(last.logo_url.contains("username=Acme"));
}

#[test]
fn create_regenerates_colliding_ids() {
    let (mut store, _) = store();
    store.load_succeeded(vec![vendor("v-1", "Taken", "Owner"), vendor("v-2", "Also", "Owner")]);
    let created = store.create(draft("آکمه", "Acme")).unwrap();
    assert_eq!(created.as_str(), "v-3");
}

struct StuckIds;

impl IdGenerator for StuckIds {
    fn next_id(&mut self) -> String {
        "a".to_string()
    }
}

#[test]
fn create_gives_up_when_ids_keep_colliding() {
    let (store, _) = store();
    let mut store = store.with_id_generator(StuckIds);
    store.load_succeeded(abc());
    let version = store.snapshot().version();

    let err = store.create(draft("آکمه", "Acme")).unwrap_err();
    assert_eq!(
        err,
        StoreError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS
        }
    );
    assert_eq!(store.snapshot().version(), version);
}

#[test]
fn update_replaces_in_place_and_refreshes_selection() {
    let (mut store, clock) = store();
    store.load_succeeded(abc());
    store.select(Some(&id("b")), SelectionOrigin::List).unwrap();
    clock.advance_millis(60_000);

    let edited = edit(&store, "b", |draft| draft.brand_name.en = "Bolt & Nut".to_string());
    store.update(&id("b"), edited).unwrap();

    let snap = store.snapshot();
    assert_eq!(ids(snap.all()), ["a", "b", "c"]);
    let b = snap.find(&id("b")).unwrap();
    assert_eq!(b.brand(Locale::En), "Bolt & Nut");
    assert_eq!(b.created_at, t0());
    assert_eq!(b.updated_at.timestamp_millis(), t0().timestamp_millis() + 60_000);
    assert!(Arc::ptr_eq(snap.selected_vendor().unwrap(), b));
}

#[test]
fn update_keeps_identity_and_handle() {
    let (mut store, _) = store();
    store.load_succeeded(abc());

    let edited = edit(&store, "a", |draft| {
        draft.username = None;
        draft.phone_number = "09351234567".to_string();
    });
    store.update(&id("a"), edited).unwrap();

    let a = store.snapshot().find(&id("a")).cloned().unwrap();
    assert_eq!(a.id, id("a"));
    assert_eq!(a.username, "handle_a");
    assert_eq!(a.phone_number, "09351234567");
    assert_eq!(a.brand(Locale::En), "Alpha Bakery");
}

#[test]
fn update_with_blank_logo_stores_generated_avatar() {
    let (mut store, _) = store();
    let mut vendors = abc();
    vendors[1].logo_url = "https://cdn.example/bolt.png".to_string();
    store.load_succeeded(vendors);

    let edited = edit(&store, "b", |draft| draft.logo_url = String::new());
    store.update(&id("b"), edited).unwrap();

    let b = store.snapshot().find(&id("b")).cloned().unwrap();
    assert_eq!(b.logo_url, vendor_model::default_logo_url("Bolt Hardware"));
}

#[test]
fn update_never_moves_updated_at_backwards() {
    let (mut store, clock) = store();
    store.load_succeeded(abc());
    clock.set(t0() - chrono::Duration::hours(1));

    let edited = edit(&store, "a", |_| {});
    store.update(&id("a"), edited).unwrap();
    assert_eq!(store.snapshot().find(&id("a")).unwrap().updated_at, t0());
}

#[test]
fn update_can_move_record_out_of_filtered_view() {
    let (mut store, _) = store();
    store.load_succeeded(abc());
    store.set_search_term("cedar");
    assert_eq!(ids(store.snapshot().filtered()), ["c"]);

    let edited = edit(&store, "c", |draft| draft.brand_name.en = "Oak Cafe".to_string());
    store.update(&id("c"), edited).unwrap();
    assert!(store.snapshot().filtered().is_empty());
}

#[test]
fn edits_on_unknown_ids_are_no_ops() {
    let (mut store, _) = store();
    store.load_succeeded(abc());
    let version = store.snapshot().version();

    assert_eq!(
        store.update(&id("ghost"), draft("روح", "Ghost")),
        Err(StoreError::NotFound { id: id("ghost") })
    );
    assert_eq!(
        store.delete(&id("ghost")),
        Err(StoreError::NotFound { id: id("ghost") })
    );
    assert!(store.select(Some(&id("ghost")), SelectionOrigin::Map).is_err());

    let snap = store.snapshot();
    assert_eq!(snap.version(), version);
    assert_eq!(ids(snap.all()), ["a", "b", "c"]);
}

#[test]
fn selection_survives_search_that_hides_it() {
    let (mut store, _) = store();
    store.load_succeeded(abc());
    store.select(Some(&id("a")), SelectionOrigin::List).unwrap();
    store.set_search_term("cedar");

    let snap = store.snapshot();
    assert!(snap.is_selected(&id("a")));
    assert!(snap.filtered().iter().all(|v| v.id != id("a")));
}

#[test]
fn list_and_map_share_one_selection() {
    let (mut store, _) = store();
    store.load_succeeded(abc());

    let focus = store.select(Some(&id("a")), SelectionOrigin::List).unwrap();
    assert_eq!(focus.callout, Some(id("a")));
    assert_eq!(focus.zoom, store.config().map.focus_zoom);

    store.select(Some(&id("c")), SelectionOrigin::Map).unwrap();
    let snap = store.snapshot();
    assert!(snap.is_selected(&id("c")));
    assert!(!snap.is_selected(&id("a")));
    assert_eq!(store.map_focus().callout, Some(id("c")));

    let cleared = store.select(None, SelectionOrigin::Map).unwrap();
    assert_eq!(cleared.callout, None);
    assert_eq!(cleared.center, store.config().map.default_center);
    assert_eq!(cleared.zoom, store.config().map.default_zoom);
}

#[test]
fn reload_resolves_selection_against_new_collection() {
    let (mut store, _) = store();
    store.load_succeeded(abc());
    store.select(Some(&id("b")), SelectionOrigin::List).unwrap();

    let mut renamed = abc();
    renamed[1].brand_name.en = "Bolt Tools".to_string();
    store.load_succeeded(renamed);
    let snap = store.snapshot();
    assert_eq!(snap.selected_vendor().unwrap().brand(Locale::En), "Bolt Tools");

    store.load_succeeded(vec![vendor("a", "Alpha Bakery", "Arash Alavi")]);
    assert!(store.snapshot().selected().is_none());
}

#[test]
fn reload_is_a_full_replace() {
    let (mut store, _) = store();
    store.load_succeeded(abc());
    store.load_succeeded(abc());
    assert_eq!(ids(store.snapshot().all()), ["a", "b", "c"]);
}

#[test]
fn load_drops_duplicate_ids() {
    let (mut store, _) = store();
    let mut vendors = abc();
    vendors.push(vendor("a", "Second Alpha", "Someone"));
    store.load_succeeded(vendors);

    let snap = store.snapshot();
    assert_eq!(ids(snap.all()), ["a", "b", "c"]);
    assert_eq!(snap.find(&id("a")).unwrap().brand(Locale::En), "Alpha Bakery");
}

#[test]
fn padded_id_counts_as_duplicate_on_load() {
    let (mut store, _) = store();
    let mut vendors = abc();
    vendors.push(vendor(" b ", "Padded Bolt", "Someone"));
    store.load_succeeded(vendors);

    let snap = store.snapshot();
    assert_eq!(ids(snap.all()), ["a", "b", "c"]);
    assert_eq!(snap.find(&id("b")).unwrap().brand(Locale::En), "Bolt Hardware");
}

#[test]
fn load_failure_keeps_last_good_collection() {
    let (mut store, _) = store();
    store.load_succeeded(abc());

    assert!(store.load_start());
    assert!(store.snapshot().is_loading());
    assert!(!store.load_start(), "duplicate start must be ignored");

    store.load_failed("network unreachable");
    let snap = store.snapshot();
    assert!(!snap.is_loading());
    assert_eq!(snap.error(), Some("network unreachable"));
    assert_eq!(ids(snap.all()), ["a", "b", "c"]);

    assert!(store.load_start());
    assert_eq!(store.snapshot().error(), None);
    store.load_succeeded(abc());
    assert!(!store.snapshot().is_loading());
}

#[test]
fn pagination_grows_until_exhausted() {
    let (mut store, _) = store_with(6);
    store.load_succeeded(
        (0..14)
            .map(|n| vendor(&n.to_string(), &format!("Shop {n}"), "Owner"))
            .collect(),
    );
    assert_eq!(store.snapshot().visible().len(), 6);

    assert!(store.load_more());
    assert_eq!(store.snapshot().visible().len(), 12);
    assert!(store.load_more());
    assert_eq!(store.snapshot().visible().len(), 14);
    assert!(!store.snapshot().has_more());

    let version = store.snapshot().version();
    assert!(!store.load_more());
    assert_eq!(store.snapshot().visible().len(), 14);
    assert_eq!(store.snapshot().version(), version);
}

#[test]
fn only_one_load_more_in_flight() {
    let (mut store, _) = store_with(2);
    store.load_succeeded(abc());

    let ticket = store.begin_load_more().unwrap();
    assert!(store.snapshot().window().is_loading_more());
    assert!(store.begin_load_more().is_none());

    assert!(store.finish_load_more(ticket));
    assert_eq!(store.snapshot().visible().len(), 3);
    assert!(!store.finish_load_more(ticket));
}

#[test]
fn recomputing_filtered_resets_window_and_voids_pending_step() {
    let (mut store, _) = store_with(2);
    store.load_succeeded(
        (0..10)
            .map(|n| vendor(&n.to_string(), &format!("Shop {n}"), "Owner"))
            .collect(),
    );
    assert!(store.load_more());
    assert_eq!(store.snapshot().visible().len(), 4);

    let ticket = store.begin_load_more().unwrap();
    store.set_search_term("shop");
    assert_eq!(store.snapshot().window().current_page(), 1);
    assert!(!store.snapshot().window().is_loading_more());
    assert!(!store.finish_load_more(ticket));
    assert_eq!(store.snapshot().visible().len(), 2);

    assert!(store.load_more());
    store.delete(&id("0")).unwrap();
    assert_eq!(store.snapshot().visible().len(), 2);
}

#[test]
fn dispatch_reports_effects() {
    let (mut store, _) = store_with(2);
    store.dispatch(Message::LoadStarted).unwrap();
    store.dispatch(Message::LoadSucceeded(abc())).unwrap();

    let effect = store.dispatch(Message::Create(draft("آکمه", "Acme"))).unwrap();
    assert_eq!(effect, Effect::Created(id("v-1")));

    let effect = store
        .dispatch(Message::Select {
            id: Some(id("v-1")),
            origin: SelectionOrigin::List,
        })
        .unwrap();
    let Effect::Focus(focus) = effect else {
        panic!("expected focus effect, got {effect:?}");
    };
    assert_eq!(focus.callout, Some(id("v-1")));

    let Effect::FetchMore(ticket) = store.dispatch(Message::LoadMore).unwrap() else {
        panic!("expected a load-more ticket");
    };
    assert_eq!(store.dispatch(Message::LoadMore).unwrap(), Effect::None);
    store.dispatch(Message::LoadMoreFinished(ticket)).unwrap();
    assert_eq!(store.snapshot().visible().len(), 4);

    store
        .dispatch(Message::SetSearchTerm("acme".to_string()))
        .unwrap();
    assert_eq!(ids(store.snapshot().filtered()), ["v-1"]);

    let edited = edit(&store, "v-1", |draft| draft.brand_name.en = "Acme Ltd".to_string());
    store
        .dispatch(Message::Update {
            id: id("v-1"),
            draft: edited,
        })
        .unwrap();
    assert_eq!(ids(store.snapshot().filtered()), ["v-1"]);

    store.dispatch(Message::Delete(id("v-1"))).unwrap();
    assert!(store.snapshot().selected().is_none());
    assert!(store.dispatch(Message::Delete(id("v-1"))).is_err());

    store
        .dispatch(Message::LoadFailed("offline".to_string()))
        .unwrap();
    assert_eq!(store.snapshot().error(), Some("offline"));
}

#[test]
fn subscribers_see_every_snapshot_in_order() {
    let (mut store, _) = store();
    let receiver = store.subscribe();
    let first = receiver.try_recv().unwrap();
    assert_eq!(first.version(), 0);

    store.load_succeeded(abc());
    store.set_search_term("cedar");

    let versions: Vec<u64> = receiver.try_iter().map(|snap| snap.version()).collect();
    assert_eq!(versions, [1, 2]);
    assert_eq!(ids(store.snapshot().filtered()), ["c"]);
}

#[test]
fn dropped_subscriber_does_not_break_publishing() {
    let (mut store, _) = store();
    let gone = store.subscribe();
    let alive = store.subscribe();
    drop(gone);

    store.load_succeeded(abc());
    store.delete(&id("a")).unwrap();

    let latest = alive.try_iter().last().unwrap();
    assert_eq!(ids(latest.all()), ["b", "c"]);
}

#[test]
fn published_snapshots_are_immutable() {
    let (mut store, _) = store();
    store.load_succeeded(abc());
    let before = store.snapshot();
    store.delete(&id("a")).unwrap();

    assert_eq!(ids(before.all()), ["a", "b", "c"]);
    assert_eq!(ids(store.snapshot().all()), ["b", "c"]);
}

#[test]
fn stats_cover_whole_collection() {
    let (mut store, _) = store();
    let mut vendors = abc();
    vendors[2].status = vendor_model::VendorStatus::Inactive;
    vendors[2].location.lat = 32.65;
    store.load_succeeded(vendors);
    store.set_search_term("zzz");

    let stats = store.snapshot().stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.unique_regions, 2);
}
