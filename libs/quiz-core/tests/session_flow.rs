//! End-to-end session tests over a loaded sets document.

mod common;

use pretty_assertions::assert_eq;
use quiz_core::{AssetType, CardStore, QuizError, QuizSettings};

use common::{engine_with_sink, fixtures};

#[test]
fn three_card_lap_with_last_guess_wrong() {
    let (mut engine, sink) = engine_with_sink(&QuizSettings::default());
    engine.select_set("capitals").unwrap();

    engine.submit_guess("Paris").unwrap();
    let snapshot = sink.last();
    assert_eq!((snapshot.correct_streak, snapshot.num_correct), (1, 1));

    engine.submit_guess("berlin").unwrap();
    let snapshot = sink.last();
    assert_eq!((snapshot.correct_streak, snapshot.num_correct), (2, 2));

    let outcome = engine.submit_guess("Lisbon").unwrap();
    assert!(!outcome.is_correct);
    assert!(outcome.wrapped);

    let snapshot = sink.last();
    assert_eq!(snapshot.card_index, 0);
    assert_eq!(snapshot.correct_streak, 0);
    assert_eq!(snapshot.num_correct, 0);
    assert_eq!(snapshot.previous_guess_correct, Some(false));
    assert_eq!(snapshot.current_card.key, "Paris");
    assert_eq!(sink.len(), 4);
}

#[test]
fn cumulative_counters_across_laps() {
    let settings = QuizSettings::default().with_reset_on_wrap(false);
    let (mut engine, sink) = engine_with_sink(&settings);
    engine.select_set("birds").unwrap();

    for guess in ["Grey Heron", "tawny owl", "grey heron", "Tawny Owl"] {
        engine.submit_guess(guess).unwrap();
    }

    let snapshot = sink.last();
    assert_eq!(snapshot.correct_streak, 4);
    assert_eq!(snapshot.num_correct, 4);
    assert_eq!(snapshot.card_index, 0);
}

#[test]
fn near_miss_counts_only_above_threshold() {
    let (mut engine, _sink) = engine_with_sink(&QuizSettings::default());
    engine.select_set("birds").unwrap();

    // One typo in ten characters: score 0.9.
    let outcome = engine.submit_guess("grey heran").unwrap();
    assert!(outcome.is_correct);

    // One typo in nine characters: score ~0.89.
    let outcome = engine.submit_guess("tawny ool").unwrap();
    assert!(!outcome.is_correct);

    // Two typos in ten characters: score 0.8.
    let outcome = engine.submit_guess("grey hxrxn").unwrap();
    assert!(!outcome.is_correct);
    assert_eq!(engine.state().correct_streak, 0);
}

#[test]
fn lowered_threshold_accepts_more() {
    let settings = QuizSettings::default().with_threshold(0.75);
    let (mut engine, _sink) = engine_with_sink(&settings);
    engine.select_set("capitals").unwrap();

    let outcome = engine.submit_guess("Pari").unwrap();
    assert!(outcome.is_correct);
    assert!((outcome.score - 0.8).abs() < 1e-9);
}

#[test]
fn snapshot_lists_sets_and_card_details() {
    let (mut engine, sink) = engine_with_sink(&QuizSettings::default());
    engine.select_set("capitals").unwrap();
    engine.submit_guess("Paris").unwrap();

    let snapshot = sink.last();
    assert_eq!(snapshot.set_names, vec!["capitals".to_string(), "birds".to_string()]);
    assert_eq!(snapshot.card_count, 3);
    assert_eq!(snapshot.current_card.hint.as_deref(), Some("Spree"));
    assert_eq!(snapshot.current_card.asset_path, "img/germany.png");
}

#[test]
fn unknown_asset_type_survives_loading() {
    let (mut engine, _sink) = engine_with_sink(&QuizSettings::default());
    engine.select_set("birds").unwrap();
    engine.submit_guess("grey heron").unwrap();

    let card = engine.current_card().unwrap();
    assert_eq!(card.asset_type, AssetType::Other("AUDIO".to_string()));
}

#[test]
fn failed_selection_keeps_session_and_sends_nothing() {
    let (mut engine, sink) = engine_with_sink(&QuizSettings::default());
    engine.select_set("capitals").unwrap();
    engine.submit_guess("Paris").unwrap();
    let before = engine.state().clone();

    let err = engine.select_set("oceans").unwrap_err();
    assert_eq!(err, QuizError::SetNotFound("oceans".to_string()));
    assert_eq!(engine.state(), &before);
    assert_eq!(sink.len(), 2);
}

#[test]
fn guess_before_selection_fails() {
    let (mut engine, sink) = engine_with_sink(&QuizSettings::default());
    assert_eq!(engine.submit_guess("Paris").unwrap_err(), QuizError::NoSetSelected);
    assert!(sink.snapshots().is_empty());
}

#[test]
fn switching_sets_resets_counters() {
    let (mut engine, sink) = engine_with_sink(&QuizSettings::default());
    engine.select_set("capitals").unwrap();
    engine.submit_guess("Paris").unwrap();
    engine.select_set("birds").unwrap();

    let snapshot = sink.last();
    assert_eq!(snapshot.selected_set_name, "birds");
    assert_eq!(snapshot.card_index, 0);
    assert_eq!(snapshot.correct_streak, 0);
    assert_eq!(snapshot.num_correct, 0);
    assert_eq!(snapshot.previous_guess_correct, None);
    assert_eq!(snapshot.last_score, None);
}

#[test]
fn generated_document_loads() {
    let store = CardStore::from_json(&fixtures::sample_document(3, 4)).unwrap();
    assert_eq!(store.set_names(), vec!["set 0", "set 1", "set 2"]);
    let set = store.get_set("set 2").unwrap();
    assert_eq!(store.card_count(set), 4);
    assert_eq!(store.card_at(set, 3).unwrap().key, "answer 3");
}

#[test]
fn document_with_empty_set_is_rejected() {
    let result = CardStore::from_json(&fixtures::sample_document(1, 0));
    assert!(matches!(result, Err(QuizError::InvalidConfiguration(_))));
}
