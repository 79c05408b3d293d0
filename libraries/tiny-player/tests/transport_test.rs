//! Transport integration tests
//!
//! Play, pause, stop and toggle across several entries, with lifecycle
//! signals flowing back into the views.


use std::time::Duration;
use test_helpers::*;
use tiny_player::{DiscoveredAudio, Icon, PlayerConfig, PlayerError};

#[test]
fn toggle_plays_idle_entry() {
    let mut h = harness(3);

    h.session.toggle_to(1).unwrap();

    assert_eq!(h.session.current_index(), 1);
    assert_eq!(h.playing(), vec![1]);
    assert!(h.session.is_playing());
}

#[test]
fn toggle_same_entry_pauses_it() {
    let mut h = harness(2);

    h.session.toggle_to(0).unwrap();
    h.sound(0).borrow_mut().advance(Duration::from_secs(30));
    h.session.toggle_to(0).unwrap();

    assert!(h.playing().is_empty());
    assert_eq!(h.session.current_index(), 0);
    // Pause keeps the position
    assert_eq!(h.session.position(), Duration::from_secs(30));
}

#[test]
fn toggle_other_entry_stops_current_first() {
    let mut h = harness(3);

    h.session.toggle_to(0).unwrap();
    h.sound(0).borrow_mut().advance(Duration::from_secs(42));
    h.session.toggle_to(2).unwrap();

    assert_eq!(h.playing(), vec![2]);
    assert_eq!(h.session.current_index(), 2);
    // Stop rewinds the previous entry
    assert_eq!(h.sound(0).borrow().position, Some(Duration::ZERO));
}

#[test]
fn toggle_stops_old_entry_before_playing_new_one() {
    let mut h = harness(3);

    h.session.toggle_to(2).unwrap();
    assert_eq!(h.take_calls(), vec![(2, "play")]);

    h.session.toggle_to(0).unwrap();
    assert_eq!(h.take_calls(), vec![(2, "stop"), (0, "play")]);

    // Same entry again only pauses
    h.session.toggle_to(0).unwrap();
    assert_eq!(h.take_calls(), vec![(0, "pause")]);
}

#[test]
fn toggle_resumes_paused_entry() {
    let mut h = harness(2);

    h.session.toggle_to(1).unwrap();
    h.sound(1).borrow_mut().advance(Duration::from_secs(10));
    h.session.toggle_to(1).unwrap();
    h.session.toggle_to(1).unwrap();

    assert_eq!(h.playing(), vec![1]);
    assert_eq!(h.session.position(), Duration::from_secs(10));
}

#[test]
fn at_most_one_entry_plays_through_toggles() {
    let mut h = harness(4);

    for index in [0, 3, 3, 1, 2, 2, 2, 0, 1, 3] {
        h.session.toggle_to(index).unwrap();
        h.session.pump_events();
        assert!(h.playing().len() <= 1, "after toggling {}", index);
    }
}

#[test]
fn direct_play_does_not_stop_other_entries() {
    let mut h = harness(2);

    h.session.play(Some(0)).unwrap();
    h.session.play(Some(1)).unwrap();

    // Only toggle_to enforces the single-player rule
    assert_eq!(h.playing(), vec![0, 1]);
    assert_eq!(h.session.current_index(), 1);
}

#[test]
fn icons_follow_lifecycle_signals() {
    let mut h = harness(1);

    h.session.play(None).unwrap();
    h.session.pump_events();
    assert!(h.view(0).shows(Icon::Pause));
    assert!(!h.view(0).shows(Icon::Play));

    h.session.pause(None).unwrap();
    h.session.pump_events();
    assert!(h.view(0).shows(Icon::Play));
    assert!(!h.view(0).shows(Icon::Pause));
}

#[test]
fn pause_keeps_timer_and_progress() {
    let mut h = harness(1);

    h.session.play(None).unwrap();
    h.session.pump_events();
    h.sound(0).borrow_mut().advance(Duration::from_secs(50));
    h.session.step(0.0);
    h.session.pause(None).unwrap();
    h.session.pump_events();

    assert_eq!(h.view(0).timer_text, "0:50 / 3:20");
    assert_eq!(h.view(0).progress_width, Some(25.0));
}

#[test]
fn stop_resets_widget() {
    let mut h = harness(1);

    h.session.play(None).unwrap();
    h.session.pump_events();
    h.sound(0).borrow_mut().advance(Duration::from_secs(50));
    h.session.step(0.0);

    h.session.stop(None).unwrap();
    h.session.pump_events();

    let view = h.view(0);
    assert_eq!(view.timer_text, "3:20");
    assert_eq!(view.progress_width, Some(0.0));
    assert_eq!(view.title_text, "Track 0  ");
    assert!(view.shows(Icon::Play));
    assert!(!view.shows(Icon::Pause));
}

#[test]
fn natural_end_resets_widget() {
    let mut h = harness(2);

    h.session.toggle_to(1).unwrap();
    h.session.pump_events();
    h.sound(1).borrow_mut().finish();
    h.session.pump_events();

    let view = h.view(1);
    assert_eq!(view.timer_text, "3:20");
    assert_eq!(view.progress_width, Some(0.0));
    assert!(view.shows(Icon::Play));
    assert!(!h.session.is_playing());
}

#[test]
fn seek_moves_sound_and_timer() {
    let mut h = harness(2);

    h.session.seek(1, 0.5).unwrap();

    assert_eq!(h.sound(1).borrow().seeks, vec![Duration::from_secs(100)]);
    assert_eq!(h.view(1).timer_text, "1:40 / 3:20");
    // Seeking does not select the entry
    assert_eq!(h.session.current_index(), 0);
}

#[test]
fn seek_fraction_is_clamped() {
    let mut h = harness(1);

    h.session.seek(0, 1.7).unwrap();
    h.session.seek(0, -1.0).unwrap();
    h.session.seek(0, f64::NAN).unwrap();

    assert_eq!(
        h.sound(0).borrow().seeks,
        vec![Duration::from_secs(200), Duration::ZERO, Duration::ZERO]
    );
}

#[test]
fn seek_before_metadata_targets_start() {
    let mut h = harness_with(tracks(1), None, PlayerConfig::default());

    h.session.seek(0, 0.5).unwrap();

    assert_eq!(h.sound(0).borrow().seeks, vec![Duration::ZERO]);
    assert_eq!(h.view(0).timer_text, "0:00 / 0:00");
}

#[test]
fn volume_is_broadcast_to_every_entry() {
    let mut h = harness(3);

    h.session.volume(0.25);

    assert_eq!(h.engine.borrow().last_volume(), Some(0.25));
    for index in 0..3 {
        assert_eq!(h.view(index).volume_bar_width, Some(15.0));
        assert_eq!(h.view(index).volume_dot_offset, Some(35.0));
    }
}

#[test]
fn volume_is_clamped() {
    let mut h = harness(1);

    h.session.volume(4.0);
    assert_eq!(h.session.volume_level(), 1.0);
    assert_eq!(h.view(0).volume_dot_offset, Some(80.0));

    h.session.volume(-2.0);
    assert_eq!(h.session.volume_level(), 0.0);
    assert_eq!(h.view(0).volume_bar_width, Some(0.0));
    assert_eq!(h.view(0).volume_dot_offset, Some(20.0));
}

#[test]
fn entry_without_sound_ignores_transport() {
    let tracks = vec![
        DiscoveredAudio::new("Good", vec!["good.ogg".to_string()]),
        DiscoveredAudio::new("Bad", vec!["broken:bad.ogg".to_string()]),
    ];
    let mut h = harness_with(tracks, Some(Duration::from_secs(60)), PlayerConfig::default());

    assert_eq!(h.session.len(), 2);
    assert!(!h.session.entry(1).unwrap().has_sound());
    assert!(h.session.entry(1).unwrap().sound().is_none());

    h.session.toggle_to(1).unwrap();
    assert!(h.playing().is_empty());
    assert!(!h.session.is_playing());
    assert!(h.take_calls().is_empty());

    // Toggling away from it still works
    h.session.toggle_to(0).unwrap();
    assert_eq!(h.playing(), vec![0]);
    assert_eq!(h.take_calls(), vec![(0, "play")]);
    assert!(h
        .session
        .entry(0)
        .unwrap()
        .sound()
        .is_some_and(|sound| sound.is_playing()));
}

#[test]
fn out_of_range_index_is_an_error() {
    let mut h = harness(2);

    assert!(matches!(
        h.session.toggle_to(2),
        Err(PlayerError::IndexOutOfBounds { index: 2, len: 2 })
    ));
    assert!(h.session.pause(Some(7)).is_err());
    assert!(h.session.stop(Some(7)).is_err());
    assert!(h.session.update_duration(2, 0.5).is_err());
    assert!(h.playing().is_empty());
}
