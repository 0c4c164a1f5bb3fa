use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use carousel::{Breakpoint, BreakpointTable, DragOutcome, Error, Geometry, SyncState};

fn table() -> BreakpointTable {
    BreakpointTable::new([Breakpoint::new(720, 1), Breakpoint::new(1100, 2)], 4).unwrap()
}

fn counting_timer(interval_ms: u64, now_ms: u64) -> AutoplayTimer<usize> {
    let mut t = AutoplayTimer::new();
    t.start(interval_ms, now_ms, |n: &mut usize| *n += 1).unwrap();
    t
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| String::from(*s)).collect()
}

#[test]
fn autoplay_ticks_on_cadence() {
    let mut t = counting_timer(4000, 0);
    let mut ticks = 0usize;
    assert!(!t.advance(3999, &mut ticks));
    assert!(t.advance(4000, &mut ticks));
    assert!(!t.advance(4001, &mut ticks));
    assert!(t.advance(8000, &mut ticks));
    assert_eq!(ticks, 2);
    assert_eq!(t.next_tick_at(), Some(12_000));
}

#[test]
fn autoplay_rejects_zero_interval() {
    let mut t = AutoplayTimer::<usize>::new();
    assert_eq!(t.start(0, 0, |_| {}), Err(Error::ZeroAutoplayInterval));
    assert!(t.is_stopped());
}

#[test]
fn autoplay_pause_before_first_tick_never_fires() {
    let mut t = counting_timer(4000, 0);
    let mut ticks = 0usize;
    t.pause();
    assert!(t.is_paused());
    assert_eq!(t.next_tick_at(), None);
    for now_ms in [1000u64, 4000, 8000, 100_000] {
        assert!(!t.advance(now_ms, &mut ticks));
    }
    assert_eq!(ticks, 0);
}

#[test]
fn autoplay_resume_restarts_cadence_from_zero() {
    let mut t = counting_timer(4000, 0);
    let mut ticks = 0usize;
    t.pause();
    t.resume(10_000);
    assert!(!t.advance(13_999, &mut ticks));
    assert!(t.advance(14_000, &mut ticks));
    assert_eq!(ticks, 1);
}

#[test]
fn autoplay_skips_missed_periods() {
    let mut t = counting_timer(1000, 0);
    let mut ticks = 0usize;
    assert!(t.advance(10_500, &mut ticks));
    assert_eq!(ticks, 1);
    assert_eq!(t.next_tick_at(), Some(11_500));
}

#[test]
fn autoplay_stop_releases_callback() {
    let counter = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&counter);
    let mut t = AutoplayTimer::<()>::new();
    t.start(100, 0, move |_| {
        c.fetch_add(1, Ordering::Relaxed);
    })
    .unwrap();
    assert_eq!(Arc::strong_count(&counter), 2);

    t.pause();
    t.stop();
    assert_eq!(Arc::strong_count(&counter), 1);
    assert!(!t.advance(1_000, &mut ()));
    t.resume(1_000);
    assert!(!t.is_running());
    assert_eq!(counter.load(Ordering::Relaxed), 0);
}

#[test]
fn drag_gesture_resolves_on_release() {
    let mut d = DragGesture::new();
    assert_eq!(d.end(0.0, 200.0, 50.0), Ok(DragOutcome::None));

    d.begin(300.0);
    d.update(240.0);
    assert!(d.is_active());
    assert_eq!(d.delta(), -60.0);
    assert_eq!(d.end(220.0, 200.0, 50.0), Ok(DragOutcome::StepForward));
    assert!(!d.is_active());
    assert_eq!(d.delta(), 0.0);

    d.begin(100.0);
    assert_eq!(d.end(130.0, 200.0, 50.0), Ok(DragOutcome::None));
}

#[test]
fn drag_gesture_live_translate_follows_pointer() {
    let g = Geometry {
        item_width: 25.0,
        track_width: 125.0,
        translate: 25.0,
    };
    let mut d = DragGesture::new();
    assert_eq!(d.live_translate(g, 200.0), 25.0);
    d.begin(500.0);
    d.update(400.0);
    assert_eq!(d.live_translate(g, 200.0), 37.5);
    assert_eq!(d.live_translate(g, 0.0), 25.0);
    d.cancel();
    assert_eq!(d.live_translate(g, 200.0), 25.0);
}

#[test]
fn resize_debounce_coalesces_bursts() {
    let mut r = ResizeDebounce::new(150);
    assert_eq!(r.poll(0), None);
    r.on_resize(1400.0, 0);
    r.on_resize(1000.0, 100);
    r.on_resize(600.0, 200);
    assert_eq!(r.poll(300), None);
    assert_eq!(r.poll(350), Some(600.0));
    assert_eq!(r.poll(1000), None);
    assert!(!r.is_pending());

    r.on_resize(900.0, 2000);
    assert_eq!(r.flush(), Some(900.0));
}

#[test]
fn controller_resolves_initial_visible_count() {
    let c = Controller::new(6, 900.0, ControllerOptions::new(table()), 0).unwrap();
    assert_eq!(c.engine().visible_count(), 2);
    assert!(!c.is_autoplaying());
}

#[test]
fn controller_rejects_invalid_options() {
    let err = Controller::new(
        6,
        900.0,
        ControllerOptions::new(table()).with_drag_threshold_px(-5.0),
        0,
    )
    .unwrap_err();
    assert_eq!(err, Error::InvalidDragThreshold(-5.0));

    let err = Controller::new(
        6,
        900.0,
        ControllerOptions::new(table()).with_autoplay_interval_ms(Some(0)),
        0,
    )
    .unwrap_err();
    assert_eq!(err, Error::ZeroAutoplayInterval);
}

#[test]
fn controller_applies_debounced_resize_on_tick() {
    let mut c = Controller::new(
        6,
        1400.0,
        ControllerOptions::new(table()).with_resize_debounce_ms(100),
        0,
    )
    .unwrap();
    c.go_to(2, 0);
    assert_eq!(c.engine().offset(), 2);

    c.on_resize(600.0, 10);
    assert!(!c.tick(50));
    assert_eq!(c.engine().visible_count(), 4);
    assert!(c.tick(110));
    assert_eq!(c.engine().visible_count(), 1);
    assert_eq!(c.engine().offset(), 2);

    c.on_resize(1400.0, 200);
    assert!(c.tick(300));
    assert_eq!(c.engine().visible_count(), 4);
    assert_eq!(c.engine().offset(), 2);
}

#[test]
fn controller_autoplay_wraps_hero() {
    let mut c = Controller::new(
        3,
        500.0,
        ControllerOptions::new(table()).with_autoplay_interval_ms(Some(4000)),
        0,
    )
    .unwrap();
    let mut offsets = Vec::new();
    for now_ms in (4000u64..=16_000).step_by(4000) {
        assert!(c.tick(now_ms));
        offsets.push(c.engine().offset());
    }
    assert_eq!(offsets, [1, 2, 0, 1]);
}

#[test]
fn controller_drag_pauses_autoplay_and_navigates() {
    let mut c = Controller::new(
        5,
        500.0,
        ControllerOptions::new(table()).with_autoplay_interval_ms(Some(1000)),
        0,
    )
    .unwrap();

    c.on_pointer_down(400.0);
    assert!(c.is_dragging());
    assert!(!c.is_autoplaying());
    c.on_pointer_move(300.0);
    assert!(!c.tick(5000));
    assert_eq!(c.engine().offset(), 0);
    assert_eq!(c.live_geometry(400.0).translate, 25.0);

    assert_eq!(c.on_pointer_up(280.0, 400.0, 5000), Ok(true));
    assert_eq!(c.engine().offset(), 1);
    assert!(c.is_autoplaying());
    assert!(!c.tick(5999));
    assert!(c.tick(6000));
    assert_eq!(c.engine().offset(), 2);
}

#[test]
fn controller_small_drag_does_not_navigate() {
    let mut c = Controller::new(5, 500.0, ControllerOptions::new(table()), 0).unwrap();
    c.on_pointer_down(400.0);
    assert_eq!(c.on_pointer_up(380.0, 400.0, 10), Ok(false));
    assert_eq!(c.engine().offset(), 0);
}

#[test]
fn controller_hover_pauses_until_leave() {
    let mut c = Controller::new(
        5,
        500.0,
        ControllerOptions::new(table()).with_autoplay_interval_ms(Some(1000)),
        0,
    )
    .unwrap();
    c.on_hover(true, 500);
    c.on_pointer_down(100.0);
    c.on_pointer_cancel(700);
    assert!(!c.is_autoplaying());
    assert!(!c.tick(3000));

    c.on_hover(false, 3000);
    assert!(c.is_autoplaying());
    assert!(c.tick(4000));
    assert_eq!(c.engine().offset(), 1);
}

#[test]
fn controller_manual_navigation_resets_cadence() {
    let mut c = Controller::new(
        6,
        500.0,
        ControllerOptions::new(table()).with_autoplay_interval_ms(Some(1000)),
        0,
    )
    .unwrap();
    assert!(c.next(900));
    assert!(!c.tick(1000));
    assert!(c.tick(1900));
    assert_eq!(c.engine().offset(), 2);
    assert!(c.prev(2000));
    assert_eq!(c.engine().offset(), 1);
}

#[test]
fn controller_dataset_swap_reclamps() {
    let mut c = Controller::new(5, 1400.0, ControllerOptions::new(table()), 0).unwrap();
    assert!(c.next(0));
    assert_eq!(c.engine().offset(), 1);
    assert!(c.set_item_count(2));
    assert_eq!(c.engine().offset(), 0);
    assert!(!c.next(0));
}

#[test]
fn controller_drop_releases_engine_callbacks() {
    let counter = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&counter);
    let mut ctl = Controller::new(5, 500.0, ControllerOptions::new(table()), 0).unwrap();
    ctl.engine_mut().set_on_change(Some(move |_: &carousel::CarouselEngine| {
        c.fetch_add(1, Ordering::Relaxed);
    }));
    ctl.next(0);
    assert_eq!(counter.load(Ordering::Relaxed), 1);
    assert_eq!(Arc::strong_count(&counter), 2);
    drop(ctl);
    assert_eq!(Arc::strong_count(&counter), 1);
}

#[test]
fn controller_stop_autoplay_is_permanent() {
    let mut c = Controller::new(
        5,
        500.0,
        ControllerOptions::new(table()).with_autoplay_interval_ms(Some(1000)),
        0,
    )
    .unwrap();
    c.stop_autoplay();
    c.on_hover(true, 10);
    c.on_hover(false, 20);
    assert!(!c.is_autoplaying());
    assert!(!c.tick(10_000));
    assert!(c.autoplay().is_stopped());
}

#[test]
fn gallery_initializes_and_absorbs_echo() {
    let mut g = Gallery::new(3).unwrap();
    let emitted = g.set_items(strings(&["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"]));
    assert_eq!(emitted.as_deref(), Some("a.jpg"));
    assert_eq!(g.sync_state(), SyncState::Pending);

    assert!(!g.on_external_value(emitted));
    assert_eq!(g.sync_state(), SyncState::Synced);
    assert_eq!(g.selected_index(), Some(0));
    assert_eq!(g.strip().offset(), 0);
}

#[test]
fn gallery_strip_follows_selection() {
    let mut g = Gallery::new(3).unwrap();
    let first = g.set_items(strings(&["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"]));
    g.on_external_value(first);

    assert!(g.on_external_value(Some(String::from("E.JPG"))));
    assert_eq!(g.selected_index(), Some(4));
    assert_eq!(g.strip().offset(), 2);

    let emitted = g.next();
    assert_eq!(emitted.as_deref(), Some("a.jpg"));
    assert_eq!(g.strip().offset(), 0);
    g.on_external_value(emitted);

    let emitted = g.prev();
    assert_eq!(emitted.as_deref(), Some("e.jpg"));
    assert_eq!(g.strip().offset(), 2);
}

#[test]
fn gallery_reload_before_echo_keeps_clicked_image() {
    let mut g = Gallery::new(3).unwrap();
    let first = g.set_items(strings(&["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"]));
    g.on_external_value(first);

    let emitted = g.select(4);
    assert_eq!(g.strip().offset(), 2);
    let reloaded = strings(&["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg", "f.jpg"]);
    assert_eq!(g.set_items(reloaded), None);
    assert_eq!(g.selected_index(), Some(4));
    assert_eq!(g.sync_state(), SyncState::Pending);

    assert!(!g.on_external_value(emitted));
    assert_eq!(g.selected().map(String::as_str), Some("e.jpg"));
    assert_eq!(g.strip().offset(), 2);
}

#[test]
fn gallery_strip_drag_keeps_selection() {
    let mut g = Gallery::new(2).unwrap();
    let first = g.set_items(strings(&["a", "b", "c", "d"]));
    g.on_external_value(first);
    assert!(g.apply_strip_drag(DragOutcome::StepForward));
    assert_eq!(g.strip().offset(), 1);
    assert_eq!(g.selected_index(), Some(0));
    assert_eq!(g.selected().map(String::as_str), Some("a"));
}

#[test]
fn gallery_resize_keeps_selection_visible() {
    let mut g = Gallery::new(4).unwrap();
    let first = g.set_items(strings(&["a", "b", "c", "d", "e", "f"]));
    g.on_external_value(first);
    g.select(3);
    assert_eq!(g.strip().offset(), 0);

    assert_eq!(g.set_visible_count(1), Ok(true));
    assert_eq!(g.strip().offset(), 3);
    assert_eq!(g.set_visible_count(0), Err(Error::InvalidVisibleCount(0)));
}

#[test]
fn gallery_rejects_zero_visible_count() {
    assert_eq!(
        Gallery::<String>::new(0).unwrap_err(),
        Error::ZeroVisibleCount
    );
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_autoplay_never_fires_while_paused(
            interval in 1u64..10_000,
            pause_at in 0u64..10_000,
            polls in proptest::collection::vec(0u64..1_000_000, 0..32),
        ) {
            let mut t = counting_timer(interval, 0);
            let mut ticks = 0usize;
            t.advance(pause_at, &mut ticks);
            let before = ticks;
            t.pause();
            for now_ms in polls {
                prop_assert!(!t.advance(now_ms, &mut ticks));
            }
            prop_assert_eq!(ticks, before);
        }

        #[test]
        fn prop_gallery_selection_always_visible(
            len in 1usize..20,
            visible in 1usize..6,
            picks in proptest::collection::vec(0usize..20, 1..16),
        ) {
            let items: Vec<String> = (0..len).map(|i| alloc::format!("img-{i:02}")).collect();
            let mut g = Gallery::new(visible).unwrap();
            let first = g.set_items(items);
            g.on_external_value(first);
            for pick in picks {
                if let Some(v) = g.select(pick) {
                    g.on_external_value(Some(v));
                }
                let selected = g.selected_index().unwrap();
                prop_assert!(g.strip().visible_range().contains(selected));
            }
        }
    }
}
