use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use wardrobe_core::carousel::angle::normalize_degrees;
use wardrobe_core::{
    ArcMode, CarouselEngine, CarouselSettings, DragSample, PhaseKind, Point,
    RotationSnapshot, Size,
};

const FRAME: Duration = Duration::from_millis(16);

fn mount(count: usize, active: usize) -> CarouselEngine {
    CarouselEngine::mount(
        CarouselSettings::default(),
        count,
        active,
        Size::new(400.0, 300.0),
    )
}

/// Tick at 60 fps until the spring rests.
fn run_until_idle(engine: &mut CarouselEngine, start: Instant) -> Instant {
    let mut now = start;
    for _ in 0..600 {
        now += FRAME;
        if !engine.tick(now) {
            break;
        }
    }
    assert_eq!(engine.phase(), PhaseKind::Idle, "spring never settled");
    now
}

fn assert_at_top(engine: &CarouselEngine, index: usize) {
    let top = engine.geometry().top();
    let pos = engine.item_position(index).expect("index in range");
    assert!(
        pos.distance(top) < 1e-2,
        "item {index} at {pos:?}, top is {top:?}"
    );
}

#[test]
fn drag_release_settles_on_resolved_item() {
    let mut engine = mount(12, 0);
    let t0 = Instant::now();
    engine.press(Point::new(200.0, 200.0));
    for (seq, dx) in [40.0, 160.0, 400.0].into_iter().enumerate() {
        engine.drag(DragSample::new(seq as u64, dx, 0.0));
    }
    assert_eq!(engine.current_angle(), 200.0);

    assert_eq!(engine.release(t0), Some(5));
    assert_eq!(engine.active_index(), 5);
    assert_eq!(engine.rotation().settle_target(), Some(210.0));

    run_until_idle(&mut engine, t0);
    assert_eq!(engine.current_angle(), 210.0);
    assert_at_top(&engine, 5);
}

#[test]
fn new_drag_interrupts_settle_from_interpolated_angle() {
    let mut engine = mount(12, 0);
    let t0 = Instant::now();
    engine.sync_active_index(6, t0);
    assert!(engine.is_settling());

    engine.tick(t0 + Duration::from_millis(40));
    let mid = engine.current_angle();
    assert!(mid < 0.0 && mid > -180.0, "mid-flight angle {mid}");

    engine.press(Point::new(200.0, 200.0));
    engine.drag(DragSample::new(0, 20.0, 0.0));
    assert!(engine.is_dragging());
    assert_eq!(engine.current_angle(), mid + 10.0);

    // frame ticks during the drag do nothing
    assert!(!engine.tick(t0 + Duration::from_millis(80)));
    assert_eq!(engine.current_angle(), mid + 10.0);
}

#[test]
fn tap_on_item_selects_and_animates_to_it() {
    let mut engine = mount(12, 0);
    let t0 = Instant::now();
    let target = engine.item_position(2).expect("index 2");

    engine.press(target);
    engine.drag(DragSample::new(0, 2.0, -1.0));
    assert_eq!(engine.release(t0), Some(2));
    assert!(engine.is_settling());

    run_until_idle(&mut engine, t0);
    assert_eq!(normalize_degrees(engine.current_angle()), 300.0);
    assert_at_top(&engine, 2);
}

#[test]
fn tap_on_active_item_or_background_selects_nothing() {
    let mut engine = mount(12, 0);
    let now = Instant::now();

    engine.press(engine.geometry().top());
    assert_eq!(engine.release(now), None);

    engine.press(Point::new(5.0, 5.0));
    assert_eq!(engine.release(now), None);
    assert_eq!(engine.phase(), PhaseKind::Idle);
}

#[test]
fn caller_echo_keeps_spring_and_veto_redirects_it() {
    let mut engine = mount(12, 0);
    let t0 = Instant::now();
    engine.press(Point::default());
    engine.drag(DragSample::new(0, 400.0, 0.0));
    assert_eq!(engine.release(t0), Some(5));
    let revision = engine.rotation().revision();

    // the caller accepted the proposal
    engine.sync_active_index(5, t0);
    assert_eq!(engine.rotation().revision(), revision);
    assert_eq!(engine.rotation().settle_target(), Some(210.0));

    // the caller vetoed it and restored index 0
    engine.sync_active_index(0, t0);
    let target = engine.rotation().settle_target().expect("settling");
    assert_eq!(normalize_degrees(target), 0.0);
    assert_eq!(target, 360.0, "nearest equivalent of 0 from 200");
}

#[test]
fn external_selection_during_drag_is_applied_on_release() {
    let mut engine = mount(12, 0);
    let t0 = Instant::now();
    engine.press(Point::default());
    engine.drag(DragSample::new(0, 20.0, 0.0));
    engine.sync_active_index(4, t0);
    assert!(engine.is_dragging(), "drag keeps ownership of the angle");

    // releasing near index 0 is a change relative to the new active index
    assert_eq!(engine.release(t0), Some(0));
}

#[test]
fn zero_items_render_nothing_and_never_report() {
    let mut engine = mount(0, 3);
    let calls = Rc::new(RefCell::new(0));
    engine.subscribe({
        let calls = Rc::clone(&calls);
        move |_: &RotationSnapshot| *calls.borrow_mut() += 1
    });
    let now = Instant::now();

    assert!(engine.render_plan().is_empty());
    assert!(engine.item_position(0).is_none());
    engine.press(Point::default());
    engine.drag(DragSample::new(0, 300.0, 0.0));
    assert_eq!(engine.release(now), None);
    engine.sync_active_index(2, now);
    assert!(!engine.tick(now + FRAME));
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn single_item_stays_pinned_at_top() {
    let mut engine = mount(1, 0);
    let t0 = Instant::now();
    engine.press(Point::default());
    engine.drag(DragSample::new(0, 250.0, 0.0));
    assert_at_top(&engine, 0);
    assert_eq!(engine.release(t0), None);

    run_until_idle(&mut engine, t0);
    assert_eq!(engine.current_angle(), 0.0);
}

#[test]
fn shrinking_the_list_clamps_and_resettles() {
    let mut engine = mount(12, 10);
    let t0 = Instant::now();
    engine.set_item_count(4, t0);

    assert_eq!(engine.active_index(), 3);
    assert_eq!(engine.layout().mode(), ArcMode::HalfCircle);
    run_until_idle(&mut engine, t0);
    assert_eq!(engine.current_angle(), -45.0);
    assert_at_top(&engine, 3);
}

#[test]
fn half_circle_drag_past_the_end_lands_on_last_item() {
    let mut engine = mount(9, 0);
    let t0 = Instant::now();
    assert_eq!(engine.current_angle(), 90.0);

    engine.press(Point::default());
    engine.drag(DragSample::new(0, -1000.0, 0.0));
    assert_eq!(engine.release(t0), Some(8));
    assert_eq!(engine.rotation().settle_target(), Some(-70.0));
}

#[test]
fn listeners_follow_the_settle_to_rest() {
    let mut engine = mount(12, 0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    engine.subscribe({
        let seen = Rc::clone(&seen);
        move |snap: &RotationSnapshot| seen.borrow_mut().push(*snap)
    });
    let t0 = Instant::now();
    engine.sync_active_index(1, t0);
    run_until_idle(&mut engine, t0);

    let seen = seen.borrow();
    assert_eq!(seen.first().map(|s| s.phase), Some(PhaseKind::Settling));
    let last = seen.last().expect("notified");
    assert_eq!(last.phase, PhaseKind::Idle);
    assert_eq!(last.angle_degrees, engine.current_angle());
    assert!(seen.windows(2).all(|w| w[0].revision < w[1].revision));
}

#[test]
fn unmount_mid_settle_freezes_everything() {
    let mut engine = mount(12, 0);
    let t0 = Instant::now();
    engine.sync_active_index(3, t0);
    engine.tick(t0 + FRAME);
    let frozen = engine.current_angle();

    engine.unmount();
    assert!(!engine.is_settling());
    assert!(!engine.tick(t0 + FRAME * 2));
    engine.sync_active_index(7, t0);
    assert_eq!(engine.current_angle(), frozen);
    assert_eq!(engine.active_index(), 3);
}
