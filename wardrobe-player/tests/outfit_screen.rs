use std::time::{Duration, Instant};

use wardrobe_core::{CarouselSettings, DragSample, PhaseKind, Point, Size};
use wardrobe_player::app::{AppConfig, bootstrap};
use wardrobe_player::catalog::demo_items;
use wardrobe_player::messages::{CarouselMessage, Message};
use wardrobe_player::state::State;
use wardrobe_player::update::update;

fn screen(count: usize) -> State {
    let mut state = State::new(demo_items(count), 0, CarouselSettings::default());
    let _ = update(
        &mut state,
        CarouselMessage::Resized(Size::new(400.0, 300.0)).into(),
    );
    state
}

fn settle(state: &mut State) {
    let mut now = Instant::now();
    for _ in 0..600 {
        now += Duration::from_millis(16);
        let _ = update(state, Message::Tick(now));
        if !state.is_animating() {
            return;
        }
    }
    panic!("carousel never settled");
}

#[test]
fn drag_proposes_and_the_screen_accepts() {
    let mut state = screen(12);
    for msg in [
        CarouselMessage::Pressed(Point::new(200.0, 200.0)),
        CarouselMessage::Dragged(DragSample::new(0, 30.0, 0.0)),
        CarouselMessage::Dragged(DragSample::new(1, 400.0, 0.0)),
        CarouselMessage::Released,
    ] {
        let _ = update(&mut state, msg.into());
    }
    // proposal only: the screen still owns the index
    assert_eq!(state.active_index, 0);
    assert_eq!(state.engine.active_index(), 5);
    let target = state.engine.rotation().settle_target();
    assert_eq!(target, Some(210.0));

    let _ = update(&mut state, Message::Selected(5));
    assert_eq!(state.active_index, 5);
    assert_eq!(state.engine.rotation().settle_target(), target);
    settle(&mut state);
    assert_eq!(state.engine.current_angle(), 210.0);
}

#[test]
fn previous_and_next_wrap_and_animate() {
    let mut state = screen(12);
    let _ = update(&mut state, Message::SelectPrevious);
    assert_eq!(state.active_index, 11);
    assert_eq!(state.engine.active_index(), 11);
    assert_eq!(state.engine.phase(), PhaseKind::Settling);
    // the short way round: 30 degrees, not 330
    assert_eq!(state.engine.rotation().settle_target(), Some(30.0));

    settle(&mut state);
    let _ = update(&mut state, Message::SelectNext);
    assert_eq!(state.active_index, 0);
}

#[test]
fn verdict_buttons_flip_only_the_active_item() {
    let mut state = screen(6);
    let _ = update(&mut state, Message::Selected(2));
    let before: Vec<_> =
        state.items.iter().map(|i| (i.accepted, i.rejected)).collect();

    let _ = update(&mut state, Message::ToggleAccepted);
    let _ = update(&mut state, Message::ToggleRejected);

    for (index, item) in state.items.iter().enumerate() {
        let (accepted, rejected) = before[index];
        if index == 2 {
            assert_eq!(item.accepted, !accepted);
            assert_eq!(item.rejected, !rejected);
        } else {
            assert_eq!((item.accepted, item.rejected), (accepted, rejected));
        }
    }
}

#[test]
fn removing_items_shrinks_the_carousel_down_to_empty() {
    let mut state = screen(3);
    let _ = update(&mut state, Message::Selected(2));
    let _ = update(&mut state, Message::RemoveActive);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.active_index, 1);
    assert_eq!(state.engine.item_count(), 2);
    assert_eq!(state.engine.active_index(), 1);

    let _ = update(&mut state, Message::RemoveActive);
    let _ = update(&mut state, Message::RemoveActive);
    assert!(state.items.is_empty());
    assert!(state.active_item().is_none());
    assert!(state.engine.render_plan().is_empty());

    // nothing left to select or drag
    let _ = update(&mut state, Message::Selected(0));
    let _ = update(&mut state, Message::SelectNext);
    let _ = update(&mut state, CarouselMessage::Pressed(Point::default()).into());
    let _ = update(
        &mut state,
        CarouselMessage::Dragged(DragSample::new(0, 90.0, 0.0)).into(),
    );
    assert!(!state.engine.is_dragging());
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut state = screen(4);
    let _ = update(&mut state, Message::Selected(9));
    assert_eq!(state.active_index, 0);
    assert!(!state.is_animating());
}

#[test]
fn cancelled_drag_returns_to_the_active_item() {
    let mut state = screen(12);
    let _ = update(&mut state, CarouselMessage::Pressed(Point::default()).into());
    let _ = update(
        &mut state,
        CarouselMessage::Dragged(DragSample::new(0, 100.0, 0.0)).into(),
    );
    let _ = update(&mut state, CarouselMessage::Cancelled.into());
    assert_eq!(state.engine.active_index(), 0);
    settle(&mut state);
    assert_eq!(state.engine.current_angle(), 0.0);
}

#[test]
fn boot_uses_demo_wardrobe_without_a_catalog() {
    let config = AppConfig::default().with_demo_items(7);
    let state = bootstrap::base_state(&config);
    assert_eq!(state.items.len(), 7);
    assert_eq!(state.active_index, 0);
    assert_eq!(state.engine.item_count(), 7);
}
