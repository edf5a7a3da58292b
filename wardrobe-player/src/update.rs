use std::time::Instant;

use iced::Task;
use log::{debug, info};

use crate::messages::{CarouselMessage, Message};
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Carousel(msg) => handle_carousel(state, msg),
        Message::Selected(index) => handle_selected(state, index),
        Message::SelectPrevious => step_selection(state, -1),
        Message::SelectNext => step_selection(state, 1),
        Message::ToggleAccepted => toggle_flag(state, Flag::Accepted),
        Message::ToggleRejected => toggle_flag(state, Flag::Rejected),
        Message::RemoveActive => remove_active(state),
        Message::Tick(now) => {
            state.engine.tick(now);
            Task::none()
        }
    }
}

fn handle_carousel(state: &mut State, msg: CarouselMessage) -> Task<Message> {
    let now = Instant::now();
    match msg {
        CarouselMessage::Pressed(position) => state.engine.press(position),
        CarouselMessage::Dragged(sample) => {
            state.engine.drag(sample);
        }
        CarouselMessage::Released => {
            // A proposal is handed back through the same path an outside
            // selection would take
            if let Some(index) = state.engine.release(now) {
                return Task::done(Message::Selected(index));
            }
        }
        CarouselMessage::Cancelled => state.engine.cancel(now),
        CarouselMessage::Resized(size) => {
            state.engine.set_viewport(size);
            state.invalidate_carousel();
        }
    }
    Task::none()
}

fn handle_selected(state: &mut State, index: usize) -> Task<Message> {
    if index >= state.items.len() {
        debug!("Ignoring selection {index} past {} items", state.items.len());
        return Task::none();
    }
    state.active_index = index;
    if let Some(item) = state.active_item() {
        info!("Selected {} ({})", item.label, item.id);
    }
    state.engine.sync_active_index(index, Instant::now());
    state.invalidate_carousel();
    Task::none()
}

fn step_selection(state: &mut State, step: isize) -> Task<Message> {
    let count = state.items.len();
    if count == 0 {
        return Task::none();
    }
    let next = (state.active_index as isize + step).rem_euclid(count as isize);
    handle_selected(state, next as usize)
}

#[derive(Debug, Clone, Copy)]
enum Flag {
    Accepted,
    Rejected,
}

fn toggle_flag(state: &mut State, flag: Flag) -> Task<Message> {
    let Some(item) = state.active_item_mut() else {
        return Task::none();
    };
    match flag {
        Flag::Accepted => item.accepted = !item.accepted,
        Flag::Rejected => item.rejected = !item.rejected,
    }
    debug!(
        "{}: accepted={} rejected={}",
        item.label, item.accepted, item.rejected
    );
    state.invalidate_carousel();
    Task::none()
}

fn remove_active(state: &mut State) -> Task<Message> {
    if state.items.is_empty() {
        return Task::none();
    }
    let removed = state.items.remove(state.active_index);
    info!("Removed {} from the outfit", removed.label);
    state.active_index =
        state.active_index.min(state.items.len().saturating_sub(1));

    let now = Instant::now();
    state.engine.sync_items(&state.items, now);
    state.engine.sync_active_index(state.active_index, now);
    state.invalidate_carousel();
    Task::none()
}
