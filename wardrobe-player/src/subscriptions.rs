//! Root-level subscription composition

use iced::Subscription;

use crate::messages::Message;
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<Message> {
    // Frame clock only while the carousel spring is moving
    if state.is_animating() {
        iced::window::frames().map(Message::Tick)
    } else {
        Subscription::none()
    }
}
