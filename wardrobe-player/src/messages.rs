use std::time::Instant;

use wardrobe_core::{DragSample, Point, Size};

/// Pointer input from the carousel canvas, in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselMessage {
    Pressed(Point),
    Dragged(DragSample),
    Released,
    /// Pointer left the canvas or the touch was lost mid-gesture.
    Cancelled,
    /// Canvas bounds changed; the arc geometry follows them.
    Resized(Size),
}

#[derive(Debug, Clone)]
pub enum Message {
    Carousel(CarouselMessage),
    /// The carousel proposed a new active item.
    Selected(usize),
    /// Active item picked outside the carousel (previous/next buttons).
    SelectPrevious,
    SelectNext,
    ToggleAccepted,
    ToggleRejected,
    RemoveActive,
    /// Frame-synchronized tick with timestamp from window::frames()
    Tick(Instant),
}

impl From<CarouselMessage> for Message {
    fn from(msg: CarouselMessage) -> Self {
        Message::Carousel(msg)
    }
}
