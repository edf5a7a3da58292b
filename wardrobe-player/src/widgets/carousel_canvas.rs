//! Canvas front-end for the carousel engine
//!
//! Drawing reads the engine's render plan; pointer and touch input are turned
//! into `CarouselMessage`s with offsets measured from the press position.

use iced::widget::canvas::{
    self, Canvas, Event, Frame, Geometry, Path, Program, Stroke, Text,
};
use iced::{
    Color, Element, Length, Pixels, Rectangle, Renderer, Theme, alignment,
    mouse, touch,
};
use wardrobe_core::{CarouselEngine, DragSample, PlacedItem};
use wardrobe_model::WardrobeItem;

use crate::messages::{CarouselMessage, Message};
use crate::theme::WardrobeTheme;

/// Badge dot radius relative to the disc radius
const BADGE_RATIO: f32 = 0.24;
const MIN_BADGE_RADIUS: f32 = 4.0;

pub struct CarouselCanvas<'a> {
    engine: &'a CarouselEngine,
    items: &'a [WardrobeItem],
    cache: &'a canvas::Cache,
}

impl std::fmt::Debug for CarouselCanvas<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselCanvas")
            .field("items", &self.items.len())
            .field("active_index", &self.engine.active_index())
            .finish()
    }
}

/// Per-widget pointer tracking.
#[derive(Debug, Default)]
pub struct PointerState {
    gesture: Option<Gesture>,
    next_seq: u64,
    last_size: Option<iced::Size>,
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    origin: iced::Point,
    /// `None` for the mouse.
    finger: Option<touch::Finger>,
}

impl PointerState {
    fn begin(
        &mut self,
        origin: iced::Point,
        finger: Option<touch::Finger>,
    ) -> CarouselMessage {
        self.gesture = Some(Gesture { origin, finger });
        CarouselMessage::Pressed(to_core(origin))
    }

    fn sample(&mut self, position: iced::Point) -> Option<CarouselMessage> {
        let gesture = self.gesture?;
        let seq = self.next_seq;
        self.next_seq += 1;
        Some(CarouselMessage::Dragged(DragSample::new(
            seq,
            position.x - gesture.origin.x,
            position.y - gesture.origin.y,
        )))
    }

    fn end(&mut self, message: CarouselMessage) -> Option<CarouselMessage> {
        self.gesture.take().map(|_| message)
    }

    fn tracks_finger(&self, id: touch::Finger) -> bool {
        self.gesture.is_some_and(|g| g.finger == Some(id))
    }

    fn tracks_mouse(&self) -> bool {
        self.gesture.is_some_and(|g| g.finger.is_none())
    }
}

pub fn carousel_canvas<'a>(
    engine: &'a CarouselEngine,
    items: &'a [WardrobeItem],
    cache: &'a canvas::Cache,
) -> Element<'a, Message> {
    Canvas::new(CarouselCanvas {
        engine,
        items,
        cache,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

impl Program<Message> for CarouselCanvas<'_> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let size = bounds.size();
        if state.last_size != Some(size) {
            state.last_size = Some(size);
            let resized = CarouselMessage::Resized(wardrobe_core::Size::new(
                size.width,
                size.height,
            ));
            return Some(canvas::Action::publish(resized.into()));
        }

        let message = match event {
            Event::Mouse(mouse_event) => {
                mouse_message(state, mouse_event, bounds, cursor)?
            }
            Event::Touch(touch_event) => {
                touch_message(state, touch_event, bounds)?
            }
            _ => return None,
        };
        Some(canvas::Action::publish(message.into()).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let discs = self.cache.draw(renderer, bounds.size(), |frame| {
            // Far items first so the active disc lands on top
            for placed in self.engine.render_plan() {
                if let Some(item) = self.items.get(placed.index) {
                    draw_disc(frame, &placed, item);
                }
            }
        });
        vec![discs]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.tracks_mouse() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) && !self.items.is_empty() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

fn mouse_message(
    state: &mut PointerState,
    event: &mouse::Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
) -> Option<CarouselMessage> {
    match event {
        mouse::Event::ButtonPressed(mouse::Button::Left) => {
            let position = cursor.position_in(bounds)?;
            Some(state.begin(position, None))
        }
        mouse::Event::CursorMoved { .. } if state.tracks_mouse() => {
            match cursor.position_in(bounds) {
                Some(position) => state.sample(position),
                None => state.end(CarouselMessage::Cancelled),
            }
        }
        mouse::Event::ButtonReleased(mouse::Button::Left)
            if state.tracks_mouse() =>
        {
            state.end(CarouselMessage::Released)
        }
        mouse::Event::CursorLeft if state.tracks_mouse() => {
            state.end(CarouselMessage::Cancelled)
        }
        _ => None,
    }
}

fn touch_message(
    state: &mut PointerState,
    event: &touch::Event,
    bounds: Rectangle,
) -> Option<CarouselMessage> {
    let local = |p: &iced::Point| iced::Point::new(p.x - bounds.x, p.y - bounds.y);
    match event {
        touch::Event::FingerPressed { id, position }
            if state.gesture.is_none() && bounds.contains(*position) =>
        {
            Some(state.begin(local(position), Some(*id)))
        }
        touch::Event::FingerMoved { id, position }
            if state.tracks_finger(*id) =>
        {
            state.sample(local(position))
        }
        touch::Event::FingerLifted { id, .. } if state.tracks_finger(*id) => {
            state.end(CarouselMessage::Released)
        }
        touch::Event::FingerLost { id, .. } if state.tracks_finger(*id) => {
            state.end(CarouselMessage::Cancelled)
        }
        _ => None,
    }
}

fn draw_disc(frame: &mut Frame, placed: &PlacedItem, item: &WardrobeItem) {
    let center = iced::Point::new(placed.center.x, placed.center.y);
    let radius = placed.diameter / 2.0;
    let fade = |color: Color| color.scale_alpha(placed.opacity);

    let disc = Path::circle(center, radius);
    let fill = if placed.is_active {
        WardrobeTheme::DISC_ACTIVE
    } else {
        WardrobeTheme::DISC_FILL
    };
    frame.fill(&disc, fade(fill));
    frame.stroke(
        &disc,
        Stroke::default()
            .with_width(if placed.is_active { 2.5 } else { 1.0 })
            .with_color(fade(if placed.is_active {
                WardrobeTheme::ACCENT
            } else {
                WardrobeTheme::DISC_STROKE
            })),
    );

    frame.fill_text(Text {
        content: item.initial().to_string(),
        position: center,
        color: fade(WardrobeTheme::TEXT_PRIMARY),
        size: Pixels(radius * 0.8),
        align_x: alignment::Horizontal::Center.into(),
        align_y: alignment::Vertical::Center,
        ..Text::default()
    });

    let badge_radius = (radius * BADGE_RATIO).max(MIN_BADGE_RADIUS);
    let offset = radius * std::f32::consts::FRAC_1_SQRT_2;
    if item.accepted {
        let badge = iced::Point::new(center.x + offset, center.y - offset);
        frame.fill(
            &Path::circle(badge, badge_radius),
            fade(WardrobeTheme::ACCEPTED),
        );
    }
    if item.rejected {
        let badge = iced::Point::new(center.x - offset, center.y - offset);
        frame.fill(
            &Path::circle(badge, badge_radius),
            fade(WardrobeTheme::REJECTED),
        );
    }
}

fn to_core(point: iced::Point) -> wardrobe_core::Point {
    wardrobe_core::Point::new(point.x, point.y)
}
