use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length};
use wardrobe_model::{ImageRef, WardrobeItem};

use crate::messages::Message;
use crate::state::State;
use crate::theme::WardrobeTheme;
use crate::widgets::carousel_canvas;

const DETAIL_WIDTH: f32 = 280.0;
const PREVIEW_SIZE: f32 = 200.0;

pub fn view(state: &State) -> Element<'_, Message> {
    let carousel: Element<'_, Message> = if state.items.is_empty() {
        container(
            text("No items in this outfit")
                .color(WardrobeTheme::TEXT_SECONDARY),
        )
        .center(Length::Fill)
        .into()
    } else {
        carousel_canvas(&state.engine, &state.items, &state.carousel_cache)
    };

    let detail = container(detail_panel(state))
        .padding(20)
        .width(Length::Fixed(DETAIL_WIDTH))
        .height(Length::Fill)
        .style(WardrobeTheme::panel);

    row![carousel, detail]
        .spacing(16)
        .padding(16)
        .height(Length::Fill)
        .into()
}

fn detail_panel(state: &State) -> Element<'_, Message> {
    let Some(item) = state.active_item() else {
        return text("Add items to start planning")
            .color(WardrobeTheme::TEXT_SECONDARY)
            .into();
    };

    let position = text(format!(
        "{} of {}",
        state.active_index + 1,
        state.items.len()
    ))
    .size(13)
    .color(WardrobeTheme::TEXT_SECONDARY);

    let navigation = row![
        button(text("Previous")).on_press(Message::SelectPrevious),
        button(text("Next")).on_press(Message::SelectNext),
    ]
    .spacing(8);

    let verdict = row![
        button(text(if item.accepted { "Accepted" } else { "Accept" }))
            .on_press(Message::ToggleAccepted)
            .style(button::success),
        button(text(if item.rejected { "Rejected" } else { "Reject" }))
            .on_press(Message::ToggleRejected)
            .style(button::danger),
    ]
    .spacing(8);

    column![
        text(&item.label).size(24),
        position,
        preview(item),
        text(status_line(item)).size(14),
        verdict,
        navigation,
        button(text("Remove from outfit"))
            .on_press(Message::RemoveActive)
            .style(button::secondary),
    ]
    .spacing(14)
    .align_x(Alignment::Start)
    .into()
}

fn preview(item: &WardrobeItem) -> Element<'_, Message> {
    match &item.image {
        ImageRef::Local(path) => image(image::Handle::from_path(path))
            .width(Length::Fixed(PREVIEW_SIZE))
            .height(Length::Fixed(PREVIEW_SIZE))
            .into(),
        // Remote pictures are never fetched here
        ImageRef::Remote(url) => text(url.as_str())
            .size(12)
            .color(WardrobeTheme::TEXT_SECONDARY)
            .into(),
    }
}

pub fn status_line(item: &WardrobeItem) -> &'static str {
    match (item.accepted, item.rejected) {
        (true, true) => "Accepted and rejected",
        (true, false) => "Accepted",
        (false, true) => "Rejected",
        (false, false) => "Undecided",
    }
}
