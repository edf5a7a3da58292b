use std::sync::Arc;

use iced::{Application, Font, Program as IcedProgram, Settings, Theme};

use crate::messages::Message;
use crate::state::State;
use crate::theme::WardrobeTheme;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build the outfit screen application using the provided configuration.
pub fn application(
    config: AppConfig,
) -> Application<impl IcedProgram<State = State, Message = Message, Theme = Theme>>
{
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::base_state(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Wardrobe")
    .subscription(subscriptions::subscription)
    .theme(app_theme)
    .window(iced::window::Settings {
        size: iced::Size::new(960.0, 640.0),
        min_size: Some(iced::Size::new(480.0, 400.0)),
        resizable: true,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    Settings {
        id: Some("wardrobe-player".to_string()),
        antialiasing: true,
        default_font: Font::DEFAULT,
        ..Settings::default()
    }
}

fn app_theme(_: &State) -> Theme {
    WardrobeTheme::theme()
}
