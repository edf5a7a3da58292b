use wardrobe_player::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("wardrobe_player", LevelFilter::Debug)
        .filter_module("wardrobe_core", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
        log::debug!("Logger initialized from RUST_LOG");
    }

    let config = AppConfig::from_environment();

    app::application(config).run()
}
