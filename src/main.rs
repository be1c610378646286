use iced::window;
use shopping_list::App;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: iced::Size::new(480.0, 640.0),
            ..Default::default()
        })
        .run()
}
