use clap::Parser;
use iced::time::{self, Instant};
use iced::widget::{button, column, container, text};
use iced::{keyboard, Alignment, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

mod error;
mod shop;
mod state;
mod ui;

use error::{Error, Result};
use shop::loader::LoadError;
use shop::paths::ShopPaths;
use state::config::Config;
use state::data::{
    Generation, LoadRequest, LoadedImage, ModalState, ShopIdentifier, ShopSource, ViewMode,
};
use state::viewer::{LoadOutcome, ModalClick, ShopViewer};
use ui::fade::Fade;

/// Interval between animation frames while a fade is running
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "shop-viewer", about = "View generated item shop images")]
#[command(version)]
struct Cli {
    /// Shop hash (defaults to the contents of the hash file)
    #[arg(long)]
    hash: Option<String>,

    /// Directory containing the shop images
    #[arg(long)]
    shops_dir: Option<PathBuf>,

    /// Hash file written by the shop generator
    #[arg(long)]
    hash_file: Option<PathBuf>,

    /// Mode shown first
    #[arg(long, value_enum)]
    mode: Option<ViewMode>,

    /// Look the shop up in the archive instead of the live directory
    #[arg(long)]
    archive: bool,

    /// Print archived shop hashes and exit
    #[arg(long)]
    list_archive: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Command line flags win over the config file
    fn apply_to(&self, config: &mut Config) {
        if let Some(dir) = &self.shops_dir {
            config.shops_dir = dir.clone();
        }
        if let Some(file) = &self.hash_file {
            config.hash_file = file.clone();
        }
        if let Some(mode) = self.mode {
            config.initial_mode = mode;
        }
    }

    fn source(&self) -> ShopSource {
        if self.archive {
            ShopSource::Archive
        } else {
            ShopSource::Current
        }
    }
}

/// Everything the window needs, resolved before it opens
#[derive(Debug)]
struct Startup {
    config: Config,
    paths: ShopPaths,
}

/// Main application state
struct ShopApp {
    /// Mode, displayed image and lightbox
    viewer: ShopViewer,
    /// Rendered opacity of the main image
    fade: Fade,
    /// Wait between fade-out start and the image request
    fade_delay: Duration,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked one of the toggle buttons
    SelectMode(ViewMode),
    /// Fade-out delay for a selection is over
    FadeDelayElapsed(Generation),
    /// Background load completed
    ImageLoaded(Generation, std::result::Result<LoadedImage, LoadError>),
    /// User asked to reload after a failure
    Retry,
    /// User clicked the main image
    OpenModal,
    /// User clicked somewhere on the open lightbox
    Modal(ModalClick),
    /// Escape pressed while the lightbox is open
    CloseModal,
    /// Animation frame
    Tick(Instant),
}

impl ShopApp {
    /// Create the application and request the initial image
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup { config, paths } = startup;

        let (viewer, request) = ShopViewer::new(paths, config.initial_mode);

        let app = ShopApp {
            viewer,
            fade: Fade::new(config.fade_duration(), 0.0),
            fade_delay: config.fade_delay(),
        };

        (app, load(request))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectMode(mode) => {
                let Some(generation) = self.viewer.select_mode(mode) else {
                    return Task::none();
                };

                self.sync_fade();

                let delay = self.fade_delay;
                Task::perform(async move { tokio::time::sleep(delay).await }, move |()| {
                    Message::FadeDelayElapsed(generation)
                })
            }
            Message::FadeDelayElapsed(generation) => {
                match self.viewer.fade_delay_elapsed(generation) {
                    Some(request) => load(request),
                    None => Task::none(),
                }
            }
            Message::ImageLoaded(generation, result) => {
                if self.viewer.load_finished(generation, result) == LoadOutcome::Shown {
                    self.sync_fade();
                }
                Task::none()
            }
            Message::Retry => match self.viewer.retry() {
                Some(request) => load(request),
                None => Task::none(),
            },
            Message::OpenModal => {
                self.viewer.open_modal();
                Task::none()
            }
            Message::Modal(click) => {
                self.viewer.modal_clicked(click);
                Task::none()
            }
            Message::CloseModal => {
                self.viewer.close_modal();
                Task::none()
            }
            Message::Tick(now) => {
                self.fade.tick(now);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let main: Element<Message> = if let Some(error) = self.viewer.error() {
            column![
                text(error.to_string()).size(16),
                button("Retry").on_press(Message::Retry).padding(10),
            ]
            .spacing(12)
            .align_x(Alignment::Center)
            .into()
        } else if let Some(shown) = &self.viewer.displayed().image {
            ui::picture::clickable(shown, self.fade.opacity(), Message::OpenModal)
        } else if self.viewer.is_loading() {
            text("Loading...").size(16).into()
        } else {
            text("").into()
        };

        let content = column![
            text(self.heading()).size(32),
            ui::toggle::mode_toggle(&self.viewer),
            container(main)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        let base: Element<Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        match self.viewer.modal() {
            ModalState::Open(enlarged) => ui::modal::lightbox(base, enlarged),
            ModalState::Closed => base,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let frames = if self.fade.is_animating() {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        let escape = if self.viewer.modal().is_open() {
            keyboard::on_key_press(|key, _modifiers| match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::CloseModal),
                _ => None,
            })
        } else {
            Subscription::none()
        };

        Subscription::batch([frames, escape])
    }

    /// Animate the main image towards the visibility the viewer wants
    fn sync_fade(&mut self) {
        let target = self.viewer.displayed().visibility.opacity();
        self.fade.animate_to(target, Instant::now());
    }

    fn heading(&self) -> String {
        let paths = self.viewer.paths();
        let archived = match paths.source() {
            ShopSource::Archive => " (archived)",
            ShopSource::Current => "",
        };

        format!("{}{}", self.viewer.current_mode().label(), archived)
    }

    fn title(&self) -> String {
        format!("Shop Viewer - {}", self.viewer.paths().shop())
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Start loading the image for `request` in the background
fn load(request: LoadRequest) -> Task<Message> {
    let generation = request.generation;

    tracing::debug!(
        "⏳ Loading {:?} from {} (generation {:?})",
        request.mode,
        request.path.display(),
        generation
    );

    Task::perform(shop::loader::load_shop_image(request.path), move |result| {
        Message::ImageLoaded(generation, result)
    })
}

fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load(&path),
        None => Ok(Config::default()),
    }
}

fn resolve_startup(cli: &Cli, mut config: Config) -> Result<Startup> {
    cli.apply_to(&mut config);

    let shop = match &cli.hash {
        Some(raw) => ShopIdentifier::new(raw.clone())?,
        None => shop::hash::read_hash_file(&config.hash_file)?
            .ok_or_else(|| Error::MissingHash(config.hash_file.clone()))?,
    };

    let paths = ShopPaths::new(config.shops_dir.clone(), shop, cli.source());

    Ok(Startup { config, paths })
}

fn print_archive(cli: &Cli, mut config: Config) -> Result<()> {
    cli.apply_to(&mut config);

    let shops = shop::archive::list_archived(&config.shops_dir)?;
    if shops.is_empty() {
        println!("No archived shops in {}", config.shops_dir.display());
        return Ok(());
    }

    for archived in shops {
        let og = if archived.has_og { "  +og" } else { "" };
        let item_shop = if archived.has_item_shop { "" } else { "  (og only)" };
        println!("{}{}{}", archived.hash, og, item_shop);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    if cli.list_archive {
        return print_archive(&cli, config);
    }

    let startup = resolve_startup(&cli, config)?;

    tracing::info!(
        "🛒 Shop Viewer starting with shop {} from {}",
        startup.paths.shop(),
        startup.paths.base_dir().display()
    );

    iced::application(ShopApp::title, ShopApp::update, ShopApp::view)
        .theme(ShopApp::theme)
        .subscription(ShopApp::subscription)
        .centered()
        .run_with(move || ShopApp::new(startup))?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("shop-viewer").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = cli(&["--shops-dir", "/srv/shops", "--mode", "og", "--hash", "abc123"]);
        let mut config = Config::default();
        config.fade_delay_ms = 120;

        let startup = resolve_startup(&cli, config).unwrap();
        assert_eq!(startup.config.shops_dir, PathBuf::from("/srv/shops"));
        assert_eq!(startup.config.initial_mode, ViewMode::OriginalGallery);
        assert_eq!(startup.config.fade_delay_ms, 120);
        assert_eq!(
            startup.paths.image_path(ViewMode::OriginalGallery),
            PathBuf::from("/srv/shops/og/og-abc123.jpg")
        );
    }

    #[test]
    fn test_hash_falls_back_to_hash_file() {
        let dir = tempfile::tempdir().unwrap();
        let hash_file = dir.path().join("hash.json");
        fs::write(&hash_file, r#"{"hash": "fromfile"}"#).unwrap();

        let cli = cli(&["--hash-file", hash_file.to_str().unwrap()]);
        let startup = resolve_startup(&cli, Config::default()).unwrap();
        assert_eq!(startup.paths.shop().as_str(), "fromfile");
    }

    #[test]
    fn test_missing_hash_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let hash_file = dir.path().join("hash.json");

        let cli = cli(&["--hash-file", hash_file.to_str().unwrap()]);
        let result = resolve_startup(&cli, Config::default());
        assert!(matches!(result, Err(Error::MissingHash(path)) if path == hash_file));
    }

    #[test]
    fn test_archive_flag_switches_source() {
        let cli = cli(&["--hash", "old", "--archive", "--shops-dir", "shops"]);
        let startup = resolve_startup(&cli, Config::default()).unwrap();
        assert_eq!(
            startup.paths.image_path(ViewMode::ItemShop),
            PathBuf::from("shops/archive/shop-old.jpg")
        );
    }

    #[test]
    fn test_select_mode_hides_image_and_ignores_repeat() {
        let cli = cli(&["--hash", "abc123"]);
        let startup = resolve_startup(&cli, Config::default()).unwrap();
        let (mut app, _) = ShopApp::new(startup);

        // Complete the initial load (first generation) and finish the fade-in
        let initial = LoadedImage::from_rgba(
            PathBuf::from("shops/shop-abc123.jpg"),
            1,
            1,
            vec![0, 0, 0, 255],
        );
        let _ = app.update(Message::ImageLoaded(Generation::default().next(), Ok(initial)));
        assert!(app.fade.is_animating());
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(1)));
        assert_eq!(app.fade.opacity(), 1.0);
        assert!(!app.fade.is_animating());
        assert!(!app.viewer.is_loading());

        // Clicking the active mode changes nothing
        let _ = app.update(Message::SelectMode(ViewMode::ItemShop));
        assert!(!app.fade.is_animating());
        assert_eq!(app.fade.opacity(), 1.0);
        assert!(!app.viewer.is_loading());

        // Switching modes starts a fade-out towards hidden
        let _ = app.update(Message::SelectMode(ViewMode::OriginalGallery));
        assert!(app.viewer.is_active(ViewMode::OriginalGallery));
        assert!(app.viewer.is_loading());
        assert!(app.fade.is_animating());
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(1)));
        assert_eq!(app.fade.opacity(), 0.0);
    }
}
