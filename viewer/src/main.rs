use clap::Parser;
use images::{Gallery, ImageSlot};
use log::{info, warn};
use pigcare_core::clock::SystemClock;
use pigcare_core::provider::{DataProvider, FixtureProvider, MockProvider};
use pigcare_core::{Action, Effect, Session, ShellConfig};
use std::path::PathBuf;
use std::sync::Arc;
use timers::TickerBook;

use iced::{Element, Subscription, Task, Theme};

mod canvas;
mod images;
mod style;
mod timers;
mod views;

#[derive(Parser)]
#[command(author, version, about = "Smart pig-farm monitoring shell")]
struct Args {
    /// Load shell settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Serve farm data from a JSON snapshot instead of the built-in seed
    #[arg(long)]
    fixture: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ShellConfig::load(path)?,
        None => ShellConfig::default(),
    };
    let provider: Arc<dyn DataProvider> = match &args.fixture {
        Some(path) => Arc::new(FixtureProvider::load(path)?),
        None => Arc::new(MockProvider::new()),
    };

    iced::application(
        move || Viewer::boot(config.clone(), provider.clone()),
        Viewer::update,
        Viewer::view,
    )
    .title(application_title)
    .subscription(application_subscription)
    .theme(application_theme)
    .run()?;
    Ok(())
}

fn application_title(state: &Viewer) -> String {
    match &state.session {
        Some(session) => format!("{} - {}", session.config().farm_name, session.route().name()),
        None => "스마트 양돈 관리".into(),
    }
}

fn application_subscription(state: &Viewer) -> Subscription<Message> {
    state.tickers.subscription().map(Message::Shell)
}

fn application_theme(_: &Viewer) -> Theme {
    Theme::Light
}

struct Viewer {
    session: Option<Session>,
    tickers: TickerBook,
    gallery: Gallery,
    failure: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Shell(Action),
    ImageFetched(ImageSlot, Result<Vec<u8>, String>),
}

impl Viewer {
    fn boot(config: ShellConfig, provider: Arc<dyn DataProvider>) -> (Self, Task<Message>) {
        let images = Task::batch([
            fetch_image(ImageSlot::LoginHero, config.login_image_url.clone()),
            fetch_image(ImageSlot::CctvFrame, config.cctv_image_url.clone()),
        ]);
        let mut state = Viewer {
            session: None,
            tickers: TickerBook::default(),
            gallery: Gallery::default(),
            failure: None,
        };

        match Session::launch(config, provider, Arc::new(SystemClock)) {
            Ok((session, effects)) => {
                state.session = Some(session);
                let startup = state.run_effects(effects);
                (state, Task::batch([images, startup]))
            }
            Err(err) => {
                warn!("shell failed to start: {err}");
                state.failure = Some(err.to_string());
                (state, images)
            }
        }
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Shell(action) => {
                let Some(session) = state.session.as_mut() else {
                    return Task::none();
                };
                match session.dispatch(action) {
                    Ok(effects) => state.run_effects(effects),
                    Err(err) => {
                        warn!("action rejected: {err}");
                        Task::none()
                    }
                }
            }
            Message::ImageFetched(slot, fetched) => {
                state.gallery.store(slot, fetched);
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        match &state.session {
            Some(session) => views::shell(session, &state.gallery).map(Message::Shell),
            None => iced::widget::center(iced::widget::text(
                state.failure.as_deref().unwrap_or_default(),
            ))
            .into(),
        }
    }

    /// Tickers become subscriptions, delays become tasks; notices are already on the session.
    fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = self
            .tickers
            .absorb(effects)
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::Schedule { delay, action } => Some(Task::perform(
                    tokio::time::sleep(delay),
                    move |()| Message::Shell(action),
                )),
                Effect::Notice(notice) => {
                    info!("notice: {} / {}", notice.title, notice.body);
                    None
                }
                Effect::StartTicker { .. } | Effect::StopTicker { .. } => None,
            })
            .collect();
        Task::batch(tasks)
    }
}

fn fetch_image(slot: ImageSlot, url: String) -> Task<Message> {
    Task::perform(images::fetch(url), move |fetched| {
        Message::ImageFetched(slot, fetched)
    })
}
