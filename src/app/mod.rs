// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery modal.
//!
//! The `App` struct wires together the gallery, localization, settings and
//! notifications, and translates gallery effects into side effects like
//! downloads or opening links. Startup policy (which collection to load,
//! which photo to open, which flags override `settings.toml`) lives here so
//! user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::{HistoryRouter, Route};
use crate::domain::gallery::Collection;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::media::cdn::CdnConfig;
use crate::media::manifest;
use crate::ui::gallery::{self, GalleryConfig, ViewMode};
use crate::ui::notifications::{self, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    gallery: Option<gallery::State>,
    /// Photo to reopen after the modal was closed.
    last_index: usize,
    /// Directory of the last saved photo, reused by the next save dialog.
    download_dir: Option<PathBuf>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("gallery", &self.gallery)
            .field("last_index", &self.last_index)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Applies command-line overrides on top of the configured gallery options.
fn gallery_config(config: &config::Config, flags: &Flags) -> GalleryConfig {
    let mut gallery = config.gallery_config();
    if flags.cloud_name.is_some() || flags.cdn_host.is_some() {
        gallery.cdn = CdnConfig::new(
            flags
                .cdn_host
                .clone()
                .unwrap_or_else(|| gallery.cdn.host().to_string()),
            flags
                .cloud_name
                .clone()
                .unwrap_or_else(|| gallery.cdn.cloud_name().to_string()),
        );
    }
    if let Some(interaction) = flags.interaction {
        gallery.interaction = interaction;
    }
    if flags.full {
        gallery.view_mode = ViewMode::Full;
    }
    if let Some(photo) = flags.photo {
        gallery.initial_index = photo;
    }
    gallery
}

/// Route the gallery starts from. Unparseable routes fall back to home.
fn initial_route(flags: &Flags) -> Route {
    match flags.route.as_deref() {
        Some(raw) => Route::parse(raw).unwrap_or_else(|| {
            tracing::warn!(route = raw, "ignoring unrecognized route");
            Route::home()
        }),
        None => Route::home(),
    }
}

fn load_collection(flags: &Flags) -> Result<Collection> {
    let path = flags
        .manifest
        .as_ref()
        .map(PathBuf::from)
        .or_else(paths::default_manifest_path)
        .ok_or_else(|| crate::error::Error::Io("no manifest path available".to_string()))?;
    manifest::load_from_path(&path)
}

impl App {
    /// Initializes application state and opens the gallery on the photo
    /// named by the starting route.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut notifications = notifications::Manager::new();

        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let gallery = match load_collection(&flags) {
            Ok(collection) => {
                let router = HistoryRouter::with_initial(initial_route(&flags));
                Some(gallery::State::new(
                    gallery_config(&config, &flags),
                    collection,
                    Box::new(router),
                ))
            }
            Err(err) => {
                tracing::error!(%err, "failed to load photo collection");
                notifications.push(Notification::error(err.i18n_key()));
                None
            }
        };

        let mut app = App {
            i18n,
            screen: Screen::Unavailable,
            gallery,
            last_index: 0,
            download_dir: paths::default_download_dir(),
            notifications,
        };

        let task = match app.gallery.as_mut() {
            Some(state) => {
                let task = state.mount().map(Message::Gallery);
                app.sync_screen();
                task
            }
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match (&self.gallery, self.screen) {
            (Some(state), Screen::Gallery) => {
                format!("{} - {app_name}", state.router().current().as_path())
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Mirrors the gallery's open state into the screen.
    fn sync_screen(&mut self) {
        let Some(state) = &self.gallery else {
            self.screen = Screen::Unavailable;
            return;
        };
        if let Some(index) = state.current_index() {
            self.last_index = index;
        }
        self.screen = if state.is_open() {
            Screen::Gallery
        } else {
            Screen::Closed
        };
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                let Some(state) = self.gallery.as_mut() else {
                    return Task::none();
                };
                let (effect, task) = state.handle_message(message, &self.i18n);
                let task = task.map(Message::Gallery);
                let follow_up =
                    update::apply_effect(effect, &mut self.notifications, self.download_dir.clone());
                self.sync_screen();
                Task::batch([task, follow_up])
            }
            Message::Reopen => {
                let index = self.last_index;
                let task = match self.gallery.as_mut() {
                    Some(state) => state.open_at(index).map(Message::Gallery),
                    None => Task::none(),
                };
                self.sync_screen();
                task
            }
            Message::DownloadCompleted(result) => {
                if let Some(dir) = update::download_completed(result, &mut self.notifications) {
                    self.download_dir = Some(dir);
                }
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            gallery: self.gallery.as_ref(),
            notifications: &self.notifications,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(self.screen == Screen::Gallery),
            subscription::create_gallery_subscription(self.gallery.as_ref()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::gallery::InteractionMode;

    #[test]
    fn flags_override_gallery_settings() {
        let flags = Flags {
            cloud_name: Some("conf-pics".to_string()),
            interaction: Some(InteractionMode::PinchZoom),
            full: true,
            photo: Some(4),
            ..Flags::default()
        };
        let gallery = gallery_config(&config::Config::default(), &flags);
        assert_eq!(gallery.cdn.cloud_name(), "conf-pics");
        assert_eq!(gallery.cdn.host(), config::DEFAULT_CDN_HOST);
        assert_eq!(gallery.interaction, InteractionMode::PinchZoom);
        assert_eq!(gallery.view_mode, ViewMode::Full);
        assert_eq!(gallery.initial_index, 4);
    }

    #[test]
    fn initial_route_parses_photo_paths() {
        let flags = Flags {
            route: Some("/p/3".to_string()),
            ..Flags::default()
        };
        assert_eq!(initial_route(&flags), Route::photo(3));
    }

    #[test]
    fn bad_route_falls_back_to_home() {
        let flags = Flags {
            route: Some("/elsewhere".to_string()),
            ..Flags::default()
        };
        assert_eq!(initial_route(&flags), Route::home());
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let flags = Flags {
            manifest: Some("/nonexistent/lightbox/collection.toml".to_string()),
            ..Flags::default()
        };
        assert!(load_collection(&flags).is_err());
    }
}
