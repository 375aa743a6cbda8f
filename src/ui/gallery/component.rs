// SPDX-License-Identifier: MPL-2.0
//! Gallery modal component encapsulating state and update logic.
//!
//! The component owns the collection, the router and the image cache. It
//! opens on the photo named by the route, keeps the route in sync while the
//! user navigates, and asks the application to perform side effects
//! (downloads, opening links) through [`Effect`].

use crate::application::port::{Route, Router};
use crate::application::query::NavigationState;
use crate::domain::gallery::{Collection, ImageRecord};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::cdn::Rendition;
use crate::media::download::download_file_name;
use crate::media::fetch::fetch_image;
use crate::media::share::share_intent_url;
use crate::media::{ImageCache, ImageData};
use crate::ui::design_tokens::{palette::WHITE, spacing, typography};
use crate::ui::gallery::config::{GalleryConfig, InteractionMode};
use crate::ui::gallery::session::{OpenSession, Session};
use crate::ui::gallery::stage::{Stage, StageEvent, StageInput, StageProgram};
use crate::ui::gallery::{controls, filmstrip};
use crate::ui::state::Swipe;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Canvas, Column, Container, Space, Stack, Text};
use iced::{keyboard, time, Element, Length, Subscription, Task};
use std::time::{Duration, Instant};

/// Redraw interval while a slide is running.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Messages handled by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the modal on a photo.
    Open(usize),
    Close,
    NavigatePrevious,
    NavigateNext,
    KeyPressed(keyboard::Key),
    Stage(StageInput),
    Controls(controls::Message),
    Filmstrip(filmstrip::Message),
    ImageLoaded {
        url: String,
        result: Result<ImageData, Error>,
    },
    Tick(Instant),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The modal closed; the host shows its underlying page again.
    Closed,
    /// Save the original asset, offering `file_name` in the save dialog.
    Download { url: String, file_name: String },
    /// Open a link in the user's browser.
    OpenUrl(String),
}

/// Gallery component state.
pub struct State {
    config: GalleryConfig,
    collection: Collection,
    router: Box<dyn Router>,
    session: Session,
    cache: ImageCache,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("config", &self.config)
            .field("photos", &self.collection.len())
            .field("route", &self.router.current())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(config: GalleryConfig, collection: Collection, router: Box<dyn Router>) -> Self {
        Self {
            config,
            collection,
            router,
            session: Session::Closed,
            cache: ImageCache::default(),
        }
    }

    /// Opens the modal on the photo named by the route, falling back to the
    /// configured initial photo when the route carries no valid `photoId`.
    pub fn mount(&mut self) -> Task<Message> {
        if self.collection.is_empty() {
            tracing::warn!("collection is empty, gallery stays closed");
            return Task::none();
        }
        let from_route = self
            .router
            .current()
            .photo_id
            .filter(|id| self.collection.contains(*id));
        let index = from_route
            .unwrap_or_else(|| self.config.initial_index.min(self.collection.len() - 1));
        self.open_at(index)
    }

    /// Opens (or reopens) the modal on `index`.
    pub fn open_at(&mut self, index: usize) -> Task<Message> {
        if !self.collection.contains(index) {
            tracing::warn!(index, total = self.collection.len(), "ignoring open request");
            return Task::none();
        }

        let mut session = OpenSession::new(index, self.collection.len());
        session.controls_ready = self
            .main_url(index)
            .is_some_and(|url| self.cache.contains(&url));
        self.session = Session::Open(Box::new(session));

        let route = Route::photo(index);
        if self.router.current() != route {
            self.router.push(route);
        }
        tracing::debug!(index, "gallery opened");
        self.request_images()
    }

    fn close(&mut self) -> Effect {
        if !self.session.is_open() {
            return Effect::None;
        }
        self.session = Session::Closed;
        self.router.push(Route::home());
        tracing::debug!("gallery closed");
        Effect::Closed
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    #[must_use]
    pub fn router(&self) -> &dyn Router {
        self.router.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    #[must_use]
    pub fn navigation(&self) -> Option<&NavigationState> {
        self.session.as_open().map(|session| &session.navigation)
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.navigation().map(NavigationState::index)
    }

    /// Whether the magnifier would be drawn right now.
    #[must_use]
    pub fn loupe_visible(&self) -> bool {
        self.config.interaction == InteractionMode::Loupe
            && self
                .session
                .as_open()
                .is_some_and(|session| session.loupe.is_visible(session.zoom.scale()))
    }

    /// Whether a slide animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.session
            .as_open()
            .is_some_and(|session| session.slide.is_some())
    }

    #[must_use]
    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    fn current_record(&self) -> Option<(usize, &ImageRecord)> {
        let index = self.current_index()?;
        self.collection.get(index).map(|record| (index, record))
    }

    fn url_for(&self, index: usize, rendition: Rendition) -> Option<String> {
        self.collection
            .get(index)
            .map(|record| self.config.cdn.url(record, rendition))
    }

    fn main_url(&self, index: usize) -> Option<String> {
        self.url_for(index, self.config.view_mode.rendition())
    }

    // =========================================================================
    // Update
    // =========================================================================

    pub fn handle_message(&mut self, message: Message, i18n: &I18n) -> (Effect, Task<Message>) {
        match message {
            Message::Open(index) => (Effect::None, self.open_at(index)),
            Message::Close => (self.close(), Task::none()),
            Message::NavigatePrevious => (Effect::None, self.navigate(NavigationState::previous)),
            Message::NavigateNext => (Effect::None, self.navigate(NavigationState::next)),
            Message::Filmstrip(filmstrip::Message::Select(index)) => (
                Effect::None,
                self.navigate(|navigation| navigation.jump_to(index)),
            ),
            Message::KeyPressed(key) => self.handle_key(&key),
            Message::Stage(input) => (Effect::None, self.handle_stage(input)),
            Message::Controls(message) => (self.handle_controls(message, i18n), Task::none()),
            Message::ImageLoaded { url, result } => {
                self.image_loaded(url, result);
                (Effect::None, Task::none())
            }
            Message::Tick(now) => {
                if let Some(session) = self.session.as_open_mut() {
                    session.advance_slide(now);
                }
                (Effect::None, Task::none())
            }
        }
    }

    /// Applies a navigation step and, if the index moved, syncs the route
    /// and starts loading the new photo.
    fn navigate(&mut self, step: impl FnOnce(&mut NavigationState) -> bool) -> Task<Message> {
        let Some(session) = self.session.as_open_mut() else {
            return Task::none();
        };
        if !step(&mut session.navigation) {
            return Task::none();
        }
        let index = session.navigation.index();
        session.photo_changed(Instant::now());

        self.router.push(Route::photo(index));
        tracing::debug!(index, "navigated");
        self.request_images()
    }

    fn handle_key(&mut self, key: &keyboard::Key) -> (Effect, Task<Message>) {
        use keyboard::key::Named;
        use keyboard::Key;

        if !self.session.is_open() {
            return (Effect::None, Task::none());
        }
        match key.as_ref() {
            Key::Named(Named::ArrowLeft) => (Effect::None, self.navigate(NavigationState::previous)),
            Key::Named(Named::ArrowRight) => (Effect::None, self.navigate(NavigationState::next)),
            Key::Named(Named::Escape) => (self.close(), Task::none()),
            Key::Character("+" | "=") => {
                self.zoom(|session| {
                    session.zoom.zoom_in();
                });
                (Effect::None, Task::none())
            }
            Key::Character("-") => {
                self.zoom(|session| {
                    session.zoom.zoom_out();
                });
                (Effect::None, Task::none())
            }
            Key::Character("0") => {
                self.zoom(|session| session.zoom.reset());
                (Effect::None, Task::none())
            }
            _ => (Effect::None, Task::none()),
        }
    }

    /// The loupe keeps its hover sample; visibility is gated on the scale.
    fn zoom(&mut self, apply: impl FnOnce(&mut OpenSession)) {
        if let Some(session) = self.session.as_open_mut() {
            apply(session);
        }
    }

    fn handle_controls(&mut self, message: controls::Message, i18n: &I18n) -> Effect {
        match message {
            controls::Message::ZoomIn => {
                self.zoom(|session| {
                    session.zoom.zoom_in();
                });
                Effect::None
            }
            controls::Message::ZoomOut => {
                self.zoom(|session| {
                    session.zoom.zoom_out();
                });
                Effect::None
            }
            controls::Message::ResetZoom => {
                self.zoom(|session| session.zoom.reset());
                Effect::None
            }
            controls::Message::Download => match self.current_record() {
                Some((index, record)) => Effect::Download {
                    url: self.config.cdn.url(record, Rendition::Original),
                    file_name: download_file_name(index),
                },
                None => Effect::None,
            },
            controls::Message::Share => match self.current_index() {
                Some(index) => Effect::OpenUrl(share_intent_url(
                    &i18n.tr("gallery-share-message"),
                    &self.config.share_base_url,
                    index,
                )),
                None => Effect::None,
            },
            controls::Message::OpenOriginal => match self.current_record() {
                Some((_, record)) => {
                    Effect::OpenUrl(self.config.cdn.url(record, Rendition::Original))
                }
                None => Effect::None,
            },
            controls::Message::Close => self.close(),
        }
    }

    fn handle_stage(&mut self, input: StageInput) -> Task<Message> {
        let interaction = self.config.interaction;
        let Some(session) = self.session.as_open_mut() else {
            return Task::none();
        };
        session.zoom.set_base_size(input.fitted);

        let mut swipe = None;
        match input.event {
            StageEvent::CursorMoved { position, sample } => {
                if let Some(offset) = session.drag.calculate_offset(position) {
                    session.zoom.pan_to(offset);
                }
                if interaction == InteractionMode::Loupe {
                    session.loupe.pointer_moved(sample);
                }
            }
            StageEvent::CursorLeft => {
                session.loupe.pointer_left();
            }
            StageEvent::Pressed(position) => {
                if session.zoom.is_active() {
                    session.drag.start(position, session.zoom.offset());
                } else {
                    session.swipe.start(position);
                }
            }
            StageEvent::Released(position) => {
                session.drag.stop();
                swipe = session.swipe.finish(position);
            }
            StageEvent::DoubleClicked(position) => {
                session.swipe.cancel();
                session.zoom.double_click(input.anchor(position));
            }
            StageEvent::WheelScrolled { lines, position } => {
                session.zoom.wheel(lines, input.anchor(position));
            }
            StageEvent::FingerPressed { id, position } => {
                session.pinch.finger_pressed(id, position);
                if session.pinch.is_pinching() {
                    session.swipe.cancel();
                    session.drag.stop();
                } else if session.zoom.is_active() {
                    session.drag.start(position, session.zoom.offset());
                } else {
                    session.swipe.start(position);
                }
            }
            StageEvent::FingerMoved { id, position } => {
                if let Some(update) = session.pinch.finger_moved(id, position) {
                    if interaction == InteractionMode::PinchZoom {
                        session.zoom.pinch(update.ratio, input.anchor(update.midpoint));
                    }
                } else if let Some(offset) = session.drag.calculate_offset(position) {
                    session.zoom.pan_to(offset);
                }
            }
            StageEvent::FingerLifted { id, position } => {
                let was_pinching = session.pinch.is_pinching();
                session.pinch.finger_lifted(id);
                session.drag.stop();
                if !was_pinching {
                    swipe = session.swipe.finish(position);
                }
            }
        }

        match swipe {
            Some(Swipe::Left) => self.navigate(NavigationState::next),
            Some(Swipe::Right) => self.navigate(NavigationState::previous),
            None => Task::none(),
        }
    }

    fn image_loaded(&mut self, url: String, result: Result<ImageData, Error>) {
        let is_current = self
            .current_index()
            .and_then(|index| self.main_url(index))
            .is_some_and(|current| current == url);

        match result {
            Ok(image) => {
                tracing::debug!(%url, width = image.width, height = image.height, "image loaded");
                self.cache.insert(url, image);
                if is_current {
                    if let Some(session) = self.session.as_open_mut() {
                        session.controls_ready = true;
                        session.load_error = None;
                        session.zoom.reset();
                    }
                }
            }
            Err(err) => {
                tracing::warn!(%url, %err, "image failed to load");
                self.cache.finish_failed(&url);
                if is_current {
                    if let Some(session) = self.session.as_open_mut() {
                        session.controls_ready = true;
                        session.load_error = Some(err);
                    }
                }
            }
        }
    }

    /// Starts fetches for the current photo, its neighbours and the
    /// filmstrip thumbnails that are neither cached nor in flight.
    fn request_images(&mut self) -> Task<Message> {
        let Some(session) = self.session.as_open() else {
            return Task::none();
        };
        let index = session.navigation.index();
        let window = session.navigation.thumbnail_window();

        let mut urls: Vec<String> = Vec::new();
        urls.extend(self.main_url(index));
        urls.extend(self.main_url(index + 1));
        urls.extend(index.checked_sub(1).and_then(|previous| self.main_url(previous)));
        if self.config.view_mode.shows_filmstrip() {
            urls.extend(window.filter_map(|i| self.url_for(i, Rendition::Thumbnail)));
        }

        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .filter(|url| self.cache.mark_pending(url))
            .map(|url| {
                let key = url.clone();
                Task::perform(fetch_image(url), move |result| Message::ImageLoaded {
                    url: key,
                    result,
                })
            })
            .collect();
        Task::batch(tasks)
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let Some(session) = self.session.as_open() else {
            return Space::new().into();
        };
        let now = Instant::now();
        let interaction = self.config.interaction;
        let view_mode = self.config.view_mode;
        let navigation = session.navigation.info();
        let index = navigation.current_index;

        let main_image = self
            .main_url(index)
            .and_then(|url| self.cache.peek(&url));

        let loupe = if interaction == InteractionMode::Loupe {
            session.loupe.geometry(
                session.zoom.scale(),
                self.config.loupe_size,
                self.config.loupe_zoom,
            )
        } else {
            None
        };

        let stage = Canvas::new(StageProgram {
            stage: Stage {
                image: main_image,
                scale: session.zoom.scale().value(),
                offset: session.zoom.offset(),
                slide_fraction: session.slide_fraction(now),
                loupe,
                track_loupe: interaction == InteractionMode::Loupe,
            },
            on_event: Message::Stage,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let mut stack = Stack::new().push(stage);

        if let Some(status) = status_view(session, main_image.is_some(), i18n) {
            stack = stack.push(status);
        }

        if session.controls_ready && view_mode.shows_arrows() {
            if navigation.has_previous {
                stack = stack.push(arrow("◀", Message::NavigatePrevious, Horizontal::Left));
            }
            if navigation.has_next {
                stack = stack.push(arrow("▶", Message::NavigateNext, Horizontal::Right));
            }
        }

        let toolbar = controls::view(controls::ViewContext {
            i18n,
            view_mode,
            interaction,
            scale: session.zoom.scale(),
            percent: session.zoom.percent(),
            actions_ready: session.controls_ready,
        })
        .map(Message::Controls);

        let position = i18n.tr_with_args(
            "gallery-position",
            &[
                ("current", &(index + 1).to_string()),
                ("total", &navigation.total_count.to_string()),
            ],
        );

        let mut chrome = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(toolbar)
            .push(Space::new().height(Length::Fill))
            .push(
                container(Text::new(position).size(typography::CAPTION).color(WHITE))
                    .center_x(Length::Fill)
                    .padding(spacing::XXS),
            );

        if view_mode.shows_filmstrip() {
            let thumbnails = session
                .navigation
                .thumbnail_window()
                .map(|i| filmstrip::Thumbnail {
                    index: i,
                    image: self
                        .url_for(i, Rendition::Thumbnail)
                        .and_then(|url| self.cache.peek(&url)),
                    is_current: i == index,
                })
                .collect();
            chrome = chrome.push(
                filmstrip::view(filmstrip::ViewContext { thumbnails }).map(Message::Filmstrip),
            );
        }

        stack = stack.push(chrome);

        container(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            time::every(ANIMATION_FRAME).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

/// Loading or error text drawn over the stage.
fn status_view<'a>(
    session: &OpenSession,
    has_image: bool,
    i18n: &I18n,
) -> Option<Element<'a, Message>> {
    let content: Element<'a, Message> = if let Some(error) = &session.load_error {
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(i18n.tr("gallery-load-error"))
                    .size(typography::BODY_LG)
                    .color(WHITE),
            )
            .push(
                Text::new(i18n.tr(error.i18n_key()))
                    .size(typography::BODY)
                    .color(WHITE),
            )
            .into()
    } else if !has_image {
        Text::new(i18n.tr("gallery-loading"))
            .size(typography::BODY_LG)
            .color(WHITE)
            .into()
    } else {
        return None;
    };

    Some(
        Container::new(
            container(content)
                .padding(spacing::MD)
                .style(styles::overlay::indicator(spacing::XS)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    )
}

fn arrow<'a>(glyph: &'a str, message: Message, side: Horizontal) -> Element<'a, Message> {
    let button = button(Text::new(glyph).size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::button_overlay_default)
        .on_press(message);

    Container::new(button)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::HistoryRouter;
    use crate::application::query::SlideDirection;
    use crate::ui::state::PointerSample;
    use iced::{Point, Size};

    fn collection(count: usize) -> Collection {
        Collection::from_pairs((0..count).map(|i| (format!("photo-{i}"), "jpg")))
            .expect("valid collection")
    }

    fn gallery(count: usize, route: Route) -> State {
        State::new(
            GalleryConfig::default(),
            collection(count),
            Box::new(HistoryRouter::with_initial(route)),
        )
    }

    fn stage(event: StageEvent) -> Message {
        Message::Stage(StageInput {
            event,
            center: Point::new(400.0, 300.0),
            fitted: Size::new(800.0, 600.0),
        })
    }

    #[test]
    fn mount_uses_photo_id_from_route() {
        let mut state = gallery(5, Route::photo(3));
        let _ = state.mount();
        assert_eq!(state.current_index(), Some(3));
    }

    #[test]
    fn mount_ignores_out_of_range_photo_id() {
        let mut state = gallery(5, Route::photo(99));
        let _ = state.mount();
        assert_eq!(state.current_index(), Some(0));
        assert_eq!(state.router().current(), Route::photo(0));
    }

    #[test]
    fn arrow_keys_navigate_and_sync_route() {
        let i18n = I18n::default();
        let mut state = gallery(5, Route::photo(1));
        let _ = state.mount();

        let _ = state.handle_message(
            Message::KeyPressed(keyboard::Key::Named(keyboard::key::Named::ArrowRight)),
            &i18n,
        );
        assert_eq!(state.current_index(), Some(2));
        assert_eq!(state.router().current().query(), "photoId=2");
        assert_eq!(
            state.navigation().and_then(NavigationState::direction),
            Some(SlideDirection::Forward)
        );
        assert!(state.is_animating());
    }

    #[test]
    fn escape_closes_and_routes_home() {
        let i18n = I18n::default();
        let mut state = gallery(5, Route::photo(1));
        let _ = state.mount();

        let (effect, _) = state.handle_message(
            Message::KeyPressed(keyboard::Key::Named(keyboard::key::Named::Escape)),
            &i18n,
        );
        assert_eq!(effect, Effect::Closed);
        assert!(!state.is_open());
        assert_eq!(state.router().current(), Route::home());
    }

    #[test]
    fn swipe_left_shows_next_photo() {
        let i18n = I18n::default();
        let mut state = gallery(5, Route::photo(2));
        let _ = state.mount();

        let _ = state.handle_message(stage(StageEvent::Pressed(Point::new(300.0, 200.0))), &i18n);
        let _ = state.handle_message(stage(StageEvent::Released(Point::new(200.0, 210.0))), &i18n);
        assert_eq!(state.current_index(), Some(3));
    }

    #[test]
    fn short_drag_is_not_a_swipe() {
        let i18n = I18n::default();
        let mut state = gallery(5, Route::photo(2));
        let _ = state.mount();

        let _ = state.handle_message(stage(StageEvent::Pressed(Point::new(300.0, 200.0))), &i18n);
        let _ = state.handle_message(stage(StageEvent::Released(Point::new(270.0, 200.0))), &i18n);
        assert_eq!(state.current_index(), Some(2));
    }

    #[test]
    fn loupe_hides_while_zoomed() {
        let i18n = I18n::default();
        let mut state = gallery(3, Route::photo(0));
        let _ = state.mount();

        let sample = PointerSample {
            x: 10.0,
            y: 10.0,
            width: 800.0,
            height: 600.0,
        };
        let _ = state.handle_message(
            stage(StageEvent::CursorMoved {
                position: Point::new(10.0, 10.0),
                sample: Some(sample),
            }),
            &i18n,
        );
        assert!(state.loupe_visible());

        let _ = state.handle_message(Message::Controls(controls::Message::ZoomIn), &i18n);
        assert!(!state.loupe_visible());
    }

    #[test]
    fn loupe_returns_after_zoom_reset_while_hovering() {
        let i18n = I18n::default();
        let mut state = gallery(3, Route::photo(0));
        let _ = state.mount();

        let sample = PointerSample {
            x: 10.0,
            y: 10.0,
            width: 800.0,
            height: 600.0,
        };
        let _ = state.handle_message(
            stage(StageEvent::CursorMoved {
                position: Point::new(10.0, 10.0),
                sample: Some(sample),
            }),
            &i18n,
        );
        let _ = state.handle_message(Message::Controls(controls::Message::ZoomIn), &i18n);
        assert!(!state.loupe_visible());

        let _ = state.handle_message(Message::Controls(controls::Message::ResetZoom), &i18n);
        assert!(state.loupe_visible());

        let _ = state.handle_message(
            stage(StageEvent::WheelScrolled {
                lines: 2.0,
                position: Point::new(400.0, 300.0),
            }),
            &i18n,
        );
        assert!(!state.loupe_visible());
        let _ = state.handle_message(Message::Controls(controls::Message::ZoomOut), &i18n);
        assert!(state.loupe_visible());
    }

    #[test]
    fn double_click_zooms_in_loupe_mode() {
        let i18n = I18n::default();
        let mut state = gallery(3, Route::photo(0));
        let _ = state.mount();
        assert_eq!(state.config().interaction, InteractionMode::Loupe);

        let _ = state.handle_message(
            stage(StageEvent::DoubleClicked(Point::new(400.0, 300.0))),
            &i18n,
        );
        let session = state.session().as_open().expect("open");
        assert_eq!(session.zoom.percent().value(), 125);
    }

    #[test]
    fn download_targets_original_asset() {
        let i18n = I18n::default();
        let mut state = gallery(3, Route::photo(1));
        let _ = state.mount();

        let (effect, _) = state.handle_message(Message::Controls(controls::Message::Download), &i18n);
        match effect {
            Effect::Download { url, file_name } => {
                assert!(url.ends_with("/image/upload/photo-1.jpg"));
                assert_eq!(file_name, "1.jpg");
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn failed_load_reveals_controls_with_error() {
        let i18n = I18n::default();
        let mut state = gallery(3, Route::photo(0));
        let _ = state.mount();
        let url = state.main_url(0).expect("url");

        let _ = state.handle_message(
            Message::ImageLoaded {
                url,
                result: Err(Error::Network("HTTP status: 404".into())),
            },
            &i18n,
        );
        let session = state.session().as_open().expect("open");
        assert!(session.controls_ready);
        assert!(matches!(session.load_error, Some(Error::Network(_))));
    }

    #[test]
    fn loaded_image_is_cached_and_resets_zoom() {
        let i18n = I18n::default();
        let mut state = gallery(3, Route::photo(0));
        let _ = state.mount();
        let _ = state.handle_message(Message::Controls(controls::Message::ZoomIn), &i18n);
        let url = state.main_url(0).expect("url");

        let _ = state.handle_message(
            Message::ImageLoaded {
                url: url.clone(),
                result: Ok(ImageData::from_rgba(2, 1, vec![0; 8])),
            },
            &i18n,
        );
        assert!(state.cache().contains(&url));
        let session = state.session().as_open().expect("open");
        assert!(session.controls_ready);
        assert!(!session.zoom.is_active());
    }

    #[test]
    fn view_renders_open_and_closed() {
        let i18n = I18n::default();
        let mut state = gallery(3, Route::photo(0));
        {
            let _closed = state.view(&i18n);
        }
        let _ = state.mount();
        let _open = state.view(&i18n);
    }
}
