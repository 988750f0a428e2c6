use crate::config::Config;
use crate::event::AppEvent;
use crate::feed::activation::ActivationId;
use crate::feed::types::FeedState;
use crate::scene::{self, Mesh, Star, CORE_RADIUS};
use crate::ui::{
    contact_panel::ContactPanel,
    core_view::CoreView,
    detail_panel::DetailPanel,
    help_panel::HelpPanel,
    hero::{HeroBanner, HeroButton, HERO_HEIGHT},
    input::{self, Action},
    repo_list::RepoList,
    status_bar::StatusBar,
    theme,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};
use tokio::task::JoinHandle;

const STAR_COUNT: usize = 160;
const STAR_SEED: u64 = 0x0d11_17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Hero,
    Repos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    Help,
    Detail,
    Contact,
}

pub struct App {
    pub config: Config,

    pub feed: FeedState,
    pub activation: ActivationId,
    load_task: Option<JoinHandle<()>>,
    pub reload_requested: bool,

    pub focus: Focus,
    pub hero_button: HeroButton,
    pub selected: usize,
    pub popup: Option<Popup>,

    pub show_scene: bool,
    pub elapsed: f64,
    pub tick: usize,
    mesh: Mesh,
    stars: Vec<Star>,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let show_scene = config.show_scene;
        Self {
            config,
            feed: FeedState::Loading,
            activation: ActivationId::INITIAL,
            load_task: None,
            reload_requested: false,
            focus: Focus::Hero,
            hero_button: HeroButton::Projects,
            selected: 0,
            popup: None,
            show_scene,
            elapsed: 0.0,
            tick: 0,
            mesh: Mesh::icosahedron(CORE_RADIUS),
            stars: scene::starfield(STAR_COUNT, STAR_SEED),
            should_quit: false,
        }
    }

    /// Tears down the current activation and starts a new one in `Loading`.
    ///
    /// The caller spawns the load task for the returned id and hands it to
    /// [`App::attach_load`].
    pub fn begin_activation(&mut self) -> ActivationId {
        self.teardown();
        self.activation = self.activation.next();
        self.feed = FeedState::Loading;
        self.selected = 0;
        if self.popup == Some(Popup::Detail) {
            self.popup = None;
        }
        tracing::info!(activation = %self.activation, account = %self.config.account, "activation started");
        self.activation
    }

    pub fn attach_load(&mut self, handle: JoinHandle<()>) {
        if let Some(old) = self.load_task.replace(handle) {
            old.abort();
        }
    }

    /// Aborts any in-flight load. Its result, if already queued, is dropped
    /// by the activation check in [`App::apply_feed`].
    pub fn teardown(&mut self) {
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
    }

    /// Applies a load result. Returns false when it is stale or the current
    /// activation already reached a terminal state.
    pub fn apply_feed(&mut self, activation: ActivationId, state: FeedState) -> bool {
        if activation != self.activation {
            tracing::debug!(%activation, current = %self.activation, "discarding stale feed result");
            return false;
        }
        if self.feed.is_terminal() {
            tracing::debug!(%activation, "activation already settled, ignoring result");
            return false;
        }
        tracing::info!(%activation, state = state.label(), "feed settled");
        self.feed = state;
        self.load_task = None;
        self.clamp_selection();
        true
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, self.popup.is_some());
                self.handle_action(action);
            }
            AppEvent::FeedLoaded { activation, state } => {
                self.apply_feed(activation, state);
            }
            AppEvent::Tick => self.advance(self.config.tick_rate_ms as f64 / 1000.0),
            AppEvent::Resize => {}
        }
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
        self.tick = self.tick.wrapping_add(1);
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => {
                if self.focus == Focus::Hero {
                    self.focus = Focus::Repos;
                } else if self.selected + 1 < self.feed.entries().len() {
                    self.selected += 1;
                }
            }
            Action::ScrollUp => {
                if self.focus == Focus::Repos {
                    if self.selected == 0 {
                        self.focus = Focus::Hero;
                    } else {
                        self.selected -= 1;
                    }
                }
            }
            Action::NextButton => {
                self.focus = Focus::Hero;
                self.hero_button = self.hero_button.toggle();
            }
            Action::Select => match self.focus {
                Focus::Hero => match self.hero_button {
                    HeroButton::Projects => self.focus = Focus::Repos,
                    HeroButton::Contact => self.popup = Some(Popup::Contact),
                },
                Focus::Repos => {
                    if self.selected_listing().is_some() {
                        self.popup = Some(Popup::Detail);
                    }
                }
            },
            Action::Reload => self.reload_requested = true,
            Action::ToggleScene => self.show_scene = !self.show_scene,
            Action::Help => self.popup = Some(Popup::Help),
            Action::ClosePopup => self.popup = None,
            Action::None => {}
        }
    }

    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    pub fn selected_listing(&self) -> Option<&crate::feed::types::RepositoryListing> {
        self.feed.entries().get(self.selected)
    }

    fn clamp_selection(&mut self) {
        let count = self.feed.entries().len();
        self.selected = if count == 0 { 0 } else { self.selected.min(count - 1) };
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BRAND_DARK)),
            size,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Min(6),
                Constraint::Length(1),
            ])
            .split(size);
        let stage = chunks[0];

        if self.show_scene {
            let core = CoreView {
                mesh: &self.mesh,
                stars: &self.stars,
                elapsed: self.elapsed,
            };
            frame.render_widget(core, stage);
        }

        if stage.height >= HERO_HEIGHT / 2 {
            let hero = HeroBanner {
                handle: &self.config.account,
                tagline: &self.config.tagline,
                selected: self.hero_button,
                focused: self.focus == Focus::Hero,
            };
            frame.render_widget(hero, stage);
        }

        let repos = RepoList {
            account: &self.config.account,
            state: &self.feed,
            selected: self.selected,
            focused: self.focus == Focus::Repos,
            tick: self.tick,
        };
        frame.render_widget(repos, chunks[1]);

        let status = StatusBar {
            account: &self.config.account,
            state: &self.feed,
            activation: self.activation,
        };
        frame.render_widget(status, chunks[2]);

        match self.popup {
            Some(Popup::Help) => frame.render_widget(HelpPanel, size),
            Some(Popup::Contact) => {
                let url = self.config.profile_url();
                frame.render_widget(
                    ContactPanel {
                        account: &self.config.account,
                        profile_url: &url,
                    },
                    size,
                );
            }
            Some(Popup::Detail) => {
                if let Some(listing) = self.selected_listing() {
                    frame.render_widget(DetailPanel { listing }, size);
                }
            }
            None => {}
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.teardown();
    }
}
