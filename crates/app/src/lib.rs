//! Desktop window for `osshare`.
//!
//! Owns the Iced application loop and wires together:
//! - the embedded dataset and the derived view state
//! - control panel, stat cards, chart canvas and data table
//! - config file watcher (live theme reload on change)

use osshare_chart::{ChartCache, ShareChart};
use osshare_config::{load as load_config, ConfigWatcher, DashboardConfig};
use osshare_core::{event::Message, Dataset, ViewState};
use osshare_theme::Theme;
use osshare_widgets::{ControlPanel, DataTable, StatCard};
use futures::channel::mpsc::Sender;
use iced::{
    widget::{column, container, row, text},
    Background, Border, Element, Length, Size, Subscription, Task,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

const SUBTITLE: &str = "Desktop operating system share of users, 2001–2024";

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the dashboard window, reading settings from `config_path`.
///
/// A missing or broken config file never prevents startup; defaults are used
/// and the problem is logged.
pub fn run(config_path: PathBuf) -> iced::Result {
    let config = load_or_default(&config_path);
    let size = Size::new(config.window.width, config.window.height);

    iced::application(
        move || Dashboard::new(config.clone(), config_path.clone()),
        Dashboard::update,
        Dashboard::view,
    )
    .title(Dashboard::title)
    .subscription(Dashboard::subscription)
    .theme(Dashboard::theme)
    .style(Dashboard::style)
    .window_size(size)
    .run()
}

fn load_or_default(path: &Path) -> DashboardConfig {
    match load_config(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("{e}; using default configuration");
            DashboardConfig::default()
        }
    }
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Dashboard {
    data:        Dataset,
    view:        ViewState,
    config:      DashboardConfig,
    config_path: PathBuf,
    theme:       Theme,
    chart_cache: ChartCache,
    controls:    ControlPanel,
    cards:       Vec<StatCard>,
    table:       DataTable,
}

impl Dashboard {
    fn new(config: DashboardConfig, config_path: PathBuf) -> (Self, Task<Message>) {
        let data  = Dataset::builtin();
        let theme = Theme::from_config(&config.theme);
        let view  = config.view.initial_state();

        let cards = data
            .latest_changes()
            .map(|changes| changes.into_iter().map(StatCard::new).collect())
            .unwrap_or_default();
        let table = DataTable::new(&data);

        info!(
            years = data.len(),
            chart = %view.chart_kind,
            range = %view.time_range,
            "dashboard ready"
        );

        let dashboard = Self {
            data,
            view,
            config,
            config_path,
            theme,
            chart_cache: ChartCache::new(),
            controls: ControlPanel::new(),
            cards,
            table,
        };

        (dashboard, Task::none())
    }

    fn title(&self) -> String {
        self.config.window.title.clone()
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigReloaded => match load_config(&self.config_path) {
                Ok(cfg) => {
                    info!("Config reloaded");
                    self.theme  = Theme::from_config(&cfg.theme);
                    self.config = cfg;
                    self.chart_cache.clear();
                }
                Err(e) => warn!("Config reload failed: {e}"),
            },
            msg => {
                if self.view.apply(&msg) {
                    debug!(?msg, "view changed");
                    self.chart_cache.clear();
                }
            }
        }
        Task::none()
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let t   = &self.theme;
        let gap = t.gap as f32;

        let header = column![
            text(&self.config.window.title)
                .size(t.font_size + 10.0)
                .color(t.accent.to_iced()),
            text(SUBTITLE).size(t.font_size).color(t.muted().to_iced()),
        ]
        .spacing(4);

        let controls = panel(self.controls.view(&self.view, t), t);

        let cards = self
            .cards
            .iter()
            .fold(row![].spacing(gap), |r, card| r.push(card.view(t)));

        let chart = ShareChart::new(
            self.data.window(self.view.time_range),
            self.view,
            t,
            &self.chart_cache,
        );

        let body = row![
            container(panel(chart.view::<Message>(), t)).width(Length::FillPortion(3)),
            container(panel(self.table.view(t), t)).width(Length::FillPortion(2)),
        ]
        .spacing(gap)
        .height(Length::Fill);

        column![header, controls, cards, body]
            .spacing(gap)
            .padding(t.padding)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        Subscription::run_with(self.config_path.clone(), config_stream)
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn theme(&self) -> iced::Theme {
        if self.theme.background.is_light() {
            iced::Theme::Light
        } else {
            iced::Theme::Dark
        }
    }

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color: self.theme.foreground.to_iced(),
        }
    }
}

/// Card-style surface around a section of the dashboard.
fn panel<'a>(content: impl Into<Element<'a, Message>>, theme: &Theme) -> Element<'a, Message> {
    let surface = theme.surface.to_iced();
    let edge    = theme.grid().to_iced();
    let radius  = theme.border_radius;

    container(content)
        .padding(theme.padding)
        .width(Length::Fill)
        .style(move |_: &iced::Theme| container::Style {
            background: Some(Background::Color(surface)),
            border: Border {
                radius: radius.into(),
                width: 1.0,
                color: edge,
            },
            ..Default::default()
        })
        .into()
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches the config file for writes and sends `ConfigReloaded`.
fn config_stream(path: &PathBuf) -> impl iced::futures::Stream<Item = Message> {
    let path = path.clone();
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(&path);

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        // Watcher task exited (logged there); stall rather than respawn it.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
