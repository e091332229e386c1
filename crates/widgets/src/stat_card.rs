use osshare_core::{event::Message, StatChange};
use osshare_theme::Theme;
use iced::{
    widget::{column, container, text},
    Background, Border, Element, Length,
};

/// Latest share of one series and its change from the previous year.
///
/// The change is green when non-negative and red otherwise (theme colors).
#[derive(Debug)]
pub struct StatCard {
    change: StatChange,
}

impl StatCard {
    pub fn new(change: StatChange) -> Self {
        Self { change }
    }

    pub fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        let c = &self.change;
        let series = theme.series_color(c.os);
        let surface = theme.surface.to_iced();
        let radius = theme.border_radius;

        let body = column![
            text(c.os.label())
                .size(theme.font_size)
                .color(theme.muted().to_iced()),
            text(c.value_label())
                .size(theme.font_size * 2.0)
                .color(series.to_iced()),
            text(c.change_label())
                .size(theme.font_size)
                .color(theme.trend_color(c.trend()).to_iced()),
        ]
        .spacing(4);

        container(body)
            .padding(theme.padding)
            .width(Length::Fill)
            .style(move |_: &iced::Theme| container::Style {
                background: Some(Background::Color(surface)),
                border: Border {
                    radius: radius.into(),
                    width: 3.0,
                    color: series.with_alpha(0.6).to_iced(),
                },
                ..Default::default()
            })
            .into()
    }
}
