use osshare_core::{event::Message, ChartKind, Os, TimeRange, ViewState};
use osshare_theme::Theme;
use iced::{
    widget::{checkbox, column, pick_list, row, text},
    Alignment, Element,
};

/// Series toggles plus chart-type and time-range selectors.
#[derive(Debug, Default)]
pub struct ControlPanel;

impl ControlPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, view: &ViewState, theme: &'a Theme) -> Element<'a, Message> {
        let toggles = Os::ALL.iter().fold(row![].spacing(theme.gap as f32), |r, &os| {
            r.push(
                checkbox(view.visible.is_visible(os))
                    .label(os.label())
                    .text_size(theme.font_size)
                    .on_toggle(move |on| Message::SeriesToggled(os, on)),
            )
        });

        let chart_type = labeled(
            "Chart type",
            pick_list(ChartKind::ALL, Some(view.chart_kind), Message::ChartKindSelected)
                .text_size(theme.font_size)
                .into(),
            theme,
        );

        let range = labeled(
            "Time range",
            pick_list(
                range_options(view.time_range),
                Some(view.time_range),
                Message::TimeRangeSelected,
            )
            .text_size(theme.font_size)
            .into(),
            theme,
        );

        row![
            labeled("Series", toggles.align_y(Alignment::Center).into(), theme),
            chart_type,
            range,
        ]
        .spacing(theme.gap as f32 * 2.0)
        .align_y(Alignment::End)
        .into()
    }
}

/// Preset ranges, plus `current` when it came from config and isn't a preset.
pub fn range_options(current: TimeRange) -> Vec<TimeRange> {
    let mut options = TimeRange::PRESETS.to_vec();
    if !options.contains(&current) {
        options.push(current);
        options.sort_by_key(|r| match r {
            TimeRange::All => u16::MAX,
            TimeRange::Last(n) => *n,
        });
        // "All years" stays first.
        options.rotate_right(1);
    }
    options
}

fn labeled<'a>(caption: &'a str, control: Element<'a, Message>, theme: &Theme) -> Element<'a, Message> {
    column![
        text(caption).size(theme.font_size - 2.0).color(theme.muted().to_iced()),
        control,
    ]
    .spacing(4)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_offered_as_is() {
        assert_eq!(range_options(TimeRange::Last(10)), TimeRange::PRESETS.to_vec());
    }

    #[test]
    fn custom_range_is_inserted_in_order() {
        assert_eq!(
            range_options(TimeRange::Last(7)),
            vec![
                TimeRange::All,
                TimeRange::Last(5),
                TimeRange::Last(7),
                TimeRange::Last(10),
                TimeRange::Last(15),
            ]
        );
    }
}
