use crate::event::Message;
use crate::range::TimeRange;
use crate::series::SeriesMask;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the chart draws its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Line, ChartKind::Bar];
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChartKind::Line => "Line",
            ChartKind::Bar  => "Bar",
        })
    }
}

/// Presentation state driven by the control panel.
///
/// The dataset itself never changes; everything on screen is recomputed from
/// this state on every interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub visible:    SeriesMask,
    pub chart_kind: ChartKind,
    pub time_range: TimeRange,
}

impl ViewState {
    /// Apply a control message. Returns `true` when the state changed.
    ///
    /// Messages that are not view controls are ignored.
    pub fn apply(&mut self, msg: &Message) -> bool {
        match *msg {
            Message::SeriesToggled(os, visible) => self.visible.set(os, visible),
            Message::ChartKindSelected(kind) => replace(&mut self.chart_kind, kind),
            Message::TimeRangeSelected(range) => replace(&mut self.time_range, range),
            Message::ConfigReloaded => false,
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Os;

    #[test]
    fn default_shows_everything_as_lines() {
        let state = ViewState::default();
        assert_eq!(state.chart_kind, ChartKind::Line);
        assert_eq!(state.time_range, TimeRange::All);
        assert_eq!(state.visible.visible().count(), 3);
    }

    #[test]
    fn apply_reports_changes_only() {
        let mut state = ViewState::default();
        assert!(state.apply(&Message::SeriesToggled(Os::Windows, false)));
        assert!(!state.apply(&Message::SeriesToggled(Os::Windows, false)));
        assert!(state.apply(&Message::ChartKindSelected(ChartKind::Bar)));
        assert!(!state.apply(&Message::ChartKindSelected(ChartKind::Bar)));
        assert!(state.apply(&Message::TimeRangeSelected(TimeRange::Last(10))));
        assert!(!state.apply(&Message::ConfigReloaded));

        assert!(!state.visible.is_visible(Os::Windows));
        assert_eq!(state.chart_kind, ChartKind::Bar);
        assert_eq!(state.time_range, TimeRange::Last(10));
    }
}
