use crate::range::TimeRange;
use crate::series::Os;
use crate::state::ChartKind;

/// All messages (events) that can flow through the dashboard.
///
/// Sources:
/// - Control panel        → `SeriesToggled`, `ChartKindSelected`, `TimeRangeSelected`
/// - Config watcher task  → `ConfigReloaded`
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ── User controls ─────────────────────────────────────────────────────────
    /// A series visibility checkbox changed.
    SeriesToggled(Os, bool),
    /// Chart type selector changed.
    ChartKindSelected(ChartKind),
    /// Time range selector changed.
    TimeRangeSelected(TimeRange),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk; triggers a live reload.
    ConfigReloaded,
}
