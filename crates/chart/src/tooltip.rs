use osshare_core::{DataWindow, Os, SeriesMask};

/// Hover tooltip content in "index" mode: every visible series at one year.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub entries: Vec<(Os, String)>,
}

impl Tooltip {
    /// `None` when `index` is outside the window or nothing is visible.
    pub fn at(window: &DataWindow<'_>, visible: SeriesMask, index: usize) -> Option<Self> {
        let (year, values) = window.row(index)?;
        let entries: Vec<(Os, String)> = visible
            .visible()
            .map(|os| (os, format!("{}: {:.2}%", os.label(), values[os.index()])))
            .collect();
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            title: year.to_string(),
            entries,
        })
    }

    /// Longest line, in characters.
    pub fn widest(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, s)| s.chars().count())
            .chain(std::iter::once(self.title.chars().count()))
            .max()
            .unwrap_or(0)
    }
}
