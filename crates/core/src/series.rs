use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three operating systems tracked by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Windows,
    Linux,
    #[serde(rename = "macos")]
    MacOs,
}

impl Os {
    /// Every series, in display order.
    pub const ALL: [Os; 3] = [Os::Windows, Os::Linux, Os::MacOs];

    /// Position of this series in parallel arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Os::Windows => 0,
            Os::Linux   => 1,
            Os::MacOs   => 2,
        }
    }

    /// Human-readable name shown in the legend, cards and table header.
    pub const fn label(self) -> &'static str {
        match self {
            Os::Windows => "Windows",
            Os::Linux   => "Linux",
            Os::MacOs   => "macOS",
        }
    }

    /// Lowercase identifier; the same string serde uses and the `[view]`
    /// visibility keys are named after.
    pub const fn key(self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Linux   => "linux",
            Os::MacOs   => "macos",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-series visibility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesMask([bool; 3]);

impl SeriesMask {
    pub const fn new(windows: bool, linux: bool, macos: bool) -> Self {
        Self([windows, linux, macos])
    }

    #[inline]
    pub fn is_visible(&self, os: Os) -> bool {
        self.0[os.index()]
    }

    /// Set the flag for `os`; returns `true` if it changed.
    pub fn set(&mut self, os: Os, visible: bool) -> bool {
        let slot = &mut self.0[os.index()];
        let changed = *slot != visible;
        *slot = visible;
        changed
    }

    pub fn toggle(&mut self, os: Os) {
        self.0[os.index()] ^= true;
    }

    /// Visible series in display order.
    pub fn visible(&self) -> impl Iterator<Item = Os> + '_ {
        Os::ALL.into_iter().filter(|os| self.is_visible(*os))
    }

    pub fn none_visible(&self) -> bool {
        !self.0.iter().any(|v| *v)
    }
}

impl Default for SeriesMask {
    fn default() -> Self {
        Self([true; 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_display_order() {
        for (i, os) in Os::ALL.iter().enumerate() {
            assert_eq!(os.index(), i);
        }
    }

    #[test]
    fn key_matches_serialized_name() {
        for os in Os::ALL {
            let json = serde_json::to_string(&os).unwrap();
            assert_eq!(json, format!("\"{}\"", os.key()));
            assert_eq!(serde_json::from_str::<Os>(&json).unwrap(), os);
        }
    }

    #[test]
    fn mask_set_reports_change() {
        let mut mask = SeriesMask::default();
        assert!(!mask.set(Os::Linux, true));
        assert!(mask.set(Os::Linux, false));
        assert!(!mask.is_visible(Os::Linux));
        assert_eq!(mask.visible().collect::<Vec<_>>(), vec![Os::Windows, Os::MacOs]);
    }

    #[test]
    fn mask_toggle_round_trips() {
        let mut mask = SeriesMask::new(false, false, false);
        assert!(mask.none_visible());
        mask.toggle(Os::MacOs);
        assert!(mask.is_visible(Os::MacOs));
        mask.toggle(Os::MacOs);
        assert!(mask.none_visible());
    }
}
