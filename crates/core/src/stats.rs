use crate::series::Os;

/// Direction of a year-over-year change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Zero or growth.
    Positive,
    Negative,
}

/// Latest value of one series and its change from the year before.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatChange {
    pub os:       Os,
    pub current:  f64,
    pub previous: f64,
    pub delta:    f64,
}

impl StatChange {
    pub fn new(os: Os, current: f64, previous: f64) -> Self {
        Self {
            os,
            current,
            previous,
            delta: current - previous,
        }
    }

    pub fn trend(&self) -> Trend {
        if self.delta >= 0.0 {
            Trend::Positive
        } else {
            Trend::Negative
        }
    }

    /// e.g. `"72.87%"`.
    pub fn value_label(&self) -> String {
        format!("{:.2}%", self.current)
    }

    /// Signed change, e.g. `"+4.03%"` or `"-5.10%"`.
    pub fn change_label(&self) -> String {
        let sign = match self.trend() {
            Trend::Positive => "+",
            Trend::Negative => "",
        };
        format!("{sign}{:.2}%", self.delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn round2(v: f64) -> f64 {
        (v * 100.0).round() / 100.0
    }

    #[test]
    fn latest_delta_matches_direct_subtraction() {
        let data = Dataset::builtin();
        let changes = data.latest_changes().unwrap();
        for change in changes {
            let s = data.series(change.os);
            let expected = s[s.len() - 1] - s[s.len() - 2];
            assert_eq!(round2(change.delta), round2(expected));
        }
    }

    #[test]
    fn builtin_labels() {
        let [win, lin, mac] = Dataset::builtin().latest_changes().unwrap();

        assert_eq!(win.value_label(), "72.87%");
        assert_eq!(win.change_label(), "+4.03%");
        assert_eq!(win.trend(), Trend::Positive);

        assert_eq!(lin.value_label(), "4.12%");
        assert_eq!(lin.change_label(), "+1.07%");

        assert_eq!(mac.value_label(), "23.01%");
        assert_eq!(mac.change_label(), "-5.10%");
        assert_eq!(mac.trend(), Trend::Negative);
    }

    #[test]
    fn zero_change_counts_as_positive() {
        let flat = StatChange::new(Os::Linux, 1.5, 1.5);
        assert_eq!(flat.trend(), Trend::Positive);
        assert_eq!(flat.change_label(), "+0.00%");
    }
}
