pub mod dataset;
pub mod error;
pub mod event;
pub mod range;
pub mod report;
pub mod series;
pub mod state;
pub mod stats;

pub use dataset::{DataWindow, Dataset};
pub use error::{Result, ShareError};
pub use event::Message;
pub use range::TimeRange;
pub use series::{Os, SeriesMask};
pub use state::{ChartKind, ViewState};
pub use stats::{StatChange, Trend};
