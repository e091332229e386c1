pub mod controls;
pub mod stat_card;
pub mod table;

pub use controls::ControlPanel;
pub use stat_card::StatCard;
pub use table::DataTable;
