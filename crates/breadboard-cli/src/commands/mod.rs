mod clients;
mod compliance;
mod dashboard;
mod export;
mod init;
mod insights;
mod layout;
mod marketplace;
mod misc;
mod money;
mod widget;
mod work;

pub use clients::handle_clients;
pub use compliance::handle_compliance;
pub use dashboard::handle_dashboard;
pub use export::handle_export;
pub use init::handle_init;
pub use insights::handle_insights;
pub use layout::handle_layout;
pub use marketplace::handle_marketplace;
pub use misc::handle_completions;
pub use money::handle_money;
pub use widget::handle_widget;
pub use work::handle_work;
