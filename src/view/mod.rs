pub mod download;
pub mod list;
pub mod render;
pub mod report;
pub use download::DownloadDir;
pub use list::AssetListView;
pub use render::{DateFormatter, DateLocale, DateZone};
pub use report::{AssetReportView, FetchOutcome, FetchTicket};
