pub mod list;
pub mod parse;
pub mod report;
pub mod structs;
pub use list::AssetListClient;
pub use parse::parse_assets;
pub use report::ReportClient;
pub use structs::{Asset, AssetStatus, AssetType, ExportFormat, FilterCriteria, FilterField, NamedRef};
