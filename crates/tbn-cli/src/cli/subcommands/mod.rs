mod bulk;
mod collection;
mod lookup;
mod series;
mod volume;

pub use bulk::BulkCommands;
pub use collection::CollectionCommands;
pub use lookup::LookupCommands;
pub use series::SeriesCommands;
pub use volume::{VolumeAddArgs, VolumeCommands};
