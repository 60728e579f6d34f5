pub mod bulk;
pub mod collection;
pub mod dispatch;
pub mod import;
pub mod lookup;
pub mod series;
pub mod shared;
pub mod volume;
