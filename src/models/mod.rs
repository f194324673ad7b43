pub mod category;
pub mod enriched;
pub mod raw;
pub mod season;

pub use category::AirQualityCategory;
pub use enriched::{EnrichedRecord, EnrichedTable};
pub use raw::RawRecord;
pub use season::Season;
