mod geo_query_engine;
mod location_privacy_filter;
mod review_aggregator;

pub use geo_query_engine::GeoQueryEngine;
pub use location_privacy_filter::LocationPrivacyFilter;
pub use review_aggregator::ReviewAggregator;
