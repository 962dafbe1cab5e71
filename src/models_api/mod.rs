pub mod envelope;
pub mod fixture;
pub mod standings;
pub mod stats;
pub mod match_result;
pub mod lineup;
pub mod match_details;
pub mod listings;
