/// Campaign, media and message service interface
pub mod campaign;
/// Contact service interface
pub mod contact;
/// Segment service interface
pub mod segment;
/// Tracking and recommendation service interface
pub mod tracker;
