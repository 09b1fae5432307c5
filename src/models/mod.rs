pub mod geocode;
pub mod place;
