// Adapters layer: default implementations of the collaborator ports.

pub mod currency;
pub mod distance;
pub mod numerals;

pub use currency::RateCurrencyConverter;
pub use distance::StandardDistanceConverter;
pub use numerals::JapaneseNumerals;
