//! Screen drivers: bind each reducer to providers, stores, and timers.

pub mod detail;
pub mod home;
pub mod items;
pub mod profile;
pub mod search;

pub use detail::DetailDriver;
pub use home::HomeDriver;
pub use items::ItemsDriver;
pub use profile::ProfileDriver;
pub use search::SearchDriver;
