pub mod client;
pub mod events;

pub use client::{AuthClient, DEMO_EMAIL, DEMO_NAME, DEMO_PASSWORD};
pub use events::{AuthChange, AuthEvents, AuthSubscription};
