pub mod countdown;
pub mod reminder;
pub mod resolver;

pub use countdown::{Countdown, CountdownState, Ticker};
pub use reminder::ReminderGate;
pub use resolver::NextPrayer;
