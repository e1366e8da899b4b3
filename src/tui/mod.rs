pub mod app;
pub mod events;
pub mod theme;
pub mod widgets;

/// Lifecycle of a remote fetch as the views see it. `Failed` keeps the
/// view in a loading-failed state with a manual reload affordance.
pub enum Fetch<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Fetch<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Fetch::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }
}
