pub mod app;
pub mod components;
pub mod navbar;
pub mod pages;
pub mod toasts;
pub mod windows;

pub use app::BiasVizApp;
pub use toasts::ToastManager;

use crate::gateway::RequestKind;
use crate::state::Event;

/// What a rendered view asks the app to do after the frame
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Feed an event to the state machine
    Dispatch(Event),
    /// Start a service request
    Start(RequestKind),
    /// Copy the share link of a dataset or comparison id
    CopyLink(String),
}

impl From<Event> for UiAction {
    fn from(event: Event) -> Self {
        Self::Dispatch(event)
    }
}
