use crate::ui::Screen;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;

/// Action that a component can return after handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentAction {
    /// No action needed
    None,
    /// Component state was updated, needs re-render
    Update,
    /// Navigate to a different screen
    Navigate(Screen),
    /// Submit the screen's pending request; the app runs the network call
    /// and feeds the outcome back to the component
    Submit,
    /// Quit the application
    Quit,
}

/// Trait for all screen components
///
/// Components are self-contained UI elements that:
/// - Manage their own state
/// - Handle their own events
/// - Render themselves
/// - Return actions for the app to handle
pub trait Component {
    /// Render the component to the given area
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;

    /// Handle an input event, returning an action for the app
    fn handle_event(&mut self, event: Event) -> Result<ComponentAction>;
}
