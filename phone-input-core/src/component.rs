//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A pure UI component that renders based on props and emits actions
///
/// Components follow these rules:
/// 1. Props contain ALL read-only data needed for rendering
/// 2. `handle_event` returns actions, never mutates widget state
/// 3. `render` is a function of props plus internal UI state (cursor, scroll offset)
///
/// Internal UI state can live in `&mut self`, but anything the reducer owns
/// (display text, selected country, popover) changes only through actions.
///
/// # Example
///
/// ```ignore
/// use phone_input_core::{Component, EventKind, Frame, Rect};
///
/// struct Flag;
///
/// struct FlagProps<'a> {
///     country: &'a Country,
/// }
///
/// impl Component<PhoneAction> for Flag {
///     type Props<'a> = FlagProps<'a>;
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         frame.render_widget(Paragraph::new(props.country.flag()), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `vec![...]` - multiple actions
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
