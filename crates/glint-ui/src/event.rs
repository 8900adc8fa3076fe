use glint_engine::coords::Vec2;

/// Input events routed through the widget tree.
///
/// This layer carries only what the shipped widgets react to; hosts with a
/// richer input model translate into these before dispatch.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Primary mouse button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// Mouse moved to `pos`.
    Hover { pos: Vec2 },
    /// Host copy/paste interaction targeting the widget under focus.
    ///
    /// Widgets that own text consume this by publishing their copy text
    /// (see `Label::paste_text`).
    Copy,
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled — stop routing to siblings / parents.
    Consumed,
    /// Event was not handled — keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
