// File: src/field.rs
// Purpose: Declarative field descriptors handed to the rendering collaborator

/// Input widget kind for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Password,
    Radio,
}

/// Description of one form field at the current instant.
///
/// The rendering collaborator draws widgets from these and feeds keystrokes
/// back through the owning form's `set_field`. Descriptors are a snapshot,
/// not live bindings; forms hand out a fresh set after every change.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub label: &'static str,
    pub value: String,
    /// Whether the widget should render in its error state
    pub invalid: bool,
    /// Per-field message to show under the widget, when the form tracks one
    pub error: Option<String>,
}
