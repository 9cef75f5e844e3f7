//! The edit cursor shared by the category and transaction editors.

/// Whether a collection's form creates a new record or updates an existing one.
///
/// While editing, the variant holds a full copy of the record as it was when
/// editing began.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditMode<T> {
    /// The form creates a new record.
    #[default]
    Creating,
    /// The form updates the contained record.
    Editing(T),
}

impl<T> EditMode<T> {
    /// The record being edited, if any.
    pub fn target(&self) -> Option<&T> {
        match self {
            EditMode::Creating => None,
            EditMode::Editing(target) => Some(target),
        }
    }

    /// Returns `true` if a record is being edited.
    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing(_))
    }
}
