use super::panel::PanelId;

/// Identity violations surfaced by id-keyed [`super::LayoutManager`] operations.
///
/// Geometry is never an error: out-of-range positions and sizes are clamped silently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelError {
    DuplicateId(PanelId),
    NotFound(PanelId),
}

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "panel id {id:?} already exists"),
            Self::NotFound(id) => write!(f, "no panel with id {id:?}"),
        }
    }
}

impl std::error::Error for PanelError {}
