use crate::core::actions::scan_frame::ScanFrameError;
use crate::core::data::view::ViewError;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ControllerError<E> {
    /// The command failed validation; the view was left unchanged and nothing was drawn.
    Rejected(ViewError),
    Scan(ScanFrameError<E>),
}

impl<E: fmt::Display> fmt::Display for ControllerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(err) => write!(f, "command rejected: {}", err),
            Self::Scan(err) => write!(f, "{}", err),
        }
    }
}

impl<E: Error + 'static> Error for ControllerError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(err) => Some(err),
            Self::Scan(err) => Some(err),
        }
    }
}

impl<E> From<ViewError> for ControllerError<E> {
    fn from(err: ViewError) -> Self {
        Self::Rejected(err)
    }
}

impl<E> From<ScanFrameError<E>> for ControllerError<E> {
    fn from(err: ScanFrameError<E>) -> Self {
        Self::Scan(err)
    }
}
