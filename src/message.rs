//! Gallery message types.
//!
//! Every surface event the gallery listens to is turned into a message by the
//! subscription's handler, Elm architecture style, and applied with
//! `GalleryController::update`.

use folio_ui::ElementId;

use crate::gallery::FilterKey;

/// Messages that can be sent to update gallery state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryMessage {
    // Cards
    /// A lightbox trigger inside the gallery container was activated
    TriggerActivated(ElementId),

    // Filter bar
    /// A filter control was selected
    FilterSelected { control: ElementId, key: FilterKey },
    /// The fade-out started by the filter with this generation finished
    TransitionElapsed(u64),

    // Lightbox
    Lightbox(LightboxMessage),
}

/// Lightbox navigation and dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxMessage {
    /// Close via button, backdrop or key
    Close,
    /// Show the previous image, if any
    Previous,
    /// Show the next image, if any
    Next,
}

impl From<LightboxMessage> for GalleryMessage {
    fn from(message: LightboxMessage) -> Self {
        GalleryMessage::Lightbox(message)
    }
}
