/// UI building blocks for the shop viewer
///
/// - `toggle.rs` - the two mutually exclusive mode buttons
/// - `fade.rs` - opacity animation for the main image
/// - `modal.rs` - lightbox overlay with the enlarged image
/// - `picture.rs` - fit-to-space image whose click area is the drawn picture

pub mod fade;
pub mod modal;
pub mod picture;
pub mod toggle;
