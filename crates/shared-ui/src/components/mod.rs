// Standalone components
pub mod button;
pub mod form_select;

// Primitive wrappers
pub mod dialog;
pub mod toast;

pub use button::*;
pub use dialog::*;
pub use form_select::*;
pub use toast::*;
