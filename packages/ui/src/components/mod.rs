//! Small form and feedback building blocks shared by the views.

mod banner;
mod button;
mod input;

pub use banner::{Banner, BannerKind, FieldError};
pub use button::{Button, ButtonVariant};
pub use input::{Input, Label, Textarea};
