//! 可复用 UI 组件

mod input_field;
mod spinner;

pub use input_field::InputField;
pub use spinner::Spinner;
