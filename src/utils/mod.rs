pub mod layout;
pub mod path;
pub mod style;
pub mod text_input;

pub use layout::centered_form;
pub use path::get_config_path;
pub use style::{
    error_text_style, focused_border_style, input_placeholder_style, input_text_style,
    success_text_style, unfocused_border_style,
};
pub use text_input::TextInput;
