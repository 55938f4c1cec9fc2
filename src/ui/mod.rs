pub mod browser;
pub mod output;

pub use browser::open_in_browser;
pub use output::{
    display_command_outcome, display_diagnostic, display_error, display_login_prompt,
    display_open_tab, display_turn, strip_markup,
};
