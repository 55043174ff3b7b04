//! Browser console output.

const BANNER_TITLE_STYLE: &str = "color: #2563eb; font-size: 20px; font-weight: bold;";
const BANNER_BODY_STYLE: &str = "color: #64748b; font-size: 14px;";

/// Log a warning message to the browser console.
///
/// Used for non-fatal failures (missing elements, bad config) where the page
/// keeps working without the affected enhancement.
pub fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

pub fn log_debug(msg: &str) {
    web_sys::console::debug_1(&msg.into());
}

/// Styled welcome lines for visitors who open the dev tools.
pub fn print_banner() {
    web_sys::console::log_2(
        &"%c\u{1F44B} Welcome to my portfolio!".into(),
        &BANNER_TITLE_STYLE.into(),
    );
    web_sys::console::log_2(
        &"%cInterested in the code? Check out the repository!".into(),
        &BANNER_BODY_STYLE.into(),
    );
}
