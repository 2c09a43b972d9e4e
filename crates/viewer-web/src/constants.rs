// DOM contract: ids the host page must provide. Markup and styling stay with
// the page; the viewer only reads/writes display, size and the visible class.

use viewer_core::ScreenRole;

pub const MODEL_URL: &str = "assets/portfolio.glb";

pub const WEBGL_CONTAINER_ID: &str = "webgl-container";
pub const CSS3D_CONTAINER_ID: &str = "css3d-container";

pub const EXIT_BUTTON_ID: &str = "btn-exit";
pub const RESET_BUTTON_ID: &str = "btn-reset";
pub const THEME_BUTTON_ID: &str = "btn-theme";

pub const VISIBLE_CLASS: &str = "visible";

/// Display value that restores a blocker after an exit (blockers are flex
/// containers in the host markup).
pub const BLOCKER_VISIBLE_DISPLAY: &str = "flex";

pub fn wrapper_id(role: ScreenRole) -> &'static str {
    match role {
        ScreenRole::Monitor => "monitor-wrapper",
        ScreenRole::Tablet => "ipad-wrapper",
    }
}

pub fn blocker_id(role: ScreenRole) -> &'static str {
    match role {
        ScreenRole::Monitor => "monitor-blocker",
        ScreenRole::Tablet => "ipad-blocker",
    }
}

/// Optional section-navigation entries; absent elements are simply skipped.
pub fn nav_id(role: ScreenRole) -> &'static str {
    match role {
        ScreenRole::Monitor => "nav-monitor",
        ScreenRole::Tablet => "nav-tablet",
    }
}
