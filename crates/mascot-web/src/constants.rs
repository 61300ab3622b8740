// DOM hooks and frame pacing for the web frontend

// Page elements
pub const FOOTER_SELECTOR: &str = "footer";
pub const VARIANT_TOGGLE_ID: &str = "mascot-toggle"; // dock button switching drone/robot
pub const MINIMAL_FX_TOGGLE_ID: &str = "minimal-fx-toggle";

// Root element attributes
pub const MINIMAL_FX_ATTR: &str = "data-minimal-fx"; // "true" when reduced motion is requested
pub const VARIANT_ATTR: &str = "data-mascot"; // mirrors the active variant for styling

// Same breakpoint the page layout uses to hide the 3D canvas
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 767px)";

// Clamp for frame delta after a hidden tab resumes
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
