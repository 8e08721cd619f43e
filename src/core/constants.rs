// Shared tuning constants and the markup contract used by the page wiring.

// Particle field
pub const PARTICLE_COUNT: usize = 1500;
pub const PARTICLE_SPREAD: f32 = 7.0; // each component is (random - 0.5) * SPREAD
pub const PARTICLE_SIZE: f32 = 0.02; // world units, attenuated with depth
pub const PARTICLE_COLOR_HEX: u32 = 0x00bcd4;
pub const PARTICLE_OPACITY: f32 = 0.8;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 2.0;

// Rotation
pub const ROTATION_STEP: f32 = 0.001; // radians per frame on both axes
pub const POINTER_ROTATION_GAIN: f32 = 0.001; // radians per frame per unit of pointer offset
pub const POINTER_OFFSET_DIVISOR: f32 = 100.0; // px from viewport center per unit of offset

// Scroll behavior
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const SCROLL_SPY_LOOKAHEAD_PX: f64 = 100.0;
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0;

// Reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Notifications
pub const NOTICE_DURATION_MS: i32 = 4000;

// Inline placement for a notice element created at runtime: pinned above the
// page and the contact modal so it is visible from either form.
pub const NOTICE_PLACEMENT: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("left", "50%"),
    ("bottom", "2rem"),
    ("transform", "translateX(-50%)"),
    ("z-index", "10000"),
    ("padding", "0.75rem 1.25rem"),
    ("border-radius", "6px"),
    ("color", "#fff"),
    ("display", "none"),
];
pub const SUBMIT_ACK_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Sorry, your message could not be sent. Please try again.";

// Video buttons
pub const PLAY_GLYPH: &str = "▶";
pub const PAUSE_GLYPH: &str = "❚❚";
pub const OVERLAY_IDLE_BG: &str = "rgba(0, 0, 0, 0.5)";
pub const OVERLAY_PLAYING_BG: &str = "rgba(0, 0, 0, 0.2)";

// Selectors
pub const SEL_CANVAS_CONTAINER: &str = "#canvas-container";
pub const SEL_HAMBURGER: &str = ".hamburger";
pub const SEL_NAV_LIST: &str = ".nav-links";
pub const SEL_NAV_LINKS: &str = ".nav-links a";
pub const SEL_HEADER: &str = "header";
pub const SEL_SECTIONS: &str = "section";
pub const SEL_TAB_BUTTONS: &str = ".tab-btn";
pub const SEL_TAB_PANELS: &str = ".project-container";
pub const SEL_VIDEOS: &str = ".project-video";
pub const SEL_PLAY_BUTTONS: &str = ".play-btn";
pub const SEL_CONTACT_BUTTON: &str = ".contact-btn";
pub const SEL_CLOSE_MODAL: &str = ".close-modal";
pub const SEL_INTRO_PARAGRAPHS: &str = ".intro p";
pub const SEL_REVEAL_TARGETS: &str = ".project-card, .section-header, .form-group, .info-item";
pub const SEL_ANCHORS: &str = "a[href^=\"#\"]";

// Element ids
pub const ID_CONTACT_MODAL: &str = "contact-modal";
pub const ID_CONTACT_FORM: &str = "contact-form";
pub const ID_MODAL_FORM: &str = "modal-contact-form";
pub const ID_NOTICE: &str = "form-notice";

// Attributes and properties
pub const ATTR_TAB_TARGET: &str = "data-target";
pub const ATTR_VIDEO_ID: &str = "data-video";
pub const CSS_STAGGER_VAR: &str = "--i";

// Class markers
pub const CLASS_OPEN: &str = "open";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_SCROLL_ANIMATION: &str = "scroll-animation";
pub const CLASS_IN_VIEW: &str = "in-view";
pub const CLASS_NOTICE_VISIBLE: &str = "visible";
