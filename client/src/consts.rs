//! Timings, motion factors and the markup contract shared across features.

// ── Timers ──────────────────────────────────────────────────────

/// Lifetime of a toast before it removes itself.
pub const TOAST_TTL_MS: u32 = 5_000;

/// Delay between starting the modal fade-out and removing its overlay.
pub const MODAL_CLOSE_MS: u32 = 220;

/// Quiet period before the navigation scroll handler runs.
pub const NAV_SCROLL_DEBOUNCE_MS: u32 = 20;

/// Quiet period before the background-blur parallax runs.
pub const BLUR_SCROLL_DEBOUNCE_MS: u32 = 12;

/// Simulated send latency of the contact form.
pub const CONTACT_SENDING_MS: u32 = 1_400;

/// How long the "sent" state lingers before the button is restored.
pub const CONTACT_RESTORE_MS: u32 = 3_000;

// ── Scroll geometry ─────────────────────────────────────────────

/// Pixels subtracted from a section's top so the fixed header does not hide it.
pub const HEADER_ALLOWANCE_PX: f64 = 100.0;

/// Scroll offset past which the navbar switches to its denser backdrop.
pub const NAVBAR_SOLID_THRESHOLD_PX: f64 = 50.0;

// ── Motion ──────────────────────────────────────────────────────

/// Parallax speed of the first `.bg-blur` element.
pub const BLUR_BASE_SPEED: f64 = 0.1;

/// Additional parallax speed per subsequent `.bg-blur` element.
pub const BLUR_SPEED_STEP: f64 = 0.05;

/// Parallax speed of the hero card.
pub const HERO_PARALLAX_SPEED: f64 = 0.1;

/// Animation-delay stagger between consecutive skill tags, in seconds.
pub const SKILL_TAG_STAGGER_S: f64 = 0.1;

/// Fraction of a glass panel that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; the negative bottom delays reveals slightly.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Markup contract ─────────────────────────────────────────────

/// Selectors and ids the controller expects in the page markup.
pub mod selectors {
    pub const NAV_TOGGLE: &str = ".nav-toggle";
    pub const NAV_LINKS: &str = ".nav-links";
    pub const NAV_LINK: &str = ".nav-link";
    pub const SECTIONS: &str = "section[id]";
    pub const NAVBAR_ID: &str = "main-navbar";

    pub const PROJECT_TILE: &str = ".project-tile";
    pub const PROJECT_ATTR: &str = "data-project";

    pub const THEME_TOGGLE: &str = "#theme-toggle";
    pub const THEME_ICON: &str = ".theme-icon";
    pub const THEME_ATTR: &str = "data-theme";

    pub const GLASS_PANEL: &str = ".glass-panel";
    pub const BG_BLUR: &str = ".bg-blur";
    pub const HERO_CARD: &str = ".hero-card";
    pub const SKILL_TAG: &str = ".skill-tag";

    pub const CONTACT_FORM: &str = ".contact-form";
    pub const SUBMIT_BUTTON: &str = ".submit-btn";
    pub const FORM_FIELDS: &str = ".form-group input, .form-group textarea";

    pub const RESUME_BUTTONS: &str = ".resume-btn, .download-btn, .floating-btn";

    pub const TOUCH_TARGETS: &str = ".glass-panel, .social-link, .project-tile, .skill-tag, .cert-badge";

    pub const CONFIG_SCRIPT_ID: &str = "portfolio-config";
}
