//! Shared constants: user-visible strings, CSS hooks, and element selectors.

// ── User-visible text ──────────────────────────────────────────

pub const PLAYER_NOT_FOUND: &str = "Player not found!";
pub const COUNTDOWN_STARTED: &str = "LIVE / STARTED";
pub const CONTACT_RECEIVED: &str = "Thanks! (Demo) Your message was received.";
pub const CONTACT_TOAST: &str = "Message sent successfully! ✔️";

/// Author label on every fan comment; the site has no accounts.
pub const COMMENT_AUTHOR: &str = "Fan";

/// Separator between candidates in the rendered poll result.
pub const POLL_SEPARATOR: &str = " • ";

/// Role value meaning "no role facet".
pub const ROLE_ALL: &str = "all";

// ── CSS classes ────────────────────────────────────────────────

pub const CLASS_ACTIVE_ROLE: &str = "active-role";
pub const CLASS_NEXT_MATCH: &str = "next-match";
pub const CLASS_TOAST: &str = "toast";
pub const CLASS_TOAST_SHOW: &str = "show";
pub const CLASS_FAN_COMMENT: &str = "fan-comment";

// ── Selectors ──────────────────────────────────────────────────

pub const SEL_HAMBURGER: &str = ".hamburger";
pub const SEL_NAV_LINKS: &str = ".nav-links";

pub const SEL_SLIDER_TRACK: &str = ".slider-track";
pub const SEL_SLIDE: &str = ".slide";
pub const SEL_SLIDER_PREV: &str = ".slider-btn.left";
pub const SEL_SLIDER_NEXT: &str = ".slider-btn.right";

pub const SEL_FILTER_BUTTON: &str = ".filter-btn";
pub const SEL_SEARCH_BOX: &str = ".search-box";
pub const SEL_PLAYER_CARD: &str = ".player-card";
pub const SEL_PLAYER_NAME: &str = "h3";
pub const SEL_PLAYER_META: &str = ".player-meta";
pub const SEL_PLAYER_IMAGE: &str = "img";
pub const SEL_PLAYERS_GRID: &str = ".players-grid";
pub const ID_NOT_FOUND: &str = "noPlayerMessage";

pub const SEL_MODAL_BACKDROP: &str = ".modal-bg";
pub const SEL_MODAL_CLOSE: &str = ".close-btn";
pub const SEL_MODAL_NAME: &str = ".modal .m-player-name";
pub const SEL_MODAL_META: &str = ".modal .m-player-meta";
pub const SEL_MODAL_IMAGE: &str = ".modal .player-img";

pub const SEL_SCHEDULE_CARD: &str = ".schedule-card[data-date]";

pub const SEL_STAT_BAR: &str = ".progress > div";
pub const SEL_STATS_SECTION: &str = ".stats-section";

pub const SEL_POLL_BUTTON: &str = ".poll-btn";
pub const ID_POLL_RESULT: &str = "poll-result";

pub const ID_COMMENT_INPUT: &str = "comment-input";
pub const ID_COMMENT_SUBMIT: &str = "comment-submit";
pub const ID_COMMENT_LIST: &str = "comment-list";

pub const ID_COUNTDOWN: &str = "countdown";

pub const ID_LEAD_OPEN: &str = "openPopup";
pub const ID_LEAD_OVERLAY: &str = "popupOverlay";
pub const ID_LEAD_CLOSE: &str = "closePopup";
pub const ID_LEAD_SUBMIT: &str = "submitBtn";
pub const ID_LEAD_NAME: &str = "name";
pub const ID_LEAD_EMAIL: &str = "email";
pub const ID_LEAD_SUCCESS: &str = "successPopup";
pub const ID_LEAD_SUCCESS_CLOSE: &str = "closeSuccessPopup";

pub const ID_CONTACT_SUBMIT: &str = "contact-submit";
pub const ID_CONTACT_NAME: &str = "contact-name";
pub const ID_CONTACT_EMAIL: &str = "contact-email";
pub const ID_CONTACT_MESSAGE: &str = "contact-msg";
pub const ID_CONTACT_SUCCESS: &str = "contactSuccessOverlay";
pub const ID_CONTACT_SUCCESS_CLOSE: &str = "closeContactPopup";

pub const ID_CONFIG: &str = "fanzone-config";

// ── Data attributes ────────────────────────────────────────────

pub const ATTR_ROLE: &str = "data-role";
pub const ATTR_DATE: &str = "data-date";
pub const ATTR_PCT: &str = "data-pct";
pub const ATTR_PLAYER: &str = "data-player";
pub const ATTR_TARGET: &str = "data-target";
