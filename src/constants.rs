/// Element ids, selectors and CSS snippets the page markup relies on.
///
/// Keeping them here means a markup rename touches one file.
// Theme
pub const THEME_KEY: &str = "fd_theme";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_TRANSITION_CLASS: &str = "theme-transition";
pub const THEME_TRANSITION_CSS: &str = "
      .theme-transition, .theme-transition * {
        transition: background-color 280ms cubic-bezier(.2,.8,.2,1),
                    color 280ms cubic-bezier(.2,.8,.2,1),
                    border-color 280ms cubic-bezier(.2,.8,.2,1),
                    box-shadow 280ms cubic-bezier(.2,.8,.2,1) !important;
      }
    ";

// Navigation
pub const NAV_SELECTOR: &str = ".nav";
pub const NAV_SCROLLED_CLASS: &str = "is-scrolled";
pub const BURGER_ID: &str = "burger";
pub const MOBILE_MENU_ID: &str = "mobileMenu";
pub const MOBILE_MENU_LINKS: &str = ".mobile-menu__inner a[href^=\"#\"]";
pub const SCROLL_PROGRESS_ID: &str = "scrollProgressBar";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -8% 0px";

// Hero canvas
pub const HERO_ID: &str = "hero";
pub const HERO_CANVAS_ID: &str = "heroCanvas";

// Media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const HOVER_QUERY: &str = "(hover: hover)";

// Pointer effects
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_ATTR: &str = "data-parallax";
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const MAGNET_GLOW_SELECTOR: &str = ".btn__glow";
pub const MAGNET_RELEASE_TRANSITION: &str = "transform 280ms cubic-bezier(.2,.8,.2,1)";
pub const SPOTLIGHT_SELECTOR: &str = ".card[data-spotlight]";

// Project dialog
pub const MODAL_ID: &str = "projectModal";
pub const MODAL_KICKER_ID: &str = "modalKicker";
pub const MODAL_TITLE_ID: &str = "modalTitle";
pub const MODAL_META_ID: &str = "modalMeta";
pub const MODAL_DESC_ID: &str = "modalDesc";
pub const MODAL_BULLETS_ID: &str = "modalBullets";
pub const MODAL_OPEN_SELECTOR: &str = "[data-modal-open]";
pub const MODAL_CLOSE_SELECTOR: &str = "[data-modal-close]";
pub const MODAL_PROJECT_ATTR: &str = "data-project";

// Contact form
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const CONTACT_FORM_FLAG: &str = "data-formspree";
pub const FORM_SUCCESS_ID: &str = "formSuccess";
pub const FORM_ERROR_ID: &str = "formError";

// Footer
pub const YEAR_ID: &str = "year";
