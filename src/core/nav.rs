//! Navigation bar state
//!
//! Two independent flags: whether the page has scrolled past
//! [`SCROLL_THRESHOLD_PX`] and whether the mobile menu is open.

/// Scroll offset (in CSS pixels) above which the bar turns opaque
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Returns true when the offset is strictly past the threshold
pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Visual state of the bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAppearance {
    /// Over the hero image
    Transparent,
    /// White with blur and shadow
    Opaque,
}

impl NavAppearance {
    pub fn bar_class(&self) -> &'static str {
        match self {
            NavAppearance::Transparent => {
                "fixed w-full z-50 transition-all duration-300 bg-transparent py-4"
            }
            NavAppearance::Opaque => {
                "fixed w-full z-50 transition-all duration-300 bg-white/95 backdrop-blur-md shadow-sm py-2"
            }
        }
    }

    pub fn brand_class(&self) -> &'static str {
        match self {
            NavAppearance::Transparent => {
                "font-bold text-lg md:text-xl tracking-tight leading-tight text-white"
            }
            NavAppearance::Opaque => {
                "font-bold text-lg md:text-xl tracking-tight leading-tight text-blue-900"
            }
        }
    }

    pub fn link_class(&self) -> &'static str {
        match self {
            NavAppearance::Transparent => {
                "text-sm font-medium transition-colors hover:text-blue-500 text-white/90"
            }
            NavAppearance::Opaque => {
                "text-sm font-medium transition-colors hover:text-blue-500 text-slate-600"
            }
        }
    }

    pub fn toggle_class(&self) -> &'static str {
        match self {
            NavAppearance::Transparent => "text-white",
            NavAppearance::Opaque => "text-slate-900",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavBarState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavBarState {
    /// Record a new scroll offset
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = is_past_threshold(offset);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Called when a link or the call-to-action in the mobile panel is selected
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn appearance(&self) -> NavAppearance {
        if self.scrolled {
            NavAppearance::Opaque
        } else {
            NavAppearance::Transparent
        }
    }
}
