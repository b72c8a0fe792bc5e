//! Mobile navigation menu.
//!
//! Two states, toggled by the hamburger button. While the menu is open the
//! page behind it must not scroll.

/// Viewport width in px above which the mobile menu no longer applies.
pub const MOBILE_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Whether the page behind the menu may scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollLock {
    Unlocked,
    Locked,
}

#[derive(Debug, Default)]
pub struct NavMenu {
    state: MenuState,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Page scroll is suppressed exactly while the menu is open.
    pub fn scroll_lock(&self) -> ScrollLock {
        match self.state {
            MenuState::Open => ScrollLock::Locked,
            MenuState::Closed => ScrollLock::Unlocked,
        }
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Resizing up to desktop width force-closes the menu.
    pub fn handle_resize(&mut self, viewport_width: u32) {
        if viewport_width > MOBILE_BREAKPOINT {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_locks_scroll() {
        let mut menu = NavMenu::new();

        menu.toggle();

        assert_eq!(menu.state(), MenuState::Open);
        assert_eq!(menu.scroll_lock(), ScrollLock::Locked);
    }

    #[test]
    fn second_toggle_restores_scroll() {
        let mut menu = NavMenu::new();

        menu.toggle();
        menu.toggle();

        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(menu.scroll_lock(), ScrollLock::Unlocked);
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = NavMenu::new();

        menu.close();
        menu.close();

        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn resize_to_desktop_closes_menu() {
        let mut menu = NavMenu::new();
        menu.toggle();

        menu.handle_resize(MOBILE_BREAKPOINT + 1);

        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(menu.scroll_lock(), ScrollLock::Unlocked);
    }

    #[test]
    fn resize_within_mobile_keeps_menu_open() {
        let mut menu = NavMenu::new();
        menu.toggle();

        menu.handle_resize(MOBILE_BREAKPOINT);

        assert_eq!(menu.state(), MenuState::Open);
    }
}
