//! Site chrome: the fixed navigation bar and its mobile menu.

use crate::{
    foundation::error::ScrollResult,
    sections::home::{self, NAV_SCROLLED_PX},
    timeline::{animator::Animator, style::ElementStyle},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        tracing::debug!(state = ?self.state, "mobile menu toggled");
        self.state
    }

    pub fn open(&mut self) {
        self.state = MenuState::Open;
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Following a menu link closes the menu.
    pub fn navigate(&mut self, _href: &str) {
        self.close();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Navigation bar state derived from the page scroll offset.
#[derive(Clone, Debug)]
pub struct NavigationBar {
    animator: Animator,
    scroll_y: f64,
    scrolled: bool,
    pub menu: MobileMenu,
}

impl NavigationBar {
    pub fn new() -> ScrollResult<Self> {
        Ok(Self {
            animator: home::navigation()?.animator,
            scroll_y: 0.0,
            scrolled: false,
            menu: MobileMenu::default(),
        })
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
        let scrolled = scroll_y > NAV_SCROLLED_PX;
        if scrolled != self.scrolled {
            tracing::debug!(scrolled, scroll_y, "navigation scrolled flag changed");
        }
        self.scrolled = scrolled;
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Background colour and backdrop blur at the current offset.
    pub fn style(&self) -> ElementStyle {
        self.animator
            .sample(self.scroll_y)
            .elements
            .remove("nav")
            .unwrap_or_default()
    }

    pub fn css(&self) -> String {
        self.style().to_css()
    }

    pub fn reset(&mut self) {
        self.scroll_y = 0.0;
        self.scrolled = false;
        self.menu.reset();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/chrome.rs"]
mod tests;
