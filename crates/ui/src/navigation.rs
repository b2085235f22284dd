use argyle_domain::Page;

/// Router state owned by [`crate::Site`]: the page on screen and the mobile menu.
///
/// Every navigation goes through [`Navigation::go`], so whichever control triggered it
/// (header, hero, "view all", footer) the menu ends up closed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    page: Page,
    menu_open: bool,
}

impl Navigation {
    #[must_use]
    pub const fn at(page: Page) -> Self {
        Self { page, menu_open: false }
    }

    #[must_use]
    pub const fn page(self) -> Page {
        self.page
    }

    #[must_use]
    pub const fn menu_open(self) -> bool {
        self.menu_open
    }

    pub fn go(&mut self, target: Page) {
        self.page = target;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
