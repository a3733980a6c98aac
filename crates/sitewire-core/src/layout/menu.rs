//! Navigation menus: the mobile collapsible menu with accordion sections
//! and the desktop mega menu.

use crate::page::Page;

/// Collapsed-state class on the mobile menu panel.
const COLLAPSED: &str = "max-h-0";
/// Expanded-state class on the mobile menu panel.
const EXPANDED: &str = "max-h-[75vh]";
/// Class hiding an accordion section panel.
const HIDDEN: &str = "hidden";
/// Class rotating an accordion chevron icon.
const ROTATED: &str = "rotate-180";
/// Class showing a mega menu panel.
const SHOW: &str = "show";

/// One accordion section of the mobile menu.
#[derive(Debug, Clone)]
pub struct MenuSection {
    pub trigger_id: String,
    pub panel_id: String,
    pub icon_id: Option<String>,
}

impl MenuSection {
    pub fn new(trigger_id: impl Into<String>, panel_id: impl Into<String>) -> Self {
        Self {
            trigger_id: trigger_id.into(),
            panel_id: panel_id.into(),
            icon_id: None,
        }
    }

    pub fn with_icon(mut self, icon_id: impl Into<String>) -> Self {
        self.icon_id = Some(icon_id.into());
        self
    }
}

/// The mobile navigation menu: a collapsible panel plus accordion sections
/// where opening one closes the rest.
#[derive(Debug)]
pub struct MobileMenu {
    menu_id: String,
    sections: Vec<MenuSection>,
}

impl MobileMenu {
    /// Bind to the menu panel. Returns `None` when the panel is absent
    /// (another page layout), in which case there is nothing to wire up.
    pub fn bind(page: &Page, menu_id: &str, sections: Vec<MenuSection>) -> Option<Self> {
        page.by_id(menu_id)?;
        Some(Self {
            menu_id: menu_id.to_string(),
            sections,
        })
    }

    /// Toggle the panel between collapsed and expanded.
    pub fn toggle(&self, page: &mut Page) {
        if let Some(menu) = page.by_id_mut(&self.menu_id) {
            menu.toggle_class(COLLAPSED);
            menu.toggle_class(EXPANDED);
        }
    }

    pub fn is_open(&self, page: &Page) -> bool {
        page.by_id(&self.menu_id)
            .is_some_and(|menu| menu.has_class(EXPANDED))
    }

    /// Toggle one accordion section, closing every other section first.
    pub fn toggle_section(&self, page: &mut Page, index: usize) {
        for (i, section) in self.sections.iter().enumerate() {
            if i == index {
                continue;
            }
            if let Some(panel) = page.by_id_mut(&section.panel_id) {
                panel.add_class(HIDDEN);
            }
            if let Some(icon_id) = &section.icon_id
                && let Some(icon) = page.by_id_mut(icon_id)
            {
                icon.remove_class(ROTATED);
            }
        }

        let Some(section) = self.sections.get(index) else {
            return;
        };
        if let Some(panel) = page.by_id_mut(&section.panel_id) {
            panel.toggle_class(HIDDEN);
        }
        if let Some(icon_id) = &section.icon_id
            && let Some(icon) = page.by_id_mut(icon_id)
        {
            icon.toggle_class(ROTATED);
        }
    }
}

/// The desktop mega menu: hovering a trigger shows its panel and hides the
/// others; leaving the hover zone hides everything.
#[derive(Debug)]
pub struct MegaMenu {
    menu_ids: Vec<String>,
}

impl MegaMenu {
    /// Bind to the hover zone and panel ids. Returns `None` when the hover
    /// zone is absent or there are no panels.
    pub fn bind(page: &Page, hover_zone_id: &str, menu_ids: Vec<String>) -> Option<Self> {
        page.by_id(hover_zone_id)?;
        if menu_ids.is_empty() {
            return None;
        }
        Some(Self { menu_ids })
    }

    /// Show the panel at `index`, hiding all others.
    pub fn open(&self, page: &mut Page, index: usize) {
        self.close_all(page);
        if let Some(id) = self.menu_ids.get(index)
            && let Some(menu) = page.by_id_mut(id)
        {
            menu.add_class(SHOW);
        }
    }

    /// Hide every panel (mouse left the hover zone).
    pub fn close_all(&self, page: &mut Page) {
        for id in &self.menu_ids {
            if let Some(menu) = page.by_id_mut(id) {
                menu.remove_class(SHOW);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    fn mobile_page() -> Page {
        let mut page = Page::new();
        let mut menu = Element::with_id("div", "nav-mobile-menu");
        menu.add_class(COLLAPSED);
        for i in 0..2 {
            menu.append_child(Element::with_id("button", format!("trigger-{i}")));
            let mut panel = Element::with_id("div", format!("panel-{i}"));
            panel.add_class(HIDDEN);
            menu.append_child(panel);
            menu.append_child(Element::with_id("i", format!("icon-{i}")));
        }
        page.insert(menu);
        page
    }

    fn sections() -> Vec<MenuSection> {
        (0..2)
            .map(|i| {
                MenuSection::new(format!("trigger-{i}"), format!("panel-{i}"))
                    .with_icon(format!("icon-{i}"))
            })
            .collect()
    }

    #[test]
    fn test_bind_requires_menu_element() {
        let page = Page::new();
        assert!(MobileMenu::bind(&page, "nav-mobile-menu", vec![]).is_none());
    }

    #[test]
    fn test_toggle_swaps_height_classes() {
        let mut page = mobile_page();
        let menu = MobileMenu::bind(&page, "nav-mobile-menu", sections()).unwrap();

        menu.toggle(&mut page);
        assert!(menu.is_open(&page));
        let el = page.by_id("nav-mobile-menu").unwrap();
        assert!(!el.has_class(COLLAPSED));

        menu.toggle(&mut page);
        assert!(!menu.is_open(&page));
        assert!(page.by_id("nav-mobile-menu").unwrap().has_class(COLLAPSED));
    }

    #[test]
    fn test_opening_a_section_closes_the_others() {
        let mut page = mobile_page();
        let menu = MobileMenu::bind(&page, "nav-mobile-menu", sections()).unwrap();

        menu.toggle_section(&mut page, 0);
        assert!(!page.by_id("panel-0").unwrap().has_class(HIDDEN));
        assert!(page.by_id("icon-0").unwrap().has_class(ROTATED));

        menu.toggle_section(&mut page, 1);
        assert!(page.by_id("panel-0").unwrap().has_class(HIDDEN));
        assert!(!page.by_id("icon-0").unwrap().has_class(ROTATED));
        assert!(!page.by_id("panel-1").unwrap().has_class(HIDDEN));
    }

    #[test]
    fn test_toggle_section_twice_closes_it() {
        let mut page = mobile_page();
        let menu = MobileMenu::bind(&page, "nav-mobile-menu", sections()).unwrap();

        menu.toggle_section(&mut page, 0);
        menu.toggle_section(&mut page, 0);
        assert!(page.by_id("panel-0").unwrap().has_class(HIDDEN));
        assert!(!page.by_id("icon-0").unwrap().has_class(ROTATED));
    }

    fn mega_page() -> Page {
        let mut page = Page::new();
        page.insert(Element::with_id("div", "nav-hover-zone"));
        page.insert(Element::with_id("div", "menu-products"));
        page.insert(Element::with_id("div", "menu-services"));
        page
    }

    #[test]
    fn test_mega_menu_open_is_exclusive() {
        let mut page = mega_page();
        let mega = MegaMenu::bind(
            &page,
            "nav-hover-zone",
            vec!["menu-products".to_string(), "menu-services".to_string()],
        )
        .unwrap();

        mega.open(&mut page, 0);
        assert!(page.by_id("menu-products").unwrap().has_class(SHOW));

        mega.open(&mut page, 1);
        assert!(!page.by_id("menu-products").unwrap().has_class(SHOW));
        assert!(page.by_id("menu-services").unwrap().has_class(SHOW));

        mega.close_all(&mut page);
        assert!(!page.by_id("menu-services").unwrap().has_class(SHOW));
    }

    #[test]
    fn test_mega_menu_bind_requires_zone_and_panels() {
        let page = mega_page();
        assert!(MegaMenu::bind(&page, "missing-zone", vec!["menu-products".to_string()]).is_none());
        assert!(MegaMenu::bind(&page, "nav-hover-zone", vec![]).is_none());
    }
}
