use super::*;

#[test]
fn menu_toggles_and_navigation_closes() {
    let mut menu = MobileMenu::default();
    assert!(!menu.is_open());
    assert_eq!(menu.toggle(), MenuState::Open);
    menu.navigate("#contact");
    assert_eq!(menu.state(), MenuState::Closed);
    menu.open();
    menu.open();
    assert!(menu.is_open());
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn scrolled_flag_is_strictly_past_threshold() {
    let mut nav = NavigationBar::new().unwrap();
    nav.on_scroll(50.0);
    assert!(!nav.is_scrolled());
    nav.on_scroll(50.5);
    assert!(nav.is_scrolled());
    nav.on_scroll(0.0);
    assert!(!nav.is_scrolled());
}

#[test]
fn backdrop_ramps_over_first_hundred_pixels() {
    let mut nav = NavigationBar::new().unwrap();
    assert_eq!(
        nav.css(),
        "backdrop-filter: blur(0px); background-color: rgba(0, 0, 0, 0)"
    );
    nav.on_scroll(50.0);
    assert_eq!(
        nav.css(),
        "backdrop-filter: blur(5px); background-color: rgba(0, 0, 0, 0.4)"
    );
    nav.on_scroll(2500.0);
    assert_eq!(
        nav.css(),
        "backdrop-filter: blur(10px); background-color: rgba(0, 0, 0, 0.8)"
    );
}

#[test]
fn reset_closes_menu_and_clears_scroll() {
    let mut nav = NavigationBar::new().unwrap();
    nav.on_scroll(300.0);
    nav.menu.toggle();
    nav.reset();
    assert!(!nav.is_scrolled());
    assert!(!nav.menu.is_open());
    assert_eq!(nav.scroll_y(), 0.0);
}
