//! Tests for the lightbox driven through surface events.

use folio_ui::{Event, Key, Selector};

use super::*;

fn overlay(controller: &TestController) -> ElementId {
    controller.lightbox().elements().unwrap().overlay
}

/// Open on trigger `index` by clicking it.
fn open_at(controller: &mut TestController, index: usize) -> ElementId {
    let trigger = triggers(controller)[index];
    controller.dispatch(Event::Click(trigger));
    trigger
}

fn shown_image(controller: &TestController) -> Option<String> {
    let image = controller.lightbox().elements().unwrap().image;
    controller.surface().attribute(image, "src")
}

fn assert_closed_and_restored(controller: &TestController, opener: ElementId) {
    let surface = controller.surface();
    assert!(!controller.lightbox().state().is_open());
    assert!(!surface.has_class(overlay(controller), classes::ACTIVE));
    assert!(!surface.is_scroll_locked());
    assert_eq!(surface.focused(), Some(opener));
    assert_eq!(controller.lightbox().state().last_focused(), None);
}

#[test]
fn test_overlay_created_on_first_render() {
    let controller = loaded_controller(&sample_projects());
    let elements = controller.lightbox().elements().unwrap();
    let surface = controller.surface();

    assert!(surface.is_attached(elements.overlay));
    assert!(surface.has_class(elements.overlay, classes::LIGHTBOX_OVERLAY));
    assert_eq!(surface.attribute(elements.overlay, "role").as_deref(), Some("dialog"));
    assert_eq!(surface.attribute(elements.overlay, "aria-modal").as_deref(), Some("true"));
    assert!(!surface.has_class(elements.overlay, classes::ACTIVE));
    assert!(!controller.lightbox().state().is_open());
}

#[test]
fn test_open_from_trigger() {
    let mut controller = loaded_controller(&sample_projects());
    open_at(&mut controller, 1);

    let state = controller.lightbox().state();
    assert!(state.is_open());
    assert_eq!(state.current_index(), 1);
    assert_eq!(state.image_urls(), ["img/loja.jpg", "img/blog.jpg", "img/logo.jpg"]);
    assert_eq!(shown_image(&controller).as_deref(), Some("img/blog.jpg"));

    let close = controller.lightbox().elements().unwrap().close;
    let surface = controller.surface();
    assert!(surface.has_class(overlay(&controller), classes::ACTIVE));
    assert!(surface.is_scroll_locked());
    assert_eq!(surface.focused(), Some(close));
}

#[test]
fn test_click_inside_trigger_opens() {
    let mut controller = loaded_controller(&sample_projects());
    let trigger = triggers(&mut controller)[2];
    let icon = controller.surface().children(trigger)[0];

    controller.dispatch(Event::Click(icon));

    let state = controller.lightbox().state();
    assert!(state.is_open());
    assert_eq!(state.current_index(), 2);
    assert_eq!(state.last_focused(), Some(trigger));
}

#[test]
fn test_navigation_scenario() {
    let mut controller = loaded_controller(&numbered_projects(5));
    let elements = *controller.lightbox().elements().unwrap();
    open_at(&mut controller, 2);

    controller.dispatch(Event::Click(elements.next));
    controller.dispatch(Event::Click(elements.next));
    assert_eq!(controller.lightbox().state().current_index(), 4);
    assert_eq!(shown_image(&controller).as_deref(), Some("img/4.jpg"));
    assert!(!controller.surface().is_visible(elements.next));
    assert!(controller.surface().is_visible(elements.previous));

    for _ in 0..4 {
        controller.dispatch(Event::Click(elements.previous));
    }
    assert_eq!(controller.lightbox().state().current_index(), 0);
    assert_eq!(shown_image(&controller).as_deref(), Some("img/0.jpg"));
    assert!(!controller.surface().is_visible(elements.previous));
    assert!(controller.surface().is_visible(elements.next));
}

#[test]
fn test_navigation_does_not_move_past_bounds() {
    let mut controller = loaded_controller(&numbered_projects(3));
    open_at(&mut controller, 2);

    controller.dispatch(Event::KeyDown(Key::Right));
    assert_eq!(controller.lightbox().state().current_index(), 2);

    controller.dispatch(Event::KeyDown(Key::Left));
    assert_eq!(controller.lightbox().state().current_index(), 1);
    assert_eq!(shown_image(&controller).as_deref(), Some("img/1.jpg"));
}

#[test]
fn test_close_button_restores_focus() {
    let mut controller = loaded_controller(&sample_projects());
    let opener = open_at(&mut controller, 0);
    let close = controller.lightbox().elements().unwrap().close;

    controller.dispatch(Event::Click(close));

    assert_closed_and_restored(&controller, opener);
}

#[test]
fn test_backdrop_click_closes() {
    let mut controller = loaded_controller(&sample_projects());
    let opener = open_at(&mut controller, 1);

    let backdrop = overlay(&controller);
    controller.dispatch(Event::Click(backdrop));

    assert_closed_and_restored(&controller, opener);
}

#[test]
fn test_click_inside_content_keeps_open() {
    let mut controller = loaded_controller(&sample_projects());
    open_at(&mut controller, 1);
    let image = controller.lightbox().elements().unwrap().image;

    controller.dispatch(Event::Click(image));

    assert!(controller.lightbox().state().is_open());
    assert!(controller.surface().is_scroll_locked());
}

#[test]
fn test_escape_closes() {
    let mut controller = loaded_controller(&sample_projects());
    let opener = open_at(&mut controller, 2);

    controller.dispatch(Event::KeyDown(Key::Escape));

    assert_closed_and_restored(&controller, opener);
}

#[test]
fn test_keys_ignored_while_closed() {
    let mut controller = loaded_controller(&numbered_projects(3));
    let unrelated = controller.surface().root();
    controller.surface_mut().focus(unrelated);

    controller.dispatch(Event::KeyDown(Key::Escape));
    controller.dispatch(Event::KeyDown(Key::Right));

    assert!(!controller.lightbox().state().is_open());
    assert_eq!(controller.lightbox().state().current_index(), 0);
    assert_eq!(controller.surface().focused(), Some(unrelated));
    assert!(!controller.surface().is_scroll_locked());
}

#[test]
fn test_unbound_key_does_nothing() {
    let mut controller = loaded_controller(&numbered_projects(3));
    open_at(&mut controller, 1);

    let applied = controller.dispatch(Event::KeyDown(Key::Char('x')));

    assert_eq!(applied, 0);
    assert_eq!(controller.lightbox().state().current_index(), 1);
}

#[test]
fn test_reopen_after_filter_uses_rendered_images() {
    let mut controller = loaded_controller(&sample_projects());
    select_filter(&mut controller, "web");

    let opener = open_at(&mut controller, 1);
    let state = controller.lightbox().state();
    assert_eq!(state.image_urls(), ["img/loja.jpg", "img/blog.jpg"]);
    assert_eq!(state.current_index(), 1);

    controller.dispatch(Event::KeyDown(Key::Escape));
    assert_closed_and_restored(&controller, opener);
}

#[test]
fn test_bindings_attached_once_across_renders() {
    let mut controller = loaded_controller(&sample_projects());
    let listeners = controller.surface().listener_count();
    let elements = *controller.lightbox().elements().unwrap();

    select_filter(&mut controller, "design");
    select_filter(&mut controller, "all");

    assert_eq!(controller.surface().listener_count(), listeners);
    assert_eq!(controller.lightbox().elements(), Some(&elements));
    let overlays = controller
        .surface_mut()
        .find_all(&Selector::class(classes::LIGHTBOX_OVERLAY));
    assert_eq!(overlays, vec![elements.overlay]);

    // One click still yields exactly one open
    open_at(&mut controller, 0);
    let applied = controller.dispatch(Event::KeyDown(Key::Right));
    assert_eq!(applied, 1);
    assert_eq!(controller.lightbox().state().current_index(), 1);
}
