//! Browser binding for the category slider.
//!
//! Reads the categories back from the server-rendered strip, then routes
//! arrow and category clicks through a shared [`CategorySlider`].

use std::cell::RefCell;
use std::rc::Rc;

use dine_catalog::{Category, CategoryId};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions,
};

use super::{CategorySlider, SliderHost, ACTIVE_CLASS};

const CATEGORY_BUTTONS: &str = "[data-category-id]";

/// [`SliderHost`] backed by the live document.
pub struct DomSliderHost {
    document: Document,
    strip: HtmlElement,
}

impl DomSliderHost {
    pub fn new(document: Document, strip: HtmlElement) -> Self {
        Self { document, strip }
    }

    /// Reflect the slider's active category onto the buttons.
    pub fn sync_active(&self, slider: &CategorySlider) {
        for button in category_buttons(&self.strip) {
            let name = button.get_attribute("data-category-name").unwrap_or_default();
            let active = slider.is_active(&name);
            let _ = button.class_list().toggle_with_force(ACTIVE_CLASS, active);
            let _ = button.set_attribute("aria-pressed", if active { "true" } else { "false" });
        }
    }
}

impl SliderHost for DomSliderHost {
    fn measure_first_button(&self) -> Option<f64> {
        let first = self.strip.query_selector(CATEGORY_BUTTONS).ok()??;
        let first: HtmlElement = first.dyn_into().ok()?;
        Some(f64::from(first.offset_width()))
    }

    fn scroll_strip_by(&mut self, delta_px: f64) {
        let options = ScrollToOptions::new();
        options.set_left(delta_px);
        options.set_behavior(ScrollBehavior::Smooth);
        self.strip.scroll_by_with_scroll_to_options(&options);
    }

    fn scroll_anchor_into_view(&mut self, anchor_id: &str) -> bool {
        let Some(target) = self.document.get_element_by_id(anchor_id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

fn category_buttons(strip: &HtmlElement) -> Vec<Element> {
    let Ok(nodes) = strip.query_selector_all(CATEGORY_BUTTONS) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Categories carried by the rendered buttons, in document order.
fn read_categories(strip: &HtmlElement) -> Vec<Category> {
    category_buttons(strip)
        .iter()
        .filter_map(|button| {
            let id = button.get_attribute("data-category-id")?.parse::<u64>().ok()?;
            let name = button.get_attribute("data-category-name")?;
            Some(Category::new(id, name))
        })
        .collect()
}

fn on_click(target: &Element, handler: impl FnMut(MouseEvent) + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    mount_category_slider()
}

/// Bind the server-rendered slider, if the page has one.
#[wasm_bindgen]
pub fn mount_category_slider() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let Some(root) = document.query_selector("[data-category-slider]")? else {
        return Ok(());
    };
    let strip: HtmlElement = root
        .query_selector("[data-slider-strip]")?
        .ok_or_else(|| JsValue::from_str("slider strip missing"))?
        .dyn_into()?;

    let categories = read_categories(&strip);
    let host = Rc::new(RefCell::new(DomSliderHost::new(document, strip.clone())));
    let slider = Rc::new(RefCell::new(CategorySlider::new()));
    slider.borrow_mut().set_categories(categories, &mut *host.borrow_mut());
    host.borrow().sync_active(&slider.borrow());

    for button in category_buttons(&strip) {
        let Some(id) = button
            .get_attribute("data-category-id")
            .and_then(|v| v.parse::<u64>().ok())
        else {
            continue;
        };
        let (slider, host) = (slider.clone(), host.clone());
        on_click(&button, move |_| {
            let mut host = host.borrow_mut();
            let mut slider = slider.borrow_mut();
            if slider.select(CategoryId::new(id), &mut *host) {
                host.sync_active(&slider);
            }
        })?;
    }

    for direction in ["left", "right"] {
        let selector = format!("[data-slider-scroll=\"{}\"]", direction);
        let Some(arrow) = root.query_selector(&selector)? else {
            continue;
        };
        let (slider, host) = (slider.clone(), host.clone());
        on_click(&arrow, move |_| {
            let mut host = host.borrow_mut();
            let slider = slider.borrow();
            if direction == "left" {
                slider.scroll_left(&mut *host);
            } else {
                slider.scroll_right(&mut *host);
            }
        })?;
    }

    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::slider::StaticHost;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn menu() -> Vec<Category> {
        vec![Category::new(1, "Fish & Chips"), Category::new(2, "Pizza")]
    }

    /// Server-render the slider and its sections into the page body.
    fn render_page(categories: &[Category]) -> HtmlElement {
        let mut slider = CategorySlider::new();
        slider.set_categories(categories.to_vec(), &mut StaticHost);
        let sections: String = categories
            .iter()
            .map(|c| format!(r#"<section id="{}"></section>"#, c.anchor_id()))
            .collect();
        document()
            .body()
            .unwrap()
            .set_inner_html(&format!("{}{}", slider.render(), sections));
        document()
            .query_selector("[data-slider-strip]")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn button(strip: &HtmlElement, id: u64) -> HtmlElement {
        strip
            .query_selector(&format!(r#"[data-category-id="{}"]"#, id))
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn marked_active(button: &HtmlElement) -> bool {
        button.class_list().contains(ACTIVE_CLASS)
            && button.get_attribute("aria-pressed").as_deref() == Some("true")
    }

    #[wasm_bindgen_test]
    fn test_read_categories_unescapes_names() {
        let strip = render_page(&menu());
        let categories = read_categories(&strip);

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, CategoryId::new(1));
        assert_eq!(categories[0].name, "Fish & Chips");
        assert_eq!(categories[1].name, "Pizza");
    }

    #[wasm_bindgen_test]
    fn test_sync_active_follows_selection() {
        let strip = render_page(&menu());
        let mut host = DomSliderHost::new(document(), strip.clone());
        let mut slider = CategorySlider::new();
        slider.set_categories(read_categories(&strip), &mut host);
        assert!(slider.is_active("Fish & Chips"));

        assert!(slider.select(CategoryId::new(2), &mut host));
        host.sync_active(&slider);

        assert!(!marked_active(&button(&strip, 1)));
        assert!(marked_active(&button(&strip, 2)));
    }

    #[wasm_bindgen_test]
    fn test_anchor_lookup() {
        let strip = render_page(&menu());
        let mut host = DomSliderHost::new(document(), strip);
        assert!(host.scroll_anchor_into_view("category-2"));
        assert!(!host.scroll_anchor_into_view("category-9"));
    }

    #[wasm_bindgen_test]
    fn test_mount_wires_category_clicks() {
        let strip = render_page(&menu());
        mount_category_slider().unwrap();
        assert!(marked_active(&button(&strip, 1)));

        button(&strip, 2).click();
        assert!(marked_active(&button(&strip, 2)));
        assert!(!marked_active(&button(&strip, 1)));

        button(&strip, 1).click();
        assert!(marked_active(&button(&strip, 1)));
        assert!(!marked_active(&button(&strip, 2)));
    }

    #[wasm_bindgen_test]
    fn test_mount_without_slider_is_noop() {
        document().body().unwrap().set_inner_html("<main></main>");
        assert!(mount_category_slider().is_ok());
    }
}
