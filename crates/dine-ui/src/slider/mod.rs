//! Category scroll widget.
//!
//! A horizontally scrollable strip of category buttons. `CategorySlider`
//! holds the widget state (the active category and the scroll step) and
//! issues view commands through a [`SliderHost`]; on the server it only
//! renders markup, in the browser the `hydrate` feature drives it from DOM
//! events.

#[cfg(feature = "hydrate")]
pub mod dom;

use dine_catalog::{anchor_for, Category, CategoryId};

use crate::html::escape_html;

/// Scroll step used until the first button has been measured.
pub const DEFAULT_SCROLL_STEP: f64 = 200.0;

/// CSS class marking the active category button.
pub const ACTIVE_CLASS: &str = "slider-item--active";

/// View operations the slider needs from its surroundings.
pub trait SliderHost {
    /// Rendered width of the first category button, if it is laid out.
    fn measure_first_button(&self) -> Option<f64>;

    /// Smoothly shift the strip horizontally by `delta_px`.
    fn scroll_strip_by(&mut self, delta_px: f64);

    /// Smoothly scroll the element with `anchor_id` to the top of the
    /// viewport. Returns `false` if no such element exists.
    fn scroll_anchor_into_view(&mut self, anchor_id: &str) -> bool;
}

/// Host for server-side rendering: nothing is laid out and nothing scrolls.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHost;

impl SliderHost for StaticHost {
    fn measure_first_button(&self) -> Option<f64> {
        None
    }

    fn scroll_strip_by(&mut self, _delta_px: f64) {}

    fn scroll_anchor_into_view(&mut self, _anchor_id: &str) -> bool {
        false
    }
}

/// State of the category scroll widget.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlider {
    categories: Vec<Category>,
    active: Option<String>,
    scroll_step: f64,
}

impl Default for CategorySlider {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorySlider {
    /// Empty widget with no active category and the default step.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            active: None,
            scroll_step: DEFAULT_SCROLL_STEP,
        }
    }

    /// Replace the category sequence.
    ///
    /// Keeps the active category while it still exists, otherwise activates
    /// the first category. Then re-measures the scroll step; a missing or
    /// non-positive measurement keeps the previous step.
    pub fn set_categories<H: SliderHost + ?Sized>(&mut self, items: Vec<Category>, host: &mut H) {
        self.categories = items;

        let still_listed = self
            .active
            .as_deref()
            .is_some_and(|name| self.categories.iter().any(|c| c.name == name));
        if !still_listed {
            self.active = self.categories.first().map(|c| c.name.clone());
        }

        if self.categories.is_empty() {
            return;
        }
        if let Some(width) = host.measure_first_button() {
            if width.is_finite() && width > 0.0 {
                self.scroll_step = width;
            }
        }
    }

    /// Shift the strip one step to the left.
    pub fn scroll_left<H: SliderHost + ?Sized>(&self, host: &mut H) {
        if !self.categories.is_empty() {
            host.scroll_strip_by(-self.scroll_step);
        }
    }

    /// Shift the strip one step to the right.
    pub fn scroll_right<H: SliderHost + ?Sized>(&self, host: &mut H) {
        if !self.categories.is_empty() {
            host.scroll_strip_by(self.scroll_step);
        }
    }

    /// Activate a category and bring its section into view.
    ///
    /// Returns `false` for ids not in the current sequence, which leave
    /// the state untouched.
    pub fn select<H: SliderHost + ?Sized>(&mut self, category_id: CategoryId, host: &mut H) -> bool {
        let Some(category) = self.categories.iter().find(|c| c.id == category_id) else {
            return false;
        };
        self.active = Some(category.name.clone());
        host.scroll_anchor_into_view(&anchor_for(category_id));
        true
    }

    /// Name of the active category.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.as_deref() == Some(name)
    }

    /// Current scroll step in pixels.
    pub fn scroll_step(&self) -> f64 {
        self.scroll_step
    }

    /// Render the strip. Empty when there are no categories.
    pub fn render(&self) -> String {
        if self.categories.is_empty() {
            return String::new();
        }

        let buttons: String = self
            .categories
            .iter()
            .map(|category| {
                let active = self.is_active(&category.name);
                format!(
                    r#"<button type="button" class="slider-item{class}" data-category-id="{id}" data-category-name="{name}" aria-pressed="{active}">{name}</button>"#,
                    class = if active { format!(" {}", ACTIVE_CLASS) } else { String::new() },
                    id = category.id,
                    name = escape_html(&category.name),
                    active = active
                )
            })
            .collect();

        format!(
            r#"<div class="category-slider" data-category-slider>
    <div class="slider-inner">
        <button type="button" class="slider-arrow" data-slider-scroll="left" aria-label="Scroll left">&lt;</button>
        <div class="slider-strip" data-slider-strip>{buttons}</div>
        <button type="button" class="slider-arrow" data-slider-scroll="right" aria-label="Scroll right">&gt;</button>
    </div>
</div>"#,
            buttons = buttons
        )
    }
}
