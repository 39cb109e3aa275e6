use leptos::prelude::document;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::nav::Scroller;

/// Smooth scrolling through the browser's `scrollIntoView`.
pub struct DomScroller;

impl Scroller for DomScroller {
    fn scroll_to(&self, id: &str) -> bool {
        let Some(el) = document().get_element_by_id(id) else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}
