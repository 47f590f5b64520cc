use gloo::timers::callback::Timeout;
use loyalty_shared::reveal_delay_ms;
use web_sys::Element;

use crate::services::logging::Logger;

const COMPONENT: &str = "reveal";

/// Stagger the visible class across `items`: item `i` is marked after `i * step_ms`.
/// Timers are never cancelled; they die with the page.
pub fn schedule(items: Vec<Element>, step_ms: u32, visible_class: &str) -> usize {
    let count = items.len();

    for (index, item) in items.into_iter().enumerate() {
        let visible_class = visible_class.to_string();
        Timeout::new(reveal_delay_ms(index, step_ms), move || {
            if let Err(err) = item.class_list().add_1(&visible_class) {
                Logger::warn_with_component(
                    COMPONENT,
                    &format!("Failed to reveal item: {:?}", err),
                );
            }
        })
        .forget();
    }

    Logger::debug_with_component(COMPONENT, &format!("Scheduled {} reveal items", count));
    count
}
