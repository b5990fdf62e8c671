//! Inline style composition
//!
//! Cards carry two independent animations on the same properties: the
//! filter fade/scale and the scroll reveal fade/slide. Both are folded into
//! one inline `style` value here.

use crate::config::{PageConfig, RevealOptions};
use crate::reveal::RevealState;
use crate::transition::CardPresentation;

/// Inline style of a card
pub fn card_style(presentation: &CardPresentation, reveal: RevealState, config: &PageConfig) -> String {
    let display = if presentation.shown { "block" } else { "none" };
    let opacity = presentation.opacity * reveal.opacity();
    let translate = reveal.translate_y(config.reveal.offset_px);
    // Until revealed the slide-in owns the transition
    let transition = if reveal.is_revealed() {
        &config.filter_transition.transition
    } else {
        &config.reveal.transition
    };
    format!(
        "display: {}; opacity: {}; transform: translateY({}px) scale({}); transition: {};",
        display, opacity, translate, presentation.scale, transition
    )
}

/// Inline style of a section that only takes part in scroll reveal
pub fn section_style(reveal: RevealState, options: &RevealOptions) -> String {
    format!(
        "opacity: {}; transform: translateY({}px); transition: {};",
        reveal.opacity(),
        reveal.translate_y(options.offset_px),
        options.transition
    )
}
