//! Slide rotation: timed decks and continuously scrolling logo strips.

/// Timer-driven rotation of a slide cursor
mod auto_advance;
/// Wrap-around index into a slide sequence
mod cursor;
/// Slide decks shown by the timed sliders
pub mod decks;
/// Continuously looping logo strips
pub mod marquee;

pub use auto_advance::AutoSlider;
pub use cursor::SlideCursor;
pub use decks::{
    ABOUT_SLIDES,
    SERVICES_SLIDES,
    Slide,
    TextAlign,
};
pub use marquee::{
    ItemView,
    LogoItem,
    Marquee,
    MarqueeSpeed,
    brands_marquee,
    chambers_marquee,
};
