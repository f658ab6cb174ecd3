//! Slide decks shown by the timed sliders
//!
//! Slides hold translation keys; the page rendering a deck resolves them in
//! the active language.

use std::fmt;

/// Side of the slide the text block sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    /// Background image, if the slide has its own
    pub image: Option<&'static str>,
    pub align: TextAlign,
}

const fn service(
    title: &'static str,
    paragraphs: &'static [&'static str],
    image: &'static str,
    align: TextAlign,
) -> Slide {
    Slide { title, paragraphs, image: Some(image), align }
}

/// Services deck. The order is editorial, not numeric.
pub static SERVICES_SLIDES: [Slide; 7] = [
    service(
        "services.slider.service1.title",
        &["services.slider.service1.description"],
        "assets/home-carousel/aseoria-y-aduanas.png",
        TextAlign::Left,
    ),
    service(
        "services.slider.service3.title",
        &["services.slider.service3.description"],
        "assets/home-carousel/transportedecarga.png",
        TextAlign::Right,
    ),
    service(
        "services.slider.service2.title",
        &["services.slider.service2.description"],
        "assets/home-carousel/aseoria-y-aduanas.png",
        TextAlign::Left,
    ),
    service(
        "services.slider.service6.title",
        &["services.slider.service6.description"],
        "assets/home-carousel/almacenamiento.png",
        TextAlign::Right,
    ),
    service(
        "services.slider.service4.title",
        &["services.slider.service4.description"],
        "assets/home-carousel/transporteterrestre.png",
        TextAlign::Left,
    ),
    service(
        "services.slider.service7.title",
        &["services.slider.service7.description"],
        "assets/home-carousel/compras-internacioles.png",
        TextAlign::Right,
    ),
    service(
        "services.slider.service5.title",
        &["services.slider.service5.description"],
        "assets/home-carousel/trasnporte-carga.png",
        TextAlign::Left,
    ),
];

/// Mission and vision.
pub static ABOUT_SLIDES: [Slide; 2] = [
    Slide {
        title: "aboutUs.mission.title",
        paragraphs: &["aboutUs.mission.paragraph1", "aboutUs.mission.paragraph2"],
        image: None,
        align: TextAlign::Left,
    },
    Slide {
        title: "aboutUs.vision.title",
        paragraphs: &["aboutUs.vision.paragraph1", "aboutUs.vision.paragraph2"],
        image: None,
        align: TextAlign::Right,
    },
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::i18n::{
        Language,
        LocaleCatalog,
    };

    #[googletest::test]
    fn services_alternate_alignment() {
        for (index, slide) in SERVICES_SLIDES.iter().enumerate() {
            let expected = if index % 2 == 0 { TextAlign::Left } else { TextAlign::Right };
            expect_that!(slide.align, eq(expected));
        }
    }

    #[googletest::test]
    fn services_follow_editorial_order() {
        let order: Vec<&str> = SERVICES_SLIDES.iter().map(|slide| slide.title).collect();

        expect_that!(
            order,
            elements_are![
                eq(&"services.slider.service1.title"),
                eq(&"services.slider.service3.title"),
                eq(&"services.slider.service2.title"),
                eq(&"services.slider.service6.title"),
                eq(&"services.slider.service4.title"),
                eq(&"services.slider.service7.title"),
                eq(&"services.slider.service5.title")
            ]
        );
    }

    #[googletest::test]
    fn every_slide_key_is_translated() {
        let catalog = LocaleCatalog::builtin().unwrap();

        for slide in SERVICES_SLIDES.iter().chain(&ABOUT_SLIDES) {
            for key in std::iter::once(&slide.title).chain(slide.paragraphs) {
                expect_that!(catalog.lookup(Language::Es, key), some(anything()));
                expect_that!(catalog.lookup(Language::En, key), some(anything()));
            }
        }
    }
}
