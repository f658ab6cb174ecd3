//! Plain-text page model
//!
//! Pages render into titled sections of lines. The text form is what the
//! command line prints and what the integration tests compare against.

use std::fmt;

use crate::i18n::LanguageContext;
use crate::slider::{
    AutoSlider,
    ItemView,
    Marquee,
    Slide,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Section {
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        Self { heading: heading.into(), lines: Vec::new() }
    }

    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub title: String,
    pub sections: Vec<Section>,
}

impl PageView {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), sections: Vec::new() }
    }

    #[must_use]
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// First section whose heading is `heading`.
    #[must_use]
    pub fn find(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.heading == heading)
    }
}

/// Active slide of `slider` over `deck`, with its position.
pub(super) fn slide_section(context: &LanguageContext, slider: &AutoSlider, deck: &[Slide]) -> Section {
    let index = slider.active();
    let Some(slide) = deck.get(index) else {
        return Section::new(String::new());
    };
    Section::new(context.translate(slide.title))
        .lines(slide.paragraphs.iter().map(|key| context.translate(key)))
        .line(format!("({}/{}, {})", index + 1, deck.len(), slide.align))
}

/// One copy of a marquee's strip. Failed images show their name in brackets.
pub(super) fn marquee_section(heading: String, marquee: &Marquee) -> Section {
    let lines = (0..marquee.items().len()).filter_map(|slot| marquee.view(slot)).map(|view| {
        match view {
            ItemView::Image { alt, .. } => alt.to_string(),
            ItemView::Placeholder { name, .. } => format!("[{name}]"),
        }
    });
    Section::new(heading).lines(lines)
}

fn underline(f: &mut fmt::Formatter<'_>, text: &str, mark: char) -> fmt::Result {
    writeln!(f, "{text}")?;
    writeln!(f, "{}", mark.to_string().repeat(text.chars().count()))
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        underline(f, &self.title, '=')?;
        for section in &self.sections {
            writeln!(f)?;
            underline(f, &section.heading, '-')?;
            for line in &section.lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}
