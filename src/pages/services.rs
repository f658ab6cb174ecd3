//! Services page
//!
//! A fixed sequence of solution sections, each fading in the first time it
//! scrolls into view.

use super::{
    PageView,
    Section,
};
use crate::animation::{
    GateEvent,
    VisibilityGate,
};
use crate::i18n::LanguageContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Text(&'static str),
    Item(&'static str),
    /// Heading of a nested list
    Subheading(&'static str),
    SubItem(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSection {
    pub title: &'static str,
    pub blocks: &'static [Block],
}

use Block::{
    Item,
    SubItem,
    Subheading,
    Text,
};

pub static SERVICE_SECTIONS: [ServiceSection; 8] = [
    ServiceSection {
        title: "services.page.advisory.title",
        blocks: &[
            Text("services.page.advisory.description"),
            Item("services.page.advisory.list1"),
            Item("services.page.advisory.list2"),
            Item("services.page.advisory.list3"),
            Text("services.page.advisory.extraInfo"),
        ],
    },
    ServiceSection {
        title: "services.page.international.title",
        blocks: &[
            Text("services.page.international.highlight"),
            Item("services.page.international.list1"),
            Item("services.page.international.list2"),
            Item("services.page.international.list3"),
            Item("services.page.international.list4"),
        ],
    },
    ServiceSection {
        title: "services.page.landTransport.title",
        blocks: &[Text("services.page.landTransport.description")],
    },
    ServiceSection {
        title: "services.page.storage.title",
        blocks: &[Text("services.page.storage.description")],
    },
    ServiceSection {
        title: "services.page.internationals.title",
        blocks: &[
            Text("services.page.internationals.description"),
            Item("services.page.internationals.list1"),
            Item("services.page.internationals.list2"),
            Item("services.page.internationals.list3"),
            Item("services.page.internationals.list4"),
        ],
    },
    ServiceSection {
        title: "services.page.maritime.title",
        blocks: &[
            Text("services.page.maritime.description"),
            Subheading("services.page.maritime.containers.title"),
            SubItem("services.page.maritime.containers.list1"),
            SubItem("services.page.maritime.containers.list2"),
            SubItem("services.page.maritime.containers.list3"),
            SubItem("services.page.maritime.containers.list4"),
            Subheading("services.page.maritime.actingAs.title"),
            SubItem("services.page.maritime.actingAs.list1"),
            SubItem("services.page.maritime.actingAs.list2"),
            SubItem("services.page.maritime.actingAs.list3"),
            SubItem("services.page.maritime.actingAs.list4"),
        ],
    },
    ServiceSection {
        title: "services.page.customs.title",
        blocks: &[Text("services.page.customs.description")],
    },
    ServiceSection { title: "services.page.logisticsChain.title", blocks: &[] },
];

#[derive(Debug)]
pub struct ServicesPage {
    context: LanguageContext,
    gates: Vec<VisibilityGate>,
}

impl ServicesPage {
    #[must_use]
    pub fn new(context: LanguageContext) -> Self {
        Self { context, gates: vec![VisibilityGate::once(); SERVICE_SECTIONS.len()] }
    }

    /// Report whether section `index` is in view.
    pub fn observe(&mut self, index: usize, in_view: bool) -> Option<GateEvent> {
        self.gates.get_mut(index)?.observe(in_view)
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.gates.get(index).is_some_and(VisibilityGate::is_visible)
    }

    /// Reveal every section at once.
    pub fn settle(&mut self) {
        for gate in &mut self.gates {
            gate.observe(true);
        }
    }

    fn block_line(&self, block: Block) -> String {
        match block {
            Text(key) | Subheading(key) => self.context.translate(key),
            Item(key) => format!("- {}", self.context.translate(key)),
            SubItem(key) => format!("  - {}", self.context.translate(key)),
        }
    }

    /// Sections not revealed yet show their heading only.
    #[must_use]
    pub fn view(&self) -> PageView {
        SERVICE_SECTIONS.iter().enumerate().fold(
            PageView::new(self.context.translate("services.page.title")),
            |view, (index, section)| {
                let mut rendered = Section::new(self.context.translate(section.title));
                if self.is_revealed(index) {
                    rendered =
                        rendered.lines(section.blocks.iter().map(|block| self.block_line(*block)));
                }
                view.section(rendered)
            },
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::i18n::{
        Language,
        LocaleCatalog,
    };
    use crate::test_utils::language_context;

    fn keys(section: &ServiceSection) -> Vec<&'static str> {
        let mut keys = vec![section.title];
        keys.extend(section.blocks.iter().map(|block| match *block {
            Text(key) | Item(key) | Subheading(key) | SubItem(key) => key,
        }));
        keys
    }

    #[googletest::test]
    fn every_section_key_is_translated() {
        let catalog = LocaleCatalog::builtin().unwrap();

        for section in &SERVICE_SECTIONS {
            for key in keys(section) {
                for language in Language::ALL {
                    expect_that!(catalog.lookup(language, key), some(anything()));
                }
            }
        }
    }

    #[googletest::test]
    fn sections_reveal_once() {
        let (context, _store) = language_context(Language::Es);
        let mut page = ServicesPage::new(context);

        expect_that!(page.observe(1, true), some(eq(GateEvent::Shown)));
        expect_that!(page.observe(1, false), none());
        expect_that!(page.is_revealed(1), eq(true));
        expect_that!(page.is_revealed(0), eq(false));
        expect_that!(page.observe(42, true), none());
    }

    #[googletest::test]
    fn hidden_sections_render_heading_only() {
        let (context, _store) = language_context(Language::Es);
        let mut page = ServicesPage::new(context);
        page.observe(2, true);

        let view = page.view();

        expect_that!(view.title, eq("Nuestras Soluciones Logísticas"));
        expect_that!(view.sections.len(), eq(8));
        expect_that!(view.sections.first().unwrap().lines, is_empty());
        expect_that!(view.find("Transporte Terrestre:").unwrap().lines.len(), eq(1));
    }

    #[googletest::test]
    fn settled_view_nests_maritime_lists() {
        let (context, _store) = language_context(Language::En);
        let mut page = ServicesPage::new(context);
        page.settle();

        let view = page.view();
        let maritime = view.sections.get(5).unwrap();

        expect_that!(maritime.lines.len(), eq(11));
        expect_that!(maritime.lines.get(2).unwrap(), starts_with("  - "));
    }
}
