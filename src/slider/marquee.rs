//! Continuously looping logo strips
//!
//! The rendered track is the source list repeated three times. The strip
//! translates linearly from 0 to `-100 × N` percent of an item width over
//! one cycle and jumps back to 0, which lines up with the second copy and
//! so never shows a seam.

use std::time::Duration;

/// Number of copies of the source list on the track.
pub const TRACK_COPIES: usize = 3;

/// Scale applied to the hovered item.
pub const HOVER_SCALE: f64 = 1.1;

/// Entry of a logo strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoItem {
    pub name: String,
    pub image: String,
}

impl LogoItem {
    #[must_use]
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self { name: name.into(), image: image.into() }
    }
}

/// How long one full cycle of the strip takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeSpeed {
    /// Fixed time per source item, so longer lists scroll at the same pace
    PerItem(Duration),
    /// Fixed time for the whole cycle
    Total(Duration),
}

/// What to draw for one track slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemView<'a> {
    Image { src: &'a str, alt: &'a str, scale: f64 },
    /// The image failed to load; the name stands in for it
    Placeholder { name: &'a str, scale: f64 },
}

#[derive(Debug, Clone)]
pub struct Marquee {
    items: Vec<LogoItem>,
    speed: MarqueeSpeed,
    hovered: Option<usize>,
    /// One flag per track slot
    failed: Vec<bool>,
}

impl Marquee {
    #[must_use]
    pub fn new(items: Vec<LogoItem>, speed: MarqueeSpeed) -> Self {
        let failed = vec![false; items.len() * TRACK_COPIES];
        Self { items, speed, hovered: None, failed }
    }

    #[must_use]
    pub fn items(&self) -> &[LogoItem] {
        &self.items
    }

    #[must_use]
    pub fn track_len(&self) -> usize {
        self.items.len() * TRACK_COPIES
    }

    /// Items in track order.
    pub fn track(&self) -> impl Iterator<Item = &LogoItem> {
        std::iter::repeat_n(&self.items, TRACK_COPIES).flatten()
    }

    /// Offset at the end of a cycle, in percent of one item width.
    #[must_use]
    pub fn end_offset_percent(&self) -> i64 {
        i64::try_from(self.items.len()).map_or(i64::MIN, |len| len.saturating_mul(-100))
    }

    #[must_use]
    pub fn cycle_duration(&self) -> Duration {
        match self.speed {
            MarqueeSpeed::PerItem(per_item) => {
                per_item.saturating_mul(u32::try_from(self.items.len()).unwrap_or(u32::MAX))
            }
            MarqueeSpeed::Total(total) => total,
        }
    }

    /// Offset of the strip `elapsed` after the animation started.
    ///
    /// The animation loops forever with no pause between cycles.
    #[must_use]
    #[allow(clippy::float_arithmetic, clippy::cast_precision_loss)]
    pub fn offset_at(&self, elapsed: Duration) -> f64 {
        let cycle = self.cycle_duration().as_nanos();
        if cycle == 0 {
            return 0.0;
        }
        let progress = (elapsed.as_nanos() % cycle) as f64 / cycle as f64;
        self.end_offset_percent() as f64 * progress
    }

    /// Pointer entered (`Some`) or left (`None`) a track slot.
    pub fn hover(&mut self, slot: Option<usize>) {
        self.hovered = slot.filter(|slot| *slot < self.track_len());
    }

    #[must_use]
    pub fn scale(&self, slot: usize) -> f64 {
        if self.hovered == Some(slot) { HOVER_SCALE } else { 1.0 }
    }

    /// Record that the image of a track slot failed to load.
    ///
    /// Returns `false` for an out-of-range slot.
    pub fn mark_image_failed(&mut self, slot: usize) -> bool {
        let Some(flag) = self.failed.get_mut(slot) else {
            return false;
        };
        if !*flag {
            tracing::debug!(slot, "Logo image failed to load, showing placeholder");
        }
        *flag = true;
        true
    }

    #[must_use]
    pub fn view(&self, slot: usize) -> Option<ItemView<'_>> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let item = self.items.get(slot % len)?;
        let failed = *self.failed.get(slot)?;
        let scale = self.scale(slot);
        Some(if failed {
            ItemView::Placeholder { name: &item.name, scale }
        } else {
            ItemView::Image { src: &item.image, alt: &item.name, scale }
        })
    }

    /// Views of every track slot in order.
    #[must_use]
    pub fn views(&self) -> Vec<ItemView<'_>> {
        (0..self.track_len()).filter_map(|slot| self.view(slot)).collect()
    }
}

const CHAMBER_NAMES: [&str; 19] = [
    "VenAmCham",
    "Consecomercio",
    "Conindustria",
    "Cámara de Comercio de Valencia",
    "Cavecol",
    "Cámara de Comercio de Puerto Cabello",
    "ALV",
    "AEX",
    "ASADAEZ",
    "Cámara de Comercio de Maracaibo",
    "ANV",
    "CCI Valencia",
    "Fondonorma",
    "Cámara Venezolano Francesa",
    "ASOCAV",
    "Colegio de Ingenieros",
    "Cámara de Comercio Colombo Venezolana",
    "Cámara de Comercio e Industria Venezolano Italiana",
    "FEDECAMARAS",
];

const BRAND_NAMES: [&str; 7] =
    ["MAERSK", "Hapag-Lloyd", "SeaLand", "CEVA Logistics", "CMA CGM", "MSC", "ZIM"];

/// Chambers of commerce and trade associations the company belongs to.
#[must_use]
pub fn chamber_logos() -> Vec<LogoItem> {
    CHAMBER_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let image = if *name == "FEDECAMARAS" {
                "assets/package-nosotros/FEDECAMARAS.png".to_string()
            } else {
                format!("assets/package-nosotros/Logo camara de comercio {}.png", index + 1)
            };
            LogoItem::new(*name, image)
        })
        .collect()
}

/// Shipping lines the company works with.
#[must_use]
pub fn brand_logos() -> Vec<LogoItem> {
    BRAND_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| LogoItem::new(*name, format!("assets/slider-nostros/{}.png", index + 1)))
        .collect()
}

/// Chamber strip: one second per logo.
#[must_use]
pub fn chambers_marquee() -> Marquee {
    Marquee::new(chamber_logos(), MarqueeSpeed::PerItem(Duration::from_secs(1)))
}

/// Shipping-line strip: ten seconds per cycle.
#[must_use]
pub fn brands_marquee() -> Marquee {
    Marquee::new(brand_logos(), MarqueeSpeed::Total(Duration::from_secs(10)))
}
