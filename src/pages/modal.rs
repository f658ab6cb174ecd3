//! Modal open state and the certificate viewer

/// Images of the certificate gallery, in grid order.
pub const CERTIFICATE_IMAGES: [&str; 8] = [
    "assets/modal/1.jpg",
    "assets/modal/2.jpg",
    "assets/modal/3.jpg",
    "assets/modal/4.jpg",
    "assets/modal/5.jpg",
    "assets/modal/6.jpg",
    "assets/modal/7.jpg",
    "assets/modal/8.jpg",
];

/// Certificate holders listed above the gallery.
pub const CERTIFICATE_TITLES: [&str; 3] = [
    "TAUREL & CÍA. SUCRS., C.A Certificado n° 9001-151-31-11-2001",
    "CUSTODIAS Y ALMACENAJE , C.A Certificado n° 9001-149-31-12-1999",
    "TAUREL & CÍA. SUCRS., C.A Certificado n°9001-837-31-12-2017",
];

/// Magnification applied under the pointer while zoom is on.
pub const ZOOM_SCALE: f64 = 1.5;

/// Open/closed flag of a dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modal {
    open: bool,
}

impl Modal {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn open(&mut self) {
        self.open = true;
    }

    pub const fn close(&mut self) {
        self.open = false;
    }
}

/// Point the zoomed image is magnified around, in percent of its box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFocus {
    pub x_percent: f64,
    pub y_percent: f64,
}

/// ISO certificate dialog: a gallery, and a single-image view with an
/// optional pointer zoom.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CertificationModal {
    modal: Modal,
    selected: Option<usize>,
    zoom_enabled: bool,
    focus: Option<ZoomFocus>,
}

impl CertificationModal {
    #[must_use]
    pub const fn new() -> Self {
        Self { modal: Modal::new(), selected: None, zoom_enabled: false, focus: None }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    pub const fn open(&mut self) {
        self.modal.open();
    }

    /// Close and forget the selected image and zoom.
    pub const fn close(&mut self) {
        self.back();
        self.modal.close();
    }

    /// Show image `index` on its own. Out-of-range indices are ignored.
    pub const fn select_image(&mut self, index: usize) -> bool {
        if !self.modal.is_open() || index >= CERTIFICATE_IMAGES.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Return to the gallery.
    pub const fn back(&mut self) {
        self.selected = None;
        self.zoom_enabled = false;
        self.focus = None;
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&'static str> {
        CERTIFICATE_IMAGES.get(self.selected?).copied()
    }

    /// Flip pointer zoom; turning it off drops the current focus.
    pub const fn toggle_zoom(&mut self) -> bool {
        self.zoom_enabled = !self.zoom_enabled;
        if !self.zoom_enabled {
            self.focus = None;
        }
        self.zoom_enabled
    }

    #[must_use]
    pub const fn zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    /// Pointer moved over the image, at a position given in percent of its
    /// box. Ignored unless zoom is on.
    pub const fn pointer_move(&mut self, x_percent: f64, y_percent: f64) {
        if self.zoom_enabled && self.selected.is_some() {
            self.focus = Some(ZoomFocus {
                x_percent: x_percent.clamp(0.0, 100.0),
                y_percent: y_percent.clamp(0.0, 100.0),
            });
        }
    }

    pub const fn pointer_leave(&mut self) {
        self.focus = None;
    }

    #[must_use]
    pub const fn zoom_focus(&self) -> Option<ZoomFocus> {
        self.focus
    }
}
