use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{FlexscopeError, Result};
use crate::gallery::{Gallery, ImageDescriptor};
use crate::viewport::{ViewportController, ZoomLimits};

/// Sidebar destinations of the control console.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    View,
    Gallery,
    #[default]
    Navigate,
    Capture,
    Storage,
    Settings,
    Logging,
    About,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::View,
        Section::Gallery,
        Section::Navigate,
        Section::Capture,
        Section::Storage,
        Section::Settings,
        Section::Logging,
        Section::About,
    ];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::View => "View",
            Self::Gallery => "Gallery",
            Self::Navigate => "Navigate",
            Self::Capture => "Capture",
            Self::Storage => "Storage",
            Self::Settings => "Settings",
            Self::Logging => "Logging",
            Self::About => "About",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Section {
    type Err = FlexscopeError;

    fn from_str(s: &str) -> Result<Self> {
        Section::ALL
            .into_iter()
            .find(|section| section.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| FlexscopeError::UnknownSection(s.to_string()))
    }
}

/// Navigation host for the viewer.
///
/// Owns the gallery, the selected image and the viewport lifecycle: a
/// [`ViewportController`] exists only while the `View` section is showing
/// an image, and is dropped as soon as the user navigates elsewhere.
#[derive(Debug)]
pub struct Console {
    gallery: Gallery,
    limits: ZoomLimits,
    active_section: Section,
    selected_image: Option<ImageDescriptor>,
    viewport: Option<ViewportController>,
}

impl Console {
    pub fn new(gallery: Gallery, limits: ZoomLimits) -> Self {
        Self {
            gallery,
            limits,
            active_section: Section::default(),
            selected_image: None,
            viewport: None,
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn selected_image(&self) -> Option<&ImageDescriptor> {
        self.selected_image.as_ref()
    }

    pub fn viewport(&self) -> Option<&ViewportController> {
        self.viewport.as_ref()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut ViewportController> {
        self.viewport.as_mut()
    }

    /// Gallery card click: show the image in the viewer, re-centered.
    pub fn open_image(&mut self, id: u32) -> Result<()> {
        let image = self.gallery.require(id)?.clone();
        self.show_in_viewer(image);
        Ok(())
    }

    /// Gallery ADD button: like [`Console::open_image`], and the image joins
    /// the working set.
    pub fn add_image(&mut self, id: u32) -> Result<()> {
        self.gallery.mark_selected(id)?;
        self.open_image(id)
    }

    pub fn set_section(&mut self, section: Section) {
        if section == self.active_section {
            return;
        }
        debug!(from = %self.active_section, to = %section, "section changed");
        self.active_section = section;

        if section == Section::View {
            self.viewport = self
                .selected_image
                .clone()
                .map(|image| ViewportController::new(image, self.limits));
        } else {
            self.viewport = None;
        }
    }

    fn show_in_viewer(&mut self, image: ImageDescriptor) {
        self.selected_image = Some(image.clone());
        self.active_section = Section::View;
        match self.viewport.as_mut() {
            Some(viewport) => viewport.select_image(image),
            None => self.viewport = Some(ViewportController::new(image, self.limits)),
        }
    }
}
