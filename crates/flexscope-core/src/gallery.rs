use serde::{Deserialize, Serialize};

use crate::error::{FlexscopeError, Result};

/// An externally-owned image as the viewer sees it: identity and display
/// metadata only, never pixel data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub tag: Option<String>,
    /// Already added to the working set (the ADD button is hidden).
    #[serde(default)]
    pub selected: bool,
}

impl ImageDescriptor {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            timestamp: String::new(),
            tag: None,
            selected: false,
        }
    }
}

/// Ordered list of captured images shown in the gallery grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gallery {
    items: Vec<ImageDescriptor>,
}

impl Gallery {
    pub fn new(items: Vec<ImageDescriptor>) -> Self {
        Self { items }
    }

    /// Built-in capture list used until a real storage backend is wired in.
    pub fn sample() -> Self {
        Self::new(sample_items())
    }

    pub fn get(&self, id: u32) -> Option<&ImageDescriptor> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn require(&self, id: u32) -> Result<&ImageDescriptor> {
        self.get(id).ok_or(FlexscopeError::UnknownImage(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn mark_selected(&mut self, id: u32) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(FlexscopeError::UnknownImage(id))?;
        item.selected = true;
        Ok(())
    }
}

pub(crate) fn sample_items() -> Vec<ImageDescriptor> {
    let entry = |id, name: &str, timestamp: &str, tag: Option<&str>| ImageDescriptor {
        id,
        name: name.to_string(),
        timestamp: timestamp.to_string(),
        tag: tag.map(str::to_string),
        selected: false,
    };

    vec![
        entry(
            1,
            "smartStackScan-ABCD/scan_6",
            "2021-08-23 16:33:58.122975",
            Some("CENTRAL_IMAGE"),
        ),
        entry(2, "8372.jpeg", "2021-08-23 16:12:07.486543", None),
        entry(3, "8322.jpeg", "2021-08-23 16:12:05.460494", None),
        entry(4, "8272.jpeg", "2021-08-23 16:12:03.434445", None),
        entry(5, "8222.jpeg", "2021-08-23 16:12:01.408396", None),
        entry(6, "8172.jpeg", "2021-08-23 16:11:59.382347", None),
    ]
}
