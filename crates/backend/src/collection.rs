use shared::{
    domain::{ImageId, Metadata},
    protocol::{ImageRecord, StateChangedPayload},
};

/// The authoritative image list. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct ImageCollection {
    images: Vec<ImageRecord>,
    next_id: u32,
    focus_on: ImageId,
}

impl Default for ImageCollection {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            next_id: 1,
            focus_on: ImageId::NONE,
        }
    }
}

impl ImageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and focuses it.
    pub fn insert(&mut self, filename: impl Into<String>, metadata: Metadata) -> ImageId {
        let id = ImageId(self.next_id);
        self.next_id += 1;
        self.images.push(ImageRecord {
            id,
            filename: filename.into(),
            metadata,
        });
        self.focus_on = id;
        id
    }

    /// Unknown ids are ignored. Focus is cleared either way.
    pub fn remove(&mut self, id: ImageId) -> bool {
        let before = self.images.len();
        self.images.retain(|image| image.id != id);
        self.focus_on = ImageId::NONE;
        self.images.len() != before
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn snapshot(&self) -> StateChangedPayload {
        StateChangedPayload {
            images: self.images.clone(),
            focus_on: self.focus_on.0,
        }
    }
}
