use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ImageId);
id_newtype!(ListenerId);

impl ImageId {
    /// Wire value meaning "nothing to focus".
    pub const NONE: ImageId = ImageId(0);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// Ordered (key, value) pairs shown on a card. Keys may repeat.
pub type Metadata = Vec<(String, String)>;
