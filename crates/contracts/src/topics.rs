//! ROS topic names used by the vision pipeline

use serde::{Deserialize, Serialize};

/// Topic identifiers read from the `topics` section.
///
/// A field is `None` when the document does not name that topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSet {
    /// Camera image stream
    #[serde(default)]
    pub image: Option<String>,

    /// TF tree
    #[serde(default)]
    pub tf: Option<String>,

    /// Event camera stream
    #[serde(default)]
    pub event: Option<String>,
}

impl TopicSet {
    /// True when none of the three topics is configured
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.tf.is_none() && self.event.is_none()
    }

    /// `(name, topic)` pairs in fixed order: image, tf, event
    pub fn entries(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("image", self.image.as_deref()),
            ("tf", self.tf.as_deref()),
            ("event", self.event.as_deref()),
        ]
    }
}
