//! Per-row labels

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Binary outcome for one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    #[default]
    NoMatch,
    Match,
}

impl Label {
    pub fn as_u8(self) -> u8 {
        match self {
            Label::NoMatch => 0,
            Label::Match => 1,
        }
    }

    pub fn is_match(self) -> bool {
        self == Label::Match
    }
}

impl From<bool> for Label {
    fn from(matched: bool) -> Self {
        if matched {
            Label::Match
        } else {
            Label::NoMatch
        }
    }
}

// Labels travel as 0/1 on the wire.
impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(Label::NoMatch),
            1 => Ok(Label::Match),
            other => Err(serde::de::Error::custom(format!(
                "label must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

/// One label per row text, all starting at [`Label::NoMatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelVector {
    labels: Vec<Label>,
}

impl LabelVector {
    pub fn new(len: usize) -> Self {
        Self {
            labels: vec![Label::NoMatch; len],
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Label> {
        self.labels.get(index).copied()
    }

    /// Set the label at `index`; returns false when out of range
    pub fn set(&mut self, index: usize, label: Label) -> bool {
        match self.labels.get_mut(index) {
            Some(slot) => {
                *slot = label;
                true
            }
            None => false,
        }
    }

    pub fn match_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_match()).count()
    }

    pub fn as_slice(&self) -> &[Label] {
        &self.labels
    }

    pub fn into_vec(self) -> Vec<Label> {
        self.labels
    }
}
