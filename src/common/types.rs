use std::fmt;
use serde::{Serialize, Deserialize};

/// Page identifier referenced by the workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u32);

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Frame slot index. Replacement policies operate on slots, never on page identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(pub usize);

impl FrameId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fixed-capacity set of frame slots, each empty or holding one resident page.
///
/// Cloning produces an independent snapshot; steps in a trace never share slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameSet {
    slots: Vec<Option<PageId>>,
}

impl FrameSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot holding `page`, if resident
    pub fn find(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|&slot| slot == Some(page))
            .map(FrameId)
    }

    /// Lowest-index empty slot
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId)
    }

    pub fn get(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots.get(frame_id.index()).copied().flatten()
    }

    /// Places `page` into `frame_id`, returning the page it displaced.
    pub fn replace(&mut self, frame_id: FrameId, page: PageId) -> Option<PageId> {
        self.slots[frame_id.index()].replace(page)
    }

    pub fn resident_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// Occupied slots in index order
    pub fn occupied(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|page| (FrameId(i), page)))
    }
}

impl fmt::Display for FrameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Some(page) => write!(f, "{}", page)?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}
