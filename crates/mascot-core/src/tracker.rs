//! Scroll-position observer that announces section crossings.
//!
//! A [`SectionTracker`] holds one observation per section descriptor plus a
//! terminal footer observation. It is fed the page layout and viewport on
//! every scroll or resize and invokes its callback for each boundary crossed
//! since the previous observation. Ownership is explicit: whoever installs a
//! tracker holds it, and [`TrackerSlot`] guarantees at most one is alive.

use crate::pose::Pose;
use crate::registry::{lookup, SectionDescriptor, Variant};
use crate::section::{Region, SectionId};
use smallvec::SmallVec;

/// Vertical extent of a page region in document coordinates (pixels from the
/// top of the page).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub top: f32,
    pub bottom: f32,
}

/// Anchor regions supplied by the page layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    pub sections: SmallVec<[(SectionId, Anchor); 6]>,
    pub footer_top: Option<f32>,
}

impl PageLayout {
    pub fn with_section(mut self, id: SectionId, top: f32, bottom: f32) -> Self {
        self.sections.push((id, Anchor { top, bottom }));
        self
    }

    pub fn with_footer(mut self, top: f32) -> Self {
        self.footer_top = Some(top);
        self
    }

    pub fn anchor(&self, id: SectionId) -> Option<Anchor> {
        self.sections
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, a)| *a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f32,
    pub height: f32,
}

impl Viewport {
    pub fn center(&self) -> f32 {
        self.scroll_y + self.height * 0.5
    }

    pub fn bottom(&self) -> f32 {
        self.scroll_y + self.height
    }
}

/// Emitted for every crossing: the region now in charge and its base pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseChange {
    pub region: Region,
    pub pose: Pose,
}

pub type PoseCallback = Box<dyn FnMut(&PoseChange)>;

pub struct SectionTracker {
    variant: Variant,
    observations: SmallVec<[SectionDescriptor; 6]>,
    callback: Option<PoseCallback>,
    // (viewport center, viewport bottom) at the previous observation
    previous: Option<(f32, f32)>,
    last_section: Option<SectionId>,
}

impl SectionTracker {
    /// Registers one observation per descriptor of `variant` plus the footer.
    pub fn install(variant: Variant, callback: PoseCallback) -> Self {
        let observations: SmallVec<[SectionDescriptor; 6]> =
            variant.sections().iter().copied().collect();
        log::info!(
            "[tracker] installed {} section observations for {}",
            observations.len(),
            variant
        );
        Self {
            variant,
            observations,
            callback: Some(callback),
            previous: None,
            last_section: None,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn is_alive(&self) -> bool {
        self.callback.is_some()
    }

    /// Removes every observation and drops the callback. Idempotent.
    pub fn kill(&mut self) {
        if self.callback.take().is_some() {
            log::info!("[tracker] killed {} observations", self.observations.len());
        }
        self.observations.clear();
        self.previous = None;
    }

    /// Compares the viewport against the previous observation and fires the
    /// callback once per boundary crossed. Returns the number of callbacks
    /// fired. The first observation treats the page as scrolled from above its
    /// top, so every section already passed is announced in order.
    pub fn observe(&mut self, layout: &PageLayout, viewport: Viewport) -> usize {
        if self.callback.is_none() {
            return 0;
        }
        let center = viewport.center();
        let bottom = viewport.bottom();
        let (prev_center, prev_bottom) = self
            .previous
            .unwrap_or((f32::NEG_INFINITY, f32::NEG_INFINITY));
        self.previous = Some((center, bottom));

        let mut changes: SmallVec<[PoseChange; 8]> = SmallVec::new();
        if center >= prev_center {
            for d in &self.observations {
                let Some(a) = layout.anchor(d.id) else {
                    continue;
                };
                if prev_center < a.top && a.top <= center {
                    self.last_section = Some(d.id);
                    changes.push(PoseChange {
                        region: Region::Section(d.id),
                        pose: d.pose,
                    });
                }
            }
            if let Some(top) = layout.footer_top {
                if prev_bottom < top && top <= bottom {
                    changes.push(PoseChange {
                        region: Region::Footer,
                        pose: Pose::NEUTRAL,
                    });
                }
            }
        } else {
            if let Some(top) = layout.footer_top {
                if bottom < top && top <= prev_bottom {
                    changes.push(self.restore_from_footer());
                }
            }
            for d in self.observations.iter().rev() {
                let Some(a) = layout.anchor(d.id) else {
                    continue;
                };
                if center < a.bottom && a.bottom <= prev_center {
                    self.last_section = Some(d.id);
                    changes.push(PoseChange {
                        region: Region::Section(d.id),
                        pose: d.pose,
                    });
                }
            }
        }

        let fired = changes.len();
        if let Some(cb) = self.callback.as_mut() {
            for change in &changes {
                cb(change);
            }
        }
        fired
    }

    // Leaving the footer upward goes back to the last announced section. A page
    // opened already at the bottom has announced none, so the final section of
    // the table stands in for it.
    fn restore_from_footer(&self) -> PoseChange {
        let id = self
            .last_section
            .or_else(|| self.observations.last().map(|d| d.id))
            .unwrap_or(SectionId::Hero);
        PoseChange {
            region: Region::Section(id),
            pose: lookup(&self.observations, id),
        }
    }
}

impl Drop for SectionTracker {
    fn drop(&mut self) {
        self.kill();
    }
}

/// Owner of the single live tracker.
#[derive(Default)]
pub struct TrackerSlot {
    tracker: Option<SectionTracker>,
}

impl TrackerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tears down any previous tracker, then installs a new one unless motion is
    /// reduced. Returns whether a tracker is now installed.
    pub fn install(&mut self, variant: Variant, reduced_motion: bool, callback: PoseCallback) -> bool {
        self.clear();
        if reduced_motion {
            log::info!("[tracker] reduced motion; no observations registered");
            return false;
        }
        self.tracker = Some(SectionTracker::install(variant, callback));
        true
    }

    /// Synchronously kills the live tracker, if any.
    pub fn clear(&mut self) {
        if let Some(mut t) = self.tracker.take() {
            t.kill();
        }
    }

    pub fn is_installed(&self) -> bool {
        self.tracker.as_ref().map_or(false, |t| t.is_alive())
    }

    pub fn variant(&self) -> Option<Variant> {
        self.tracker.as_ref().map(|t| t.variant())
    }

    pub fn observe(&mut self, layout: &PageLayout, viewport: Viewport) -> usize {
        match self.tracker.as_mut() {
            Some(t) => t.observe(layout, viewport),
            None => 0,
        }
    }
}
