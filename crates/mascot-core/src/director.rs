use crate::registry::Variant;
use crate::state::{MascotState, Policy, Tuning};
use crate::tracker::{PageLayout, PoseChange, TrackerSlot, Viewport};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Owns the mascot state and the single section tracker feeding it.
///
/// Every operation that invalidates the tracker (variant switch, reduced
/// motion toggle, teardown) clears the old tracker before anything else, so
/// a stale tracker can never announce into the new state.
pub struct Director {
    state: Rc<RefCell<MascotState>>,
    tracker: TrackerSlot,
    last_view: Option<(PageLayout, Viewport)>,
}

impl Director {
    pub fn new(variant: Variant, tuning: Tuning, policy: Policy) -> Self {
        let mut state = MascotState::new(variant, tuning);
        state.set_policy(policy);
        let mut director = Self {
            state: Rc::new(RefCell::new(state)),
            tracker: TrackerSlot::new(),
            last_view: None,
        };
        director.reinstall();
        director
    }

    pub fn state(&self) -> Rc<RefCell<MascotState>> {
        Rc::clone(&self.state)
    }

    pub fn variant(&self) -> Variant {
        self.state.borrow().variant()
    }

    pub fn tracker_installed(&self) -> bool {
        self.tracker.is_installed()
    }

    pub fn switch_variant(&mut self, variant: Variant) {
        if variant == self.variant() {
            return;
        }
        self.tracker.clear();
        self.state.borrow_mut().set_variant(variant);
        self.reinstall();
    }

    pub fn toggle_variant(&mut self) -> Variant {
        let next = self.variant().toggle();
        self.switch_variant(next);
        next
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        let mut policy = self.state.borrow().policy();
        if policy.reduced_motion == reduced_motion {
            return;
        }
        self.tracker.clear();
        policy.reduced_motion = reduced_motion;
        self.state.borrow_mut().set_policy(policy);
        self.reinstall();
    }

    pub fn set_mobile(&mut self, mobile: bool) {
        let mut policy = self.state.borrow().policy();
        policy.mobile = mobile;
        self.state.borrow_mut().set_policy(policy);
    }

    /// Feeds a scroll or resize observation to the tracker. Returns the number
    /// of announcements made; zero once torn down.
    pub fn on_scroll(&mut self, layout: &PageLayout, viewport: Viewport) -> usize {
        self.last_view = Some((layout.clone(), viewport));
        self.observe(layout, viewport)
    }

    pub fn on_pointer(&self, normalized: Vec2) {
        self.state.borrow_mut().set_pointer(normalized);
    }

    pub fn tick(&self, dt_sec: f32) {
        self.state.borrow_mut().tick(dt_sec);
    }

    /// Removes the tracker for good (page unload). Idempotent.
    pub fn teardown(&mut self) {
        self.tracker.clear();
        self.last_view = None;
    }

    fn reinstall(&mut self) {
        let (variant, reduced_motion) = {
            let s = self.state.borrow();
            (s.variant(), s.policy().reduced_motion)
        };
        let state = Rc::clone(&self.state);
        let installed = self.tracker.install(
            variant,
            reduced_motion,
            Box::new(move |change: &PoseChange| {
                state.borrow_mut().retarget(change);
            }),
        );
        // A fresh tracker announces wherever the page already is.
        if installed {
            if let Some((layout, viewport)) = self.last_view.clone() {
                self.observe(&layout, viewport);
            }
        }
    }

    // Clip selection sees only where a batch of crossings ended.
    fn observe(&mut self, layout: &PageLayout, viewport: Viewport) -> usize {
        let fired = self.tracker.observe(layout, viewport);
        if fired > 0 {
            self.state.borrow_mut().select_clip();
        }
        fired
    }
}

impl Drop for Director {
    fn drop(&mut self) {
        self.teardown();
    }
}
