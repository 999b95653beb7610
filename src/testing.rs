//! In-memory layout for exercising a controller without a GUI toolkit.
//!
//! [`InMemoryLayout`] plays the containing layout: it holds regions by id
//! and attaches built-in defaults on request. Handles are shared, so a test
//! can keep a [`RegionRef`] and inspect what the controller did to it.

use crate::view::{ClickListener, Region, RegionId, RegionResolver, RegionRole, Visibility};
use std::cell::RefCell;
use std::rc::Rc;

struct RegionData {
    visibility: Visibility,
    text: Option<String>,
    has_text_slot: bool,
    on_click: Option<ClickListener>,
    last_animate: Option<bool>,
}

/// Shared handle to a region living in an [`InMemoryLayout`].
#[derive(Clone)]
pub struct RegionRef(Rc<RefCell<RegionData>>);

impl RegionRef {
    fn new(visibility: Visibility, has_text_slot: bool) -> Self {
        Self(Rc::new(RefCell::new(RegionData {
            visibility,
            text: None,
            has_text_slot,
            on_click: None,
            last_animate: None,
        })))
    }

    pub fn is_visible(&self) -> bool {
        self.visibility().is_visible()
    }

    pub fn text(&self) -> Option<String> {
        self.0.borrow().text.clone()
    }

    /// Animation hint passed with the most recent visibility change.
    pub fn last_animate(&self) -> Option<bool> {
        self.0.borrow().last_animate
    }

    /// Change visibility behind the controller's back.
    pub fn force_visibility(&self, visibility: Visibility) {
        self.0.borrow_mut().visibility = visibility;
    }

    /// Simulate a click. Returns false when no listener is bound.
    pub fn click(&self) -> bool {
        // Take the listener out so it may touch this region while running.
        let listener = self.0.borrow_mut().on_click.take();
        match listener {
            Some(mut listener) => {
                listener();
                let mut data = self.0.borrow_mut();
                if data.on_click.is_none() {
                    data.on_click = Some(listener);
                }
                true
            }
            None => false,
        }
    }
}

impl Region for RegionRef {
    fn visibility(&self) -> Visibility {
        self.0.borrow().visibility
    }

    fn set_visibility(&mut self, visibility: Visibility, animate: bool) {
        let mut data = self.0.borrow_mut();
        data.visibility = visibility;
        data.last_animate = Some(animate);
    }

    fn has_text_slot(&self) -> bool {
        self.0.borrow().has_text_slot
    }

    fn set_text(&mut self, text: &str) {
        self.0.borrow_mut().text = Some(text.to_owned());
    }

    fn set_on_click(&mut self, listener: ClickListener) {
        self.0.borrow_mut().on_click = Some(listener);
    }
}

#[derive(Default)]
struct LayoutData {
    children: Vec<(RegionId, RegionRef)>,
    defaults: Vec<(RegionRole, RegionRef)>,
}

/// A containing layout backed by plain vectors.
///
/// Cloning yields another handle to the same layout.
#[derive(Clone, Default)]
pub struct InMemoryLayout(Rc<RefCell<LayoutData>>);

impl InMemoryLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child region without a text element.
    pub fn add_region(&self, id: impl Into<RegionId>, visibility: Visibility) -> RegionRef {
        self.insert(id.into(), RegionRef::new(visibility, false))
    }

    /// Add a child region that carries a text element.
    pub fn add_text_region(&self, id: impl Into<RegionId>, visibility: Visibility) -> RegionRef {
        self.insert(id.into(), RegionRef::new(visibility, true))
    }

    /// Built-in region attached for `role`, if the controller asked for one.
    pub fn default_region(&self, role: RegionRole) -> Option<RegionRef> {
        self.0
            .borrow()
            .defaults
            .iter()
            .find(|(attached, _)| *attached == role)
            .map(|(_, region)| region.clone())
    }

    /// Regions currently visible, children and defaults alike.
    pub fn visible_count(&self) -> usize {
        let data = self.0.borrow();
        data.children
            .iter()
            .map(|(_, region)| region)
            .chain(data.defaults.iter().map(|(_, region)| region))
            .filter(|region| region.is_visible())
            .count()
    }

    fn insert(&self, id: RegionId, region: RegionRef) -> RegionRef {
        self.0.borrow_mut().children.push((id, region.clone()));
        region
    }
}

impl RegionResolver for InMemoryLayout {
    type Handle = RegionRef;

    fn resolve(&self, id: &RegionId) -> Option<RegionRef> {
        self.0
            .borrow()
            .children
            .iter()
            .find(|(child, _)| child == id)
            .map(|(_, region)| region.clone())
    }

    fn attach_default(&mut self, role: RegionRole) -> RegionRef {
        let has_text_slot = matches!(role, RegionRole::Empty | RegionRole::Error);
        let region = RegionRef::new(Visibility::Visible, has_text_slot);
        self.0.borrow_mut().defaults.push((role, region.clone()));
        region
    }
}
