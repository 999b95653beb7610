//! Capabilities the host layout system provides to the controller.
//!
//! The controller never touches a concrete GUI toolkit. It looks regions
//! up by id through a [`RegionResolver`] and drives them through the
//! [`Region`] trait.

use super::state::RegionRole;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Identifier of a region inside the containing layout.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(Cow<'static, str>);

impl RegionId {
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for RegionId {
    fn from(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Visibility {
    Visible,
    /// Not drawn. Hidden regions may still take part in layout.
    Hidden,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Callback bound to a region's primary interactive element.
pub type ClickListener = Box<dyn FnMut()>;

/// A live handle to one visual subtree.
pub trait Region {
    fn visibility(&self) -> Visibility;

    /// `animate` is a hint; hosts without transitions ignore it.
    fn set_visibility(&mut self, visibility: Visibility, animate: bool);

    /// Whether the region contains the text-bearing child used for
    /// empty/error messages.
    fn has_text_slot(&self) -> bool;

    /// Write into the text-bearing child. Only called when
    /// [`has_text_slot`](Region::has_text_slot) returned true.
    fn set_text(&mut self, text: &str);

    fn set_on_click(&mut self, listener: ClickListener);
}

/// Looks regions up inside the containing layout.
pub trait RegionResolver {
    type Handle: Region;

    /// Find a region by id, `None` when the layout has no such child.
    fn resolve(&self, id: &RegionId) -> Option<Self::Handle>;

    /// Build the built-in region for `role` and attach it to the container.
    fn attach_default(&mut self, role: RegionRole) -> Self::Handle;
}
