//! Controller that swaps loading/empty/error/content regions by state.

use super::config::RegionConfig;
use super::error::{ConfigError, RegionFault};
use super::region::{ClickListener, Region, RegionResolver, Visibility};
use super::state::{RegionRole, ViewState};
use crate::error::Result;
use crate::saved::{SavedState, StateCodec};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Shows exactly one of four regions depending on a [`ViewState`].
///
/// Region handles are looked up lazily on the first state change, because
/// the containing layout is usually still being populated when the
/// controller is created. From then on the controller owns visibility of
/// all four regions.
///
/// The controller is meant for the UI thread only and does no locking.
///
/// # Example
///
/// ```
/// use viewstate::testing::InMemoryLayout;
/// use viewstate::view::{RegionConfig, RegionRole, ViewState, ViewStateController, Visibility};
///
/// let layout = InMemoryLayout::new();
/// let list = layout.add_region("list", Visibility::Hidden);
///
/// let config = RegionConfig::new().with_content("list");
/// let mut controller = ViewStateController::new(layout.clone(), config)?;
///
/// controller.set_state(ViewState::Loading)?;
/// assert!(layout.default_region(RegionRole::Loading).unwrap().is_visible());
///
/// controller.set_state(ViewState::Content)?;
/// assert!(list.is_visible());
/// # Ok::<(), viewstate::view::ConfigError>(())
/// ```
pub struct ViewStateController<R: RegionResolver> {
    resolver: R,
    config: RegionConfig,
    state: ViewState,
    // Indexed by `RegionRole::index`.
    slots: [Option<R::Handle>; 4],
    resolved: bool,
    empty_message: Option<String>,
    error_message: Option<String>,
}

impl<R: RegionResolver> ViewStateController<R> {
    /// Create a controller in [`ViewState::NotInit`].
    ///
    /// Attaches a hidden built-in region for every non-content role the
    /// configuration leaves unset. Fails when the content id is missing.
    pub fn new(mut resolver: R, config: RegionConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            tracing::error!(%err, "rejecting region configuration");
            return Err(err);
        }

        let mut slots = [None, None, None, None];
        for role in RegionRole::REPLACEABLE {
            if config.id(role).is_none() {
                let mut region = resolver.attach_default(role);
                region.set_visibility(Visibility::Hidden, false);
                slots[role.index()] = Some(region);
                tracing::debug!(%role, "attached default region");
            }
        }

        Ok(Self {
            resolver,
            config,
            state: ViewState::NotInit,
            slots,
            resolved: false,
            empty_message: None,
            error_message: None,
        })
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn empty_message(&self) -> Option<&str> {
        self.empty_message.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// True once all four regions have been looked up and checked.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Switch to `state`, animating the change.
    pub fn set_state(&mut self, state: ViewState) -> Result<(), ConfigError> {
        self.set_state_with_animation(state, true)
    }

    /// Switch to `state`.
    ///
    /// The new state is recorded even when region resolution fails; in that
    /// case no region visibility is touched.
    pub fn set_state_with_animation(
        &mut self,
        state: ViewState,
        animate: bool,
    ) -> Result<(), ConfigError> {
        tracing::debug!(from = %self.state, to = %state, animate, "view state change");
        self.state = state;
        self.render(animate)
    }

    /// Show the error region with `message`, calling `on_retry` when the
    /// region is clicked.
    pub fn set_error_message(
        &mut self,
        message: impl Into<String>,
        on_retry: impl FnMut() + 'static,
    ) -> Result<(), ConfigError> {
        self.error_message = Some(message.into());
        self.set_state(ViewState::Error)?;
        self.bind_retry(Box::new(on_retry));
        self.apply_message(RegionRole::Error)
    }

    /// Show the empty region with `message`.
    pub fn set_empty_message(&mut self, message: impl Into<String>) -> Result<(), ConfigError> {
        self.empty_message = Some(message.into());
        self.set_state(ViewState::Empty)?;
        self.apply_message(RegionRole::Empty)
    }

    /// Bind a click listener to the error region without changing state.
    ///
    /// Only the error region is looked up, so this works before the content
    /// region exists. The built-in error region needs no lookup at all.
    pub fn set_on_retry(&mut self, on_retry: impl FnMut() + 'static) -> Result<(), ConfigError> {
        self.resolve_slot(RegionRole::Error)?;
        self.bind_retry(Box::new(on_retry));
        Ok(())
    }

    /// Snapshot what must survive a teardown/recreate cycle.
    ///
    /// Region handles and the retry listener are not part of it.
    pub fn capture_state(&self) -> SavedState {
        SavedState::new(
            self.state,
            self.empty_message.clone(),
            self.error_message.clone(),
        )
    }

    /// Restore a snapshot taken by [`capture_state`](Self::capture_state)
    /// and render it straight away.
    pub fn restore_state(&mut self, saved: SavedState) -> Result<(), ConfigError> {
        tracing::debug!(state = %saved.state, "restoring view state");

        self.state = saved.state;
        self.empty_message = saved.empty_message;
        self.error_message = saved.error_message;
        self.render(false)?;

        match self.state {
            ViewState::Empty if self.empty_message.is_some() => {
                self.apply_message(RegionRole::Empty)
            }
            ViewState::Error if self.error_message.is_some() => {
                self.apply_message(RegionRole::Error)
            }
            _ => Ok(()),
        }
    }

    /// [`capture_state`](Self::capture_state) encoded as an opaque token.
    pub fn capture_token<C: StateCodec>(&self, codec: &C) -> Result<Vec<u8>> {
        Ok(codec.encode(&self.capture_state())?)
    }

    /// Decode a token produced by [`capture_token`](Self::capture_token)
    /// and restore it.
    pub fn restore_token<C: StateCodec>(&mut self, codec: &C, token: &[u8]) -> Result<()> {
        let saved = codec.decode(token)?;
        self.restore_state(saved)?;
        Ok(())
    }

    fn render(&mut self, animate: bool) -> Result<(), ConfigError> {
        self.ensure_resolved()?;

        let shown = self.state.region();
        for role in RegionRole::ALL {
            if Some(role) == shown {
                continue;
            }
            if let Some(region) = self.slots[role.index()].as_mut() {
                region.set_visibility(Visibility::Hidden, animate);
            }
        }

        if let Some(role) = shown {
            if let Some(region) = self.slots[role.index()].as_mut() {
                region.set_visibility(Visibility::Visible, animate);
            }
        }

        Ok(())
    }

    fn ensure_resolved(&mut self) -> Result<(), ConfigError> {
        if self.resolved {
            return Ok(());
        }

        for role in RegionRole::ALL {
            self.resolve_slot(role)?;
        }

        self.check_hidden()?;
        self.resolved = true;
        tracing::debug!("regions resolved");
        Ok(())
    }

    // Fills the slot of a role configured by id; defaults are already there.
    fn resolve_slot(&mut self, role: RegionRole) -> Result<(), ConfigError> {
        let Some(id) = self.config.id(role) else {
            return Ok(());
        };
        if self.slots[role.index()].is_some() {
            return Ok(());
        }

        match self.resolver.resolve(id) {
            Some(region) => {
                self.slots[role.index()] = Some(region);
                Ok(())
            }
            None => {
                let err = ConfigError::RegionNotFound {
                    role,
                    id: id.clone(),
                };
                tracing::error!(%err, "region resolution failed");
                Err(err)
            }
        }
    }

    // Collects every visible looked-up region so one error names them all.
    fn check_hidden(&self) -> Result<(), ConfigError> {
        let mut checks: Vec<Validation<(), NonEmptyVec<RegionFault>>> = Vec::new();

        for role in RegionRole::ALL {
            let (Some(id), Some(region)) = (self.config.id(role), &self.slots[role.index()])
            else {
                continue;
            };

            let check = if region.visibility().is_visible() {
                Validation::fail(RegionFault {
                    role,
                    id: id.clone(),
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        match Validation::all_vec(checks).map(|_| ()) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(faults) => {
                let err = ConfigError::RegionsVisible(faults.iter().cloned().collect());
                tracing::error!(%err, "region resolution failed");
                Err(err)
            }
        }
    }

    fn bind_retry(&mut self, listener: ClickListener) {
        if let Some(region) = self.slots[RegionRole::Error.index()].as_mut() {
            region.set_on_click(listener);
        }
    }

    fn apply_message(&mut self, role: RegionRole) -> Result<(), ConfigError> {
        let message = match role {
            RegionRole::Empty => self.empty_message.as_deref(),
            RegionRole::Error => self.error_message.as_deref(),
            RegionRole::Content | RegionRole::Loading => None,
        };
        let Some(message) = message else {
            return Ok(());
        };

        match self.slots[role.index()].as_mut() {
            Some(region) if region.has_text_slot() => {
                region.set_text(message);
                Ok(())
            }
            _ => {
                let err = ConfigError::MissingTextSlot { role };
                tracing::error!(%err, "cannot show message");
                Err(err)
            }
        }
    }
}
