// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dropdown controller: setup, state changes, and event entry points.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use understory_debounce::Debounce;

use crate::attributes;
use crate::containment::compute_shift;
use crate::error::SetupError;
use crate::flags::{ControllerConfig, DropdownFlags};
use crate::host::DropdownHost;

/// Dropdowns affected by a single event. Usually zero or one.
pub type Affected<E> = SmallVec<[E; 2]>;

/// Keys the controller reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// Any other key.
    Other,
}

impl Key {
    /// Map a physical key code such as `"Escape"` or `"KeyA"`.
    pub fn from_code(code: &str) -> Self {
        if code == "Escape" {
            Self::Escape
        } else {
            Self::Other
        }
    }
}

/// Transient state of one initialized dropdown.
#[derive(Clone, Debug)]
struct Instance<E> {
    toggle: E,
    content: E,
    flags: DropdownFlags,
    last_shift: Vec2,
    resize: Debounce,
}

/// Drives every dropdown in a document.
///
/// The controller owns no document. Each operation borrows a [`DropdownHost`] and the
/// host forwards input through [`on_click`](Self::on_click),
/// [`on_pointer_down`](Self::on_pointer_down), [`on_key_down`](Self::on_key_down),
/// [`on_resize`](Self::on_resize), and [`on_tick`](Self::on_tick).
///
/// Open state lives only in the dropdown's [`OPEN`](attributes::OPEN) attribute. The
/// controller keeps a side table with each dropdown's children, flags, last applied
/// containment shift, and resize debouncer.
#[derive(Clone, Debug)]
pub struct DropdownController<E> {
    config: ControllerConfig,
    instances: HashMap<E, Instance<E>>,
    /// Registration order, for deterministic event fan-out.
    order: Vec<E>,
}

impl<E: Copy + Eq + Hash + Debug> Default for DropdownController<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Copy + Eq + Hash + Debug> DropdownController<E> {
    /// Create a controller with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::default())
    }

    /// Create a controller with a custom configuration.
    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            config,
            instances: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The controller's configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Set up every dropdown in the document.
    ///
    /// Each dropdown is set up on its own; one with broken markup is skipped and reported
    /// without affecting the rest.
    pub fn init<H>(&mut self, host: &mut H) -> Vec<(E, SetupError)>
    where
        H: DropdownHost<Element = E>,
    {
        let mut failures = Vec::new();
        for dropdown in host.dropdowns() {
            if let Err(err) = self.initialize_dropdown(host, dropdown) {
                tracing::warn!(?dropdown, %err, "dropdown left uninitialized");
                failures.push((dropdown, err));
            }
        }
        failures
    }

    /// Set up a single dropdown.
    ///
    /// Resolves its toggle and content children and its [`DropdownFlags`], and marks it
    /// closed unless the markup already carries an open state. Setting up a dropdown again
    /// refreshes its children and flags; the last shift survives if the content element is
    /// unchanged, and a pending resize survives unless containment was turned off.
    pub fn initialize_dropdown<H>(&mut self, host: &mut H, dropdown: E) -> Result<(), SetupError>
    where
        H: DropdownHost<Element = E>,
    {
        let toggle = host
            .find_marked(dropdown, attributes::TOGGLE)
            .ok_or(SetupError::MissingToggle)?;
        let content = host
            .find_marked(dropdown, attributes::CONTENT)
            .ok_or(SetupError::MissingContent)?;
        let flags = DropdownFlags::resolve(host, dropdown);

        if host
            .attribute(dropdown, attributes::OPEN)
            .is_none_or(|v| v.is_empty())
        {
            host.set_attribute(dropdown, attributes::OPEN, attributes::FALSE);
        }

        let previous = self.instances.get(&dropdown);
        let last_shift = match previous {
            Some(prev) if prev.content == content => prev.last_shift,
            _ => Vec2::ZERO,
        };
        let mut resize = match previous {
            Some(prev) => prev.resize.clone(),
            None => Debounce::new(self.config.resize_delay),
        };
        if !flags.contains(DropdownFlags::KEEP_IN_VIEWPORT) {
            resize.cancel();
        }
        let instance = Instance {
            toggle,
            content,
            flags,
            last_shift,
            resize,
        };
        if self.instances.insert(dropdown, instance).is_none() {
            self.order.push(dropdown);
        }
        tracing::debug!(?dropdown, ?flags, "dropdown initialized");
        Ok(())
    }

    /// Forget a dropdown, cancelling any pending resize work. Its open state is left as-is.
    ///
    /// Returns `false` if the dropdown was not initialized.
    pub fn release(&mut self, dropdown: E) -> bool {
        let Some(mut instance) = self.instances.remove(&dropdown) else {
            return false;
        };
        instance.resize.cancel();
        self.order.retain(|&d| d != dropdown);
        tracing::debug!(?dropdown, "dropdown released");
        true
    }

    /// Whether `dropdown` has been initialized and not released.
    pub fn is_initialized(&self, dropdown: E) -> bool {
        self.instances.contains_key(&dropdown)
    }

    /// Initialized dropdowns in registration order.
    pub fn dropdowns(&self) -> &[E] {
        &self.order
    }

    /// Resolved flags of an initialized dropdown.
    pub fn flags(&self, dropdown: E) -> Option<DropdownFlags> {
        self.instances.get(&dropdown).map(|i| i.flags)
    }

    /// Containment shift last applied to an initialized dropdown's content.
    pub fn last_shift(&self, dropdown: E) -> Option<Vec2> {
        self.instances.get(&dropdown).map(|i| i.last_shift)
    }

    /// Whether the dropdown's open-state attribute is exactly `"true"`.
    pub fn is_open<H>(&self, host: &H, dropdown: E) -> bool
    where
        H: DropdownHost<Element = E>,
    {
        host.attribute(dropdown, attributes::OPEN) == Some(attributes::TRUE)
    }

    /// Close if open, open otherwise. Returns the new state.
    pub fn toggle<H>(&mut self, host: &mut H, dropdown: E) -> bool
    where
        H: DropdownHost<Element = E>,
    {
        if self.is_open(host, dropdown) {
            self.close(host, dropdown);
            false
        } else {
            self.open(host, dropdown);
            true
        }
    }

    /// Mark the dropdown open, then keep it in the viewport if its flags ask for it.
    pub fn open<H>(&mut self, host: &mut H, dropdown: E)
    where
        H: DropdownHost<Element = E>,
    {
        host.set_attribute(dropdown, attributes::OPEN, attributes::TRUE);
        tracing::debug!(?dropdown, "dropdown opened");

        if self
            .flags(dropdown)
            .is_some_and(|f| f.contains(DropdownFlags::KEEP_IN_VIEWPORT))
        {
            self.keep_in_viewport(host, dropdown);
        }
    }

    /// Mark the dropdown closed. The content keeps its current shift.
    pub fn close<H>(&mut self, host: &mut H, dropdown: E)
    where
        H: DropdownHost<Element = E>,
    {
        host.set_attribute(dropdown, attributes::OPEN, attributes::FALSE);
        tracing::debug!(?dropdown, "dropdown closed");
    }

    /// Shift an open dropdown's content horizontally so it stays inside the viewport.
    ///
    /// Returns the applied shift, or `None` when the dropdown is closed or not initialized.
    pub fn keep_in_viewport<H>(&mut self, host: &mut H, dropdown: E) -> Option<Vec2>
    where
        H: DropdownHost<Element = E>,
    {
        if !self.is_open(host, dropdown) {
            return None;
        }
        let instance = self.instances.get_mut(&dropdown)?;
        let rect = host.bounding_rect(instance.content);
        let shift = compute_shift(rect, instance.last_shift, host.viewport_width());
        host.set_translation(instance.content, shift);
        instance.last_shift = shift;
        tracing::debug!(?dropdown, x = shift.x, "containment shift applied");
        Some(shift)
    }

    /// Handle a click on `target`: toggle every dropdown whose toggle element contains it.
    pub fn on_click<H>(&mut self, host: &mut H, target: E) -> Affected<E>
    where
        H: DropdownHost<Element = E>,
    {
        let hits: Affected<E> = self
            .order
            .iter()
            .copied()
            .filter(|d| host.contains(self.instances[d].toggle, target))
            .collect();
        for &dropdown in &hits {
            self.toggle(host, dropdown);
        }
        hits
    }

    /// Handle a pointer going down at `point` over `target`.
    ///
    /// Closes every open dropdown that closes on outside clicks when `target` is not one of
    /// its descendants and `point` lies neither inside the dropdown nor inside its content.
    /// Pass `None` for `target` when the host has no element under the pointer.
    pub fn on_pointer_down<H>(
        &mut self,
        host: &mut H,
        target: Option<E>,
        point: Point,
    ) -> Affected<E>
    where
        H: DropdownHost<Element = E>,
    {
        let outside: Affected<E> = self
            .order
            .iter()
            .copied()
            .filter(|&d| {
                let instance = &self.instances[&d];
                instance.flags.contains(DropdownFlags::CLOSE_ON_OUTSIDE_CLICK)
                    && self.is_open(host, d)
                    && !target.is_some_and(|t| host.contains(d, t))
                    && !host.bounding_rect(d).contains(point)
                    && !host.bounding_rect(instance.content).contains(point)
            })
            .collect();
        for &dropdown in &outside {
            self.close(host, dropdown);
        }
        outside
    }

    /// Handle a key press. Escape closes every open dropdown that closes on Escape,
    /// regardless of focus.
    pub fn on_key_down<H>(&mut self, host: &mut H, key: Key) -> Affected<E>
    where
        H: DropdownHost<Element = E>,
    {
        if key != Key::Escape {
            return Affected::new();
        }
        let open: Affected<E> = self
            .order
            .iter()
            .copied()
            .filter(|&d| {
                self.instances[&d]
                    .flags
                    .contains(DropdownFlags::CLOSE_ON_ESCAPE)
                    && self.is_open(host, d)
            })
            .collect();
        for &dropdown in &open {
            self.close(host, dropdown);
        }
        open
    }

    /// Record a viewport resize at `now` (milliseconds).
    ///
    /// Containment is deferred until [`on_tick`](Self::on_tick) observes a quiet window of
    /// [`ControllerConfig::resize_delay`] after the last resize.
    pub fn on_resize(&mut self, now: u64) {
        for instance in self.instances.values_mut() {
            if instance.flags.contains(DropdownFlags::KEEP_IN_VIEWPORT) {
                instance.resize.call(now, ());
            }
        }
    }

    /// Advance time to `now`, running containment for dropdowns whose resize debounce fired.
    ///
    /// Returns the dropdowns whose content was adjusted. Closed dropdowns consume their
    /// pending resize without moving.
    pub fn on_tick<H>(&mut self, host: &mut H, now: u64) -> Affected<E>
    where
        H: DropdownHost<Element = E>,
    {
        let due: Affected<E> = self
            .order
            .iter()
            .copied()
            .filter(|d| {
                self.instances
                    .get_mut(d)
                    .is_some_and(|i| i.resize.poll(now).is_some())
            })
            .collect();
        due.into_iter()
            .filter(|&d| self.keep_in_viewport(host, d).is_some())
            .collect()
    }

    /// Earliest time at which [`on_tick`](Self::on_tick) has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        self.instances
            .values()
            .filter_map(|i| i.resize.deadline())
            .min()
    }
}
