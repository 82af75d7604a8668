// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup failures.

use crate::attributes;

/// Reasons a dropdown could not be set up.
///
/// Setup is all-or-nothing: on error the dropdown is left untouched and unregistered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// No descendant carries the toggle marker.
    #[error("dropdown has no descendant marked `{}`", attributes::TOGGLE)]
    MissingToggle,
    /// No descendant carries the content marker.
    #[error("dropdown has no descendant marked `{}`", attributes::CONTENT)]
    MissingContent,
}
