// Copyright 2026 the Weekgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Failures of an explicit period-load request.
///
/// A failed load is fatal to that load only; the viewport stays fully
/// interactive and the previously loaded events remain on screen.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// A load was due but no [`EventLoader`](crate::EventLoader) is set.
    #[error("no period loader is configured")]
    NoLoader,
}
