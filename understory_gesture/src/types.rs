// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Identifier of a touch pointer, stable from its press until its release.
///
/// Hosts map their platform pointer ids onto this; the recognizers only compare
/// ids for equality.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);
