//! Domain models for statusboard.
//!
//! # Core Concepts
//!
//! - [`FeatureRecord`]: One line of the status page. Immutable once loaded;
//!   a record has no identity beyond its position in its table.
//! - [`ReleaseTimeline`]: The versioning timeline (epoch date, epoch release
//!   number, cadence) from which the current stable release is computed.
//!   Always passed explicitly so classification is deterministic in tests.
//! - [`Channel`]: Stable/Beta/Nightly, derived from a stabilization version
//!   and the current stable release. Never stored.
//! - [`RfcRef`]: A parsed RFC reference, resolving to either an unmerged
//!   proposal (pull request) or a merged proposal's published page.

mod feature;
mod release;
mod rfc;

pub use feature::*;
pub use release::*;
pub use rfc::*;
