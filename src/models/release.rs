use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::error::ParseVersionError;

/// The versioning timeline: a known release on a known date, plus the fixed
/// cadence between releases.
///
/// Passed explicitly wherever the current release matters, so nothing in the
/// crate depends on the wall clock.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseTimeline {
    pub epoch_date: NaiveDate,
    pub epoch_release: u32,
    pub cadence: Duration,
}

impl Default for ReleaseTimeline {
    /// Rust's timeline: 1.5 shipped on 2015-12-11, a release every six weeks.
    fn default() -> Self {
        Self {
            epoch_date: NaiveDate::from_ymd_opt(2015, 12, 11).expect("valid epoch date"),
            epoch_release: 5,
            cadence: Duration::weeks(6),
        }
    }
}

impl ReleaseTimeline {
    /// The stable release current on `date`: the epoch release plus one per
    /// full cadence elapsed since the epoch date.
    ///
    /// Dates before the epoch clamp to the epoch release, and a sub-day
    /// cadence counts as one release per day.
    pub fn stable_at(&self, date: NaiveDate) -> RustcVersion {
        let cadence_days = self.cadence.num_days().max(1);
        let releases = ((date - self.epoch_date).num_days() / cadence_days).max(0);
        RustcVersion {
            major: 1,
            minor: self.epoch_release + releases as u32,
        }
    }
}

/// A `major.minor` release version.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct RustcVersion {
    pub major: u32,
    pub minor: u32,
}

impl RustcVersion {
    /// The beta release relative to `self` as stable. Always stable + 1.
    pub fn beta(self) -> RustcVersion {
        RustcVersion {
            minor: self.minor + 1,
            ..self
        }
    }
}

impl fmt::Display for RustcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for RustcVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| ParseVersionError::MissingSeparator(s.to_string()))?;
        let parse_part = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| ParseVersionError::NonNumeric(s.to_string()))
        };
        Ok(RustcVersion {
            major: parse_part(major)?,
            minor: parse_part(minor)?,
        })
    }
}

/// The release channel a stabilization version lands in, relative to the
/// current stable release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Stable,
    Beta,
    Nightly,
}

impl Channel {
    /// Classify `target` against the current `stable` release.
    ///
    /// Anything at or below stable is `Stable`; there is no lower bound, a
    /// long-stabilized version far below stable still classifies as stable.
    /// Exactly stable + 1 is `Beta`; everything above that is `Nightly`.
    pub fn classify(target: RustcVersion, stable: RustcVersion) -> Channel {
        if target.minor <= stable.minor {
            Channel::Stable
        } else if target.minor == stable.minor + 1 {
            Channel::Beta
        } else {
            Channel::Nightly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Beta => "beta",
            Channel::Nightly => "nightly",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
