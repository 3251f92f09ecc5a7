// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Coarse status bucket used for marker badges and the status panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// Working: `active`, `moving`, `patrol`.
    Active,
    /// Parked: `idle`, `waiting`, `charging`.
    Idle,
    /// Needs attention: `error`, `offline`, `inactive`.
    Fault,
    /// No status or one we do not recognise.
    #[default]
    Unknown,
}

impl StatusClass {
    /// Buckets a free-form status string, ignoring case and surrounding space.
    #[must_use]
    pub fn classify(status: Option<&str>) -> Self {
        let Some(status) = status else {
            return Self::Unknown;
        };
        let status = status.trim();
        let is = |name: &str| status.eq_ignore_ascii_case(name);
        if is("active") || is("moving") || is("patrol") {
            Self::Active
        } else if is("idle") || is("waiting") || is("charging") {
            Self::Idle
        } else if is("error") || is("offline") || is("inactive") {
            Self::Fault
        } else {
            Self::Unknown
        }
    }

    /// Short lowercase name, for logs and CSS-style class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idle => "idle",
            Self::Fault => "fault",
            Self::Unknown => "unknown",
        }
    }
}
