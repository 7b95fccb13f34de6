//! Per-caller visibility of club-owned records.
//!
//! A `Scope` is resolved once per request from the session and then asked which clubs'
//! records a collection may expose.

use crate::server::model::user::User;

/// Identity making the request.
#[derive(Debug, Clone)]
pub enum Scope {
    Anonymous,
    Member(User),
}

/// Which club-owned rows a query may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    All,
    Club(i32),
    Nothing,
}

impl Visibility {
    /// Narrows the visibility to a single club taken from the request path.
    pub fn within(self, club_id: i32) -> Self {
        match self {
            Self::All => Self::Club(club_id),
            Self::Club(id) if id == club_id => Self::Club(id),
            _ => Self::Nothing,
        }
    }

    pub fn allows(self, club_id: i32) -> bool {
        match self {
            Self::All => true,
            Self::Club(id) => id == club_id,
            Self::Nothing => false,
        }
    }
}

impl Scope {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Member(user) => Some(user),
        }
    }

    /// Club the caller manages, if any.
    pub fn club_id(&self) -> Option<i32> {
        self.user().and_then(|user| user.club_id)
    }

    /// Anonymous callers see every club so they can pick one when registering.
    pub fn clubs(&self) -> Visibility {
        match self {
            Self::Anonymous => Visibility::All,
            Self::Member(user) => user.club_id.map_or(Visibility::Nothing, Visibility::Club),
        }
    }

    /// Falls back to every form when no club can be determined for the caller.
    pub fn forms(&self) -> Visibility {
        match self.club_id() {
            Some(club_id) => Visibility::Club(club_id),
            None => Visibility::All,
        }
    }

    pub fn applicants(&self) -> Visibility {
        match self.club_id() {
            Some(club_id) => Visibility::Club(club_id),
            None => Visibility::Nothing,
        }
    }

    /// Mutations are limited to the caller's own club regardless of read visibility.
    pub fn manages(&self, club_id: i32) -> bool {
        self.club_id() == Some(club_id)
    }
}
