//! Strongly-typed ID newtypes for domain entities.
//!
//! All tables use `BIGSERIAL` keys, so every ID wraps an `i64`. The wrappers keep a
//! `CollegeId` from being passed where a `UserId` is expected.
//!
//! ```ignore
//! fn find_user(id: UserId) { /* ... */ }
//!
//! find_user(UserId::from(1));       // OK
//! // find_user(CollegeId::from(1)); // Compile error
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize, sqlx::Type, ToSchema,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    /// ID of a row in `users`.
    UserId
);

define_id!(
    /// ID of a row in `colleges`.
    CollegeId
);

define_id!(
    /// ID of a row in `attendances`.
    AttendanceId
);
