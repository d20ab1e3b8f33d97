//! Numeric identifiers for groups, posts and comments.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database identifier.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// The raw identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_numeric_id!(
    /// Identifier of a [`Group`](crate::domain::Group).
    GroupId
);
define_numeric_id!(
    /// Identifier of a [`Post`](crate::domain::Post).
    PostId
);
define_numeric_id!(
    /// Identifier of a [`Comment`](crate::domain::Comment).
    CommentId
);
