//! Wire DTOs for the activity REST API.
//!
//! DESIGN
//! ======
//! `GET /activities` returns a JSON object keyed by activity name. The order of
//! that object is the order the server wants cards rendered in, so it is
//! decoded into an ordered `Vec` rather than a map.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// One activity record as served under its name key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    /// Roster capacity.
    pub max_participants: u32,
    /// Registered participant emails in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

/// An activity paired with its unique name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

/// Ordered decode of the `GET /activities` response object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityList(pub Vec<Activity>);

impl ActivityList {
    pub fn into_inner(self) -> Vec<Activity> {
        self.0
    }
}

impl<'de> Deserialize<'de> for ActivityList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivityListVisitor;

        impl<'de> Visitor<'de> for ActivityListVisitor {
            type Value = ActivityList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activity records")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
                    items.push(Activity { name, details });
                }
                Ok(ActivityList(items))
            }
        }

        deserializer.deserialize_map(ActivityListVisitor)
    }
}

/// Body of a signup/unregister response. Success carries `message`, rejection
/// carries `detail`; either may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MutationBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Result of a signup/unregister call that reached the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    /// 2xx status.
    Accepted { message: Option<String> },
    /// Any other status.
    Rejected { status: u16, detail: Option<String> },
}
