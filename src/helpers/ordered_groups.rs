//! Serde adapter keeping `{category: [messages]}` maps in document order.

use std::fmt;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserializer, Serializer};
use crate::structs::pattern_catalog::MessageGroup;

pub fn serialize<S>(groups: &[MessageGroup], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(groups.len()))?;
    for group in groups {
        map.serialize_entry(&group.category, &group.messages)?;
    }
    map.end()
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<MessageGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(GroupsVisitor)
}

struct GroupsVisitor;

impl<'de> Visitor<'de> for GroupsVisitor {
    type Value = Vec<MessageGroup>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of category names to message lists")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut groups: Vec<MessageGroup> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((category, messages)) = access.next_entry::<String, Vec<String>>()? {
            // a repeated key extends the earlier group
            if let Some(existing) = groups.iter_mut().find(|g| g.category == category) {
                existing.messages.extend(messages);
            } else {
                groups.push(MessageGroup { category, messages });
            }
        }
        Ok(groups)
    }
}
