//! Field table mapping GraphQL wire names to graph properties and
//! relationships.

/// Graph entities addressable from the GraphQL schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Hashtag,
    Tweet,
    User,
    Link,
}

/// How a requested field resolves against the graph.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A node property, possibly named differently than the wire field.
    Property(&'static str),
    /// A relationship traversal into another entity.
    Relation(Relation),
}

/// A relationship pattern. `{src}` and `{tgt}` are replaced with the
/// Cypher variables of the parent and child scope.
#[derive(Debug, Clone, Copy)]
pub struct Relation {
    pub pattern: &'static str,
    pub target: Entity,
    /// To-one relations project `head(...)` instead of a list.
    pub single: bool,
}

impl Entity {
    pub fn name(&self) -> &'static str {
        match self {
            Entity::Hashtag => "Hashtag",
            Entity::Tweet => "Tweet",
            Entity::User => "User",
            Entity::Link => "Link",
        }
    }

    /// Resolve a wire field name against this entity.
    pub fn field(&self, field: &str) -> Option<FieldKind> {
        use FieldKind::{Property, Relation as Rel};

        match (self, field) {
            (Entity::Hashtag, "tag") => Some(Property("tag")),
            (Entity::Hashtag, "archivedUrl") => Some(Property("archived_url")),
            (Entity::Hashtag, "tweets") => Some(Rel(Relation {
                pattern: "({src})<-[:HAS_TAG]-({tgt}:Tweet)",
                target: Entity::Tweet,
                single: false,
            })),

            (Entity::Tweet, "text") => Some(Property("text")),
            (Entity::Tweet, "createdAt") => Some(Property("created_at")),
            (Entity::Tweet, "author") => Some(Rel(Relation {
                pattern: "({src})<-[:POSTED]-({tgt}:User)",
                target: Entity::User,
                single: true,
            })),
            (Entity::Tweet, "hashtags") => Some(Rel(Relation {
                pattern: "({src})-[:HAS_TAG]->({tgt}:Hashtag)",
                target: Entity::Hashtag,
                single: false,
            })),
            (Entity::Tweet, "links") => Some(Rel(Relation {
                pattern: "({src})-[:HAS_LINK]->({tgt}:Link)",
                target: Entity::Link,
                single: false,
            })),

            (Entity::User, "screenName") => Some(Property("screen_name")),
            (Entity::User, "name") => Some(Property("name")),

            (Entity::Link, "url") => Some(Property("url")),
            (Entity::Link, "archivedUrl") => Some(Property("archived_url")),

            _ => None,
        }
    }
}
