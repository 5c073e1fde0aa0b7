//! GraphQL object types for the tweet archive.
//!
//! Every field is optional: instances are hydrated only as deep as the
//! requested selection, and the engine serializes exactly the requested
//! fields back out.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// A hashtag with the tweets that carry it.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Hashtag {
    pub tag: Option<String>,
    pub archived_url: Option<String>,
    pub tweets: Option<Vec<Tweet>>,
}

/// An archived tweet.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    pub text: Option<String>,
    pub created_at: Option<String>,
    pub author: Option<User>,
    pub hashtags: Option<Vec<Hashtag>>,
    pub links: Option<Vec<Link>>,
}

/// The account that posted a tweet.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub screen_name: Option<String>,
    pub name: Option<String>,
}

/// A link shared in a tweet, with its archived copy.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub url: Option<String>,
    pub archived_url: Option<String>,
}
