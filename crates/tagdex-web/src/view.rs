//! View components for the search page.
//!
//! Rendering is a pure function of a tagged view state; state transitions
//! are driven by the GraphQL execution result in the route handlers.

use serde::Deserialize;

use tagdex_gql::types::{Hashtag, Link, Tweet};

/// Render branches of the tweet list.
#[derive(Debug, Clone, PartialEq)]
pub enum TweetListState {
    /// The query is still in flight.
    Loading,
    /// Execution failed; detail is logged, not rendered.
    Failed,
    /// No matching hashtag, or a hashtag with no related tweets.
    Empty,
    /// One entry per related tweet.
    Loaded(Vec<TweetView>),
}

impl TweetListState {
    /// Fold a GraphQL execution result into a render branch.
    pub fn from_response(response: async_graphql::Response) -> Self {
        if !response.errors.is_empty() {
            tracing::error!(errors = ?response.errors, "tweet list query failed");
            return Self::Failed;
        }
        match response.data.into_json() {
            Ok(data) => Self::from_data(data),
            Err(e) => {
                tracing::error!("tweet list response was not valid JSON: {e}");
                Self::Failed
            }
        }
    }

    /// Fold the `data` object of a successful execution.
    pub fn from_data(data: serde_json::Value) -> Self {
        #[derive(Deserialize)]
        struct Data {
            hashtag: Option<Vec<Hashtag>>,
        }

        let hashtags = match serde_json::from_value::<Data>(data) {
            Ok(data) => data.hashtag.unwrap_or_default(),
            Err(e) => {
                tracing::error!("tweet list data had an unexpected shape: {e}");
                return Self::Failed;
            }
        };

        let tweets = match hashtags.first().and_then(|h| h.tweets.as_ref()) {
            Some(tweets) if !tweets.is_empty() => tweets,
            _ => return Self::Empty,
        };

        Self::Loaded(tweets.iter().map(TweetView::from_tweet).collect())
    }
}

/// View model for one rendered tweet.
#[derive(Debug, Clone, PartialEq)]
pub struct TweetView {
    pub text: String,
    pub author: String,
    pub hashtags: Vec<String>,
    pub links: Vec<LinkView>,
}

/// View model for a shared link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkView {
    pub url: String,
    pub archived_url: Option<String>,
}

impl TweetView {
    fn from_tweet(tweet: &Tweet) -> Self {
        Self {
            text: tweet.text.clone().unwrap_or_default(),
            author: tweet
                .author
                .as_ref()
                .and_then(|author| author.screen_name.clone())
                .unwrap_or_default(),
            hashtags: tweet
                .hashtags
                .iter()
                .flatten()
                .filter_map(|hashtag| hashtag.tag.clone())
                .collect(),
            links: tweet
                .links
                .iter()
                .flatten()
                .map(LinkView::from_link)
                .collect(),
        }
    }
}

impl LinkView {
    fn from_link(link: &Link) -> Self {
        Self {
            url: link.url.clone().unwrap_or_default(),
            archived_url: link.archived_url.clone(),
        }
    }
}

/// Controlled input for the search form.
///
/// Holds the current text; `submit` hands it to the caller's callback
/// and does not itself trigger a query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchInput {
    value: String,
}

impl SearchInput {
    pub fn new(initial: &str) -> Self {
        Self {
            value: initial.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the held text. Called on every input change event.
    pub fn handle_change(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Invoke `on_search` with the current value.
    pub fn submit<F: FnOnce(&str)>(&self, on_search: F) {
        on_search(&self.value);
    }
}
