//! Root query resolvers.
//!
//! Each resolver is a pure delegation: it forwards its arguments, the
//! request context, and the requested field shape to the translator and
//! deserializes the pre-shaped rows into the declared types. No
//! filtering, sorting, or reshaping happens here, and translator errors
//! propagate unchanged into the response's error list.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use tagdex_graph::{GraphQuery, Page, QueryTranslator};

use crate::context::RequestContext;
use crate::selection::current_selection;
use crate::types::{Hashtag, Tweet};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Hashtags matching a tag, with related tweets per the requested
    /// fields.
    async fn hashtag(
        &self,
        ctx: &Context<'_>,
        tag: String,
        first: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Hashtag>> {
        let query = GraphQuery::HashtagByTag {
            tag,
            page: Page { first, offset },
        };
        let rows = delegate(ctx, &query).await?;
        Ok(serde_json::from_value(rows)?)
    }

    /// Tweets whose text matches a full-text search expression.
    async fn tweets_by_text(
        &self,
        ctx: &Context<'_>,
        search: String,
        first: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Tweet>> {
        let query = GraphQuery::TweetsByText {
            search,
            page: Page { first, offset },
        };
        let rows = delegate(ctx, &query).await?;
        Ok(serde_json::from_value(rows)?)
    }
}

async fn delegate(ctx: &Context<'_>, query: &GraphQuery) -> Result<serde_json::Value> {
    let translator = ctx.data::<Arc<dyn QueryTranslator>>()?;
    let request = ctx.data::<RequestContext>()?;
    let selection = current_selection(ctx);
    Ok(translator.execute(request.client(), query, &selection).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_schema, create_context};
    use async_graphql::Request;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use tagdex_graph::{GraphClient, GraphConfig, Selection, SharedGraph};

    /// Translator double: records what it is asked for, returns a fixture.
    struct StubTranslator {
        rows: Value,
        seen: Mutex<Vec<(GraphQuery, Selection)>>,
    }

    impl StubTranslator {
        fn returning(rows: Value) -> Arc<Self> {
            Arc::new(Self {
                rows,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl QueryTranslator for StubTranslator {
        async fn execute(
            &self,
            _client: &GraphClient,
            query: &GraphQuery,
            selection: &Selection,
        ) -> anyhow::Result<Value> {
            self.seen
                .lock()
                .unwrap()
                .push((query.clone(), selection.clone()));
            Ok(self.rows.clone())
        }
    }

    struct FailingTranslator;

    #[async_trait]
    impl QueryTranslator for FailingTranslator {
        async fn execute(
            &self,
            _client: &GraphClient,
            _query: &GraphQuery,
            _selection: &Selection,
        ) -> anyhow::Result<Value> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    // Pool creation is lazy; no database is touched unless a query runs.
    async fn request_context() -> RequestContext {
        let shared = SharedGraph::new();
        create_context(&shared, &GraphConfig::default())
            .await
            .unwrap()
    }

    fn politics_fixture() -> Value {
        json!([{
            "tag": "politics",
            "tweets": [
                {
                    "text": "first archived tweet",
                    "author": { "screenName": "abc" },
                    "hashtags": [{ "tag": "politics" }],
                    "links": [{
                        "url": "http://example.com/a",
                        "archivedUrl": "http://archive.example/a"
                    }]
                },
                {
                    "text": "second archived tweet",
                    "author": { "screenName": "def" },
                    "hashtags": [{ "tag": "politics" }],
                    "links": []
                }
            ]
        }])
    }

    #[tokio::test]
    async fn test_hashtag_returns_fixture_tweets() {
        let translator = StubTranslator::returning(politics_fixture());
        let schema = build_schema(translator.clone());

        let query = r#"{
            hashtag(tag: "politics", first: 5) {
                tag
                tweets {
                    text
                    author { screenName }
                    hashtags { tag }
                    links { url archivedUrl }
                }
            }
        }"#;
        let response = schema
            .execute(Request::new(query).data(request_context().await))
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        let tweets = &data["hashtag"][0]["tweets"];
        assert_eq!(tweets.as_array().unwrap().len(), 2);
        assert_eq!(tweets[0]["text"], "first archived tweet");
        assert_eq!(tweets[0]["author"]["screenName"], "abc");
        assert_eq!(tweets[0]["hashtags"][0]["tag"], "politics");
        assert_eq!(
            tweets[0]["links"][0]["archivedUrl"],
            "http://archive.example/a"
        );
        assert_eq!(tweets[1]["links"], json!([]));

        let seen = translator.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].0,
            GraphQuery::HashtagByTag {
                tag: "politics".to_string(),
                page: Page {
                    first: Some(5),
                    offset: None,
                },
            }
        );
    }

    #[tokio::test]
    async fn test_selection_is_honored_exactly() {
        let translator = StubTranslator::returning(json!([{ "tag": "politics" }]));
        let schema = build_schema(translator.clone());

        let response = schema
            .execute(
                Request::new(r#"{ hashtag(tag: "politics") { tag } }"#)
                    .data(request_context().await),
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        let hashtags = data["hashtag"].as_array().unwrap();
        assert_eq!(hashtags.len(), 1);
        // Only the requested field comes back, never `tweets`.
        assert_eq!(hashtags[0], json!({ "tag": "politics" }));

        // And only the requested field reached the translator.
        let seen = translator.seen.lock().unwrap();
        assert_eq!(seen[0].1, Selection::of_leaves(&["tag"]));
    }

    #[tokio::test]
    async fn test_empty_tweet_list_is_data_not_error() {
        let translator = StubTranslator::returning(json!([{ "tag": "nothing", "tweets": [] }]));
        let schema = build_schema(translator);

        let response = schema
            .execute(
                Request::new(r#"{ hashtag(tag: "nothing") { tag tweets { text } } }"#)
                    .data(request_context().await),
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["hashtag"][0]["tweets"], json!([]));
    }

    #[tokio::test]
    async fn test_translator_errors_surface_in_error_list() {
        let schema = build_schema(Arc::new(FailingTranslator));

        let response = schema
            .execute(
                Request::new(r#"{ hashtag(tag: "politics") { tag } }"#)
                    .data(request_context().await),
            )
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_tweets_by_text_delegates_search() {
        let translator = StubTranslator::returning(json!([{ "text": "hello world" }]));
        let schema = build_schema(translator.clone());

        let response = schema
            .execute(
                Request::new(r#"{ tweetsByText(search: "hello") { text } }"#)
                    .data(request_context().await),
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["tweetsByText"][0]["text"], "hello world");

        let seen = translator.seen.lock().unwrap();
        assert_eq!(
            seen[0].0,
            GraphQuery::TweetsByText {
                search: "hello".to_string(),
                page: Page::default(),
            }
        );
    }
}
