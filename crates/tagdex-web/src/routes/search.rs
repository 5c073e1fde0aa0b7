//! Server-rendered hashtag search page.
//!
//! The page is driven by HTMX: the results region re-fetches `/search`
//! fragments, so rendering stays a pure function of the view state.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tagdex_gql::create_context;

use crate::state::AppState;
use crate::view::{SearchInput, TweetListState};

/// Tag queried when the page first loads, mirroring the console sample.
pub const DEFAULT_TAG: &str = "politics";

/// The fixed parameterized query issued by the search page.
const TWEET_LIST_QUERY: &str = r#"
query TweetList($tag: String!, $first: Int) {
  hashtag(tag: $tag, first: $first) {
    tag
    tweets {
      text
      author { screenName }
      hashtags { tag }
      links { url archivedUrl }
    }
  }
}
"#;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    input: SearchInput,
    state: TweetListState,
}

#[derive(Template)]
#[template(path = "partials/tweet_list.html")]
struct TweetListTemplate {
    state: TweetListState,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub tag: Option<String>,
}

/// GET / - the search page. The results region starts in the loading
/// state and fetches the first fragment on load.
pub async fn index() -> Response {
    render(IndexTemplate {
        input: SearchInput::new(DEFAULT_TAG),
        state: TweetListState::Loading,
    })
}

/// GET /search?tag=... - run the tweet-list query, render the fragment.
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let tag = params.tag.unwrap_or_else(|| DEFAULT_TAG.to_string());
    let view_state = fetch_tweets(&state, &tag).await;
    render(TweetListTemplate { state: view_state })
}

/// Execute the fixed query in-process and fold the result into a view
/// state.
async fn fetch_tweets(state: &AppState, tag: &str) -> TweetListState {
    let context = match create_context(&state.graph, &state.graph_config).await {
        Ok(context) => context,
        Err(e) => {
            tracing::error!("context creation failed: {e:#}");
            return TweetListState::Failed;
        }
    };

    let variables = async_graphql::Variables::from_json(serde_json::json!({
        "tag": tag,
        "first": 5,
    }));
    let request = async_graphql::Request::new(TWEET_LIST_QUERY)
        .variables(variables)
        .data(context);

    TweetListState::from_response(state.schema.execute(request).await)
}

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("template rendering failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
        }
    }
}
