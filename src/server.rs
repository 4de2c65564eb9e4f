//! HTTP front for the GraphQL schema.

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::config::BrambleConfig;
use crate::error::Result;
use crate::graphql::{BrambleSchema, build_schema};
use crate::store::Store;

/// Build the router and serve until the process is stopped.
pub async fn serve(config: &BrambleConfig, store: Store) -> Result<()> {
    let schema = build_schema(store);
    let app = router(schema);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("GraphQL server listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

fn router(schema: BrambleSchema) -> Router {
    Router::new()
        .route("/", get(playground).post(graphql_handler))
        .with_state(schema)
}

async fn graphql_handler(
    State(schema): State<BrambleSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/")))
}
