use std::net::{IpAddr, SocketAddr};

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use crate::error::{BookshelfError, Result};

use super::schema::BookshelfSchema;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn graphql_handler(
    State(schema): State<BookshelfSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// The HTTP surface: a single `/graphql` route, GET serving the GraphiQL
/// explorer and POST executing submitted documents.
pub fn make_app(schema: BookshelfSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .with_state(schema)
}

/// Combine a bind address and port into a socket address.
///
/// The bind must be an IP literal; bare IPv6 addresses work without
/// brackets ("::1").
pub fn listen_addr(bind: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = bind
        .parse()
        .map_err(|_| BookshelfError::Config(format!("Invalid bind address: {bind}")))?;
    Ok(SocketAddr::new(ip, port))
}

/// Bind the listener and serve until the process is stopped.
pub async fn run_server(schema: BookshelfSchema, addr: SocketAddr) -> Result<()> {
    let app = make_app(schema);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "GraphQL server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
