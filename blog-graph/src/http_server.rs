//! Axum http server serving the GraphQL schema.
use std::future::Future;
use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post_service;
use axum::Router;
use tokio::net::TcpListener;

use crate::configuration::Server;
use crate::schema::BlogSchema;

/// Builds the axum router for `schema`.
///
/// POST requests to the configured path execute GraphQL; GET requests serve
/// GraphiQL when the playground is enabled.
pub(crate) fn make_router(configuration: &Server, schema: BlogSchema) -> Router {
    let path = configuration.path.as_str();
    let graphql = GraphQL::new(schema);
    let route = if configuration.playground {
        let page = GraphiQLSource::build().endpoint(path).finish();
        get(move || async move { Html(page) }).post_service(graphql)
    } else {
        post_service(graphql)
    };
    Router::new().route(path, route)
}

/// A bound listener, ready to serve.
pub struct HttpServer {
    listener: TcpListener,
    router: Router,
}

impl HttpServer {
    pub async fn bind(configuration: &Server, schema: BlogSchema) -> std::io::Result<Self> {
        let listener = TcpListener::bind(configuration.listen()).await?;
        Ok(Self {
            listener,
            router: make_router(configuration, schema),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until `shutdown` resolves, then drains in-flight
    /// connections.
    pub async fn serve<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::header::CONTENT_TYPE;
    use reqwest::Client;
    use reqwest::StatusCode;
    use serde_json::json;
    use serde_json::Value;
    use tokio::sync::oneshot;

    use super::*;
    use crate::schema::build_schema;
    use crate::store::EntityStore;

    async fn start(configuration: Server) -> (SocketAddr, oneshot::Sender<()>) {
        let schema = build_schema(Arc::new(EntityStore::seeded()));
        let server = HttpServer::bind(&configuration, schema).await.unwrap();
        let addr = server.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(server.serve(async move {
            let _ = rx.await;
        }));
        (addr, tx)
    }

    fn any_port() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 0))
    }

    #[tokio::test]
    async fn it_executes_graphql_over_http() {
        let (addr, shutdown) = start(
            Server::builder()
                .listen(any_port())
                .path("/graphql")
                .build(),
        )
        .await;

        let response = Client::new()
            .post(format!("http://{addr}/graphql"))
            .json(&json!({ "query": "{ users(query: \"mark\") { id name } }" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({ "data": { "users": [{ "id": "2", "name": "Mark" }] } })
        );
        shutdown.send(()).unwrap();
    }

    #[tokio::test]
    async fn it_reports_mutation_errors_over_http() {
        let (addr, shutdown) = start(Server::builder().listen(any_port()).build()).await;

        let response = Client::new()
            .post(format!("http://{addr}/"))
            .json(&json!({
                "query": "mutation { createUser(data: { name: \"Steve\", email: \"steve.jobs@apple.com\" }) { id } }"
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.json::<Value>().await.unwrap();
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["errors"][0]["message"], "email taken");
        assert_eq!(body["errors"][0]["extensions"]["code"], "CONFLICT");
        shutdown.send(()).unwrap();
    }

    #[tokio::test]
    async fn it_serves_the_playground_on_get() {
        let (addr, shutdown) = start(Server::builder().listen(any_port()).build()).await;

        let response = Client::new()
            .get(format!("http://{addr}/"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        assert!(content_type
            .as_ref()
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("text/html")));
        assert!(response.text().await.unwrap().contains("graphiql"));
        shutdown.send(()).unwrap();
    }

    #[tokio::test]
    async fn it_does_not_serve_the_playground_when_disabled() {
        let (addr, shutdown) = start(
            Server::builder()
                .listen(any_port())
                .playground(false)
                .build(),
        )
        .await;

        let response = Client::new()
            .get(format!("http://{addr}/"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        shutdown.send(()).unwrap();
    }
}
