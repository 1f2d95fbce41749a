use std::net::SocketAddr;

use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

fn default_listen() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 4000))
}

fn default_path() -> String {
    "/".to_string()
}

/// Configuration options pertaining to the http server component.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields, default)]
pub struct Server {
    /// The socket address and port to listen on. Defaults to 127.0.0.1:4000
    #[schemars(with = "String")]
    pub(crate) listen: SocketAddr,

    /// The HTTP path on which GraphQL requests will be served. Defaults to "/"
    pub(crate) path: String,

    /// Serve the GraphiQL IDE on GET requests to the GraphQL path. Defaults to true
    pub(crate) playground: bool,
}

#[buildstructor::buildstructor]
impl Server {
    #[builder]
    pub fn new(listen: Option<SocketAddr>, path: Option<String>, playground: Option<bool>) -> Self {
        Self {
            listen: listen.unwrap_or_else(default_listen),
            path: path.unwrap_or_else(default_path),
            playground: playground.unwrap_or(true),
        }
    }

    pub fn listen(&self) -> SocketAddr {
        self.listen
    }
}

impl Default for Server {
    fn default() -> Self {
        Self::builder().build()
    }
}
