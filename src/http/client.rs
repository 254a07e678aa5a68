use super::{
    request::{Body, HttpRequest},
    request_builder::{Delete, Get, InitBuilder, Post, Put, RequestBuilder},
    response::Response,
    Error,
};

/// Shared outbound client. Cloning is cheap and reuses the connection pool.
#[derive(Clone, Debug)]
pub struct Client(reqwest::Client);

impl Client {
    pub fn new() -> Client {
        Client(reqwest::Client::new())
    }

    pub async fn send(&self, request: HttpRequest) -> Result<Response, Error> {
        let mut builder = self.0.request(request.method.into(), &request.url);

        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = request.body {
            builder = match body {
                Body::Json(json) => builder.json(&json),
            }
        }

        let network_error = |cause| Error::Network {
            url: request.url.to_owned(),
            cause,
        };

        let response = builder.send().await.map_err(network_error)?;
        let status = response.status().as_u16();
        let payload = response.text().await.map_err(network_error)?;

        let response = Response::new(status, payload);
        log::debug!("{:?} {} -> {}", request.method, request.url, response.status());

        Ok(response)
    }
}

pub trait ClientRequestBuilder {
    fn get(&self, url: impl Into<String>) -> RequestBuilder<Get>;
    fn post(&self, url: impl Into<String>) -> RequestBuilder<Post>;
    fn put(&self, url: impl Into<String>) -> RequestBuilder<Put>;
    fn delete(&self, url: impl Into<String>) -> RequestBuilder<Delete>;
}

impl ClientRequestBuilder for Client {
    fn get(&self, url: impl Into<String>) -> RequestBuilder<Get> {
        InitBuilder::get(self.clone(), url)
    }

    fn post(&self, url: impl Into<String>) -> RequestBuilder<Post> {
        InitBuilder::post(self.clone(), url)
    }

    fn put(&self, url: impl Into<String>) -> RequestBuilder<Put> {
        InitBuilder::put(self.clone(), url)
    }

    fn delete(&self, url: impl Into<String>) -> RequestBuilder<Delete> {
        InitBuilder::delete(self.clone(), url)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
