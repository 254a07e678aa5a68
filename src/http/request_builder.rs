use super::{
    client::Client,
    request::{Body, HttpRequest, Method},
    response::Response,
    Error,
};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};

const USER_AGENT_VALUE: &str = "reviewrelay";
const GITHUB_API_VERSION: &str = "2022-11-28";

pub trait RequestType {}
pub struct Get;
pub struct Post;
pub struct Put;
pub struct Delete;

impl RequestType for Get {}
impl RequestType for Post {}
impl RequestType for Put {}
impl RequestType for Delete {}

pub struct InitBuilder {}

impl InitBuilder {
    pub fn get(client: Client, url: impl Into<String>) -> RequestBuilder<Get> {
        RequestBuilder::new(client, Method::Get, url)
    }

    pub fn post(client: Client, url: impl Into<String>) -> RequestBuilder<Post> {
        RequestBuilder::new(client, Method::Post, url)
    }

    pub fn put(client: Client, url: impl Into<String>) -> RequestBuilder<Put> {
        RequestBuilder::new(client, Method::Put, url)
    }

    pub fn delete(client: Client, url: impl Into<String>) -> RequestBuilder<Delete> {
        RequestBuilder::new(client, Method::Delete, url)
    }
}

pub struct RequestBuilder<T: RequestType> {
    _marker: std::marker::PhantomData<T>,
    client: Client,
    pub builder: HttpRequest,
}

impl<T> RequestBuilder<T>
where
    T: RequestType,
{
    fn new(client: Client, method: Method, url: impl Into<String>) -> Self {
        RequestBuilder {
            _marker: std::marker::PhantomData,
            client,
            builder: HttpRequest::new(method, url),
        }
    }

    pub async fn send(self) -> Result<Response, Error> {
        self.client.send(self.builder).await
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder.query(key, value);
        self
    }

    pub fn github_headers(mut self, token: &str) -> Self {
        self.builder
            .bearer_auth(token)
            .header(ACCEPT.as_str(), "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT.as_str(), USER_AGENT_VALUE);

        self
    }
}

impl RequestBuilder<Post> {
    pub fn body(mut self, body: Body) -> Self {
        self.builder
            .header(CONTENT_TYPE.as_str(), "application/json")
            .body(body);
        self
    }
}

impl RequestBuilder<Put> {
    pub fn body(mut self, body: Body) -> Self {
        self.builder
            .header(CONTENT_TYPE.as_str(), "application/json")
            .body(body);
        self
    }
}
