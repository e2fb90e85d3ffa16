use hyper::{
    body::HttpBody,
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, StatusCode,
};
use log::{info, warn};
use regex::Regex;
use std::{collections::HashMap, convert::Infallible, future::Future, net::SocketAddr, pin::Pin, sync::Arc};

/// A path template such as `/encode/{codec}`; each `{name}` matches one segment.
pub struct DynamicUri {
    regex: Regex,
    parameters: HashMap<String, usize>,
}

impl DynamicUri {
    pub fn new(uri: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(r"\{([^\{]*)\}")?;
        let mut offset = 0;
        let mut chunks = Vec::new();
        let mut parameters = HashMap::new();
        for (index, occurence) in regex.find_iter(uri).enumerate() {
            let range = occurence.range();
            let name = &uri[range.start + 1..range.end - 1];
            parameters.insert(name.to_string(), index + 1);
            chunks.push(regex::escape(&uri[offset..range.start]));
            chunks.push("([^/]*)".to_string());
            offset = range.end;
        }
        chunks.push(regex::escape(&uri[offset..]));
        let regex = Regex::new(&format!("^{}$", chunks.join("")))?;
        Ok(Self { regex, parameters })
    }

    pub fn check(&self, uri: &str) -> Option<HashMap<String, String>> {
        let captures = self.regex.captures(uri)?;
        Some(
            self.parameters
                .iter()
                .map(|(name, &index)| (name.clone(), captures[index].to_string()))
                .collect(),
        )
    }
}

type BoxedResponseFuture = Pin<Box<dyn Send + Future<Output = Response<Body>>>>;
type BoxedHandler = Box<dyn Fn(HashMap<String, String>, Vec<u8>) -> BoxedResponseFuture + Send + Sync>;

struct Route {
    method: Method,
    dynamic_uri: DynamicUri,
    handler: BoxedHandler,
}

impl Route {
    fn check(&self, request: &Request<Body>) -> Option<HashMap<String, String>> {
        if request.method() == self.method {
            self.dynamic_uri.check(request.uri().path())
        } else {
            None
        }
    }
}

pub fn respond(status: StatusCode, content_type: &str, body: impl Into<Body>) -> Response<Body> {
    let mut response = Response::new(body.into());
    *response.status_mut() = status;
    if let Ok(value) = content_type.parse() {
        response.headers_mut().insert(hyper::header::CONTENT_TYPE, value);
    }
    response
}

pub fn respond_json(status: StatusCode, value: &impl serde::Serialize) -> Response<Body> {
    match serde_json::to_string(value) {
        Ok(json) => respond(status, "application/json", json),
        Err(error) => respond(StatusCode::INTERNAL_SERVER_ERROR, "text/plain", error.to_string()),
    }
}

#[derive(serde::Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn respond(status: StatusCode, message: impl Into<String>) -> Response<Body> {
        respond_json(status, &Self { message: message.into() })
    }
}

pub struct Server {
    routes: Vec<Route>,
    max_body_size: usize,
}

impl Server {
    pub fn new(max_body_size: usize) -> Self {
        Self {
            routes: Vec::new(),
            max_body_size,
        }
    }

    fn route<H, F>(&mut self, method: Method, uri: &str, handler: H) -> Result<(), regex::Error>
    where
        H: 'static + Fn(HashMap<String, String>, Vec<u8>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.routes.push(Route {
            method,
            dynamic_uri: DynamicUri::new(uri)?,
            handler: Box::new(move |parameters, body| Box::pin(handler(parameters, body))),
        });
        Ok(())
    }

    pub fn get<H, F>(&mut self, uri: &str, handler: H) -> Result<(), regex::Error>
    where
        H: 'static + Fn(HashMap<String, String>, Vec<u8>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.route(Method::GET, uri, handler)
    }

    pub fn post<H, F>(&mut self, uri: &str, handler: H) -> Result<(), regex::Error>
    where
        H: 'static + Fn(HashMap<String, String>, Vec<u8>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.route(Method::POST, uri, handler)
    }

    async fn read_body(&self, request: &mut Request<Body>) -> Result<Vec<u8>, Response<Body>> {
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = request.body_mut().data().await {
            let chunk = chunk.map_err(|error| Message::respond(StatusCode::BAD_REQUEST, error.to_string()))?;
            if body.len() + chunk.len() > self.max_body_size {
                return Err(Message::respond(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    format!("Body larger than {} bytes", self.max_body_size),
                ));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }

    pub async fn handle(&self, mut request: Request<Body>) -> Response<Body> {
        let body = match self.read_body(&mut request).await {
            Ok(body) => body,
            Err(response) => return response,
        };
        let response = match self.routes.iter().find_map(|route| Some((route, route.check(&request)?))) {
            Some((route, parameters)) => (route.handler)(parameters, body).await,
            None => Message::respond(StatusCode::NOT_FOUND, "Not Found"),
        };
        info!("{} {} {}", request.method(), request.uri(), response.status().as_u16());
        response
    }

    pub async fn run(self, address: SocketAddr) -> Result<(), hyper::Error> {
        let server = Arc::new(self);
        let make_service = make_service_fn(|_| {
            let server = server.clone();
            async {
                Ok::<_, Infallible>(service_fn(move |request: Request<Body>| {
                    let server = server.clone();
                    async move { Ok::<_, Infallible>(server.handle(request).await) }
                }))
            }
        });
        let bound = hyper::Server::try_bind(&address)?;
        info!("listening on {}", address);
        bound.serve(make_service).await.map_err(|error| {
            warn!("server stopped: {}", error);
            error
        })
    }
}
