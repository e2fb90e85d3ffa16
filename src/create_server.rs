use crate::{
    server::{respond, respond_json, Message},
    Codec, Configuration, Decoder, Encoder, Server,
};
use hyper::{Body, Response, StatusCode};
use serde::Serialize;
use std::collections::HashMap;

macro_rules! unwrap {
    ( $x:expr ) => {{
        match $x {
            Ok(result) => result,
            Err(response) => return response,
        }
    }};
}

#[derive(Serialize)]
struct CodecDescription {
    name: &'static str,
    chunk_local: bool,
}

#[derive(Serialize)]
struct Encoded {
    codec: &'static str,
    output: String,
}

fn parse_codec(parameters: &HashMap<String, String>) -> Result<Codec, Response<Body>> {
    let name = parameters.get("codec").map(String::as_str).unwrap_or_default();
    name.parse::<Codec>()
        .map_err(|error| Message::respond(StatusCode::NOT_FOUND, error.to_string()))
}

fn list_codecs() -> Response<Body> {
    let codecs: Vec<_> = Codec::ALL
        .iter()
        .map(|codec| CodecDescription {
            name: codec.name(),
            chunk_local: codec.is_chunk_local(),
        })
        .collect();
    respond_json(StatusCode::OK, &codecs)
}

fn check_size(codec: Codec, body: &[u8], max_positional_size: usize) -> Result<(), Response<Body>> {
    if !codec.is_chunk_local() && body.len() > max_positional_size {
        return Err(Message::respond(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Body larger than {} bytes for {}", max_positional_size, codec),
        ));
    }
    Ok(())
}

/// Runs a codec call on the blocking thread pool.
async fn run_blocking(task: impl FnOnce() -> Response<Body> + Send + 'static) -> Response<Body> {
    match tokio::task::spawn_blocking(task).await {
        Ok(response) => response,
        Err(error) => Message::respond(StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
    }
}

fn encode(codec: Codec, body: Vec<u8>) -> Response<Body> {
    let encoder = Encoder::from_bytes(body).encode(codec);
    let output = unwrap!(encoder
        .into_result()
        .map_err(|error| Message::respond(StatusCode::BAD_REQUEST, error.to_string())));
    respond_json(
        StatusCode::OK,
        &Encoded {
            codec: codec.name(),
            output: String::from_utf8_lossy(&output).into_owned(),
        },
    )
}

fn decode(codec: Codec, body: Vec<u8>) -> Response<Body> {
    let decoder = Decoder::from_bytes(body).decode(codec);
    let output = unwrap!(decoder
        .into_result()
        .map_err(|error| Message::respond(StatusCode::BAD_REQUEST, error.to_string())));
    respond(StatusCode::OK, "application/octet-stream", output)
}

pub fn create_server(configuration: &Configuration) -> Result<Server, regex::Error> {
    let mut server = Server::new(configuration.max_body_size());
    let max_positional_size = configuration.max_positional_size();

    server.get("/codecs", |_parameters, _body| async move { list_codecs() })?;

    server.post("/encode/{codec}", move |parameters, body| async move {
        let codec = unwrap!(parse_codec(&parameters));
        unwrap!(check_size(codec, &body, max_positional_size));
        run_blocking(move || encode(codec, body)).await
    })?;

    server.post("/decode/{codec}", move |parameters, body| async move {
        let codec = unwrap!(parse_codec(&parameters));
        unwrap!(check_size(codec, &body, max_positional_size));
        run_blocking(move || decode(codec, body)).await
    })?;

    Ok(server)
}
