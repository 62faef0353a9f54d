use std::collections::HashMap;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use rest_client::{Client, Method, Request, Response};
use serde::Deserialize;

#[derive(Deserialize)]
struct CreatedKey {
    api_key_id: String,
}

fn print_response(response: &Response) {
    println!("{}", response.status_code);
    println!("{}", response.body);
    println!("{:?}", response.headers);
}

/// Walks one API key through its whole lifecycle: list, create, fetch,
/// rename, replace, delete. Needs DEMO_BASE_URL; DEMO_API_KEY, when set,
/// is sent as a bearer token.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let host = std::env::var("DEMO_BASE_URL").context("DEMO_BASE_URL is not set")?;
    let endpoint = format!("{host}/v3/api_keys");

    let mut headers = HashMap::new();
    if let Ok(key) = std::env::var("DEMO_API_KEY") {
        headers.insert("Authorization".to_string(), format!("Bearer {key}"));
    }

    let client = Client::default();

    // List the first page of keys.
    let request = Request {
        method: Method::Get,
        base_url: endpoint.clone(),
        headers: headers.clone(),
        query_params: IndexMap::from([
            ("limit".to_string(), "100".to_string()),
            ("offset".to_string(), "0".to_string()),
        ]),
        ..Default::default()
    };
    print_response(&client.send(&request).await?);

    // Create one. No Content-Type here; the client fills in JSON.
    let request = Request {
        method: Method::Post,
        base_url: endpoint.clone(),
        headers: headers.clone(),
        body: br#" {
            "name": "My API Key",
            "scopes": [
                "mail.send",
                "alerts.create",
                "alerts.read"
            ]
        }"#
        .to_vec(),
        ..Default::default()
    };
    let response = client.send(&request).await?;
    print_response(&response);

    let created: CreatedKey =
        serde_json::from_str(&response.body).context("unexpected create response")?;
    let key_url = format!("{endpoint}/{}", created.api_key_id);

    // Fetch it back.
    let request = Request {
        method: Method::Get,
        base_url: key_url.clone(),
        headers: headers.clone(),
        ..Default::default()
    };
    print_response(&client.send(&request).await?);

    // Rename it.
    let request = Request {
        method: Method::Patch,
        base_url: key_url.clone(),
        headers: headers.clone(),
        body: br#"{
            "name": "A New Hope"
        }"#
        .to_vec(),
        ..Default::default()
    };
    print_response(&client.send(&request).await?);

    // Replace name and scopes together.
    let request = Request {
        method: Method::Put,
        base_url: key_url.clone(),
        headers: headers.clone(),
        body: br#"{
            "name": "A New Hope",
            "scopes": [
                "user.profile.read",
                "user.profile.update"
            ]
        }"#
        .to_vec(),
        ..Default::default()
    };
    print_response(&client.send(&request).await?);

    // Delete it.
    let request = Request {
        method: Method::Delete,
        base_url: key_url,
        headers,
        ..Default::default()
    };
    let response = client.send(&request).await?;
    println!("{}", response.status_code);
    println!("{:?}", response.headers);

    Ok(())
}
