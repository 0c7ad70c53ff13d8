use std::collections::BTreeMap;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, Request, Url};

use crate::{args::DEFAULT_USER_AGENT, domain::BenchmarkConfig, error::HttpError};

use super::template::RequestVars;

/// Builds the fully substituted request for one work item.
///
/// # Errors
///
/// Returns a construction error for a malformed URL, an invalid header
/// name or value, or when reqwest refuses to assemble the request.
pub(crate) fn build_request(
    client: &Client,
    config: &BenchmarkConfig,
    vars: &RequestVars,
) -> Result<Request, HttpError> {
    let url = resolve_url(config, vars)?;
    let body = config.request_body().map(|body| vars.render(body));
    let headers = build_headers(config, vars, body.is_some())?;

    let mut request_builder = client
        .request(config.method.to_reqwest(), url)
        .headers(headers);
    if let Some(body) = body {
        request_builder = request_builder.body(body);
    }

    request_builder
        .build()
        .map_err(|err| HttpError::BuildRequestFailed { source: err })
}

pub(crate) fn resolve_url(config: &BenchmarkConfig, vars: &RequestVars) -> Result<Url, HttpError> {
    let rendered = vars.render(&config.url);
    let mut url = Url::parse(&rendered).map_err(|err| HttpError::InvalidUrl {
        url: rendered,
        source: err,
    })?;

    if !config.parameters.is_empty() {
        let params: BTreeMap<String, String> = config
            .parameters
            .iter()
            .map(|(key, value)| (vars.render(key), vars.render(value)))
            .collect();
        merge_query(&mut url, &params);
    }

    Ok(url)
}

/// Replaces same-key pairs, keeps the rest, and re-encodes sorted by key.
fn merge_query(url: &mut Url, params: &BTreeMap<String, String>) {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .into_owned()
        .filter(|(key, _)| !params.contains_key(key))
        .collect();
    pairs.extend(
        params
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );
    pairs.sort_by(|left, right| left.0.cmp(&right.0));

    url.query_pairs_mut().clear().extend_pairs(pairs);
}

/// Headers in precedence order; a later source never replaces a name set
/// by an earlier one.
pub(crate) fn build_headers(
    config: &BenchmarkConfig,
    vars: &RequestVars,
    has_body: bool,
) -> Result<HeaderMap, HttpError> {
    let mut headers = HeaderMap::new();

    if let Some(token) = config.auth_token.as_deref() {
        let value = format!("Bearer {}", vars.render(token));
        headers.insert(AUTHORIZATION, header_value(AUTHORIZATION.as_str(), &value)?);
    }

    for (key, value) in &config.headers {
        let name_rendered = vars.render(key);
        let name = HeaderName::from_bytes(name_rendered.as_bytes()).map_err(|err| {
            HttpError::InvalidHeaderName {
                header: name_rendered.clone(),
                source: err,
            }
        })?;
        if headers.contains_key(&name) {
            continue;
        }
        let value = header_value(&name_rendered, &vars.render(value))?;
        headers.insert(name, value);
    }

    if has_body && !headers.contains_key(CONTENT_TYPE) {
        let value = header_value(CONTENT_TYPE.as_str(), &config.content_type)?;
        headers.insert(CONTENT_TYPE, value);
    }

    if !headers.contains_key(USER_AGENT) {
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    }

    Ok(headers)
}

fn header_value(header: &str, value: &str) -> Result<HeaderValue, HttpError> {
    HeaderValue::from_str(value).map_err(|err| HttpError::InvalidHeaderValue {
        header: header.to_owned(),
        source: err,
    })
}
