// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only transport, `url` for parsing)

use std::{error::Error, io::{Read, Write}, net::TcpStream, time::Duration};

use url::Url;

use crate::config::consts::{NET_TIMEOUT_SECS, USER_AGENT};

pub fn is_http(source: &str) -> bool {
    source
        .trim_start()
        .get(..7)
        .is_some_and(|p| p.eq_ignore_ascii_case("http://"))
}

pub fn http_get(source: &str) -> Result<String, Box<dyn Error>> {
    let url = Url::parse(source.trim())?;
    if url.scheme() != "http" {
        return Err(format!("Unsupported scheme: {}", url.scheme()).into());
    }
    let host = url.host_str().ok_or("URL has no host")?;
    let port = url.port_or_known_default().unwrap_or(80);

    let mut path = s!(url.path());
    if let Some(q) = url.query() {
        path.push('?');
        path.push_str(q);
    }

    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nAccept: text/csv, text/plain, */*\r\nConnection: close\r\n\r\n",
        path, host, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    split_response(&buf).map_err(|e| format!("{e} ({source})").into())
}

/// Status check + body extraction for a raw HTTP/1.x response.
fn split_response(buf: &[u8]) -> Result<String, String> {
    let resp = String::from_utf8_lossy(buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    let code = status.split_whitespace().nth(1).unwrap_or("");
    if code != "200" {
        return Err(format!("HTTP error: {}", status));
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}
