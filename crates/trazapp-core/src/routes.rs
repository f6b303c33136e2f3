//! Client-side routes of the site.

use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    /// `plan` is the raw `?plan=` value, if any; it is only a preselection
    /// hint and is validated against the pricing catalog by the form.
    Register { plan: Option<String> },
}

impl Route {
    /// Resolve a location `pathname` and `search` string (with or without the
    /// leading `?`). Unknown paths resolve to the landing page.
    pub fn parse(path: &str, query: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "/login" => Self::Login,
            "/register" => {
                let plan = parse_query(query)
                    .remove("plan")
                    .filter(|p| !p.trim().is_empty());
                Self::Register { plan }
            }
            _ => Self::Landing,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register { plan: None } => "/register".to_string(),
            Self::Register { plan: Some(plan) } => {
                format!("/register?plan={}", encode_component(plan))
            }
        }
    }
}

/// Split a URL query string into decoded key/value pairs. Later duplicates
/// win; keys without `=` map to an empty value.
pub fn parse_query(query: &str) -> FnvHashMap<String, String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(k), decode_component(v))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                // two hex digits, nothing else
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4 | lo) as u8);
                        i += 2;
                    }
                    _ => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
