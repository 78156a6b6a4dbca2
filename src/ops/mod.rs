//! API operations.
//!
//! Each route is bound to one `Operation` variant; `invoke` runs it against
//! the system utilities and produces an `Outcome`. Parameter access goes
//! through `Params`, which surfaces missing or mistyped keys as request
//! errors instead of faults.

use serde_json::{json, Map, Value};
use url::form_urlencoded;

use crate::http::envelope::{Failure, Outcome};
use crate::system::{NetConfig, SystemTools};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The operations this API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Liveness probe returning the local timestamp.
    Ping,
    /// Read an interface's credentials from the config store.
    GetNetworkOption,
    /// Write an interface's credentials and commit them.
    SetNetworkOption,
    /// Query an interface's status document.
    GetInterfaceStatus,
    /// Bring an interface down then up, then report its status.
    CycleInterface,
}

impl Operation {
    pub async fn invoke(&self, params: &Params, tools: &SystemTools) -> Outcome {
        match self {
            Operation::Ping => ping(),
            Operation::GetNetworkOption => {
                let interface = params.require_str("interface")?;
                read_credentials(tools, interface).await
            }
            Operation::SetNetworkOption => {
                let interface = params.require_str("interface")?;
                let username = params.require_str("username")?;
                let password = params.require_str("password")?;
                write_credentials(tools, interface, username, password).await
            }
            Operation::GetInterfaceStatus => {
                let interface = params.require_str("interface")?;
                read_status(tools, interface).await
            }
            Operation::CycleInterface => {
                let interface = params.require_str("interface")?;
                tools.iface.down(interface).await?;
                tools.iface.up(interface).await?;
                read_status(tools, interface).await
            }
        }
    }
}

fn ping() -> Outcome {
    let now = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    Ok(Value::String(now))
}

async fn read_credentials(tools: &SystemTools, interface: &str) -> Outcome {
    let username = tools
        .netcfg
        .get(&NetConfig::credential_key(interface, "username"))
        .await?;
    let password = tools
        .netcfg
        .get(&NetConfig::credential_key(interface, "password"))
        .await?;
    Ok(json!({ "username": username, "password": password }))
}

/// Empty username/password are left untouched; the commit runs regardless.
async fn write_credentials(
    tools: &SystemTools,
    interface: &str,
    username: &str,
    password: &str,
) -> Outcome {
    if !username.is_empty() {
        tools
            .netcfg
            .set(&NetConfig::credential_key(interface, "username"), username)
            .await?;
    }
    if !password.is_empty() {
        tools
            .netcfg
            .set(&NetConfig::credential_key(interface, "password"), password)
            .await?;
    }
    tools
        .netcfg
        .commit(&NetConfig::interface_section(interface))
        .await?;
    read_credentials(tools, interface).await
}

async fn read_status(tools: &SystemTools, interface: &str) -> Outcome {
    let raw = tools.iface.status(interface).await?;
    serde_json::from_str(&raw).map_err(|err| {
        Failure::request_error(format!(
            "status output for interface {interface} is not valid JSON: {err}"
        ))
    })
}

/// Request parameters, from either the query string or a JSON body.
#[derive(Debug, Clone, Default)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Parse a query string; the first value wins for repeated names.
    pub fn from_query(query: &str) -> Self {
        let mut map = Map::new();
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            map.entry(name.into_owned())
                .or_insert_with(|| Value::String(value.into_owned()));
        }
        Self(map)
    }

    /// Parse a JSON body; anything but a top-level object is a request error.
    pub fn from_json(bytes: &[u8]) -> Result<Self, Failure> {
        let value: Value = serde_json::from_slice(bytes).map_err(|err| {
            Failure::request_error(format!("request body is not valid JSON: {err}"))
        })?;
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(Failure::request_error("request body must be a JSON object")),
        }
    }

    pub fn require_str(&self, name: &str) -> Result<&str, Failure> {
        match self.0.get(name) {
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(Failure::request_error(format!(
                "parameter {name} must be a string"
            ))),
            None => Err(Failure::request_error(format!(
                "missing required parameter: {name}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_takes_first_value() {
        let params = Params::from_query("interface=wan&interface=lan&x=%E4%B8%AD");
        assert_eq!(params.require_str("interface").unwrap(), "wan");
        assert_eq!(params.require_str("x").unwrap(), "中");
    }

    #[test]
    fn missing_parameter_names_the_key() {
        let params = Params::from_query("");
        let failure = params.require_str("interface").unwrap_err();
        assert!(failure.detail.contains("interface"));
        assert!(failure.detail.contains("missing"));
    }

    #[test]
    fn body_must_be_an_object() {
        assert!(Params::from_json(br#"{"interface": "wan"}"#).is_ok());
        assert!(Params::from_json(b"[1, 2]").is_err());
        assert!(Params::from_json(b"not json").is_err());
    }

    #[test]
    fn non_string_parameter_is_rejected() {
        let params = Params::from_json(br#"{"interface": 5}"#).unwrap();
        let failure = params.require_str("interface").unwrap_err();
        assert!(failure.detail.contains("must be a string"));
    }

    #[test]
    fn ping_matches_timestamp_format() {
        let value = ping().unwrap();
        let text = value.as_str().unwrap();
        assert_eq!(text.len(), 19);
        let bytes = text.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            match i {
                4 | 7 => assert_eq!(*b, b'-'),
                10 => assert_eq!(*b, b' '),
                13 | 16 => assert_eq!(*b, b':'),
                _ => assert!(b.is_ascii_digit()),
            }
        }
    }
}
