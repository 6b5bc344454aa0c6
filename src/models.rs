use std::path::PathBuf;

use serde_json::Value;

use crate::constants::{JACK_TARGET, SALLY_TARGET};

/// One of the two fixed controls in the view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Jack,
    Sally,
}

impl Control {
    pub const ALL: [Control; 2] = [Control::Jack, Control::Sally];

    pub fn label(&self) -> &'static str {
        match self {
            Control::Jack => "Jack",
            Control::Sally => "Sally",
        }
    }

    /// Target identifier this control sets when activated
    pub fn target(&self) -> &'static str {
        match self {
            Control::Jack => JACK_TARGET,
            Control::Sally => SALLY_TARGET,
        }
    }

    pub fn next(&self) -> Control {
        match self {
            Control::Jack => Control::Sally,
            Control::Sally => Control::Jack,
        }
    }

    pub fn prev(&self) -> Control {
        // Two controls, so both directions land on the other one
        self.next()
    }
}

/// Where target identifiers are resolved
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    /// `GET {base_url}{target}`
    Http { base_url: String },
    /// Read `{root}/{target}` from disk
    Dir { root: PathBuf },
}

impl Source {
    pub fn describe(&self) -> String {
        match self {
            Source::Http { base_url } => base_url.clone(),
            Source::Dir { root } => format!("dir:{}", root.display()),
        }
    }
}

/// Why a fetch produced no payload
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FetchError {
    /// Transfer could not complete
    #[error("network failure: {0}")]
    Network(String),
    /// Body was not valid JSON
    #[error("decode failure: {0}")]
    Decode(String),
}

/// Lifecycle of the fetch unit as seen by the view
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading { target: String },
    Loaded,
    Failed(FetchError),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading { .. })
    }
}

/// Render the payload the way `JSON.stringify` would: compact, `null` when absent
pub fn dump_payload(payload: Option<&Value>) -> String {
    match payload {
        Some(value) => value.to_string(),
        None => String::from("null"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_controls_map_to_fixed_targets() {
        assert_eq!(Control::Jack.target(), "/jack.json");
        assert_eq!(Control::Sally.target(), "/sally.json");
        assert_ne!(Control::Jack.target(), Control::Sally.target());
    }

    #[test]
    fn test_control_focus_cycles() {
        assert_eq!(Control::Jack.next(), Control::Sally);
        assert_eq!(Control::Sally.next(), Control::Jack);
        assert_eq!(Control::Jack.prev(), Control::Sally);
    }

    #[test]
    fn test_dump_payload() {
        assert_eq!(dump_payload(None), "null");
        assert_eq!(
            dump_payload(Some(&json!({"name": "Jack"}))),
            r#"{"name":"Jack"}"#
        );
    }

    #[test]
    fn test_fetch_error_messages() {
        let err = FetchError::Decode("expected value at line 1".into());
        assert_eq!(err.to_string(), "decode failure: expected value at line 1");
    }
}
