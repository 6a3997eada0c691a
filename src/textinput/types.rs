//! Messages and enums for the textinput component.

use bubbletea_rs::Msg;
use serde::Deserialize;

/// Clipboard contents read by the [`paste`](super::paste) command.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard read failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// How typed characters are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EchoMode {
    /// Text is displayed as is.
    #[default]
    EchoNormal,
    /// Every character is replaced by the echo character.
    EchoPassword,
    /// Nothing is displayed.
    EchoNone,
}

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}
