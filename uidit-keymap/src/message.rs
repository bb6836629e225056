use uidit_buffer::{
    message::{BufferMessage, CursorDirection, TextModification},
    model::Mode,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Binding {
    pub force: Option<Mode>,
    pub kind: BindingKind,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum BindingKind {
    Message(KeymapMessage),
    Modification(TextModification),
    Motion(CursorDirection),
    #[default]
    None,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeySequence {
    Completed(String),
    Changed(String),
    None,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeymapMessage {
    Buffer(BufferMessage),
    CopyToClipboard,
    DownloadFile,
    ExecuteCommand,
    ExportAsJson,
    InsertTemplate,
    LeaveCommandMode,
    Quit,
    Validate,
}
