//! The single transient status message under the signup form.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Tone of the status message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Last message shown. A new message overwrites text and kind; hiding only
/// flips visibility so the last text stays around for fade-out styling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusState {
    pub text: String,
    pub kind: StatusKind,
    pub visible: bool,
}

impl StatusState {
    pub fn show(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.text = text.into();
        self.kind = kind;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Class list for the message element.
    pub fn css_class(&self) -> String {
        if self.visible {
            self.kind.css_class().to_owned()
        } else {
            format!("{} hidden", self.kind.css_class())
        }
    }
}
