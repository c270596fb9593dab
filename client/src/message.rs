//! Status line shown in `#messageArea`.

/// Tone of a status message, mapped onto the area's CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "message success",
            Self::Error => "message error",
        }
    }
}

/// A message ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_css_classes() {
        assert_eq!(Message::success("ok").kind.class_name(), "message success");
        assert_eq!(Message::error("no").kind.class_name(), "message error");
    }
}
