//! Notification request value object

use super::notification_type::NotificationType;

/// Group id that addresses every notification posted by the notifier
pub const ALL_GROUPS: &str = "ALL";

/// Options for a single notifier invocation.
///
/// Each set field becomes one `-flag value` pair. `notification_type` is
/// never passed to the binary; it only selects the content image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRequest {
    pub message: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub group: Option<String>,
    pub notification_type: Option<NotificationType>,
    pub sound: Option<String>,
    pub activate: Option<String>,
    pub sender: Option<String>,
    pub open: Option<String>,
    pub execute: Option<String>,
    pub remove: Option<String>,
    pub list: Option<String>,
    pub help: bool,
}

impl NotificationRequest {
    /// Request posting a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Request removing the notifications of a group
    pub fn remove(group: impl Into<String>) -> Self {
        Self {
            remove: Some(group.into()),
            ..Default::default()
        }
    }

    /// Request listing the notifications of a group
    pub fn list(group: impl Into<String>) -> Self {
        Self {
            list: Some(group.into()),
            ..Default::default()
        }
    }

    /// Request the notifier's usage text
    pub fn help() -> Self {
        Self {
            help: true,
            ..Default::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_type(mut self, kind: NotificationType) -> Self {
        self.notification_type = Some(kind);
        self
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Whether a message will be posted (and icons attached)
    pub fn has_message(&self) -> bool {
        self.message.is_some()
    }

    /// Build the flag list for this request, without icon flags.
    ///
    /// Flags come out in a fixed field order so the same request always
    /// yields the same argument vector.
    pub fn to_args(&self) -> Vec<String> {
        let valued = [
            ("message", &self.message),
            ("title", &self.title),
            ("subtitle", &self.subtitle),
            ("group", &self.group),
            ("sound", &self.sound),
            ("activate", &self.activate),
            ("sender", &self.sender),
            ("open", &self.open),
            ("execute", &self.execute),
            ("remove", &self.remove),
            ("list", &self.list),
        ];

        let mut args = Vec::new();
        for (flag, value) in valued {
            if let Some(value) = value {
                args.push(format!("-{}", flag));
                args.push(value.clone());
            }
        }

        if self.help {
            args.push("-help".to_string());
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_only() {
        let args = NotificationRequest::message("ZOMG").to_args();
        assert_eq!(args, vec!["-message", "ZOMG"]);
    }

    #[test]
    fn type_is_not_a_flag() {
        let args = NotificationRequest::message("ZOMG")
            .with_type(NotificationType::Failed)
            .to_args();
        assert_eq!(args, vec!["-message", "ZOMG"]);
    }

    #[test]
    fn help_emits_only_the_flag() {
        assert_eq!(NotificationRequest::help().to_args(), vec!["-help"]);
    }

    #[test]
    fn remove_and_list() {
        assert_eq!(
            NotificationRequest::remove(ALL_GROUPS).to_args(),
            vec!["-remove", "ALL"]
        );
        assert_eq!(
            NotificationRequest::list("important stuff").to_args(),
            vec!["-list", "important stuff"]
        );
    }

    #[test]
    fn order_is_stable_regardless_of_builder_order() {
        let a = NotificationRequest::default()
            .with_group("g")
            .with_title("T")
            .with_message("M")
            .with_subtitle("S")
            .with_sound("default");
        let b = NotificationRequest::default()
            .with_sound("default")
            .with_subtitle("S")
            .with_message("M")
            .with_title("T")
            .with_group("g");

        assert_eq!(a.to_args(), b.to_args());
        assert_eq!(
            a.to_args(),
            vec![
                "-message", "M", "-title", "T", "-subtitle", "S", "-group", "g", "-sound",
                "default"
            ]
        );
    }

    #[test]
    fn values_are_passed_verbatim() {
        let args = NotificationRequest::message("rspec: 3 failures; \"oops\"").to_args();
        assert_eq!(args[1], "rspec: 3 failures; \"oops\"");
    }

    #[test]
    fn has_message() {
        assert!(NotificationRequest::message("x").has_message());
        assert!(!NotificationRequest::remove("g").has_message());
    }
}
