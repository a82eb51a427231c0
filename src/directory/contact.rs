//! Contact targets for providers and the seam that opens them.
//!
//! Targets are `tel:`, `mailto:` and `https:` strings handed to the platform opener, which
//! routes them to the dialer, mail client or browser.

use std::fmt;
use std::process::{Command, Stdio};
use std::str::FromStr;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{info, warn};

use crate::error::LaunchError;
use crate::models::ServiceProvider;

const EMAIL_SUBJECT: &str = "Inquiry from Dog Training Assistant";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    Call,
    Email,
    Website,
}

impl ContactChannel {
    pub fn name(&self) -> &'static str {
        match self {
            ContactChannel::Call => "phone",
            ContactChannel::Email => "email",
            ContactChannel::Website => "website",
        }
    }
}

impl fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "phone" => Ok(ContactChannel::Call),
            "email" | "mail" => Ok(ContactChannel::Email),
            "website" | "web" => Ok(ContactChannel::Website),
            other => Err(format!("unknown contact channel '{}' (expected call, email or website)", other)),
        }
    }
}

/// Build the target string for a channel. `None` when the provider has no such contact.
pub fn contact_target(provider: &ServiceProvider, channel: ContactChannel) -> Option<String> {
    match channel {
        ContactChannel::Call => {
            let digits: String = provider.phone.chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() { None } else { Some(format!("tel:{}", digits)) }
        }
        ContactChannel::Email => {
            let email = provider.email.trim();
            if email.is_empty() {
                return None;
            }
            let subject = utf8_percent_encode(EMAIL_SUBJECT, NON_ALPHANUMERIC);
            Some(format!("mailto:{}?subject={}", email, subject))
        }
        ContactChannel::Website => {
            let url = provider.website.as_deref()?.trim();
            if url.is_empty() {
                None
            } else if url.starts_with("http://") || url.starts_with("https://") {
                Some(url.to_string())
            } else {
                Some(format!("https://{}", url))
            }
        }
    }
}

/// Hands a target to whatever handles it on this device
pub trait Launcher {
    fn open(&mut self, target: &str) -> Result<(), LaunchError>;
}

/// Launcher backed by the platform opener command
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(target: &str) -> Result<Command, LaunchError> {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(target);
            Ok(cmd)
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", target]);
            Ok(cmd)
        } else if cfg!(unix) {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(target);
            Ok(cmd)
        } else {
            Err(LaunchError::Unsupported)
        }
    }
}

impl Launcher for SystemLauncher {
    fn open(&mut self, target: &str) -> Result<(), LaunchError> {
        // Opener output would draw over the interactive screen
        let status = Self::command(target)?
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| LaunchError::Spawn { target: target.to_string(), source })?;

        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::Rejected { target: target.to_string(), status: status.code().unwrap_or(-1) })
        }
    }
}

/// Resolve and open a provider contact.
///
/// Failures are logged and returned for the caller to show; nothing is retried.
pub fn open_contact(
    launcher: &mut dyn Launcher,
    provider: &ServiceProvider,
    channel: ContactChannel,
) -> Result<String, LaunchError> {
    let target = contact_target(provider, channel).ok_or_else(|| LaunchError::NoTarget {
        provider: provider.name.clone(),
        channel: channel.name(),
    })?;

    info!(provider = %provider.name, %channel, "opening contact");
    match launcher.open(&target) {
        Ok(()) => Ok(target),
        Err(e) => {
            warn!(provider = %provider.name, %channel, error = %e, "failed to open contact");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed::seed_providers;

    #[derive(Default)]
    struct RecordingLauncher {
        opened: Vec<String>,
        fail: bool,
    }

    impl Launcher for RecordingLauncher {
        fn open(&mut self, target: &str) -> Result<(), LaunchError> {
            if self.fail {
                return Err(LaunchError::Rejected { target: target.to_string(), status: 1 });
            }
            self.opened.push(target.to_string());
            Ok(())
        }
    }

    fn provider(id: &str) -> ServiceProvider {
        seed_providers().into_iter().find(|p| p.id == id).unwrap()
    }

    #[test]
    fn test_call_target_strips_formatting() {
        let target = contact_target(&provider("1"), ContactChannel::Call).unwrap();
        assert_eq!(target, "tel:5551234567");
    }

    #[test]
    fn test_email_target_encodes_subject() {
        let target = contact_target(&provider("2"), ContactChannel::Email).unwrap();
        assert_eq!(
            target,
            "mailto:contact@happytailsgrooming.com?subject=Inquiry%20from%20Dog%20Training%20Assistant"
        );
    }

    #[test]
    fn test_website_target_adds_scheme() {
        let target = contact_target(&provider("2"), ContactChannel::Website).unwrap();
        assert_eq!(target, "https://happytailsgrooming.com");

        let target = contact_target(&provider("1"), ContactChannel::Website).unwrap();
        assert_eq!(target, "https://pawsitivetraining.com");
    }

    #[test]
    fn test_missing_website_has_no_target() {
        assert!(contact_target(&provider("3"), ContactChannel::Website).is_none());
    }

    #[test]
    fn test_open_contact_uses_launcher() {
        let mut launcher = RecordingLauncher::default();
        let target = open_contact(&mut launcher, &provider("4"), ContactChannel::Call).unwrap();
        assert_eq!(launcher.opened, vec![target]);
    }

    #[test]
    fn test_open_contact_without_target() {
        let mut launcher = RecordingLauncher::default();
        let err = open_contact(&mut launcher, &provider("3"), ContactChannel::Website).unwrap_err();
        assert!(matches!(err, LaunchError::NoTarget { channel: "website", .. }));
        assert!(launcher.opened.is_empty());
    }

    #[test]
    fn test_open_contact_launcher_failure() {
        let mut launcher = RecordingLauncher { fail: true, ..Default::default() };
        let err = open_contact(&mut launcher, &provider("1"), ContactChannel::Email).unwrap_err();
        assert!(matches!(err, LaunchError::Rejected { .. }));
    }

    #[test]
    fn test_channel_parse() {
        assert_eq!("CALL".parse::<ContactChannel>().unwrap(), ContactChannel::Call);
        assert_eq!("web".parse::<ContactChannel>().unwrap(), ContactChannel::Website);
        assert!("fax".parse::<ContactChannel>().is_err());
    }
}
