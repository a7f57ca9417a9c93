//! Audible cue played when a work phase completes.
//! Tone generation itself belongs to the host platform.

#[cfg(target_os = "macos")]
use std::process::Command;

use std::io::Write;

pub trait Chime {
    fn ring(&mut self);
}

/// Terminal bell, plus a desktop notification on macOS
#[derive(Debug, Default)]
pub struct BellChime;

impl Chime for BellChime {
    fn ring(&mut self) {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();

        notify_phase_done("Work session complete. Time for a break.");
    }
}

/// Chime that does nothing (`chime = false` in config)
#[derive(Debug, Default)]
pub struct SilentChime;

impl Chime for SilentChime {
    fn ring(&mut self) {}
}

/// Counts rings; used in tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CountingChime {
    pub rings: usize,
}

#[cfg(test)]
impl Chime for CountingChime {
    fn ring(&mut self) {
        self.rings += 1;
    }
}

impl<C: Chime + ?Sized> Chime for Box<C> {
    fn ring(&mut self) {
        (**self).ring();
    }
}

/// Send a desktop notification when a phase is done
fn notify_phase_done(message: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Focus Timer""#,
            message.replace('"', "\\\"")
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::debug!(error = %e, "desktop notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_chime() {
        let mut chime = CountingChime::default();
        chime.ring();
        chime.ring();
        assert_eq!(chime.rings, 2);
    }

    fn ring_through<C: Chime>(chime: &mut C) {
        chime.ring();
    }

    #[test]
    fn test_boxed_chime_delegates() {
        let mut boxed = Box::new(CountingChime::default());
        ring_through(&mut boxed);
        assert_eq!(boxed.rings, 1);
    }
}
