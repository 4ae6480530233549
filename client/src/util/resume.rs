//! Placeholder resume served by the download buttons.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

pub const RESUME_FILENAME: &str = "Shrinath_Hinge_Resume.txt";
pub const RESUME_MIME: &str = "text/plain";

pub const RESUME_DOWNLOADED: &str = "Resume downloaded successfully!";
pub const RESUME_FAILED: &str = "Resume download failed.";

const RESUME_CONTENT: &str = "\
SHRINATH HINGE
Software Developer & VR Enthusiast
=====================================
(contact & content placeholder)";

/// Text body of the downloaded file.
#[must_use]
pub fn resume_content() -> &'static str {
    RESUME_CONTENT
}
