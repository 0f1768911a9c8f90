use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BrowserCategory {
    Firefox,
    Chrome,
    #[serde(rename = "Internet Explorer")]
    InternetExplorer,
    Safari,
    Other,
}

impl BrowserCategory {
    /// Every category, in tally order. Index matches `index()`.
    pub const ALL: [BrowserCategory; 5] = [
        BrowserCategory::Firefox,
        BrowserCategory::Chrome,
        BrowserCategory::InternetExplorer,
        BrowserCategory::Safari,
        BrowserCategory::Other,
    ];

    /// Categories that compete for "most popular", in tie-break order.
    pub const NAMED: [BrowserCategory; 4] = [
        BrowserCategory::Firefox,
        BrowserCategory::Chrome,
        BrowserCategory::InternetExplorer,
        BrowserCategory::Safari,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            BrowserCategory::Firefox => "Firefox",
            BrowserCategory::Chrome => "Chrome",
            BrowserCategory::InternetExplorer => "Internet Explorer",
            BrowserCategory::Safari => "Safari",
            BrowserCategory::Other => "Other",
        }
    }
}

impl fmt::Display for BrowserCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a User-Agent by vendor token.
///
/// Real UA strings carry each other's tokens (Chrome advertises Safari, many
/// advertise Mozilla), so the checks run in a fixed priority order:
/// Firefox, Chrome, Internet Explorer (`MSIE` or `Trident`), then Safari
/// only when no Chrome token is present.
pub fn detect_browser(user_agent: &str) -> BrowserCategory {
    let ua = user_agent.to_ascii_lowercase();
    let has_chrome = ua.contains("chrome");

    if ua.contains("firefox") {
        BrowserCategory::Firefox
    } else if has_chrome {
        BrowserCategory::Chrome
    } else if ua.contains("msie") || ua.contains("trident") {
        BrowserCategory::InternetExplorer
    } else if ua.contains("safari") && !has_chrome {
        BrowserCategory::Safari
    } else {
        BrowserCategory::Other
    }
}
