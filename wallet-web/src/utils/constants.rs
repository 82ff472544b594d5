//! Application constants

/// Brand logo, served from the static assets next to `index.html`.
pub const HOODS_LOGO: &str = "/hood.png";

pub const AUTHOR_HANDLE: &str = "@arjunlevi";
pub const GITHUB_URL: &str = "https://github.com/ArjunLevi";
pub const GITHUB_LOGO: &str = "https://upload.wikimedia.org/wikipedia/commons/9/91/Octicons-mark-github.svg";

/// Fixed label for the native-coin leg.
pub const NATIVE_SYMBOL: &str = "ETH";
