use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(jpg|gif|png)$").expect("valid image regex"));

pub fn is_image_path(path: &str) -> bool {
    IMAGE_EXTENSION.is_match(path)
}
