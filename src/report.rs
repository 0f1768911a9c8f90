use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::browser::BrowserCategory;
use crate::fetch::FetchError;
use crate::stats::{HourBucket, LogStats};

#[derive(Debug, Serialize)]
struct JsonReport {
    total_hits: u64,
    image_hits: u64,
    image_percentage: f64,
    most_popular_browser: BrowserCategory,
    browser_counts: BTreeMap<&'static str, u64>,
    hourly_hits: Vec<HourBucket>,
}

pub fn render_text(stats: &LogStats) -> String {
    let mut out = String::new();

    // writing to a String cannot fail
    let _ = writeln!(
        out,
        "Image requests account for {:.1}% of all requests",
        stats.image_percentage()
    );
    let _ = writeln!(out, "Most popular browser is {}", stats.most_popular_browser());

    for bucket in stats.ranked_hours() {
        let _ = writeln!(out, "Hour {:02} has {} hits", bucket.hour, bucket.hits);
    }

    out
}

pub fn render_json(stats: &LogStats) -> Result<String> {
    let report = JsonReport {
        total_hits: stats.total_hits,
        image_hits: stats.image_hits,
        image_percentage: stats.rounded_image_percentage(),
        most_popular_browser: stats.most_popular_browser(),
        browser_counts: BrowserCategory::ALL
            .iter()
            .map(|&category| (category.name(), stats.browser_count(category)))
            .collect(),
        hourly_hits: stats.ranked_hours(),
    };

    serde_json::to_string_pretty(&report).context("Failed to serialize report")
}

/// The two-line message shown when the log can't be downloaded.
pub fn render_fetch_failure(url: &str, error: &FetchError) -> String {
    format!(
        "Error downloading file from URL: {}\nDetails: {}\n",
        url, error
    )
}

pub fn print_report(stats: &LogStats, json: bool) -> Result<()> {
    if json {
        println!("{}", render_json(stats)?);
    } else {
        print!("{}", render_text(stats));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawRecord;
    use pretty_assertions::assert_eq;

    fn two_row_stats() -> LogStats {
        LogStats::from_records(&[
            RawRecord::new("/a.png", "01/01/2014 10:00:00", "Firefox/1"),
            RawRecord::new("/b.html", "01/01/2014 10:30:00", "Chrome/1 Safari/1"),
        ])
    }

    #[test]
    fn text_report_shape() {
        let text = render_text(&two_row_stats());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], "Image requests account for 50.0% of all requests");
        assert_eq!(lines[1], "Most popular browser is Firefox");
        assert_eq!(lines[2], "Hour 10 has 2 hits");
        assert_eq!(lines[3], "Hour 00 has 0 hits");
        assert_eq!(lines[25], "Hour 23 has 0 hits");
    }

    #[test]
    fn empty_report_lists_every_hour_once() {
        let text = render_text(&LogStats::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Image requests account for 0.0% of all requests");
        assert_eq!(lines[1], "Most popular browser is Firefox");

        let hour_lines: Vec<String> = (0..24).map(|h| format!("Hour {:02} has 0 hits", h)).collect();
        assert_eq!(lines[2..].to_vec(), hour_lines);
    }

    #[test]
    fn one_image_in_four_hundred_prints_point_two() {
        let mut records = vec![RawRecord::new("/a.png", "01/01/2014 10:00:00", "Firefox/1")];
        records.extend(
            (0..399).map(|_| RawRecord::new("/page", "01/01/2014 11:00:00", "Firefox/1")),
        );
        let stats = LogStats::from_records(&records);

        let text = render_text(&stats);
        assert_eq!(
            text.lines().next(),
            Some("Image requests account for 0.2% of all requests")
        );

        let value: serde_json::Value = serde_json::from_str(&render_json(&stats).unwrap()).unwrap();
        assert_eq!(value["image_percentage"], 0.2);
    }

    #[test]
    fn fetch_failure_message() {
        let error = FetchError::InvalidUrl(url::ParseError::RelativeUrlWithoutBase);
        let message = render_fetch_failure("weblog.csv", &error);

        assert_eq!(
            message,
            "Error downloading file from URL: weblog.csv\n\
             Details: invalid URL: relative URL without a base\n"
        );
    }

    #[test]
    fn json_report_fields() {
        let json = render_json(&two_row_stats()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_hits"], 2);
        assert_eq!(value["image_hits"], 1);
        assert_eq!(value["image_percentage"], 50.0);
        assert_eq!(value["most_popular_browser"], "Firefox");
        assert_eq!(value["browser_counts"]["Chrome"], 1);
        assert_eq!(value["browser_counts"]["Internet Explorer"], 0);
        assert_eq!(value["hourly_hits"].as_array().unwrap().len(), 24);
        assert_eq!(value["hourly_hits"][0]["hour"], 10);
        assert_eq!(value["hourly_hits"][0]["hits"], 2);
    }
}
