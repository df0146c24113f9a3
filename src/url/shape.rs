//! Parsing of identifiers embedded in directory URLs

use crate::{UrlError, UrlResult};
use regex::Regex;
use std::sync::LazyLock;

static BUSINESS_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z]+)/(A\d{4})/(A\d{6})/(\d+)/").expect("Failed to compile business path regex")
});
static REVIEW_LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z]+/A\d{4}/A\d{6}/(\d+)/dtlrvwlst/").expect("Failed to compile review list regex")
});
static REVIEW_DETAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z]+/A\d{4}/A\d{6}/\d+/dtlrvwlst/B(\d+)")
        .expect("Failed to compile review detail regex")
});
static PROFILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rvwr/([^/]+)/").expect("Failed to compile profile regex"));

/// Location of a business, as encoded in its URL path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessPath {
    pub prefecture: String,
    pub area: String,
    pub subarea: String,
    pub business_id: u64,
}

impl BusinessPath {
    /// Parses `/<region>/A####/A######/<id>/` out of a business (or sub-page) URL
    ///
    /// # Examples
    ///
    /// ```
    /// use tabelog_harvest::url::BusinessPath;
    ///
    /// let path = BusinessPath::parse("https://tabelog.com/tokyo/A1301/A130101/13001234/").unwrap();
    /// assert_eq!(path.prefecture, "tokyo");
    /// assert_eq!(path.business_id, 13001234);
    /// ```
    pub fn parse(url: &str) -> UrlResult<Self> {
        let caps = BUSINESS_PATH_RE
            .captures(url)
            .ok_or_else(|| shape_error("business", url))?;

        Ok(Self {
            prefecture: caps[1].to_string(),
            area: caps[2].to_string(),
            subarea: caps[3].to_string(),
            business_id: parse_id(&caps[4], "business", url)?,
        })
    }
}

/// Extracts the business id from a review-list page URL
pub fn review_list_business_id(url: &str) -> UrlResult<u64> {
    let caps = REVIEW_LIST_RE
        .captures(url)
        .ok_or_else(|| shape_error("review list", url))?;
    parse_id(&caps[1], "review list", url)
}

/// Extracts the review id from a review node's detail URL (`.../dtlrvwlst/B<id>/`)
pub fn review_detail_id(detail_url: &str) -> UrlResult<u64> {
    let caps = REVIEW_DETAIL_RE
        .captures(detail_url)
        .ok_or_else(|| shape_error("review detail", detail_url))?;
    parse_id(&caps[1], "review detail", detail_url)
}

/// Extracts the reviewer slug from a profile link (`/rvwr/<slug>/`)
pub fn profile_user_id(href: &str) -> Option<String> {
    PROFILE_RE.captures(href).map(|caps| caps[1].to_string())
}

fn parse_id(digits: &str, expected: &'static str, url: &str) -> UrlResult<u64> {
    digits.parse().map_err(|_| shape_error(expected, url))
}

fn shape_error(expected: &'static str, url: &str) -> UrlError {
    UrlError::Shape {
        expected,
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_path_from_detail_url() {
        let path = BusinessPath::parse("https://tabelog.com/osaka/A2701/A270101/27001122/").unwrap();
        assert_eq!(
            path,
            BusinessPath {
                prefecture: "osaka".to_string(),
                area: "A2701".to_string(),
                subarea: "A270101".to_string(),
                business_id: 27001122,
            }
        );
    }

    #[test]
    fn test_business_path_from_sub_page() {
        let path = BusinessPath::parse(
            "https://tabelog.com/tokyo/A1301/A130101/13001234/dtlrvwlst/COND-0/smp1/?PG=2",
        )
        .unwrap();
        assert_eq!(path.business_id, 13001234);
    }

    #[test]
    fn test_business_path_rejects_listing() {
        let err = BusinessPath::parse("https://tabelog.com/tokyo/rstLst/RC0102/").unwrap_err();
        assert!(matches!(err, UrlError::Shape { expected: "business", .. }));
    }

    #[test]
    fn test_review_list_business_id() {
        assert_eq!(
            review_list_business_id(
                "https://tabelog.com/tokyo/A1301/A130101/13001234/dtlrvwlst/COND-0/smp1/?lc=0&PG=3"
            )
            .unwrap(),
            13001234
        );
        assert!(review_list_business_id("https://tabelog.com/tokyo/A1301/A130101/13001234/").is_err());
    }

    #[test]
    fn test_review_detail_id() {
        assert_eq!(
            review_detail_id("/tokyo/A1301/A130101/13001234/dtlrvwlst/B98765432/?use_type=0").unwrap(),
            98765432
        );
        assert!(review_detail_id("/tokyo/A1301/A130101/13001234/dtlrvwlst/").is_err());
    }

    #[test]
    fn test_profile_user_id() {
        assert_eq!(
            profile_user_id("https://tabelog.com/rvwr/gourmet_taro/"),
            Some("gourmet_taro".to_string())
        );
        assert_eq!(
            profile_user_id("/rvwr/000123/reviewed_restaurants/list/"),
            Some("000123".to_string())
        );
        assert_eq!(profile_user_id("/tokyo/"), None);
    }

    #[test]
    fn test_oversized_id_is_shape_error() {
        let url = "https://tabelog.com/tokyo/A1301/A130101/99999999999999999999999/";
        assert!(BusinessPath::parse(url).is_err());
    }
}
