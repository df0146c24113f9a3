//! Seed generation for the crawl
//!
//! The crawl starts from every (region, category) listing, sorted by rating.
//! Generation is pure: the same inputs always produce the same URLs in the
//! same order (regions outer, categories inner).

mod catalog;

pub use catalog::{CATEGORIES, REGIONS};

use crate::config::SiteConfig;
use crate::UrlResult;
use url::Url;

/// Query string selecting the rating-descending sort order
pub const RATING_SORT_QUERY: &str = "SrtT=rt&Srt=D";

/// The first listing page of one region/category pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub region: String,
    pub category: String,
    pub url: Url,
}

/// Builds the listing URL for a region/category pair
///
/// # Example
///
/// ```
/// use tabelog_harvest::config::SiteConfig;
/// use tabelog_harvest::seed::seed_url;
///
/// let url = seed_url(&SiteConfig::default(), "tokyo", "RC0102").unwrap();
/// assert_eq!(url.as_str(), "http://tabelog.com/tokyo/rstLst/RC0102/?SrtT=rt&Srt=D");
/// ```
pub fn seed_url(site: &SiteConfig, region: &str, category: &str) -> UrlResult<Url> {
    let raw = format!(
        "{}://{}/{}/rstLst/{}/?{}",
        site.seed_scheme, site.host, region, category, RATING_SORT_QUERY
    );
    Ok(Url::parse(&raw)?)
}

/// Generates the cartesian product of regions and categories
///
/// # Arguments
///
/// * `site` - Host and scheme the seeds point at
/// * `regions` - Region slugs (outer loop)
/// * `categories` - Category identifiers (inner loop)
///
/// # Returns
///
/// One seed per pair, `regions.len() * categories.len()` in total
pub fn generate_seeds<R, C>(site: &SiteConfig, regions: &[R], categories: &[C]) -> UrlResult<Vec<Seed>>
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    let mut seeds = Vec::with_capacity(regions.len() * categories.len());

    for region in regions {
        for category in categories {
            let (region, category) = (region.as_ref(), category.as_ref());
            seeds.push(Seed {
                region: region.to_string(),
                category: category.to_string(),
                url: seed_url(site, region, category)?,
            });
        }
    }

    Ok(seeds)
}

/// Recovers the (region, category) pair a seed URL was built from
///
/// Returns `None` for anything that is not a first listing page.
pub fn decode_seed(url: &Url) -> Option<(String, String)> {
    let segments: Vec<&str> = url.path_segments()?.collect();

    match segments.as_slice() {
        [region, "rstLst", category, ""] if !region.is_empty() && !category.is_empty() => {
            Some((region.to_string(), category.to_string()))
        }
        _ => None,
    }
}
