//! Integration tests for the harvest pipeline
//!
//! These tests drive the public API with saved-page fixtures, the same way a
//! crawl engine would: classify a link, hand the fetched body to the
//! dispatched handler, write what comes back to a sink.

use std::collections::HashSet;
use std::io::Write;
use tabelog_harvest::config::{load_config_with_hash, Config};
use tabelog_harvest::model::{Meal, Numeric};
use tabelog_harvest::output::{EntitySink, HarvestStats, JsonLinesSink};
use tabelog_harvest::seed::decode_seed;
use tabelog_harvest::{Entity, FetchedPage, Handler, HarvestError, Harvester, LinkAction, PageOutcome};

const BUSINESS_URL: &str = "https://tabelog.com/tokyo/A1301/A130101/13001234/";
const REVIEWS_URL: &str =
    "https://tabelog.com/tokyo/A1301/A130101/13001234/dtlrvwlst/COND-0/smp1/?lc=0&rvw_part=all&PG=1";

/// Business page: name only in the headline, two genres, a phone number,
/// stars 4.2, dinner budget only
const BUSINESS_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Sushi Ginza</title></head><body>
<header><a class="p-header__logo-img" href="https://tabelog.com/">食べログ</a></header>
<div class="rd-header__headline"><h2><a href="https://tabelog.com/tokyo/A1301/A130101/13001234/">Sushi Ginza</a></h2></div>
<div class="rdheader-rating"><span class="rdheader-rating__score-val-dtl">4.2</span></div>
<dl class="rdheader-subinfo__item">
  <dt>ジャンル</dt>
  <dd class="rdheader-subinfo__item-text">
    <a href="https://tabelog.com/rstLst/sushi/"><span>寿司</span></a>、
    <a href="https://tabelog.com/rstLst/seafood/"><span>海鮮</span></a>
  </dd>
</dl>
<p class="rdheader-budget__icon rdheader-budget__icon--dinner"><span><a href="/budget/">￥30,000～￥39,999</a></span></p>
<div class="rstinfo-table">
  <table><tbody>
    <tr><th>予約・お問い合わせ</th><td><p><strong class="rstinfo-table__tel-num">03-1234-5678</strong></p></td></tr>
  </tbody></table>
</div>
</body></html>"#;

/// Review list: one node, two comment paragraphs, a dinner rating with five
/// sub-scores, a linked reviewer
const REVIEWS_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<header><a class="p-header__logo-img" href="https://tabelog.com/">食べログ</a></header>
<div class="rvw-item" data-detail-url="/tokyo/A1301/A130101/13001234/dtlrvwlst/B412345678/">
  <div class="rvw-item__rvwr-profile-wrap">
    <p class="rvw-item__rvwr-name"><a href="/rvwr/gourmet_taro/"><span>gourmet_taro</span></a></p>
    <p class="rvw-item__rvwr-rvwcount">1,204件</p>
    <span class="mark-auth-mobile"></span>
  </div>
  <p class="rvw-item__visit-count"><span class="rvw-item__visit-count-num">3</span>回</p>
  <ul class="rvw-item__ratings">
    <li class="rvw-item__ratings-item">
      <span class="c-rating__time c-rating__time--dinner">夜の点数</span>
      <b class="c-rating__val">3.5</b>
      <ul class="rvw-item__ratings-dtlscore">
        <li>料理・味<strong class="rvw-item__ratings-dtlscore-score">3.6</strong></li>
        <li>サービス<strong class="rvw-item__ratings-dtlscore-score">3.4</strong></li>
        <li>雰囲気<strong class="rvw-item__ratings-dtlscore-score">3.5</strong></li>
        <li>CP<strong class="rvw-item__ratings-dtlscore-score">3.3</strong></li>
        <li>酒・ドリンク<strong class="rvw-item__ratings-dtlscore-score">3.2</strong></li>
      </ul>
    </li>
  </ul>
  <a class="rvw-item__title-target" href="/tokyo/A1301/A130101/13001234/dtlrvwlst/B412345678/">Quiet counter</a>
  <div class="rvw-item__rvw-comment">
    <p>The <strong>fish</strong> was excellent.</p>
    <p>Will come back for the winter menu.</p>
  </div>
</div>
</body></html>"#;

const CHALLENGE_PAGE: &str =
    "<html><head><title>Just a moment...</title></head><body><p>Verifying you are human</p></body></html>";

fn harvester() -> Harvester {
    Harvester::new(Config::default()).expect("default config must build")
}

fn only_entities(outcome: PageOutcome) -> Vec<Entity> {
    match outcome {
        PageOutcome::Entities { entities, .. } => entities,
        PageOutcome::RefetchRequired(request) => panic!("unexpected refetch of {}", request.url),
    }
}

#[test]
fn test_business_page_end_to_end() {
    let harvester = harvester();
    assert_eq!(
        harvester.classify(BUSINESS_URL),
        LinkAction::Dispatch(Handler::Business)
    );

    let page = FetchedPage::new(BUSINESS_URL, BUSINESS_PAGE);
    let entities = only_entities(harvester.handle(Handler::Business, &page).unwrap());
    assert_eq!(entities.len(), 1);

    let Entity::Business(business) = &entities[0] else {
        panic!("expected a business, got {}", entities[0].kind());
    };
    assert_eq!(business.business_id, 13001234);
    assert_eq!(business.name.as_deref(), Some("Sushi Ginza"));
    assert_eq!(business.categories, ["寿司", "海鮮"]);
    assert_eq!(business.telephone.as_deref(), Some("03-1234-5678"));
    assert_eq!(business.stars, Numeric::Number(4.2));
    assert_eq!(business.price(Meal::Dinner), Some("￥30,000～￥39,999"));
    assert_eq!(business.price(Meal::Lunch), None);
    assert_eq!(business.prefecture, "tokyo");
}

#[test]
fn test_review_page_end_to_end() {
    let harvester = harvester();
    assert_eq!(
        harvester.classify(REVIEWS_URL),
        LinkAction::FollowAndDispatch(Handler::Reviews)
    );

    let page = FetchedPage::new(REVIEWS_URL, REVIEWS_PAGE);
    let entities = only_entities(harvester.handle(Handler::Reviews, &page).unwrap());
    assert_eq!(entities.len(), 1, "users are not emitted by default");

    let Entity::Review(review) = &entities[0] else {
        panic!("expected a review, got {}", entities[0].kind());
    };
    assert_eq!(review.review_id, 412345678);
    assert_eq!(review.business_id, 13001234);
    assert_eq!(
        review.text,
        ["The fish was excellent.", "Will come back for the winter menu."]
    );
    assert_eq!(review.user_id.as_deref(), Some("gourmet_taro"));
    assert_eq!(review.visit.as_deref(), Some("3"));

    let dinner = review.stars(Meal::Dinner).expect("dinner rating");
    assert_eq!(dinner.total, Numeric::Number(3.5));
    assert_eq!(dinner.taste, Numeric::Number(3.6));
    assert_eq!(dinner.drink, Numeric::Number(3.2));
    assert!(review.stars_lunch.is_none());

    let json = serde_json::to_value(&entities[0]).unwrap();
    assert!(json.get("stars_lunch").is_none());
    assert_eq!(json["stars_dinner"]["total"], 3.5);
}

#[test]
fn test_review_page_with_users() {
    let mut config = Config::default();
    config.extract.emit_users = true;
    let harvester = Harvester::new(config).unwrap();

    let page = FetchedPage::new(REVIEWS_URL, REVIEWS_PAGE);
    let entities = only_entities(harvester.handle(Handler::Reviews, &page).unwrap());
    assert_eq!(entities.len(), 2);

    let Entity::User(user) = &entities[1] else {
        panic!("expected a user, got {}", entities[1].kind());
    };
    assert_eq!(user.user_id, "gourmet_taro");
    assert_eq!(user.review_count, Some(1204));
    assert!(user.verified);
}

#[test]
fn test_challenge_page_is_refetched_then_abandoned() {
    let mut config = Config::default();
    config.refetch.max_attempts = 3;
    let harvester = Harvester::new(config).unwrap();
    let page = FetchedPage::new(BUSINESS_URL, CHALLENGE_PAGE);

    for _ in 0..3 {
        match harvester.handle(Handler::Business, &page).unwrap() {
            PageOutcome::RefetchRequired(request) => {
                assert_eq!(request.url, BUSINESS_URL);
                assert!(request.bypass_dedup);
            }
            PageOutcome::Entities { .. } => panic!("challenge page must not be parsed"),
        }
    }

    let err = harvester.handle(Handler::Business, &page).unwrap_err();
    assert!(matches!(
        err,
        HarvestError::RefetchLimitExceeded { attempts: 4, .. }
    ));
}

#[test]
fn test_refetch_then_success() {
    let harvester = harvester();
    let challenge = FetchedPage::new(REVIEWS_URL, CHALLENGE_PAGE);
    let genuine = FetchedPage::new(REVIEWS_URL, REVIEWS_PAGE);
    let mut stats = HarvestStats::new();

    stats.record_outcome(&harvester.handle(Handler::Reviews, &challenge).unwrap());
    stats.record_outcome(&harvester.handle(Handler::Reviews, &genuine).unwrap());

    assert_eq!(stats.refetches, 1);
    assert_eq!(stats.pages, 1);
    assert_eq!(stats.reviews, 1);
    assert_eq!(harvester.budget().pending(), 0);
}

#[test]
fn test_classification_table() {
    let harvester = harvester();
    let table = [
        (
            "https://tabelog.com/kyoto/rstLst/RC0102/3/?SrtT=rt&Srt=D",
            LinkAction::Follow,
        ),
        (
            "https://tabelog.com/kyoto/rstLst/ramen/3/?SrtT=rt&Srt=D",
            LinkAction::Ignore,
        ),
        (BUSINESS_URL, LinkAction::Dispatch(Handler::Business)),
        (
            "https://tabelog.com/tokyo/A1301/A130101/13001234/dtlrvwlst/",
            LinkAction::Follow,
        ),
        (REVIEWS_URL, LinkAction::FollowAndDispatch(Handler::Reviews)),
        (
            "https://tabelog.com/tokyo/A1301/A130101/13001234/dtlrvwlst/COND-0/smp1/?favorite_rvwr=1&PG=1",
            LinkAction::Ignore,
        ),
        ("https://s.tabelog.com/tokyo/A1301/A130101/13001234/", LinkAction::Ignore),
        ("https://tabelog.com/help/", LinkAction::Ignore),
    ];

    for (url, expected) in table {
        assert_eq!(harvester.classify(url), expected, "url: {}", url);
    }
}

#[test]
fn test_default_seeds() {
    let seeds = harvester().seeds().unwrap();
    assert_eq!(seeds.len(), 47 * 55);

    let unique: HashSet<_> = seeds.iter().map(|s| s.url.to_string()).collect();
    assert_eq!(unique.len(), seeds.len());

    for seed in &seeds {
        assert_eq!(
            decode_seed(&seed.url),
            Some((seed.region.clone(), seed.category.clone()))
        );
    }
}

#[test]
fn test_config_file_drives_harvester() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[seeds]
regions = ["tokyo", "osaka"]
categories = ["sushi"]

[refetch]
max-attempts = 1

[extract]
emit-users = true
"#
    )
    .unwrap();

    let (config, hash) = load_config_with_hash(file.path()).unwrap();
    assert_eq!(hash.len(), 64);

    let harvester = Harvester::new(config).unwrap();
    assert_eq!(harvester.seeds().unwrap().len(), 2);
    assert_eq!(harvester.budget().max_attempts(), 1);

    let page = FetchedPage::new(REVIEWS_URL, REVIEWS_PAGE);
    let entities = only_entities(harvester.dispatch(&page).unwrap());
    assert_eq!(entities.len(), 2);
}

#[test]
fn test_entities_written_as_json_lines() {
    let harvester = harvester();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entities.jsonl");

    let mut sink = JsonLinesSink::create(&path).unwrap();
    for (url, body) in [(BUSINESS_URL, BUSINESS_PAGE), (REVIEWS_URL, REVIEWS_PAGE)] {
        let page = FetchedPage::new(url, body);
        let entities = only_entities(harvester.dispatch(&page).unwrap());
        sink.record_all(&page.url, &entities).unwrap();
    }
    sink.finish().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["type"], "business");
    assert_eq!(lines[0]["source_url"], BUSINESS_URL);
    assert_eq!(lines[1]["type"], "review");
    assert_eq!(lines[1]["business_id"], 13001234);
}
