use super::{Handler, LinkAction};
use crate::config::SiteConfig;
use crate::ConfigResult;
use regex::Regex;

/// Outcome of testing one rule against a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch {
    /// The allow pattern did not match
    NoMatch,
    /// The allow pattern matched, but so did a deny pattern
    Denied,
    /// The allow pattern matched and no deny pattern did
    Matched,
}

/// One pattern-action rule of the link classifier
#[derive(Debug, Clone)]
pub struct LinkRule {
    name: &'static str,
    allow: Regex,
    deny: Vec<Regex>,
    follow: bool,
    handler: Option<Handler>,
}

impl LinkRule {
    /// Creates a rule that neither follows nor dispatches until configured
    ///
    /// # Arguments
    ///
    /// * `name` - Label used in logs
    /// * `allow` - Regex the full absolute URL must match
    /// * `deny` - Regexes that veto a URL even when `allow` matches
    pub fn new(name: &'static str, allow: &str, deny: &[&str]) -> ConfigResult<Self> {
        Ok(Self {
            name,
            allow: Regex::new(allow)?,
            deny: deny
                .iter()
                .map(|pattern| Regex::new(pattern))
                .collect::<Result<_, _>>()?,
            follow: false,
            handler: None,
        })
    }

    /// Re-runs classification on links found in pages this rule claims
    pub fn follow(mut self) -> Self {
        self.follow = true;
        self
    }

    /// Sends pages this rule claims to an extractor
    pub fn dispatch(mut self, handler: Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The action taken for URLs this rule claims
    pub fn action(&self) -> LinkAction {
        LinkAction::from_parts(self.follow, self.handler)
    }

    /// Tests the rule against a full absolute URL
    pub fn evaluate(&self, url: &str) -> RuleMatch {
        if !self.allow.is_match(url) {
            RuleMatch::NoMatch
        } else if self.deny.iter().any(|d| d.is_match(url)) {
            RuleMatch::Denied
        } else {
            RuleMatch::Matched
        }
    }
}

/// A classified link together with the rule that decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub action: LinkAction,
    /// Name of the deciding rule; `None` when no rule's allow pattern matched
    pub rule: Option<&'static str>,
}

/// Ordered rule list deciding what to do with each discovered link
///
/// Rules are tried in priority order and the first whose allow pattern
/// matches decides. A deny hit on that rule drops the link outright rather
/// than letting a later rule claim it.
#[derive(Debug, Clone)]
pub struct LinkClassifier {
    rules: Vec<LinkRule>,
}

impl LinkClassifier {
    /// Builds the directory's four rules for the configured host
    ///
    /// Allow patterns accept the host and any of its subdomains so that the
    /// mirror host is rejected by its deny pattern, not by omission.
    pub fn new(site: &SiteConfig) -> ConfigResult<Self> {
        let host = format!(r"^https?://([a-z0-9-]+\.)*{}/", regex::escape(&site.host));
        let mirror = format!(r"^https?://{}/", regex::escape(&site.mirror_host));
        let business = format!(r"{}[a-z]+/A\d{{4}}/A\d{{6}}/\d+/", host);

        let rules = vec![
            LinkRule::new(
                "listing-pagination",
                &format!(r"{}[a-z]+/rstLst/RC\d+/\d+/\?.*", host),
                &[mirror.as_str()],
            )?
            .follow(),
            LinkRule::new("business", &format!("{}$", business), &[mirror.as_str()])?
                .dispatch(Handler::Business),
            LinkRule::new(
                "review-landing",
                &format!("{}dtlrvwlst/$", business),
                &[mirror.as_str()],
            )?
            .follow(),
            LinkRule::new(
                "review-pagination",
                &format!(r"{}dtlrvwlst/COND-0/smp1/\?.+PG=.+", business),
                &["favorite_rvwr", mirror.as_str()],
            )?
            .follow()
            .dispatch(Handler::Reviews),
        ];

        Ok(Self::with_rules(rules))
    }

    /// Builds a classifier from an explicit rule list, highest priority first
    pub fn with_rules(rules: Vec<LinkRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[LinkRule] {
        &self.rules
    }

    /// Classifies a discovered link
    ///
    /// # Examples
    ///
    /// ```
    /// use tabelog_harvest::config::SiteConfig;
    /// use tabelog_harvest::url::{Handler, LinkAction, LinkClassifier};
    ///
    /// let classifier = LinkClassifier::new(&SiteConfig::default()).unwrap();
    /// assert_eq!(
    ///     classifier.classify("https://tabelog.com/tokyo/A1301/A130101/13001234/"),
    ///     LinkAction::Dispatch(Handler::Business)
    /// );
    /// assert_eq!(classifier.classify("https://tabelog.com/help/"), LinkAction::Ignore);
    /// ```
    pub fn classify(&self, url: &str) -> LinkAction {
        self.explain(url).action
    }

    /// Classifies a discovered link and reports which rule decided it
    pub fn explain(&self, url: &str) -> Classification {
        for rule in &self.rules {
            match rule.evaluate(url) {
                RuleMatch::NoMatch => continue,
                RuleMatch::Denied => {
                    tracing::trace!("{} denied by rule {}", url, rule.name());
                    return Classification {
                        action: LinkAction::Ignore,
                        rule: Some(rule.name()),
                    };
                }
                RuleMatch::Matched => {
                    let action = rule.action();
                    tracing::trace!("{} matched rule {} -> {}", url, rule.name(), action);
                    return Classification {
                        action,
                        rule: Some(rule.name()),
                    };
                }
            }
        }

        Classification {
            action: LinkAction::Ignore,
            rule: None,
        }
    }
}
