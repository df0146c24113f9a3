use super::retry::{Charge, RefetchBudget};
use crate::config::Config;
use crate::extract::{handle_page, ExtractOptions, FetchedPage, PageOutcome};
use crate::seed::{generate_seeds, Seed};
use crate::url::{Handler, LinkAction, LinkClassifier};
use crate::{HarvestError, Result};

/// The two callbacks a crawl engine registers, bundled with their state
///
/// The engine calls [`Harvester::classify`] once per discovered link and
/// [`Harvester::handle`] once per fetched response that was dispatched.
#[derive(Debug)]
pub struct Harvester {
    config: Config,
    classifier: LinkClassifier,
    options: ExtractOptions,
    budget: RefetchBudget,
}

impl Harvester {
    /// Creates a harvester from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Config` if a link pattern fails to compile.
    pub fn new(config: Config) -> Result<Self> {
        let classifier = LinkClassifier::new(&config.site)?;
        let options = ExtractOptions::from(&config.extract);
        let budget = RefetchBudget::new(config.refetch.max_attempts);

        tracing::debug!(
            "Harvester ready: {} rules, refetch ceiling {}",
            classifier.rules().len(),
            budget.max_attempts()
        );

        Ok(Self {
            config,
            classifier,
            options,
            budget,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn classifier(&self) -> &LinkClassifier {
        &self.classifier
    }

    pub fn budget(&self) -> &RefetchBudget {
        &self.budget
    }

    /// Initial crawl requests for the configured regions and categories
    pub fn seeds(&self) -> Result<Vec<Seed>> {
        let seeds = &self.config.seeds;
        Ok(generate_seeds(
            &self.config.site,
            &seeds.regions,
            &seeds.categories,
        )?)
    }

    /// Link callback: decides what the engine does with a discovered URL
    pub fn classify(&self, url: &str) -> LinkAction {
        let action = self.classifier.classify(url);
        tracing::debug!("{} -> {}", url, action);
        action
    }

    /// Page callback: extracts entities from a dispatched response
    ///
    /// A challenge page yields `PageOutcome::RefetchRequired` until the URL
    /// has used up its refetch budget; any other outcome resets the budget.
    ///
    /// # Errors
    ///
    /// * `HarvestError::RefetchLimitExceeded` - Too many challenge pages in a row
    /// * `HarvestError::Extract` - The page could not be turned into entities
    pub fn handle(&self, handler: Handler, page: &FetchedPage) -> Result<PageOutcome> {
        let outcome = handle_page(handler, page, &self.options);

        match outcome {
            Ok(PageOutcome::RefetchRequired(request)) => match self.budget.charge(&page.url) {
                Charge::Retry(attempt) => {
                    tracing::info!(
                        "Refetch {}/{} for {}",
                        attempt,
                        self.budget.max_attempts(),
                        page.url
                    );
                    Ok(PageOutcome::RefetchRequired(request))
                }
                Charge::Exhausted(attempts) => {
                    tracing::error!("Giving up on {} after {} challenge pages", page.url, attempts);
                    Err(HarvestError::RefetchLimitExceeded {
                        url: page.url.clone(),
                        attempts,
                    })
                }
            },
            Ok(outcome) => {
                self.budget.clear(&page.url);
                if let PageOutcome::Entities { entities, .. } = &outcome {
                    tracing::info!("{} entities from {} page {}", entities.len(), handler, page.url);
                }
                Ok(outcome)
            }
            Err(source) => {
                self.budget.clear(&page.url);
                tracing::warn!("Extraction failed for {}: {}", page.url, source);
                Err(HarvestError::Extract {
                    url: page.url.clone(),
                    source,
                })
            }
        }
    }

    /// Classifies the page's own URL and runs the handler it dispatches to
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::NotDispatched` when no rule sends the URL to
    /// a handler, otherwise the errors of [`Harvester::handle`].
    pub fn dispatch(&self, page: &FetchedPage) -> Result<PageOutcome> {
        match self.classify(&page.url).handler() {
            Some(handler) => self.handle(handler, page),
            None => Err(HarvestError::NotDispatched {
                url: page.url.clone(),
            }),
        }
    }
}
