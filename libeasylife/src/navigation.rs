//! Page navigation state machine
//!
//! Every navigation goes through a short transition: the request records a
//! pending target with a deadline, and the page switches once a poll observes
//! the deadline has passed. A newer request replaces the pending one, which
//! cancels the older deadline. The pending transition lives inside the
//! navigator, so dropping the navigator drops it too.
//!
//! Access rules are checked here, at the transition boundary, and not only
//! when deciding which navigation items to show.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::NavigationError;
use crate::types::{AccountRole, Page};

/// Default cosmetic delay between request and page switch
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Whether `page` may be entered with the given role
pub fn is_reachable(page: Page, role: Option<AccountRole>) -> bool {
    match page {
        Page::CreateProduct => role == Some(AccountRole::Seller),
        Page::Home | Page::Catalog | Page::Orders | Page::Profile => true,
    }
}

/// Whether `page` gets an item in the navigation bar for the given role
pub fn is_offered(page: Page, role: Option<AccountRole>) -> bool {
    match page {
        Page::Orders => role.is_some(),
        other => is_reachable(other, role),
    }
}

/// Navigation bar items, in display order
pub fn visible_pages(role: Option<AccountRole>) -> Vec<Page> {
    Page::ALL
        .into_iter()
        .filter(|page| is_offered(*page, role))
        .collect()
}

/// A requested page switch waiting for its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub target: Page,
    pub due: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    current: Page,
    pending: Option<PendingTransition>,
    delay: Duration,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION)
    }
}

impl Navigator {
    /// A navigator showing the home page
    pub fn new(delay: Duration) -> Self {
        Self {
            current: Page::Home,
            pending: None,
            delay,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// True between a request and its completion
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Request a switch to `target`.
    ///
    /// Rejected targets leave the navigator untouched. An accepted request
    /// supersedes any pending one and restarts the delay from `now`.
    pub fn request(
        &mut self,
        target: Page,
        role: Option<AccountRole>,
        now: Instant,
    ) -> Result<(), NavigationError> {
        if !is_reachable(target, role) {
            warn!(page = %target, "Navigation rejected: seller-only page");
            return Err(NavigationError::SellerOnly(target.label()));
        }

        if let Some(previous) = self.pending {
            debug!(from = %previous.target, to = %target, "Superseding pending navigation");
        }

        if self.delay.is_zero() {
            self.finish(target);
        } else {
            self.pending = Some(PendingTransition {
                target,
                due: now + self.delay,
            });
        }
        Ok(())
    }

    /// Complete the pending transition if its deadline has passed.
    ///
    /// Returns the page that became current, if any.
    pub fn poll(&mut self, now: Instant) -> Option<Page> {
        match self.pending {
            Some(pending) if now >= pending.due => {
                self.finish(pending.target);
                Some(pending.target)
            }
            _ => None,
        }
    }

    /// Drop the pending transition without switching pages
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(page = %pending.target, "Pending navigation cancelled");
        }
    }

    fn finish(&mut self, target: Page) {
        self.pending = None;
        self.current = target;
        info!(page = %target, "Navigated");
    }
}
