//! The rate/price resolver: temporal filtering, specificity ranking, and
//! deterministic winner selection.
//!
//! Resolution is a pure function of an in-memory candidate slice and a
//! [`ResolutionContext`] — no I/O, no shared state. The same algorithm
//! serves both the rate-card path and the price-book path; the candidates
//! merely come from different tables.

use rust_decimal::Decimal;

use crate::scope::Scope;
use crate::types::{DbId, Timestamp};

/* --------------------------------------------------------------------------
Inputs and outcomes
-------------------------------------------------------------------------- */

/// One scoped, time-bounded rate or price rule, lifted out of storage.
#[derive(Debug, Clone)]
pub struct RuleCandidate {
    pub id: DbId,
    pub scope: Scope,
    /// Inclusive lower validity bound; `None` means unbounded.
    pub valid_from: Option<Timestamp>,
    /// Exclusive upper validity bound; `None` means unbounded.
    pub valid_to: Option<Timestamp>,
    /// Unit amount. Currency lives on the owning rate card / price book.
    pub amount: Decimal,
    pub unit_id: DbId,
    pub unit_label: String,
    /// Set on rate-card entries that are product-specific.
    pub product_id: Option<DbId>,
    /// Last modification time; breaks ties between duplicate rules.
    pub updated_at: Timestamp,
}

impl RuleCandidate {
    /// Whether the validity window contains `as_of`.
    ///
    /// The window is half-open: `valid_to` is exclusive, so a rule expiring
    /// exactly at `as_of` no longer applies.
    pub fn is_active_at(&self, as_of: Timestamp) -> bool {
        let from_ok = self.valid_from.is_none_or(|from| as_of >= from);
        let to_ok = self.valid_to.is_none_or(|to| as_of < to);
        from_ok && to_ok
    }
}

/// The transient per-request query. Never persisted.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    /// Instant against which validity windows are evaluated.
    pub as_of: Timestamp,
    /// Requesting user, if known.
    pub user_id: Option<DbId>,
    /// Requesting role, if known.
    pub role: Option<String>,
}

/// Why resolution produced no rate/price.
///
/// Every variant is a deterministic function of current rule data — callers
/// surface these as "not found" and never retry or default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The tenant has no rule set marked both active and default.
    #[error("no active default rule set for this organization")]
    NoActiveRuleSet,

    /// An explicitly requested rule set does not exist for this tenant.
    #[error("rule set not found")]
    NoRuleSetFound,

    /// The rule set exists but no candidate's scope and validity window
    /// match the request.
    #[error("no candidate matches the requested identity and instant")]
    NoCandidateMatchesContext,
}

/* --------------------------------------------------------------------------
Resolution
-------------------------------------------------------------------------- */

/// Select the single winning candidate for `ctx`, or report why none wins.
///
/// Steps:
/// 1. Drop candidates whose validity window does not contain `ctx.as_of`.
/// 2. Drop candidates scoped to a different identity; score the rest
///    (user match > role match > unscoped).
/// 3. The highest score wins. Duplicate rules at the same score break to
///    the most recently updated row, then the highest id, so repeated calls
///    over the same data always pick the same winner.
///
/// Exactly one candidate wins or none does — rules are never blended.
pub fn resolve<'a>(
    candidates: &'a [RuleCandidate],
    ctx: &ResolutionContext,
) -> Result<&'a RuleCandidate, ResolveError> {
    candidates
        .iter()
        .filter(|c| c.is_active_at(ctx.as_of))
        .filter_map(|c| {
            c.scope
                .specificity(ctx.user_id, ctx.role.as_deref())
                .map(|score| (score, c))
        })
        .max_by_key(|(score, c)| (*score, c.updated_at, c.id))
        .map(|(_, c)| c)
        .ok_or(ResolveError::NoCandidateMatchesContext)
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
