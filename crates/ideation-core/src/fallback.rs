//! Deterministic fallback text.
//!
//! Used whenever the remote generator cannot produce an answer. Each category
//! has one template and the caller's text is interpolated verbatim.

use crate::category::Category;

/// Fallback answer to a problem statement.
///
/// # Example
///
/// ```rust
/// use ideation_core::{fallback, Category};
///
/// let text = fallback::generate(Category::Manhattan, "Trucks arrive late");
/// assert!(text.contains("Trucks arrive late"));
/// ```
pub fn generate(category: Category, problem: &str) -> String {
    match category {
        Category::DailyHurdles => format!(
            "Here's a practical way to tackle \"{problem}\": break the hurdle into the smallest \
             repeatable step, remove one hand-off or approval from it this week, and track how \
             much time it saves. Share the result with your team so the fix becomes the new \
             standard way of working."
        ),
        Category::BlueYonder => format!(
            "For \"{problem}\", consider using Blue Yonder's demand sensing and inventory \
             optimization together: feed recent point-of-sale and order signals into the demand \
             plan, let autonomous replenishment adjust safety stock per location, and review the \
             exceptions in the warehouse management workbench each morning."
        ),
        Category::Kinaxis => format!(
            "To address \"{problem}\", model it as a what-if scenario in Kinaxis RapidResponse: \
             compare the current supply plan with an alternative that rebalances capacity and \
             inventory, share both in a concurrent planning session, and promote the scenario \
             that best protects service levels."
        ),
        Category::Coupa => format!(
            "For \"{problem}\", start with Coupa spend analytics to find where the issue drives \
             cost, then tighten the related supplier contracts, route the affected purchases \
             through guided buying, and use supplier risk scores to pick who to engage first."
        ),
        Category::Manhattan => format!(
            "To solve \"{problem}\", combine Manhattan's transportation and warehouse management: \
             schedule dock appointments against real-time carrier ETAs, re-sequence labor and \
             wave planning when arrivals slip, and use yard management to keep trailers moving \
             toward the right doors."
        ),
        Category::OtherScm => format!(
            "Here's an idea for \"{problem}\": map the end-to-end flow where the problem appears, \
             add a shared visibility dashboard for suppliers, carriers and warehouses, and pilot \
             one automation (track-and-trace, predictive alerts or route optimization) on the \
             lane with the biggest impact."
        ),
    }
}

/// Fallback answer to feedback on an existing idea.
///
/// Reuses the category template for the feedback and names the idea being
/// refined, so both inputs appear verbatim.
pub fn refine(category: Category, current_idea: &str, feedback: &str) -> String {
    format!(
        "Refining \"{current_idea}\" with your feedback in mind.\n\n{}",
        generate(category, feedback)
    )
}
