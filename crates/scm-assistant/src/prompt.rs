//! System prompt construction and fingerprinting.

use ideation_core::Category;
use sha2::{Digest, Sha256};

const PREAMBLE: &str = "You are a specialized AI assistant for supply chain management and \
innovation. You have deep expertise in the following platforms and areas:";

const PLATFORMS: &str = "SUPPLY CHAIN PLATFORMS EXPERTISE:
- Kinaxis RapidResponse: Concurrent planning, real-time visibility, scenario modeling, S&OP
- Blue Yonder: AI-driven demand planning, inventory optimization, autonomous supply chains
- Coupa: Business spend management, procurement, supplier management, contract management
- Manhattan: Warehouse management, transportation, omnichannel fulfillment, labor optimization";

const ROLE: &str = "Your role is to:
1. Help users brainstorm innovative solutions for supply chain challenges
2. Provide specific insights related to the selected platform/category
3. Suggest practical implementation approaches
4. Consider integration possibilities between different platforms
5. Focus on real-world business value and ROI

Be specific, actionable, and innovative in your responses. Consider both technical and business perspectives.";

/// Build the system prompt for a request.
///
/// `category` is the display label sent by the client. Missing or unknown
/// labels resolve to [`Category::OtherScm`], and the resolved category's
/// guidance is always included. When the category has platform knowledge,
/// a `CURRENT FOCUS` block carrying that knowledge as JSON follows.
pub fn build_system_prompt(category: Option<&str>) -> String {
    let category = category
        .and_then(Category::from_label)
        .unwrap_or(Category::OtherScm);

    let focus = category
        .knowledge()
        .and_then(|knowledge| serde_json::to_string_pretty(&knowledge).ok())
        .map(|json| format!("\nCURRENT FOCUS: {}\n{}\n", category.label(), json))
        .unwrap_or_default();

    format!(
        "{PREAMBLE}\n\nCATEGORY GUIDANCE: {}\n{focus}\n\n{PLATFORMS}\n\n{ROLE}",
        category.guidance()
    )
}

/// Compute a stable SHA-256 fingerprint for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_block_for_platform() {
        let prompt = build_system_prompt(Some("Kinaxis"));

        assert!(prompt.starts_with("You are a specialized AI assistant"));
        assert!(prompt.contains("CURRENT FOCUS: Kinaxis\n{"));
        assert!(prompt.contains("\"capabilities\": ["));
        assert!(prompt.contains("What-if analysis"));
        assert!(prompt.ends_with("Consider both technical and business perspectives."));
    }

    #[test]
    fn test_daily_hurdles_lists_areas() {
        let prompt = build_system_prompt(Some("Daily Hurdles"));
        assert!(prompt.contains("CURRENT FOCUS: Daily Hurdles"));
        assert!(prompt.contains("\"areas\""));
        assert!(!prompt.contains("\"capabilities\""));
    }

    #[test]
    fn test_no_focus_without_knowledge() {
        for category in [None, Some("Other SCM"), Some("Unknown vendor")] {
            let prompt = build_system_prompt(category);
            assert!(!prompt.contains("CURRENT FOCUS"));
            assert!(prompt.contains("SUPPLY CHAIN PLATFORMS EXPERTISE:"));
        }
    }

    #[test]
    fn test_guidance_for_every_category() {
        for category in Category::ALL {
            let prompt = build_system_prompt(Some(category.label()));
            let line = format!("CATEGORY GUIDANCE: {}", category.guidance());
            assert!(prompt.contains(&line), "missing guidance for {}", category.label());
        }
    }

    #[test]
    fn test_unknown_label_gets_default_guidance() {
        let expected = format!("CATEGORY GUIDANCE: {}", Category::OtherScm.guidance());
        assert!(build_system_prompt(None).contains(&expected));
        assert!(build_system_prompt(Some("Unknown vendor")).contains(&expected));
    }

    #[test]
    fn test_hash_prompt_stable() {
        let first = hash_prompt("test prompt");
        let second = hash_prompt("test prompt");
        let different = hash_prompt("another prompt");

        assert_eq!(first, second);
        assert_ne!(first, different);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_category_prompts_fingerprint_differently() {
        let mut hashes: Vec<String> = Category::ALL
            .iter()
            .map(|c| hash_prompt(&build_system_prompt(Some(c.label()))))
            .collect();
        hashes.sort();
        hashes.dedup();
        assert_eq!(hashes.len(), Category::ALL.len());
    }
}
