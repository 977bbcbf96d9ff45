use std::collections::HashMap;
use std::fmt::Write as _;

use sea_orm::ActiveEnum;

use brewlog_domain::pagination::PageQuery;

use crate::domain::repository::{PreferenceAnalyzerPort, TastingRepository};
use crate::domain::types::{PreferenceAnalysis, TasteProfile, TastingDetail};
use crate::error::CatalogError;

/// Upper bound on history pulled for analysis; beyond this the oldest
/// sessions stop influencing the profile.
const ANALYSIS_HISTORY_LIMIT: u64 = 1000;

/// Tastings spelled out individually in the LLM prompt.
const PROMPT_DETAIL_LIMIT: usize = 10;

const NO_DATA_MESSAGE: &str = "No tasting data available. Start logging your coffee \
    tastings to get personalized recommendations!";

fn sorted_counts(counts: HashMap<String, u64>, top: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<_> = counts.into_iter().collect();
    // Stable order for equal counts so responses do not flap.
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(top);
    entries
}

fn build_profile(tastings: &[TastingDetail]) -> TasteProfile {
    let mut flavor_counts: HashMap<String, u64> = HashMap::new();
    let mut method_counts: HashMap<String, u64> = HashMap::new();
    let mut ratings: Vec<i32> = Vec::new();

    for tasting in tastings {
        if let Some(rating) = tasting.session.overall_rating {
            ratings.push(rating);
        }
        *method_counts
            .entry(tasting.session.brew_method.to_value())
            .or_default() += 1;
        for note in &tasting.notes {
            *flavor_counts.entry(note.flavor_tag.name.clone()).or_default() += 1;
        }
    }

    let average_rating = if ratings.is_empty() {
        None
    } else {
        let avg = ratings.iter().map(|&r| f64::from(r)).sum::<f64>() / ratings.len() as f64;
        Some((avg * 10.0).round() / 10.0)
    };

    TasteProfile {
        total_tastings: tastings.len() as u64,
        average_rating,
        most_common_flavors: sorted_counts(flavor_counts, 10),
        preferred_brew_methods: sorted_counts(method_counts, 5),
    }
}

fn build_prompt(profile: &TasteProfile, tastings: &[TastingDetail]) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Analyze this coffee taster's preferences based on their tasting history:\n"
    );
    let _ = writeln!(prompt, "TASTING SUMMARY:");
    let _ = writeln!(prompt, "- Total tastings: {}", profile.total_tastings);
    let _ = writeln!(
        prompt,
        "- Most common flavors: {:?}",
        profile.most_common_flavors
    );
    let _ = writeln!(
        prompt,
        "- Preferred brew methods: {:?}",
        profile.preferred_brew_methods
    );
    let _ = writeln!(prompt, "\nDETAILED TASTING HISTORY:");

    for tasting in tastings.iter().take(PROMPT_DETAIL_LIMIT) {
        let coffee_name = tasting
            .coffee
            .as_ref()
            .map_or("Unknown", |c| c.name.as_str());
        let roaster_name = tasting.roaster_name.as_deref().unwrap_or("Unknown");
        let rating = tasting
            .session
            .overall_rating
            .map_or_else(|| "unrated".to_owned(), |r| format!("{r}/10"));
        let flavors: Vec<String> = tasting
            .notes
            .iter()
            .map(|n| match n.note.intensity {
                Some(i) => format!("{} (intensity: {i})", n.flavor_tag.name),
                None => n.flavor_tag.name.clone(),
            })
            .collect();
        let _ = writeln!(prompt, "Coffee: {coffee_name} by {roaster_name}");
        let _ = writeln!(
            prompt,
            "Rating: {rating} | Would buy again: {:?}",
            tasting.session.would_buy_again
        );
        let _ = writeln!(
            prompt,
            "Brew method: {}",
            tasting.session.brew_method.to_value()
        );
        let _ = writeln!(prompt, "Flavors detected: {flavors:?}");
        let _ = writeln!(
            prompt,
            "Notes: {}\n---",
            tasting.session.session_notes.as_deref().unwrap_or("None")
        );
    }

    prompt.push_str(
        "\nBased on this tasting history, provide a comprehensive analysis:\n\n\
         1. FLAVOR PREFERENCES: What flavor profiles does this person prefer?\n\
         2. INTENSITY PREFERENCES: Do they prefer subtle or bold flavors?\n\
         3. COFFEE STYLE: What types of coffees should they seek out?\n\
         4. BREWING RECOMMENDATIONS: Any patterns in their preferred brewing methods?\n\
         5. FLAVOR DISCOVERY: What new flavors might they enjoy?\n\n\
         Provide specific, actionable recommendations for their next coffee purchase.",
    );
    prompt
}

// ── GetTasteProfile ──────────────────────────────────────────────────────────

pub struct GetTasteProfileUseCase<T: TastingRepository> {
    pub tastings: T,
}

impl<T: TastingRepository> GetTasteProfileUseCase<T> {
    /// Aggregated taste profile straight from the tasting history, no LLM.
    pub async fn execute(&self, user_id: &str) -> Result<TasteProfile, CatalogError> {
        let tastings = self
            .tastings
            .get_by_user_id(
                user_id,
                PageQuery {
                    skip: 0,
                    limit: ANALYSIS_HISTORY_LIMIT,
                },
            )
            .await?;
        Ok(build_profile(&tastings))
    }
}

// ── AnalyzePreferences ───────────────────────────────────────────────────────

pub struct AnalyzePreferencesUseCase<T: TastingRepository, A: PreferenceAnalyzerPort> {
    pub tastings: T,
    pub analyzer: A,
}

impl<T: TastingRepository, A: PreferenceAnalyzerPort> AnalyzePreferencesUseCase<T, A> {
    /// LLM preference analysis. With no history the canned message comes
    /// back without touching the analyzer.
    pub async fn execute(&self, user_id: &str) -> Result<PreferenceAnalysis, CatalogError> {
        let tastings = self
            .tastings
            .get_by_user_id(
                user_id,
                PageQuery {
                    skip: 0,
                    limit: ANALYSIS_HISTORY_LIMIT,
                },
            )
            .await?;

        if tastings.is_empty() {
            return Ok(PreferenceAnalysis {
                user_id: user_id.to_owned(),
                total_tastings: 0,
                flavor_analysis: NO_DATA_MESSAGE.to_owned(),
            });
        }

        let profile = build_profile(&tastings);
        let prompt = build_prompt(&profile, &tastings);
        let analysis = self.analyzer.analyze(&prompt).await?;

        Ok(PreferenceAnalysis {
            user_id: user_id.to_owned(),
            total_tastings: tastings.len() as u64,
            flavor_analysis: analysis,
        })
    }
}
