//! Narrative templates - the fixed, designer-authored insight content.
//!
//! One template per flavour archetype; the payload builder frames the same
//! template differently per analysis type. Lookups for archetypes missing
//! from a catalog fall back to the default archetype's template, because the
//! UX must never show nothing.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::Score;
use crate::domain::insight::{
    AnalysisType, AttachmentStyle, CompatibilityInsight, EmotionalProfile, GrowthInsight,
    InsightPayload, Narrative, PersonalityInsight,
};
use crate::domain::quiz::Archetype;

/// Fixed narrative material for one flavour archetype.
#[derive(Debug, Clone)]
pub struct FlavourTemplate {
    /// One-line essence of the flavour, woven into summaries.
    pub essence: &'static str,
    pub attachment_style: AttachmentStyle,
    pub emotional_maturity: f64,
    pub emotional_availability: f64,
    pub average_compatibility: f64,
    pub strengths: &'static [&'static str],
    pub growth_areas: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    pub confidence: f64,
}

impl FlavourTemplate {
    /// Builds a payload of the requested analysis type from this template.
    ///
    /// Deterministic: the same template and type always produce an
    /// identical payload.
    pub fn build_payload(&self, archetype: Archetype, analysis_type: AnalysisType) -> InsightPayload {
        let narrative = Narrative {
            summary: self.summary_for(archetype, analysis_type),
            strengths: to_strings(self.strengths),
            growth_areas: to_strings(self.growth_areas),
            recommendations: to_strings(self.recommendations),
            confidence: Score::new(self.confidence),
        };
        let profile = EmotionalProfile {
            attachment_style: self.attachment_style.clone(),
            emotional_maturity: self.emotional_maturity,
            emotional_availability: self.emotional_availability,
        };

        match analysis_type {
            AnalysisType::Personality => InsightPayload::Personality(PersonalityInsight {
                narrative,
                emotional_profile: profile,
            }),
            AnalysisType::Compatibility => InsightPayload::Compatibility(CompatibilityInsight {
                narrative,
                emotional_profile: profile,
                average_compatibility: Some(self.average_compatibility),
            }),
            AnalysisType::Growth => InsightPayload::Growth(GrowthInsight { narrative }),
        }
    }

    fn summary_for(&self, archetype: Archetype, analysis_type: AnalysisType) -> String {
        match analysis_type {
            AnalysisType::Personality => format!(
                "Your relationship history reads {}: {}",
                archetype, self.essence
            ),
            AnalysisType::Compatibility => format!(
                "As a {} type, {} That shapes who you click with most easily.",
                archetype, self.essence
            ),
            AnalysisType::Growth => format!(
                "Growth for a {} type starts where the pattern repeats: {}",
                archetype, self.essence
            ),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// A catalog of flavour templates with fallback lookup.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: HashMap<Archetype, FlavourTemplate>,
}

impl TemplateCatalog {
    /// Creates a catalog from an explicit template map.
    pub fn new(templates: HashMap<Archetype, FlavourTemplate>) -> Self {
        Self { templates }
    }

    /// Looks up the template for an archetype, falling back to the default
    /// archetype's template on a miss.
    ///
    /// # Panics
    ///
    /// Panics if the catalog lacks both the requested archetype and the
    /// default archetype. The shipped catalog covers every archetype.
    pub fn get(&self, archetype: Archetype) -> &FlavourTemplate {
        self.templates
            .get(&archetype)
            .or_else(|| self.templates.get(&Archetype::DEFAULT))
            .expect("template catalog must contain the default archetype")
    }

    /// Returns true if the catalog has a template for the archetype itself,
    /// without fallback.
    pub fn contains(&self, archetype: Archetype) -> bool {
        self.templates.contains_key(&archetype)
    }
}

static CATALOG: Lazy<TemplateCatalog> = Lazy::new(|| {
    let mut templates = HashMap::new();
    templates.insert(
        Archetype::Chocolate,
        FlavourTemplate {
            essence: "you fall hard and fast, and you expect the same intensity back.",
            attachment_style: AttachmentStyle::Anxious,
            emotional_maturity: 0.6,
            emotional_availability: 0.8,
            average_compatibility: 0.65,
            strengths: &["all-in devotion", "physical warmth", "infectious energy"],
            growth_areas: &["pacing", "tolerating quiet stretches"],
            recommendations: &[
                "Let a connection breathe before naming it",
                "Notice when intensity is standing in for intimacy",
            ],
            confidence: 0.85,
        },
    );
    templates.insert(
        Archetype::Vanilla,
        FlavourTemplate {
            essence: "you build steadily and rarely rock the boat.",
            attachment_style: AttachmentStyle::Secure,
            emotional_maturity: 0.75,
            emotional_availability: 0.7,
            average_compatibility: 0.7,
            strengths: &["consistency", "patience", "easy companionship"],
            growth_areas: &["voicing needs early", "risking friction"],
            recommendations: &[
                "Say the uncomfortable thing a week sooner",
                "Plan one thing that scares you a little",
            ],
            confidence: 0.85,
        },
    );
    templates.insert(
        Archetype::Strawberry,
        FlavourTemplate {
            essence: "you lead with sweetness and read every gesture as a sign.",
            attachment_style: AttachmentStyle::Anxious,
            emotional_maturity: 0.65,
            emotional_availability: 0.75,
            average_compatibility: 0.6,
            strengths: &["open affection", "quick forgiveness", "romantic imagination"],
            growth_areas: &["sitting with ambiguity", "self-soothing"],
            recommendations: &[
                "Wait a day before reading meaning into silence",
                "Keep one evening a week that is only yours",
            ],
            confidence: 0.8,
        },
    );
    templates.insert(
        Archetype::Caramel,
        FlavourTemplate {
            essence: "you warm up slowly, then hold on with both hands.",
            attachment_style: AttachmentStyle::Secure,
            emotional_maturity: 0.7,
            emotional_availability: 0.6,
            average_compatibility: 0.65,
            strengths: &["loyalty", "practical care", "calm under strain"],
            growth_areas: &["showing feeling before it is safe", "spontaneity"],
            recommendations: &[
                "Name what you feel while it is still small",
                "Accept one unplanned invitation a month",
            ],
            confidence: 0.8,
        },
    );
    templates.insert(
        Archetype::Coffee,
        FlavourTemplate {
            essence: "you show love by doing, and words come second.",
            attachment_style: AttachmentStyle::Avoidant,
            emotional_maturity: 0.7,
            emotional_availability: 0.5,
            average_compatibility: 0.6,
            strengths: &["reliability", "problem solving", "clear routines"],
            growth_areas: &["talking about feelings, not logistics", "receiving care"],
            recommendations: &[
                "Ask one feelings question before fixing anything",
                "Let someone do something for you without evening the score",
            ],
            confidence: 0.8,
        },
    );
    templates.insert(
        Archetype::Mint,
        FlavourTemplate {
            essence: "you need air, and closeness works best with an open window.",
            attachment_style: AttachmentStyle::Avoidant,
            emotional_maturity: 0.65,
            emotional_availability: 0.45,
            average_compatibility: 0.55,
            strengths: &["self-sufficiency", "honesty about limits", "low drama"],
            growth_areas: &["staying present during conflict", "asking for company"],
            recommendations: &[
                "Say 'I need an hour' instead of disappearing",
                "Invite someone into one solitary ritual",
            ],
            confidence: 0.8,
        },
    );
    templates.insert(
        Archetype::Chilli,
        FlavourTemplate {
            essence: "you run hot, argue bright, and bore easily.",
            attachment_style: AttachmentStyle::Fearful,
            emotional_maturity: 0.55,
            emotional_availability: 0.65,
            average_compatibility: 0.5,
            strengths: &["passion", "candour", "resilience after blowups"],
            growth_areas: &["repair after conflict", "steadiness between sparks"],
            recommendations: &[
                "Close every argument with one concrete repair",
                "Find the thrill in the third month, not just the first",
            ],
            confidence: 0.75,
        },
    );
    templates.insert(
        Archetype::Coconut,
        FlavourTemplate {
            essence: "you take time to open, and few people see the inside.",
            attachment_style: AttachmentStyle::Fearful,
            emotional_maturity: 0.6,
            emotional_availability: 0.4,
            average_compatibility: 0.55,
            strengths: &["depth once trusted", "discretion", "thoughtful gifts"],
            growth_areas: &["letting people in sooner", "tolerating being seen"],
            recommendations: &[
                "Share one unpolished thing per week",
                "Tell your small circle what they mean to you",
            ],
            confidence: 0.75,
        },
    );
    TemplateCatalog::new(templates)
});

/// Returns the shipped template for an archetype.
pub fn flavour_template(archetype: Archetype) -> &'static FlavourTemplate {
    CATALOG.get(archetype)
}
