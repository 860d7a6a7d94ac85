//! # Narrative Explanations
//!
//! Optional plain-language explanation of a result that has already been
//! computed. The text is produced by an outside collaborator (a hosted text
//! generation model, typically) behind the [`NarrativeService`] trait.
//!
//! The boundary is typed on both sides: the request carries the finished
//! result record and a fixed prompt template, and the response is checked
//! once here (non-empty, bounded word count). Past that point the text is
//! opaque. A failing service never fails the sizing: [`narrate`] turns the
//! error into a warning next to an empty narrative.
//!
//! [`TemplateNarrator`] is an offline service that writes the paragraph
//! from the numbers alone.
//!
//! ## Example
//!
//! ```rust
//! use inox_core::calculations::footing::{calculate, FootingInput};
//! use inox_core::narrative::{narrate, NarrativeRequest, NarrativeSubject, TemplateNarrator};
//!
//! let footing = calculate(&FootingInput {
//!     label: "S-1".to_string(),
//!     total_load_kgf: 50_000.0,
//!     allowable_soil_pressure_kgf_cm2: 1.5,
//! }).unwrap();
//!
//! let request = NarrativeRequest::new(NarrativeSubject::Footing(footing));
//! let narrated = narrate(&TemplateNarrator, &request);
//! assert!(narrated.narrative.unwrap().contains("65 cm"));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{BeamResult, ColumnResult, FootingResult, StructureResult};
use crate::errors::{CalcError, CalcResult};

/// Hard cap on requested length
pub const MAX_WORDS_LIMIT: u32 = 600;

const PROMPT_TEMPLATE: &str = "You are a structural engineer at a steel fabricator. \
Explain the following {{SUBJECT}} pre-sizing result to a client in {{LANGUAGE}}, \
in at most {{MAX_WORDS}} words. Use only the figures given, do not recompute or \
change them, and state that the result is a pre-sizing to be confirmed by a \
licensed engineer.\n\n{{FACTS}}";

/// Language of the explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt-BR")]
    Portuguese,
}

impl Language {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Brazilian Portuguese",
        }
    }
}

/// Result record to be explained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "result")]
pub enum NarrativeSubject {
    Beam(BeamResult),
    Column(ColumnResult),
    Footing(FootingResult),
    Structure(Box<StructureResult>),
}

impl NarrativeSubject {
    /// Short noun for the prompt
    pub fn kind(&self) -> &'static str {
        match self {
            NarrativeSubject::Beam(_) => "steel beam",
            NarrativeSubject::Column(_) => "steel column",
            NarrativeSubject::Footing(_) => "spread footing",
            NarrativeSubject::Structure(_) => "steel structure",
        }
    }

    /// Key figures, one per line
    pub fn facts(&self) -> Vec<String> {
        match self {
            NarrativeSubject::Beam(b) => vec![
                format!("Beam: {} ({:?})", b.label, b.role),
                format!("Clear span: {:.2} m", b.clear_span_m),
                format!("Maximum moment: {:.0} kgf·m", b.max_moment_kgf_m),
                format!("Required Wx: {:.1} cm³, required Ix: {:.0} cm⁴", b.required_wx_cm3, b.required_ix_cm4),
                format!("Selected profile: {}", b.profile),
                format!("Bending utilization: {:.0}%", b.bending_ratio * 100.0),
                format!("Deflection: {:.2} cm (limit {:.2} cm)", b.deflection_cm, b.allowable_deflection_cm),
                format!("Support reaction: {:.0} kgf", b.reaction.value_kgf),
            ],
            NarrativeSubject::Column(c) => {
                let mut facts = vec![
                    format!("Column: {}", c.label),
                    format!("Height: {:.2} m, axial load: {:.0} kgf", c.height_m, c.axial_load_kgf),
                    format!("Profile: {}", c.check.profile),
                    format!("Slenderness KL/r: {:.0}", c.check.slenderness),
                    format!(
                        "Acting stress: {:.1} MPa, allowable: {:.1} MPa ({:.0}% used)",
                        c.check.acting_stress_mpa, c.check.allowable_stress_mpa, c.check.utilization_percent
                    ),
                    format!("Adequate: {}", if c.check.adequate { "yes" } else { "no" }),
                ];
                if let (Some(sum), Some(consistent)) = (c.reactions_sum_kgf, c.reactions_consistent) {
                    facts.push(format!(
                        "Beam reactions sum to {:.0} kgf ({})",
                        sum,
                        if consistent { "consistent" } else { "inconsistent" }
                    ));
                }
                facts
            }
            NarrativeSubject::Footing(f) => vec![
                format!("Footing: {}", f.label),
                format!("Plan: {:.2} m x {:.2} m ({:.2} m²)", f.side_length_m, f.side_length_m, f.required_area_m2),
                format!("Height: {:.0} cm", f.recommended_height_cm),
                format!("Concrete: {:.2} m³", f.concrete_volume_m3),
            ],
            NarrativeSubject::Structure(s) => vec![
                format!(
                    "Clear spans: {:.2} m x {:.2} m",
                    s.geometry.clear_span_x_m, s.geometry.clear_span_y_m
                ),
                format!("Steel deck: {} at {:.2} m spacing", s.deck.deck.name, s.secondary_spacing_m),
                format!("Secondary beams: {} x {}", s.secondary_count, s.secondary.profile.name),
                format!("Principal beams: 2 x {}", s.principal.profile.name),
                format!("Columns: 4 x {}", s.column.check.profile.name),
                format!(
                    "Footings: {:.2} m square, {:.0} cm high",
                    s.footing.side_length_m, s.footing.recommended_height_cm
                ),
                format!("Steel weight: {:.0} kg", s.total_steel_weight_kg()),
            ],
        }
    }
}

/// Request handed to a narrative service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeRequest {
    /// Result to explain
    pub subject: NarrativeSubject,

    /// Output language
    #[serde(default)]
    pub language: Language,

    /// Upper bound on the explanation length
    pub max_words: u32,
}

impl NarrativeRequest {
    /// English request of up to 150 words
    pub fn new(subject: NarrativeSubject) -> Self {
        NarrativeRequest {
            subject,
            language: Language::English,
            max_words: 150,
        }
    }

    /// Validate request parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_words == 0 || self.max_words > MAX_WORDS_LIMIT {
            return Err(CalcError::invalid_input(
                "max_words",
                self.max_words.to_string(),
                format!("Must be between 1 and {}", MAX_WORDS_LIMIT),
            ));
        }
        Ok(())
    }

    /// Prompt text for a text generation model.
    pub fn prompt(&self) -> String {
        PROMPT_TEMPLATE
            .replace("{{SUBJECT}}", self.subject.kind())
            .replace("{{LANGUAGE}}", self.language.display_name())
            .replace("{{MAX_WORDS}}", &self.max_words.to_string())
            .replace("{{FACTS}}", &self.subject.facts().join("\n"))
    }
}

/// Text checked at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeResponse {
    text: String,
}

impl NarrativeResponse {
    /// Accept raw service output: trimmed, non-empty, at most `max_words`
    /// words.
    pub fn parse(raw: &str, max_words: u32) -> CalcResult<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(CalcError::external_service("narrative", "empty response"));
        }
        let words = text.split_whitespace().count();
        if words > max_words as usize {
            return Err(CalcError::external_service(
                "narrative",
                format!("response has {} words, limit is {}", words, max_words),
            ));
        }
        Ok(NarrativeResponse { text: text.to_string() })
    }

    /// The explanation text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Anything that can explain a result.
pub trait NarrativeService {
    /// Service name for logs and warnings
    fn name(&self) -> &str;

    /// Produce raw explanation text for a request.
    fn generate(&self, request: &NarrativeRequest) -> CalcResult<String>;
}

/// Outcome of [`narrate`]: at most one of the two is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrated {
    pub narrative: Option<String>,
    pub warning: Option<String>,
}

/// Ask a service for an explanation. Never fails: service and validation
/// errors come back as a warning.
pub fn narrate(service: &dyn NarrativeService, request: &NarrativeRequest) -> Narrated {
    let outcome = request
        .validate()
        .and_then(|_| service.generate(request))
        .and_then(|raw| NarrativeResponse::parse(&raw, request.max_words));

    match outcome {
        Ok(response) => {
            tracing::debug!(service = service.name(), subject = request.subject.kind(), "narrative generated");
            Narrated {
                narrative: Some(response.into_text()),
                warning: None,
            }
        }
        Err(e) => {
            tracing::warn!(service = service.name(), error = %e, "narrative unavailable");
            Narrated {
                narrative: None,
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Offline narrator writing a fixed paragraph from the numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl NarrativeService for TemplateNarrator {
    fn name(&self) -> &str {
        "template"
    }

    fn generate(&self, request: &NarrativeRequest) -> CalcResult<String> {
        let pt = request.language == Language::Portuguese;
        let text = match &request.subject {
            NarrativeSubject::Beam(b) if pt => format!(
                "A viga {} vence {:.2} m com momento máximo de {:.0} kgf·m. \
                 O perfil {} atende ao módulo resistente de {:.1} cm³ e à inércia de {:.0} cm⁴ \
                 exigidos, com flecha de {:.2} cm para um limite de {:.2} cm. \
                 Cada apoio recebe até {:.0} kgf.",
                b.label,
                b.clear_span_m,
                b.max_moment_kgf_m,
                b.profile.name,
                b.required_wx_cm3,
                b.required_ix_cm4,
                b.deflection_cm,
                b.allowable_deflection_cm,
                b.reaction.value_kgf
            ),
            NarrativeSubject::Beam(b) => format!(
                "Beam {} spans {:.2} m with a maximum moment of {:.0} kgf·m. \
                 Profile {} provides the required {:.1} cm³ section modulus and {:.0} cm⁴ \
                 moment of inertia, deflecting {:.2} cm against a {:.2} cm limit. \
                 Each support receives up to {:.0} kgf.",
                b.label,
                b.clear_span_m,
                b.max_moment_kgf_m,
                b.profile.name,
                b.required_wx_cm3,
                b.required_ix_cm4,
                b.deflection_cm,
                b.allowable_deflection_cm,
                b.reaction.value_kgf
            ),
            NarrativeSubject::Column(c) if pt => format!(
                "O pilar {} com perfil {} e {:.2} m de altura tem esbeltez {:.0} e tensão atuante \
                 de {:.1} MPa para {:.1} MPa admissível ({:.0}% de aproveitamento): {}.",
                c.label,
                c.check.profile.name,
                c.height_m,
                c.check.slenderness,
                c.check.acting_stress_mpa,
                c.check.allowable_stress_mpa,
                c.check.utilization_percent,
                if c.check.adequate { "atende" } else { "não atende" }
            ),
            NarrativeSubject::Column(c) => format!(
                "Column {} in {} over {:.2} m has a slenderness of {:.0} and an acting stress \
                 of {:.1} MPa against {:.1} MPa allowable ({:.0}% used): {}.",
                c.label,
                c.check.profile.name,
                c.height_m,
                c.check.slenderness,
                c.check.acting_stress_mpa,
                c.check.allowable_stress_mpa,
                c.check.utilization_percent,
                if c.check.adequate { "adequate" } else { "not adequate" }
            ),
            NarrativeSubject::Footing(f) if pt => format!(
                "A sapata {} precisa de {:.2} m² de base, um quadrado de {:.2} m de lado, \
                 com altura recomendada de {:.0} cm e {:.2} m³ de concreto.",
                f.label, f.required_area_m2, f.side_length_m, f.recommended_height_cm, f.concrete_volume_m3
            ),
            NarrativeSubject::Footing(f) => format!(
                "Footing {} needs {:.2} m² of bearing area, a {:.2} m square, \
                 with a recommended height of {:.0} cm and {:.2} m³ of concrete.",
                f.label, f.required_area_m2, f.side_length_m, f.recommended_height_cm, f.concrete_volume_m3
            ),
            NarrativeSubject::Structure(s) if pt => format!(
                "Laje de {:.2} m x {:.2} m em steel deck {}, com {} vigas secundárias {} \
                 a cada {:.2} m, vigas principais {}, pilares {} e sapatas de {:.0} cm. \
                 Peso total de aço: {:.0} kg.",
                s.geometry.clear_span_x_m,
                s.geometry.clear_span_y_m,
                s.deck.deck.name,
                s.secondary_count,
                s.secondary.profile.name,
                s.secondary_spacing_m,
                s.principal.profile.name,
                s.column.check.profile.name,
                s.footing.recommended_height_cm,
                s.total_steel_weight_kg()
            ),
            NarrativeSubject::Structure(s) => format!(
                "A {:.2} m x {:.2} m slab on {} steel deck, carried by {} secondary beams {} \
                 at {:.2} m, principal beams {}, columns {} and {:.0} cm footings. \
                 Total steel weight: {:.0} kg.",
                s.geometry.clear_span_x_m,
                s.geometry.clear_span_y_m,
                s.deck.deck.name,
                s.secondary_count,
                s.secondary.profile.name,
                s.secondary_spacing_m,
                s.principal.profile.name,
                s.column.check.profile.name,
                s.footing.recommended_height_cm,
                s.total_steel_weight_kg()
            ),
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::footing::{self, FootingInput};

    struct FailingService;

    impl NarrativeService for FailingService {
        fn name(&self) -> &str {
            "failing"
        }

        fn generate(&self, _request: &NarrativeRequest) -> CalcResult<String> {
            Err(CalcError::external_service("failing", "connection refused"))
        }
    }

    struct FixedService(&'static str);

    impl NarrativeService for FixedService {
        fn name(&self) -> &str {
            "fixed"
        }

        fn generate(&self, _request: &NarrativeRequest) -> CalcResult<String> {
            Ok(self.0.to_string())
        }
    }

    fn footing_request() -> NarrativeRequest {
        let result = footing::calculate(&FootingInput {
            label: "S-1".to_string(),
            total_load_kgf: 50_000.0,
            allowable_soil_pressure_kgf_cm2: 1.5,
        })
        .unwrap();
        NarrativeRequest::new(NarrativeSubject::Footing(result))
    }

    #[test]
    fn test_prompt_contains_facts() {
        let prompt = footing_request().prompt();
        assert!(prompt.contains("spread footing"));
        assert!(prompt.contains("150 words"));
        assert!(prompt.contains("Height: 65 cm"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_template_narrator() {
        let narrated = narrate(&TemplateNarrator, &footing_request());
        assert!(narrated.warning.is_none());
        assert!(narrated.narrative.unwrap().contains("65 cm"));

        let mut request = footing_request();
        request.language = Language::Portuguese;
        let narrated = narrate(&TemplateNarrator, &request);
        assert!(narrated.narrative.unwrap().starts_with("A sapata S-1"));
    }

    #[test]
    fn test_service_failure_is_a_warning() {
        let request = footing_request();
        let before = request.clone();
        let narrated = narrate(&FailingService, &request);

        assert!(narrated.narrative.is_none());
        assert!(narrated.warning.unwrap().contains("connection refused"));
        assert_eq!(request, before);
    }

    #[test]
    fn test_response_validated_at_boundary() {
        let narrated = narrate(&FixedService("   "), &footing_request());
        assert!(narrated.narrative.is_none());
        assert!(narrated.warning.is_some());

        let mut request = footing_request();
        request.max_words = 3;
        let narrated = narrate(&FixedService("one two three four"), &request);
        assert!(narrated.warning.unwrap().contains("4 words"));

        let narrated = narrate(&FixedService("  fits fine  "), &footing_request());
        assert_eq!(narrated.narrative.as_deref(), Some("fits fine"));
    }

    #[test]
    fn test_invalid_request_is_a_warning() {
        let mut request = footing_request();
        request.max_words = 0;
        let narrated = narrate(&TemplateNarrator, &request);
        assert!(narrated.narrative.is_none());
        assert!(narrated.warning.is_some());
    }

    #[test]
    fn test_parse_errors_are_advisory() {
        let err = NarrativeResponse::parse("", 10).unwrap_err();
        assert!(err.is_advisory());
    }
}
