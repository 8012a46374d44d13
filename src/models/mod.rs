pub mod affinity;
pub mod instrument;
pub mod questionnaire;
pub mod risk;

pub use affinity::{AffinityRequest, AffinityResponse, AssetCategory, CategoryMatch, ASSET_CATALOG};
pub use instrument::{Instrument, Quote, SymbolRecord};
pub use questionnaire::{EstimateRequest, ProfileDocument, PsychologicalAssessment, RiskTolerance, ScoredProfile};
pub use risk::{ColorKey, OrderingPolicy, RiskBand, RiskPreset, RiskProfile};
