use serde::{Deserialize, Serialize};

/// Deal summary section of the extraction schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealSummary {
    pub deal_name: String,
    /// "Asset" or "Corporate".
    pub deal_type: String,
    pub target_company: String,
    pub buyer: String,
    pub seller: String,
    pub country: String,
    pub announcement_date: String,
    pub signing_date: String,
    pub closing_date: String,
    pub deal_size_usd: String,
    pub currency: String,
    pub status: String,
}

/// Financials section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Financials {
    pub revenue: String,
    pub ebitda: String,
    pub enterprise_value: String,
    pub ev_ebitda_multiple: String,
    pub debt_assumed: String,
    pub other_key_metrics: String,
}

/// Advisors section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Advisors {
    pub buy_side_advisor: String,
    pub sell_side_advisor: String,
    pub legal_counsel_buyer: String,
    pub legal_counsel_seller: String,
    pub other_advisors: String,
}

/// Power plant details section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerPlantDetails {
    pub project_name: String,
    pub location: String,
    pub capacity_mw: String,
    pub technology_type: String,
    /// Commercial operation date.
    pub cod: String,
}

/// Metadata section, partly model-provided and partly stamped by the
/// extractor after cleaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordMetadata {
    pub deal_id: String,
    pub source_file_name: String,
    pub date_processed: String,
    pub extraction_confidence: String,
    /// Set when model-output parsing failed and the record degraded to
    /// defaults. Empty on success.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub extraction_error: String,
}

/// One extracted, schema-shaped deal record. Every produced record has
/// exactly this section and field shape; fields the model did not return
/// hold the empty-string default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealRecord {
    pub deal_summary: DealSummary,
    pub financials: Financials,
    pub advisors: Advisors,
    pub power_plant_details: PowerPlantDetails,
    pub metadata: RecordMetadata,
}

impl DealRecord {
    /// Render the schema shape as pretty JSON, used as the example structure
    /// inside the extraction prompt.
    pub fn prompt_template() -> String {
        serde_json::to_string_pretty(&DealRecord::default())
            .unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_all_empty() {
        let record = DealRecord::default();
        assert_eq!(record.deal_summary.target_company, "");
        assert_eq!(record.financials.revenue, "");
        assert_eq!(record.metadata.deal_id, "");
    }

    #[test]
    fn deserialize_fills_missing_fields_with_defaults() {
        let record: DealRecord =
            serde_json::from_str(r#"{"deal_summary": {"buyer": "Acme Corp"}}"#).unwrap();
        assert_eq!(record.deal_summary.buyer, "Acme Corp");
        assert_eq!(record.deal_summary.seller, "");
        assert_eq!(record.advisors, Advisors::default());
    }

    #[test]
    fn prompt_template_contains_all_sections() {
        let template = DealRecord::prompt_template();
        for section in [
            "deal_summary",
            "financials",
            "advisors",
            "power_plant_details",
            "metadata",
        ] {
            assert!(template.contains(section), "missing section {section}");
        }
        assert!(template.contains("target_company"));
        assert!(template.contains("capacity_mw"));
    }

    #[test]
    fn extraction_error_omitted_when_empty() {
        let json = serde_json::to_string(&DealRecord::default()).unwrap();
        assert!(!json.contains("extraction_error"));
    }
}
