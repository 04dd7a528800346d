use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use serde_json::Value;

use super::schema::{DealRecord, DealSummary};

static ISO_DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("valid regex"));

/// Merge a parsed model response into a fresh schema instance and apply the
/// cleaning passes: whitespace trim, sentinel collapse, date normalization,
/// and monetary stripping. Fields absent from the response keep the
/// empty-string default.
pub fn merge_and_clean(parsed: &Value) -> DealRecord {
    let mut record = merge_with_schema(parsed);
    normalize_dates(&mut record);
    clean_monetary_values(&mut record);
    record
}

/// Explicit field-by-field copy from the parsed JSON into the typed schema.
/// Unknown sections and fields in the response are dropped.
fn merge_with_schema(parsed: &Value) -> DealRecord {
    let mut record = DealRecord::default();

    let summary = parsed.get("deal_summary");
    record.deal_summary.deal_name = field(summary, "deal_name");
    record.deal_summary.deal_type = field(summary, "deal_type");
    record.deal_summary.target_company = field(summary, "target_company");
    record.deal_summary.buyer = field(summary, "buyer");
    record.deal_summary.seller = field(summary, "seller");
    record.deal_summary.country = field(summary, "country");
    record.deal_summary.announcement_date = field(summary, "announcement_date");
    record.deal_summary.signing_date = field(summary, "signing_date");
    record.deal_summary.closing_date = field(summary, "closing_date");
    record.deal_summary.deal_size_usd = field(summary, "deal_size_usd");
    record.deal_summary.currency = field(summary, "currency");
    record.deal_summary.status = field(summary, "status");

    let financials = parsed.get("financials");
    record.financials.revenue = field(financials, "revenue");
    record.financials.ebitda = field(financials, "ebitda");
    record.financials.enterprise_value = field(financials, "enterprise_value");
    record.financials.ev_ebitda_multiple = field(financials, "ev_ebitda_multiple");
    record.financials.debt_assumed = field(financials, "debt_assumed");
    record.financials.other_key_metrics = field(financials, "other_key_metrics");

    let advisors = parsed.get("advisors");
    record.advisors.buy_side_advisor = field(advisors, "buy_side_advisor");
    record.advisors.sell_side_advisor = field(advisors, "sell_side_advisor");
    record.advisors.legal_counsel_buyer = field(advisors, "legal_counsel_buyer");
    record.advisors.legal_counsel_seller = field(advisors, "legal_counsel_seller");
    record.advisors.other_advisors = field(advisors, "other_advisors");

    let plant = parsed.get("power_plant_details");
    record.power_plant_details.project_name = field(plant, "project_name");
    record.power_plant_details.location = field(plant, "location");
    record.power_plant_details.capacity_mw = field(plant, "capacity_mw");
    record.power_plant_details.technology_type = field(plant, "technology_type");
    record.power_plant_details.cod = field(plant, "cod");

    let metadata = parsed.get("metadata");
    record.metadata.source_file_name = field(metadata, "source_file_name");
    record.metadata.extraction_confidence = field(metadata, "extraction_confidence");
    // deal_id and date_processed are stamped by the extractor after cleaning;
    // model-provided values are ignored.

    record
}

/// Extract one field as a cleaned string. Strings are trimmed and sentinel
/// values collapse to empty; numbers render as their literal text; anything
/// else (null, arrays, objects, booleans) collapses to the default.
fn field(section: Option<&Value>, name: &str) -> String {
    let Some(value) = section.and_then(|s| s.get(name)) else {
        return String::new();
    };
    match value {
        Value::String(s) => clean_string(s),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Trim whitespace and collapse the sentinel values "", "n/a", "null" and
/// "none" (case-insensitively) to empty string.
fn clean_string(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_lowercase();
    if matches!(lower.as_str(), "" | "n/a" | "null" | "none") {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Normalize the four date-bearing fields to `YYYY-MM-DD` where the value is
/// in a recognized format. Values already starting with `YYYY-MM-DD` are left
/// untouched; unrecognized non-empty values pass through unchanged.
fn normalize_dates(record: &mut DealRecord) {
    for date in [
        &mut record.deal_summary.announcement_date,
        &mut record.deal_summary.signing_date,
        &mut record.deal_summary.closing_date,
        &mut record.power_plant_details.cod,
    ] {
        if date.is_empty() || ISO_DATE_PREFIX.is_match(date) {
            continue;
        }
        if let Some(parsed) = parse_loose_date(date) {
            *date = parsed.format("%Y-%m-%d").to_string();
        }
    }
}

/// Parse a date in one of the formats the completion backend commonly emits.
fn parse_loose_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    for format in ["%d/%m/%Y", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y", "%b %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    None
}

/// Strip the five monetary fields down to digits and decimal points.
fn clean_monetary_values(record: &mut DealRecord) {
    for money in [
        &mut record.deal_summary.deal_size_usd,
        &mut record.financials.revenue,
        &mut record.financials.ebitda,
        &mut record.financials.enterprise_value,
        &mut record.financials.debt_assumed,
    ] {
        if !money.is_empty() {
            *money = money
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
        }
    }
}

/// Generate a deal ID from the target company and announcement date:
/// `DEAL_<first 10 word chars of target>_<first 8 digits of date>`. Falls
/// back to a timestamp-based ID when the target is empty. Not guaranteed
/// unique: identical truncated targets and dates collide.
pub fn generate_deal_id(summary: &DealSummary) -> String {
    if summary.target_company.is_empty() {
        return timestamp_deal_id();
    }

    let target: String = summary
        .target_company
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .take(10)
        .collect();
    let date: String = summary
        .announcement_date
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(8)
        .collect();

    format!("DEAL_{target}_{date}")
}

fn timestamp_deal_id() -> String {
    format!("DEAL_{}", Utc::now().format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_object_round_trips_through_merge() {
        let parsed = json!({
            "deal_summary": {
                "deal_name": "Project Sunrise",
                "deal_type": "Asset",
                "target_company": "Beta Power",
                "buyer": "Acme Corp",
                "seller": "Gamma Holdings",
                "country": "Germany",
                "announcement_date": "2024-03-15",
                "signing_date": "2024-03-20",
                "closing_date": "2024-06-01",
                "deal_size_usd": "500",
                "currency": "USD",
                "status": "Announced"
            },
            "financials": {
                "revenue": "120",
                "ebitda": "45",
                "enterprise_value": "600",
                "ev_ebitda_multiple": "13.3",
                "debt_assumed": "100",
                "other_key_metrics": "Backlog 2 GW"
            },
            "advisors": {
                "buy_side_advisor": "Bank A",
                "sell_side_advisor": "Bank B",
                "legal_counsel_buyer": "Firm C",
                "legal_counsel_seller": "Firm D",
                "other_advisors": "Consultancy E"
            },
            "power_plant_details": {
                "project_name": "Sunrise Solar Park",
                "location": "Bavaria",
                "capacity_mw": "250",
                "technology_type": "Solar",
                "cod": "2025-01-01"
            },
            "metadata": {
                "source_file_name": "sunrise.pdf",
                "extraction_confidence": "high"
            }
        });

        let record = merge_and_clean(&parsed);
        assert_eq!(record.deal_summary.deal_name, "Project Sunrise");
        assert_eq!(record.deal_summary.announcement_date, "2024-03-15");
        assert_eq!(record.financials.ev_ebitda_multiple, "13.3");
        assert_eq!(record.advisors.other_advisors, "Consultancy E");
        assert_eq!(record.power_plant_details.technology_type, "Solar");
        assert_eq!(record.metadata.source_file_name, "sunrise.pdf");
    }

    #[test]
    fn empty_object_yields_all_defaults() {
        let record = merge_and_clean(&json!({}));
        assert_eq!(record, DealRecord::default());
    }

    #[test]
    fn sentinels_collapse_to_empty() {
        let parsed = json!({
            "deal_summary": {
                "buyer": "N/A",
                "seller": "null",
                "country": "None",
                "status": "   "
            }
        });
        let record = merge_and_clean(&parsed);
        assert_eq!(record.deal_summary.buyer, "");
        assert_eq!(record.deal_summary.seller, "");
        assert_eq!(record.deal_summary.country, "");
        assert_eq!(record.deal_summary.status, "");
    }

    #[test]
    fn values_are_whitespace_trimmed() {
        let parsed = json!({"deal_summary": {"buyer": "  Acme Corp  "}});
        let record = merge_and_clean(&parsed);
        assert_eq!(record.deal_summary.buyer, "Acme Corp");
    }

    #[test]
    fn numbers_render_as_literal_text() {
        let parsed = json!({
            "financials": {"revenue": 120.5},
            "power_plant_details": {"capacity_mw": 250}
        });
        let record = merge_and_clean(&parsed);
        assert_eq!(record.financials.revenue, "120.5");
        assert_eq!(record.power_plant_details.capacity_mw, "250");
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let parsed = json!({
            "deal_summary": {"buyer": "Acme", "made_up_field": "x"},
            "made_up_section": {"foo": "bar"}
        });
        let record = merge_and_clean(&parsed);
        assert_eq!(record.deal_summary.buyer, "Acme");
        // The record shape is exactly the schema; nothing extra to assert on.
        assert_eq!(record.financials, Default::default());
    }

    #[test]
    fn model_supplied_deal_id_is_ignored() {
        let parsed = json!({"metadata": {"deal_id": "DEAL_FORGED", "date_processed": "1999"}});
        let record = merge_and_clean(&parsed);
        assert_eq!(record.metadata.deal_id, "");
        assert_eq!(record.metadata.date_processed, "");
    }

    // ── Monetary cleaning ────────────────────────────────────────────

    #[test]
    fn monetary_strips_to_digits_and_points() {
        let parsed = json!({"deal_summary": {"deal_size_usd": "$1,234.56M"}});
        let record = merge_and_clean(&parsed);
        assert_eq!(record.deal_summary.deal_size_usd, "1234.56");
    }

    #[test]
    fn monetary_sentinel_stays_empty() {
        let parsed = json!({"financials": {"revenue": "N/A"}});
        let record = merge_and_clean(&parsed);
        assert_eq!(record.financials.revenue, "");
    }

    #[test]
    fn monetary_without_digits_becomes_empty() {
        let parsed = json!({"financials": {"ebitda": "undisclosed"}});
        let record = merge_and_clean(&parsed);
        assert_eq!(record.financials.ebitda, "");
    }

    #[test]
    fn non_monetary_fields_keep_symbols() {
        let parsed = json!({"financials": {"other_key_metrics": "EV/EBITDA ~12x"}});
        let record = merge_and_clean(&parsed);
        assert_eq!(record.financials.other_key_metrics, "EV/EBITDA ~12x");
    }

    // ── Date normalization ───────────────────────────────────────────

    #[test]
    fn iso_dates_pass_through_untouched() {
        let parsed = json!({"deal_summary": {"announcement_date": "2024-03-15"}});
        let record = merge_and_clean(&parsed);
        assert_eq!(record.deal_summary.announcement_date, "2024-03-15");
    }

    #[test]
    fn slash_dates_normalize_to_iso() {
        let parsed = json!({"deal_summary": {"signing_date": "15/03/2024"}});
        let record = merge_and_clean(&parsed);
        assert_eq!(record.deal_summary.signing_date, "2024-03-15");
    }

    #[test]
    fn textual_dates_normalize_to_iso() {
        let parsed = json!({
            "deal_summary": {"closing_date": "March 15, 2024"},
            "power_plant_details": {"cod": "1 June 2025"}
        });
        let record = merge_and_clean(&parsed);
        assert_eq!(record.deal_summary.closing_date, "2024-03-15");
        assert_eq!(record.power_plant_details.cod, "2025-06-01");
    }

    #[test]
    fn unrecognized_dates_pass_through_unchanged() {
        let parsed = json!({"deal_summary": {"announcement_date": "sometime in Q3"}});
        let record = merge_and_clean(&parsed);
        assert_eq!(record.deal_summary.announcement_date, "sometime in Q3");
    }

    // ── Deal-ID generation ───────────────────────────────────────────

    #[test]
    fn deal_id_truncates_target_and_date() {
        let summary = DealSummary {
            target_company: "Acme Power Co.".into(),
            announcement_date: "2024-03-15".into(),
            ..Default::default()
        };
        assert_eq!(generate_deal_id(&summary), "DEAL_AcmePowerC_20240315");
    }

    #[test]
    fn deal_id_with_missing_date_keeps_target_part() {
        let summary = DealSummary {
            target_company: "Beta".into(),
            ..Default::default()
        };
        assert_eq!(generate_deal_id(&summary), "DEAL_Beta_");
    }

    #[test]
    fn empty_target_falls_back_to_timestamp() {
        let id = generate_deal_id(&DealSummary::default());
        let re = Regex::new(r"^DEAL_\d{8}_\d{6}$").unwrap();
        assert!(re.is_match(&id), "unexpected id: {id}");
    }

    #[test]
    fn identical_inputs_collide_silently() {
        let summary = DealSummary {
            target_company: "Acme Power Holdings".into(),
            announcement_date: "2024-03-15".into(),
            ..Default::default()
        };
        let other = DealSummary {
            target_company: "Acme Power House".into(),
            announcement_date: "2024-03-15".into(),
            ..Default::default()
        };
        // Both truncate to the same 10 word characters.
        assert_eq!(generate_deal_id(&summary), generate_deal_id(&other));
    }
}
