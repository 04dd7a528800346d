use crate::pipeline::structuring::DealRecord;

pub const DEAL_SUMMARY_SHEET: &str = "Deal Summary";
pub const FINANCIALS_SHEET: &str = "Financials";
pub const ADVISORS_SHEET: &str = "Advisors";
pub const POWER_PLANT_SHEET: &str = "Power Plant Details";
pub const METADATA_SHEET: &str = "Metadata";

/// Sheet names and their fixed column headers, in sink order.
pub const SHEETS: [(&str, &[&str]); 5] = [
    (
        DEAL_SUMMARY_SHEET,
        &[
            "Deal ID",
            "Deal Name",
            "Deal Type",
            "Target Company",
            "Buyer",
            "Seller",
            "Country",
            "Announcement Date",
            "Signing Date",
            "Closing Date",
            "Deal Size (USD)",
            "Currency",
            "Status",
        ],
    ),
    (
        FINANCIALS_SHEET,
        &[
            "Deal ID",
            "Revenue",
            "EBITDA",
            "Enterprise Value",
            "EV/EBITDA Multiple",
            "Debt Assumed",
            "Other Key Metrics",
        ],
    ),
    (
        ADVISORS_SHEET,
        &[
            "Deal ID",
            "Buy-Side Advisor",
            "Sell-Side Advisor",
            "Legal Counsel (Buyer)",
            "Legal Counsel (Seller)",
            "Other Advisors",
        ],
    ),
    (
        POWER_PLANT_SHEET,
        &[
            "Deal ID",
            "Project Name",
            "Location",
            "Capacity (MW)",
            "Technology Type",
            "COD",
        ],
    ),
    (
        METADATA_SHEET,
        &[
            "Deal ID",
            "Source File Name",
            "Date Processed",
            "Extraction Confidence",
            "QC Status",
            "QC Analyst",
            "QC Date",
        ],
    ),
];

/// Build one row per sheet from a record. The metadata-level deal ID is
/// threaded into every section row so all five rows carry the same ID.
pub fn section_rows(record: &DealRecord) -> Vec<(&'static str, Vec<String>)> {
    let deal_id = record.metadata.deal_id.clone();
    let summary = &record.deal_summary;
    let financials = &record.financials;
    let advisors = &record.advisors;
    let plant = &record.power_plant_details;
    let metadata = &record.metadata;

    vec![
        (
            DEAL_SUMMARY_SHEET,
            vec![
                deal_id.clone(),
                summary.deal_name.clone(),
                summary.deal_type.clone(),
                summary.target_company.clone(),
                summary.buyer.clone(),
                summary.seller.clone(),
                summary.country.clone(),
                summary.announcement_date.clone(),
                summary.signing_date.clone(),
                summary.closing_date.clone(),
                summary.deal_size_usd.clone(),
                summary.currency.clone(),
                summary.status.clone(),
            ],
        ),
        (
            FINANCIALS_SHEET,
            vec![
                deal_id.clone(),
                financials.revenue.clone(),
                financials.ebitda.clone(),
                financials.enterprise_value.clone(),
                financials.ev_ebitda_multiple.clone(),
                financials.debt_assumed.clone(),
                financials.other_key_metrics.clone(),
            ],
        ),
        (
            ADVISORS_SHEET,
            vec![
                deal_id.clone(),
                advisors.buy_side_advisor.clone(),
                advisors.sell_side_advisor.clone(),
                advisors.legal_counsel_buyer.clone(),
                advisors.legal_counsel_seller.clone(),
                advisors.other_advisors.clone(),
            ],
        ),
        (
            POWER_PLANT_SHEET,
            vec![
                deal_id.clone(),
                plant.project_name.clone(),
                plant.location.clone(),
                plant.capacity_mw.clone(),
                plant.technology_type.clone(),
                plant.cod.clone(),
            ],
        ),
        (
            METADATA_SHEET,
            vec![
                deal_id,
                metadata.source_file_name.clone(),
                metadata.date_processed.clone(),
                metadata.extraction_confidence.clone(),
                // QC columns are filled by analysts, not by the pipeline.
                String::new(),
                String::new(),
                String::new(),
            ],
        ),
    ]
}
