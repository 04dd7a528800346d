use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Document types recognized by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    PressRelease,
    QuarterlyReport,
    AnnualReport,
    InvestorDeck,
    Other,
}

impl DocType {
    /// Scoreable labels in tie-break order: when two labels reach the same
    /// maximum score, the one listed first here wins.
    pub const LABELS: [DocType; 4] = [
        DocType::PressRelease,
        DocType::QuarterlyReport,
        DocType::AnnualReport,
        DocType::InvestorDeck,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::PressRelease => "press_release",
            DocType::QuarterlyReport => "quarterly_report",
            DocType::AnnualReport => "annual_report",
            DocType::InvestorDeck => "investor_deck",
            DocType::Other => "other",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Term lists for one document type. Keywords score 1 per occurrence,
/// phrases score 2.
struct TermSet {
    keywords: &'static [&'static str],
    phrases: &'static [&'static str],
}

const PRESS_RELEASE_TERMS: TermSet = TermSet {
    keywords: &[
        "press release",
        "announces",
        "acquisition",
        "merger",
        "transaction",
        "closing",
        "signing",
        "agreement",
        "forward-looking statements",
        "safe harbor",
    ],
    phrases: &[
        "for immediate release",
        "announced today",
        "pleased to announce",
        "has agreed to acquire",
        "has completed the acquisition",
    ],
};

const QUARTERLY_REPORT_TERMS: TermSet = TermSet {
    keywords: &[
        "quarterly report",
        "q1",
        "q2",
        "q3",
        "q4",
        "quarterly results",
        "earnings",
        "fiscal quarter",
        "three months ended",
        "quarterly financial",
    ],
    phrases: &[
        "quarterly report",
        "financial results",
        "quarterly earnings",
        "fiscal quarter ended",
    ],
};

const ANNUAL_REPORT_TERMS: TermSet = TermSet {
    keywords: &[
        "annual report",
        "form 10-k",
        "fiscal year",
        "annual results",
        "yearly results",
        "12 months ended",
        "annual financial",
        "year ended",
    ],
    phrases: &[
        "annual report",
        "fiscal year ended",
        "year ended december",
        "twelve months ended",
    ],
};

const INVESTOR_DECK_TERMS: TermSet = TermSet {
    keywords: &[
        "investor presentation",
        "company overview",
        "investment highlights",
        "business strategy",
        "market opportunity",
        "financial projections",
        "slide",
        "presentation",
    ],
    phrases: &[
        "investor presentation",
        "company overview",
        "investment thesis",
        "business highlights",
    ],
};

const FINANCIAL_KEYWORDS: &[&str] = &[
    "revenue",
    "ebitda",
    "earnings",
    "profit",
    "loss",
    "financial results",
    "income statement",
    "balance sheet",
    "cash flow",
    "financial performance",
    "million",
    "billion",
];

const MNA_KEYWORDS: &[&str] = &[
    "acquisition",
    "merger",
    "buyout",
    "transaction",
    "deal",
    "acquire",
    "purchase",
    "buy",
    "sell",
    "divestiture",
    "target",
    "buyer",
    "seller",
    "closing",
    "completion",
];

/// At least this many distinct financial keywords mark a financial document.
const FINANCIAL_THRESHOLD: usize = 3;
/// At least this many distinct M&A keywords mark an M&A-related document.
const MNA_THRESHOLD: usize = 2;

const EMPTY_TERMS: TermSet = TermSet {
    keywords: &[],
    phrases: &[],
};

fn term_set(doc_type: DocType) -> &'static TermSet {
    match doc_type {
        DocType::PressRelease => &PRESS_RELEASE_TERMS,
        DocType::QuarterlyReport => &QUARTERLY_REPORT_TERMS,
        DocType::AnnualReport => &ANNUAL_REPORT_TERMS,
        DocType::InvestorDeck => &INVESTOR_DECK_TERMS,
        DocType::Other => &EMPTY_TERMS,
    }
}

/// Count occurrences of `needle` in `haystack`, including overlapping ones.
fn count_overlapping(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        count += 1;
        // Advance one character so overlapping matches are counted.
        let advance = haystack[start + pos..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(1);
        start += pos + advance;
    }
    count
}

/// Rule-based document classifier using weighted keyword and phrase counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentClassifier;

impl DocumentClassifier {
    pub fn new() -> Self {
        Self
    }

    fn score(&self, text_lower: &str, doc_type: DocType) -> usize {
        let terms = term_set(doc_type);
        let keyword_score: usize = terms
            .keywords
            .iter()
            .map(|k| count_overlapping(text_lower, k))
            .sum();
        let phrase_score: usize = terms
            .phrases
            .iter()
            .map(|p| count_overlapping(text_lower, p) * 2)
            .sum();
        keyword_score + phrase_score
    }

    /// Classify a document by its text content.
    ///
    /// Returns the label with the highest weighted score, `Other` when no
    /// term matches at all. Ties resolve to the first label in
    /// [`DocType::LABELS`] reaching the maximum.
    pub fn classify(&self, text: &str) -> DocType {
        let text_lower = text.to_lowercase();

        let mut best = DocType::Other;
        let mut best_score = 0;
        for label in DocType::LABELS {
            let score = self.score(&text_lower, label);
            if score > best_score {
                best = label;
                best_score = score;
            }
        }

        if best_score > 0 {
            tracing::debug!(doc_type = %best, score = best_score, "document classified");
            best
        } else {
            tracing::debug!("document classified as other (no term matched)");
            DocType::Other
        }
    }

    /// Normalized confidence per label, as percentages summing to 100.
    /// Empty when no term matches anywhere.
    pub fn confidences(&self, text: &str) -> BTreeMap<DocType, f64> {
        let text_lower = text.to_lowercase();

        let scores: Vec<(DocType, usize)> = DocType::LABELS
            .iter()
            .map(|&label| (label, self.score(&text_lower, label)))
            .collect();

        let total: usize = scores.iter().map(|(_, s)| s).sum();
        if total == 0 {
            return BTreeMap::new();
        }

        scores
            .into_iter()
            .map(|(label, s)| (label, (s as f64 / total as f64) * 100.0))
            .collect()
    }

    /// Terms from each label's lists that occur in the text. Labels with no
    /// matching term are omitted.
    pub fn indicators(&self, text: &str) -> BTreeMap<DocType, Vec<&'static str>> {
        let text_lower = text.to_lowercase();

        let mut found = BTreeMap::new();
        for label in DocType::LABELS {
            let terms = term_set(label);
            let matched: Vec<&'static str> = terms
                .keywords
                .iter()
                .chain(terms.phrases.iter())
                .filter(|t| text_lower.contains(**t))
                .copied()
                .collect();
            if !matched.is_empty() {
                found.insert(label, matched);
            }
        }
        found
    }

    /// Whether the text contains at least three distinct financial keywords.
    pub fn is_financial(&self, text: &str) -> bool {
        let text_lower = text.to_lowercase();
        let count = FINANCIAL_KEYWORDS
            .iter()
            .filter(|k| text_lower.contains(**k))
            .count();
        count >= FINANCIAL_THRESHOLD
    }

    /// Whether the text contains at least two distinct M&A keywords.
    pub fn is_mna_related(&self, text: &str) -> bool {
        let text_lower = text.to_lowercase();
        let count = MNA_KEYWORDS
            .iter()
            .filter(|k| text_lower.contains(**k))
            .count();
        count >= MNA_THRESHOLD
    }
}
