use crate::infra::load_service;
use chrono::{DateTime, Local};
use clap::Args;
use listing_risk::config::AppConfig;
use listing_risk::error::AppError;
use listing_risk::listings::assessment::{RawListing, RiskAssessment, RiskGrade};
use listing_risk::listings::capture::ListingPage;
use listing_risk::telemetry::{self, LogSink};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Neighborhood baseline CSV; defaults to APP_BASELINE_CSV
    #[arg(long)]
    baseline_csv: Option<PathBuf>,
    /// Listing address, e.g. "서울시 성북구 상월곡동"
    #[arg(long)]
    address: Option<String>,
    /// Management fee as shown on the listing, e.g. "관리비 9.5만원"
    #[arg(long)]
    fee: Option<String>,
    /// Deposit in 만원
    #[arg(long)]
    deposit: Option<String>,
    /// Monthly rent in 만원
    #[arg(long)]
    rent: Option<String>,
    /// Exclusive area, e.g. "21.45m²"
    #[arg(long)]
    area: Option<String>,
    /// Free-text listing description
    #[arg(long)]
    description: Option<String>,
    /// File holding the captured body text of a listing page
    #[arg(long, conflicts_with_all = ["address", "fee", "deposit", "rent", "area", "description"])]
    page_text: Option<PathBuf>,
    /// Location line shown under the page title (used with --page-text)
    #[arg(long, requires = "page_text")]
    location: Option<String>,
    /// Print the assessment as JSON instead of a report
    #[arg(long)]
    json: bool,
}

impl AssessArgs {
    fn raw_listing(&self) -> RawListing {
        RawListing {
            address: self.address.clone(),
            management_fee_text: self.fee.clone(),
            deposit_text: self.deposit.clone(),
            rent_text: self.rent.clone(),
            area_text: self.area.clone(),
            description_text: self.description.clone(),
        }
    }
}

#[derive(Serialize)]
struct AssessmentEnvelope<'a> {
    assessed_at: DateTime<Local>,
    #[serde(flatten)]
    assessment: &'a RiskAssessment,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = args.baseline_csv.clone() {
        config.baseline.csv_path = path;
    }

    // stdout carries the report
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;

    let service = load_service(&config.baseline.csv_path)?;

    let assessment = match &args.page_text {
        Some(path) => {
            let body = std::fs::read_to_string(path)?;
            let location = args.location.clone().unwrap_or_default();
            service.assess_page(&ListingPage::new(location, body))
        }
        None => service.assess(&args.raw_listing()),
    };

    if args.json {
        let envelope = AssessmentEnvelope {
            assessed_at: Local::now(),
            assessment: &assessment,
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        print!("{}", render(&assessment));
    }

    Ok(())
}

fn render(assessment: &RiskAssessment) -> String {
    let listing = &assessment.listing;
    let breakdown = &assessment.breakdown;
    let mut out = String::new();

    out.push_str("Listing\n");
    out.push_str(&format!(
        "  Address:         {}\n",
        assessment.raw.address.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "  Neighborhood:    {}\n",
        listing.neighborhood.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "  Deposit / rent:  {} / {} (만원)\n",
        amount(listing.deposit_amount),
        amount(listing.rent_amount)
    ));
    out.push_str(&format!(
        "  Management fee:  {}\n",
        listing
            .management_fee_amount
            .map(|fee| format!("{:.0}원", fee))
            .unwrap_or_else(|| "-".to_string())
    ));
    out.push_str(&format!(
        "  Area:            {}\n",
        listing
            .area_value
            .map(|area| format!("{}m²", area))
            .unwrap_or_else(|| "-".to_string())
    ));

    out.push_str(&format!(
        "\nRisk grade: {} ({} points)\n",
        assessment.grade_label, breakdown.total_score()
    ));
    out.push_str(&format!("  {}\n", grade_scale(breakdown.grade())));

    out.push_str("\nScore breakdown\n");
    out.push_str(&format!("  Price:     {}\n", breakdown.price_score()));
    out.push_str(&format!(
        "  Keywords:  {}{}\n",
        breakdown.keyword_count(),
        listed(breakdown.found_keywords())
    ));
    out.push_str(&format!(
        "  Fee:       {} ({}){}\n",
        breakdown.fee_score(),
        assessment.fee_verdict_label,
        listed(breakdown.fee_included_categories())
    ));

    out.push_str("\nFindings\n");
    for statement in &assessment.statements {
        out.push_str(&format!("  - {}\n", statement));
    }

    out
}

fn amount(value: Option<f64>) -> String {
    value
        .map(|value| format!("{}", value))
        .unwrap_or_else(|| "-".to_string())
}

fn listed(items: &[String]) -> String {
    if items.is_empty() {
        String::new()
    } else {
        format!(" [{}]", items.join(", "))
    }
}

/// `낮음 · 보통 · [주의] · 위험`
fn grade_scale(current: RiskGrade) -> String {
    RiskGrade::ordered()
        .iter()
        .map(|grade| {
            if *grade == current {
                format!("[{}]", grade.label())
            } else {
                grade.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" · ")
}
