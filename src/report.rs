// HTML report: per-offer fragments, summary line and the full document
use crate::model::{OfferDetail, RenderError};
use crate::pipeline::MatchTally;
use crate::utils::{escape_html, plural};
use chrono::{DateTime, Local};

pub const REPORT_TITLE: &str = "Woot Sniper";
pub const SEPARATOR: &str = "\n<hr/>\n";

const FEATURES_STYLE: &str = ".features { font-size: 0.9em; color: #333; \
     border-left: 3px solid #ccc; padding-left: 1em; margin: 0.5em 0 1em 0; }";

/// Renders one offer. The offer must carry at least one photo and one item.
pub fn render_offer(detail: &OfferDetail) -> Result<String, RenderError> {
    let photo = detail
        .photos
        .first()
        .ok_or_else(|| RenderError::MissingPhoto(detail.id.clone()))?;
    let item = detail
        .items
        .first()
        .ok_or_else(|| RenderError::MissingItem(detail.id.clone()))?;

    let url = escape_html(&detail.url);
    let subtitle = detail
        .subtitle
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(|s| format!("<p class=\"subtitle\">{}</p>\n", escape_html(s)))
        .unwrap_or_default();

    Ok(format!(
        "<div class=\"offer\">\n\
         <a href=\"{url}\"><img src=\"{img}\" width=\"{w}\" height=\"{h}\" alt=\"{alt}\"/></a>\n\
         <h2><a href=\"{url}\">{title}</a></h2>\n\
         {subtitle}\
         <p class=\"price\">${price:.2}</p>\n\
         <div class=\"features\">{features}</div>\n\
         </div>",
        url = url,
        img = escape_html(&photo.url),
        w = photo.width,
        h = photo.height,
        alt = escape_html(&detail.title),
        title = escape_html(&detail.title),
        subtitle = subtitle,
        price = item.sale_price,
        features = detail.features.as_deref().unwrap_or(""),
    ))
}

/// "Found 2 offers across 3 events matching: latitude, poweredge"
pub fn build_summary(offer_count: usize, event_count: usize, tally: &MatchTally) -> String {
    format!(
        "Found {} across {} matching: {}",
        plural(offer_count, "offer"),
        plural(event_count, "event"),
        tally.labels().join(", ")
    )
}

pub fn build_document(
    summary: &str,
    fragments: &[String],
    generated_at: DateTime<Local>,
) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\"/>\n");
    html.push_str(&format!("<title>{}</title>\n", REPORT_TITLE));
    html.push_str(&format!("<style>{}</style>\n", FEATURES_STYLE));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", REPORT_TITLE));
    html.push_str(&format!(
        "<p class=\"timestamp\">Generated {}</p>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    html.push_str(&format!("<p class=\"summary\">{}</p>\n", escape_html(summary)));
    html.push_str(&fragments.join(SEPARATOR));
    html.push_str("\n</body>\n</html>\n");

    html
}
