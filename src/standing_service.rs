use std::time::Instant;

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::log;

use crate::{error::ScrapeError, html::{self, or_na}, models::LeagueId, models_api::standings::ApiTableRow, rest_client, CONFIG};

lazy_static! {
    static ref ROWS: Selector = html::selector("tbody tr.sdc-site-table__row");
    static ref TEAM: Selector = html::selector("span.sdc-site-table__name-target");
    static ref RANK: Selector = html::selector(r#"td[headers="th--0"]"#);
    static ref PLAYED: Selector = html::selector(r#"td[headers="th--2"]"#);
    static ref WINS: Selector = html::selector(r#"td[headers="th--3"]"#);
    static ref DRAWS: Selector = html::selector(r#"td[headers="th--4"]"#);
    static ref LOSSES: Selector = html::selector(r#"td[headers="th--5"]"#);
    static ref GOAL_DIFF: Selector = html::selector(r#"td[headers="th--8"]"#);
    static ref POINTS: Selector = html::selector(r#"td[headers="th--9"]"#);
}

impl ApiTableRow {
    fn from_row(row: &ElementRef) -> ApiTableRow {
        ApiTableRow {
            team: or_na(html::first_text(row, &TEAM)),
            rank: or_na(html::first_text(row, &RANK)),
            played: or_na(html::first_text(row, &PLAYED)),
            wins: or_na(html::first_text(row, &WINS)),
            draws: or_na(html::first_text(row, &DRAWS)),
            losses: or_na(html::first_text(row, &LOSSES)),
            goal_difference: or_na(html::first_text(row, &GOAL_DIFF)),
            points: or_na(html::first_text(row, &POINTS)),
        }
    }
}

/// Table rows in page order, behind a blank leading row that clients use as a header slot.
pub fn extract(page: &str) -> Vec<ApiTableRow> {
    let document = Html::parse_document(page);
    std::iter::once(ApiTableRow::default())
        .chain(document.select(&ROWS).map(|row| ApiTableRow::from_row(&row)))
        .collect()
}

pub struct StandingService;
impl StandingService {
    pub async fn update(league: &LeagueId) -> Result<Vec<ApiTableRow>, ScrapeError> {
        let before = Instant::now();
        let url = rest_client::get_table_url(CONFIG.get_base_url(), league);
        let page = rest_client::get_html(&url).await?;
        let table = extract(&page);
        log::info!("[TABLE] {league} {} rows in {:.0?}", table.len() - 1, before.elapsed());
        Ok(table)
    }
}
