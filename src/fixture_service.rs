use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::log;

use crate::{error::ScrapeError, html::{self, or_na, NOT_AVAILABLE}, models::LeagueId, models_api::fixture::ApiFixture, rest_client, CONFIG};

lazy_static! {
    static ref MARKERS: Selector = html::selector("h3.fixres__header1, h4.fixres__header2, div.fixres__item");
    static ref STATUS_LINK: Selector = html::selector("a.matches__link");
    static ref MATCH_LINK: Selector = html::selector("a.matches__item.matches__link");
    static ref TEAM1: Selector = html::selector("span.matches__participant--side1 span.swap-text--bp30");
    static ref TEAM2: Selector = html::selector("span.matches__participant--side2 span.swap-text--bp30");
    static ref DATE: Selector = html::selector("span.matches__date");
    static ref SCORES: Selector = html::selector("span.matches__teamscores-side");
    static ref INFO: Selector = html::selector("span.matches__item-col.matches__info");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureKind {
    Fixtures,
    Results,
}

impl FixtureKind {
    fn get_url(&self, league: &LeagueId) -> String {
        match self {
            FixtureKind::Fixtures => rest_client::get_fixtures_url(CONFIG.get_base_url(), league),
            FixtureKind::Results => rest_client::get_results_url(CONFIG.get_base_url(), league),
        }
    }
}

enum Marker<'a> {
    Header1(String),
    Header2(String),
    Item(ElementRef<'a>),
}

impl<'a> Marker<'a> {
    fn classify(element: ElementRef<'a>) -> Option<Marker<'a>> {
        let value = element.value();
        match value.name() {
            "h3" if value.classes().any(|c| c == "fixres__header1") => Some(Marker::Header1(html::text(&element))),
            "h4" if value.classes().any(|c| c == "fixres__header2") => Some(Marker::Header2(html::text(&element))),
            "div" if value.classes().any(|c| c == "fixres__item") => Some(Marker::Item(element)),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Headers {
    header1: Option<String>,
    header2: Option<String>,
}

/// Splits a match detail link into its slug path and trailing id.
/// `/football/arsenal-vs-chelsea/482201` gives `("arsenal-vs-chelsea", "482201")`.
fn parse_match_url(url: &str) -> (String, String) {
    let title = url.split_once("/football/")
        .map(|(_, rest)| rest.rsplit_once('/').map(|(path, _)| path).unwrap_or(rest))
        .unwrap_or(NOT_AVAILABLE);
    let item_id = url.rsplit('/').next().unwrap_or(url);
    (title.to_string(), item_id.to_string())
}

fn to_fixture(item: &ElementRef, headers: &Headers) -> ApiFixture {
    let status = or_na(html::first_attr(item, &STATUS_LINK, "data-status"));
    let (title, item_id) = html::first_attr(item, &MATCH_LINK, "href")
        .map(|url| parse_match_url(&url))
        .unwrap_or_else(|| (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()));

    // scores come in pairs or not at all
    let (score1, score2) = match html::all_text(item, &SCORES).as_slice() {
        [score1, score2, ..] => (score1.clone(), score2.clone()),
        _ => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    };

    ApiFixture {
        header1: headers.header1.clone(),
        header2: headers.header2.clone(),
        team1: or_na(html::first_attr(item, &TEAM1, "title")),
        team2: or_na(html::first_attr(item, &TEAM2, "title")),
        time: or_na(html::first_text(item, &DATE)),
        score1,
        score2,
        info: or_na(html::first_text(item, &INFO)),
        status,
        title,
        item_id,
    }
}

/// Extracts every match item of a fixtures or results page in page order.
/// Each record carries the most recent section headers seen before it.
pub fn extract(page: &str) -> Vec<ApiFixture> {
    let document = Html::parse_document(page);
    let (_, fixtures) = document.select(&MARKERS)
        .filter_map(Marker::classify)
        .fold((Headers::default(), Vec::new()), |(mut headers, mut fixtures), marker| {
            match marker {
                Marker::Header1(text) => headers.header1 = Some(text),
                Marker::Header2(text) => headers.header2 = Some(text),
                Marker::Item(item) => fixtures.push(to_fixture(&item, &headers)),
            }
            (headers, fixtures)
        });
    fixtures
}

pub struct FixtureService;
impl FixtureService {
    pub async fn update(kind: FixtureKind, league: &LeagueId) -> Result<Vec<ApiFixture>, ScrapeError> {
        let url = kind.get_url(league);
        let page = rest_client::get_html(&url).await?;
        let fixtures = extract(&page);
        log::info!("[FIXTURES] {:?} {league} {} entries", kind, fixtures.len());
        Ok(fixtures)
    }
}
