use std::net::SocketAddr;

use axum::{Router, extract::Path, Json};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::log;

use crate::{
    api_match_details::{ApiMatchDetailsService, NOT_FOUND_MESSAGE},
    error::ApiError,
    fixture_service::{FixtureKind, FixtureService},
    listing_service::ListingService,
    models::{LeagueId, MatchKey},
    models_api::{envelope::ApiResponse, fixture::{ApiFixtures, ApiResults}, listings::{ApiCups, ApiHomeListings, ApiLeagues}, match_details::ApiMatchDetails, standings::ApiTable},
    standing_service::StandingService,
};

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

fn parse_league(league: &str) -> Result<LeagueId, ApiError> {
    league.parse().map_err(|_| ApiError::InvalidRequest(format!("Invalid league '{league}'")))
}

pub struct Api;
impl Api {
    pub fn router() -> Router {
        Router::new()
            .route("/api/data-home", axum::routing::get(Api::get_home))
            .route("/api/leagues-all", axum::routing::get(Api::get_leagues))
            .route("/api/cups-all", axum::routing::get(Api::get_cups))
            .route("/api/fixtures/:league", axum::routing::get(Api::get_fixtures))
            .route("/api/results/:league", axum::routing::get(Api::get_results))
            .route("/api/table/:league", axum::routing::get(Api::get_table))
            .route("/api/match-details/*match_key", axum::routing::get(Api::get_match_details))

            .route("/", axum::routing::get(Api::root))
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
            )
    }

    pub async fn serve(port: u16) -> anyhow::Result<()> {
        let app = Api::router();
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }

    async fn root() -> &'static str {
        "Back of the net"
    }

    async fn get_home() -> ApiResult<ApiHomeListings> {
        Ok(Json(ApiResponse::success(ListingService::read_home()?)))
    }

    async fn get_leagues() -> ApiResult<ApiLeagues> {
        Ok(Json(ApiResponse::success(ListingService::read_leagues()?)))
    }

    async fn get_cups() -> ApiResult<ApiCups> {
        Ok(Json(ApiResponse::success(ListingService::read_cups()?)))
    }

    async fn get_fixtures(Path(league): Path<String>) -> ApiResult<ApiFixtures> {
        let league = parse_league(&league)?;
        let fixtures = FixtureService::update(FixtureKind::Fixtures, &league).await?;
        Ok(Json(ApiResponse::success(ApiFixtures { fixtures })))
    }

    async fn get_results(Path(league): Path<String>) -> ApiResult<ApiResults> {
        let league = parse_league(&league)?;
        let results = FixtureService::update(FixtureKind::Results, &league).await?;
        Ok(Json(ApiResponse::success(ApiResults { results })))
    }

    async fn get_table(Path(league): Path<String>) -> ApiResult<ApiTable> {
        let league = parse_league(&league)?;
        let table = StandingService::update(&league).await?;
        Ok(Json(ApiResponse::success(ApiTable { table })))
    }

    async fn get_match_details(Path(match_key): Path<String>) -> ApiResult<ApiMatchDetails> {
        let key: MatchKey = match_key.parse()
            .map_err(|_| ApiError::InvalidRequest(format!("Invalid match '{match_key}'")))?;
        let rsp = match ApiMatchDetailsService::read(&key).await {
            Some(details) => ApiResponse::success(details),
            None => ApiResponse::failure(NOT_FOUND_MESSAGE),
        };
        Ok(Json(rsp))
    }
}
