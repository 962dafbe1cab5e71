use crate::{db::Db, error::ApiError, models_api::listings::{ApiCups, ApiHomeListings, ApiLeagues}, CONFIG};

const LEAGUES_HOME: &str = "leagues-home";
const CUPS_HOME: &str = "cups-home";
const LEAGUES_ALL: &str = "leagues-all";
const CUPS_ALL: &str = "cups-all";

pub struct ListingService;

impl ListingService {
    pub fn read_home() -> Result<ApiHomeListings, ApiError> {
        let db = ListingService::get_db();
        Ok(ApiHomeListings { leagues: db.read_raw(LEAGUES_HOME)?, cups: db.read_raw(CUPS_HOME)? })
    }

    pub fn read_leagues() -> Result<ApiLeagues, ApiError> {
        Ok(ApiLeagues { leagues: ListingService::get_db().read_raw(LEAGUES_ALL)? })
    }

    pub fn read_cups() -> Result<ApiCups, ApiError> {
        Ok(ApiCups { cups: ListingService::get_db().read_raw(CUPS_ALL)? })
    }

    fn get_db() -> Db {
        Db::new(&CONFIG.data_path)
    }
}
