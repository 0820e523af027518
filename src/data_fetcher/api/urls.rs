//! URL building utilities for API endpoints
//!
//! Every endpoint of the API is a variant of [`Endpoint`]. Path parameters are
//! substituted verbatim: keys are opaque identifiers defined by the remote
//! service and are never escaped or encoded.

use std::fmt;

/// One API endpoint together with its path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// Teams paginated by team number, 500 per page.
    TeamList { page: u32 },
    Team { team_key: &'a str },
    TeamYearsParticipated { team_key: &'a str },
    /// Media for a team; `year` selects a single season.
    TeamMedia { team_key: &'a str, year: Option<i32> },
    TeamHistoryEvents { team_key: &'a str },
    TeamHistoryAwards { team_key: &'a str },
    TeamHistoryRobots { team_key: &'a str },
    TeamHistoryDistricts { team_key: &'a str },
    TeamEventList { team_key: &'a str, year: i32 },
    TeamEventAwards { team_key: &'a str, event_key: &'a str },
    TeamEventMatches { team_key: &'a str, event_key: &'a str },
    EventList { year: i32 },
    Event { event_key: &'a str },
    EventTeams { event_key: &'a str },
    EventMatches { event_key: &'a str },
    EventStats { event_key: &'a str },
    EventRankings { event_key: &'a str },
    EventAwards { event_key: &'a str },
    EventDistrictPoints { event_key: &'a str },
    Match { match_key: &'a str },
    DistrictList { year: i32 },
    DistrictEvents { district_key: &'a str, year: i32 },
    DistrictRankings { district_key: &'a str, year: i32 },
    DistrictTeams { district_key: &'a str, year: i32 },
}

impl Endpoint<'_> {
    /// Path of the resource relative to the API base URL.
    ///
    /// # Example
    /// ```
    /// use tba_api::data_fetcher::api::Endpoint;
    ///
    /// let path = Endpoint::TeamMedia { team_key: "frc254", year: Some(2016) }.resource_path();
    /// assert_eq!(path, "team/frc254/2016/media");
    /// ```
    pub fn resource_path(&self) -> String {
        match *self {
            Endpoint::TeamList { page } => format!("teams/{page}"),
            Endpoint::Team { team_key } => format!("team/{team_key}"),
            Endpoint::TeamYearsParticipated { team_key } => {
                format!("team/{team_key}/years_participated")
            }
            Endpoint::TeamMedia {
                team_key,
                year: None,
            } => format!("team/{team_key}/media"),
            Endpoint::TeamMedia {
                team_key,
                year: Some(year),
            } => format!("team/{team_key}/{year}/media"),
            Endpoint::TeamHistoryEvents { team_key } => format!("team/{team_key}/history/events"),
            Endpoint::TeamHistoryAwards { team_key } => format!("team/{team_key}/history/awards"),
            Endpoint::TeamHistoryRobots { team_key } => format!("team/{team_key}/history/robots"),
            Endpoint::TeamHistoryDistricts { team_key } => {
                format!("team/{team_key}/history/districts")
            }
            Endpoint::TeamEventList { team_key, year } => format!("team/{team_key}/{year}/events"),
            Endpoint::TeamEventAwards {
                team_key,
                event_key,
            } => format!("team/{team_key}/event/{event_key}/awards"),
            Endpoint::TeamEventMatches {
                team_key,
                event_key,
            } => format!("team/{team_key}/event/{event_key}/matches"),
            Endpoint::EventList { year } => format!("events/{year}"),
            Endpoint::Event { event_key } => format!("event/{event_key}"),
            Endpoint::EventTeams { event_key } => format!("event/{event_key}/teams"),
            Endpoint::EventMatches { event_key } => format!("event/{event_key}/matches"),
            Endpoint::EventStats { event_key } => format!("event/{event_key}/stats"),
            Endpoint::EventRankings { event_key } => format!("event/{event_key}/rankings"),
            Endpoint::EventAwards { event_key } => format!("event/{event_key}/awards"),
            Endpoint::EventDistrictPoints { event_key } => {
                format!("event/{event_key}/district_points")
            }
            Endpoint::Match { match_key } => format!("match/{match_key}"),
            Endpoint::DistrictList { year } => format!("districts/{year}"),
            Endpoint::DistrictEvents { district_key, year } => {
                format!("district/{district_key}/{year}/events")
            }
            Endpoint::DistrictRankings { district_key, year } => {
                format!("district/{district_key}/{year}/rankings")
            }
            Endpoint::DistrictTeams { district_key, year } => {
                format!("district/{district_key}/{year}/teams")
            }
        }
    }

    /// Full URL of the resource: `api_base_url` followed by the resource path.
    ///
    /// # Example
    /// ```
    /// use tba_api::data_fetcher::api::Endpoint;
    ///
    /// let url = Endpoint::Team { team_key: "frc3128" }.url("https://api.example.com/api/v2/");
    /// assert_eq!(url, "https://api.example.com/api/v2/team/frc3128");
    /// ```
    pub fn url(&self, api_base_url: &str) -> String {
        format!("{api_base_url}{}", self.resource_path())
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resource_path())
    }
}

/// Ensures the base URL ends with a slash so resource paths can be appended directly.
///
/// # Example
/// ```
/// use tba_api::data_fetcher::api::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:8080/api/v2"), "http://localhost:8080/api/v2/");
/// assert_eq!(normalize_base_url("http://localhost:8080/api/v2/"), "http://localhost:8080/api/v2/");
/// ```
pub fn normalize_base_url(api_base_url: &str) -> String {
    if api_base_url.ends_with('/') {
        api_base_url.to_string()
    } else {
        format!("{api_base_url}/")
    }
}
