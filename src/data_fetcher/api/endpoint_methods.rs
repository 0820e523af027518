//! One table of endpoint wrapper methods, expanded into both clients.
//!
//! Each entry names the method, its parameters and the [`Endpoint`] variant it
//! fetches. Parameter names double as the variant's field names.
//!
//! [`Endpoint`]: super::urls::Endpoint

/// Calls `$emit!` with every endpoint wrapper entry.
///
/// ```ignore
/// impl TbaClient {
///     with_endpoint_methods!(async_endpoint_methods);
/// }
/// ```
macro_rules! with_endpoint_methods {
    ($emit:ident) => {
        $emit! {
            /// Teams whose number lies in `500 * page ..= 500 * page + 499`.
            fn get_team_list(page: u32) => TeamList;
            /// A single team, e.g. `"frc3128"`.
            fn get_team(team_key: &str) => Team;
            fn get_team_years_participated(team_key: &str) => TeamYearsParticipated;
            /// Media (videos, photos) for a team, optionally restricted to one year.
            fn get_team_media(team_key: &str, year: Option<i32>) => TeamMedia;
            fn get_team_history_events(team_key: &str) => TeamHistoryEvents;
            fn get_team_history_awards(team_key: &str) => TeamHistoryAwards;
            fn get_team_history_robots(team_key: &str) => TeamHistoryRobots;
            fn get_team_history_districts(team_key: &str) => TeamHistoryDistricts;
            /// Events attended by a team during `year`.
            fn get_team_event_list(team_key: &str, year: i32) => TeamEventList;
            /// Awards won by a team at one event.
            fn get_team_event_awards(team_key: &str, event_key: &str) => TeamEventAwards;
            /// Matches played by a team at one event.
            fn get_team_event_matches(team_key: &str, event_key: &str) => TeamEventMatches;
            fn get_event_list(year: i32) => EventList;
            /// A single event, e.g. `"2016casd"`.
            fn get_event(event_key: &str) => Event;
            fn get_event_teams(event_key: &str) => EventTeams;
            fn get_event_matches(event_key: &str) => EventMatches;
            /// OPR/DPR/CCWM statistics of an event.
            fn get_event_stats(event_key: &str) => EventStats;
            fn get_event_rankings(event_key: &str) => EventRankings;
            fn get_event_awards(event_key: &str) => EventAwards;
            fn get_event_district_points(event_key: &str) => EventDistrictPoints;
            /// A single match, e.g. `"2014cmp_f1m1"`.
            fn get_match(match_key: &str) => Match;
            fn get_district_list(year: i32) => DistrictList;
            fn get_district_events(district_key: &str, year: i32) => DistrictEvents;
            fn get_district_rankings(district_key: &str, year: i32) => DistrictRankings;
            fn get_district_teams(district_key: &str, year: i32) => DistrictTeams;
        }
    };
}

/// Expands entries into `async fn`s calling `self.fetch_endpoint(..).await`.
macro_rules! async_endpoint_methods {
    ($($(#[$attr:meta])* fn $name:ident($($arg:ident: $ty:ty),*) => $variant:ident;)*) => {
        $(
            $(#[$attr])*
            pub async fn $name(
                &self,
                $($arg: $ty),*
            ) -> Result<::serde_json::Value, $crate::error::AppError> {
                self.fetch_endpoint($crate::data_fetcher::api::urls::Endpoint::$variant { $($arg),* })
                    .await
            }
        )*
    };
}

/// Expands entries into blocking `fn`s calling `self.fetch_endpoint(..)`.
macro_rules! blocking_endpoint_methods {
    ($($(#[$attr:meta])* fn $name:ident($($arg:ident: $ty:ty),*) => $variant:ident;)*) => {
        $(
            $(#[$attr])*
            pub fn $name(
                &self,
                $($arg: $ty),*
            ) -> Result<::serde_json::Value, $crate::error::AppError> {
                self.fetch_endpoint($crate::data_fetcher::api::urls::Endpoint::$variant { $($arg),* })
            }
        )*
    };
}

pub(crate) use {async_endpoint_methods, blocking_endpoint_methods, with_endpoint_methods};
