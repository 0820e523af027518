use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use tba_api::Endpoint;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// The Blue Alliance API client
///
/// Fetches FIRST Robotics Competition data from The Blue Alliance v2 API and
/// prints the JSON response.
///
/// Every request carries an X-TBA-App-Id header built from the organization,
/// app identifier and app version. Set them once with --save-config, through
/// TBA_ORGANIZATION / TBA_APP_IDENTIFIER / TBA_APP_VERSION, or per call with
/// the flags below.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Organization or person responsible for the requests.
    #[arg(long = "org", global = true, help_heading = "Identity")]
    pub organization: Option<String>,

    /// Identifier of the app or experiment making the requests.
    #[arg(long = "app-id", global = true, help_heading = "Identity")]
    pub app_identifier: Option<String>,

    /// Version of the app making the requests.
    #[arg(long = "app-version", global = true, help_heading = "Identity")]
    pub app_version: Option<String>,

    /// Override the API base URL.
    #[arg(long = "base-url", global = true, help_heading = "Configuration")]
    pub base_url: Option<String>,

    /// Persist the identity and base URL given on the command line to the config file.
    #[arg(long = "save-config", help_heading = "Configuration")]
    pub save_config: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Print compact JSON instead of pretty-printed JSON.
    #[arg(long = "compact", short = 'c', global = true, help_heading = "Output")]
    pub compact: bool,

    /// Mirror log output to stderr in addition to the log file.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One subcommand per API endpoint.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List teams, 500 per page by team number
    TeamList {
        #[arg(default_value_t = 1)]
        page: u32,
    },
    /// Show a team, e.g. frc3128
    Team { team_key: String },
    /// Years a team has participated
    TeamYears { team_key: String },
    /// Media (videos, photos) for a team
    TeamMedia {
        team_key: String,
        /// Restrict to one year
        #[arg(long)]
        year: Option<i32>,
    },
    /// Every event a team has attended
    TeamHistoryEvents { team_key: String },
    /// Every award a team has received
    TeamHistoryAwards { team_key: String },
    /// Every recorded robot of a team
    TeamHistoryRobots { team_key: String },
    /// Districts a team has been part of
    TeamHistoryDistricts { team_key: String },
    /// Events a team attended during a year
    TeamEvents { team_key: String, year: i32 },
    /// Awards a team won at an event
    TeamEventAwards { team_key: String, event_key: String },
    /// Matches a team played at an event
    TeamEventMatches { team_key: String, event_key: String },
    /// All events of a year
    Events { year: i32 },
    /// Show an event, e.g. 2016casd
    Event { event_key: String },
    /// Teams attending an event
    EventTeams { event_key: String },
    /// Matches of an event
    EventMatches { event_key: String },
    /// Team statistics of an event
    EventStats { event_key: String },
    /// Rankings of an event
    EventRankings { event_key: String },
    /// Awards given at an event
    EventAwards { event_key: String },
    /// District points awarded at an event
    EventDistrictPoints { event_key: String },
    /// Show a match, e.g. 2014cmp_f1m1
    Match { match_key: String },
    /// Active districts of a year
    Districts { year: i32 },
    /// Events of a district during a year
    DistrictEvents { district_key: String, year: i32 },
    /// Team rankings of a district during a year
    DistrictRankings { district_key: String, year: i32 },
    /// Teams of a district during a year
    DistrictTeams { district_key: String, year: i32 },
}

impl Command {
    /// The API endpoint this command reads.
    pub fn endpoint(&self) -> Endpoint<'_> {
        match self {
            Command::TeamList { page } => Endpoint::TeamList { page: *page },
            Command::Team { team_key } => Endpoint::Team { team_key },
            Command::TeamYears { team_key } => Endpoint::TeamYearsParticipated { team_key },
            Command::TeamMedia { team_key, year } => Endpoint::TeamMedia {
                team_key,
                year: *year,
            },
            Command::TeamHistoryEvents { team_key } => Endpoint::TeamHistoryEvents { team_key },
            Command::TeamHistoryAwards { team_key } => Endpoint::TeamHistoryAwards { team_key },
            Command::TeamHistoryRobots { team_key } => Endpoint::TeamHistoryRobots { team_key },
            Command::TeamHistoryDistricts { team_key } => {
                Endpoint::TeamHistoryDistricts { team_key }
            }
            Command::TeamEvents { team_key, year } => Endpoint::TeamEventList {
                team_key,
                year: *year,
            },
            Command::TeamEventAwards {
                team_key,
                event_key,
            } => Endpoint::TeamEventAwards {
                team_key,
                event_key,
            },
            Command::TeamEventMatches {
                team_key,
                event_key,
            } => Endpoint::TeamEventMatches {
                team_key,
                event_key,
            },
            Command::Events { year } => Endpoint::EventList { year: *year },
            Command::Event { event_key } => Endpoint::Event { event_key },
            Command::EventTeams { event_key } => Endpoint::EventTeams { event_key },
            Command::EventMatches { event_key } => Endpoint::EventMatches { event_key },
            Command::EventStats { event_key } => Endpoint::EventStats { event_key },
            Command::EventRankings { event_key } => Endpoint::EventRankings { event_key },
            Command::EventAwards { event_key } => Endpoint::EventAwards { event_key },
            Command::EventDistrictPoints { event_key } => {
                Endpoint::EventDistrictPoints { event_key }
            }
            Command::Match { match_key } => Endpoint::Match { match_key },
            Command::Districts { year } => Endpoint::DistrictList { year: *year },
            Command::DistrictEvents { district_key, year } => Endpoint::DistrictEvents {
                district_key,
                year: *year,
            },
            Command::DistrictRankings { district_key, year } => Endpoint::DistrictRankings {
                district_key,
                year: *year,
            },
            Command::DistrictTeams { district_key, year } => Endpoint::DistrictTeams {
                district_key,
                year: *year,
            },
        }
    }
}

/// Whether any command-line flag overrides a config value.
pub fn has_config_overrides(args: &Args) -> bool {
    args.organization.is_some()
        || args.app_identifier.is_some()
        || args.app_version.is_some()
        || args.base_url.is_some()
}
