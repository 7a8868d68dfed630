pub struct RankingSettings {
    /// Points awarded to the winning side of a match
    pub points_per_win: u32,
    /// Americano only: rank by points-per-match when ratios differ by more than this
    pub points_ratio_tolerance: f64,
    /// Player ranking: win rates closer than this fall through to set differential
    pub win_rate_tolerance: f64,
    /// Player ranking: differentials closer than this fall through to the next key
    pub diff_tolerance: f64,
    /// How many recent results a streak row keeps
    pub recent_form_window: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            points_per_win: 3,
            points_ratio_tolerance: 0.01,
            win_rate_tolerance: 0.1,
            diff_tolerance: 0.01,
            recent_form_window: 5,
        }
    }
}

pub struct ScheduleSettings {
    /// Independent shuffle-and-group iterations for Americano
    pub mixing_passes: usize,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self { mixing_passes: 2 }
    }
}

pub struct AppConfig {
    pub ranking: RankingSettings,
    pub schedule: ScheduleSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ranking: RankingSettings::default(),
            schedule: ScheduleSettings::default(),
        }
    }
}
