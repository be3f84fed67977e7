//! Dashboard chart datasets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of dashboard datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    TopCoffeeBrands,
    PopularSnackBrands,
    WeeklyMoodTrend,
    WeeklyWorkoutTrend,
    CoffeeConsumption,
    SnackImpact,
}

impl ChartKind {
    pub const VARIANTS: [ChartKind; 6] = [
        ChartKind::TopCoffeeBrands,
        ChartKind::PopularSnackBrands,
        ChartKind::WeeklyMoodTrend,
        ChartKind::WeeklyWorkoutTrend,
        ChartKind::CoffeeConsumption,
        ChartKind::SnackImpact,
    ];

    /// Path segment the dataset is served under.
    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::TopCoffeeBrands => "top-coffee-brands",
            ChartKind::PopularSnackBrands => "popular-snack-brands",
            ChartKind::WeeklyMoodTrend => "weekly-mood-trend",
            ChartKind::WeeklyWorkoutTrend => "weekly-workout-trend",
            ChartKind::CoffeeConsumption => "coffee-consumption",
            ChartKind::SnackImpact => "snack-impact",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::VARIANTS
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| format!("unknown chart: {s}"))
    }
}

/// One slice of a bar or donut chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandShare {
    pub brand: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodWeek {
    pub week: String,
    pub happy: u32,
    pub tired: u32,
    pub stressed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutWeek {
    pub week: String,
    pub running: u32,
    pub cycling: u32,
    pub stretching: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeePoint {
    pub cups: u32,
    pub bugs: u32,
    pub productivity: u32,
}

/// Per-team line of the coffee consumption chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamCoffeeSeries {
    pub team: String,
    pub series: Vec<CoffeePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnackPoint {
    pub snacks: u32,
    pub meetings_missed: u32,
    pub morale: u32,
}

/// Per-department line of the snack impact chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSnackSeries {
    pub name: String,
    pub metrics: Vec<SnackPoint>,
}

/// A dataset as returned by a chart source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartData {
    Brands(Vec<BrandShare>),
    Mood(Vec<MoodWeek>),
    Workout(Vec<WorkoutWeek>),
    CoffeeConsumption { teams: Vec<TeamCoffeeSeries> },
    SnackImpact { departments: Vec<TeamSnackSeries> },
}

impl ChartData {
    /// Number of top-level points or series.
    pub fn len(&self) -> usize {
        match self {
            ChartData::Brands(items) => items.len(),
            ChartData::Mood(items) => items.len(),
            ChartData::Workout(items) => items.len(),
            ChartData::CoffeeConsumption { teams } => teams.len(),
            ChartData::SnackImpact { departments } => departments.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
