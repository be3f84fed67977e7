//! Constant dashboard datasets.

use async_trait::async_trait;

use board_core::domain::{
    BrandShare, ChartData, ChartKind, CoffeePoint, MoodWeek, SnackPoint, TeamCoffeeSeries,
    TeamSnackSeries, WorkoutWeek,
};
use board_core::error::DomainError;
use board_core::ports::ChartSource;

/// Serves the fixed datasets the dashboard charts are drawn from.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockChartSource;

impl MockChartSource {
    pub fn new() -> Self {
        Self
    }

    pub fn dataset(kind: ChartKind) -> ChartData {
        match kind {
            ChartKind::TopCoffeeBrands => ChartData::Brands(brands(&[
                ("Starbucks", 45),
                ("Dunkin'", 32),
                ("Peet's Coffee", 28),
                ("Tim Hortons", 22),
                ("Costa Coffee", 18),
            ])),
            ChartKind::PopularSnackBrands => ChartData::Brands(brands(&[
                ("Lay's", 38),
                ("Doritos", 35),
                ("Pringles", 29),
                ("Cheetos", 25),
                ("Ruffles", 21),
            ])),
            ChartKind::WeeklyMoodTrend => ChartData::Mood(
                [
                    (45, 30, 25),
                    (50, 25, 25),
                    (40, 35, 25),
                    (55, 20, 25),
                    (48, 27, 25),
                    (42, 33, 25),
                ]
                .iter()
                .enumerate()
                .map(|(i, &(happy, tired, stressed))| MoodWeek {
                    week: week_label(i),
                    happy,
                    tired,
                    stressed,
                })
                .collect(),
            ),
            ChartKind::WeeklyWorkoutTrend => ChartData::Workout(
                [
                    (35, 30, 35),
                    (40, 25, 35),
                    (30, 35, 35),
                    (45, 20, 35),
                    (38, 27, 35),
                    (32, 33, 35),
                ]
                .iter()
                .enumerate()
                .map(|(i, &(running, cycling, stretching))| WorkoutWeek {
                    week: week_label(i),
                    running,
                    cycling,
                    stretching,
                })
                .collect(),
            ),
            ChartKind::CoffeeConsumption => ChartData::CoffeeConsumption {
                teams: vec![
                    coffee_team("Frontend", [(5, 75), (4, 80), (3, 85), (2, 88), (1, 90)]),
                    coffee_team("Backend", [(3, 85), (2, 90), (1, 95), (0, 98), (0, 100)]),
                    coffee_team("AI", [(4, 70), (3, 75), (2, 80), (1, 85), (0, 88)]),
                ],
            },
            ChartKind::SnackImpact => ChartData::SnackImpact {
                departments: vec![
                    snack_team("Frontend", [(3, 65), (2, 75), (1, 82), (0, 87), (0, 90)]),
                    snack_team("Backend", [(2, 72), (1, 82), (0, 88), (0, 92), (0, 95)]),
                    snack_team("AI", [(4, 62), (3, 70), (2, 78), (1, 82), (0, 85)]),
                ],
            },
        }
    }
}

#[async_trait]
impl ChartSource for MockChartSource {
    async fn fetch(&self, kind: ChartKind) -> Result<ChartData, DomainError> {
        Ok(Self::dataset(kind))
    }
}

fn brands(items: &[(&str, u32)]) -> Vec<BrandShare> {
    items
        .iter()
        .map(|&(brand, value)| BrandShare {
            brand: brand.to_string(),
            value,
        })
        .collect()
}

fn week_label(index: usize) -> String {
    format!("Week {}", index + 1)
}

// Points are (bugs, productivity) for 1..=5 cups.
fn coffee_team(team: &str, points: [(u32, u32); 5]) -> TeamCoffeeSeries {
    TeamCoffeeSeries {
        team: team.to_string(),
        series: (1..)
            .zip(points)
            .map(|(cups, (bugs, productivity))| CoffeePoint {
                cups,
                bugs,
                productivity,
            })
            .collect(),
    }
}

// Points are (meetings missed, morale) for 0..=4 snacks.
fn snack_team(name: &str, points: [(u32, u32); 5]) -> TeamSnackSeries {
    TeamSnackSeries {
        name: name.to_string(),
        metrics: (0..)
            .zip(points)
            .map(|(snacks, (meetings_missed, morale))| SnackPoint {
                snacks,
                meetings_missed,
                morale,
            })
            .collect(),
    }
}
