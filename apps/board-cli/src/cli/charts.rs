use board_core::domain::{ChartData, ChartKind};

use super::Context;
use crate::error::CliResult;

#[derive(Debug, clap::Args)]
pub struct Charts {
    /// Dataset to print (e.g. top-coffee-brands, weekly-mood-trend)
    kind: ChartKind,
}

impl Charts {
    pub async fn run(self, ctx: &Context) -> CliResult<()> {
        let data = ctx
            .api
            .chart(self.kind, Some(&ctx.interrupt_signal()))
            .await?;
        ctx.emit(&data, |data| print_chart(self.kind, data))
    }
}

fn print_chart(kind: ChartKind, data: &ChartData) {
    println!("{kind}");
    match data {
        ChartData::Brands(rows) => {
            for row in rows {
                println!("  {:<16} {:>4}", row.brand, row.value);
            }
        }
        ChartData::Mood(weeks) => {
            println!("  {:<8} {:>6} {:>6} {:>9}", "week", "happy", "tired", "stressed");
            for w in weeks {
                println!("  {:<8} {:>6} {:>6} {:>9}", w.week, w.happy, w.tired, w.stressed);
            }
        }
        ChartData::Workout(weeks) => {
            println!("  {:<8} {:>8} {:>8} {:>11}", "week", "running", "cycling", "stretching");
            for w in weeks {
                println!(
                    "  {:<8} {:>8} {:>8} {:>11}",
                    w.week, w.running, w.cycling, w.stretching
                );
            }
        }
        ChartData::CoffeeConsumption { teams } => {
            for team in teams {
                println!("  {}", team.team);
                for p in &team.series {
                    println!(
                        "    cups={} bugs={} productivity={}",
                        p.cups, p.bugs, p.productivity
                    );
                }
            }
        }
        ChartData::SnackImpact { departments } => {
            for dept in departments {
                println!("  {}", dept.name);
                for p in &dept.metrics {
                    println!(
                        "    snacks={} meetingsMissed={} morale={}",
                        p.snacks, p.meetings_missed, p.morale
                    );
                }
            }
        }
    }
}
