//! Domain entities - the core business objects.

mod chart;
mod post;
mod query;
mod user;

pub use chart::{
    BrandShare, ChartData, ChartKind, CoffeePoint, MoodWeek, SnackPoint, TeamCoffeeSeries,
    TeamSnackSeries, WorkoutWeek,
};
pub use post::{
    Category, CategoryFilter, MAX_TAG_LEN, MAX_TAGS, NewPost, Post, PostPatch, UnknownCategory,
    parse_tags,
};
pub use query::{PostQuery, SortField, SortOrder, UnknownSort};
pub use user::{Session, User};
