use board_core::domain::{
    Category, CategoryFilter, NewPost, Post, PostPatch, PostQuery, SortField, SortOrder,
    parse_tags,
};
use board_core::error::DomainError;
use board_shared::ListResponse;

use super::Context;
use crate::error::{CliError, CliResult};

/// Longest body the editor accepts, in characters.
const MAX_BODY_LEN: usize = 2000;

#[derive(Debug, clap::Subcommand)]
pub enum PostsCommand {
    /// List posts with optional search, filter and sort
    List(List),

    /// Show a single post
    Show {
        id: String,
    },

    /// Write a new post as the signed-in user
    Create(Create),

    /// Change fields of an existing post
    Update(Update),

    /// Delete a post
    Delete {
        id: String,
    },
}

impl PostsCommand {
    pub async fn run(self, ctx: &Context) -> CliResult<()> {
        match self {
            PostsCommand::List(cmd) => cmd.run(ctx).await,
            PostsCommand::Show { id } => {
                let post = ctx.api.get_post(&id, Some(&ctx.interrupt_signal())).await?;
                ctx.emit(&post, print_post)
            }
            PostsCommand::Create(cmd) => cmd.run(ctx).await,
            PostsCommand::Update(cmd) => cmd.run(ctx).await,
            PostsCommand::Delete { id } => {
                let response = ctx
                    .api
                    .delete_post(&id, Some(&ctx.interrupt_signal()))
                    .await?;
                ctx.emit(&response, |_| println!("Deleted {id}"))
            }
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct List {
    /// Case-insensitive match on title, body or any tag
    #[arg(short, long)]
    search: Option<String>,

    /// NOTICE, QNA, FREE or All
    #[arg(short, long, default_value = "All")]
    category: CategoryFilter,

    /// title or createdAt
    #[arg(long)]
    sort: Option<SortField>,

    /// asc or desc (desc when omitted)
    #[arg(long)]
    order: Option<SortOrder>,

    /// Only posts written by the signed-in user
    #[arg(long, conflicts_with = "user")]
    mine: bool,

    /// Only posts written by this user id
    #[arg(long)]
    user: Option<String>,
}

impl List {
    fn query(self, ctx: &Context) -> CliResult<PostQuery> {
        let user_id = if self.mine {
            let user = ctx
                .api
                .session()
                .current_user()
                .ok_or(DomainError::Unauthenticated)?;
            Some(user.id)
        } else {
            self.user
        };

        Ok(PostQuery {
            user_id,
            search: self.search,
            category: self.category,
            sort_field: self.sort,
            sort_order: self.order,
        })
    }

    async fn run(self, ctx: &Context) -> CliResult<()> {
        let query = self.query(ctx)?;
        let response = ctx
            .api
            .list_posts(&query, Some(&ctx.interrupt_signal()))
            .await?;
        ctx.emit(&response, print_table)
    }
}

#[derive(Debug, clap::Args)]
pub struct Create {
    #[arg(long)]
    title: String,

    #[arg(long, default_value = "")]
    body: String,

    #[arg(long, default_value = "NOTICE")]
    category: Category,

    /// Comma-separated, at most 5 tags of up to 24 characters
    #[arg(long)]
    tags: Option<String>,
}

impl Create {
    async fn run(self, ctx: &Context) -> CliResult<()> {
        validate_fields(Some(self.title.as_str()), Some(self.body.as_str()))?;

        let post = NewPost {
            title: self.title,
            body: self.body,
            category: self.category,
            tags: self.tags.as_deref().map(parse_tags).unwrap_or_default(),
        };
        let created = ctx
            .api
            .create_post(post, Some(&ctx.interrupt_signal()))
            .await?;
        ctx.emit(&created, |p| println!("Created {}", p.id))
    }
}

#[derive(Debug, clap::Args)]
pub struct Update {
    id: String,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    body: Option<String>,

    #[arg(long)]
    category: Option<Category>,

    /// Comma-separated; replaces the whole tag list
    #[arg(long)]
    tags: Option<String>,
}

impl Update {
    fn patch(&self) -> CliResult<PostPatch> {
        validate_fields(self.title.as_deref(), self.body.as_deref())?;

        let patch = PostPatch {
            title: self.title.clone(),
            body: self.body.clone(),
            category: self.category,
            tags: self.tags.as_deref().map(parse_tags),
        };
        if patch.is_empty() {
            return Err(CliError::Input("nothing to update".to_string()));
        }
        Ok(patch)
    }

    async fn run(self, ctx: &Context) -> CliResult<()> {
        let patch = self.patch()?;
        let updated = ctx
            .api
            .update_post(&self.id, patch, Some(&ctx.interrupt_signal()))
            .await?;
        ctx.emit(&updated, print_post)
    }
}

fn validate_fields(title: Option<&str>, body: Option<&str>) -> CliResult<()> {
    if title.is_some_and(|t| t.trim().is_empty()) {
        return Err(CliError::Input("title must not be blank".to_string()));
    }
    if body.is_some_and(|b| b.chars().count() > MAX_BODY_LEN) {
        return Err(CliError::Input(format!(
            "body is limited to {MAX_BODY_LEN} characters"
        )));
    }
    Ok(())
}

fn print_table(response: &ListResponse<Post>) {
    if response.is_empty() {
        println!("No posts");
        return;
    }
    println!(
        "{:<4} {:<34} {:<8} {:<12} {}",
        "No.", "Title", "Category", "Author", "Time"
    );
    for (i, post) in response.items.iter().enumerate() {
        println!(
            "{:<4} {:<34} {:<8} {:<12} {}",
            i + 1,
            post.title,
            post.category.as_str(),
            author(post),
            post.created_at
        );
    }
}

fn author(post: &Post) -> &str {
    post.email.as_deref().unwrap_or(&post.user_id)
}

fn print_post(post: &Post) {
    println!("{}", post.title);
    println!("  id:       {}", post.id);
    println!("  category: {}", post.category);
    println!("  author:   {}", author(post));
    println!("  created:  {}", post.created_at);
    if !post.tags.is_empty() {
        println!("  tags:     {}", post.tags.join(", "));
    }
    println!();
    println!("{}", post.body);
}
