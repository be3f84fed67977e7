use board_core::domain::{Session, User};
use board_core::error::DomainError;
use board_shared::dto::{LoginRequest, SessionResponse, UserResponse};

use super::Context;
use crate::error::CliResult;

#[derive(Debug, clap::Args)]
pub struct Login {
    #[arg(long)]
    email: String,

    #[arg(long)]
    password: String,
}

impl Login {
    pub async fn run(self, ctx: &Context) -> CliResult<()> {
        let request = LoginRequest {
            email: self.email,
            password: self.password,
        };
        let response = ctx
            .api
            .login(request, Some(&ctx.interrupt_signal()))
            .await?;

        let session = Session {
            token: response.token.clone(),
            user: User::new(response.user.id.clone(), response.user.email.clone()),
        };
        ctx.api
            .session()
            .save(&session)
            .map_err(DomainError::from)?;

        ctx.emit(&response, |r| println!("Signed in as {} ({})", r.user.email, r.user.id))
    }
}

pub fn logout(ctx: &Context) -> CliResult<()> {
    ctx.api.session().clear().map_err(DomainError::from)?;
    tracing::info!("Session cleared");
    Ok(())
}

pub fn whoami(ctx: &Context) -> CliResult<()> {
    let token = ctx.api.session().token().ok_or(DomainError::Unauthenticated)?;
    let claims = ctx
        .api
        .auth()
        .authenticate(&token)
        .map_err(DomainError::from)?;

    let response = SessionResponse {
        expires_at: claims.expires_at().map(|at| at.to_rfc3339()),
        user: UserResponse {
            id: claims.user_id,
            email: claims.email,
        },
    };
    ctx.emit(&response, |s| {
        println!("{} ({})", s.user.email, s.user.id);
        if let Some(at) = &s.expires_at {
            println!("  session expires {at}");
        }
    })
}
