//! # Task-Local Context
//!
//! `tokio::task_local!` carries a value alongside a future instead of
//! through its arguments. The caller scopes the value around the future;
//! anything polled within that scope can read it. That gives the same
//! contract as a subscriber context in reactive toolkits: orthogonal data
//! (auth tokens, tenant ids) rides with the execution, not the payload.
//!
//! The rules the scenes demonstrate:
//! 1. Write at the outermost layer, read from deep inside.
//! 2. Absent keys are readable only as fallbacks (`try_with`).
//! 3. The same future body run under two scopes sees two values.
//! 4. Inner scopes stay inner; the outer chain never sees them.
//! 5. Spawned tasks do not inherit a scope, they get handed one.
//! 6. The auth-token recipe: pairing a payload with scoped credentials.

use std::future::Future;

use reactive_recipe::runtime::setup_tracing;
use tracing::info;

tokio::task_local! {
    static FIRST_NAME: String;
    static LAST_NAME: String;
    static COMPANY: String;
    static ROLE: String;
    static AUTH_TOKEN: String;
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("===== scene: write outside, read inside =====");
    write_outside_read_inside().await;

    info!("===== scene: absent keys =====");
    absent_keys().await;

    info!("===== scene: one future, two scopes =====");
    one_future_two_scopes().await;

    info!("===== scene: inner scopes stay inner =====");
    inner_scopes_stay_inner().await;

    info!("===== scene: spawned tasks get handed a scope =====");
    spawned_tasks_get_handed_a_scope().await?;

    info!("===== scene: auth token =====");
    auth_token().await;

    Ok(())
}

/// The outermost caller provides both names; the greeting is assembled in
/// two reads deep inside the scoped future.
async fn write_outside_read_inside() {
    let scoped = FIRST_NAME.scope(
        "Steve".to_string(),
        LAST_NAME.scope("Jobs".to_string(), async {
            let greeting = FIRST_NAME.with(|first| format!("Hello {first}"));
            LAST_NAME.with(|last| format!("{greeting} {last}"))
        }),
    );
    let message = scoped.await;
    info!(%message, "# onNext");
}

/// Outside a scope the local simply is not there. `try_with` turns that
/// into a recoverable read with a default.
async fn absent_keys() {
    let first_name = FIRST_NAME
        .try_with(|first| first.clone())
        .unwrap_or_else(|_| "no firstName".to_string());
    info!(%first_name, "# Read outside any scope");

    COMPANY
        .scope("Apple".to_string(), async {
            let company = COMPANY
                .try_with(|company| company.clone())
                .unwrap_or_else(|_| "no company".to_string());
            info!(%company, "# Read inside the scope");
        })
        .await;
}

/// Reads the company at poll time.
async fn company_line() -> String {
    COMPANY
        .try_with(|company| format!("Company: {company}"))
        .unwrap_or_else(|_| "Company: unknown".to_string())
}

/// The locals are read when the future runs, not when it is built, so the
/// same body under two scopes produces two answers.
async fn one_future_two_scopes() {
    let first = COMPANY.scope("Apple".to_string(), company_line()).await;
    info!(message = %first, run = 1, "# onNext");

    let second = COMPANY.scope("Microsoft".to_string(), company_line()).await;
    info!(message = %second, run = 2, "# onNext");
}

/// A role scoped around an inner future exists only there. Back in the
/// outer chain the read fails, which is exactly the isolation you want
/// for per-stage context.
async fn inner_scopes_stay_inner() {
    COMPANY
        .scope("Apple".to_string(), async {
            ROLE.scope("CEO".to_string(), async {
                let company = COMPANY.with(|company| company.clone());
                let role = ROLE.with(|role| role.clone());
                info!(%company, %role, "# Inside the inner scope");
            })
            .await;

            match ROLE.try_with(|role| role.clone()) {
                Ok(role) => info!(%role, "# Role leaked out, this should not happen"),
                Err(_) => info!("# Outside the inner scope the role is gone"),
            }
        })
        .await;
}

/// `tokio::spawn` starts a fresh task with no scope. Handing the value
/// over means wrapping the spawned future in a scope of its own.
async fn spawned_tasks_get_handed_a_scope() -> Result<(), String> {
    COMPANY
        .scope("Apple".to_string(), async {
            let bare = tokio::spawn(async { COMPANY.try_with(|company| company.clone()).ok() })
                .await
                .map_err(|e| e.to_string())?;
            info!(read = ?bare, "# A spawned task does not inherit the scope");

            let company = COMPANY.with(|company| company.clone());
            let handed = tokio::spawn(COMPANY.scope(company, async {
                COMPANY.with(|company| company.clone())
            }))
            .await
            .map_err(|e| e.to_string())?;
            info!(read = %handed, "# Wrapping the spawned future in its own scope");
            Ok(())
        })
        .await
}

/// Combines a fetched payload with the scoped token.
async fn post_book(book: impl Future<Output = (String, String)>) -> String {
    let ((name, author), token) =
        tokio::join!(book, async { AUTH_TOKEN.with(|token| token.clone()) });
    format!("POST the book({name}, {author}) with token: {token}")
}

/// The payload comes from the chain, the credential from the context.
/// Business code never sees the token travel.
async fn auth_token() {
    let line = AUTH_TOKEN
        .scope(
            "eyJhbGci0i".to_string(),
            post_book(async { ("The Streams Bible".to_string(), "Kevin".to_string()) }),
        )
        .await;
    info!(%line, "# onNext");
}
